//! Trailing button row of a full form

use crate::attributes::{Attributes, escape_javascript};
use crate::error::FormResult;
use crate::form::ConfirmSpec;
use crate::markup::{Fragment, Markup};
use crate::widget::FieldRenderer;
use formcraft_conf::RenderConfig;
use formcraft_urls::UrlResolver;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Slot names with built-in meaning
pub const RESERVED_SLOTS: [&str; 4] = ["submit", "edit", "delete", "cancel"];

/// One button slot: a slot without a label is not rendered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonSlot {
	/// Trusted markup
	pub label: Option<String>,
	/// Overrides the configured class of the slot
	pub class: Option<String>,
	pub href: Option<String>,
}

impl ButtonSlot {
	pub fn labeled(label: impl Into<String>) -> Self {
		Self {
			label: Some(label.into()),
			..Self::default()
		}
	}

	pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
		Self {
			label: Some(label.into()),
			class: None,
			href: Some(href.into()),
		}
	}

	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}
}

/// Button slots of a form, reserved slots first, custom slots in insertion order
///
/// # Examples
///
/// ```
/// use formcraft_forms::{ButtonSlot, ButtonSpec};
///
/// let buttons = ButtonSpec::default()
///     .slot("cancel", ButtonSlot::link("Cancel", "/posts"))
///     .slot("preview", ButtonSlot::link("Preview", "/posts/preview"));
///
/// assert_eq!(buttons.label("submit"), Some("Submit"));
/// assert_eq!(buttons.custom_slots().map(|(name, _)| name).collect::<Vec<_>>(), ["preview"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ButtonSpec {
	slots: IndexMap<String, ButtonSlot>,
}

impl Default for ButtonSpec {
	fn default() -> Self {
		let mut slots = IndexMap::new();
		slots.insert("submit".to_string(), ButtonSlot::labeled("Submit"));
		for slot in ["edit", "delete", "cancel"] {
			slots.insert(slot.to_string(), ButtonSlot::default());
		}
		Self { slots }
	}
}

impl ButtonSpec {
	/// Spec with no slots at all
	pub fn empty() -> Self {
		Self {
			slots: IndexMap::new(),
		}
	}

	pub fn is_reserved(slot: &str) -> bool {
		RESERVED_SLOTS.contains(&slot)
	}

	/// Set or replace a slot
	pub fn slot(mut self, name: impl Into<String>, slot: ButtonSlot) -> Self {
		self.set(name, slot);
		self
	}

	pub fn set(&mut self, name: impl Into<String>, slot: ButtonSlot) {
		self.slots.insert(name.into(), slot);
	}

	pub fn get(&self, name: &str) -> Option<&ButtonSlot> {
		self.slots.get(name)
	}

	fn entry(&mut self, name: &str) -> &mut ButtonSlot {
		self.slots.entry(name.to_string()).or_default()
	}

	pub fn set_label(&mut self, name: &str, label: Option<String>) {
		self.entry(name).label = label;
	}

	pub fn set_class(&mut self, name: &str, class: impl Into<String>) {
		self.entry(name).class = Some(class.into());
	}

	pub fn set_href(&mut self, name: &str, href: impl Into<String>) {
		self.entry(name).href = Some(href.into());
	}

	/// Merge slots from `other`; populated fields of `other` win
	pub fn merge(&mut self, other: ButtonSpec) {
		for (name, slot) in other.slots {
			let current = self.entry(&name);
			if slot.label.is_some() {
				current.label = slot.label;
			}
			if slot.class.is_some() {
				current.class = slot.class;
			}
			if slot.href.is_some() {
				current.href = slot.href;
			}
		}
	}

	pub fn label(&self, name: &str) -> Option<&str> {
		self.get(name)?.label.as_deref()
	}

	/// Non-reserved slots, in insertion order
	pub fn custom_slots(&self) -> impl Iterator<Item = (&str, &ButtonSlot)> {
		self.slots
			.iter()
			.filter(|(name, _)| !Self::is_reserved(name))
			.map(|(name, slot)| (name.as_str(), slot))
	}

	/// Class of a slot: its own, else the configured one for reserved slots
	pub fn class_for<'a>(&'a self, name: &str, config: &'a RenderConfig) -> Option<&'a str> {
		self.get(name)
			.and_then(|slot| slot.class.as_deref())
			.or_else(|| config.button_class(name))
	}
}

/// Which submit button the row ends with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
	/// Plain button calling a client-side handler
	Handler,
	/// Native `type="submit"` button
	Native,
	/// No submit button
	None,
}

/// Assembles the trailing button row and the closing tag
#[derive(Debug, Clone)]
pub struct ButtonRow<'a> {
	pub buttons: &'a ButtonSpec,
	pub config: &'a RenderConfig,
	pub disabled: bool,
	pub card: bool,
	pub disable_on_submit: bool,
	pub submit_handler: Option<&'a str>,
	pub confirm: Option<&'a ConfirmSpec>,
}

impl<'a> ButtonRow<'a> {
	pub fn new(buttons: &'a ButtonSpec, config: &'a RenderConfig) -> Self {
		Self {
			buttons,
			config,
			disabled: false,
			card: false,
			disable_on_submit: false,
			submit_handler: None,
			confirm: None,
		}
	}

	pub fn submit_mode(&self) -> SubmitMode {
		if self.submit_handler.is_some() {
			SubmitMode::Handler
		} else if self.buttons.label("submit").is_some() {
			SubmitMode::Native
		} else {
			SubmitMode::None
		}
	}

	fn alignment(&self) -> &str {
		if self.buttons.label("cancel").is_some() {
			&self.config.row_alignment_between
		} else {
			&self.config.row_alignment_end
		}
	}

	fn link(&self, name: &str, slot: &ButtonSlot, urls: &dyn UrlResolver) -> FormResult<Option<Fragment>> {
		let Some(label) = &slot.label else {
			return Ok(None);
		};
		let href = urls.to(slot.href.as_deref().unwrap_or_default(), &[])?;
		Ok(Some(Fragment::Link {
			href,
			label: label.clone(),
			class: self.buttons.class_for(name, self.config).map(str::to_string),
		}))
	}

	/// Row fragments followed by `</form>`; a disabled form gets the closing
	/// tag only
	pub fn fragments(&self, urls: &dyn UrlResolver) -> FormResult<Markup> {
		let mut markup = Markup::new();
		if self.disabled {
			markup.push(Fragment::Close("form"));
			return Ok(markup);
		}

		if self.card {
			markup.push(Fragment::div(self.config.card_footer.clone()));
		}
		markup
			.push(Fragment::div(self.config.button_row.clone()))
			.push(Fragment::div(format!(
				"{} {}",
				self.config.button_column,
				self.alignment()
			)));

		for (name, slot) in self.buttons.custom_slots() {
			markup.extend(self.link(name, slot, urls)?);
		}
		for name in ["edit", "delete", "cancel"] {
			if let Some(slot) = self.buttons.get(name) {
				markup.extend(self.link(name, slot, urls)?);
			}
		}

		let mode = self.submit_mode();
		tracing::trace!(?mode, card = self.card, "building button row");
		if let Some(button) = self.submit_button(mode) {
			markup.push(button);
		}

		markup.push(Fragment::Close("div")).push(Fragment::Close("div"));
		if self.card {
			markup.push(Fragment::Close("div"));
		}
		markup.push(Fragment::Close("form"));
		Ok(markup)
	}

	fn submit_button(&self, mode: SubmitMode) -> Option<Fragment> {
		let label = self.buttons.label("submit").unwrap_or_default();
		let mut attrs = Attributes::new().with("class", self.buttons.class_for("submit", self.config));

		match mode {
			SubmitMode::Handler => {
				let handler = self.submit_handler.unwrap_or_default();
				attrs.insert("onclick", format!("{}(event)", handler));
			}
			SubmitMode::Native => {
				attrs.insert("type", "submit");
				let spinner = self.disable_on_submit.then(|| {
					let processing = format!("{} {}", self.config.spinner, label);
					format!(
						"this.innerHTML = '{}'; this.disabled = true; this.form.submit();",
						escape_javascript(&processing)
					)
				});
				let onclick = match (self.confirm, spinner) {
					(Some(confirm), Some(spinner)) => Some(format!("{} {}", confirm.guard(), spinner)),
					(Some(confirm), None) => Some(confirm.onclick()),
					(None, spinner) => spinner,
				};
				if let Some(onclick) = onclick {
					attrs.insert("onclick", onclick);
				}
			}
			SubmitMode::None => return None,
		}

		Some(Fragment::button(label, attrs))
	}

	pub fn build(&self, urls: &dyn UrlResolver, renderer: &dyn FieldRenderer) -> FormResult<String> {
		Ok(self.fragments(urls)?.render(renderer))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::widget::BasicFieldRenderer;
	use formcraft_urls::UrlReverser;
	use rstest::{fixture, rstest};

	#[fixture]
	fn urls() -> UrlReverser {
		UrlReverser::new()
	}

	#[fixture]
	fn config() -> RenderConfig {
		RenderConfig::default()
	}

	#[rstest]
	fn test_default_row(urls: UrlReverser, config: RenderConfig) {
		let buttons = ButtonSpec::default();
		let html = ButtonRow::new(&buttons, &config)
			.build(&urls, &BasicFieldRenderer)
			.unwrap();

		assert_eq!(
			html,
			concat!(
				r#"<div class="row"><div class="col-md-12 d-flex justify-content-end">"#,
				r#"<button class="btn btn-primary" type="submit">Submit</button>"#,
				r#"</div></div></form>"#
			)
		);
	}

	#[rstest]
	fn test_disabled_row_is_close_tag_only(urls: UrlReverser, config: RenderConfig) {
		let buttons = ButtonSpec::default().slot("cancel", ButtonSlot::link("Cancel", "/"));
		let mut row = ButtonRow::new(&buttons, &config);
		row.disabled = true;
		row.card = true;

		assert_eq!(row.build(&urls, &BasicFieldRenderer).unwrap(), "</form>");
	}

	#[rstest]
	fn test_link_order_and_between_alignment(urls: UrlReverser, config: RenderConfig) {
		let buttons = ButtonSpec::default()
			.slot("cancel", ButtonSlot::link("Cancel", "/posts"))
			.slot("delete", ButtonSlot::link("Delete", "/posts/1/delete"))
			.slot("edit", ButtonSlot::labeled("Edit"))
			.slot("preview", ButtonSlot::link("Preview", "preview").class("btn btn-info"))
			.slot("hidden", ButtonSlot::default());

		let html = ButtonRow::new(&buttons, &config)
			.build(&urls, &BasicFieldRenderer)
			.unwrap();

		assert_eq!(
			html,
			concat!(
				r#"<div class="row"><div class="col-md-12 d-flex justify-content-between">"#,
				r#"<a href="/preview" class="btn btn-info">Preview</a>"#,
				r#"<a href="/" class="btn btn-outline-primary">Edit</a>"#,
				r#"<a href="/posts/1/delete" class="btn btn-danger">Delete</a>"#,
				r#"<a href="/posts" class="btn btn-secondary">Cancel</a>"#,
				r#"<button class="btn btn-primary" type="submit">Submit</button>"#,
				r#"</div></div></form>"#
			)
		);
	}

	#[rstest]
	fn test_card_footer_wraps_row(urls: UrlReverser, config: RenderConfig) {
		let buttons = ButtonSpec::default();
		let mut row = ButtonRow::new(&buttons, &config);
		row.card = true;

		let html = row.build(&urls, &BasicFieldRenderer).unwrap();
		assert!(html.starts_with(r#"<div class="card-footer"><div class="row">"#));
		assert!(html.ends_with("</div></div></div></form>"));
	}

	#[rstest]
	fn test_handler_mode_has_no_submit_type(urls: UrlReverser, config: RenderConfig) {
		let buttons = ButtonSpec::default();
		let mut row = ButtonRow::new(&buttons, &config);
		row.submit_handler = Some("saveDraft");
		row.disable_on_submit = true;

		assert_eq!(row.submit_mode(), SubmitMode::Handler);
		let html = row.build(&urls, &BasicFieldRenderer).unwrap();
		assert!(html.contains(r#"<button class="btn btn-primary" onclick="saveDraft(event)">Submit</button>"#));
	}

	#[rstest]
	fn test_disable_on_submit_spinner(urls: UrlReverser, config: RenderConfig) {
		let buttons = ButtonSpec::default();
		let mut row = ButtonRow::new(&buttons, &config);
		row.disable_on_submit = true;

		let html = row.build(&urls, &BasicFieldRenderer).unwrap();
		assert!(html.contains(concat!(
			r#"type="submit" onclick="this.innerHTML = '\x3Ci class=\&quot;fas fa-circle-notch fa-spin mr-2\&quot;\x3E\x3C/i\x3E Submit'; "#,
			r#"this.disabled = true; this.form.submit();""#
		)));
	}

	#[rstest]
	fn test_confirm_guards_disable_on_submit(urls: UrlReverser, config: RenderConfig) {
		let buttons = ButtonSpec::default();
		let confirm = ConfirmSpec::new("Save?");
		let mut row = ButtonRow::new(&buttons, &config);
		row.confirm = Some(&confirm);
		row.disable_on_submit = true;

		let html = row.build(&urls, &BasicFieldRenderer).unwrap();
		assert!(html.contains(r#"type="submit" onclick="if (!confirm('Save?')) return false; this.innerHTML = "#));
		assert!(html.contains("this.disabled = true; this.form.submit();"));
	}

	#[rstest]
	fn test_confirm_without_disable_on_submit(urls: UrlReverser, config: RenderConfig) {
		let buttons = ButtonSpec::default();
		let confirm = ConfirmSpec::new("Save?");
		let mut row = ButtonRow::new(&buttons, &config);
		row.confirm = Some(&confirm);

		let html = row.build(&urls, &BasicFieldRenderer).unwrap();
		assert!(html.contains(r#"type="submit" onclick="return confirm('Save?')">Submit</button>"#));
		assert!(!html.contains("this.disabled"));
	}

	#[rstest]
	fn test_no_submit_label_emits_no_button(urls: UrlReverser, config: RenderConfig) {
		let mut buttons = ButtonSpec::default();
		buttons.set_label("submit", None);
		let row = ButtonRow::new(&buttons, &config);

		assert_eq!(row.submit_mode(), SubmitMode::None);
		assert!(!row.build(&urls, &BasicFieldRenderer).unwrap().contains("<button"));
	}

	#[rstest]
	fn test_merge_keeps_unset_fields() {
		let mut buttons = ButtonSpec::default();
		buttons.set_class("submit", "btn-lg");
		buttons.merge(ButtonSpec::empty().slot("submit", ButtonSlot::labeled("Save")));

		let submit = buttons.get("submit").unwrap();
		assert_eq!(submit.label.as_deref(), Some("Save"));
		assert_eq!(submit.class.as_deref(), Some("btn-lg"));
	}
}
