//! Render configuration resolved once per render

use crate::lookup::{ConfigLookup, EmptyConfig};

/// Default CSS class of the submit button
pub const DEFAULT_SUBMIT_CLASS: &str = "btn btn-primary";
/// Default CSS class of the edit button
pub const DEFAULT_EDIT_CLASS: &str = "btn btn-outline-primary";
/// Default CSS class of the delete button
pub const DEFAULT_DELETE_CLASS: &str = "btn btn-danger";
/// Default CSS class of the cancel button
pub const DEFAULT_CANCEL_CLASS: &str = "btn btn-secondary";
/// Default spinner markup shown while a form submits
pub const DEFAULT_SPINNER: &str = r#"<i class="fas fa-circle-notch fa-spin mr-2"></i>"#;

/// Every CSS class and structural fragment the form pipeline needs.
///
/// Built with [`RenderConfig::resolve`] at the start of a render and passed by
/// reference to the assembler, the button row and the modal wrapper, so no
/// component reads configuration on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
	/// `forms.buttons.submit`
	pub submit_class: String,
	/// `forms.buttons.edit`
	pub edit_class: String,
	/// `forms.buttons.delete`
	pub delete_class: String,
	/// `forms.buttons.cancel`
	pub cancel_class: String,
	/// `forms.buttons.spinner`
	pub spinner: String,
	/// `forms.form.class`
	pub form_class: String,
	/// `forms.form.inline-class`
	pub inline_form_class: String,
	/// `forms.form.delete-class`
	pub delete_form_class: String,
	/// `forms.form.sections.row-alignment-end`
	pub row_alignment_end: String,
	/// `forms.form.sections.row-alignment-between`
	pub row_alignment_between: String,
	/// `forms.form.sections.button-row`
	pub button_row: String,
	/// `forms.form.sections.button-column`
	pub button_column: String,
	/// `forms.form.cards.card-footer`
	pub card_footer: String,
}

impl RenderConfig {
	/// Resolve every setting from `lookup`, using built-in defaults for gaps
	///
	/// # Examples
	///
	/// ```
	/// use formcraft_conf::RenderConfig;
	/// use std::collections::HashMap;
	///
	/// let mut overrides = HashMap::new();
	/// overrides.insert("forms.form.cards.card-footer".to_string(), "panel-footer".to_string());
	///
	/// let config = RenderConfig::resolve(&overrides);
	/// assert_eq!(config.card_footer, "panel-footer");
	/// assert_eq!(config.button_row, "row");
	/// ```
	pub fn resolve(lookup: &dyn ConfigLookup) -> Self {
		let config = Self {
			submit_class: lookup.get_or("forms.buttons.submit", DEFAULT_SUBMIT_CLASS),
			edit_class: lookup.get_or("forms.buttons.edit", DEFAULT_EDIT_CLASS),
			delete_class: lookup.get_or("forms.buttons.delete", DEFAULT_DELETE_CLASS),
			cancel_class: lookup.get_or("forms.buttons.cancel", DEFAULT_CANCEL_CLASS),
			spinner: lookup.get_or("forms.buttons.spinner", DEFAULT_SPINNER),
			form_class: lookup.get_or("forms.form.class", "form"),
			inline_form_class: lookup.get_or("forms.form.inline-class", "form d-inline"),
			delete_form_class: lookup.get_or("forms.form.delete-class", "form-inline"),
			row_alignment_end: lookup.get_or(
				"forms.form.sections.row-alignment-end",
				"d-flex justify-content-end",
			),
			row_alignment_between: lookup.get_or(
				"forms.form.sections.row-alignment-between",
				"d-flex justify-content-between",
			),
			button_row: lookup.get_or("forms.form.sections.button-row", "row"),
			button_column: lookup.get_or("forms.form.sections.button-column", "col-md-12"),
			card_footer: lookup.get_or("forms.form.cards.card-footer", "card-footer"),
		};
		tracing::trace!(?config, "resolved render config");
		config
	}

	/// Class configured for a reserved button slot, if `slot` is one
	pub fn button_class(&self, slot: &str) -> Option<&str> {
		match slot {
			"submit" => Some(&self.submit_class),
			"edit" => Some(&self.edit_class),
			"delete" => Some(&self.delete_class),
			"cancel" => Some(&self.cancel_class),
			_ => None,
		}
	}
}

impl Default for RenderConfig {
	fn default() -> Self {
		Self::resolve(&EmptyConfig)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Settings;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let config = RenderConfig::default();

		assert_eq!(config.submit_class, "btn btn-primary");
		assert_eq!(config.inline_form_class, "form d-inline");
		assert_eq!(config.delete_form_class, "form-inline");
		assert_eq!(config.row_alignment_end, "d-flex justify-content-end");
		assert_eq!(config.row_alignment_between, "d-flex justify-content-between");
		assert_eq!(config.button_column, "col-md-12");
		assert_eq!(config.card_footer, "card-footer");
		assert_eq!(config.spinner, DEFAULT_SPINNER);
	}

	#[rstest]
	fn test_resolve_from_settings_tree() {
		let settings = Settings::from_toml_str(
			r#"
			[forms.form]
			inline-class = "inline"

			[forms.form.sections]
			button-column = "col-12"
			"#,
		)
		.unwrap();

		let config = RenderConfig::resolve(&settings);
		assert_eq!(config.inline_form_class, "inline");
		assert_eq!(config.button_column, "col-12");
		assert_eq!(config.form_class, "form");
	}

	#[rstest]
	#[case("submit", Some(DEFAULT_SUBMIT_CLASS))]
	#[case("edit", Some(DEFAULT_EDIT_CLASS))]
	#[case("delete", Some(DEFAULT_DELETE_CLASS))]
	#[case("cancel", Some(DEFAULT_CANCEL_CLASS))]
	#[case("archive", None)]
	fn test_button_class_for_slot(#[case] slot: &str, #[case] expected: Option<&str>) {
		assert_eq!(RenderConfig::default().button_class(slot), expected);
	}
}
