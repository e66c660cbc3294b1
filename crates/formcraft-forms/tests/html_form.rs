//! Full form rendering: field parsing, button rows, options and errors

use formcraft_forms::{
	ButtonSlot, FieldConfig, FieldEntry, FormError, FormOptions, HtmlForm, HtmlFormOptions,
	ValidationErrors,
};
use formcraft_test::{ParsedAttr, count_occurrences, hidden_fields, html_form, tag_attributes};
use indexmap::IndexMap;
use rstest::rstest;
use serde_json::json;

fn field_list(names: &[&str]) -> Vec<FieldEntry> {
	names
		.iter()
		.map(|name| IndexMap::from([(name.to_string(), FieldConfig::new("text"))]))
		.collect()
}

#[rstest]
fn test_disable_before_parse_disables_every_field(html_form: HtmlForm) {
	let fields = html_form
		.disable()
		.parse_fields(field_list(&["title", "body", "slug"]))
		.unwrap();

	assert_eq!(fields.len(), 3);
	for config in fields.values() {
		assert_eq!(config.attributes.get("disabled").map(String::as_str), Some("disabled"));
	}
}

#[rstest]
fn test_disable_after_parse_does_not_touch_parsed_fields(html_form: HtmlForm) {
	let fields = html_form
		.parse_fields(field_list(&["title", "body", "slug"]))
		.unwrap();
	let _disabled = html_form.disable();

	assert!(fields.values().all(|config| !config.attributes.contains_key("disabled")));
}

#[rstest]
fn test_parsing_twice_is_idempotent(html_form: HtmlForm) {
	let html_form = html_form.disable();
	let first = html_form.parse_fields(field_list(&["a", "b"])).unwrap();
	let second = html_form
		.parse_fields(
			first
				.clone()
				.into_iter()
				.map(|(name, config)| IndexMap::from([(name, config)]))
				.collect(),
		)
		.unwrap();

	assert_eq!(first, second);
}

#[rstest]
fn test_empty_field_list_fails_without_markup(html_form: HtmlForm) {
	let err = html_form
		.render(&FormOptions::default(), Vec::new())
		.unwrap_err();
	assert!(matches!(err, FormError::InvalidFieldSet(_)));
}

#[rstest]
fn test_render_order(html_form: HtmlForm) {
	let html = html_form
		.with_model(json!({"title": "Hello"}))
		.render(
			&FormOptions::builder().method("patch").route("posts.update").build(),
			field_list(&["title", "body"]),
		)
		.unwrap();

	let token_at = html.find(r#"name="_token""#).unwrap();
	let title_at = html.find(r#"name="title""#).unwrap();
	let body_at = html.find(r#"name="body""#).unwrap();
	let row_at = html.find(r#"<div class="row">"#).unwrap();

	assert!(html.find(r#"name="_method""#).unwrap() < token_at);
	assert!(token_at < title_at && title_at < body_at && body_at < row_at);
	assert!(html.contains(r#"value="Hello""#));
	assert!(html.ends_with("</div></div></form>"));
	assert_eq!(count_occurrences(&html, "<form"), 1);
}

#[rstest]
fn test_disabled_form_renders_no_button_row(html_form: HtmlForm) {
	let html = html_form
		.card(true)
		.button("cancel", ButtonSlot::link("Cancel", "/posts"))
		.disabled_when(|| true)
		.render(&FormOptions::default(), field_list(&["title"]))
		.unwrap();

	assert!(!html.contains("<button"));
	assert!(!html.contains("card-footer"));
	assert!(!html.contains("Cancel"));
	assert!(html.ends_with(r#"disabled="disabled"></div></form>"#));
}

#[rstest]
fn test_errors_reach_the_field_renderer(html_form: HtmlForm) {
	let errors: ValidationErrors = [("body", "The body is required.")].into_iter().collect();
	let html = html_form
		.with_errors(errors)
		.render(&FormOptions::default(), field_list(&["title", "body"]))
		.unwrap();

	assert_eq!(count_occurrences(&html, "invalid-feedback"), 1);
	assert!(html.contains(r#"<div class="invalid-feedback">The body is required.</div>"#));
}

#[rstest]
fn test_files_and_class_from_instance(html_form: HtmlForm) {
	let html = html_form
		.with_files(true)
		.form_class("form-horizontal")
		.render(&FormOptions::default(), field_list(&["avatar"]))
		.unwrap();

	let attrs = tag_attributes(&html, "form").unwrap();
	assert_eq!(attrs["class"], ParsedAttr::Text("form-horizontal".to_string()));
	assert_eq!(attrs["enctype"], ParsedAttr::Text("multipart/form-data".to_string()));
}

#[rstest]
fn test_options_loaded_from_json(html_form: HtmlForm) {
	let options: HtmlFormOptions = serde_json::from_value(json!({
		"disable_on_submit": true,
		"buttons": {
			"submit": {"label": "Publish", "class": "btn btn-success"},
			"cancel": {"label": "Back", "href": "posts"}
		}
	}))
	.unwrap();

	let html = html_form
		.set_options(options)
		.render(&FormOptions::default(), field_list(&["title"]))
		.unwrap();

	assert!(html.contains(r#"<div class="col-md-12 d-flex justify-content-between">"#));
	assert!(html.contains(r#"<a href="/posts" class="btn btn-secondary">Back</a>"#));
	assert!(html.contains(r#"<button class="btn btn-success" type="submit" onclick="this.innerHTML"#));
	assert!(html.contains(">Publish</button>"));
}

#[rstest]
fn test_labeled_edit_and_delete_render_as_links(html_form: HtmlForm) {
	let html = html_form
		.button_label("edit", Some("Edit"))
		.button_label("delete", Some("Delete"))
		.button_link("delete", "/posts/1/delete")
		.render(&FormOptions::default(), field_list(&["title"]))
		.unwrap();

	let edit_at = html.find(r#"<a href="/" class="btn btn-outline-primary">Edit</a>"#).unwrap();
	let delete_at = html
		.find(r#"<a href="/posts/1/delete" class="btn btn-danger">Delete</a>"#)
		.unwrap();
	assert!(edit_at < delete_at && delete_at < html.find("<button").unwrap());
}

#[rstest]
fn test_get_form_has_no_hidden_fields(html_form: HtmlForm) {
	let html = html_form
		.render(
			&FormOptions::builder().method("get").build(),
			field_list(&["q"]),
		)
		.unwrap();

	assert!(hidden_fields(&html).is_empty());
}

#[rstest]
fn test_full_form_snapshot(html_form: HtmlForm) {
	let html = html_form
		.card(true)
		.button("cancel", ButtonSlot::link("Cancel", "/posts"))
		.render(
			&FormOptions::builder().route("posts.store").build(),
			vec![IndexMap::from([(
				"title".to_string(),
				FieldConfig::new("text").label("Title"),
			)])],
		)
		.unwrap();

	insta::assert_snapshot!(html, @r#"<form method="POST" action="/posts" accept-charset="UTF-8" class="form" id="testform01"><input type="hidden" name="_token" value="test-token"><div class="form-group"><label for="title">Title</label><input type="text" name="title" id="title"></div><div class="card-footer"><div class="row"><div class="col-md-12 d-flex justify-content-between"><a href="/posts" class="btn btn-secondary">Cancel</a><button class="btn btn-primary" type="submit">Submit</button></div></div></div></form>"#);
}
