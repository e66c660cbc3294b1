//! Attribute serialization round trips through the test parser

use formcraft_forms::{AttrValue, Attributes, serialize};
use formcraft_test::{ParsedAttr, parse_attributes};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
fn test_round_trip_drops_absent_values() {
	let attrs = Attributes::new()
		.with("class", "btn")
		.with("disabled", true)
		.with("title", None::<String>);

	let parsed = parse_attributes(&serialize(&attrs));

	assert_eq!(parsed.len(), 2);
	assert_eq!(parsed["class"], ParsedAttr::Text("btn".to_string()));
	assert_eq!(parsed["disabled"], ParsedAttr::Flag);
	assert!(!parsed.contains_key("title"));
}

fn attribute_name() -> impl Strategy<Value = String> {
	"[a-z][a-z0-9-]{0,8}"
}

fn attribute_value() -> impl Strategy<Value = AttrValue> {
	prop_oneof![
		"[ -~\n\r]{0,16}".prop_map(AttrValue::Text),
		any::<bool>().prop_map(AttrValue::Flag),
		Just(AttrValue::Absent),
	]
}

proptest! {
	#[test]
	fn test_serialized_attributes_parse_back(
		entries in proptest::collection::vec((attribute_name(), attribute_value()), 0..6)
	) {
		let attrs: Attributes = entries.into_iter().collect();
		let parsed = parse_attributes(&serialize(&attrs));

		let expected: Vec<(String, ParsedAttr)> = attrs
			.iter()
			.filter_map(|(name, value)| match value {
				AttrValue::Text(text) => Some((name.to_string(), ParsedAttr::Text(text.clone()))),
				AttrValue::Flag(true) => Some((name.to_string(), ParsedAttr::Flag)),
				_ => None,
			})
			.collect();
		let actual: Vec<(String, ParsedAttr)> = parsed.into_iter().collect();

		prop_assert_eq!(actual, expected);
	}
}
