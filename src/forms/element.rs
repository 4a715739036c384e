// © 2025-2026 the Formwright Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// The kind of input a form element renders as
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
	Textbox,
	Dropdown,
	Checkbox,
	Radiobutton,
}

impl ElementType {
	pub const ALL: [ElementType; 4] = [Self::Dropdown, Self::Checkbox, Self::Textbox, Self::Radiobutton];

	/// The identifier used in stored form data and in select box values.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Textbox => "textbox",
			Self::Dropdown => "dropdown",
			Self::Checkbox => "checkbox",
			Self::Radiobutton => "radiobutton",
		}
	}

	/// The human-readable name shown in the form builder.
	pub fn display_name(&self) -> &'static str {
		match self {
			Self::Textbox => "Text Input",
			Self::Dropdown => "Dropdown",
			Self::Checkbox => "Checkbox",
			Self::Radiobutton => "Radio Button",
		}
	}

	/// Whether elements of this type carry a list of options rather than a single text value.
	pub fn has_options(&self) -> bool {
		!matches!(self, Self::Textbox)
	}
}

impl fmt::Display for ElementType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownElementType(pub String);

impl fmt::Display for UnknownElementType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "unknown form element type `{}`", self.0)
	}
}

impl std::error::Error for UnknownElementType {}

impl FromStr for ElementType {
	type Err = UnknownElementType;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|element_type| element_type.as_str() == s)
			.ok_or_else(|| UnknownElementType(s.to_string()))
	}
}

/// One field of a form.
///
/// Every field is optional so that partially-formed stored data still decodes. An element missing its
/// `question` or `type` can't be matched against anything; see [Self::match_key].
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormElement {
	#[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
	pub element_type: Option<ElementType>,
	/// The prompt text. Together with the type, this identifies the element across template versions.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub question: Option<String>,
	/// Entered text, for textboxes
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub value: Option<String>,
	/// The label of the chosen option, for dropdowns
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub selected_value: Option<String>,
	#[serde(default)]
	pub options: Vec<FormOption>,
}

impl FormElement {
	/// Creates a blank element of the given type, as added in the form builder.
	pub fn new(element_type: ElementType) -> Self {
		let (value, options) = if element_type.has_options() {
			(None, vec![FormOption::default()])
		} else {
			(Some(String::new()), Vec::new())
		};
		Self {
			element_type: Some(element_type),
			question: Some(String::new()),
			value,
			selected_value: None,
			options,
		}
	}

	/// The (question, type) pair used to match this element against another version of the same form.
	/// Returns `None` when either half is missing.
	pub fn match_key(&self) -> Option<(&str, ElementType)> {
		match (self.question.as_deref(), self.element_type) {
			(Some(question), Some(element_type)) => Some((question, element_type)),
			_ => None,
		}
	}
}

/// A choice on a dropdown, checkbox, or radio button element
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FormOption {
	#[serde(default)]
	pub label: String,
	#[serde(rename = "isChecked", alias = "selected", default)]
	pub is_checked: bool,
}

impl FormOption {
	pub fn new(label: impl Into<String>, is_checked: bool) -> Self {
		Self {
			label: label.into(),
			is_checked,
		}
	}
}

/// A stored form, either a published template or a submitted instance
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FormRecord {
	pub id: String,
	pub form_name: String,
	pub elements: Vec<FormElement>,
	pub created_at: DateTime<Utc>,
}

/// Decodes the stored JSON representation of a form's elements.
///
/// Decoding never fails as a whole. Each field is read on its own, so a quirk in one field (an unknown type,
/// a `null` label, an option carrying both `isChecked` and `selected`) only loses that field. An entry that
/// isn't an object becomes a blank element with no match key, so the sequence keeps its length; a value that
/// isn't an array decodes as no elements.
pub fn decode_form_elements(stored: &Value) -> Vec<FormElement> {
	let Some(stored_elements) = stored.as_array() else {
		tracing::warn!(stored = %stored, "Stored form elements are not an array");
		return Vec::new();
	};

	stored_elements
		.iter()
		.enumerate()
		.map(|(position, stored_element)| decode_form_element(position, stored_element))
		.collect()
}

fn decode_form_element(position: usize, stored_element: &Value) -> FormElement {
	let Some(fields) = stored_element.as_object() else {
		tracing::warn!(position, "Stored form element is not an object");
		return FormElement::default();
	};

	let element_type = string_field(fields, "type").and_then(|element_type| {
		element_type
			.parse::<ElementType>()
			.inspect_err(|error| tracing::warn!(%error, position, "Stored form element has an unknown type"))
			.ok()
	});
	let options: Vec<FormOption> = fields
		.get("options")
		.and_then(Value::as_array)
		.map(|options| options.iter().map(decode_form_option).collect())
		.unwrap_or_default();

	FormElement {
		element_type,
		question: string_field(fields, "question"),
		value: string_field(fields, "value"),
		selected_value: string_field(fields, "selectedValue"),
		options,
	}
}

fn decode_form_option(stored_option: &Value) -> FormOption {
	let Some(fields) = stored_option.as_object() else {
		return FormOption::default();
	};
	let is_checked = fields
		.get("isChecked")
		.and_then(Value::as_bool)
		.or_else(|| fields.get("selected").and_then(Value::as_bool))
		.unwrap_or_default();

	FormOption {
		label: string_field(fields, "label").unwrap_or_default(),
		is_checked,
	}
}

fn string_field(fields: &Map<String, Value>, name: &str) -> Option<String> {
	fields.get(name).and_then(Value::as_str).map(String::from)
}

/// Encodes a form's elements for storage.
pub fn encode_form_elements(elements: &[FormElement]) -> serde_json::Result<Value> {
	serde_json::to_value(elements)
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use serde_json::json;

	#[test]
	fn decodes_stored_elements() {
		let stored = json!([
			{ "type": "textbox", "question": "Name", "value": "Alice", "options": [] },
			{
				"type": "dropdown",
				"question": "Color",
				"selectedValue": "Blue",
				"options": [{ "label": "Red" }, { "label": "Blue", "isChecked": true }]
			}
		]);

		let elements = decode_form_elements(&stored);

		assert_eq!(
			elements,
			vec![
				FormElement {
					element_type: Some(ElementType::Textbox),
					question: Some(String::from("Name")),
					value: Some(String::from("Alice")),
					selected_value: None,
					options: Vec::new(),
				},
				FormElement {
					element_type: Some(ElementType::Dropdown),
					question: Some(String::from("Color")),
					value: None,
					selected_value: Some(String::from("Blue")),
					options: vec![FormOption::new("Red", false), FormOption::new("Blue", true)],
				},
			]
		);
	}

	#[test]
	fn accepts_selected_as_checked_alias() {
		let stored = json!([
			{ "type": "radiobutton", "question": "Size", "options": [{ "label": "S", "selected": true }] }
		]);

		let elements = decode_form_elements(&stored);

		assert_eq!(elements[0].options, vec![FormOption::new("S", true)]);
	}

	#[test]
	fn malformed_elements_keep_their_position() {
		let stored = json!([
			{ "type": "slider", "question": "Volume" },
			"not an element",
			{ "question": "No type" },
			{ "type": "checkbox", "question": "Agree", "options": [{ "label": "Yes" }] }
		]);

		let elements = decode_form_elements(&stored);

		assert_eq!(elements.len(), 4);
		assert_eq!(elements[0].question.as_deref(), Some("Volume"));
		assert_eq!(elements[0].match_key(), None);
		assert_eq!(elements[1], FormElement::default());
		assert_eq!(elements[2].match_key(), None);
		assert_eq!(elements[3].match_key(), Some(("Agree", ElementType::Checkbox)));
	}

	#[test]
	fn option_quirks_keep_the_element() {
		let stored = json!([
			{
				"type": "checkbox",
				"question": "Agree",
				"options": [
					{ "label": "Yes", "isChecked": true, "selected": false },
					{ "label": null, "selected": true },
					"Maybe"
				]
			},
			{ "type": "textbox", "question": "Name", "value": 42 }
		]);

		let elements = decode_form_elements(&stored);

		assert_eq!(elements[0].match_key(), Some(("Agree", ElementType::Checkbox)));
		assert_eq!(
			elements[0].options,
			vec![FormOption::new("Yes", true), FormOption::new("", true), FormOption::default()]
		);
		assert_eq!(elements[1].match_key(), Some(("Name", ElementType::Textbox)));
		assert_eq!(elements[1].value, None);
	}

	#[test]
	fn non_array_decodes_as_empty() {
		assert!(decode_form_elements(&json!({ "type": "textbox" })).is_empty());
		assert!(decode_form_elements(&Value::Null).is_empty());
	}

	#[test]
	fn encoding_uses_stored_key_names() {
		let mut element = FormElement::new(ElementType::Dropdown);
		element.question = Some(String::from("Color"));
		element.selected_value = Some(String::from("Red"));

		let encoded = encode_form_elements(&[element]).unwrap();

		assert_eq!(
			encoded,
			json!([{
				"type": "dropdown",
				"question": "Color",
				"selectedValue": "Red",
				"options": [{ "label": "", "isChecked": false }]
			}])
		);
	}

	#[test]
	fn element_type_parses_its_own_identifier() {
		for element_type in ElementType::ALL {
			assert_eq!(element_type.as_str().parse::<ElementType>(), Ok(element_type));
		}
		assert!("".parse::<ElementType>().is_err());
	}

	#[test]
	fn new_elements_have_type_specific_defaults() {
		let textbox = FormElement::new(ElementType::Textbox);
		assert_eq!(textbox.value.as_deref(), Some(""));
		assert!(textbox.options.is_empty());

		let checkbox = FormElement::new(ElementType::Checkbox);
		assert_eq!(checkbox.value, None);
		assert_eq!(checkbox.options, vec![FormOption::default()]);
	}
}
