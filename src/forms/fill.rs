// © 2025-2026 the Formwright Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::autofill::AutofilledForm;
use super::element::{ElementType, FormElement};
use chrono::{DateTime, Utc};

/// The answers being entered on the fill-in page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FillState {
	pub form_name: String,
	pub elements: Vec<FormElement>,
	pub prior_submitted_at: Option<DateTime<Utc>>,
	pub errors: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FillAction {
	Load(AutofilledForm),
	SetText { element: usize, value: String },
	/// An empty value clears the selection.
	SelectDropdown { element: usize, value: String },
	SetChecked { element: usize, option: usize, checked: bool },
	SelectRadio { element: usize, option: usize },
	SetErrors(Vec<String>),
}

impl FillState {
	/// Produces the state that results from applying an action.
	/// Actions aimed at a missing element, or at an element of a different type, leave the state as it was.
	pub fn reduce(mut self, action: FillAction) -> Self {
		match action {
			FillAction::Load(form) => {
				return Self {
					form_name: form.form_name,
					elements: form.elements,
					prior_submitted_at: form.prior_submitted_at,
					errors: Vec::new(),
				};
			}
			FillAction::SetText { element, value } => {
				if let Some(element) = self.element_of_type(element, ElementType::Textbox) {
					element.value = Some(value);
				}
			}
			FillAction::SelectDropdown { element, value } => {
				if let Some(element) = self.element_of_type(element, ElementType::Dropdown) {
					element.selected_value = if value.is_empty() { None } else { Some(value) };
				}
			}
			FillAction::SetChecked { element, option, checked } => {
				if let Some(option) = self
					.element_of_type(element, ElementType::Checkbox)
					.and_then(|element| element.options.get_mut(option))
				{
					option.is_checked = checked;
				}
			}
			FillAction::SelectRadio { element, option } => {
				if let Some(element) = self.element_of_type(element, ElementType::Radiobutton) {
					if option < element.options.len() {
						for (index, radio_option) in element.options.iter_mut().enumerate() {
							radio_option.is_checked = index == option;
						}
					}
				}
			}
			FillAction::SetErrors(errors) => self.errors = errors,
		}
		self
	}

	fn element_of_type(&mut self, index: usize, element_type: ElementType) -> Option<&mut FormElement> {
		self.elements
			.get_mut(index)
			.filter(|element| element.element_type == Some(element_type))
	}
}
