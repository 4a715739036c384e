// © 2025-2026 the Formwright Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::element::{ElementType, FormElement, FormOption};

/// The editing state of the form builder page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BuilderState {
	pub form_name: String,
	/// The element type picked to be added next
	pub selected_element: Option<ElementType>,
	pub elements: Vec<FormElement>,
	pub errors: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BuilderAction {
	SetFormName(String),
	SelectElement(Option<ElementType>),
	AddElement,
	SetQuestion { element: usize, question: String },
	SetOptionLabel { element: usize, option: usize, label: String },
	/// Inserts a blank option directly after the given one
	AddOption { element: usize, after: usize },
	RemoveOption { element: usize, option: usize },
	SetErrors(Vec<String>),
}

impl BuilderState {
	/// Produces the state that results from applying an action.
	/// Actions that refer to elements or options that don't exist leave the state as it was.
	pub fn reduce(mut self, action: BuilderAction) -> Self {
		match action {
			BuilderAction::SetFormName(form_name) => self.form_name = form_name,
			BuilderAction::SelectElement(element_type) => self.selected_element = element_type,
			BuilderAction::AddElement => {
				if let Some(element_type) = self.selected_element.take() {
					self.elements.push(FormElement::new(element_type));
				}
			}
			BuilderAction::SetQuestion { element, question } => {
				if let Some(element) = self.elements.get_mut(element) {
					element.question = Some(question);
				}
			}
			BuilderAction::SetOptionLabel { element, option, label } => {
				if let Some(option) = self
					.elements
					.get_mut(element)
					.and_then(|element| element.options.get_mut(option))
				{
					option.label = label;
				}
			}
			BuilderAction::AddOption { element, after } => {
				if let Some(element) = self.option_element(element) {
					if after < element.options.len() {
						element.options.insert(after + 1, FormOption::default());
					}
				}
			}
			BuilderAction::RemoveOption { element, option } => {
				if let Some(element) = self.option_element(element) {
					if element.options.len() > 1 && option < element.options.len() {
						element.options.remove(option);
					}
				}
			}
			BuilderAction::SetErrors(errors) => self.errors = errors,
		}
		self
	}

	/// Checks the form as it would be published; see [validate_template].
	pub fn validate(&self) -> Vec<String> {
		validate_template(&self.form_name, &self.elements)
	}

	fn option_element(&mut self, index: usize) -> Option<&mut FormElement> {
		self.elements
			.get_mut(index)
			.filter(|element| element.element_type.is_some_and(|element_type| element_type.has_options()))
	}
}

/// Gets the problems that prevent a template from being published. An empty list means it's fine.
pub fn validate_template(form_name: &str, elements: &[FormElement]) -> Vec<String> {
	let mut errors = Vec::new();
	if form_name.trim().is_empty() {
		errors.push(String::from("Form name cannot be empty"));
	}
	if elements.is_empty() {
		errors.push(String::from("Form must have questions"));
	}
	if elements
		.iter()
		.any(|element| element.question.as_deref().is_none_or(|question| question.trim().is_empty()))
	{
		errors.push(String::from("All questions must have prompt text"));
	}
	errors
}
