// © 2025-2026 the Formwright Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::element::{ElementType, FormElement};

/// Reattaches previously submitted answers to the elements of a form template.
///
/// Each template element is matched against the first prior element with the same question and type. On a
/// match, the prior element's options and value replace the template's (and, for dropdowns, its selected
/// value). Unmatched template elements come through untouched, so the result always has the template's
/// elements in the template's order. Prior elements that match nothing are dropped.
pub fn merge_form_elements(
	template_elements: &[FormElement],
	prior_elements: Option<&[FormElement]>,
) -> Vec<FormElement> {
	let prior_elements = prior_elements.unwrap_or_default();

	template_elements
		.iter()
		.map(|template_element| {
			let mut merged = template_element.clone();
			if let Some(prior) = prior_match(template_element, prior_elements) {
				merged.options = prior.options.clone();
				merged.value = prior.value.clone();
				if template_element.element_type == Some(ElementType::Dropdown) {
					merged.selected_value = prior.selected_value.clone();
				}
			}
			merged
		})
		.collect()
}

/// Counts the template elements that [merge_form_elements] would fill from the prior elements.
pub fn count_matched_elements(template_elements: &[FormElement], prior_elements: Option<&[FormElement]>) -> usize {
	let prior_elements = prior_elements.unwrap_or_default();
	template_elements
		.iter()
		.filter(|template_element| prior_match(template_element, prior_elements).is_some())
		.count()
}

fn prior_match<'a>(template_element: &FormElement, prior_elements: &'a [FormElement]) -> Option<&'a FormElement> {
	let key = template_element.match_key()?;
	prior_elements
		.iter()
		.find(|prior_element| prior_element.match_key() == Some(key))
}
