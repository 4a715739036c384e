// © 2025-2026 the Formwright Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::element::FormElement;
use super::merge::{count_matched_elements, merge_form_elements};
use super::store::{FormStore, StoreError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A form template with the user's last answers filled back in
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AutofilledForm {
	pub form_name: String,
	pub elements: Vec<FormElement>,
	/// When the submission the answers came from was made, if there was one
	pub prior_submitted_at: Option<DateTime<Utc>>,
}

/// Loads the latest template (optionally by name) and fills it from the most recent submission of that form.
///
/// Returns `Ok(None)` when no matching template has been published. Storage failures from either lookup are
/// returned as-is; nothing is merged in that case.
pub fn autofill_form(store: &impl FormStore, form_name: Option<&str>) -> Result<Option<AutofilledForm>, StoreError> {
	let Some(template) = store.latest_template(form_name)? else {
		return Ok(None);
	};
	let prior = store.prior_instance(&template.form_name)?;

	let prior_elements = prior.as_ref().map(|prior| prior.elements.as_slice());
	let elements = merge_form_elements(&template.elements, prior_elements);

	tracing::debug!(
		form_name = %template.form_name,
		template = %template.id,
		prior = ?prior.as_ref().map(|prior| &prior.id),
		elements = elements.len(),
		matched = count_matched_elements(&template.elements, prior_elements),
		"Autofilled form"
	);

	Ok(Some(AutofilledForm {
		form_name: template.form_name,
		elements,
		prior_submitted_at: prior.map(|prior| prior.created_at),
	}))
}
