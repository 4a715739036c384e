// © 2025-2026 the Formwright Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::element::{FormElement, FormRecord};
use super::store::{FormStore, StoreError};

/// Saves a filled-in form as a new instance.
///
/// Returns `Ok(None)` without writing anything when no template has been published under the form's name.
pub fn submit_form(
	store: &impl FormStore,
	form_name: &str,
	elements: &[FormElement],
) -> Result<Option<FormRecord>, StoreError> {
	if store.latest_template(Some(form_name))?.is_none() {
		tracing::warn!(form_name, "Rejected a submission for a form that was never published");
		return Ok(None);
	}

	let instance = store.save_instance(form_name, elements)?;
	tracing::info!(form_name = %instance.form_name, instance = %instance.id, "Saved filled-in form");
	Ok(Some(instance))
}
