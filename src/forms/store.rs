// © 2025-2026 the Formwright Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::element::{FormElement, FormRecord};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
	/// The backing store couldn't be reached or rejected the operation.
	#[error("form storage is unavailable: {0}")]
	Unavailable(String),
	#[error("form elements could not be encoded for storage")]
	Encode(#[from] serde_json::Error),
}

/// Persistent storage for published form templates and submitted form instances.
///
/// Both kinds of record are append-only: publishing or submitting always creates a new record. A lookup that
/// finds nothing returns `Ok(None)`.
pub trait FormStore {
	/// Gets the most recently published template, limited to templates with the given name if one is provided.
	fn latest_template(&self, form_name: Option<&str>) -> Result<Option<FormRecord>, StoreError>;

	/// Gets the most recent submission for the named form.
	fn prior_instance(&self, form_name: &str) -> Result<Option<FormRecord>, StoreError>;

	fn save_instance(&self, form_name: &str, elements: &[FormElement]) -> Result<FormRecord, StoreError>;

	fn publish_template(&self, form_name: &str, elements: &[FormElement]) -> Result<FormRecord, StoreError>;

	/// Gets all published templates, most recently updated first.
	fn list_templates(&self) -> Result<Vec<FormRecord>, StoreError>;

	/// Gets all submitted instances, newest first.
	fn list_instances(&self) -> Result<Vec<FormRecord>, StoreError>;
}
