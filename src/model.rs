// © 2025-2026 the Formwright Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::forms::element::{FormRecord, decode_form_elements};
use crate::schema::{form_instances, form_templates};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// The database representation of a published form template, the canonical question set for a form.
/// Publishing a form again inserts a new row rather than changing an existing one.
#[derive(Insertable, Queryable)]
#[diesel(table_name = form_templates)]
pub struct FormTemplate {
	/// Template's ID
	pub id: String,
	/// The name under which the form is published
	pub form_name: String,
	/// The form's elements, as a JSON array.
	///
	/// To get decoded elements more easily, use [Self::into_record].
	pub form_elements: Value,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

impl FormTemplate {
	/// Converts the row into the transport representation, decoding its elements.
	pub fn into_record(self) -> FormRecord {
		FormRecord {
			elements: decode_form_elements(&self.form_elements),
			id: self.id,
			form_name: self.form_name,
			created_at: self.created_at,
		}
	}
}

/// The database representation of a submitted, filled-in form
#[derive(Insertable, Queryable)]
#[diesel(table_name = form_instances)]
pub struct FormInstance {
	/// Submission's ID
	pub id: String,
	/// The name of the form that was filled in
	pub form_name: String,
	/// The submitted elements with their answers, as a JSON array.
	///
	/// To get decoded elements more easily, use [Self::into_record].
	pub form_elements: Value,
	pub created_at: DateTime<Utc>,
}

impl FormInstance {
	/// Converts the row into the transport representation, decoding its elements.
	pub fn into_record(self) -> FormRecord {
		FormRecord {
			elements: decode_form_elements(&self.form_elements),
			id: self.id,
			form_name: self.form_name,
			created_at: self.created_at,
		}
	}
}
