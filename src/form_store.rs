// © 2025-2026 the Formwright Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::database::DbPool;
use crate::forms::element::{FormElement, FormRecord, encode_form_elements};
use crate::forms::store::{FormStore, StoreError};
use crate::model::{FormInstance, FormTemplate};
use crate::schema::{form_instances, form_templates};
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};

/// Form storage backed by the Postgres connection pool.
///
/// Each operation checks a connection out of the pool for its own duration only.
#[derive(Clone, Debug)]
pub struct DatabaseFormStore {
	db_connection_pool: DbPool,
}

impl DatabaseFormStore {
	pub fn new(db_connection_pool: DbPool) -> Self {
		Self { db_connection_pool }
	}

	fn connection(&self) -> Result<PooledConnection<ConnectionManager<PgConnection>>, StoreError> {
		self.db_connection_pool
			.get()
			.map_err(|error| StoreError::Unavailable(format!("Couldn't get database connection: {}", error)))
	}
}

impl From<diesel::result::Error> for StoreError {
	fn from(error: diesel::result::Error) -> Self {
		StoreError::Unavailable(error.to_string())
	}
}

impl FormStore for DatabaseFormStore {
	fn latest_template(&self, form_name: Option<&str>) -> Result<Option<FormRecord>, StoreError> {
		let mut db_connection = self.connection()?;

		let mut query = form_templates::table
			.order((form_templates::updated_at.desc(), form_templates::created_at.desc()))
			.into_boxed();
		if let Some(form_name) = form_name {
			query = query.filter(form_templates::form_name.eq(form_name));
		}
		let template: Option<FormTemplate> = query.first(&mut db_connection).optional()?;

		Ok(template.map(FormTemplate::into_record))
	}

	fn prior_instance(&self, form_name: &str) -> Result<Option<FormRecord>, StoreError> {
		let mut db_connection = self.connection()?;

		let instance: Option<FormInstance> = form_instances::table
			.filter(form_instances::form_name.eq(form_name))
			.order(form_instances::created_at.desc())
			.first(&mut db_connection)
			.optional()?;

		Ok(instance.map(FormInstance::into_record))
	}

	fn save_instance(&self, form_name: &str, elements: &[FormElement]) -> Result<FormRecord, StoreError> {
		let new_instance = FormInstance {
			id: cuid2::create_id(),
			form_name: form_name.to_string(),
			form_elements: encode_form_elements(elements)?,
			created_at: Utc::now(),
		};

		let mut db_connection = self.connection()?;
		diesel::insert_into(form_instances::table)
			.values(&new_instance)
			.execute(&mut db_connection)?;

		Ok(FormRecord {
			id: new_instance.id,
			form_name: new_instance.form_name,
			elements: elements.to_vec(),
			created_at: new_instance.created_at,
		})
	}

	fn publish_template(&self, form_name: &str, elements: &[FormElement]) -> Result<FormRecord, StoreError> {
		let now = Utc::now();
		let new_template = FormTemplate {
			id: cuid2::create_id(),
			form_name: form_name.to_string(),
			form_elements: encode_form_elements(elements)?,
			created_at: now,
			updated_at: now,
		};

		let mut db_connection = self.connection()?;
		diesel::insert_into(form_templates::table)
			.values(&new_template)
			.execute(&mut db_connection)?;

		Ok(FormRecord {
			id: new_template.id,
			form_name: new_template.form_name,
			elements: elements.to_vec(),
			created_at: new_template.created_at,
		})
	}

	fn list_templates(&self) -> Result<Vec<FormRecord>, StoreError> {
		let mut db_connection = self.connection()?;

		let templates: Vec<FormTemplate> = form_templates::table
			.order(form_templates::updated_at.desc())
			.load(&mut db_connection)?;

		Ok(templates.into_iter().map(FormTemplate::into_record).collect())
	}

	fn list_instances(&self) -> Result<Vec<FormRecord>, StoreError> {
		let mut db_connection = self.connection()?;

		let instances: Vec<FormInstance> = form_instances::table
			.order(form_instances::created_at.desc())
			.load(&mut db_connection)?;

		Ok(instances.into_iter().map(FormInstance::into_record).collect())
	}
}
