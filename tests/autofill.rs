// © 2025-2026 the Formwright Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Duration, TimeZone, Utc};
use formwright::forms::{
	AutofilledForm, ElementType, FormElement, FormOption, FormRecord, FormStore, StoreError, autofill_form,
	submit_form,
};
use pretty_assertions::assert_eq;
use std::cell::{Cell, RefCell};

/// Keeps records in insertion order, stamping each one a minute after the last.
#[derive(Default)]
struct MemoryStore {
	templates: RefCell<Vec<FormRecord>>,
	instances: RefCell<Vec<FormRecord>>,
	clock: Cell<i64>,
}

impl MemoryStore {
	fn next_record(&self, form_name: &str, elements: &[FormElement]) -> FormRecord {
		let tick = self.clock.get() + 1;
		self.clock.set(tick);
		FormRecord {
			id: format!("record-{}", tick),
			form_name: form_name.to_string(),
			elements: elements.to_vec(),
			created_at: start_time() + Duration::minutes(tick),
		}
	}
}

fn start_time() -> DateTime<Utc> {
	Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
}

impl FormStore for MemoryStore {
	fn latest_template(&self, form_name: Option<&str>) -> Result<Option<FormRecord>, StoreError> {
		Ok(self
			.templates
			.borrow()
			.iter()
			.rev()
			.find(|template| form_name.is_none_or(|form_name| template.form_name == form_name))
			.cloned())
	}

	fn prior_instance(&self, form_name: &str) -> Result<Option<FormRecord>, StoreError> {
		Ok(self
			.instances
			.borrow()
			.iter()
			.rev()
			.find(|instance| instance.form_name == form_name)
			.cloned())
	}

	fn save_instance(&self, form_name: &str, elements: &[FormElement]) -> Result<FormRecord, StoreError> {
		let record = self.next_record(form_name, elements);
		self.instances.borrow_mut().push(record.clone());
		Ok(record)
	}

	fn publish_template(&self, form_name: &str, elements: &[FormElement]) -> Result<FormRecord, StoreError> {
		let record = self.next_record(form_name, elements);
		self.templates.borrow_mut().push(record.clone());
		Ok(record)
	}

	fn list_templates(&self) -> Result<Vec<FormRecord>, StoreError> {
		Ok(self.templates.borrow().iter().rev().cloned().collect())
	}

	fn list_instances(&self) -> Result<Vec<FormRecord>, StoreError> {
		Ok(self.instances.borrow().iter().rev().cloned().collect())
	}
}

/// Finds templates but can't reach the submissions.
struct UnreachableResponses(MemoryStore);

impl FormStore for UnreachableResponses {
	fn latest_template(&self, form_name: Option<&str>) -> Result<Option<FormRecord>, StoreError> {
		self.0.latest_template(form_name)
	}

	fn prior_instance(&self, _form_name: &str) -> Result<Option<FormRecord>, StoreError> {
		Err(StoreError::Unavailable(String::from("connection refused")))
	}

	fn save_instance(&self, _form_name: &str, _elements: &[FormElement]) -> Result<FormRecord, StoreError> {
		Err(StoreError::Unavailable(String::from("connection refused")))
	}

	fn publish_template(&self, form_name: &str, elements: &[FormElement]) -> Result<FormRecord, StoreError> {
		self.0.publish_template(form_name, elements)
	}

	fn list_templates(&self) -> Result<Vec<FormRecord>, StoreError> {
		self.0.list_templates()
	}

	fn list_instances(&self) -> Result<Vec<FormRecord>, StoreError> {
		Err(StoreError::Unavailable(String::from("connection refused")))
	}
}

fn textbox(question: &str, value: &str) -> FormElement {
	FormElement {
		value: Some(value.to_string()),
		question: Some(question.to_string()),
		..FormElement::new(ElementType::Textbox)
	}
}

fn checkbox(question: &str, options: &[(&str, bool)]) -> FormElement {
	FormElement {
		question: Some(question.to_string()),
		options: options
			.iter()
			.map(|(label, is_checked)| FormOption::new(*label, *is_checked))
			.collect(),
		..FormElement::new(ElementType::Checkbox)
	}
}

#[test]
fn nothing_published_yields_no_form() {
	let store = MemoryStore::default();
	assert_eq!(autofill_form(&store, None).unwrap(), None);
	assert_eq!(autofill_form(&store, Some("Intake")).unwrap(), None);
}

#[test]
fn first_visit_gets_template_defaults() {
	let store = MemoryStore::default();
	let template = vec![textbox("Email", ""), checkbox("Subscribe", &[("Yes", false)])];
	store.publish_template("Newsletter", &template).unwrap();

	let form = autofill_form(&store, None).unwrap().unwrap();

	assert_eq!(
		form,
		AutofilledForm {
			form_name: String::from("Newsletter"),
			elements: template,
			prior_submitted_at: None,
		}
	);
}

#[test]
fn revisit_restores_latest_answers() {
	let store = MemoryStore::default();
	let template = vec![textbox("Email", ""), checkbox("Subscribe", &[("Yes", false)])];
	store.publish_template("Newsletter", &template).unwrap();
	store
		.save_instance("Newsletter", &[textbox("Email", "old@b.com")])
		.unwrap();
	let latest = store
		.save_instance("Newsletter", &[textbox("Email", "a@b.com")])
		.unwrap();

	let form = autofill_form(&store, Some("Newsletter")).unwrap().unwrap();

	assert_eq!(
		form.elements,
		vec![textbox("Email", "a@b.com"), checkbox("Subscribe", &[("Yes", false)])]
	);
	assert_eq!(form.prior_submitted_at, Some(latest.created_at));
}

#[test]
fn republished_template_controls_questions_and_order() {
	let store = MemoryStore::default();
	store
		.publish_template("Survey", &[textbox("Name", ""), textbox("Team", "")])
		.unwrap();
	store
		.save_instance(
			"Survey",
			&[textbox("Name", "Alice"), textbox("Team", "Platform")],
		)
		.unwrap();
	store
		.publish_template(
			"Survey",
			&[checkbox("Remote", &[("Yes", false)]), textbox("Name", "")],
		)
		.unwrap();

	let form = autofill_form(&store, Some("Survey")).unwrap().unwrap();

	assert_eq!(
		form.elements,
		vec![checkbox("Remote", &[("Yes", false)]), textbox("Name", "Alice")]
	);
}

#[test]
fn answers_come_only_from_the_same_form() {
	let store = MemoryStore::default();
	store.publish_template("Intake", &[textbox("Name", "")]).unwrap();
	store.publish_template("Exit", &[textbox("Name", "")]).unwrap();
	store.save_instance("Intake", &[textbox("Name", "Alice")]).unwrap();

	let exit = autofill_form(&store, Some("Exit")).unwrap().unwrap();
	assert_eq!(exit.elements, vec![textbox("Name", "")]);

	let latest = autofill_form(&store, None).unwrap().unwrap();
	assert_eq!(latest.form_name, "Exit");
}

#[test]
fn storage_failure_is_reported_not_merged() {
	let store = UnreachableResponses(MemoryStore::default());
	store.publish_template("Intake", &[textbox("Name", "")]).unwrap();

	let result = autofill_form(&store, Some("Intake"));

	assert!(matches!(result, Err(StoreError::Unavailable(_))));
}

#[test]
fn submission_needs_a_published_form() {
	let store = MemoryStore::default();
	store.publish_template("Intake", &[textbox("Name", "")]).unwrap();

	let rejected = submit_form(&store, "Exit", &[textbox("Name", "Alice")]).unwrap();
	assert_eq!(rejected, None);
	assert!(store.list_instances().unwrap().is_empty());

	let saved = submit_form(&store, "Intake", &[textbox("Name", "Alice")]).unwrap().unwrap();
	assert_eq!(saved.form_name, "Intake");
	assert_eq!(store.list_instances().unwrap(), vec![saved]);
}

#[test]
fn submitted_answers_fill_the_next_visit() {
	let store = MemoryStore::default();
	store.publish_template("Intake", &[textbox("Name", "")]).unwrap();

	submit_form(&store, "Intake", &[textbox("Name", "Alice")]).unwrap();
	let form = autofill_form(&store, Some("Intake")).unwrap().unwrap();

	assert_eq!(form.elements, vec![textbox("Name", "Alice")]);
}

#[test]
fn submission_reports_storage_failure() {
	let store = UnreachableResponses(MemoryStore::default());
	store.publish_template("Intake", &[textbox("Name", "")]).unwrap();

	let result = submit_form(&store, "Intake", &[textbox("Name", "Alice")]);

	assert!(matches!(result, Err(StoreError::Unavailable(_))));
}
