// © 2025-2026 the Formwright Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::local_time::LocalTime;
use super::utils::make_fill_url;
use crate::forms::element::{ElementType, FormElement, FormRecord};
use leptos::prelude::*;

#[component]
pub fn Home() -> impl IntoView {
	let submitted_forms = OnceResource::new(get_submitted_forms());
	let published_templates = OnceResource::new(get_published_templates());

	view! {
		<div id="home_links">
			<a href="/builder">"Form Builder"</a>
			<a href="/fill">"Fill In Latest Form"</a>
		</div>
		<PublishedForms
			title="Submitted Forms"
			placeholder="Select Submitted Form"
			forms=submitted_forms
			show_fill_link=false
		/>
		<PublishedForms
			title="Published Form Templates"
			placeholder="Select Form Template"
			forms=published_templates
			show_fill_link=true
		/>
	}
}

/// A select box of stored forms, showing the chosen one read-only below it
#[component]
fn PublishedForms(
	title: &'static str,
	placeholder: &'static str,
	forms: OnceResource<Result<Vec<FormRecord>, ServerFnError>>,
	show_fill_link: bool,
) -> impl IntoView {
	let (selected_form_id, set_selected_form_id) = signal(String::new());

	view! {
		<section class="published_forms">
			<h2>{title}</h2>
			<Transition fallback=|| view! { <div class="published_forms_loading">"Loading forms..."</div> }>
				{
					move || match forms.read().as_ref().and_then(|forms| forms.as_ref().ok()) {
						Some(forms) if !forms.is_empty() => {
							let forms = forms.clone();
							let option_views = forms
								.iter()
								.map(|form| view! {
									<option value={form.id.clone()}>{form.form_name.clone()}</option>
								})
								.collect::<Vec<_>>();
							let selected_form = move || {
								selected_form_id.with(|id| forms.iter().find(|form| &form.id == id).cloned())
							};
							view! {
								<select
									class="published_forms_select"
									on:change=move |event| set_selected_form_id.set(event_target_value(&event))
								>
									<option value="">{placeholder}</option>
									{option_views}
								</select>
								{
									move || selected_form().map(|form| view! {
										<PublishedFormView form show_fill_link />
									})
								}
							}.into_any()
						}
						Some(_) => view! {
							<div class="published_forms_none">"Nothing has been published yet."</div>
						}.into_any(),
						None => view! {
							<div class="published_forms_none">"Forms couldn't be loaded."</div>
						}.into_any(),
					}
				}
			</Transition>
		</section>
	}
}

#[component]
fn PublishedFormView(form: FormRecord, show_fill_link: bool) -> impl IntoView {
	let fill_link = show_fill_link.then(|| {
		view! {
			<a class="published_form_fill_link" href={make_fill_url(&form.form_name)}>
				"Fill in this form"
			</a>
		}
	});
	let element_views = form.elements.iter().map(read_only_element).collect::<Vec<_>>();

	view! {
		<div class="published_form">
			<p>"Form Name: " {form.form_name.clone()}</p>
			<p>"Published: " <LocalTime time=form.created_at /></p>
			{fill_link}
			{element_views}
		</div>
	}
}

fn read_only_element(element: &FormElement) -> AnyView {
	let question = element.question.clone().unwrap_or_default();
	match element.element_type {
		Some(ElementType::Textbox) => view! {
			<div class="published_form_element">
				<div class="published_form_question">{question}</div>
				<input type="text" value={element.value.clone().unwrap_or_default()} disabled=true />
			</div>
		}
		.into_any(),
		Some(ElementType::Dropdown) => {
			let selected_value = element.selected_value.clone();
			let option_views = element
				.options
				.iter()
				.map(|option| {
					let selected = selected_value.as_deref() == Some(option.label.as_str());
					view! {
						<option value={option.label.clone()} selected=selected>{option.label.clone()}</option>
					}
				})
				.collect::<Vec<_>>();
			view! {
				<div class="published_form_element">
					<div class="published_form_question">{question}</div>
					<select disabled=true>
						<option value="">""</option>
						{option_views}
					</select>
				</div>
			}
			.into_any()
		}
		Some(element_type @ (ElementType::Checkbox | ElementType::Radiobutton)) => {
			let input_type = if element_type == ElementType::Checkbox { "checkbox" } else { "radio" };
			let option_views = element
				.options
				.iter()
				.map(|option| {
					view! {
						<div class="published_form_option">
							<input type=input_type checked=option.is_checked disabled=true />
							{option.label.clone()}
						</div>
					}
				})
				.collect::<Vec<_>>();
			view! {
				<div class="published_form_element">
					<div class="published_form_question">{question}</div>
					{option_views}
				</div>
			}
			.into_any()
		}
		None => ().into_any(),
	}
}

#[server]
async fn get_submitted_forms() -> Result<Vec<FormRecord>, ServerFnError> {
	use crate::forms::store::FormStore;
	use crate::web::pages::server_utils::form_store;

	let forms = form_store()
		.list_instances()
		.inspect_err(|error| tracing::error!(source = ?error, "Failed to list submitted forms"))?;
	Ok(forms)
}

#[server]
async fn get_published_templates() -> Result<Vec<FormRecord>, ServerFnError> {
	use crate::forms::store::FormStore;
	use crate::web::pages::server_utils::form_store;

	let templates = form_store()
		.list_templates()
		.inspect_err(|error| tracing::error!(source = ?error, "Failed to list form templates"))?;
	Ok(templates)
}
