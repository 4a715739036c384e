// © 2025-2026 the Formwright Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::forms::builder::{BuilderAction, BuilderState};
use crate::forms::element::{ElementType, FormElement};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;

#[component]
pub fn FormBuilder() -> impl IntoView {
	let builder = RwSignal::new(BuilderState::default());
	let dispatch = move |action: BuilderAction| builder.update(|state| *state = std::mem::take(state).reduce(action));

	let form_name = Memo::new(move |_| builder.with(|state| state.form_name.trim().to_string()));
	let existing_template = Resource::new(move || form_name.get(), check_template_name);
	let (published, set_published) = signal(false);

	let form_submit = move |event: SubmitEvent| {
		event.prevent_default();

		let errors = builder.with(|state| state.validate());
		dispatch(BuilderAction::SetErrors(errors.clone()));
		if !errors.is_empty() {
			return;
		}

		let (form_name, elements) = builder.with(|state| (state.form_name.clone(), state.elements.clone()));
		spawn_local(async move {
			match publish_form_template(form_name, elements).await {
				Ok(()) => set_published.set(true),
				Err(error) => dispatch(BuilderAction::SetErrors(vec![error.to_string()])),
			}
		});
	};

	view! {
		{move || published.get().then(|| view! { <Redirect path="/" /> })}
		<h2>"Form Builder"</h2>
		<form id="form_builder" on:submit=form_submit>
			<div class="form_builder_add_element">
				<h3>"Select an element from the dropdown to build the form"</h3>
				<select
					prop:value=move || builder.with(|state| state.selected_element.map(|element_type| element_type.as_str()).unwrap_or_default())
					on:change=move |event| {
						let element_type = event_target_value(&event).parse::<ElementType>().ok();
						dispatch(BuilderAction::SelectElement(element_type));
					}
				>
					<option value="">"Select an HTML element"</option>
					{
						ElementType::ALL
							.into_iter()
							.map(|element_type| view! {
								<option value={element_type.as_str()}>{element_type.display_name()}</option>
							})
							.collect::<Vec<_>>()
					}
				</select>
				<button type="button" on:click=move |_| dispatch(BuilderAction::AddElement)>
					"Add Element To The Form Below"
				</button>
			</div>
			<div class="form_builder_name">
				<label>
					<span class="form_builder_label_text">"Enter the Form Name:"</span>
					<input
						type="text"
						placeholder="Enter the Form Name"
						prop:value=move || builder.with(|state| state.form_name.clone())
						on:change=move |event| dispatch(BuilderAction::SetFormName(event_target_value(&event)))
					/>
				</label>
				<Transition>
					{
						move || matches!(existing_template.get(), Some(Ok(true))).then(|| view! {
							<div class="form_builder_existing_notice">
								"A form with this name is already published. Publishing will add a new version of it."
							</div>
						})
					}
				</Transition>
			</div>
			<div class="form_builder_errors">
				<ul>
					<For
						each=move || builder.with(|state| state.errors.clone())
						key=|error| error.clone()
						let(error)
					>
						<li>{error}</li>
					</For>
				</ul>
			</div>
			<div class="form_builder_elements">
				{
					move || builder.with(|state| {
						state
							.elements
							.iter()
							.enumerate()
							.map(|(index, element)| element_editor(index, element, dispatch))
							.collect::<Vec<_>>()
					})
				}
			</div>
			<div class="form_builder_publish">
				<button type="submit">"Publish Form"</button>
			</div>
		</form>
	}
}

fn element_editor(
	index: usize,
	element: &FormElement,
	dispatch: impl Fn(BuilderAction) + Copy + Send + Sync + 'static,
) -> AnyView {
	let Some(element_type) = element.element_type else {
		return ().into_any();
	};

	let question_input = view! {
		<input
			type="text"
			class="form_builder_question"
			placeholder="Enter your question"
			prop:value={element.question.clone().unwrap_or_default()}
			on:change=move |event| dispatch(BuilderAction::SetQuestion {
				element: index,
				question: event_target_value(&event),
			})
		/>
	};

	if !element_type.has_options() {
		return view! {
			<div class="form_builder_element">
				{question_input}
				<span class="form_builder_element_kind">{element_type.display_name()}</span>
			</div>
		}
		.into_any();
	}

	let preview_type = match element_type {
		ElementType::Checkbox => "checkbox",
		ElementType::Radiobutton => "radio",
		_ => "text",
	};
	let option_editors = element
		.options
		.iter()
		.enumerate()
		.map(|(option_index, option)| {
			view! {
				<div class="form_builder_option">
					<input
						type="text"
						class="form_builder_option_label"
						placeholder="Enter your text"
						prop:value={option.label.clone()}
						on:change=move |event| dispatch(BuilderAction::SetOptionLabel {
							element: index,
							option: option_index,
							label: event_target_value(&event),
						})
					/>
					<input type=preview_type disabled=true />
					<button
						type="button"
						class="form_builder_option_button"
						on:click=move |_| dispatch(BuilderAction::AddOption { element: index, after: option_index })
					>
						"+"
					</button>
					<button
						type="button"
						class="form_builder_option_button"
						on:click=move |_| dispatch(BuilderAction::RemoveOption { element: index, option: option_index })
					>
						"-"
					</button>
				</div>
			}
		})
		.collect::<Vec<_>>();

	view! {
		<div class="form_builder_element">
			<div>{question_input}</div>
			<label>{format!("{} Options", element_type.display_name())}</label>
			{option_editors}
		</div>
	}
	.into_any()
}

#[server]
async fn check_template_name(form_name: String) -> Result<bool, ServerFnError> {
	use crate::forms::store::FormStore;
	use crate::web::pages::server_utils::form_store;

	if form_name.is_empty() {
		return Ok(false);
	}
	let template = form_store()
		.latest_template(Some(&form_name))
		.inspect_err(|error| tracing::error!(source = ?error, "Failed to look up form template"))?;
	Ok(template.is_some())
}

#[server]
async fn publish_form_template(form_name: String, elements: Vec<FormElement>) -> Result<(), ServerFnError> {
	use crate::forms::builder::validate_template;
	use crate::forms::store::FormStore;
	use crate::web::pages::server_utils::form_store;

	let errors = validate_template(&form_name, &elements);
	if !errors.is_empty() {
		return Err(ServerFnError::ServerError(errors.join("; ")));
	}

	let template = form_store()
		.publish_template(form_name.trim(), &elements)
		.inspect_err(|error| tracing::error!(source = ?error, "Failed to publish form template"))?;
	tracing::info!(
		form_name = %template.form_name,
		template = %template.id,
		elements = template.elements.len(),
		"Published form template"
	);

	Ok(())
}
