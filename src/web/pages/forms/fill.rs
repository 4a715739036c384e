// © 2025-2026 the Formwright Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::forms::autofill::AutofilledForm;
use crate::forms::element::{ElementType, FormElement};
use crate::forms::fill::{FillAction, FillState};
use crate::web::pages::errors::error::Error;
use crate::web::pages::local_time::LocalTime;
use crate::web::pages::utils::FormNameParam;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_params;

#[component]
pub fn FillForm() -> impl IntoView {
	let params = use_params::<FormNameParam>();
	let form_name = params.read().as_ref().ok().and_then(|params| params.form_name.clone());

	let form = OnceResource::new(get_autofilled_form(form_name));
	let fill_state = RwSignal::new(FillState::default());
	let dispatch = move |action: FillAction| fill_state.update(|state| *state = std::mem::take(state).reduce(action));

	Effect::new_isomorphic(move |_| {
		if let Some(Ok(Some(form))) = form.read().as_ref() {
			dispatch(FillAction::Load(form.clone()));
		}
	});

	let (saved, set_saved) = signal(false);
	let form_submit = move |event: SubmitEvent| {
		event.prevent_default();
		dispatch(FillAction::SetErrors(Vec::new()));

		let (form_name, elements) = fill_state.with(|state| (state.form_name.clone(), state.elements.clone()));
		spawn_local(async move {
			match save_form_instance(form_name, elements).await {
				Ok(()) => set_saved.set(true),
				Err(error) => dispatch(FillAction::SetErrors(vec![error.to_string()])),
			}
		});
	};

	view! {
		{move || saved.get().then(|| view! { <Redirect path="/" /> })}
		<Transition fallback=|| view! { <div class="fill_form_loading">"Loading form..."</div> }>
			{
				move || match form.read().as_ref() {
					Some(Ok(Some(_))) => {
						view! {
							<h2>{move || fill_state.with(|state| state.form_name.clone())}</h2>
							{
								move || fill_state.with(|state| state.prior_submitted_at).map(|submitted_at| view! {
									<p class="fill_form_prior">
										"Filled in from your submission on " <LocalTime time=submitted_at />
									</p>
								})
							}
							<form id="fill_form" on:submit=form_submit>
								<div class="fill_form_errors">
									<ul>
										<For
											each=move || fill_state.with(|state| state.errors.clone())
											key=|error| error.clone()
											let(error)
										>
											<li>{error}</li>
										</For>
									</ul>
								</div>
								{
									move || fill_state.with(|state| {
										state
											.elements
											.iter()
											.enumerate()
											.map(|(index, element)| element_input(index, element, dispatch))
											.collect::<Vec<_>>()
									})
								}
								<div class="fill_form_save">
									<button type="submit">"Save Form"</button>
								</div>
							</form>
						}
						.into_any()
					}
					Some(Ok(None)) => view! {
						<div class="fill_form_none">"No form has been published with that name yet."</div>
					}
					.into_any(),
					Some(Err(_)) => view! { <Error /> }.into_any(),
					None => ().into_any(),
				}
			}
		</Transition>
	}
}

fn element_input(index: usize, element: &FormElement, dispatch: impl Fn(FillAction) + Copy + Send + Sync + 'static) -> AnyView {
	let question = element.question.clone().unwrap_or_default();
	match element.element_type {
		Some(ElementType::Textbox) => view! {
			<div class="fill_form_element">
				<label>
					<span class="fill_form_question">{question}</span>
					<input
						type="text"
						prop:value={element.value.clone().unwrap_or_default()}
						on:change=move |event| dispatch(FillAction::SetText {
							element: index,
							value: event_target_value(&event),
						})
					/>
				</label>
			</div>
		}
		.into_any(),
		Some(ElementType::Dropdown) => {
			// Without a selection, the leading blank option shows.
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
				<div class="fill_form_element">
					<label>
						<span class="fill_form_question">{question}</span>
						<select
							prop:value={selected_value.clone().unwrap_or_default()}
							on:change=move |event| dispatch(FillAction::SelectDropdown {
								element: index,
								value: event_target_value(&event),
							})
						>
							<option value="" selected={selected_value.is_none()}>""</option>
							{option_views}
						</select>
					</label>
				</div>
			}
			.into_any()
		}
		Some(ElementType::Checkbox) => {
			let option_views = element
				.options
				.iter()
				.enumerate()
				.map(|(option_index, option)| {
					view! {
						<label class="fill_form_option">
							<input
								type="checkbox"
								prop:checked={option.is_checked}
								on:change=move |event| dispatch(FillAction::SetChecked {
									element: index,
									option: option_index,
									checked: event_target_checked(&event),
								})
							/>
							{option.label.clone()}
						</label>
					}
				})
				.collect::<Vec<_>>();
			view! {
				<div class="fill_form_element">
					<div class="fill_form_question">{question}</div>
					{option_views}
				</div>
			}
			.into_any()
		}
		Some(ElementType::Radiobutton) => {
			let group_name = format!("fill_form_radio_{}", index);
			let option_views = element
				.options
				.iter()
				.enumerate()
				.map(|(option_index, option)| {
					view! {
						<label class="fill_form_option">
							<input
								type="radio"
								name={group_name.clone()}
								prop:checked={option.is_checked}
								on:change=move |_| dispatch(FillAction::SelectRadio {
									element: index,
									option: option_index,
								})
							/>
							{option.label.clone()}
						</label>
					}
				})
				.collect::<Vec<_>>();
			view! {
				<div class="fill_form_element">
					<div class="fill_form_question">{question}</div>
					{option_views}
				</div>
			}
			.into_any()
		}
		None => ().into_any(),
	}
}

#[server]
async fn get_autofilled_form(form_name: Option<String>) -> Result<Option<AutofilledForm>, ServerFnError> {
	use crate::forms::autofill::autofill_form;
	use crate::web::pages::server_utils::form_store;

	let form = autofill_form(&form_store(), form_name.as_deref())
		.inspect_err(|error| tracing::error!(source = ?error, ?form_name, "Failed to load form for filling in"))?;
	Ok(form)
}

#[server]
async fn save_form_instance(form_name: String, elements: Vec<FormElement>) -> Result<(), ServerFnError> {
	use crate::forms::submit::submit_form;
	use crate::web::pages::server_utils::form_store;

	let instance = submit_form(&form_store(), &form_name, &elements)
		.inspect_err(|error| tracing::error!(source = ?error, "Failed to save form"))?;
	if instance.is_none() {
		return Err(ServerFnError::ServerError(String::from("Form not found")));
	}

	Ok(())
}
