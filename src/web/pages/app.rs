// © 2025-2026 the Formwright Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::errors::not_found::NotFound;
use super::forms::{FillForm, FormBuilder};
use super::header::PageHeader;
use super::home::Home;
use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Stylesheet href="/pkg/formwright.css" />
		<Title text="Formwright" />

		<Router>
			<PageHeader />
			<main>
				<Routes fallback=|| view! { <NotFound /> }>
					<Route path=path!("/") view=Home />
					<Route path=path!("/builder") view=FormBuilder />
					<Route path=path!("/fill/:form_name?") view=FillForm />
				</Routes>
			</main>
		</Router>
	}
}
