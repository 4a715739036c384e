// © 2025-2026 the Formwright Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::prelude::*;

#[component]
pub fn PageHeader() -> impl IntoView {
	view! {
		<header id="header">
			<a id="header_site_name" href="/">
				<h1>"Formwright"</h1>
			</a>
			<nav id="header_links">
				<a href="/builder">"Form Builder"</a>
				<a href="/fill">"Fill In Latest Form"</a>
			</nav>
		</header>
	}
}
