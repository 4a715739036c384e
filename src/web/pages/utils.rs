// © 2025-2026 the Formwright Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::prelude::*;
use leptos_router::location::Url;
use leptos_router::params::Params;

#[derive(Clone, Debug, Params, PartialEq)]
pub struct FormNameParam {
	pub form_name: Option<String>,
}

/// Makes the URL of the fill-in page for a form
pub fn make_fill_url(form_name: &str) -> String {
	format!("/fill/{}", Url::escape(form_name))
}

// Server-side escaping; in the browser this goes through `encodeURIComponent`.
#[cfg(all(test, feature = "ssr"))]
mod tests {
	use super::*;

	#[test]
	fn fill_url_escapes_form_name() {
		assert_eq!(make_fill_url("Intake"), "/fill/Intake");
		assert_eq!(make_fill_url("New hire / IT"), "/fill/New%20hire%20%2F%20IT");
		assert_eq!(make_fill_url("Café"), "/fill/Caf%C3%A9");
		assert_eq!(Url::unescape(&make_fill_url("Q&A #2")["/fill/".len()..]), "Q&A #2");
	}
}
