// © 2025-2026 the Formwright Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::forms::timestamp::{format_local_time, format_published_time};
use chrono::{DateTime, Utc};
use leptos::prelude::*;

/// Shows a time in the viewer's time zone.
/// The server renders it in UTC; once hydrated, the browser replaces that with its own local time.
#[component]
pub fn LocalTime(time: DateTime<Utc>) -> impl IntoView {
	let (formatted, set_formatted) = signal(format_published_time(&time));
	Effect::new(move |_| set_formatted.set(format_local_time(&time)));

	view! { <time datetime={time.to_rfc3339()}>{formatted}</time> }
}
