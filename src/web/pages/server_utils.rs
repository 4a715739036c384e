// © 2025-2026 the Formwright Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::form_store::DatabaseFormStore;
use crate::web::state::AppState;
use leptos::prelude::*;

/// Gets the form store for a request.
/// Must be used from a server function; relies on the application state provided as context.
pub fn form_store() -> DatabaseFormStore {
	let state: AppState = expect_context();
	DatabaseFormStore::new(state.db_connection_pool.clone())
}
