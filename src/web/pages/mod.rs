// © 2025-2026 the Formwright Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod app;
mod errors;
mod forms;
mod header;
mod home;
mod local_time;
#[cfg(feature = "ssr")]
mod server_utils;
#[cfg(feature = "ssr")]
pub mod shell;
mod utils;
