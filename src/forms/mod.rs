// © 2025-2026 the Formwright Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Form data and the logic that shapes it, shared between the server and the hydrated client.

pub mod autofill;
pub mod builder;
pub mod element;
pub mod fill;
pub mod merge;
pub mod store;
pub mod submit;
pub mod timestamp;

pub use autofill::{AutofilledForm, autofill_form};
pub use element::{ElementType, FormElement, FormOption, FormRecord};
pub use merge::{count_matched_elements, merge_form_elements};
pub use store::{FormStore, StoreError};
pub use submit::submit_form;
