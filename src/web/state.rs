// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use axum::extract::FromRef;
use leptos::config::LeptosOptions;

/// Shared by every request the web server handles.
#[derive(Clone, Debug, FromRef)]
pub struct AppState {
	pub leptos_options: LeptosOptions,
}
