// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::icon::Icon;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// A dialog over a dimmed backdrop.
///
/// Clicking the backdrop or the close button runs `on_close`. Clicks inside the dialog stay inside it.
#[component]
pub fn Modal(
	#[prop(into)] title: String,
	#[prop(into)] on_close: Callback<()>,
	/// Extra class for the dialog body, used to size it
	#[prop(optional, into)]
	class: String,
	children: Children,
) -> impl IntoView {
	let dialog_class = if class.is_empty() {
		String::from("modal")
	} else {
		format!("modal {}", class)
	};

	view! {
		<div class="modal_backdrop" on:click=move |_| on_close.run(())>
			<div
				class=dialog_class
				role="dialog"
				aria-modal="true"
				on:click=|event: MouseEvent| event.stop_propagation()
			>
				<button
					type="button"
					class="modal_close_button"
					aria-label="Close"
					on:click=move |_| on_close.run(())
				>
					<Icon name="X" size=20 />
				</button>
				<h2 class="modal_title">{title}</h2>
				{children()}
			</div>
		</div>
	}
}
