// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::components::{Icon, MyTickets, TicketForm};
use leptos::prelude::*;

/// Which modal, if any, is open on the support page.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum OpenModal {
	#[default]
	None,
	TicketForm,
	MyTickets,
}

#[component]
pub fn SupportPage() -> impl IntoView {
	let open_modal = RwSignal::new(OpenModal::default());
	let close_modal = Callback::new(move |_: ()| open_modal.set(OpenModal::None));

	view! {
		<main id="support_page">
			<h1>"Support"</h1>
			<p class="support_intro">"Having trouble? Open a ticket and we'll get back to you."</p>
			<div class="support_actions">
				<button type="button" class="primary_button" on:click=move |_| open_modal.set(OpenModal::TicketForm)>
					<Icon name="Plus" size=18 />
					"Create ticket"
				</button>
				<button type="button" class="secondary_button" on:click=move |_| open_modal.set(OpenModal::MyTickets)>
					<Icon name="Ticket" size=18 />
					"My tickets"
				</button>
			</div>
			{
				move || match open_modal.get() {
					OpenModal::None => ().into_any(),
					OpenModal::TicketForm => view! { <TicketForm on_close=close_modal /> }.into_any(),
					OpenModal::MyTickets => view! { <MyTickets on_close=close_modal /> }.into_any(),
				}
			}
		</main>
	}
}
