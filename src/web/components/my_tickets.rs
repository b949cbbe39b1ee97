// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::icon::Icon;
use super::modal::Modal;
use crate::model::{Ticket, sample_tickets};
use leptos::prelude::*;

/// Lists the user's tickets in a modal.
#[component]
pub fn MyTickets(
	#[prop(into)] on_close: Callback<()>,
	#[prop(optional)] tickets: Option<Vec<Ticket>>,
) -> impl IntoView {
	let tickets = tickets.unwrap_or_else(sample_tickets);

	view! {
		<Modal title="My tickets" on_close=on_close class="ticket_list_modal">
			{
				if tickets.is_empty() {
					view! {
						<div class="ticket_list_empty">
							<Icon name="Inbox" size=48 class="ticket_list_empty_icon" />
							<p>"You don't have any tickets yet"</p>
						</div>
					}.into_any()
				} else {
					view! {
						<div class="ticket_list">
							{
								tickets.iter().map(|ticket| view! { <TicketRow ticket={ticket.clone()} /> }).collect_view()
							}
						</div>
					}.into_any()
				}
			}
			<div class="ticket_list_footer">
				<button type="button" class="secondary_button wide_button" on:click=move |_| on_close.run(())>
					"Close"
				</button>
			</div>
		</Modal>
	}
}

#[component]
fn TicketRow(ticket: Ticket) -> impl IntoView {
	view! {
		<div class="ticket_list_item">
			<div class="ticket_list_item_main">
				<div class="ticket_list_item_meta">
					<span class="ticket_list_item_id">{format!("#{}", ticket.id)}</span>
					<span class="ticket_status">
						<span class={format!("ticket_status_indicator {}", ticket.status.indicator_class())}></span>
						<span class="ticket_status_label">{ticket.status.label()}</span>
					</span>
				</div>
				<h3 class="ticket_list_item_subject">{ticket.subject.clone()}</h3>
				<div class="ticket_list_item_dates">
					<span class="ticket_date">
						<Icon name="Clock" size=14 />
						<span>{format!("Created: {}", ticket.created_display())}</span>
					</span>
					<span class="ticket_date">
						<Icon name="RefreshCw" size=14 />
						<span>{format!("Updated: {}", ticket.updated_display())}</span>
					</span>
				</div>
			</div>
			<div class="ticket_list_item_side">
				<span class={format!("ticket_priority {}", ticket.priority.text_class())}>
					{ticket.priority.label()}
				</span>
				<Icon name="ChevronRight" size=20 class="ticket_list_item_chevron" />
			</div>
		</div>
	}
}
