// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::icon::Icon;
use super::modal::Modal;
use crate::model::TicketPriority;
use crate::tickets::draft::TicketDraftStoreFields;
use crate::tickets::{
	AlertNotifier, DraftField, LoggingSubmissionSink, SubmissionNotifier, SubmissionSink, TicketDraft,
	TicketSubmission, ValidationErrors,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use reactive_stores::Store;
use std::sync::Arc;

/// The ticket creation form, shown in a modal.
///
/// Errors are recomputed only when the form is submitted. On success the draft goes to `sink`, the user is notified
/// through `notifier`, and `on_close` runs.
#[component]
pub fn TicketForm(
	#[prop(into)] on_close: Callback<()>,
	#[prop(optional)] sink: Option<Arc<dyn SubmissionSink + Send + Sync>>,
	#[prop(optional)] notifier: Option<Arc<dyn SubmissionNotifier + Send + Sync>>,
) -> impl IntoView {
	let sink = sink.unwrap_or_else(|| Arc::new(LoggingSubmissionSink));
	let notifier = notifier.unwrap_or_else(|| Arc::new(AlertNotifier));

	let draft = Store::new(TicketDraft::default());
	let errors = RwSignal::new(ValidationErrors::default());
	let submission = StoredValue::new(TicketSubmission::new());

	let form_submit = move |event: SubmitEvent| {
		event.prevent_default();

		let current_draft = draft.get();
		let mut close_requested = false;
		let new_errors = submission.try_update_value(|submission| {
			submission.submit(&current_draft, &*sink, &*notifier, || close_requested = true);
			submission.errors().clone()
		});
		if let Some(new_errors) = new_errors {
			errors.set(new_errors);
		}

		if close_requested {
			on_close.run(());
		}
	};

	view! {
		<Modal title="Create a ticket" on_close=on_close class="ticket_form_modal">
			<form class="ticket_form" on:submit=form_submit novalidate=true>
				<div class="form_field">
					<label>
						<span class="form_label_text">"Subject"</span>
						<input
							type="text"
							class="form_input"
							placeholder="Briefly describe the problem"
							prop:value=move || draft.subject().get()
							on:input=move |event| draft.subject().set(event_target_value(&event))
						/>
					</label>
					<FieldError errors field=DraftField::Subject />
				</div>

				<div class="form_field">
					<label>
						<span class="form_label_text">"Description"</span>
						<textarea
							class="form_input form_textarea"
							rows=4
							placeholder="Describe your problem in detail"
							prop:value=move || draft.description().get()
							on:input=move |event| draft.description().set(event_target_value(&event))
						></textarea>
					</label>
					<FieldError errors field=DraftField::Description />
				</div>

				<div class="form_field">
					<label>
						<span class="form_label_text">"Priority"</span>
						<select
							class="form_input"
							prop:value=move || draft.priority().get().value()
							on:change=move |event| {
								let value = event_target_value(&event);
								match value.parse::<TicketPriority>() {
									Ok(priority) => draft.priority().set(priority),
									Err(error) => tracing::warn!(source = %error, "Priority select produced an unknown value"),
								}
							}
						>
							{
								TicketPriority::ALL
									.into_iter()
									.map(|priority| view! {
										<option
											value={priority.value()}
											selected=move || draft.priority().get() == priority
										>
											{priority.label()}
										</option>
									})
									.collect_view()
							}
						</select>
					</label>
				</div>

				<div class="form_field">
					<label>
						<span class="form_label_text">"Contact email"</span>
						<input
							type="email"
							class="form_input"
							placeholder="your@email.com"
							prop:value=move || draft.email().get()
							on:input=move |event| draft.email().set(event_target_value(&event))
						/>
					</label>
					<FieldError errors field=DraftField::Email />
				</div>

				<div class="ticket_form_actions">
					<button type="button" class="secondary_button" on:click=move |_| on_close.run(())>
						"Cancel"
					</button>
					<button type="submit" class="primary_button">
						<Icon name="Send" size=16 />
						"Create ticket"
					</button>
				</div>
			</form>
		</Modal>
	}
}

/// Shows the message for one field from the last validation pass, if it has one.
#[component]
fn FieldError(errors: RwSignal<ValidationErrors>, field: DraftField) -> impl IntoView {
	move || {
		errors.with(|errors| {
			errors.get(field).map(|message| {
				let message = message.to_string();
				view! { <p class="form_field_error">{message}</p> }
			})
		})
	}
}
