// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::draft::TicketDraft;
use super::validation::{ValidationErrors, validate_draft};
use std::error::Error;
use std::fmt;

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Ticket created! We will contact you shortly.";

/// Receives completed drafts.
pub trait SubmissionSink {
	fn submit(&self, draft: &TicketDraft) -> Result<(), SubmissionError>;
}

/// Tells the user how a submission went.
pub trait SubmissionNotifier {
	fn notify(&self, message: &str);
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmissionError {
	Rejected(String),
	Unavailable,
}

impl SubmissionError {
	/// Gets the message shown to the user when this error occurs.
	pub fn user_message(&self) -> String {
		match self {
			Self::Rejected(reason) => format!("The ticket could not be created: {}", reason),
			Self::Unavailable => String::from("The support service is unavailable. Please try again later."),
		}
	}
}

impl fmt::Display for SubmissionError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Rejected(reason) => write!(f, "submission rejected: {}", reason),
			Self::Unavailable => write!(f, "submission service unavailable"),
		}
	}
}

impl Error for SubmissionError {}

/// Accepts every draft and records it in the log.
///
/// Stands in for the support backend until one exists.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingSubmissionSink;

impl SubmissionSink for LoggingSubmissionSink {
	fn submit(&self, draft: &TicketDraft) -> Result<(), SubmissionError> {
		let draft_json = serde_json::to_string(draft).map_err(|error| SubmissionError::Rejected(error.to_string()))?;
		tracing::info!(draft = %draft_json, "Ticket created");
		Ok(())
	}
}

/// Shows submission results in a browser alert.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

impl SubmissionNotifier for AlertNotifier {
	fn notify(&self, message: &str) {
		if let Err(error) = leptos::prelude::window().alert_with_message(message) {
			tracing::warn!(source = ?error, "Failed to show submission alert");
		}
	}
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FormPhase {
	#[default]
	Editing,
	Submitted,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
	/// The draft failed validation; nothing else happened.
	Invalid(ValidationErrors),
	/// The draft was valid but the sink refused it.
	Failed(SubmissionError),
	Submitted,
	/// The form was already submitted.
	Ignored,
}

/// Drives a ticket form from editing to submission.
#[derive(Clone, Debug, Default)]
pub struct TicketSubmission {
	phase: FormPhase,
	errors: ValidationErrors,
}

impl TicketSubmission {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn phase(&self) -> FormPhase {
		self.phase
	}

	/// The errors from the most recent submit attempt.
	///
	/// These stay as they are while the draft is edited and only change on the next attempt.
	pub fn errors(&self) -> &ValidationErrors {
		&self.errors
	}

	/// Attempts to submit the draft.
	///
	/// `on_close` is run once the sink accepts the draft.
	pub fn submit(
		&mut self,
		draft: &TicketDraft,
		sink: &dyn SubmissionSink,
		notifier: &dyn SubmissionNotifier,
		on_close: impl FnOnce(),
	) -> SubmitOutcome {
		if self.phase == FormPhase::Submitted {
			return SubmitOutcome::Ignored;
		}

		self.errors = validate_draft(draft);
		if !self.errors.is_empty() {
			return SubmitOutcome::Invalid(self.errors.clone());
		}

		if let Err(error) = sink.submit(draft) {
			tracing::warn!(source = ?error, "Ticket submission failed");
			notifier.notify(&error.user_message());
			return SubmitOutcome::Failed(error);
		}

		self.phase = FormPhase::Submitted;
		notifier.notify(SUBMIT_SUCCESS_MESSAGE);
		on_close();
		SubmitOutcome::Submitted
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tickets::draft::DraftField;
	use crate::tickets::validation::{EMAIL_INVALID, SUBJECT_REQUIRED};
	use std::cell::{Cell, RefCell};

	#[derive(Default)]
	struct RecordingSink {
		drafts: RefCell<Vec<TicketDraft>>,
		fail_with: Option<SubmissionError>,
	}

	impl SubmissionSink for RecordingSink {
		fn submit(&self, draft: &TicketDraft) -> Result<(), SubmissionError> {
			self.drafts.borrow_mut().push(draft.clone());
			match &self.fail_with {
				Some(error) => Err(error.clone()),
				None => Ok(()),
			}
		}
	}

	#[derive(Default)]
	struct RecordingNotifier {
		messages: RefCell<Vec<String>>,
	}

	impl SubmissionNotifier for RecordingNotifier {
		fn notify(&self, message: &str) {
			self.messages.borrow_mut().push(message.to_string());
		}
	}

	fn draft(subject: &str, description: &str, email: &str) -> TicketDraft {
		TicketDraft {
			subject: subject.to_string(),
			description: description.to_string(),
			email: email.to_string(),
			..Default::default()
		}
	}

	#[test]
	fn missing_subject_blocks_submit() {
		let sink = RecordingSink::default();
		let notifier = RecordingNotifier::default();
		let closes = Cell::new(0);
		let mut submission = TicketSubmission::new();

		let outcome = submission.submit(&draft("", "x", "a@b.com"), &sink, &notifier, || {
			closes.set(closes.get() + 1)
		});

		let SubmitOutcome::Invalid(errors) = outcome else {
			panic!("expected invalid outcome, got {:?}", outcome);
		};
		assert_eq!(errors.len(), 1);
		assert_eq!(errors.get(DraftField::Subject), Some(SUBJECT_REQUIRED));
		assert_eq!(submission.phase(), FormPhase::Editing);
		assert!(sink.drafts.borrow().is_empty());
		assert!(notifier.messages.borrow().is_empty());
		assert_eq!(closes.get(), 0);
	}

	#[test]
	fn invalid_email_blocks_submit() {
		let sink = RecordingSink::default();
		let notifier = RecordingNotifier::default();
		let closes = Cell::new(0);
		let mut submission = TicketSubmission::new();

		submission.submit(&draft("Help", "broken", "not-an-email"), &sink, &notifier, || {
			closes.set(closes.get() + 1)
		});

		assert_eq!(submission.errors().get(DraftField::Email), Some(EMAIL_INVALID));
		assert_eq!(submission.errors().len(), 1);
		assert!(sink.drafts.borrow().is_empty());
		assert_eq!(closes.get(), 0);
	}

	#[test]
	fn valid_draft_submits_and_closes_once() {
		let sink = RecordingSink::default();
		let notifier = RecordingNotifier::default();
		let closes = Cell::new(0);
		let mut submission = TicketSubmission::new();
		let ticket = draft("Help", "broken", "a@b.com");

		let outcome = submission.submit(&ticket, &sink, &notifier, || closes.set(closes.get() + 1));

		assert_eq!(outcome, SubmitOutcome::Submitted);
		assert!(submission.errors().is_empty());
		assert_eq!(submission.phase(), FormPhase::Submitted);
		assert_eq!(*sink.drafts.borrow(), vec![ticket]);
		assert_eq!(*notifier.messages.borrow(), vec![String::from(SUBMIT_SUCCESS_MESSAGE)]);
		assert_eq!(closes.get(), 1);
	}

	#[test]
	fn errors_clear_after_corrected_resubmit() {
		let sink = RecordingSink::default();
		let notifier = RecordingNotifier::default();
		let closes = Cell::new(0);
		let mut submission = TicketSubmission::new();

		submission.submit(&draft("", "", ""), &sink, &notifier, || closes.set(closes.get() + 1));
		assert_eq!(submission.errors().len(), 3);

		let outcome = submission.submit(&draft("Help", "broken", "a@b.com"), &sink, &notifier, || {
			closes.set(closes.get() + 1)
		});
		assert_eq!(outcome, SubmitOutcome::Submitted);
		assert!(submission.errors().is_empty());
		assert_eq!(closes.get(), 1);
	}

	#[test]
	fn sink_failure_keeps_form_open() {
		let sink = RecordingSink {
			fail_with: Some(SubmissionError::Unavailable),
			..Default::default()
		};
		let notifier = RecordingNotifier::default();
		let closes = Cell::new(0);
		let mut submission = TicketSubmission::new();

		let outcome = submission.submit(&draft("Help", "broken", "a@b.com"), &sink, &notifier, || {
			closes.set(closes.get() + 1)
		});

		assert_eq!(outcome, SubmitOutcome::Failed(SubmissionError::Unavailable));
		assert_eq!(submission.phase(), FormPhase::Editing);
		assert_eq!(
			*notifier.messages.borrow(),
			vec![SubmissionError::Unavailable.user_message()]
		);
		assert_eq!(closes.get(), 0);
	}

	#[test]
	fn submit_after_success_is_ignored() {
		let sink = RecordingSink::default();
		let notifier = RecordingNotifier::default();
		let closes = Cell::new(0);
		let mut submission = TicketSubmission::new();
		let ticket = draft("Help", "broken", "a@b.com");

		submission.submit(&ticket, &sink, &notifier, || closes.set(closes.get() + 1));
		let outcome = submission.submit(&ticket, &sink, &notifier, || closes.set(closes.get() + 1));

		assert_eq!(outcome, SubmitOutcome::Ignored);
		assert_eq!(sink.drafts.borrow().len(), 1);
		assert_eq!(closes.get(), 1);
	}

	#[test]
	fn logging_sink_accepts_drafts() {
		assert_eq!(LoggingSubmissionSink.submit(&draft("Help", "broken", "a@b.com")), Ok(()));
	}
}
