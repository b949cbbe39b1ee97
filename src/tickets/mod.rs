// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod draft;
pub mod submission;
pub mod validation;

pub use draft::{DraftField, TicketDraft};
pub use submission::{
	AlertNotifier, FormPhase, LoggingSubmissionSink, SubmissionError, SubmissionNotifier, SubmissionSink,
	SubmitOutcome, TicketSubmission,
};
pub use validation::{ValidationErrors, validate_draft};
