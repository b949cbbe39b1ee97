// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::draft::{DraftField, TicketDraft};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

pub const SUBJECT_REQUIRED: &str = "Enter a subject for your ticket";
pub const DESCRIPTION_REQUIRED: &str = "Describe your problem";
pub const EMAIL_REQUIRED: &str = "Enter an email address so we can contact you";
pub const EMAIL_INVALID: &str = "Invalid email address";

static EMAIL_PATTERN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should be valid"));

/// Per-field messages from one validation pass.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ValidationErrors {
	errors: BTreeMap<DraftField, String>,
}

impl ValidationErrors {
	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	pub fn len(&self) -> usize {
		self.errors.len()
	}

	pub fn get(&self, field: DraftField) -> Option<&str> {
		self.errors.get(&field).map(String::as_str)
	}

	pub fn contains(&self, field: DraftField) -> bool {
		self.errors.contains_key(&field)
	}

	pub fn iter(&self) -> impl Iterator<Item = (DraftField, &str)> {
		self.errors.iter().map(|(field, message)| (*field, message.as_str()))
	}

	fn insert(&mut self, field: DraftField, message: &str) {
		self.errors.insert(field, message.to_string());
	}
}

/// Runs a full validation pass over the draft.
pub fn validate_draft(draft: &TicketDraft) -> ValidationErrors {
	let mut errors = ValidationErrors::default();

	if draft.subject.trim().is_empty() {
		errors.insert(DraftField::Subject, SUBJECT_REQUIRED);
	}

	if draft.description.trim().is_empty() {
		errors.insert(DraftField::Description, DESCRIPTION_REQUIRED);
	}

	if draft.email.trim().is_empty() {
		errors.insert(DraftField::Email, EMAIL_REQUIRED);
	} else if !is_valid_email(&draft.email) {
		errors.insert(DraftField::Email, EMAIL_INVALID);
	}

	errors
}

/// Checks the address has the shape `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(email: &str) -> bool {
	EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn draft(subject: &str, description: &str, email: &str) -> TicketDraft {
		TicketDraft {
			subject: subject.to_string(),
			description: description.to_string(),
			email: email.to_string(),
			..Default::default()
		}
	}

	#[test]
	fn blank_fields_are_required() {
		let errors = validate_draft(&draft("   ", "\t\n", " "));
		assert_eq!(errors.len(), 3);
		assert_eq!(errors.get(DraftField::Subject), Some(SUBJECT_REQUIRED));
		assert_eq!(errors.get(DraftField::Description), Some(DESCRIPTION_REQUIRED));
		assert_eq!(errors.get(DraftField::Email), Some(EMAIL_REQUIRED));
	}

	#[test]
	fn missing_subject_only() {
		let errors = validate_draft(&draft("", "x", "a@b.com"));
		assert_eq!(errors.len(), 1);
		assert_eq!(errors.get(DraftField::Subject), Some(SUBJECT_REQUIRED));
	}

	#[test]
	fn malformed_email_is_invalid() {
		let errors = validate_draft(&draft("Help", "broken", "not-an-email"));
		assert_eq!(errors.len(), 1);
		assert_eq!(errors.get(DraftField::Email), Some(EMAIL_INVALID));
	}

	#[test]
	fn complete_draft_passes() {
		assert!(validate_draft(&draft("Help", "broken", "a@b.com")).is_empty());
	}

	#[test]
	fn email_shapes() {
		for valid in ["a@b.com", "first.last@mail.example.org", "x+tag@sub.domain.io"] {
			assert!(is_valid_email(valid), "{valid} should be accepted");
		}
		for invalid in [
			"a@b",
			"@b.com",
			"a@.com@x.y",
			"a b@c.com",
			"a@b c.com",
			"a@@b.com",
			"ab.com",
			"a@b.",
		] {
			assert!(!is_valid_email(invalid), "{invalid} should be rejected");
		}
	}

	#[test]
	fn priority_does_not_affect_validation() {
		for priority in crate::model::TicketPriority::ALL {
			let mut ticket = draft("Help", "broken", "a@b.com");
			ticket.priority = priority;
			assert!(validate_draft(&ticket).is_empty());
		}
	}

	#[test]
	fn validation_is_repeatable() {
		let ticket = draft("", "broken", "nope");
		assert_eq!(validate_draft(&ticket), validate_draft(&ticket));
	}

	#[test]
	fn errors_iterate_in_field_order() {
		let errors = validate_draft(&TicketDraft::default());
		let fields: Vec<DraftField> = errors.iter().map(|(field, _)| field).collect();
		assert_eq!(fields, vec![DraftField::Subject, DraftField::Description, DraftField::Email]);
	}
}
