// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::model::TicketPriority;
use reactive_stores::Store;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The unsaved input of the ticket creation form.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize, Store)]
pub struct TicketDraft {
	pub subject: String,
	pub description: String,
	pub priority: TicketPriority,
	pub email: String,
}

/// A draft field that can carry a validation error.
///
/// Priority has no entry here since it's always chosen from a fixed list.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
	Subject,
	Description,
	Email,
}

impl DraftField {
	pub fn name(&self) -> &'static str {
		match self {
			Self::Subject => "subject",
			Self::Description => "description",
			Self::Email => "email",
		}
	}
}

impl fmt::Display for DraftField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.name())
	}
}
