// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// A support ticket as shown in the user's ticket list.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct Ticket {
	pub id: String,
	pub subject: String,
	pub status: TicketStatus,
	pub priority: TicketPriority,
	pub created_at: NaiveDate,
	pub updated_at: NaiveDate,
}

impl Ticket {
	/// Gets the creation date as shown to users.
	pub fn created_display(&self) -> String {
		self.created_at.format("%Y-%m-%d").to_string()
	}

	/// Gets the last update date as shown to users.
	pub fn updated_display(&self) -> String {
		self.updated_at.format("%Y-%m-%d").to_string()
	}
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
	New,
	InProgress,
	Resolved,
	Closed,
}

impl TicketStatus {
	pub fn label(&self) -> &'static str {
		match self {
			Self::New => "New",
			Self::InProgress => "In progress",
			Self::Resolved => "Resolved",
			Self::Closed => "Closed",
		}
	}

	/// The CSS class for the small status indicator dot.
	pub fn indicator_class(&self) -> &'static str {
		match self {
			Self::New => "status_new",
			Self::InProgress => "status_in_progress",
			Self::Resolved => "status_resolved",
			Self::Closed => "status_closed",
		}
	}
}

impl fmt::Display for TicketStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.label())
	}
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
	Low,
	#[default]
	Medium,
	High,
	Urgent,
}

impl TicketPriority {
	pub const ALL: [TicketPriority; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

	pub fn label(&self) -> &'static str {
		match self {
			Self::Low => "Low",
			Self::Medium => "Medium",
			Self::High => "High",
			Self::Urgent => "Urgent",
		}
	}

	/// The name used for this priority in form values and serialized data.
	pub fn value(&self) -> &'static str {
		match self {
			Self::Low => "low",
			Self::Medium => "medium",
			Self::High => "high",
			Self::Urgent => "urgent",
		}
	}

	pub fn text_class(&self) -> &'static str {
		match self {
			Self::Low => "priority_low",
			Self::Medium => "priority_medium",
			Self::High => "priority_high",
			Self::Urgent => "priority_urgent",
		}
	}
}

impl fmt::Display for TicketPriority {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.label())
	}
}

impl FromStr for TicketPriority {
	type Err = UnknownPriority;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|priority| priority.value() == value)
			.ok_or_else(|| UnknownPriority(value.to_string()))
	}
}

#[derive(Debug, Eq, PartialEq)]
pub struct UnknownPriority(pub String);

impl fmt::Display for UnknownPriority {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "unknown ticket priority \"{}\"", self.0)
	}
}

impl Error for UnknownPriority {}

/// The tickets shown in the ticket list until tickets are loaded from a backend.
pub fn sample_tickets() -> Vec<Ticket> {
	vec![
		sample_ticket(
			"1",
			"Data export does not work",
			TicketStatus::InProgress,
			TicketPriority::High,
			(2025, 1, 20),
			(2025, 1, 22),
		),
		sample_ticket(
			"2",
			"Question about notification settings",
			TicketStatus::Resolved,
			TicketPriority::Medium,
			(2025, 1, 18),
			(2025, 1, 19),
		),
		sample_ticket(
			"3",
			"Error when signing in",
			TicketStatus::Closed,
			TicketPriority::Urgent,
			(2025, 1, 15),
			(2025, 1, 16),
		),
	]
}

fn sample_ticket(
	id: &str,
	subject: &str,
	status: TicketStatus,
	priority: TicketPriority,
	created: (i32, u32, u32),
	updated: (i32, u32, u32),
) -> Ticket {
	Ticket {
		id: id.to_string(),
		subject: subject.to_string(),
		status,
		priority,
		created_at: NaiveDate::from_ymd_opt(created.0, created.1, created.2).unwrap_or_default(),
		updated_at: NaiveDate::from_ymd_opt(updated.0, updated.1, updated.2).unwrap_or_default(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn priority_defaults_to_medium() {
		assert_eq!(TicketPriority::default(), TicketPriority::Medium);
	}

	#[test]
	fn priority_parses_form_values() {
		for priority in TicketPriority::ALL {
			assert_eq!(priority.value().parse::<TicketPriority>(), Ok(priority));
		}
		assert_eq!(
			"critical".parse::<TicketPriority>(),
			Err(UnknownPriority(String::from("critical")))
		);
	}

	#[test]
	fn status_serializes_with_snake_case_names() {
		let json = serde_json::to_string(&TicketStatus::InProgress).unwrap();
		assert_eq!(json, "\"in_progress\"");
		let status: TicketStatus = serde_json::from_str("\"closed\"").unwrap();
		assert_eq!(status, TicketStatus::Closed);
	}

	#[test]
	fn sample_tickets_have_display_dates() {
		let tickets = sample_tickets();
		assert_eq!(tickets.len(), 3);
		assert_eq!(tickets[0].status, TicketStatus::InProgress);
		assert_eq!(tickets[0].created_display(), "2025-01-20");
		assert_eq!(tickets[2].updated_display(), "2025-01-16");
		assert_eq!(tickets[2].priority.label(), "Urgent");
	}
}
