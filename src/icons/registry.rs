// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// A stroke icon drawn on a 24×24 view box.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IconData {
	pub name: &'static str,
	/// SVG path data, drawn in order.
	pub paths: &'static [&'static str],
}

/// Looks up icons by name.
pub trait IconRegistry {
	fn lookup(&self, name: &str) -> Option<&IconData>;
}

/// The icons shipped with the app, in the Lucide style.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinIcons;

impl IconRegistry for BuiltinIcons {
	fn lookup(&self, name: &str) -> Option<&IconData> {
		BUILTIN_ICONS.iter().find(|icon| icon.name == name)
	}
}

static BUILTIN_ICONS: &[IconData] = &[
	IconData {
		name: "ChevronRight",
		paths: &["m9 18 6-6-6-6"],
	},
	IconData {
		name: "CircleAlert",
		paths: &[
			"M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z",
			"M12 8v4",
			"M12 16h.01",
		],
	},
	IconData {
		name: "Clock",
		paths: &["M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z", "M12 6v6l4 2"],
	},
	IconData {
		name: "Inbox",
		paths: &[
			"M22 12h-6l-2 3h-4l-2-3H2",
			"M5.45 5.11 2 12v6a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-6l-3.45-6.89A2 2 0 0 0 16.76 4H7.24a2 2 0 0 0-1.79 1.11z",
		],
	},
	IconData {
		name: "Plus",
		paths: &["M5 12h14", "M12 5v14"],
	},
	IconData {
		name: "RefreshCw",
		paths: &[
			"M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8",
			"M21 3v5h-5",
			"M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16",
			"M8 16H3v5",
		],
	},
	IconData {
		name: "Send",
		paths: &["m22 2-7 20-4-9-9-4z", "M22 2 11 13"],
	},
	IconData {
		name: "Ticket",
		paths: &[
			"M2 9a3 3 0 0 1 0 6v2a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-2a3 3 0 0 1 0-6V7a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2z",
			"M13 5v2",
			"M13 17v2",
			"M13 11v2",
		],
	},
	IconData {
		name: "X",
		paths: &["M18 6 6 18", "m6 6 12 12"],
	},
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtin_names_are_unique() {
		for (index, icon) in BUILTIN_ICONS.iter().enumerate() {
			assert!(
				BUILTIN_ICONS[index + 1..].iter().all(|other| other.name != icon.name),
				"duplicate icon {}",
				icon.name
			);
			assert!(!icon.paths.is_empty());
		}
	}

	#[test]
	fn lookup_is_case_sensitive() {
		assert!(BuiltinIcons.lookup("Inbox").is_some());
		assert!(BuiltinIcons.lookup("inbox").is_none());
	}
}
