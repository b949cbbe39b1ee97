// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::registry::{BuiltinIcons, IconData, IconRegistry};
use std::borrow::Cow;

/// The icon used when a requested icon doesn't exist.
pub const DEFAULT_FALLBACK_ICON: &str = "CircleAlert";

/// Resolves icon names against a registry, falling back to a configured icon.
#[derive(Clone, Debug)]
pub struct IconResolver<R = BuiltinIcons> {
	registry: R,
	/// Name of the icon used when the requested one isn't registered.
	pub fallback: Cow<'static, str>,
}

impl IconResolver<BuiltinIcons> {
	/// Creates a resolver over the built-in icons with the default fallback.
	pub fn builtin() -> Self {
		Self::new(BuiltinIcons)
	}
}

impl Default for IconResolver<BuiltinIcons> {
	fn default() -> Self {
		Self::builtin()
	}
}

impl<R: IconRegistry> IconResolver<R> {
	pub fn new(registry: R) -> Self {
		Self {
			registry,
			fallback: Cow::Borrowed(DEFAULT_FALLBACK_ICON),
		}
	}

	pub fn with_fallback(mut self, fallback: impl Into<Cow<'static, str>>) -> Self {
		self.fallback = fallback.into();
		self
	}

	/// Resolves an icon using the configured fallback.
	pub fn resolve(&self, name: &str) -> Option<&IconData> {
		self.resolve_with_fallback(name, &self.fallback)
	}

	/// Resolves an icon, using `fallback` instead of the configured fallback.
	///
	/// Logs a warning when neither icon exists.
	pub fn resolve_with_fallback(&self, name: &str, fallback: &str) -> Option<&IconData> {
		let icon = self.registry.lookup(name).or_else(|| self.registry.lookup(fallback));
		if icon.is_none() {
			tracing::warn!(icon = name, fallback, "Icon not found, and the fallback icon was also not found");
		}
		icon
	}
}
