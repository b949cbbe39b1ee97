// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::icons::IconResolver;
use leptos::prelude::*;

/// Renders a named icon as inline SVG.
///
/// The resolver comes from context if one was provided, otherwise the built-in icons are used. If neither `name` nor
/// the fallback icon exists, nothing is rendered.
#[component]
pub fn Icon(
	#[prop(into)] name: String,
	/// Overrides the resolver's configured fallback icon
	#[prop(optional, into)]
	fallback: Option<String>,
	#[prop(default = 24)] size: u32,
	#[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
	let resolver = use_context::<IconResolver>().unwrap_or_default();
	let icon = match &fallback {
		Some(fallback) => resolver.resolve_with_fallback(&name, fallback),
		None => resolver.resolve(&name),
	}
	.copied();
	let size = size.to_string();
	let class = class.unwrap_or_default();

	icon.map(|icon| {
		view! {
			<svg
				xmlns="http://www.w3.org/2000/svg"
				width={size.clone()}
				height=size
				viewBox="0 0 24 24"
				fill="none"
				stroke="currentColor"
				stroke-width="2"
				stroke-linecap="round"
				stroke-linejoin="round"
				class=class
				aria-hidden="true"
			>
				{icon.paths.iter().map(|path_data| view! { <path d={*path_data} /> }).collect_view()}
			</svg>
		}
	})
}
