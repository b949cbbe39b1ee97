// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> miette::Result<()> {
	use support_desk::config::parse_config;
	use support_desk::web::server::run_server;

	let config = parse_config("config.kdl").await?;
	tracing_subscriber::fmt().with_max_level(config.log_level).init();

	run_server(&config).await
}

#[cfg(not(feature = "ssr"))]
fn main() {
	// The client is built as a library and hydrated through `support_desk::hydrate`.
}
