// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::{KdlDocument, KdlNode};
use miette::{IntoDiagnostic, Result, bail, miette};
use tokio::fs::read_to_string;
use tracing::Level;

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	parse_config_contents(&config_file_contents)
}

pub fn parse_config_contents(config_file_contents: &str) -> Result<ConfigData> {
	let document: KdlDocument = config_file_contents.parse()?;

	let Some(web_node) = document.get("web") else {
		bail!("Config is missing the `web` block");
	};
	let web = WebConfig::from_node(web_node)?;

	let log_level = match document.get_arg("log_level") {
		Some(value) => {
			let Some(level) = value.as_string() else {
				bail!("`log_level` must be a string");
			};
			level
				.parse()
				.map_err(|_| miette!("`{}` is not a valid log level", level))?
		}
		None => Level::INFO,
	};

	Ok(ConfigData { web, log_level })
}

#[derive(Debug)]
pub struct ConfigData {
	pub web: WebConfig,
	/// The most verbose level written to the log. Defaults to `info`.
	pub log_level: Level,
}

#[derive(Debug)]
pub struct WebConfig {
	pub bind_addr: String,
}

impl WebConfig {
	fn from_node(node: &KdlNode) -> Result<Self> {
		let bind_addr = node
			.children()
			.and_then(|children| children.get_arg("bind_addr"))
			.and_then(|value| value.as_string());
		let Some(bind_addr) = bind_addr else {
			bail!("`web` block must set `bind_addr` to a string");
		};

		Ok(Self {
			bind_addr: bind_addr.to_string(),
		})
	}
}
