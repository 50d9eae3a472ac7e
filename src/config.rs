// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::pages::site_metadata::SiteMetadata;
use kdl::{KdlDocument, KdlNode};
use miette::{IntoDiagnostic, Result, miette};
use tokio::fs::read_to_string;

pub const CONFIG_PATH: &str = "config.kdl";

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	parse_config_document(&config_file_contents)
}

/// Parses the contents of a configuration file
pub fn parse_config_document(contents: &str) -> Result<ConfigData> {
	let document: KdlDocument = contents.parse()?;

	let site = required_block(&document, "site")?;
	let site = SiteMetadata {
		title: required_string(site, "site", "title")?,
		subtitle: required_string(site, "site", "subtitle")?,
	};

	let web = required_block(&document, "web")?;
	let web = WebConfig {
		bind_addr: required_string(web, "web", "bind_addr")?,
	};

	Ok(ConfigData { site, web })
}

fn required_block<'a>(document: &'a KdlDocument, name: &str) -> Result<&'a KdlDocument> {
	document
		.get(name)
		.and_then(KdlNode::children)
		.ok_or_else(|| miette!("Configuration is missing the `{}` block", name))
}

fn required_string(block: &KdlDocument, block_name: &str, name: &str) -> Result<String> {
	let Some(value) = block.get_arg(name) else {
		return Err(miette!("Configuration is missing `{}.{}`", block_name, name));
	};
	value
		.as_string()
		.map(String::from)
		.ok_or_else(|| miette!("Configuration value `{}.{}` must be a string", block_name, name))
}

#[derive(Debug)]
pub struct ConfigData {
	pub site: SiteMetadata,
	pub web: WebConfig,
}

#[derive(Debug)]
pub struct WebConfig {
	pub bind_addr: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_complete_config() {
		let config = parse_config_document(
			r#"
			site {
				title "My Site"
				subtitle "A site about things"
			}
			web {
				bind_addr "127.0.0.1:3000"
			}
			"#,
		)
		.unwrap();

		assert_eq!(config.site.title, "My Site");
		assert_eq!(config.site.subtitle, "A site about things");
		assert_eq!(config.web.bind_addr, "127.0.0.1:3000");
	}

	#[test]
	fn accepts_empty_metadata() {
		let config = parse_config_document(
			r#"
			site {
				title ""
				subtitle ""
			}
			web {
				bind_addr "0.0.0.0:8080"
			}
			"#,
		)
		.unwrap();

		assert_eq!(config.site.title, "");
		assert_eq!(config.site.subtitle, "");
	}

	#[test]
	fn rejects_missing_site_block() {
		let result = parse_config_document(
			r#"
			web {
				bind_addr "127.0.0.1:3000"
			}
			"#,
		);
		assert!(result.is_err());
	}

	#[test]
	fn rejects_missing_subtitle() {
		let result = parse_config_document(
			r#"
			site {
				title "My Site"
			}
			web {
				bind_addr "127.0.0.1:3000"
			}
			"#,
		);
		let error = result.unwrap_err();
		assert!(error.to_string().contains("site.subtitle"));
	}

	#[test]
	fn rejects_non_string_title() {
		let result = parse_config_document(
			r#"
			site {
				title 42
				subtitle "A site about things"
			}
			web {
				bind_addr "127.0.0.1:3000"
			}
			"#,
		);
		let error = result.unwrap_err();
		assert!(error.to_string().contains("must be a string"));
	}

	#[test]
	fn rejects_invalid_kdl() {
		assert!(parse_config_document("site {").is_err());
	}
}
