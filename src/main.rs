// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> miette::Result<()> {
	use lantern::config::{CONFIG_PATH, parse_config};
	use lantern::web::server::run_server;
	use std::sync::Arc;

	tracing_subscriber::fmt::init();

	let config = parse_config(CONFIG_PATH).await?;
	tracing::info!(site_title = %config.site.title, "Loaded configuration");

	run_server(Arc::new(config)).await
}

// The client bundle is started through `hydrate` in the library instead.
#[cfg(not(feature = "ssr"))]
pub fn main() {}
