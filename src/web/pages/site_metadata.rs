// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::errors::error::Error;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Site-wide descriptive strings, loaded once from configuration
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SiteMetadata {
	pub title: String,
	pub subtitle: String,
}

#[server]
pub async fn get_site_metadata() -> Result<SiteMetadata, ServerFnError> {
	use crate::web::state::AppState;

	let state = expect_context::<AppState>();
	Ok(state.config.site.clone())
}

pub fn provide_site_metadata(metadata: SiteMetadata) {
	provide_context(metadata);
}

/// Gets the site metadata for the current page.
/// Must be used below a [`SiteMetadataProvider`] (or after [`provide_site_metadata`]).
pub fn use_site_metadata() -> SiteMetadata {
	expect_context::<SiteMetadata>()
}

/// Loads the site metadata and makes it available to everything rendered inside it.
/// The load blocks the HTML stream so that page titles and descriptions land in the first `<head>`.
#[component]
pub fn SiteMetadataProvider(children: ChildrenFn) -> impl IntoView {
	view! {
		<Await future=get_site_metadata() blocking=true let:metadata>
			{
				match metadata {
					Ok(metadata) => {
						provide_site_metadata(metadata.clone());
						children().into_any()
					}
					Err(error) => {
						tracing::error!(source = ?error, "Failed to load site metadata");
						view! { <Error /> }.into_any()
					}
				}
			}
		</Await>
	}
}
