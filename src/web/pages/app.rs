// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::errors::not_found::NotFoundPage;
use super::index::IndexPage;
use super::site_metadata::SiteMetadataProvider;
use leptos::prelude::*;
use leptos_meta::{Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Stylesheet id="leptos" href="/pkg/lantern.css" />

		<Router>
			<Routes fallback=not_found>
				<Route path=path!("/") view=Index />
			</Routes>
		</Router>
	}
}

#[component]
fn Index() -> impl IntoView {
	view! {
		<SiteMetadataProvider>
			<IndexPage />
		</SiteMetadataProvider>
	}
}

fn not_found() -> impl IntoView {
	#[cfg(feature = "ssr")]
	{
		if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
			response.set_status(axum::http::StatusCode::NOT_FOUND);
		}
	}

	view! {
		<SiteMetadataProvider>
			<NotFoundPage />
		</SiteMetadataProvider>
	}
}
