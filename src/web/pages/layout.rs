// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::header::SiteHeader;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

/// Page chrome shared by every page: document title and description, the site header, and the page content.
#[component]
pub fn Layout(#[prop(into)] title: String, #[prop(into)] description: String, children: Children) -> impl IntoView {
	view! {
		<Title text=title />
		<Meta name="description" content=description />
		<SiteHeader />
		<main id="layout_content">
			{children()}
		</main>
	}
}
