// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::layout::Layout;
use super::site_metadata::{SiteMetadata, use_site_metadata};
use leptos::prelude::*;

#[component]
pub fn IndexPage() -> impl IntoView {
	let SiteMetadata { title, subtitle } = use_site_metadata();

	view! {
		<Layout title=title description=subtitle>
			<p>"Welcome! There's nothing posted here yet."</p>
		</Layout>
	}
}
