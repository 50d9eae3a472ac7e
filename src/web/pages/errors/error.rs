// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn Error() -> impl IntoView {
	view! {
		<Title text="Error" />
		<main id="error_page">
			<h1>"Something went wrong"</h1>
			<p>"This page couldn't be loaded. Please try again later."</p>
		</main>
	}
}
