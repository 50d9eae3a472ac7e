// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::pages::layout::Layout;
use crate::web::pages::site_metadata::{SiteMetadata, use_site_metadata};
use leptos::prelude::*;

/// Page shown for any route that doesn't exist
#[component]
pub fn NotFoundPage() -> impl IntoView {
	let SiteMetadata { title, subtitle } = use_site_metadata();

	view! {
		<Layout title={not_found_title(&title)} description=subtitle>
			<p>"You just hit a route that doesn't exist... the sadness."</p>
		</Layout>
	}
}

pub fn not_found_title(site_title: &str) -> String {
	format!("Not Found - {}", site_title)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::web::pages::site_metadata::provide_site_metadata;
	use any_spawner::Executor;
	use futures::StreamExt;
	use leptos::tachys::view::RenderHtml;
	use leptos_meta::{ServerMetaContext, provide_meta_context};

	const NOT_FOUND_MESSAGE: &str = "You just hit a route that doesn't exist... the sadness.";

	/// Renders the page into a document, with the layout's head tags injected the way the server does it
	async fn render_document(title: &str, subtitle: &str) -> String {
		let _ = Executor::init_tokio();

		let owner = Owner::new();
		let (meta_context, meta_output) = ServerMetaContext::new();
		let body = owner.with(|| {
			provide_meta_context();
			provide_context(meta_context);
			provide_site_metadata(SiteMetadata {
				title: String::from(title),
				subtitle: String::from(subtitle),
			});
			view! { <NotFoundPage /> }.to_html()
		});

		let document = format!("<html><head></head><body>{}</body></html>", body);
		let document = meta_output
			.inject_meta_context(futures::stream::iter([document]))
			.await
			.collect::<String>()
			.await;
		drop(owner);
		document
	}

	fn head(document: &str) -> &str {
		let head_end = document.find("</head>").unwrap();
		&document[..head_end]
	}

	fn body(document: &str) -> &str {
		let body_start = document.find("<body>").unwrap();
		&document[body_start..]
	}

	#[test]
	fn title_prefixes_site_title() {
		assert_eq!(not_found_title("My Site"), "Not Found - My Site");
	}

	#[test]
	fn title_keeps_prefix_for_empty_site_title() {
		assert_eq!(not_found_title(""), "Not Found - ");
	}

	#[tokio::test]
	async fn layout_gets_prefixed_title() {
		let document = render_document("My Site", "A site about things").await;
		assert!(head(&document).contains("<title>Not Found - My Site</title>"));
	}

	#[tokio::test]
	async fn layout_gets_subtitle_as_description() {
		let document = render_document("My Site", "A site about things").await;
		let head = head(&document);
		assert!(head.contains(r#"name="description""#));
		assert!(head.contains(r#"content="A site about things""#));
		assert!(!head.contains(r#"content="My Site""#));
	}

	#[tokio::test]
	async fn renders_message_inside_layout() {
		let document = render_document("My Site", "A site about things").await;
		let body = body(&document);
		let content_position = body.find("layout_content").unwrap();
		let message_position = body.find(NOT_FOUND_MESSAGE).unwrap();
		assert!(content_position < message_position);
	}

	#[tokio::test]
	async fn empty_metadata_keeps_title_prefix() {
		let document = render_document("", "").await;
		let head = head(&document);
		assert!(head.contains("<title>Not Found - </title>"));
		assert!(head.contains(r#"content="""#));
		assert!(body(&document).contains(NOT_FOUND_MESSAGE));
	}

	#[tokio::test]
	async fn repeated_renders_match() {
		let first = render_document("My Site", "A site about things").await;
		let second = render_document("My Site", "A site about things").await;
		assert_eq!(first, second);
	}
}
