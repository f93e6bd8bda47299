#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::missing_docs_in_private_items)]

//! Main admin console for RoleReady

/// Prelude module. Used to re-export commonly used items.
pub mod prelude {
	pub use components::prelude::*;
	pub use leptos::*;
	pub use log::{debug, error, info, trace, warn};
	pub use models::prelude::*;
	// `leptos::ResourceId` would otherwise shadow the catalog IDs
	pub use models::ResourceId;

	pub use crate::{features::*, pages::*, utils::*};
}

/// The application logic code. This contains the routers and all the routing
/// logic
pub mod app;
/// The feature components. These implement the actual content of each page,
/// and are rendered by the page wrappers in [`pages`].
pub mod features;
/// The pages module. This contains all the pages used in the application.
/// Pages are the main views that are rendered when a route is matched.
pub mod pages;
/// The utils module. This contains all the utility functions and other things
/// needed to make the application work.
pub mod utils;

use leptos_meta::{provide_meta_context, Link as MetaLink, Meta, Stylesheet, Title};
use prelude::*;

/// The main hydrate function. Called when the application starts to hydrate
/// from the server side.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
	wasm_logger::init(wasm_logger::Config::default());

	if cfg!(debug_assertions) {
		console_error_panic_hook::set_once();
	}

	mount_to_body(render);
}

/// The document head shared by every page. Page specific tags are added by
/// each page using [`PageMeta`].
#[component]
fn DocumentHead() -> impl IntoView {
	view! {
		<Meta charset="utf-8"/>
		<MetaLink rel="shortcut icon" href="/favicon.svg" type_="image/svg+xml"/>
		<Meta name="viewport" content="width=device-width, initial-scale=1"/>
		<Meta name="theme-color" content="#000000"/>
		<MetaLink rel="preconnect" href="https://fonts.googleapis.com"/>
		<MetaLink rel="preconnect" href="https://fonts.gstatic.com" crossorigin=""/>
		<MetaLink
			href="https://fonts.googleapis.com/css2?family=Poppins:wght@300;400;500;600;700&display=swap"
			rel="stylesheet"
		/>
		<Stylesheet id="leptos" href="/pkg/dashboard.css"/>

		<Title formatter={|title: String| {
			if title.is_empty() { "RoleReady Admin".to_string() } else { title }
		}}/>
	}
}

/// The main render function. Called when the application starts to render
/// from the client side.
pub fn render() -> impl IntoView {
	use app::App;

	provide_meta_context();
	view! {
		<DocumentHead/>
		<App/>
	}
}
