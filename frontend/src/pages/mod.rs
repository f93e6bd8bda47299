mod admin;
mod mentor_dashboard;
mod not_found;

pub use self::{admin::*, mentor_dashboard::*, not_found::*};

/// Helpers for rendering pages on the server in tests
#[cfg(test)]
pub(crate) mod test_utils {
	use leptos_meta::{provide_meta_context, use_head};

	use crate::prelude::*;

	/// A page as rendered on the server
	pub struct RenderedPage {
		/// The HTML of the document body
		pub body: String,
		/// The tags injected into the document head
		pub head: String,
	}

	impl RenderedPage {
		/// The text of the `<title>` tag, if any
		pub fn title(&self) -> Option<&str> {
			let (_, rest) = self.head.split_once("<title>")?;
			let (title, _) = rest.split_once("</title>")?;
			Some(title)
		}
	}

	/// Renders a page with a fresh reactive runtime and meta context
	pub fn render_page<F, IV>(page: F) -> RenderedPage
	where
		F: FnOnce() -> IV,
		IV: IntoView,
	{
		let runtime = create_runtime();
		provide_meta_context();

		let body = page().into_view().render_to_string().to_string();
		let head = use_head().dehydrate();
		runtime.dispose();

		RenderedPage { body, head }
	}
}
