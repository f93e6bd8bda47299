use crate::prelude::*;

/// The metadata of the not found page
pub const NOT_FOUND_META: PageMetadata = PageMetadata::new(
	"Page Not Found | RoleReady Admin",
	"The page you are looking for does not exist.",
);

/// Rendered by the router for any path that matches neither a page nor a
/// static file
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<PageShell
			meta={NOT_FOUND_META}
			feature={|| view! {
				<div class="fc-ct-ct full-width pt-xl">
					<h1 class="txt-primary txt-xl">"404 Not Found"</h1>
					<p class="txt-grey">{NOT_FOUND_META.description}</p>
				</div>
			}}
		/>
	}
}
