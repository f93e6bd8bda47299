use leptos_meta::{Meta, Title};

use crate::imports::*;

/// Makes the title and description of a page visible in the document head.
///
/// Sets the `<title>` of the document and a `<meta name="description">` tag.
/// Nothing is rendered into the body. Requires a meta context, see
/// [`leptos_meta::provide_meta_context`].
#[component]
pub fn PageMeta(
	/// The metadata of the page being rendered
	meta: PageMetadata,
) -> impl IntoView {
	debug!("Setting page metadata: `{}`", meta.title);

	view! {
		<Title text={meta.title} />
		<Meta name="description" content={meta.description} />
	}
}

#[cfg(test)]
mod test {
	use leptos_meta::{provide_meta_context, use_head};

	use crate::imports::*;

	const META: PageMetadata = PageMetadata::new(
		"Skills Management | RoleReady Admin",
		"Manage skills for the RoleReady platform.",
	);

	#[test]
	fn injects_title_and_description() {
		let runtime = create_runtime();
		provide_meta_context();

		let body = view! { <PageMeta meta={META} /> }
			.into_view()
			.render_to_string()
			.to_string();
		let head = use_head().dehydrate();
		runtime.dispose();

		assert!(head.contains("<title>Skills Management | RoleReady Admin</title>"));
		assert!(head.contains("name=\"description\""));
		assert!(head.contains("Manage skills for the RoleReady platform."));
		assert!(!body.contains("Manage skills"));
	}
}
