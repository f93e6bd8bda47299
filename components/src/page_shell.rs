use crate::imports::*;

/// The composition every routable page is made of. Renders the page metadata
/// first, followed by the page's feature component.
///
/// The feature is rendered exactly once, with no arguments. Nothing else is
/// rendered around it and errors raised by either part are not caught.
///
/// ```ignore
/// const META: PageMetadata = PageMetadata::new("Title", "Description");
///
/// #[component]
/// pub fn MyPage() -> impl IntoView {
/// 	view! { <PageShell meta={META} feature={MyFeature} /> }
/// }
/// ```
#[component]
pub fn PageShell<F, IV>(
	/// The metadata to make visible in the document head
	meta: PageMetadata,
	/// Renders the actual content of the page
	feature: F,
) -> impl IntoView
where
	F: Fn() -> IV + 'static,
	IV: IntoView,
{
	trace!("Rendering page `{}`", meta.title);

	let head = view! { <PageMeta meta={meta} /> }.into_view();
	let content = feature().into_view();

	view! {
		{head}
		{content}
	}
}
