use crate::imports::*;

/// The scrollable content area of a [`ContainerMain`], below its
/// [`PageHeader`]
#[component]
pub fn ContainerBody(
	/// The Children of the component
	children: Children,
	/// Additional Classnames to be given to the outer div
	#[prop(into, optional)]
	class: MaybeSignal<String>,
) -> impl IntoView {
	let class = move || {
		format!(
			"pos-rel fc-fs-ct full-width full-height ofy-auto px-xl py-md {}",
			class.get()
		)
	};

	view! { <div class={class}>{children()}</div> }
}
