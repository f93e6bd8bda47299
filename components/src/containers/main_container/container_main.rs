use crate::imports::*;

/// The Main Container for all the content of a page
#[component]
pub fn ContainerMain(
	/// Additional class names to apply to the outer section, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// The Children of the component
	children: Children,
) -> impl IntoView {
	let class = move || {
		format!(
			"fc-fs-fs bg-secondary-dark full-width full-height mb-md br-sm of-hidden {}",
			class.get()
		)
	};

	view! { <section class={class}>{children()}</section> }
}
