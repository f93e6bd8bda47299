use crate::imports::*;

/// Provides a breif description of the page
#[component]
pub fn PageDescription(
	/// Additional classnames to appy to the \<p/> tag, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// Description of the page content
	#[prop(into)]
	description: String,
) -> impl IntoView {
	let class = move || format!("fr-fs-bl txt-grey mx-md {}", class.get());

	view! { <p class={class}>{description}</p> }
}
