use crate::imports::*;

/// Sets the Text Size of the Page Title
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PageTitleVariant {
	/// Large text
	#[default]
	Heading,
	/// Medium Text
	SubHeading,
	/// Small Text
	Text,
}

impl PageTitleVariant {
	/// The class names used for this variant
	pub const fn as_css_name(self) -> &'static str {
		match self {
			Self::Heading => "txt-xl",
			Self::SubHeading => "txt-md txt-white",
			Self::Text => "txt-sm txt-white",
		}
	}
}

/// The visible heading of a page section. Not to be confused with
/// [`PageMeta`], which sets the document title.
#[component]
pub fn PageTitle(
	/// Additional class names to pass to the heading, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// The Children of the component
	children: Children,
	/// Title Text Style
	#[prop(into, optional)]
	variant: MaybeSignal<PageTitleVariant>,
) -> impl IntoView {
	let class = move || {
		format!(
			"p-xxs fr-fs-ct txt-primary {} {}",
			variant.get().as_css_name(),
			class.get()
		)
	};

	view! { <h1 class={class}>{children()}</h1> }
}
