use crate::imports::*;

/// The header of a page's main container. Shows the visible page title, and
/// below it a short description when the page needs one.
#[component]
pub fn PageHeader(
	/// The heading of the page
	#[prop(into)]
	title: String,
	/// What the page is for
	#[prop(into, optional)]
	description: Option<String>,
	/// Additional class names to apply to the header, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
) -> impl IntoView {
	let class = move || {
		format!(
			"fc-fs-fs px-xl py-md bg-secondary-light full-width {}",
			class.get()
		)
	};

	view! {
		<header class={class}>
			<PageTitle>{title}</PageTitle>
			{description.map(|description| view! { <PageDescription description={description}/> })}
		</header>
	}
}

#[cfg(test)]
mod test {
	use crate::imports::*;

	/// Renders the given view to HTML with a fresh reactive runtime
	fn render<F, IV>(view: F) -> String
	where
		F: FnOnce() -> IV,
		IV: IntoView,
	{
		let runtime = create_runtime();
		let html = view().into_view().render_to_string().to_string();
		runtime.dispose();
		html
	}

	#[test]
	fn renders_title_and_description() {
		let html = render(|| {
			view! { <PageHeader title="Skills" description="Manage the skills of mentors"/> }
		});

		let title = html.find("Skills").expect("title is rendered");
		let description = html
			.find("Manage the skills of mentors")
			.expect("description is rendered");
		assert!(html.contains("<h1"));
		assert!(title < description);
	}

	#[test]
	fn description_is_optional() {
		let html = render(|| view! { <PageHeader title="Profile"/> });

		assert!(html.contains("Profile"));
		assert!(!html.contains("<p"));
	}
}
