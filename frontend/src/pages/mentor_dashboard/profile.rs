use crate::{features::vendor_dashboard::Profile, prelude::*};

/// The metadata of the mentor dashboard profile page. The strings are kept as
/// they are shipped today, even though they name the vendor dashboard.
pub const MENTOR_PROFILE_META: PageMetadata = PageMetadata::new(
	"Vendor Dashboard || GoTrip - Travel & Tour ReactJs Template",
	"GoTrip - Travel & Tour ReactJs Template",
);

/// The page mounted at [`AppRoutes::MentorDashboardProfile`]. Reuses the
/// vendor dashboard profile.
#[component]
pub fn MentorDashboardProfile() -> impl IntoView {
	view! { <PageShell meta={MENTOR_PROFILE_META} feature={Profile}/> }
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::pages::test_utils::render_page;

	#[test]
	fn injects_profile_metadata() {
		let page = render_page(MentorDashboardProfile);

		assert_eq!(page.title(), Some(MENTOR_PROFILE_META.title));
		assert_eq!(
			page.title(),
			Some("Vendor Dashboard || GoTrip - Travel & Tour ReactJs Template")
		);
		assert!(page.head.contains("name=\"description\""));
		assert!(page
			.head
			.contains("content=\"GoTrip - Travel &amp; Tour ReactJs Template\""));
		assert!(page.body.contains("Personal Information"));
	}
}
