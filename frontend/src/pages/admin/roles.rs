use crate::prelude::*;

/// The metadata of the roles management page
pub const ROLES_PAGE_META: PageMetadata = PageMetadata::new(
	"Roles Management | RoleReady Admin",
	"Manage roles and categories for the RoleReady platform.",
);

/// The page mounted at [`AppRoutes::AdminRoles`]
#[component]
pub fn AdminRolesManagement() -> impl IntoView {
	view! { <PageShell meta={ROLES_PAGE_META} feature={AdminRolesPage}/> }
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::pages::test_utils::render_page;

	#[test]
	fn injects_roles_metadata() {
		let page = render_page(AdminRolesManagement);

		assert_eq!(page.title(), Some("Roles Management | RoleReady Admin"));
		assert!(page
			.head
			.contains("Manage roles and categories for the RoleReady platform."));
	}

	#[test]
	fn renders_roles_feature() {
		let page = render_page(AdminRolesManagement);

		assert!(page.body.contains("Backend Engineer"));
		assert!(page.body.contains("Engineering"));
	}

	#[test]
	fn metadata_is_identical_across_renders() {
		let first = render_page(AdminRolesManagement);
		let second = render_page(AdminRolesManagement);

		assert_eq!(first.title(), second.title());
		assert_eq!(
			first.head.matches(ROLES_PAGE_META.description).count(),
			second.head.matches(ROLES_PAGE_META.description).count(),
		);
	}
}
