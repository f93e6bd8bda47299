use std::fmt::Display;

use strum::EnumIter;

/// The list of all the routes on the frontend
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum AppRoutes {
	/// The Empty Route, redirects to the roles page.
	#[default]
	Empty,
	/// The Roles Management Page of the admin console
	AdminRoles,
	/// The Skills Management Page of the admin console
	AdminSkills,
	/// The Profile Page of the mentor dashboard
	MentorDashboardProfile,
}

impl AppRoutes {
	/// The path this route is mounted at
	pub const fn path(self) -> &'static str {
		match self {
			Self::Empty => "/",
			Self::AdminRoles => "/admin/roles",
			Self::AdminSkills => "/admin/skills",
			Self::MentorDashboardProfile => "/mentor-dashboard/profile",
		}
	}
}

impl Display for AppRoutes {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.path())
	}
}

#[cfg(test)]
mod test {
	use std::collections::HashSet;

	use strum::IntoEnumIterator;

	use super::AppRoutes;

	#[test]
	fn routes_render_to_their_paths() {
		assert_eq!(AppRoutes::Empty.to_string(), "/");
		assert_eq!(AppRoutes::AdminRoles.to_string(), "/admin/roles");
		assert_eq!(AppRoutes::AdminSkills.to_string(), "/admin/skills");
		assert_eq!(
			AppRoutes::MentorDashboardProfile.to_string(),
			"/mentor-dashboard/profile"
		);
	}

	#[test]
	fn route_paths_are_unique() {
		let paths = AppRoutes::iter()
			.map(|route| route.path())
			.collect::<HashSet<_>>();

		assert_eq!(paths.len(), AppRoutes::iter().count());
		assert!(paths.iter().all(|path| path.starts_with('/')));
	}
}
