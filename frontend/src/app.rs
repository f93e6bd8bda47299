use leptos_router::{Redirect, Route, Router, Routes};

use crate::prelude::*;

/// The main application component. This is the root component of the
/// application. It contains the main router and all the routes.
#[component]
pub fn App() -> impl IntoView {
	view! {
		<Router fallback={not_found}>
			<main class="fc-fs-ct full-width full-height bg-secondary px-lg">
				<Routes>
					<Route
						path={AppRoutes::Empty}
						view={|| view! { <Redirect path={AppRoutes::AdminRoles}/> }}
					/>
					<Route path={AppRoutes::AdminRoles} view={AdminRolesManagement}/>
					<Route path={AppRoutes::AdminSkills} view={AdminSkillsManagement}/>
					<Route
						path={AppRoutes::MentorDashboardProfile}
						view={MentorDashboardProfile}
					/>
				</Routes>
			</main>
		</Router>
	}
}

/// Rendered by the router when no route matches. On the server, unknown paths
/// only reach the router after no static file matched them.
fn not_found() -> View {
	view! { <NotFound/> }.into_view()
}
