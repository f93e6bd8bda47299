use crate::prelude::*;

/// The metadata of the skills management page
pub const SKILLS_PAGE_META: PageMetadata = PageMetadata::new(
	"Skills Management | RoleReady Admin",
	"Manage skills for the RoleReady platform.",
);

/// The page mounted at [`AppRoutes::AdminSkills`]
#[component]
pub fn AdminSkillsManagement() -> impl IntoView {
	view! { <PageShell meta={SKILLS_PAGE_META} feature={AdminSkillsPage}/> }
}
