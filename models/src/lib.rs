#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::missing_docs_in_private_items)]

//! Data types shared between the RoleReady admin frontend and the server that
//! hosts it

/// The admin data, such as roles, role categories and skills
pub mod admin;
/// The vendor (and mentor) dashboard data
pub mod vendor;

/// Prelude module. Used to re-export commonly used items.
pub mod prelude {
	pub use crate::{
		admin::{Role, RoleCatalog, RoleCategory, Skill, SkillCatalog},
		vendor::VendorProfile,
		ErrorType,
		PageMetadata,
		ResourceId,
	};
}

mod error;
mod page_metadata;

pub use self::{error::*, page_metadata::*};

/// The ID of any resource stored in one of the in-memory catalogs. IDs are
/// assigned in increasing order and are never reused within a catalog.
pub type ResourceId = u64;
