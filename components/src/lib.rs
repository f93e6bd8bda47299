#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::missing_docs_in_private_items)]

//! Reusable UI components for the RoleReady admin console. Every page of the
//! console is built out of these.

/// Prelude module. Used to re-export commonly used items.
pub mod prelude {
	pub use crate::{
		containers::*,
		input::*,
		page_meta::*,
		page_shell::*,
		page_title::*,
		resource_table::*,
		utils::*,
	};
}

/// Imports used by every component in this crate
mod imports {
	pub use leptos::*;
	pub use log::{debug, trace};
	pub use models::prelude::*;
	pub use models::ResourceId;

	pub use crate::prelude::*;
}

/// Layout containers that wrap the content of a page
pub mod containers;
/// Text inputs
pub mod input;
/// Injects the page metadata into the document head
pub mod page_meta;
/// The composition every routable page is made of
pub mod page_shell;
/// Page headings and descriptions
pub mod page_title;
/// Tables for listing the resources of a catalog
pub mod resource_table;
/// Shared styling helpers
pub mod utils;
