use serde::{Deserialize, Serialize};

use super::{is_name_taken, normalize_name};
use crate::{ErrorType, ResourceId};

/// A category that groups related roles, for example "Engineering"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCategory {
	/// The ID of the category
	pub id: ResourceId,
	/// The display name of the category
	pub name: String,
}

/// A role on the platform, for example "Backend Engineer". Every role
/// belongs to exactly one category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
	/// The ID of the role
	pub id: ResourceId,
	/// The display name of the role
	pub name: String,
	/// The category this role belongs to
	pub category_id: ResourceId,
}

/// An in-memory, ordered collection of role categories and roles.
///
/// Names are unique (ignoring case) among categories, and among roles. A role
/// can only be added to an existing category, and removing a category removes
/// all of its roles. Catalogs are only built through these operations, so
/// they can be serialized but not deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCatalog {
	/// The categories, in insertion order
	categories: Vec<RoleCategory>,
	/// The roles of every category, in insertion order
	roles: Vec<Role>,
	/// The last ID handed out
	next_id: ResourceId,
}

impl RoleCatalog {
	/// Creates a catalog with the default categories and roles of the
	/// platform
	pub fn seeded() -> Self {
		let mut catalog = Self::default();
		for (category, roles) in [
			("Engineering", &["Backend Engineer", "Frontend Engineer"][..]),
			("Design", &["UX Designer"][..]),
			("Product", &["Product Manager"][..]),
		] {
			let Ok(category_id) = catalog.add_category(category).map(|category| category.id)
			else {
				continue;
			};
			for role in roles {
				_ = catalog.add_role(role, category_id);
			}
		}
		catalog
	}

	/// All the categories, in the order they were added
	pub fn categories(&self) -> &[RoleCategory] {
		&self.categories
	}

	/// All the roles, in the order they were added
	pub fn roles(&self) -> &[Role] {
		&self.roles
	}

	/// Gets a category by its ID
	pub fn category(&self, category_id: ResourceId) -> Option<&RoleCategory> {
		self.categories
			.iter()
			.find(|category| category.id == category_id)
	}

	/// All the roles of a given category, in the order they were added
	pub fn roles_in(&self, category_id: ResourceId) -> impl Iterator<Item = &Role> {
		self.roles
			.iter()
			.filter(move |role| role.category_id == category_id)
	}

	/// Adds a new category with the given name
	pub fn add_category(&mut self, name: &str) -> Result<&RoleCategory, ErrorType> {
		let name = normalize_name(name)?;
		if is_name_taken(
			&name,
			self.categories.iter().map(|category| category.name.as_str()),
		) {
			return Err(ErrorType::DuplicateName);
		}

		let id = self.allocate_id();
		self.categories.push(RoleCategory { id, name });
		Ok(&self.categories[self.categories.len() - 1])
	}

	/// Adds a new role with the given name to an existing category
	pub fn add_role(
		&mut self,
		name: &str,
		category_id: ResourceId,
	) -> Result<&Role, ErrorType> {
		let name = normalize_name(name)?;
		if self.category(category_id).is_none() {
			return Err(ErrorType::UnknownCategory);
		}
		if is_name_taken(&name, self.roles.iter().map(|role| role.name.as_str())) {
			return Err(ErrorType::DuplicateName);
		}

		let id = self.allocate_id();
		self.roles.push(Role {
			id,
			name,
			category_id,
		});
		Ok(&self.roles[self.roles.len() - 1])
	}

	/// Removes a category, along with every role in it
	pub fn remove_category(&mut self, category_id: ResourceId) -> Result<RoleCategory, ErrorType> {
		let index = self
			.categories
			.iter()
			.position(|category| category.id == category_id)
			.ok_or(ErrorType::ResourceDoesNotExist)?;

		self.roles.retain(|role| role.category_id != category_id);
		Ok(self.categories.remove(index))
	}

	/// Removes a single role
	pub fn remove_role(&mut self, role_id: ResourceId) -> Result<Role, ErrorType> {
		let index = self
			.roles
			.iter()
			.position(|role| role.id == role_id)
			.ok_or(ErrorType::ResourceDoesNotExist)?;

		Ok(self.roles.remove(index))
	}

	/// Hands out the next unused ID
	fn allocate_id(&mut self) -> ResourceId {
		self.next_id += 1;
		self.next_id
	}
}

#[cfg(test)]
mod test {
	use super::RoleCatalog;
	use crate::ErrorType;

	#[test]
	fn seeded_catalog_groups_roles() {
		let catalog = RoleCatalog::seeded();
		let engineering = catalog
			.categories()
			.iter()
			.find(|category| category.name == "Engineering")
			.expect("engineering category must be seeded");

		let names = catalog
			.roles_in(engineering.id)
			.map(|role| role.name.as_str())
			.collect::<Vec<_>>();
		assert_eq!(names, ["Backend Engineer", "Frontend Engineer"]);
		assert_eq!(catalog.categories().len(), 3);
		assert_eq!(catalog.roles().len(), 4);
	}

	#[test]
	fn names_are_trimmed_and_required() {
		let mut catalog = RoleCatalog::default();
		assert_eq!(catalog.add_category("   "), Err(ErrorType::EmptyName));

		let category = catalog
			.add_category("  Operations ")
			.expect("category should be added")
			.clone();
		assert_eq!(category.name, "Operations");
		assert_eq!(
			catalog.add_role("", category.id),
			Err(ErrorType::EmptyName)
		);
	}

	#[test]
	fn duplicate_names_are_rejected_ignoring_case() {
		let mut catalog = RoleCatalog::seeded();
		assert_eq!(
			catalog.add_category("engineering"),
			Err(ErrorType::DuplicateName)
		);

		let design = catalog.categories()[1].id;
		assert_eq!(
			catalog.add_role("BACKEND ENGINEER", design),
			Err(ErrorType::DuplicateName)
		);
	}

	#[test]
	fn roles_need_an_existing_category() {
		let mut catalog = RoleCatalog::default();
		assert_eq!(
			catalog.add_role("Data Scientist", 42),
			Err(ErrorType::UnknownCategory)
		);
		assert!(catalog.roles().is_empty());
	}

	#[test]
	fn removing_a_category_removes_its_roles() {
		let mut catalog = RoleCatalog::seeded();
		let engineering = catalog.categories()[0].id;

		let removed = catalog
			.remove_category(engineering)
			.expect("category should be removed");
		assert_eq!(removed.name, "Engineering");
		assert_eq!(catalog.roles_in(engineering).count(), 0);
		assert_eq!(catalog.roles().len(), 2);
		assert_eq!(
			catalog.remove_category(engineering),
			Err(ErrorType::ResourceDoesNotExist)
		);
	}

	#[test]
	fn ids_are_never_reused() {
		let mut catalog = RoleCatalog::default();
		let first = catalog.add_category("Sales").expect("added").id;
		catalog.remove_category(first).expect("removed");

		let second = catalog.add_category("Sales").expect("added again").id;
		assert!(second > first);

		let role = catalog.add_role("Account Executive", second).expect("added").id;
		assert!(role > second);
		assert_eq!(catalog.remove_role(role).map(|role| role.id), Ok(role));
		assert_eq!(
			catalog.remove_role(role),
			Err(ErrorType::ResourceDoesNotExist)
		);
	}
}
