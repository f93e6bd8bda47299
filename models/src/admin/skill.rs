use serde::{Deserialize, Serialize};

use super::{is_name_taken, normalize_name};
use crate::{ErrorType, ResourceId};

/// A skill that can be attached to mentors and roles, for example "Rust"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
	/// The ID of the skill
	pub id: ResourceId,
	/// The display name of the skill
	pub name: String,
	/// A short, optional explanation of the skill
	pub description: String,
}

/// An in-memory, ordered collection of skills with unique names (ignoring
/// case). Only [`SkillCatalog::add_skill`] can create entries, so the catalog
/// can be serialized but not deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCatalog {
	/// The skills, in insertion order
	skills: Vec<Skill>,
	/// The last ID handed out
	next_id: ResourceId,
}

impl SkillCatalog {
	/// Creates a catalog with the default skills of the platform
	pub fn seeded() -> Self {
		let mut catalog = Self::default();
		for (name, description) in [
			("Rust", "Systems programming with Rust"),
			("System Design", "Designing large scale distributed systems"),
			("User Research", "Interviewing users and synthesising findings"),
		] {
			_ = catalog.add_skill(name, description);
		}
		catalog
	}

	/// All the skills, in the order they were added
	pub fn skills(&self) -> &[Skill] {
		&self.skills
	}

	/// Adds a new skill. The description is trimmed but may be empty.
	pub fn add_skill(&mut self, name: &str, description: &str) -> Result<&Skill, ErrorType> {
		let name = normalize_name(name)?;
		if is_name_taken(&name, self.skills.iter().map(|skill| skill.name.as_str())) {
			return Err(ErrorType::DuplicateName);
		}

		self.next_id += 1;
		self.skills.push(Skill {
			id: self.next_id,
			name,
			description: description.trim().to_string(),
		});
		Ok(&self.skills[self.skills.len() - 1])
	}

	/// Removes a skill
	pub fn remove_skill(&mut self, skill_id: ResourceId) -> Result<Skill, ErrorType> {
		let index = self
			.skills
			.iter()
			.position(|skill| skill.id == skill_id)
			.ok_or(ErrorType::ResourceDoesNotExist)?;

		Ok(self.skills.remove(index))
	}
}
