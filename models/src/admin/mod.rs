mod role;
mod skill;

pub use self::{role::*, skill::*};

use crate::ErrorType;

/// Trims the given name and makes sure it is not empty
fn normalize_name(name: &str) -> Result<String, ErrorType> {
	let name = name.trim();
	if name.is_empty() {
		return Err(ErrorType::EmptyName);
	}
	Ok(name.to_string())
}

/// Checks if a name is already taken by one of the existing entries, ignoring
/// case. Non-ASCII letters are compared by their lowercase forms too.
fn is_name_taken<'a>(name: &str, mut existing: impl Iterator<Item = &'a str>) -> bool {
	let name = name.to_lowercase();
	existing.any(|other| other.to_lowercase() == name)
}

#[cfg(test)]
mod test {
	use super::{is_name_taken, RoleCatalog, SkillCatalog};
	use crate::ErrorType;

	#[test]
	fn name_check_folds_unicode_case() {
		assert!(is_name_taken("éducation", ["Éducation"].into_iter()));
		assert!(is_name_taken("STRASSE", ["strasse"].into_iter()));
		assert!(!is_name_taken("Education", ["Éducation"].into_iter()));
	}

	#[test]
	fn catalogs_reject_non_ascii_duplicates() {
		let mut roles = RoleCatalog::default();
		roles.add_category("Éducation").expect("category should be added");
		assert_eq!(
			roles.add_category("éducation"),
			Err(ErrorType::DuplicateName)
		);

		let mut skills = SkillCatalog::default();
		skills.add_skill("Ökonomie", "").expect("skill should be added");
		assert_eq!(
			skills.add_skill("ÖKONOMIE", ""),
			Err(ErrorType::DuplicateName)
		);
	}
}
