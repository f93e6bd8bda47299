use std::{
	error::Error as StdError,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

/// A list of all the possible errors that can be returned when modifying the
/// admin catalogs or a vendor profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorType {
	/// The name provided is empty, or only consists of whitespace
	EmptyName,
	/// The name provided is not available. It is being used by another
	/// resource of the same kind
	DuplicateName,
	/// The role category referenced does not exist
	UnknownCategory,
	/// The email provided is invalid
	InvalidEmail,
	/// The resource that the user is trying to access does not exist.
	ResourceDoesNotExist,
}

impl ErrorType {
	/// Returns the message that should be used for this error. This is the
	/// message that is user-friendly and can be shown to the user
	pub fn message(&self) -> &'static str {
		match self {
			Self::EmptyName => "A name is required",
			Self::DuplicateName => "Another entry already exists with that name",
			Self::UnknownCategory => "The selected category does not exist",
			Self::InvalidEmail => "Invalid email",
			Self::ResourceDoesNotExist => {
				"The resource you are trying to access does not exist"
			}
		}
	}
}

impl Display for ErrorType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.message())
	}
}

impl StdError for ErrorType {}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::ErrorType;

	#[test]
	fn assert_error_types() {
		assert_tokens(
			&ErrorType::DuplicateName,
			&[Token::UnitVariant {
				name: "ErrorType",
				variant: "duplicateName",
			}],
		);
	}

	#[test]
	fn display_uses_message() {
		assert_eq!(ErrorType::EmptyName.to_string(), "A name is required");
		assert_eq!(
			ErrorType::UnknownCategory.to_string(),
			ErrorType::UnknownCategory.message()
		);
	}
}
