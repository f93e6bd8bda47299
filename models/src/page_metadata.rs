use serde::Serialize;

/// The metadata of a single routable page. This is what ends up in the
/// document's `<title>` and `<meta name="description">` tags.
///
/// Every page declares its metadata as a `const`, so rendering the same page
/// any number of times always produces the same record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageMetadata {
	/// The title of the page, shown in the browser tab
	pub title: &'static str,
	/// A short description of the page, used by search engines and link
	/// previews
	pub description: &'static str,
}

impl PageMetadata {
	/// Creates a new metadata record. Usable in `const` contexts.
	pub const fn new(title: &'static str, description: &'static str) -> Self {
		Self { title, description }
	}
}

#[cfg(test)]
mod test {
	use serde_test::{assert_ser_tokens, Token};

	use super::PageMetadata;

	const RECORD: PageMetadata = PageMetadata::new(
		"Roles Management | RoleReady Admin",
		"Manage roles and categories for the RoleReady platform.",
	);

	#[test]
	fn assert_metadata_types() {
		assert_ser_tokens(
			&RECORD,
			&[
				Token::Struct {
					name: "PageMetadata",
					len: 2,
				},
				Token::Str("title"),
				Token::Str("Roles Management | RoleReady Admin"),
				Token::Str("description"),
				Token::Str("Manage roles and categories for the RoleReady platform."),
				Token::StructEnd,
			],
		);
	}

	#[test]
	fn const_records_are_identical() {
		let first = RECORD;
		let second = RECORD;
		assert_eq!(first, second);
		assert_eq!(first.title, "Roles Management | RoleReady Admin");
	}
}
