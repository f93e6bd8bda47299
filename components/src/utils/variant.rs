/// The shade of the secondary color to use as the background of a component
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SecondaryColorVariant {
	/// Lightest shade
	#[default]
	Light,
	/// Medium shade
	Medium,
	/// Darkest shade
	Dark,
}

impl SecondaryColorVariant {
	/// The suffix of the css class for this variant
	pub const fn as_css_name(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Medium => "medium",
			Self::Dark => "dark",
		}
	}
}
