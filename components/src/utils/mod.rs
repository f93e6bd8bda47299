mod variant;

pub use self::variant::*;
