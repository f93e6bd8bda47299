mod main_container;

pub use self::main_container::*;
