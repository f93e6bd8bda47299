mod roles;
mod skills;

pub use self::{roles::*, skills::*};
