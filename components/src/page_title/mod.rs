mod page_description;
mod page_title;

pub use self::{page_description::*, page_title::*};
