mod container_body;
mod container_main;
mod page_header;

pub use self::{container_body::*, container_main::*, page_header::*};
