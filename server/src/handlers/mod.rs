//! Request handlers for the skills page and administration.

mod admin;
mod skills;
mod table;

pub use admin::*;
pub use skills::*;
pub use table::*;
