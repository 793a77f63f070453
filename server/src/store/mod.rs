//! In-memory skill storage and the queue that feeds it.

mod queue;
mod skills;

pub use queue::*;
pub use skills::*;
