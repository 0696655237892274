//! Domain models for the rotation tracker.

pub mod assignment;
pub mod holiday;
pub mod member;
pub mod task;

pub use assignment::Assignment;
pub use holiday::Holiday;
pub use member::Member;
pub use task::Task;
