//! # CSV Storage Backend
//!
//! File-based storage for the rotation tracker: one CSV file per row-like
//! collection (members, tasks, assignments) plus per-year YAML holiday
//! calendars, all under a single data directory managed by [`CsvConnection`].
//! Writes are whole-file and atomic (temp file + rename).

pub mod assignment_repository;
pub mod connection;
pub mod holiday_repository;
pub mod member_repository;
pub mod task_repository;

pub use assignment_repository::AssignmentRepository;
pub use connection::CsvConnection;
pub use holiday_repository::HolidayRepository;
pub use member_repository::MemberRepository;
pub use task_repository::TaskRepository;
