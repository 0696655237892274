//! Domain model for a task assignment period.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The current duty period for a task: who holds it and for which dates.
///
/// Mutated in place by the orchestrators on every rotation event (member and
/// dates overwritten); never deleted by the engine. Invariant: `start_date <=
/// end_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub task_id: i64,
    pub member_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
