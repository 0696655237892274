//! # Storage Traits
//!
//! Storage abstraction for the rotation engine. The engine never owns
//! persistent state: it reads snapshots of members, tasks, and assignments,
//! computes new values, and hands them back through these traits. Get/put
//! semantics are last-write-wins; no transactions are assumed.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::{Assignment, Member, Task};

/// Interface for member storage operations.
///
/// Members are created and edited by external tooling; the engine only reads
/// the set and treats ascending id as the rotation order.
#[async_trait]
pub trait MemberStorage: Send + Sync {
    /// Store a member, replacing any existing member with the same id
    async fn store_member(&self, member: &Member) -> Result<()>;

    /// List all members ordered by id ascending
    async fn list_members(&self) -> Result<Vec<Member>>;
}

/// Interface for task storage operations.
#[async_trait]
pub trait TaskStorage: Send + Sync {
    /// Store a task, replacing any existing task with the same id
    async fn store_task(&self, task: &Task) -> Result<()>;

    /// Retrieve a specific task by id
    async fn get_task(&self, task_id: i64) -> Result<Option<Task>>;

    /// List all tasks ordered by id ascending
    async fn list_tasks(&self) -> Result<Vec<Task>>;
}

/// Interface for assignment storage operations.
#[async_trait]
pub trait AssignmentStorage: Send + Sync {
    /// Store a new assignment (seed data), replacing any existing assignment
    /// with the same id
    async fn store_assignment(&self, assignment: &Assignment) -> Result<()>;

    /// Overwrite an existing assignment in place. Fails if the assignment
    /// does not exist; the engine only ever advances assignments it has read.
    async fn update_assignment(&self, assignment: &Assignment) -> Result<()>;

    /// List all assignments ordered by id ascending
    async fn list_assignments(&self) -> Result<Vec<Assignment>>;
}
