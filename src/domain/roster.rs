//! Duty roster formatting and the delivery seam.
//!
//! After a rotation run the current assignment set is rendered into a
//! human-readable roster and handed to a [`NotificationSink`]. Delivery is
//! best-effort by contract: the engine is strict, the channel is lenient, so
//! the sink returns a `Result` the caller is free to log and ignore.

use anyhow::Result;
use async_trait::async_trait;
use log::info;

use crate::domain::models::{Assignment, Member, Task};

/// Destination for the formatted roster (chat channel, mail, ...).
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn deliver(&self, message: &str) -> Result<()>;
}

/// Sink that writes the roster to the application log. The default until a
/// real delivery channel is configured.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

#[async_trait]
impl NotificationSink for LogNotifier {
    async fn deliver(&self, message: &str) -> Result<()> {
        info!("Current duty roster:\n{}", message);
        Ok(())
    }
}

/// Render the current assignment set as one line per task, in task-id order.
///
/// Dangling references are rendered as placeholders rather than dropped, so
/// a broken roster is visible in the delivered message instead of silently
/// shrinking.
pub fn format_roster(tasks: &[Task], members: &[Member], assignments: &[Assignment]) -> String {
    let mut rows: Vec<&Assignment> = assignments.iter().collect();
    rows.sort_by_key(|a| a.task_id);

    let mut lines = Vec::with_capacity(rows.len());
    for assignment in rows {
        let task_name = tasks
            .iter()
            .find(|t| t.id == assignment.task_id)
            .map(|t| t.name.as_str())
            .unwrap_or("(deleted task)");
        let holder = members
            .iter()
            .find(|m| m.id == assignment.member_id)
            .map(|m| format!("{} ({})", m.display_name, m.mention()))
            .unwrap_or_else(|| format!("(unknown member {})", assignment.member_id));

        lines.push(format!(
            "• {}: {} until {}",
            task_name, holder, assignment.end_date
        ));
    }

    lines.join("\n")
}
