//! Domain model for a rotation member.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub display_name: String,
    pub slack_handle: String,
}

impl Member {
    /// Handle used when mentioning the member in delivered rosters
    pub fn mention(&self) -> String {
        format!("<@{}>", self.slack_handle)
    }
}
