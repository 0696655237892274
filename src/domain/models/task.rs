//! Domain model for a recurring team task.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
    /// Either `"daily"` or `"<weekly|biweekly>_<dayname>"`, e.g. `"weekly_friday"`.
    /// Parsed by `RotationRule::from_str`; invalid rules are a configuration error.
    pub rotation_rule: String,
}
