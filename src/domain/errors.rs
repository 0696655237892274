//! Error taxonomy for the rotation engine.
//!
//! Configuration errors (bad rotation rules) and data-integrity errors
//! (assignments pointing at deleted members) are surfaced loudly and never
//! silently defaulted. Holiday source failures are deliberately *not* part of
//! this enum; they are recovered locally by the working-day calendar falling
//! back to weekday-only logic.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RotationError {
    /// The rotation rule string does not have the expected shape at all.
    #[error("invalid rotation rule '{rule}': expected 'daily' or '<weekly|biweekly>_<dayname>'")]
    InvalidRotationRule { rule: String },

    /// The rule had the right shape but one of its tokens is unrecognized.
    #[error("invalid rotation rule '{rule}': unrecognized token '{token}'")]
    UnknownRuleToken { rule: String, token: String },

    /// An assignment references a member that no longer exists. The full id
    /// set is included so the broken reference can be debugged from the log.
    #[error("member {member_id} not found in member list (known ids: {known_ids:?})")]
    MemberNotFound { member_id: i64, known_ids: Vec<i64> },

    /// Rotation requested against an empty member list.
    #[error("cannot rotate: no members exist")]
    NoMembers,
}
