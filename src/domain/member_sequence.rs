//! Circular member sequencing.
//!
//! Members rotate in ascending id order; advancing past the last member wraps
//! back to the first. The id order is the canonical rotation order for the
//! whole system, so every caller goes through this one function.

use crate::domain::errors::RotationError;
use crate::domain::models::Member;

/// Member `advance_by` positions after `current_member_id`, wrapping
/// circularly over the id-sorted member list.
///
/// A current id that is no longer in the list means an assignment references
/// a deleted member; that is a data-integrity error and is reported with the
/// full id set rather than defaulted.
pub fn next_member(
    members: &[Member],
    current_member_id: i64,
    advance_by: usize,
) -> Result<Member, RotationError> {
    if members.is_empty() {
        return Err(RotationError::NoMembers);
    }

    let mut ordered: Vec<&Member> = members.iter().collect();
    ordered.sort_by_key(|m| m.id);

    let position = ordered
        .iter()
        .position(|m| m.id == current_member_id)
        .ok_or_else(|| RotationError::MemberNotFound {
            member_id: current_member_id,
            known_ids: ordered.iter().map(|m| m.id).collect(),
        })?;

    Ok(ordered[(position + advance_by) % ordered.len()].clone())
}
