//! # Storage Module
//!
//! Persistence for the rotation tracker. The domain layer talks to the
//! traits in [`traits`]; the concrete backend is chosen once at startup from
//! configuration and injected, never reached through global state.

pub mod csv;
pub mod traits;

pub use traits::{AssignmentStorage, MemberStorage, TaskStorage};
