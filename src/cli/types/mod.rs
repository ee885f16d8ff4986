//! Type-safe wrappers and enums for IPL selections.

pub mod ids;
pub mod skill;
