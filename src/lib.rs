//! Attribute discard policies for translating a management model between versions.
//!
//! A translation pass walks a resource description or an operation and asks a
//! [`transform::DiscardAttributeChecker`] whether each attribute may be dropped for
//! the target version. [`transform::ALWAYS`] and [`transform::UNDEFINED`] are the
//! process-wide canonical checkers that rule tables reference by identity.

pub mod config;
pub mod logging;
pub mod model;
pub mod transform;
