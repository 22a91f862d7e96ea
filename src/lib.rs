//! Roster and sequence bookkeeping
//!
//! A singly linked sequence container and a small employee roster, driven
//! interactively by the `roster` binary's numbered menu.

pub mod domain;
pub use domain::{Employee, InvalidNameError, Name, Role, Roster};

/// Singly linked, insertion-ordered sequence container.
pub mod sequence;
pub use sequence::Sequence;
