//! Fairness rules for a speaking order.
//!
//! Each rule looks at one attribute column of the queue and decides
//! whether the column's order is valid, and how to repair it when it
//! is not. Rules are independent: a rule never sees another rule's column.
//!
//! - [`FirstSpeakerPriority`]: everyone speaks once before anyone speaks
//!   twice.
//! - [`FitSoftPriority`]: boosted speakers are front-loaded, with at most
//!   one non-boosted speaker between two boosted ones.
//!
//! Custom rules can implement the [`Priority`] trait directly; a
//! [`Queue`](crate::queue::Queue) is configured with the closed [`Rule`] set.

mod first_speaker;
mod fit_soft;
mod rule;
mod types;

pub use first_speaker::FirstSpeakerPriority;
pub use fit_soft::FitSoftPriority;
pub use rule::Rule;
pub use types::{
    apply_permutation, is_identity, is_permutation, AttributeKind, AttributeValue, Priority,
};
