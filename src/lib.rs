//! Fair speaking-order queue.
//!
//! Orders a list of people waiting to speak so that it satisfies several
//! independent fairness rules at once:
//!
//! - **Priorities**: pluggable rules, each looking at one attribute of the
//!   queued speakers, with a validity check and a deterministic repair
//!   that returns an index permutation.
//! - **Queue**: container of speaker records that checks and repairs its
//!   order against the configured rules, keeping every record's
//!   attributes together.
//!
//! # Architecture
//!
//! The crate is a pure in-memory library. Argument parsing, persistence
//! and presentation belong to the caller. Logging goes through `tracing`;
//! no subscriber is installed here.

pub mod error;
pub mod priority;
pub mod queue;

pub use error::{QueueError, QueueResult};
