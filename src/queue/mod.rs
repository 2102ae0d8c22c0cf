//! Speaking-order queue.
//!
//! A [`Queue`] stores [`SpeakerRecord`]s, each carrying one attribute value
//! per configured rule, and composes the rules to answer "is this order
//! valid?" ([`Queue::is_prioritized`]) and "repair this order"
//! ([`Queue::prioritize`]).
//!
//! # Concurrency
//!
//! The queue is a plain single-owner value with no internal locking. Share
//! it behind a `Mutex` or `RwLock` when several callers need it.

mod config;
mod engine;
mod record;

pub use config::QueueConfig;
pub use engine::Queue;
pub use record::SpeakerRecord;
