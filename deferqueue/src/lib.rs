//! # Deferqueue
//!
//! A small deferred-callback coordinator.
//!
//! A [`DeferQueue`](queue::DeferQueue) collects zero-argument callbacks
//! registered as "synchronous" or "asynchronous" and later drains them all,
//! collecting per-callback outcomes without letting one failure abort the
//! others:
//!
//! - **Async unit**: every callback in the async list is started together and
//!   awaited jointly; the list is only iterated, never consumed.
//! - **Sync unit**: callbacks in the sync list run strictly one at a time,
//!   removed per the configured [`RemovalPolicy`](config::RemovalPolicy);
//!   the list is drained to empty.
//! - Both units run concurrently with each other, interleaved cooperatively
//!   on the calling task.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use deferqueue::prelude::*;
//!
//! let queue: DeferQueue<u32> = DeferQueue::new("shutdown");
//! queue.append_async(|| async { Ok(1) });
//! queue.append_sync(|| async { Ok(2) });
//!
//! let outcomes = queue.defer().await;
//! assert_eq!(outcomes.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod errors;
pub mod outcome;
pub mod queue;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{DeferConfig, RemovalPolicy};
    pub use crate::errors::DeferError;
    pub use crate::outcome::Outcome;
    pub use crate::queue::DeferQueue;
}

#[cfg(test)]
mod tests {
    #[test]
    fn library_compiles() {
        assert!(true);
    }
}
