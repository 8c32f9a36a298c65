//! Side-effecting services behind the download widget.
//!
//! # Services
//!
//! - [`fetch`] - Content retrieval (simulated until a real source exists)
//! - [`schedule`] - Timer-driven progress ticks
//! - [`toast`] - Bounded queue of one-shot notifications
//!
//! The traits here are the seams the workflow is written against, so tests
//! swap in channel-driven doubles for the browser timers.

pub mod fetch;
pub mod schedule;
pub mod toast;

pub use fetch::*;
pub use schedule::*;
pub use toast::*;
