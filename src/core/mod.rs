//! Browser services built on top of `vows-core`.
//!
//! - [`clipboard`] - Clipboard writes with copy feedback
//! - [`error`] - Browser-side error types
//! - [`timers`] - [`BrowserTimers`], the `setTimeout` scheduler

pub mod clipboard;
pub mod error;
pub mod timers;

pub use timers::{BrowserTimers, delay_ms};
