//! Platform-neutral logic for the wedding invitation site.
//!
//! Everything here compiles natively and to `wasm32`, so the browser app and
//! the native companion binary share one implementation:
//!
//! - [`content`] - Immutable site content parsed once from embedded TOML
//! - [`gallery`] - Directory listing, image filtering and category tagging
//! - [`reveal`] - Loading → hero → revealed state machine and loading progress
//! - [`timers`] - Scheduling seam with cancellation tokens
//! - [`feedback`] - Short-lived "copied" markers
//! - [`audio`] - Autoplay fallback controller for the background track
//! - [`particles`] - Decorative particle field
//! - [`carousel`] - Hero background rotation

pub mod audio;
pub mod carousel;
pub mod content;
pub mod error;
pub mod feedback;
pub mod gallery;
pub mod particles;
pub mod reveal;
pub mod timers;

pub use audio::{AmbientAudio, AudioCommand, AudioPhase};
pub use carousel::Carousel;
pub use content::{SiteContent, StoryTab, site};
pub use error::ContentError;
pub use feedback::{CopyFeedback, CopyTicket};
pub use gallery::{Category, Gallery, ImageEntry};
pub use particles::{Particle, ParticleField, ParticlePreset};
pub use reveal::{Progress, RevealEvent, RevealOrchestrator, RevealState, Screen, ScreenVisibility};
pub use timers::{Scheduler, TimerQueue, TimerToken};
