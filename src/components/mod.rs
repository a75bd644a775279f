//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`invitation`] - Reveal sequence and invitation content
//! - [`loader`] - Loading screen, hero, reveal host
//! - [`sections`] - Story, timeline, details, entourage, snap & share
//! - [`gallery`] - Photo gallery page
//! - [`audio`] - Background music
//! - [`particles`] - Decorative particle overlay
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod audio;
pub mod gallery;
pub mod icons;
pub mod invitation;
pub mod loader;
pub mod particles;
pub mod router;
pub mod sections;

pub use router::AppRouter;
