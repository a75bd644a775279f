//! View-state types for the browser app.
//!
//! - [`Route`] - Hash-based navigation
//! - [`GalleryFilter`], [`Lightbox`] - Gallery page state

mod gallery;
mod route;

pub use gallery::{GalleryFilter, Lightbox};
pub use route::Route;
