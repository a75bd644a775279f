//! Main invitation content, shown once the invitation is opened.
//!
//! Every section reads the static [`vows_core::site`] content.

mod copy_button;
mod details;
mod entourage;
mod narrative;
mod snap_share;
mod timeline;

pub use copy_button::CopyButton;
pub use details::Details;
pub use entourage::Entourage;
pub use narrative::Narrative;
pub use snap_share::SnapShare;
pub use timeline::Timeline;
