//! Application configuration.
//!
//! Centralizes the browser-side constants. Event facts and display text live
//! in `vows-core`'s content document; timings shared with the state machines
//! live next to them in `vows-core`.

// =============================================================================
// Application Metadata
// =============================================================================

/// Document title.
pub const APP_TITLE: &str = "You are invited";

/// Element the app mounts into.
pub const MOUNT_ID: &str = "app";

/// Anchor of the main content, scrolled to after opening the invitation.
pub const MAIN_CONTENT_ID: &str = "main-content";

// =============================================================================
// Static Assets
// =============================================================================

/// Paths served from the public root.
pub mod assets {
    pub const MONOGRAM: &str = "/monogram/newMonogram.png";
    pub const BACKGROUND_MUSIC: &str = "/background_music/theme.mp3";
    pub const DETAILS_BACKGROUND: &str = "/Details/background.jpg";
    pub const VENUE_IMAGE: &str = "/Details/venue.jpg";
    pub const SPONSOR_ATTIRE: &str = "/Details/sponsor attire.png";
    pub const GUEST_ATTIRE: &str = "/Details/guest attire.png";
    pub const SNAP_SHARE_QR: &str = "/QR/snap-share.png";
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Gallery listing served by `vows-cli serve` or written by `vows-cli manifest`.
pub const GALLERY_URL: &str = "/gallery.json";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Domains external buttons may open. Anything else is blocked.
pub const ALLOWED_EXTERNAL_DOMAINS: &[&str] = &["maps.google.com", "drive.google.com"];

/// Window features for external links.
pub const EXTERNAL_WINDOW_FEATURES: &str = "noopener,noreferrer";

// =============================================================================
// Layout
// =============================================================================

/// Viewports matching this query get the mobile hero images.
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 768px)";

// =============================================================================
// Animation
// =============================================================================

/// Staggered entrance delays on the hero screen (milliseconds).
pub mod hero_delays {
    pub const MONOGRAM: u32 = 300;
    pub const YOU_ARE: u32 = 600;
    pub const INVITED: u32 = 900;
    pub const OPEN_BUTTON: u32 = 1500;
}

/// Clipboard identifiers, used as keys in the copy-feedback set.
pub mod copy_ids {
    pub const VENUE: &str = "combined-venue";
    pub const HASHTAG: &str = "hashtag";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder
/// - `Lucide` - Minimal, thin strokes (default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
