//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCalendar as Calendar, LuCamera as Camera, LuCheck as Check,
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight, LuClock as Clock,
        LuCopy as Copy, LuExternalLink as ExternalLink, LuHeart as Heart, LuHouse as Home,
        LuImages as Gallery, LuMapPin as Location, LuNavigation as Directions,
        LuUtensils as Reception, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowUpRight as ExternalLink, BsCalendarEvent as Calendar, BsCameraFill as Camera,
        BsCheckLg as Check, BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight,
        BsClipboard as Copy, BsClock as Clock, BsCompass as Directions, BsCup as Reception,
        BsGeoAltFill as Location, BsHeartFill as Heart, BsHouseFill as Home,
        BsImages as Gallery, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CALENDAR, Calendar);
themed_icon!(CAMERA, Camera);
themed_icon!(CHECK, Check);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CLOCK, Clock);
themed_icon!(CLOSE, Close);
themed_icon!(COPY, Copy);
themed_icon!(DIRECTIONS, Directions);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(GALLERY, Gallery);
themed_icon!(HEART, Heart);
themed_icon!(HOME, Home);
themed_icon!(LOCATION, Location);
themed_icon!(RECEPTION, Reception);
