//! Reveal sequence: loading screen, then hero, then the invitation.
//!
//! - [`use_reveal`] - Hosts the reveal state machine on browser timers
//! - [`LoadingScreen`] - Progress bar, monogram, particles
//! - [`HeroScreen`] - Background carousel and the open-invitation button

mod hero;
mod loading_screen;
mod reveal;

pub use hero::HeroScreen;
pub use loading_screen::LoadingScreen;
pub use reveal::use_reveal;

/// `base`, plus `hidden` when the element should be faded out.
fn screen_class(base: &str, hidden: &str, visible: bool) -> String {
    if visible {
        base.to_string()
    } else {
        format!("{} {}", base, hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_class() {
        assert_eq!(screen_class("screen", "hidden", true), "screen");
        assert_eq!(screen_class("screen", "hidden", false), "screen hidden");
    }
}
