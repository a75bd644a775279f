//! Reveal sequence: loading screen → hero → main content.
//!
//! ```text
//!   mount ──3s──▶ LoadingElapsed ──1s fade──▶ FadeComplete      open
//! Loading ─────────────────────────────────────────────▶ Hero ──────▶ Revealed
//! ```
//!
//! The loading-to-hero edge is timer driven and cannot be skipped. The
//! hero-to-revealed edge fires only on the explicit open-invitation action.
//! There are no backward edges; a page reload starts over at `Loading`.

use std::time::Duration;

use crate::timers::{Scheduler, TimerQueue};

/// Time the loading screen stays up before fading.
pub const LOADING_DURATION: Duration = Duration::from_millis(3000);

/// Length of the loading screen fade-out.
pub const FADE_DURATION: Duration = Duration::from_millis(1000);

/// Progress bar increment per tick.
pub const PROGRESS_STEP: u8 = 2;

/// Progress bar tick interval.
pub const PROGRESS_INTERVAL: Duration = Duration::from_millis(45);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Loading,
    Hero,
    Revealed,
}

/// Inputs to the reveal state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    /// Loading timer elapsed; start fading the loading screen.
    LoadingElapsed,
    /// Fade animation finished.
    FadeComplete,
    /// User pressed "open invitation".
    OpenInvitation,
}

/// The three stacked screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Hero,
    Main,
}

/// How a screen should be rendered for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenVisibility {
    /// Screen is in the DOM
    pub mounted: bool,
    /// Screen is opaque (otherwise fading or hidden)
    pub visible: bool,
    /// Screen receives pointer and keyboard input
    pub interactive: bool,
}

/// Reveal state machine bound to a scheduler.
///
/// Once [`unmount`](Self::unmount) is called every pending timer is cancelled
/// and later events are ignored.
#[derive(Debug)]
pub struct RevealOrchestrator<S> {
    state: RevealState,
    fading: bool,
    mounted: bool,
    unmounted: bool,
    scheduler: S,
}

impl<S: Scheduler<RevealEvent>> RevealOrchestrator<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            state: RevealState::Loading,
            fading: false,
            mounted: false,
            unmounted: false,
            scheduler,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Loading screen is fading out.
    pub fn is_fading(&self) -> bool {
        self.fading
    }

    pub fn is_active(&self) -> bool {
        self.mounted && !self.unmounted
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Start the sequence. Calling it again has no effect.
    pub fn mount(&mut self) {
        if self.mounted || self.unmounted {
            return;
        }
        self.mounted = true;
        self.scheduler
            .schedule(LOADING_DURATION, RevealEvent::LoadingElapsed);
    }

    /// Apply an event. Returns the new state when it changed.
    pub fn dispatch(&mut self, event: RevealEvent) -> Option<RevealState> {
        if !self.is_active() {
            return None;
        }

        match (self.state, self.fading, event) {
            (RevealState::Loading, false, RevealEvent::LoadingElapsed) => {
                self.fading = true;
                self.scheduler
                    .schedule(FADE_DURATION, RevealEvent::FadeComplete);
                None
            }
            (RevealState::Loading, true, RevealEvent::FadeComplete) => {
                self.fading = false;
                self.state = RevealState::Hero;
                Some(self.state)
            }
            (RevealState::Hero, _, RevealEvent::OpenInvitation) => {
                self.state = RevealState::Revealed;
                Some(self.state)
            }
            (state, _, event) => {
                tracing::trace!(?state, ?event, "reveal event ignored");
                None
            }
        }
    }

    /// The user's "open invitation" action.
    pub fn open_invitation(&mut self) -> Option<RevealState> {
        self.dispatch(RevealEvent::OpenInvitation)
    }

    /// Stop the sequence and cancel every pending timer.
    pub fn unmount(&mut self) {
        self.unmounted = true;
        self.scheduler.cancel_all();
    }

    /// Rendering flags for a screen. At most one screen is interactive.
    pub fn visibility(&self, screen: Screen) -> ScreenVisibility {
        visibility(self.state, self.fading, screen)
    }
}

impl RevealOrchestrator<TimerQueue<RevealEvent>> {
    /// Advance virtual time, feeding fired timers back into the machine.
    /// Returns every state entered along the way.
    pub fn advance(&mut self, by: Duration) -> Vec<RevealState> {
        let until = self.scheduler.now() + by;
        let mut entered = Vec::new();
        while let Some(event) = self.scheduler.pop_due(until) {
            entered.extend(self.dispatch(event));
        }
        self.scheduler.settle(until);
        entered
    }
}

/// Rendering flags for a screen given the machine's state.
pub fn visibility(state: RevealState, fading: bool, screen: Screen) -> ScreenVisibility {
    match (screen, state) {
        (Screen::Loading, RevealState::Loading) => ScreenVisibility {
            mounted: true,
            visible: !fading,
            interactive: !fading,
        },
        // The hero mounts under the fading loader so the cross-fade has
        // something to reveal.
        (Screen::Hero, RevealState::Loading) => ScreenVisibility {
            mounted: fading,
            visible: false,
            interactive: false,
        },
        (Screen::Hero, RevealState::Hero) => ScreenVisibility {
            mounted: true,
            visible: true,
            interactive: true,
        },
        (Screen::Hero, RevealState::Revealed) => ScreenVisibility {
            mounted: true,
            visible: false,
            interactive: false,
        },
        (Screen::Main, RevealState::Revealed) => ScreenVisibility {
            mounted: true,
            visible: true,
            interactive: true,
        },
        _ => ScreenVisibility::default(),
    }
}

/// Loading progress bar, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress(u8);

impl Progress {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    pub fn is_complete(self) -> bool {
        self.0 >= 100
    }

    /// Advance one step. Returns `false` once full, signalling the caller to
    /// stop its interval.
    pub fn tick(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.0 = (self.0 + PROGRESS_STEP).min(100);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn mounted() -> RevealOrchestrator<TimerQueue<RevealEvent>> {
        let mut machine = RevealOrchestrator::new(TimerQueue::new());
        machine.mount();
        machine
    }

    fn interactive_screens<S: Scheduler<RevealEvent>>(machine: &RevealOrchestrator<S>) -> usize {
        [Screen::Loading, Screen::Hero, Screen::Main]
            .into_iter()
            .filter(|s| machine.visibility(*s).interactive)
            .count()
    }

    #[test]
    fn test_starts_loading() {
        let machine = mounted();
        assert_eq!(machine.state(), RevealState::Loading);
        assert!(!machine.is_fading());
        assert_eq!(machine.scheduler().pending(), 1);
    }

    #[test]
    fn test_reaches_hero_once_after_timers() {
        let mut machine = mounted();

        assert!(machine.advance(ms(2999)).is_empty());
        assert!(machine.advance(ms(1)).is_empty());
        assert!(machine.is_fading());
        assert_eq!(machine.state(), RevealState::Loading);

        assert_eq!(machine.advance(ms(1000)), vec![RevealState::Hero]);
        assert!(machine.advance(ms(60_000)).is_empty());
        assert_eq!(machine.state(), RevealState::Hero);
    }

    #[test]
    fn test_single_advance_covers_chained_fade() {
        let mut machine = mounted();
        assert_eq!(machine.advance(ms(4000)), vec![RevealState::Hero]);
    }

    #[test]
    fn test_revealed_only_on_open() {
        let mut machine = mounted();
        machine.advance(ms(4000));

        assert!(machine.advance(ms(600_000)).is_empty());
        assert_eq!(machine.state(), RevealState::Hero);

        assert_eq!(machine.open_invitation(), Some(RevealState::Revealed));
        assert_eq!(machine.open_invitation(), None);
        assert_eq!(machine.state(), RevealState::Revealed);
    }

    #[test]
    fn test_open_ignored_while_loading() {
        let mut machine = mounted();
        assert_eq!(machine.open_invitation(), None);
        machine.advance(ms(3500));
        assert_eq!(machine.open_invitation(), None);
        assert_eq!(machine.state(), RevealState::Loading);
    }

    #[test]
    fn test_out_of_order_events_ignored() {
        let mut machine = mounted();
        assert_eq!(machine.dispatch(RevealEvent::FadeComplete), None);
        assert_eq!(machine.state(), RevealState::Loading);
        assert!(!machine.is_fading());
    }

    #[test]
    fn test_unmount_cancels_pending_timers() {
        let mut machine = mounted();
        machine.advance(ms(1500));
        machine.unmount();

        assert_eq!(machine.scheduler().pending(), 0);
        assert!(machine.advance(ms(10_000)).is_empty());
        assert_eq!(machine.state(), RevealState::Loading);
    }

    #[test]
    fn test_unmount_during_fade() {
        let mut machine = mounted();
        machine.advance(ms(3000));
        assert!(machine.is_fading());
        machine.unmount();

        assert!(machine.advance(ms(5000)).is_empty());
        assert_eq!(machine.dispatch(RevealEvent::FadeComplete), None);
        assert_eq!(machine.state(), RevealState::Loading);
    }

    #[test]
    fn test_mount_is_idempotent() {
        let mut machine = mounted();
        machine.mount();
        assert_eq!(machine.scheduler().pending(), 1);
    }

    #[test]
    fn test_no_events_before_mount() {
        let mut machine = RevealOrchestrator::new(TimerQueue::new());
        assert_eq!(machine.dispatch(RevealEvent::LoadingElapsed), None);
        assert!(!machine.is_fading());
    }

    #[test]
    fn test_at_most_one_interactive_screen() {
        let mut machine = mounted();
        assert_eq!(interactive_screens(&machine), 1);
        assert!(machine.visibility(Screen::Loading).interactive);

        machine.advance(ms(3000));
        assert_eq!(interactive_screens(&machine), 0);
        assert!(machine.visibility(Screen::Hero).mounted);

        machine.advance(ms(1000));
        assert_eq!(interactive_screens(&machine), 1);
        assert!(machine.visibility(Screen::Hero).interactive);
        assert!(!machine.visibility(Screen::Loading).mounted);

        machine.open_invitation();
        assert_eq!(interactive_screens(&machine), 1);
        assert!(machine.visibility(Screen::Main).interactive);
        assert!(!machine.visibility(Screen::Hero).visible);
    }

    #[test]
    fn test_progress_clamps_at_full() {
        let mut progress = Progress::new();
        let mut ticks = 0;
        while progress.tick() {
            ticks += 1;
        }
        assert_eq!(ticks, 50);
        assert_eq!(progress.percent(), 100);
        assert!(!progress.tick());
        assert_eq!(progress.percent(), 100);
    }
}
