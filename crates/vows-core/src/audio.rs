//! Background music autoplay controller.
//!
//! Browsers may reject autoplay until the user interacts with the page. The
//! controller tries once when the track is ready; on rejection it asks the
//! host to arm one-shot interaction listeners, and the first interaction
//! triggers a single deferred attempt. After that nothing is retried.
//!
//! The controller only decides. The host performs the returned
//! [`AudioCommand`]s against the real media element and reports outcomes
//! back through [`AmbientAudio::play_started`] and
//! [`AmbientAudio::play_rejected`].

/// Document events that count as a user interaction.
pub const INTERACTION_EVENTS: [&str; 3] = ["pointerdown", "touchstart", "keydown"];

/// Fixed playback volume.
pub const VOLUME: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioPhase {
    /// Waiting for the track to become ready
    #[default]
    Idle,
    /// Autoplay attempt in flight
    Autoplaying,
    /// Autoplay rejected; listeners armed
    AwaitingInteraction,
    /// Interaction-triggered attempt in flight
    InteractionPlaying,
    /// Track is playing
    Playing,
    /// Deferred attempt failed; no further attempts
    Failed,
}

/// Side effect requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCommand {
    Play,
    ArmInteractionListeners,
    DisarmInteractionListeners,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmbientAudio {
    phase: AudioPhase,
    attempts: u32,
}

impl AmbientAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> AudioPhase {
        self.phase
    }

    /// Number of play attempts requested so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// No further attempts will be made.
    pub fn is_settled(&self) -> bool {
        matches!(self.phase, AudioPhase::Playing | AudioPhase::Failed)
    }

    /// The track can play (`canplay`, `loadedmetadata`, or already buffered).
    /// Repeated readiness signals are ignored.
    pub fn ready(&mut self) -> &'static [AudioCommand] {
        match self.phase {
            AudioPhase::Idle => {
                self.phase = AudioPhase::Autoplaying;
                self.attempts += 1;
                &[AudioCommand::Play]
            }
            _ => &[],
        }
    }

    /// A play attempt resolved.
    pub fn play_started(&mut self) -> &'static [AudioCommand] {
        match self.phase {
            AudioPhase::Autoplaying | AudioPhase::InteractionPlaying => {
                self.phase = AudioPhase::Playing;
                &[]
            }
            _ => &[],
        }
    }

    /// A play attempt was rejected.
    pub fn play_rejected(&mut self) -> &'static [AudioCommand] {
        match self.phase {
            AudioPhase::Autoplaying => {
                self.phase = AudioPhase::AwaitingInteraction;
                &[AudioCommand::ArmInteractionListeners]
            }
            AudioPhase::InteractionPlaying => {
                self.phase = AudioPhase::Failed;
                &[]
            }
            _ => &[],
        }
    }

    /// A qualifying user interaction happened. Only the first one while
    /// awaiting interaction triggers playback; every listener is disarmed.
    pub fn interaction(&mut self) -> &'static [AudioCommand] {
        match self.phase {
            AudioPhase::AwaitingInteraction => {
                self.phase = AudioPhase::InteractionPlaying;
                self.attempts += 1;
                &[AudioCommand::DisarmInteractionListeners, AudioCommand::Play]
            }
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autoplay_success() {
        let mut audio = AmbientAudio::new();
        assert_eq!(audio.ready(), &[AudioCommand::Play]);
        assert!(audio.play_started().is_empty());
        assert_eq!(audio.phase(), AudioPhase::Playing);
        assert!(audio.is_settled());

        assert!(audio.ready().is_empty());
        assert!(audio.interaction().is_empty());
        assert_eq!(audio.attempts(), 1);
    }

    #[test]
    fn test_repeated_ready_is_idempotent() {
        let mut audio = AmbientAudio::new();
        audio.ready();
        assert!(audio.ready().is_empty());
        assert_eq!(audio.attempts(), 1);
    }

    #[test]
    fn test_rejection_defers_to_first_interaction() {
        let mut audio = AmbientAudio::new();
        audio.ready();
        assert_eq!(
            audio.play_rejected(),
            &[AudioCommand::ArmInteractionListeners]
        );
        assert_eq!(audio.phase(), AudioPhase::AwaitingInteraction);

        assert_eq!(
            audio.interaction(),
            &[AudioCommand::DisarmInteractionListeners, AudioCommand::Play]
        );
        // A touchstart following the pointerdown of the same tap
        assert!(audio.interaction().is_empty());

        audio.play_started();
        assert_eq!(audio.phase(), AudioPhase::Playing);
        assert_eq!(audio.attempts(), 2);

        assert!(audio.interaction().is_empty());
        assert!(audio.ready().is_empty());
    }

    #[test]
    fn test_failure_after_interaction_is_final() {
        let mut audio = AmbientAudio::new();
        audio.ready();
        audio.play_rejected();
        audio.interaction();

        assert!(audio.play_rejected().is_empty());
        assert_eq!(audio.phase(), AudioPhase::Failed);
        assert!(audio.is_settled());

        assert!(audio.interaction().is_empty());
        assert!(audio.ready().is_empty());
        assert_eq!(audio.attempts(), 2);
    }

    #[test]
    fn test_interaction_before_rejection_ignored() {
        let mut audio = AmbientAudio::new();
        assert!(audio.interaction().is_empty());
        audio.ready();
        assert!(audio.interaction().is_empty());
        assert_eq!(audio.phase(), AudioPhase::Autoplaying);
    }
}
