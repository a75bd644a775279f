//! Background music.
//!
//! Hosts [`AmbientAudio`]: the controller decides, this component performs
//! its commands against a hidden `<audio>` element and reports the outcome
//! of every `play()` promise back.

use leptos::prelude::*;
use vows_core::audio::{INTERACTION_EVENTS, VOLUME};
use vows_core::{AmbientAudio, AudioCommand};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlMediaElement;

use crate::config::assets;
use crate::core::error::{AudioError, js_error_message};
use crate::utils::dom::EventListener;
use crate::utils::log;

/// `HAVE_CURRENT_DATA`: enough is buffered to start playing.
const READY_STATE_CAN_PLAY: u16 = 2;

#[derive(Clone, Copy)]
struct AudioHost {
    element: NodeRef<leptos::html::Audio>,
    controller: StoredValue<AmbientAudio>,
    listeners: StoredValue<Vec<EventListener>, LocalStorage>,
}

impl AudioHost {
    fn ready(self) {
        if let Some(commands) = self.controller.try_update_value(|audio| audio.ready()) {
            self.perform(commands);
        }
    }

    fn interaction(self) {
        if let Some(commands) = self.controller.try_update_value(|audio| audio.interaction()) {
            self.perform(commands);
        }
    }

    fn perform(self, commands: &[AudioCommand]) {
        for command in commands {
            match command {
                AudioCommand::Play => self.play(),
                AudioCommand::ArmInteractionListeners => self.arm(),
                AudioCommand::DisarmInteractionListeners => self.disarm(),
            }
        }
    }

    fn play(self) {
        let Some(element) = self.element.get_untracked() else {
            return;
        };

        spawn_local(async move {
            let outcome = start_playback(&element).await;
            let commands = self.controller.try_update_value(|audio| match &outcome {
                Ok(()) => audio.play_started(),
                Err(_) => audio.play_rejected(),
            });

            if let Err(e) = outcome {
                log::warn(&e.to_string());
            }
            if let Some(commands) = commands {
                self.perform(commands);
            }
        });
    }

    /// One-shot listeners: the first interaction disarms all of them.
    fn arm(self) {
        let guards = INTERACTION_EVENTS
            .into_iter()
            .filter_map(|event| EventListener::on_document(event, move |_| self.interaction()))
            .collect::<Vec<_>>();
        self.listeners.set_value(guards);
    }

    fn disarm(self) {
        self.listeners.try_update_value(Vec::clear);
    }
}

async fn start_playback(element: &HtmlMediaElement) -> Result<(), AudioError> {
    let promise = element
        .play()
        .map_err(|e| AudioError::PlayUnavailable(js_error_message(&e)))?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| AudioError::PlayRejected(js_error_message(&e)))
}

/// Looping background track, started as early as the browser allows.
#[component]
pub fn BackgroundMusic() -> impl IntoView {
    let host = AudioHost {
        element: NodeRef::new(),
        controller: StoredValue::new(AmbientAudio::new()),
        listeners: StoredValue::new_local(Vec::new()),
    };

    // Configure once the element exists; it may already be buffered
    Effect::new(move |_| {
        let Some(element) = host.element.get() else {
            return;
        };
        element.set_volume(VOLUME);
        element.set_loop(true);
        let _ = element.set_attribute("playsinline", "");

        if element.ready_state() >= READY_STATE_CAN_PLAY {
            host.ready();
        }
    });

    on_cleanup(move || host.disarm());

    view! {
        <audio
            node_ref=host.element
            src=assets::BACKGROUND_MUSIC
            preload="auto"
            style="display: none"
            aria-hidden="true"
            on:canplay=move |_| host.ready()
            on:loadedmetadata=move |_| host.ready()
        />
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use vows_core::AudioPhase;
    use wasm_bindgen_test::*;

    use super::*;
    use crate::utils::dom;

    wasm_bindgen_test_configure!(run_in_browser);

    fn host() -> AudioHost {
        AudioHost {
            element: NodeRef::new(),
            controller: StoredValue::new(AmbientAudio::new()),
            listeners: StoredValue::new_local(Vec::new()),
        }
    }

    fn armed_count(host: AudioHost) -> usize {
        host.listeners.with_value(Vec::len)
    }

    /// Drive the controller to "autoplay rejected" without a real element.
    fn reject_autoplay(host: AudioHost) {
        host.ready();
        if let Some(commands) = host.controller.try_update_value(|audio| audio.play_rejected()) {
            host.perform(commands);
        }
    }

    fn fire(event: &str) {
        let Some(doc) = dom::document() else {
            return;
        };
        let event = web_sys::Event::new(event).unwrap();
        doc.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_first_interaction_disarms_every_listener() {
        let owner = Owner::new();
        let host = owner.with(host);

        reject_autoplay(host);
        assert_eq!(armed_count(host), INTERACTION_EVENTS.len());

        fire("keydown");
        assert_eq!(armed_count(host), 0);
        assert_eq!(host.controller.with_value(AmbientAudio::phase), AudioPhase::InteractionPlaying);

        fire("pointerdown");
        assert_eq!(host.controller.with_value(AmbientAudio::attempts), 2);
        owner.cleanup();
    }

    #[wasm_bindgen_test]
    fn test_disarm_removes_listeners() {
        let owner = Owner::new();
        let host = owner.with(host);

        reject_autoplay(host);
        host.disarm();
        assert_eq!(armed_count(host), 0);

        fire("touchstart");
        assert_eq!(host.controller.with_value(AmbientAudio::phase), AudioPhase::AwaitingInteraction);
        owner.cleanup();
    }
}
