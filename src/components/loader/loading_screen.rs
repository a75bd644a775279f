//! Full-screen loader shown before the hero.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use vows_core::particles::LOADING_PARTICLES;
use vows_core::reveal::PROGRESS_INTERVAL;
use vows_core::{Progress, ScreenVisibility, site};

use crate::components::particles::ParticleLayer;
use crate::config::assets;
use crate::core::delay_ms;

use super::screen_class;

stylance::import_crate_style!(css, "src/components/loader/loader.module.css");

#[component]
pub fn LoadingScreen(visibility: Memo<ScreenVisibility>) -> impl IntoView {
    let progress = RwSignal::new(Progress::new());
    let ticker: StoredValue<Option<Interval>, LocalStorage> = StoredValue::new_local(None);

    // The interval drops itself once the bar is full
    let interval = Interval::new(delay_ms(PROGRESS_INTERVAL), move || {
        let mut advanced = false;
        progress.update(|p| advanced = p.tick());
        if !advanced {
            ticker.set_value(None);
        }
    });
    ticker.set_value(Some(interval));

    on_cleanup(move || {
        ticker.try_update_value(|ticker| ticker.take());
    });

    let visible = Signal::derive(move || visibility.get().visible);
    let bar_style = move || format!("width: {}%;", progress.get().percent());

    view! {
        <Show when=move || visibility.get().mounted>
            <div
                class=move || screen_class(css::screen, css::hidden, visible.get())
                inert=move || !visibility.get().interactive
                aria-busy="true"
            >
                <ParticleLayer preset=LOADING_PARTICLES active=visible />
                <div class=css::content>
                    <img class=css::monogram src=assets::MONOGRAM alt="Monogram" />
                    <p class=css::couple>{site().couple_display()}</p>
                    <div class=css::track>
                        <div class=css::bar style=bar_style />
                    </div>
                    <p class=css::percent>{move || format!("{}%", progress.get().percent())}</p>
                </div>
            </div>
        </Show>
    }
}
