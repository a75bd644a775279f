//! Hero screen: cycling background, staggered greeting, open button.

use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;
use vows_core::carousel::CAROUSEL_INTERVAL;
use vows_core::particles::HERO_PARTICLES;
use vows_core::{Carousel, Category, ScreenVisibility, site};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::particles::ParticleLayer;
use crate::config::{MOBILE_MEDIA_QUERY, assets, hero_delays};
use crate::core::delay_ms;

use super::screen_class;

stylance::import_crate_style!(css, "src/components/loader/loader.module.css");

/// Entrance stages, in order.
const STAGES: [u32; 4] = [
    hero_delays::MONOGRAM,
    hero_delays::YOU_ARE,
    hero_delays::INVITED,
    hero_delays::OPEN_BUTTON,
];

#[component]
pub fn HeroScreen(visibility: Memo<ScreenVisibility>, on_open: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let visible = Signal::derive(move || visibility.get().visible);

    // Background set follows the viewport
    let is_mobile = use_media_query(MOBILE_MEDIA_QUERY);
    let images = Memo::new(move |_| {
        let category = if is_mobile.get() {
            Category::Mobile
        } else {
            Category::Desktop
        };
        ctx.gallery
            .with(|g| g.of(category).map(|e| e.path.clone()).collect::<Vec<_>>())
    });

    let carousel = RwSignal::new(Carousel::default());
    Effect::new(move |_| {
        let len = images.with(Vec::len);
        carousel.update(|c| c.set_len(len));
    });

    // Cycle only while the hero is on screen and there is something to cycle
    let cycling = Memo::new(move |_| visible.get() && carousel.with(Carousel::should_cycle));
    let cycle_timer: StoredValue<Option<Interval>, LocalStorage> = StoredValue::new_local(None);
    Effect::new(move |_| {
        let running = cycling.get();
        cycle_timer.update_value(|timer| {
            *timer = running.then(|| {
                Interval::new(delay_ms(CAROUSEL_INTERVAL), move || {
                    carousel.update(|c| {
                        c.advance();
                    });
                })
            });
        });
    });

    // Staggered entrance, started the first time the hero becomes visible
    let stage = RwSignal::new(0usize);
    let stage_timers: StoredValue<Vec<Timeout>, LocalStorage> = StoredValue::new_local(Vec::new());
    Effect::new(move |started: Option<bool>| {
        let started = started.unwrap_or(false);
        if started || !visible.get() {
            return started;
        }
        let timers = STAGES
            .iter()
            .enumerate()
            .map(|(i, delay)| Timeout::new(*delay, move || stage.set(i + 1)))
            .collect();
        stage_timers.set_value(timers);
        true
    });

    on_cleanup(move || {
        cycle_timer.try_update_value(|timer| timer.take());
        stage_timers.try_update_value(Vec::clear);
    });

    let shown = move |n: usize| screen_class(css::stage, css::stageHidden, stage.get() >= n);

    let slides = move || {
        images
            .get()
            .into_iter()
            .enumerate()
            .map(|(i, src)| {
                let active = move || carousel.with(|c| c.index() == Some(i));
                view! {
                    <div
                        class=move || screen_class(css::slide, css::slideHidden, active())
                        style=format!("background-image: url('{}');", src)
                    />
                }
            })
            .collect_view()
    };

    let couple = &site().couple;

    view! {
        <Show when=move || visibility.get().mounted>
            <section
                class=move || screen_class(css::hero, css::hidden, visible.get())
                inert=move || !visibility.get().interactive
            >
                <div class=css::slides aria-hidden="true">{slides}</div>
                <div class=css::veil aria-hidden="true" />
                <ParticleLayer preset=HERO_PARTICLES active=visible />

                <div class=css::content>
                    <img class=move || shown(1) src=assets::MONOGRAM alt="Monogram" />
                    <p class=move || format!("{} {}", shown(2), css::youAre)>"You are"</p>
                    <h1 class=move || format!("{} {}", shown(3), css::invited)>"Invited"</h1>
                    <p class=move || format!("{} {}", shown(3), css::names)>
                        {format!("{} & {}", couple.groom, couple.bride)}
                    </p>
                    <p class=move || format!("{} {}", shown(3), css::date)>
                        {site().wedding.date.clone()}
                    </p>
                    <button
                        class=move || format!("{} {}", shown(4), css::openButton)
                        on:click=move |_| on_open.run(())
                    >
                        <Icon icon=ic::HEART />
                        <span>"Open Invitation"</span>
                    </button>
                </div>
            </section>
        </Show>
    }
}
