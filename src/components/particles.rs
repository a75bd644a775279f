//! Floating particle overlay for the loading and hero screens.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use vows_core::particles::PARTICLE_TICK;
use vows_core::{Particle, ParticleField, ParticlePreset};

use crate::core::delay_ms;

stylance::import_crate_style!(css, "src/components/particles.module.css");

fn particle_style(p: &Particle) -> String {
    format!(
        "left: {:.3}%; top: {:.3}%; width: {size:.2}px; height: {size:.2}px; opacity: {:.3}; background: {};",
        p.x,
        p.y,
        p.opacity,
        p.color,
        size = p.size,
    )
}

/// Particle field that animates only while `active` is true.
///
/// The field is generated once per mount; each node reads its particle by
/// index so ticks update styles in place.
#[component]
pub fn ParticleLayer(preset: ParticlePreset, #[prop(into)] active: Signal<bool>) -> impl IntoView {
    let field = RwSignal::new(ParticleField::random(preset));
    let ticker: StoredValue<Option<Interval>, LocalStorage> = StoredValue::new_local(None);

    Effect::new(move |_| {
        let running = active.get();
        ticker.update_value(|ticker| {
            *ticker = running.then(|| {
                Interval::new(delay_ms(PARTICLE_TICK), move || {
                    field.update(|f| f.step(js_sys::Date::now() / 1000.0));
                })
            });
        });
    });

    on_cleanup(move || {
        ticker.try_update_value(|ticker| ticker.take());
    });

    let count = field.with_untracked(|f| f.len());
    let nodes = (0..count)
        .map(|i| {
            let style = move || {
                field.with(|f| f.particles().get(i).map(particle_style).unwrap_or_default())
            };
            view! { <span class=css::particle style=style /> }
        })
        .collect_view();

    view! {
        <div class=css::layer aria-hidden="true">
            {nodes}
        </div>
    }
}
