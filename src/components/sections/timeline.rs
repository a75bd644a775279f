//! Day schedule.

use leptos::prelude::*;
use leptos_icons::Icon;
use vows_core::site;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/sections/sections.module.css");

#[component]
pub fn Timeline() -> impl IntoView {
    let content = site();

    let events = content
        .timeline()
        .into_iter()
        .map(|event| {
            view! {
                <li class=css::timelineItem>
                    <img class=css::timelineImage src=event.image alt=event.title loading="lazy" />
                    <div class=css::timelineBody>
                        <p class=css::timelineTime>
                            <Icon icon=ic::CLOCK />
                            <span>{event.time}</span>
                        </p>
                        <h3 class=css::cardTitle>{event.title}</h3>
                        <p>{event.description}</p>
                        <p class=css::muted>
                            <Icon icon=ic::LOCATION />
                            <span>{event.location}</span>
                        </p>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class=css::section id="timeline">
            <p class=css::eyebrow>"The Big Day"</p>
            <h2 class=css::title>"Wedding Timeline"</h2>
            <p class=css::lead>{format!("{}, {}", content.ceremony.day, content.ceremony.date)}</p>
            <ol class=css::timeline>{events}</ol>
        </section>
    }
}
