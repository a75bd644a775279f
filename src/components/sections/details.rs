//! Ceremony and reception details, attire guide, arrival and travel notes.

use leptos::prelude::*;
use leptos_icons::Icon;
use vows_core::content::maps_link;
use vows_core::site;

use super::CopyButton;
use crate::components::icons as ic;
use crate::config::{assets, copy_ids};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/sections/sections.module.css");

const TRAVEL_TIPS: [&str; 3] = [
    "Plan your route ahead to avoid unexpected delays.",
    "Please avoid walking during the ceremony. Approach the coordinator or wait to be guided.",
    "Coordinate carpooling with friends or family when possible.",
];

fn palette_chips(colors: &[String]) -> impl IntoView + use<> {
    let chips = colors
        .iter()
        .map(|color| {
            view! {
                <span
                    class=css::chip
                    style=format!("background: {};", color)
                    title=color.clone()
                />
            }
        })
        .collect_view();

    view! {
        <div class=css::palette>
            <p class=css::paletteLabel>"Motif Colors"</p>
            <div class=css::chips>{chips}</div>
        </div>
    }
}

#[component]
pub fn Details() -> impl IntoView {
    let content = site();
    let ceremony = &content.ceremony;
    let dress = &content.dress_code;

    let directions = maps_link(&ceremony.location);
    let open_directions = move |_| {
        dom::open_external(&directions);
    };

    view! {
        <section
            class=css::section
            id="details"
            style=format!("background-image: url('{}');", assets::DETAILS_BACKGROUND)
        >
            <p class=css::eyebrow>"Ceremony & Reception Details"</p>
            <h2 class=css::title>"Details"</h2>
            <p class=css::lead>"Everything you need to join us as we say \u{201c}I do.\u{201d}"</p>

            // Venue
            <article class=css::venueCard>
                <div class=css::venueHeader>
                    <img class=css::venueImage src=assets::VENUE_IMAGE alt=ceremony.venue.clone() />
                    <div class=css::venueOverlay>
                        <h3>{ceremony.venue.clone()}</h3>
                        <p>{format!("{} \u{00b7} {}", ceremony.day, ceremony.date)}</p>
                    </div>
                </div>
                <div class=css::venueBody>
                    <p class=css::muted>
                        <Icon icon=ic::LOCATION />
                        <span>{ceremony.location.clone()}</span>
                    </p>
                    <div class=css::grid>
                        <div class=css::fact>
                            <p class=css::factLabel><Icon icon=ic::HEART />"Ceremony"</p>
                            <p class=css::factValue>{ceremony.time.clone()}</p>
                        </div>
                        <div class=css::fact>
                            <p class=css::factLabel><Icon icon=ic::RECEPTION />"Reception"</p>
                            <p class=css::factValue>{content.reception.time.clone()}</p>
                        </div>
                    </div>
                    <div class=css::grid>
                        <button class=css::primaryButton on:click=open_directions>
                            <Icon icon=ic::DIRECTIONS />
                            <span>"Get Directions"</span>
                        </button>
                        <CopyButton
                            id=copy_ids::VENUE
                            text=ceremony.location.clone()
                            label="Copy Address"
                        />
                    </div>
                </div>
            </article>

            <h3 class=css::subtitle>"Important Information"</h3>
            <p class=css::lead>
                "Kindly take note of these details to help the day flow smoothly and beautifully."
            </p>

            // Attire
            <article class=css::card>
                <h4 class=css::cardHeading>"Attire & Motif"</h4>
                <p class=css::emphasis>{dress.note.clone()}</p>
                <p>{format!("Theme: {}", dress.theme)}</p>

                <div class=css::attire>
                    <h5>"Principal Sponsors Attire"</h5>
                    <img class=css::attireImage src=assets::SPONSOR_ATTIRE alt="Principal sponsors attire" loading="lazy" />
                    <p><strong>"Male Sponsor: "</strong>{dress.sponsors.male.clone()}</p>
                    <p><strong>"Female Sponsor: "</strong>{dress.sponsors.female.clone()}</p>
                    {palette_chips(&dress.colors)}
                </div>

                <div class=css::attire>
                    <h5>"Wedding Guests"</h5>
                    <img class=css::attireImage src=assets::GUEST_ATTIRE alt="Guest attire" loading="lazy" />
                    <p><strong>"Gents: "</strong>{dress.guests.gents.clone()}</p>
                    <p><strong>"Ladies: "</strong>{dress.guests.ladies.clone()}</p>
                    {palette_chips(&dress.colors)}
                </div>
            </article>

            // Arrival and reception
            <div class=css::grid>
                <article class=css::card>
                    <h4 class=css::cardHeading>"Arrival Time"</h4>
                    <p>
                        "Kindly arrive by "
                        <strong>{ceremony.guests_time.clone()}</strong>
                        " so we can begin the wedding ceremony promptly at exactly "
                        <strong>{ceremony.time.clone()}</strong>
                        "."
                    </p>
                    <p>
                        "Your punctuality means so much to us. Have a light snack beforehand so you can enjoy the celebration comfortably!"
                    </p>
                </article>
                <article class=css::card>
                    <h4 class=css::cardHeading>"Reception Guidelines"</h4>
                    <p>
                        "The seating will be formal, RSVP-style. Kindly do not bring plus ones unless explicitly stated in your invitation."
                    </p>
                    <p>
                        "Please confirm your attendance on or before "
                        <strong>{content.rsvp.deadline.clone()}</strong>
                        "."
                    </p>
                </article>
            </div>

            // Travel
            <article class=css::card>
                <h4 class=css::cardHeading>"Parking & Travel"</h4>
                <div class=css::grid>
                    <div class=css::fact>
                        <p class=css::factLabel>"Parking Available"</p>
                        <p>"Parking is available at the venue. Please arrive early to find a comfortable spot."</p>
                    </div>
                    <div class=css::fact>
                        <p class=css::factLabel><Icon icon=ic::DIRECTIONS />"Transportation"</p>
                        <p>
                            "Private vehicles and local transport are welcome. Coordinate with friends or family and plan your route ahead of time."
                        </p>
                    </div>
                </div>
                <p class=css::factLabel><Icon icon=ic::LOCATION />"Quick Tips"</p>
                <ul class=css::tips>
                    {TRAVEL_TIPS.into_iter().map(|tip| view! { <li>{tip}</li> }).collect_view()}
                </ul>
            </article>
        </section>
    }
}
