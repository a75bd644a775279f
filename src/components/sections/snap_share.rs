//! Guest photo sharing: drive folder, hashtag, QR code.

use leptos::prelude::*;
use leptos_icons::Icon;
use vows_core::site;

use super::CopyButton;
use crate::components::icons as ic;
use crate::config::{assets, copy_ids};
use crate::models::Route;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/sections/sections.module.css");

#[component]
pub fn SnapShare() -> impl IntoView {
    let snap = &site().snap_share;
    let drive_link = snap.drive_link.clone();

    view! {
        <section class=css::section id="snap-share">
            <p class=css::eyebrow>"Capture the Love"</p>
            <h2 class=css::title>"Snap & Share"</h2>
            <article class=css::card>
                <img class=css::qr src=assets::SNAP_SHARE_QR alt="Snap & Share QR code" loading="lazy" />
                <p>{snap.instructions.clone()}</p>
                <p class=css::hashtag>{snap.hashtag.clone()}</p>
                <div class=css::grid>
                    <button
                        class=css::primaryButton
                        on:click=move |_| {
                            dom::open_external(&drive_link);
                        }
                    >
                        <Icon icon=ic::CAMERA />
                        <span>"Upload Photos"</span>
                        <Icon icon=ic::EXTERNAL_LINK />
                    </button>
                    <CopyButton id=copy_ids::HASHTAG text=snap.hashtag.clone() label="Copy Hashtag" />
                </div>
                <button class=css::linkButton on:click=move |_| Route::Gallery.push()>
                    <Icon icon=ic::GALLERY />
                    <span>"View Our Gallery"</span>
                </button>
            </article>
        </section>
    }
}
