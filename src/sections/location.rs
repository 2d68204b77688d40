use leptos::prelude::*;

use crate::content::LOCATION_INFO;
use crate::icons::{Glyph, Icon};
use crate::motion::{self, CARD_STAGGER_S, FADE_UP, SLIDE_LEFT, SLIDE_RIGHT};

/// Store address, contact and opening hours. The map is a decorative
/// placeholder panel, not a live widget.
#[component]
pub fn Location() -> impl IntoView {
    let (panel_ref, panel_in) = motion::use_reveal(0.3);

    view! {
        <section id="location" class="location section">
            <div class="container">
                <div class="location-grid" node_ref=panel_ref>
                    <div style=move || SLIDE_RIGHT.style(panel_in.get(), 0.0)>
                        <div
                            class="section-tag"
                            style="background: rgba(255, 209, 102, 0.15); color: #FFD166;"
                        >
                            <Icon glyph=Glyph::MapPin size=14 />
                            " Visit Us"
                        </div>
                        <h2 class="heading-md">"Visit Our Store"</h2>
                        <p class="location-subtitle">
                            "Datang dan rasakan langsung keajaibannya! Kunjungi toko kami di "
                            "Medan Johor untuk pengalaman belanja yang tak terlupakan."
                        </p>

                        {LOCATION_INFO
                            .iter()
                            .enumerate()
                            .map(|(i, info)| {
                                view! {
                                    <div
                                        class="location-info-card"
                                        style=move || {
                                            FADE_UP.style(
                                                panel_in.get(),
                                                (i + 1) as f64 * CARD_STAGGER_S,
                                            )
                                        }
                                    >
                                        <div
                                            class="location-info-icon"
                                            style=format!(
                                                "background: {}; color: {};",
                                                info.icon_bg,
                                                info.accent,
                                            )
                                        >
                                            <Icon glyph=info.glyph />
                                        </div>
                                        <div>
                                            <div class="location-info-title">{info.title}</div>
                                            <div class="location-info-text">
                                                {info.lines[0]}
                                                <br />
                                                {info.lines[1]}
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div style=move || SLIDE_LEFT.style(panel_in.get(), CARD_STAGGER_S)>
                        <div class="location-map">
                            <div class="location-map-inner">
                                <Icon glyph=Glyph::MapPin size=56 />
                                <p class="location-map-text">
                                    "Interactive Map"
                                    <br />
                                    "Medan Johor Area"
                                </p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
