use leptos::prelude::*;

use crate::content::{ABOUT_IMAGES, TRUST_FEATURES};
use crate::icons::{Glyph, Icon};
use crate::motion::{self, CARD_STAGGER_S, FADE_UP, SLIDE_RIGHT};

/// Store story: two photos sliding in from the left, copy and the three
/// trust features fading up on the right.
#[component]
pub fn About() -> impl IntoView {
    let (images_ref, images_in) = motion::use_reveal(0.3);
    let (copy_ref, copy_in) = motion::use_reveal(0.3);

    view! {
        <section id="about" class="section">
            <div class="container about-grid">
                <div class="about-images" node_ref=images_ref>
                    {ABOUT_IMAGES
                        .iter()
                        .enumerate()
                        .map(|(i, (src, alt))| {
                            view! {
                                <div
                                    class="about-image"
                                    style=move || {
                                        SLIDE_RIGHT.style(images_in.get(), i as f64 * CARD_STAGGER_S)
                                    }
                                >
                                    <img src=*src alt=*alt />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div node_ref=copy_ref>
                    <div
                        class="section-tag"
                        style=move || {
                            format!(
                                "background: rgba(6, 214, 160, 0.08); color: #06D6A0; {}",
                                FADE_UP.style(copy_in.get(), 0.0),
                            )
                        }
                    >
                        <Icon glyph=Glyph::Sparkles size=14 />
                        " About Us"
                    </div>
                    <h2
                        class="heading-md"
                        style=move || FADE_UP.style(copy_in.get(), CARD_STAGGER_S)
                    >
                        "Indra Sakti Toys:"
                        <br />
                        <span class="text-gradient">"Medan's Favorite"</span>
                        " Store"
                    </h2>
                    <p
                        class="about-lead"
                        style=move || FADE_UP.style(copy_in.get(), 2.0 * CARD_STAGGER_S)
                    >
                        "Selama bertahun-tahun, Indra Sakti Toys telah menjadi pilihan utama "
                        "keluarga di Medan Johor. Kami percaya bahwa bermain adalah bagian "
                        "terpenting dalam tumbuh kembang anak."
                    </p>

                    {TRUST_FEATURES
                        .iter()
                        .enumerate()
                        .map(|(i, feat)| {
                            view! {
                                <div
                                    class="about-feature"
                                    style=move || {
                                        FADE_UP.style(copy_in.get(), (i + 3) as f64 * CARD_STAGGER_S)
                                    }
                                >
                                    <div
                                        class="about-feature-icon"
                                        style=format!("background: {}", feat.gradient)
                                    >
                                        <Icon glyph=feat.glyph size=22 />
                                    </div>
                                    <div>
                                        <div class="about-feature-title">{feat.title}</div>
                                        <div class="about-feature-desc">{feat.desc}</div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}

                    <button
                        class="btn btn-primary about-cta"
                        style=move || FADE_UP.style(copy_in.get(), 6.0 * CARD_STAGGER_S)
                    >
                        "Learn Our Story " <Icon glyph=Glyph::ArrowRight size=18 />
                    </button>
                </div>
            </div>
        </section>
    }
}
