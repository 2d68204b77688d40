use leptos::prelude::*;

use crate::content::CATEGORIES;
use crate::icons::{Glyph, Icon};
use crate::motion::{self, CARD_STAGGER_S, FADE_UP};

/// Four category cards. Header and grid reveal independently, each a
/// one-shot triggered by viewport intersection; cards stagger by index.
#[component]
pub fn Categories() -> impl IntoView {
    let (header_ref, header_in) = motion::use_reveal(0.3);
    let (grid_ref, grid_in) = motion::use_reveal(0.2);

    view! {
        <section id="collections" class="categories section">
            <div class="container">
                <div class="section-header" node_ref=header_ref>
                    <div
                        class="section-tag"
                        style=move || {
                            format!(
                                "background: rgba(255, 107, 53, 0.08); color: #FF6B35; {}",
                                FADE_UP.style(header_in.get(), 0.0),
                            )
                        }
                    >
                        <Icon glyph=Glyph::Sparkles size=14 />
                        " Browse Categories"
                    </div>
                    <h2
                        class="heading-md"
                        style=move || FADE_UP.style(header_in.get(), CARD_STAGGER_S)
                    >
                        "Our " <span class="text-gradient">"Playful"</span> " Collections"
                    </h2>
                    <p
                        class="section-subtitle"
                        style=move || FADE_UP.style(header_in.get(), 2.0 * CARD_STAGGER_S)
                    >
                        "Temukan koleksi mainan kami yang dikurasi untuk menginspirasi "
                        "kreativitas dan pembelajaran anak-anak di segala usia."
                    </p>
                </div>

                <div class="categories-grid" node_ref=grid_ref>
                    {CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(i, cat)| {
                            view! {
                                <div
                                    class="category-card"
                                    style=move || {
                                        format!(
                                            "--card-gradient: {}; {}",
                                            cat.gradient,
                                            FADE_UP.style(grid_in.get(), i as f64 * CARD_STAGGER_S),
                                        )
                                    }
                                >
                                    <span class="category-icon">{cat.icon}</span>
                                    <h3 class="category-name">{cat.title}</h3>
                                    <p class="category-count">{cat.count}</p>
                                    <div
                                        class="category-arrow"
                                        style=format!("background: {}", cat.accent)
                                    >
                                        <Icon glyph=Glyph::ArrowRight size=16 />
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
