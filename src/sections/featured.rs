use leptos::prelude::*;

use crate::content::PRODUCTS;
use crate::icons::{Glyph, Icon};
use crate::motion::{self, CARD_STAGGER_S, FADE_UP};

/// Ratings are numeric, but the row always draws five filled stars.
/// Proportional star display is a known gap, kept as-is on purpose.
const STARS_PER_CARD: usize = 5;

/// Three product cards with the shared reveal-on-scroll contract.
#[component]
pub fn Featured() -> impl IntoView {
    let (header_ref, header_in) = motion::use_reveal(0.3);
    let (grid_ref, grid_in) = motion::use_reveal(0.2);

    view! {
        <section id="products" class="featured section">
            <div class="featured-bg-pattern"></div>
            <div class="container">
                <div class="section-header" node_ref=header_ref>
                    <div
                        class="section-tag"
                        style=move || {
                            format!(
                                "background: rgba(131, 56, 236, 0.08); color: #8338EC; {}",
                                FADE_UP.style(header_in.get(), 0.0),
                            )
                        }
                    >
                        <Icon glyph=Glyph::Heart size=14 />
                        " Fan Favorites"
                    </div>
                    <h2
                        class="heading-md"
                        style=move || FADE_UP.style(header_in.get(), CARD_STAGGER_S)
                    >
                        <span class="text-gradient-alt">"Featured"</span> " Products"
                    </h2>
                    <p
                        class="section-subtitle"
                        style=move || FADE_UP.style(header_in.get(), 2.0 * CARD_STAGGER_S)
                    >
                        "Produk terlaris yang paling disukai pelanggan kami."
                    </p>
                </div>

                <div class="featured-grid" node_ref=grid_ref>
                    {PRODUCTS
                        .iter()
                        .enumerate()
                        .map(|(i, product)| {
                            view! {
                                <article
                                    class="featured-card"
                                    style=move || {
                                        FADE_UP.style(grid_in.get(), i as f64 * CARD_STAGGER_S)
                                    }
                                >
                                    <div class="featured-card-image">
                                        <img src=product.image alt=product.alt />
                                        <span
                                            class="featured-card-tag"
                                            style=format!("background: {}", product.tag_color)
                                        >
                                            {product.tag}
                                        </span>
                                    </div>
                                    <div class="featured-card-body">
                                        <h3 class="featured-card-title">{product.title}</h3>
                                        <div class="featured-card-price">{product.price}</div>
                                        <div class="featured-card-rating">
                                            {(0..STARS_PER_CARD)
                                                .map(|_| {
                                                    view! {
                                                        <Icon glyph=Glyph::Star size=14 filled=true />
                                                    }
                                                })
                                                .collect_view()}
                                            <span>{product.rating}</span>
                                        </div>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
