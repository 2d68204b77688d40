use leptos::prelude::*;

use crate::content::{FLOATING_CARDS, HERO_IMAGE, HERO_IMAGE_ALT, HERO_STATS};
use crate::icons::{Glyph, Icon};
use crate::motion::{self, FADE_IN, FADE_UP, HERO_STAGGER_S, SCALE_IN, parallax_offset};

/// Headline, CTAs and image block. The mount cascade plays once; the left
/// column drifts upward with scroll progress (parallax); the floating cards
/// oscillate forever on the compositor's clock via CSS keyframes.
#[component]
pub fn Hero() -> impl IntoView {
    let entered = motion::use_entrance();
    let progress = motion::use_scroll_progress();
    let parallax =
        move || format!("transform: translateY({}px)", parallax_offset(progress.get()));

    view! {
        <section id="home" class="hero section">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content" style=parallax>
                        <div
                            class="hero-badge"
                            style=move || FADE_UP.style(entered.get(), 0.0)
                        >
                            <span class="hero-badge-dot"></span>
                            "✨ Toko Mainan Terlengkap di Medan"
                        </div>

                        <h1
                            class="hero-title"
                            style=move || FADE_UP.style(entered.get(), HERO_STAGGER_S)
                        >
                            "Bring " <span class="text-gradient">"Pure Joy"</span>
                            <br />
                            "To Your Little Ones"
                        </h1>

                        <p
                            class="hero-subtitle"
                            style=move || FADE_UP.style(entered.get(), 2.0 * HERO_STAGGER_S)
                        >
                            "Temukan dunia imajinasi di Indra Sakti Toys. Dari puzzle edukatif "
                            "hingga action figures, kami menyediakan mainan berkualitas terbaik di Medan."
                        </p>

                        <div
                            class="hero-buttons"
                            style=move || FADE_UP.style(entered.get(), 3.0 * HERO_STAGGER_S)
                        >
                            <a href="#collections" class="btn btn-primary">
                                "Explore Collections " <Icon glyph=Glyph::ChevronRight size=18 />
                            </a>
                            <button class="hero-play-btn">
                                <span class="hero-play-icon">
                                    <Icon glyph=Glyph::Play size=18 filled=true />
                                </span>
                                "Watch Story"
                            </button>
                        </div>

                        <div
                            class="hero-stats"
                            style=move || FADE_IN.style(entered.get(), 4.0 * HERO_STAGGER_S)
                        >
                            {HERO_STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div>
                                            <div class="hero-stat-number">{stat.number}</div>
                                            <div class="hero-stat-label">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div
                        class="hero-image-wrapper"
                        style=move || SCALE_IN.style(entered.get(), HERO_STAGGER_S)
                    >
                        <div class="hero-image-container">
                            <div class="hero-image-bg"></div>
                            <div class="hero-image-main">
                                <img src=HERO_IMAGE alt=HERO_IMAGE_ALT />
                            </div>
                            {FLOATING_CARDS
                                .iter()
                                .map(|card| {
                                    view! {
                                        <div class=card.class>
                                            <div
                                                class="hero-floating-icon"
                                                style=format!("background: {}", card.icon_bg)
                                            >
                                                <Icon
                                                    glyph=card.glyph
                                                    size=20
                                                    filled={card.glyph == Glyph::Star}
                                                />
                                            </div>
                                            <div>
                                                <div class="hero-floating-title">{card.title}</div>
                                                <div class="hero-floating-value">{card.value}</div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
