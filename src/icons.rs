//! Fixed catalog of inline SVG glyphs (24×24, stroke style).

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    ShoppingBag,
    MapPin,
    Phone,
    Menu,
    Close,
    ChevronRight,
    Star,
    Play,
    Instagram,
    Facebook,
    Twitter,
    Clock,
    Shield,
    Sparkles,
    ArrowRight,
    Heart,
    Gift,
    Truck,
    Award,
}

impl Glyph {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Glyph::ShoppingBag => &[
                "M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z",
                "M3 6h18",
                "M16 10a4 4 0 0 1-8 0",
            ],
            Glyph::MapPin => &[
                "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0Z",
                "M15 10a3 3 0 1 1-6 0 3 3 0 0 1 6 0Z",
            ],
            Glyph::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            Glyph::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Glyph::Close => &["M18 6 6 18", "m6 6 12 12"],
            Glyph::ChevronRight => &["m9 18 6-6-6-6"],
            Glyph::Star => &[
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 19.77l-6.18 3.25L7 16.14 2 9.27l6.91-1.01L12 2z",
            ],
            Glyph::Play => &["m5 3 14 9-14 9V3z"],
            Glyph::Instagram => &[
                "M17 2H7a5 5 0 0 0-5 5v10a5 5 0 0 0 5 5h10a5 5 0 0 0 5-5V7a5 5 0 0 0-5-5Z",
                "M16 11.37a4 4 0 1 1-7.914 1.173A4 4 0 0 1 16 11.37Z",
                "M17.5 6.5h.01",
            ],
            Glyph::Facebook => &[
                "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z",
            ],
            Glyph::Twitter => &[
                "M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.1a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z",
            ],
            Glyph::Clock => &[
                "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0Z",
                "M12 6v6l4 2",
            ],
            Glyph::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
            Glyph::Sparkles => &[
                "M12 3l1.9 5.8 5.8 1.9-5.8 1.9L12 18.4l-1.9-5.8-5.8-1.9 5.8-1.9L12 3z",
                "M19 15l.7 2.1 2.1.7-2.1.7-.7 2.1-.7-2.1-2.1-.7 2.1-.7L19 15z",
            ],
            Glyph::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Glyph::Heart => &[
                "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z",
            ],
            Glyph::Gift => &[
                "M20 12v10H4V12",
                "M2 7h20v5H2z",
                "M12 22V7",
                "M12 7H7.5a2.5 2.5 0 0 1 0-5C11 2 12 7 12 7z",
                "M12 7h4.5a2.5 2.5 0 0 0 0-5C13 2 12 7 12 7z",
            ],
            Glyph::Truck => &[
                "M1 3h15v13H1z",
                "M16 8h4l3 3v5h-7V8z",
                "M8 18.5a2.5 2.5 0 1 1-5 0 2.5 2.5 0 0 1 5 0Z",
                "M21 18.5a2.5 2.5 0 1 1-5 0 2.5 2.5 0 0 1 5 0Z",
            ],
            Glyph::Award => &[
                "M19 8a7 7 0 1 1-14 0 7 7 0 0 1 14 0Z",
                "M8.21 13.89 7 23l5-3 5 3-1.21-9.12",
            ],
        }
    }
}

#[component]
pub fn Icon(
    glyph: Glyph,
    #[prop(default = 24)] size: u32,
    /// Fill with currentColor instead of stroke-only (stars, play button).
    #[prop(optional)]
    filled: bool,
) -> impl IntoView {
    let fill = if filled { "currentColor" } else { "none" };
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill=fill
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class="icon"
            aria-hidden="true"
        >
            {glyph.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
