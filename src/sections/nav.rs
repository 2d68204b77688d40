use leptos::prelude::*;

use crate::content::NAV_LINKS;
use crate::icons::{Glyph, Icon};
use crate::motion::{self, has_scrolled};

/// Fixed top bar. Tall and transparent at the top of the page, compact and
/// opaque once scrolled past the threshold. Owns the only two pieces of
/// mutable UI state on the page.
#[component]
pub fn Navbar() -> impl IntoView {
    let scroll = motion::use_scroll_offset();
    let scrolled = Memo::new(move |_| has_scrolled(scroll.get()));
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class=move || if scrolled.get() { "navbar scrolled" } else { "navbar" }>
            <div class="container navbar-inner">
                <a href="#home" class="navbar-logo">
                    <div class="navbar-logo-icon">
                        <Icon glyph=Glyph::ShoppingBag size=22 />
                    </div>
                    <div class="navbar-logo-text">"Indra Sakti " <span>"Toys"</span></div>
                </a>

                <div class="navbar-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=format!("#{}", link.anchor) class="navbar-link">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button class="btn btn-primary">
                        <Icon glyph=Glyph::ShoppingBag size=16 />
                        " Shop Now"
                    </button>
                </div>

                <button
                    class="navbar-mobile-toggle"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <Show
                        when=move || menu_open.get()
                        fallback=|| view! { <Icon glyph=Glyph::Menu size=24 /> }
                    >
                        <Icon glyph=Glyph::Close size=24 />
                    </Show>
                </button>
            </div>

            // Navigating from the open menu always closes it.
            <Show when=move || menu_open.get()>
                <div class="navbar-mobile-menu">
                    {NAV_LINKS
                        .iter()
                        .enumerate()
                        .map(|(i, link)| {
                            view! {
                                <a
                                    href=format!("#{}", link.anchor)
                                    class="navbar-mobile-link"
                                    style=format!("animation-delay: {:.2}s", i as f64 * 0.08)
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button class="btn btn-primary" on:click=move |_| set_menu_open.set(false)>
                        "Shop Now"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
