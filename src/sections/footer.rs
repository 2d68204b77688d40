use leptos::prelude::*;

use crate::icons::{Glyph, Icon};

#[component]
pub fn Footer() -> impl IntoView {
    // Placeholder destinations; inert anchors by design of the page.
    let socials = [Glyph::Facebook, Glyph::Instagram, Glyph::Twitter];

    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="footer-logo">
                    <div class="footer-logo-icon">
                        <Icon glyph=Glyph::ShoppingBag size=18 />
                    </div>
                    <span class="footer-logo-text">"Indra Sakti Toys"</span>
                </div>

                <div class="footer-socials">
                    {socials
                        .into_iter()
                        .map(|glyph| {
                            view! {
                                <a href="#" class="footer-social-icon">
                                    <Icon glyph=glyph size=18 />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <p class="footer-copy">"© 2026 Indra Sakti Toys. All rights reserved."</p>
            </div>
        </footer>
    }
}
