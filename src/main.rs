// Indra Sakti Toys landing page — Leptos 0.8, client-side rendered.

mod content;
mod icons;
mod motion;
mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Navbar />
        <main>
            <Hero />
            <Categories />
            <Featured />
            <About />
            <Location />
        </main>
        <Footer />
    }
}
