//! Landing page. Onboarding and project creation live in a separate
//! surface; this page only routes existing projects into the editor.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home">
            <h1 class="home__title">"Shipwright"</h1>
            <p class="home__tagline">
                "Describe your one-page site, then refine it with chat, "
                "code, and instant previews at /edit/{your-site}."
            </p>
        </main>
    }
}
