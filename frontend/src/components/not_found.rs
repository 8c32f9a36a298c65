//! Fallback page for unknown routes

use leptos::*;
use leptos_meta::Title;
use leptos_router::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page not found"/>
        <div class="not-found">
            <h1>"404"</h1>
            <p class="subtitle">"Oops! Page not found"</p>
            <A href="/" class="footer-link">"Return to Home"</A>
        </div>
    }
}
