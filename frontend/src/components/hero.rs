//! Hero section component

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1 class="gradient-text">{APP_NAME}</h1>
            <p class="subtitle">
                "Download Instagram posts, stories, and reels from public accounts instantly. "
                "Fast, secure, and completely free."
            </p>
        </div>
    }
}
