//! InstaSave It - Frontend Rust/Leptos Application
//!
//! A WebAssembly landing page for an Instagram downloader. The download
//! itself is simulated: a progress bar fills, then a result card links to a
//! placeholder.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Index                                                       │
//! │  ├── Hero (title, tagline)                                   │
//! │  ├── DownloadForm (input, progress, result card)             │
//! │  ├── Features (static grid)                                  │
//! │  └── Footer                                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Toaster (one-shot notifications)                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (DownloadResult, Notification, etc.)
//! - [`workflow`] - Download state and the submit-to-settle run
//! - [`components`] - UI components (Hero, DownloadForm, Toaster, etc.)
//! - [`services`] - Fetcher, progress timer and toast queue

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod workflow;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Content
    ContentKind, DownloadResult,
    // Notifications
    Notification, Severity,
    // Icons
    Icon,
    // Errors
    DownloadError, FetchResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    Toasts::provide();

    view! {
        <Title text=APP_NAME/>
        <Meta
            name="description"
            content="Download Instagram posts, stories, and reels from public accounts instantly."
        />

        <Router>
            <main>
                <Routes>
                    <Route path="/" view=Index/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
        </Router>

        <Toaster/>
    }
}

#[component]
fn Index() -> impl IntoView {
    view! {
        <section class="hero-section">
            <div class="container">
                <Hero/>
                <DownloadForm/>
            </div>
        </section>

        <div class="container">
            <Features/>
        </div>

        <Footer/>
    }
}
