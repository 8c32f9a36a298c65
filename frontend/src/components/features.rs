//! Marketing feature grid.

use leptos::*;

use crate::Icon;

/// One callout of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// Grid content, in display order.
pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: Icon::Zap,
        title: "Lightning Fast",
        description: "Download Instagram content in seconds with our optimized servers",
    },
    Feature {
        icon: Icon::Shield,
        title: "Safe & Secure",
        description: "Your privacy is protected. No data stored, direct downloads only",
    },
    Feature {
        icon: Icon::Download,
        title: "High Quality",
        description: "Get the best available quality for all posts, stories, and reels",
    },
    Feature {
        icon: Icon::Smartphone,
        title: "Mobile Friendly",
        description: "Works perfectly on all devices - desktop, tablet, and mobile",
    },
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features">
            <div class="features-header">
                <h2 class="gradient-text">"Why Choose InstaDownloader?"</h2>
                <p class="subtitle">
                    "The fastest and most reliable way to download Instagram content from public accounts"
                </p>
            </div>
            <div class="features-grid">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="card feature-card">
                                <div class="feature-icon" role="img" aria-label=feature.icon.label()>
                                    {feature.icon.glyph()}
                                </div>
                                <h3>{feature.title}</h3>
                                <p class="feature-description">{feature.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
