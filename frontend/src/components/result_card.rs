//! Summary card for finished downloads.

use leptos::*;

use crate::{ContentKind, DownloadResult, Icon};

#[component]
pub fn ResultCard(result: DownloadResult) -> impl IntoView {
    let DownloadResult {
        content_kind,
        download_target,
        thumbnail,
        ..
    } = result;
    let icon = content_kind.icon();

    view! {
        <div class="card result-card">
            <div class="result-info">
                <img class="result-thumbnail" src=thumbnail alt="Preview"/>
                <span class="result-icon" role="img" aria-label=icon.label()>{icon.glyph()}</span>
                <div>
                    <p class="result-title">"Content Ready"</p>
                    <p class="result-meta">{format!("{} • Instagram", content_kind.label())}</p>
                </div>
            </div>
            <a class="glass-button" href=download_target download="">
                <span aria-hidden="true">{Icon::Download.glyph()}</span>
                " Download"
            </a>
        </div>
    }
}

/// Static panel listing the kinds of content the downloader accepts.
#[component]
pub fn SupportedContent() -> impl IntoView {
    view! {
        <div class="card supported-card">
            <h3 class="supported-title">
                <span aria-hidden="true">{Icon::Instagram.glyph()}</span>
                " Supported Content Types"
            </h3>
            <div class="supported-grid">
                {ContentKind::SUPPORTED
                    .iter()
                    .map(|kind| {
                        view! {
                            <div class="supported-item">
                                <span class="supported-icon" aria-hidden="true">{kind.icon().glyph()}</span>
                                <div>
                                    <p class="supported-name">{kind.plural()}</p>
                                    <p class="supported-blurb">{kind.blurb()}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
