//! URL submission widget with simulated download.
//!
//! Owns the [`DownloadState`] signal and hands it to [`run_download`] on
//! every submit. Progress, the busy button and the result card are all
//! derived from that one signal.

use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::components::{ProgressBar, ResultCard, SupportedContent, Toasts};
use crate::services::{IntervalSchedule, SimulatedFetcher};
use crate::workflow::{run_download, DownloadState, WorkflowHost};
use crate::{Icon, Notification};

/// Signal-backed host for the workflow.
#[derive(Clone, Copy)]
struct SignalHost {
    state: RwSignal<DownloadState>,
    toasts: Toasts,
}

impl WorkflowHost for SignalHost {
    fn with_state<R>(&self, f: impl FnOnce(&mut DownloadState) -> R) -> Option<R> {
        self.state.try_update(f)
    }

    fn notify(&self, notification: Notification) {
        self.toasts.push(notification);
    }
}

#[component]
pub fn DownloadForm() -> impl IntoView {
    let state = create_rw_signal(DownloadState::default());
    let host = SignalHost {
        state,
        toasts: Toasts::expect(),
    };

    let is_busy = move || state.with(DownloadState::is_busy);
    let progress = Signal::derive(move || state.with(DownloadState::progress));

    let on_input = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        state.update(|s| s.set_input(input.value()));
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            run_download(&host, &SimulatedFetcher::default(), &IntervalSchedule::default()).await;
        });
    };

    view! {
        <div class="download-wrapper">
            <div class="card download-card">
                <div class="card-header">
                    <div class="brand-badge" aria-hidden="true">{Icon::Instagram.glyph()}</div>
                    <h2 class="card-title gradient-text">"Instagram Downloader"</h2>
                    <p class="card-description">
                        "Download posts, stories, and reels from public Instagram accounts"
                    </p>
                </div>

                <form class="download-form" on:submit=on_submit>
                    <input
                        type="url"
                        class="url-input"
                        placeholder="Paste Instagram URL here..."
                        required=true
                        prop:value=move || state.with(|s| s.input().to_string())
                        on:input=on_input
                    />

                    <Show
                        when=is_busy
                        fallback=|| view! { }
                    >
                        <ProgressBar value=progress/>
                    </Show>

                    <button type="submit" class="download-button" disabled=is_busy>
                        {move || if is_busy() {
                            view! {
                                <span class="spinner" aria-hidden="true"></span>
                                "Processing..."
                            }.into_view()
                        } else {
                            view! {
                                <span aria-hidden="true">{Icon::Download.glyph()}</span>
                                " Download Content"
                            }.into_view()
                        }}
                    </button>
                </form>

                {move || state.with(|s| s.result().cloned()).map(|result| view! { <ResultCard result=result/> })}
            </div>

            <SupportedContent/>
        </div>
    }
}
