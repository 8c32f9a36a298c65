use leptos::*;

/// Percent bar shown while a download runs.
#[component]
pub fn ProgressBar(#[prop(into)] value: Signal<u8>) -> impl IntoView {
    let percent = move || format!("{}%", value.get());

    view! {
        <div class="progress-section">
            <div class="progress-labels">
                <span>"Processing..."</span>
                <span>{percent}</span>
            </div>
            <div
                class="progress-bar"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=move || value.get().to_string()
            >
                <div class="progress-fill" style:width=percent></div>
            </div>
        </div>
    }
}
