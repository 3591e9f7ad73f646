//! Modal for answering a user's support report.

use leptos::prelude::*;

use crate::net::types::Report;

#[cfg(test)]
#[path = "answer_report_modal_test.rs"]
mod answer_report_modal_test;

/// Accept the response only when it has non-whitespace content.
fn validate_answer(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Answer modal: shows the user's request and collects the admin response.
/// Submit is a no-op while the textarea is blank.
#[component]
pub fn AnswerReportModal(
    report: Report,
    on_close: Callback<()>,
    on_submit: Callback<String>,
) -> impl IntoView {
    let response_text = RwSignal::new(String::new());

    let on_submit_click = move |_| {
        if let Some(text) = validate_answer(&response_text.get()) {
            on_submit.run(text);
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <h2>{format!("Respond to Report #{}", report.id)}</h2>
                <div class="report-details">
                    <p><strong>"User's Request:"</strong></p>
                    <p class="report-details__request">{report.request_text}</p>
                </div>
                <div class="form-group">
                    <label>"Your Response:"</label>
                    <textarea
                        rows="4"
                        placeholder="Type your response here..."
                        prop:value=move || response_text.get()
                        on:input=move |ev| response_text.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="modal-actions">
                    <button class="btn btn--secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn" on:click=on_submit_click>"Submit Answer"</button>
                </div>
            </div>
        </div>
    }
}
