//! Floating support widget: latest report view + new report form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the user dashboard. Opening fetches the viewer's reports and
//! shows the newest one, falling back to the submission form when none
//! exist. Submission posts a report and refreshes the view.

use leptos::prelude::*;

use crate::net::types::{Report, ReportRequest, ReportType};
use crate::state::session::SessionState;

#[cfg(test)]
#[path = "support_widget_test.rs"]
mod support_widget_test;

/// Validate the report form: a numeric reservation id and non-blank details.
fn validate_report_input(
    reservation_id: &str,
    request_text: &str,
) -> Result<(i64, String), &'static str> {
    let reservation_id = reservation_id
        .trim()
        .parse()
        .map_err(|_| "Enter the reservation ID first.")?;
    let request_text = request_text.trim();
    if request_text.is_empty() {
        return Err("Describe the problem first.");
    }
    Ok((reservation_id, request_text.to_owned()))
}

#[component]
pub fn SupportWidget() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let open = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let latest_report = RwSignal::new(None::<Report>);
    let show_form = RwSignal::new(false);

    let reservation_id = RwSignal::new(String::new());
    let request_type = RwSignal::new(ReportType::Etc);
    let request_text = RwSignal::new(String::new());
    // (is_success, text) under the form heading.
    let message = RwSignal::new(None::<(bool, String)>);

    let fetch_latest = move || {
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().token.unwrap_or_default();
            match crate::net::api::fetch_reports(&token).await {
                Ok(list) if !list.is_empty() => {
                    latest_report.set(list.into_iter().next());
                    show_form.set(false);
                }
                // No reports yet, or the fetch failed: go straight to the form.
                _ => {
                    latest_report.set(None);
                    show_form.set(true);
                }
            }
            loading.set(false);
        });
    };

    let toggle = move |_| {
        let next_open = !open.get();
        open.set(next_open);
        if next_open {
            fetch_latest();
        } else {
            show_form.set(false);
            latest_report.set(None);
            message.set(None);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        message.set(None);
        let (reservation, text) =
            match validate_report_input(&reservation_id.get(), &request_text.get()) {
                Ok(values) => values,
                Err(error) => {
                    message.set(Some((false, error.to_owned())));
                    return;
                }
            };

        let req = ReportRequest {
            reservation_id: reservation,
            request_type: request_type.get_untracked(),
            request_text: text,
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().token.unwrap_or_default();
            match crate::net::api::submit_report(&token, &req).await {
                Ok(()) => {
                    message.set(Some((
                        true,
                        "Your report has been submitted successfully.".to_owned(),
                    )));
                    fetch_latest();
                }
                Err(_) => message.set(Some((
                    false,
                    "Failed to submit report. Please check the Reservation ID.".to_owned(),
                ))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
        }
    };

    view! {
        <button class="support-fab" title="Support" on:click=toggle>"?"</button>

        <Show when=move || open.get()>
            <div class="support-panel">
                <div class="support-panel__header">
                    <h3>"Support Center"</h3>
                    <button class="support-panel__close" on:click=toggle>"×"</button>
                </div>
                <div class="support-panel__content">
                    <Show when=move || loading.get()>
                        <p>"Loading..."</p>
                    </Show>
                    <Show when=move || !loading.get() && show_form.get()>
                        <form on:submit=on_submit>
                            <h4>"Submit a New Report"</h4>
                            {move || {
                                message
                                    .get()
                                    .map(|(is_success, text)| {
                                        let class = if is_success { "success" } else { "error" };
                                        view! { <p class=class>{text}</p> }
                                    })
                            }}
                            <div class="form-group">
                                <label>"Reservation ID"</label>
                                <input
                                    type="number"
                                    required
                                    prop:value=move || reservation_id.get()
                                    on:input=move |ev| reservation_id.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label>"Report Type"</label>
                                <select
                                    prop:value=move || request_type.get().as_wire()
                                    on:change=move |ev| {
                                        if let Some(chosen) = ReportType::from_wire(
                                            &event_target_value(&ev),
                                        ) {
                                            request_type.set(chosen);
                                        }
                                    }
                                >
                                    {ReportType::ALL
                                        .into_iter()
                                        .map(|r| {
                                            view! { <option value=r.as_wire()>{r.label()}</option> }
                                        })
                                        .collect::<Vec<_>>()}
                                </select>
                            </div>
                            <div class="form-group">
                                <label>"Details"</label>
                                <textarea
                                    required
                                    prop:value=move || request_text.get()
                                    on:input=move |ev| request_text.set(event_target_value(&ev))
                                ></textarea>
                            </div>
                            <button type="submit" class="btn">"Submit"</button>
                            <Show when=move || latest_report.get().is_some()>
                                <button
                                    type="button"
                                    class="btn btn--secondary"
                                    on:click=move |_| show_form.set(false)
                                >
                                    "Back"
                                </button>
                            </Show>
                        </form>
                    </Show>
                    <Show when=move || {
                        !loading.get() && !show_form.get() && latest_report.get().is_some()
                    }>
                        {move || {
                            latest_report
                                .get()
                                .map(|report| {
                                    view! {
                                        <div class="support-panel__report">
                                            <h4>"Your Latest Report"</h4>
                                            <p>
                                                <strong>"Your Request: "</strong>
                                                {report.request_text}
                                            </p>
                                            <div class="report-response">
                                                <strong>"Admin Response:"</strong>
                                                <p>
                                                    {report
                                                        .response_text
                                                        .unwrap_or_else(|| {
                                                            crate::pages::reports::AWAITING_RESPONSE.to_owned()
                                                        })}
                                                </p>
                                            </div>
                                            <button
                                                class="btn"
                                                on:click=move |_| show_form.set(true)
                                            >
                                                "Create a New Report"
                                            </button>
                                        </div>
                                    }
                                })
                        }}
                    </Show>
                </div>
            </div>
        </Show>
    }
}
