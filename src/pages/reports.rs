//! List of the viewer's support reports and their admin responses.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Report;
use crate::state::session::SessionState;
use crate::util::guard;

/// Placeholder shown while a report has no admin response yet.
pub(crate) const AWAITING_RESPONSE: &str = "Waiting for response...";

#[component]
pub fn ReportsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_protected_redirect(session, navigate);

    let reports = RwSignal::new(Vec::<Report>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().token.unwrap_or_default();
            if let Ok(list) = crate::net::api::fetch_reports(&token).await {
                reports.set(list);
            }
            loading.set(false);
        });
    }

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h2>"All Support Reports"</h2>
                <a href="/dashboard" class="btn btn--secondary">"Back to Dashboard"</a>
            </header>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="container">"Loading reports..."</div> }
            >
                <div class="report-list">
                    <Show
                        when=move || !reports.get().is_empty()
                        fallback=|| view! { <p>"You have not submitted any reports."</p> }
                    >
                        {move || {
                            reports
                                .get()
                                .into_iter()
                                .map(|report| {
                                    view! {
                                        <div class="ticket-card">
                                            <p><strong>"Report ID: "</strong>{report.id}</p>
                                            <p>
                                                <strong>"Reservation ID: "</strong>
                                                {report.reservation_id}
                                            </p>
                                            <p><strong>"Your Request: "</strong>{report.request_text}</p>
                                            <div class="report-response">
                                                <strong>"Admin Response:"</strong>
                                                <p>
                                                    {report
                                                        .response_text
                                                        .unwrap_or_else(|| AWAITING_RESPONSE.to_owned())}
                                                </p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </Show>
                </div>
            </Show>
        </div>
    }
}
