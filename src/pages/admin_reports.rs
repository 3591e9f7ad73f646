//! Admin report oversight: answer reports and override reservation status.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::answer_report_modal::AnswerReportModal;
use crate::components::manage_ticket_modal::ManageTicketModal;
use crate::net::types::{AnswerReportRequest, ManageReservationRequest, Report, ReservationStatus};
use crate::pages::reports::AWAITING_RESPONSE;
use crate::state::session::SessionState;
use crate::util::guard;

#[component]
pub fn AdminReportsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_protected_redirect(session, navigate);

    let reports = RwSignal::new(Vec::<Report>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    let answer_target = RwSignal::new(None::<Report>);
    let manage_target = RwSignal::new(None::<Report>);

    let load = move || {
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().token.unwrap_or_default();
            match crate::net::api::fetch_admin_reports(&token).await {
                Ok(list) => reports.set(list),
                Err(_) => error.set("Could not fetch reports.".to_owned()),
            }
            loading.set(false);
        });
    };
    load();

    let on_answer_close = Callback::new(move |()| answer_target.set(None));
    let on_answer_submit = Callback::new(move |response_text: String| {
        let Some(report) = answer_target.get_untracked() else {
            return;
        };
        let req = AnswerReportRequest {
            id: report.id,
            response_text,
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().token.unwrap_or_default();
            match crate::net::api::answer_report(&token, &req).await {
                Ok(()) => {
                    answer_target.set(None);
                    load();
                }
                Err(_) => error.set("Failed to submit answer.".to_owned()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
        }
    });

    let on_manage_close = Callback::new(move |()| manage_target.set(None));
    let on_manage_submit = Callback::new(
        move |(reservation_id, status): (i64, ReservationStatus)| {
            let req = ManageReservationRequest {
                reservation_id,
                to_status_reservation: status,
            };
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let token = session.get_untracked().token.unwrap_or_default();
                match crate::net::api::manage_reservation(&token, &req).await {
                    Ok(()) => {
                        manage_target.set(None);
                        load();
                    }
                    Err(_) => error.set("Failed to update ticket status.".to_owned()),
                }
            });
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = req;
            }
        },
    );

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h2>"Manage User Reports"</h2>
                <a href="/admin/dashboard" class="btn btn--secondary">"Back to Dashboard"</a>
            </header>

            <Show when=move || !error.get().is_empty()>
                <p class="error">{move || error.get()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="container">"Loading reports..."</div> }
            >
                <div class="admin-table-wrap">
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Report ID"</th>
                                <th>"User ID"</th>
                                <th>"Reservation ID"</th>
                                <th>"Request"</th>
                                <th>"Response"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                reports
                                    .get()
                                    .into_iter()
                                    .map(|report| {
                                        let answer_candidate = report.clone();
                                        let manage_candidate = report.clone();
                                        view! {
                                            <tr>
                                                <td>{report.id}</td>
                                                <td>{report.user_id}</td>
                                                <td>{report.reservation_id}</td>
                                                <td class="admin-table__text">{report.request_text}</td>
                                                <td class="admin-table__text">
                                                    {report
                                                        .response_text
                                                        .unwrap_or_else(|| AWAITING_RESPONSE.to_owned())}
                                                </td>
                                                <td class="admin-table__actions">
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| answer_target
                                                            .set(Some(answer_candidate.clone()))
                                                    >
                                                        "Answer"
                                                    </button>
                                                    <button
                                                        class="btn btn--small btn--secondary"
                                                        on:click=move |_| manage_target
                                                            .set(Some(manage_candidate.clone()))
                                                    >
                                                        "Manage Ticket"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>

            <Show when=move || answer_target.get().is_some()>
                {move || {
                    answer_target
                        .get()
                        .map(|report| {
                            view! {
                                <AnswerReportModal
                                    report=report
                                    on_close=on_answer_close
                                    on_submit=on_answer_submit
                                />
                            }
                        })
                }}
            </Show>
            <Show when=move || manage_target.get().is_some()>
                {move || {
                    manage_target
                        .get()
                        .map(|report| {
                            view! {
                                <ManageTicketModal
                                    report=report
                                    on_close=on_manage_close
                                    on_submit=on_manage_submit
                                />
                            }
                        })
                }}
            </Show>
        </div>
    }
}
