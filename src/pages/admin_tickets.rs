//! Admin table of every ticket in the system.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::AdminTicket;
use crate::state::session::SessionState;
use crate::util::format::{locale_datetime, status_class};
use crate::util::guard;

#[component]
pub fn AdminTicketsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_protected_redirect(session, navigate);

    let tickets = RwSignal::new(Vec::<AdminTicket>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().token.unwrap_or_default();
            if let Ok(list) = crate::net::api::fetch_admin_tickets(&token).await {
                tickets.set(list);
            }
            loading.set(false);
        });
    }

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h2>"All System Tickets"</h2>
                <a href="/admin/dashboard" class="btn btn--secondary">"Back to Dashboard"</a>
            </header>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="container">"Loading tickets..."</div> }
            >
                <div class="admin-table-wrap">
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Ticket ID"</th>
                                <th>"Route ID"</th>
                                <th>"Vehicle ID"</th>
                                <th>"Amount"</th>
                                <th>"Departure Time"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                tickets
                                    .get()
                                    .into_iter()
                                    .map(|ticket| {
                                        view! {
                                            <tr>
                                                <td>{ticket.id}</td>
                                                <td>{ticket.route_id}</td>
                                                <td>{ticket.vehicle_id}</td>
                                                <td>{ticket.amount}</td>
                                                <td>{locale_datetime(&ticket.departure_time)}</td>
                                                <td>
                                                    <span class=status_class(
                                                        &ticket.status,
                                                    )>{ticket.status.clone()}</span>
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
        </div>
    }
}
