//! Admin lookup of one user's completed or pending tickets.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::UserTicket;
use crate::state::session::SessionState;
use crate::util::format::status_class;
use crate::util::guard;

#[cfg(test)]
#[path = "user_tickets_test.rs"]
mod user_tickets_test;

/// Parse the user-id input, requiring a positive integer.
fn validate_user_id(raw: &str) -> Result<i64, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Please enter a User ID.");
    }
    raw.parse()
        .ok()
        .filter(|id| *id > 0)
        .ok_or("Please enter a User ID.")
}

/// Heading above the result table for the active lookup.
fn results_heading(completed: bool, user_id: i64) -> String {
    let kind = if completed { "Completed Tickets" } else { "Pending Tickets" };
    format!("{kind} for User ID: {user_id}")
}

#[component]
pub fn UserTicketsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_protected_redirect(session, navigate);

    let user_id_input = RwSignal::new(String::new());
    let tickets = RwSignal::new(Vec::<UserTicket>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    // (completed, user_id) of the lookup the table currently shows.
    let active_lookup = RwSignal::new(None::<(bool, i64)>);

    let fetch = move |completed: bool| {
        let user_id = match validate_user_id(&user_id_input.get_untracked()) {
            Ok(id) => id,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        loading.set(true);
        error.set(String::new());
        tickets.set(Vec::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().token.unwrap_or_default();
            match crate::net::api::fetch_user_tickets(&token, user_id, completed).await {
                Ok(list) if !list.is_empty() => {
                    tickets.set(list);
                    active_lookup.set(Some((completed, user_id)));
                }
                Ok(_) => error.set("No tickets found for this user.".to_owned()),
                Err(_) => {
                    error.set("Could not fetch tickets. Please check the User ID.".to_owned());
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h2>"User Ticket Viewer"</h2>
                <a href="/admin/dashboard" class="btn btn--secondary">"Back to Dashboard"</a>
            </header>

            <div class="ticket-search">
                <h3>"Find User Tickets"</h3>
                <div class="form-group">
                    <label>"Enter User ID"</label>
                    <input
                        type="number"
                        placeholder="e.g., 7"
                        prop:value=move || user_id_input.get()
                        on:input=move |ev| user_id_input.set(event_target_value(&ev))
                    />
                </div>
                <div class="ticket-card__actions">
                    <button class="btn" on:click=move |_| fetch(true)>
                        "Fetch Completed Tickets"
                    </button>
                    <button class="btn btn--secondary" on:click=move |_| fetch(false)>
                        "Fetch Pending Tickets"
                    </button>
                </div>
            </div>

            <Show when=move || loading.get()>
                <p>"Loading..."</p>
            </Show>
            <Show when=move || !error.get().is_empty()>
                <p class="error">{move || error.get()}</p>
            </Show>

            <Show when=move || !tickets.get().is_empty()>
                <div class="admin-table-wrap">
                    <h3>
                        {move || {
                            active_lookup
                                .get()
                                .map(|(completed, user_id)| results_heading(completed, user_id))
                                .unwrap_or_default()
                        }}
                    </h3>
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Ticket ID"</th>
                                <th>"Route"</th>
                                <th>"Reservation Status"</th>
                                <th>"Payment Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                tickets
                                    .get()
                                    .into_iter()
                                    .map(|ticket| {
                                        let payment_status =
                                            ticket.payment_status.clone().unwrap_or_default();
                                        view! {
                                            <tr>
                                                <td>{ticket.id}</td>
                                                <td>
                                                    {format!(
                                                        "{} to {}",
                                                        ticket.province,
                                                        ticket.province_2,
                                                    )}
                                                </td>
                                                <td>
                                                    <span class=status_class(
                                                        &ticket.status,
                                                    )>{ticket.status.clone()}</span>
                                                </td>
                                                <td>
                                                    <span class=status_class(
                                                        &payment_status,
                                                    )>{payment_status.clone()}</span>
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
