//! Ticket detail screen for a single search result.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::TicketDetail;
use crate::state::session::SessionState;
use crate::util::format::locale_datetime;
use crate::util::guard;

#[cfg(test)]
#[path = "ticket_details_test.rs"]
mod ticket_details_test;

/// Parse the `:id` route segment. Non-numeric ids are treated as absent.
fn parse_ticket_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.parse().ok())
}

#[component]
pub fn TicketDetailsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_protected_redirect(session, navigate.clone());

    let params = use_params_map();
    let ticket = RwSignal::new(None::<TicketDetail>);
    let error = RwSignal::new(String::new());

    // Refetch whenever the route id changes.
    Effect::new(move || {
        let Some(ticket_id) = parse_ticket_id(params.read().get("id").as_deref()) else {
            error.set("Could not fetch ticket details.".to_owned());
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().token.unwrap_or_default();
            match crate::net::api::fetch_ticket_detail(&token, ticket_id).await {
                Ok(detail) => ticket.set(Some(detail)),
                Err(_) => error.set("Could not fetch ticket details.".to_owned()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ticket_id;
        }
    });

    // Successful purchase returns to the dashboard; the effect handles the
    // navigation once the flag flips.
    let reserved = RwSignal::new(false);
    let reserve_navigate = navigate.clone();
    Effect::new(move || {
        if reserved.get() {
            reserved.set(false);
            reserve_navigate("/dashboard", leptos_router::NavigateOptions::default());
        }
    });

    let on_buy = move |_| {
        let Some(ticket_id) = ticket.get_untracked().map(|t| t.id) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().token.unwrap_or_default();
            match crate::net::api::reserve_tickets(&token, &[ticket_id]).await {
                Ok(()) => reserved.set(true),
                Err(_) => error.set("Failed to reserve ticket.".to_owned()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ticket_id;
        }
    };

    let on_back = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.history().map(|h| h.back());
            }
        }
    };

    view! {
        <div class="ticket-details-page">
            <Show
                when=move || error.get().is_empty()
                fallback=move || view! { <div class="container error">{move || error.get()}</div> }
            >
                <Show
                    when=move || ticket.get().is_some()
                    fallback=|| view! { <div class="container">"Loading..."</div> }
                >
                    <h2>"Ticket Details"</h2>
                    {move || {
                        ticket
                            .get()
                            .map(|detail| {
                                view! {
                                    <div class="ticket-details-card">
                                        <p><strong>"From: "</strong>{detail.origin}</p>
                                        <p><strong>"To: "</strong>{detail.destination}</p>
                                        <p>
                                            <strong>"Departure: "</strong>
                                            {locale_datetime(&detail.departure_time)}
                                        </p>
                                        <p>
                                            <strong>"Arrival: "</strong>
                                            {locale_datetime(&detail.arrival_time)}
                                        </p>
                                        <p><strong>"Price: "</strong>{detail.amount}</p>
                                        <p><strong>"Vehicle: "</strong>{detail.vehicle_type}</p>
                                        <p><strong>"Status: "</strong>{detail.status}</p>
                                    </div>
                                }
                            })
                    }}
                    <div class="ticket-card__actions">
                        <button class="btn" on:click=on_buy>"Buy Now"</button>
                        <button class="btn btn--secondary" on:click=on_back>"Go Back"</button>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
