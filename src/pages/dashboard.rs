//! User dashboard: ticket search and purchase.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route for regular users. It loads the
//! city list once on mount for the route selects, then searches and reserves
//! on demand. A successful reservation navigates to the reservations page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::support_widget::SupportWidget;
use crate::net::types::{City, SearchTicketsRequest, TicketSummary, VehicleType, city_value_for_index};
use crate::state::session::SessionState;
use crate::util::format::locale_datetime;
use crate::util::guard;

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Build the search request from the raw form values. Selects submit
/// one-based city list positions; the date input submits `YYYY-MM-DD`.
fn build_search_request(
    origin: &str,
    destination: &str,
    departure_date: &str,
    vehicle: &str,
) -> Result<SearchTicketsRequest, &'static str> {
    let origin_city_id: i64 = origin.parse().map_err(|_| "Select an origin city.")?;
    let destination_city_id: i64 = destination
        .parse()
        .map_err(|_| "Select a destination city.")?;
    if departure_date.is_empty() {
        return Err("Pick a departure date.");
    }
    let vehicle_type = VehicleType::from_wire(vehicle).unwrap_or(VehicleType::Bus);
    Ok(SearchTicketsRequest {
        origin_city_id,
        destination_city_id,
        departure_date: departure_date.to_owned(),
        vehicle_type,
    })
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_protected_redirect(session, navigate.clone());

    let cities = RwSignal::new(Vec::<City>::new());
    let tickets = RwSignal::new(Vec::<TicketSummary>::new());
    let error = RwSignal::new(String::new());

    let origin = RwSignal::new(String::new());
    let destination = RwSignal::new(String::new());
    let departure_date = RwSignal::new(String::new());
    let vehicle = RwSignal::new(VehicleType::Bus.as_wire().to_owned());

    // City inventory for the route selects, fetched once on mount.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().token.unwrap_or_default();
            match crate::net::api::fetch_cities(&token).await {
                Ok(list) => cities.set(list),
                Err(_) => error.set("Could not fetch cities.".to_owned()),
            }
        });
    }

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        let req = match build_search_request(
            &origin.get(),
            &destination.get(),
            &departure_date.get(),
            &vehicle.get(),
        ) {
            Ok(req) => req,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().token.unwrap_or_default();
            match crate::net::api::search_tickets(&token, &req).await {
                Ok(found) => tickets.set(found),
                Err(_) => {
                    error.set("No tickets found for the selected route.".to_owned());
                    tickets.set(Vec::new());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
        }
    };

    // A successful reservation flips this; the effect below completes the
    // navigation so the buy callback stays free of router handles.
    let reserved = RwSignal::new(false);
    let reserve_navigate = navigate.clone();
    Effect::new(move || {
        if reserved.get() {
            reserved.set(false);
            reserve_navigate("/reservations", leptos_router::NavigateOptions::default());
        }
    });

    let on_buy = Callback::new(move |ticket_id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().token.unwrap_or_default();
            match crate::net::api::reserve_tickets(&token, &[ticket_id]).await {
                Ok(()) => reserved.set(true),
                Err(_) => error.set(
                    "Could not reserve the ticket. It may have already been booked.".to_owned(),
                ),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ticket_id;
        }
    });

    let logout_navigate = navigate.clone();
    let on_logout = move |_| {
        crate::util::storage::clear_session();
        session.set(SessionState::default());
        logout_navigate("/login", leptos_router::NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h2>"User Dashboard"</h2>
                <div class="dashboard-page__nav">
                    <a href="/reports" class="nav-link">"All Reports"</a>
                    <a href="/reservations" class="nav-link">"My Reservations"</a>
                    <a href="/profile" class="nav-link" title="My Profile">"Profile"</a>
                    <button class="btn btn--logout" on:click=on_logout>"Logout"</button>
                </div>
            </header>

            <div class="ticket-search">
                <h3>"Find Your Ticket"</h3>
                <form class="ticket-search__form" on:submit=on_search>
                    <div class="form-row">
                        <select
                            required
                            prop:value=move || origin.get()
                            on:change=move |ev| origin.set(event_target_value(&ev))
                        >
                            <option value="">"From"</option>
                            {move || {
                                cities
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, city)| {
                                        view! {
                                            <option value=city_value_for_index(index)
                                                .to_string()>{city.province}</option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                        <select
                            required
                            prop:value=move || destination.get()
                            on:change=move |ev| destination.set(event_target_value(&ev))
                        >
                            <option value="">"To"</option>
                            {move || {
                                cities
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, city)| {
                                        view! {
                                            <option value=city_value_for_index(index)
                                                .to_string()>{city.province}</option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                        <input
                            type="date"
                            required
                            prop:value=move || departure_date.get()
                            on:change=move |ev| departure_date.set(event_target_value(&ev))
                        />
                        <select
                            prop:value=move || vehicle.get()
                            on:change=move |ev| vehicle.set(event_target_value(&ev))
                        >
                            {VehicleType::ALL
                                .into_iter()
                                .map(|v| view! { <option value=v.as_wire()>{v.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                    <button type="submit" class="btn">"Search"</button>
                </form>
            </div>

            <Show when=move || !error.get().is_empty()>
                <p class="error">{move || error.get()}</p>
            </Show>

            <div class="ticket-results">
                <Show when=move || !tickets.get().is_empty()>
                    <div class="ticket-results__list">
                        {move || {
                            tickets
                                .get()
                                .into_iter()
                                .map(|ticket| {
                                    let details_href = format!("/tickets/{}", ticket.id);
                                    let ticket_id = ticket.id;
                                    view! {
                                        <div class="ticket-card">
                                            <p>
                                                <strong>"From: "</strong>
                                                {ticket.origin_province}
                                                <strong>" To: "</strong>
                                                {ticket.destination_province}
                                            </p>
                                            <p>
                                                <strong>"Departure: "</strong>
                                                {locale_datetime(&ticket.departure_time)}
                                            </p>
                                            <p><strong>"Price: "</strong>{ticket.amount}</p>
                                            <div class="ticket-card__actions">
                                                <a href=details_href class="btn btn--secondary">
                                                    "Details"
                                                </a>
                                                <button
                                                    class="btn"
                                                    on:click=move |_| on_buy.run(ticket_id)
                                                >
                                                    "Buy Ticket"
                                                </button>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </div>

            <SupportWidget/>
        </div>
    }
}
