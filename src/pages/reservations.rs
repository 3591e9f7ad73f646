//! Reservation management: pay for holds, cancel reserved tickets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the reservation list together with the profile (for the wallet
//! balance shown in the payment modal) and refetches both after every
//! successful write.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::cancel_modal::CancelModal;
use crate::components::payment_modal::PaymentModal;
use crate::net::types::{PaymentRequest, PaymentType, Penalty, Reservation, ReservationStatus};
use crate::state::session::SessionState;
use crate::util::format::status_class;
use crate::util::guard;

#[component]
pub fn ReservationsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_protected_redirect(session, navigate);

    let reservations = RwSignal::new(Vec::<Reservation>::new());
    let wallet_balance = RwSignal::new(0_i64);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    // Payment modal state.
    let payment_target = RwSignal::new(None::<Reservation>);
    // Cancel modal state: the reservation plus its penalty preview.
    let cancel_target = RwSignal::new(None::<(Reservation, Penalty)>);

    let load = move || {
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().token.unwrap_or_default();
            let (reservation_result, profile_result) = futures::future::join(
                crate::net::api::fetch_reservations(&token),
                crate::net::api::fetch_profile(&token),
            )
            .await;
            match (reservation_result, profile_result) {
                (Ok(list), Ok(profile)) => {
                    reservations.set(list);
                    wallet_balance.set(profile.wallet);
                }
                _ => error.set("Could not fetch data.".to_owned()),
            }
            loading.set(false);
        });
    };
    load();

    let on_payment_close = Callback::new(move |()| payment_target.set(None));
    let on_payment_confirm = Callback::new(move |method: PaymentType| {
        let Some(reservation) = payment_target.get_untracked() else {
            return;
        };
        let req = PaymentRequest::completed(reservation.payment_id, method);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().token.unwrap_or_default();
            match crate::net::api::submit_payment(&token, &req).await {
                Ok(()) => {
                    payment_target.set(None);
                    load();
                }
                Err(_) => error.set("Payment failed. Please try again.".to_owned()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
        }
    });

    let on_cancel_open = Callback::new(move |reservation: Reservation| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().token.unwrap_or_default();
            match crate::net::api::fetch_ticket_penalties(&token, reservation.ticket_id).await {
                Ok(penalty) => cancel_target.set(Some((reservation, penalty))),
                Err(_) => error.set("Could not fetch penalty information.".to_owned()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = reservation;
        }
    });
    let on_cancel_close = Callback::new(move |()| cancel_target.set(None));
    let on_cancel_confirm = Callback::new(move |()| {
        let Some((reservation, _)) = cancel_target.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().token.unwrap_or_default();
            match crate::net::api::cancel_reservation(&token, reservation.ticket_id).await {
                Ok(()) => {
                    cancel_target.set(None);
                    load();
                }
                Err(_) => error.set("Failed to cancel reservation.".to_owned()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = reservation;
        }
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h2>"My Reservations"</h2>
                <a href="/dashboard" class="btn btn--secondary">"Back to Dashboard"</a>
            </header>

            <Show when=move || !error.get().is_empty()>
                <p class="error">{move || error.get()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="container">"Loading..."</div> }
            >
                <div class="reservation-list">
                    <Show
                        when=move || !reservations.get().is_empty()
                        fallback=|| view! { <p>"You have no reservations."</p> }
                    >
                        {move || {
                            reservations
                                .get()
                                .into_iter()
                                .map(|reservation| {
                                    let pay_candidate = reservation.clone();
                                    let cancel_candidate = reservation.clone();
                                    let reserving = reservation.status
                                        == ReservationStatus::Reserving.as_wire();
                                    let reserved = reservation.status
                                        == ReservationStatus::Reserved.as_wire();
                                    view! {
                                        <div class="ticket-card">
                                            <p><strong>"Reservation ID: "</strong>{reservation.id}</p>
                                            <p><strong>"Amount: "</strong>{reservation.amount}</p>
                                            <p>
                                                <strong>"Status: "</strong>
                                                <span class=status_class(
                                                    &reservation.status,
                                                )>{reservation.status.clone()}</span>
                                            </p>
                                            <div class="ticket-card__actions">
                                                <Show when=move || reserving>
                                                    {
                                                        let pay_candidate = pay_candidate.clone();
                                                        view! {
                                                            <button
                                                                class="btn"
                                                                on:click=move |_| payment_target
                                                                    .set(Some(pay_candidate.clone()))
                                                            >
                                                                "Pay Now"
                                                            </button>
                                                        }
                                                    }
                                                </Show>
                                                <Show when=move || reserved>
                                                    {
                                                        let cancel_candidate = cancel_candidate.clone();
                                                        view! {
                                                            <button
                                                                class="btn btn--logout"
                                                                on:click=move |_| on_cancel_open
                                                                    .run(cancel_candidate.clone())
                                                            >
                                                                "Cancel Reservation"
                                                            </button>
                                                        }
                                                    }
                                                </Show>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </Show>
                </div>
            </Show>

            <Show when=move || payment_target.get().is_some()>
                {move || {
                    payment_target
                        .get()
                        .map(|reservation| {
                            view! {
                                <PaymentModal
                                    reservation=reservation
                                    wallet_balance=wallet_balance.get()
                                    on_close=on_payment_close
                                    on_confirm=on_payment_confirm
                                />
                            }
                        })
                }}
            </Show>
            <Show when=move || cancel_target.get().is_some()>
                {move || {
                    cancel_target
                        .get()
                        .map(|(_, penalty)| {
                            view! {
                                <CancelModal
                                    penalty=penalty
                                    on_close=on_cancel_close
                                    on_confirm=on_cancel_confirm
                                />
                            }
                        })
                }}
            </Show>
        </div>
    }
}
