//! Modal for completing a reservation payment.

use leptos::prelude::*;

use crate::net::types::{PaymentType, Reservation};

#[cfg(test)]
#[path = "payment_modal_test.rs"]
mod payment_modal_test;

/// Whether confirmation must be blocked: paying from the wallet with a
/// balance below the reservation amount. Every other method is accepted
/// here and settled server-side.
fn wallet_insufficient(method: PaymentType, wallet_balance: i64, amount: i64) -> bool {
    method == PaymentType::Wallet && wallet_balance < amount
}

/// Payment modal showing the reservation, the wallet balance, and a payment
/// method select. Confirm passes the chosen method back to the caller.
#[component]
pub fn PaymentModal(
    reservation: Reservation,
    wallet_balance: i64,
    on_close: Callback<()>,
    on_confirm: Callback<PaymentType>,
) -> impl IntoView {
    let method = RwSignal::new(PaymentType::Wallet);
    let amount = reservation.amount;

    let blocked = move || wallet_insufficient(method.get(), wallet_balance, amount);

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <h2>"Complete Your Payment"</h2>

                <div class="payment-details">
                    <p><strong>"Reservation ID: "</strong>{reservation.id}</p>
                    <p><strong>"Total Amount: "</strong>{reservation.amount}</p>
                    <p><strong>"Your Wallet Balance: "</strong>{wallet_balance}</p>
                </div>

                <div class="form-group">
                    <label>"Select Payment Method:"</label>
                    <select
                        prop:value=move || method.get().as_wire()
                        on:change=move |ev| {
                            if let Some(chosen) = PaymentType::from_wire(&event_target_value(&ev)) {
                                method.set(chosen);
                            }
                        }
                    >
                        {PaymentType::ALL
                            .into_iter()
                            .map(|p| view! { <option value=p.as_wire()>{p.as_wire()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>

                <Show when=blocked>
                    <p class="error">"Your wallet balance is not sufficient."</p>
                </Show>

                <div class="modal-actions">
                    <button class="btn btn--secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn"
                        disabled=blocked
                        on:click=move |_| on_confirm.run(method.get())
                    >
                        "Confirm Payment"
                    </button>
                </div>
            </div>
        </div>
    }
}
