//! Confirmation modal for cancelling a reserved ticket.

use leptos::prelude::*;

use crate::net::types::Penalty;

/// Shows the server-computed penalty policy before the caller commits the
/// cancellation. The percentages are displayed as received; nothing is
/// computed client-side.
#[component]
pub fn CancelModal(
    penalty: Penalty,
    on_close: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <h2>"Confirm Cancellation"</h2>

                <div class="penalty-details">
                    <p>
                        "You are about to cancel this reservation. Please review the penalty details below:"
                    </p>
                    <p class="penalty-details__policy">
                        <strong>"Policy: "</strong>
                        {penalty.penalty_text}
                    </p>
                    <ul>
                        <li>
                            "Cancellation before 1 hour of departure: "
                            <strong>{penalty.before_day}"% penalty"</strong>
                        </li>
                        <li>
                            "Cancellation within 1 hour of departure: "
                            <strong>{penalty.after_day}"% penalty"</strong>
                        </li>
                    </ul>
                </div>

                <p class="modal-content__confirm">"Are you sure you want to proceed?"</p>

                <div class="modal-actions">
                    <button class="btn btn--secondary" on:click=move |_| on_close.run(())>
                        "Go Back"
                    </button>
                    <button class="btn btn--logout" on:click=move |_| on_confirm.run(())>
                        "Yes, Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
