//! Modal for overriding the reservation status behind a report.

use leptos::prelude::*;

use crate::net::types::{Report, ReservationStatus};

/// Status-override modal. Submits `(reservation_id, chosen_status)`; the
/// owning page issues the admin manage request.
#[component]
pub fn ManageTicketModal(
    report: Report,
    on_close: Callback<()>,
    on_submit: Callback<(i64, ReservationStatus)>,
) -> impl IntoView {
    let status = RwSignal::new(ReservationStatus::Reserved);
    let reservation_id = report.reservation_id;

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <h2>{format!("Manage Reservation #{reservation_id}")}</h2>
                <div class="report-details">
                    <p><strong>"User's Request:"</strong></p>
                    <p class="report-details__request">{report.request_text}</p>
                </div>
                <div class="form-group">
                    <label>"Set New Reservation Status:"</label>
                    <select
                        prop:value=move || status.get().as_wire()
                        on:change=move |ev| {
                            if let Some(chosen) = ReservationStatus::from_wire(
                                &event_target_value(&ev),
                            ) {
                                status.set(chosen);
                            }
                        }
                    >
                        {ReservationStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_wire()>{s.as_wire()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
                <div class="modal-actions">
                    <button class="btn btn--secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn"
                        on:click=move |_| on_submit.run((reservation_id, status.get()))
                    >
                        "Confirm Status Change"
                    </button>
                </div>
            </div>
        </div>
    }
}
