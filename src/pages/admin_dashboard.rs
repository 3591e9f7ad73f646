//! Admin landing page with links to the oversight screens.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::guard;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_protected_redirect(session, navigate.clone());

    let on_logout = move |_| {
        crate::util::storage::clear_session();
        session.set(SessionState::default());
        navigate("/login", leptos_router::NavigateOptions::default());
    };

    view! {
        <div class="admin-dashboard">
            <header class="dashboard-page__header">
                <h2>"Admin Dashboard"</h2>
                <button class="btn btn--logout" on:click=on_logout>"Logout"</button>
            </header>
            <div class="admin-menu">
                <a href="/admin/reports" class="admin-menu__item">
                    <h3>"Manage Reports"</h3>
                    <p>"View and respond to user reports."</p>
                </a>
                <a href="/admin/tickets" class="admin-menu__item">
                    <h3>"View All Tickets"</h3>
                    <p>"Browse all tickets available in the system."</p>
                </a>
                <a href="/admin/user-tickets" class="admin-menu__item">
                    <h3>"View User Tickets"</h3>
                    <p>"Look up a user's completed and pending tickets."</p>
                </a>
            </div>
        </div>
    }
}
