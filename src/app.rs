//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{
    admin_dashboard::AdminDashboardPage, admin_reports::AdminReportsPage,
    admin_tickets::AdminTicketsPage, dashboard::DashboardPage, home::HomePage, login::LoginPage,
    profile::ProfilePage, register::RegisterPage, reports::ReportsPage,
    reservations::ReservationsPage, ticket_details::TicketDetailsPage,
    user_tickets::UserTicketsPage,
};
use crate::state::session::SessionState;
use crate::util::storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Seeds the session context from the stored credential token and sets up
/// client-side routing for the twelve screens. Unknown routes land on the
/// public home page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(storage::load_session());
    provide_context::<RwSignal<SessionState>>(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/bilitioo-client.css"/>
        <Title text="Bilitioo"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=(StaticSegment("tickets"), ParamSegment("id")) view=TicketDetailsPage/>
                <Route path=StaticSegment("reservations") view=ReservationsPage/>
                <Route path=StaticSegment("reports") view=ReportsPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=AdminDashboardPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("reports")) view=AdminReportsPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("tickets")) view=AdminTicketsPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("user-tickets")) view=UserTicketsPage/>
            </Routes>
        </Router>
    }
}
