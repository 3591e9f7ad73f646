//! Public landing page with login/register links.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Welcome to Bilitioo"</h1>
            <p>"Your one-stop solution for ticket reservations."</p>
            <div class="home-page__links">
                <a href="/login" class="btn">"Login"</a>
                <a href="/register" class="btn btn--secondary">"Register"</a>
            </div>
        </div>
    }
}
