//! Login page: email + password against `/log-in`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::guard;

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

/// Trim the credential inputs and require both fields.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Login form. An already-authenticated viewer is bounced to their landing
/// route, which also completes the post-login navigation once the session
/// signal updates.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_public_redirect(session, navigate);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let req = crate::net::types::LoginRequest {
                email: email_value,
                password: password_value,
            };
            match crate::net::api::login(&req).await {
                Ok(resp) => {
                    let next = SessionState::authenticated(resp.access_token, &resp.user.role);
                    crate::util::storage::store_session(
                        next.token.as_deref().unwrap_or_default(),
                        next.role.unwrap_or(crate::state::session::Role::User),
                    );
                    // The public-redirect guard navigates on this update.
                    session.set(next);
                }
                Err(_) => {
                    error.set("Failed to login. Please check your credentials.".to_owned());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Login to Bilitioo"</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="error">{move || error.get()}</p>
                </Show>
                <div class="form-group">
                    <label>"Email"</label>
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Password"</label>
                    <input
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn" disabled=move || busy.get()>
                    "Login"
                </button>
                <p class="auth-form__switch">
                    "Don't have an account? "
                    <a href="/register">"Register here"</a>
                </p>
            </form>
        </div>
    }
}
