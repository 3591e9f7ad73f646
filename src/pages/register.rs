//! Registration page posting to `/sign-in`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::RegisterRequest;
use crate::state::session::SessionState;
use crate::util::guard;

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

/// Minimum accepted password length, checked before any request fires.
const MIN_PASSWORD_LEN: usize = 8;

/// Trim the inputs and apply the client-side password length check. The
/// phone number is optional and rides along as-is.
fn validate_register_input(
    email: &str,
    phone_number: &str,
    password: &str,
) -> Result<RegisterRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter an email first.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters long.");
    }
    Ok(RegisterRequest {
        email: email.to_owned(),
        phone_number: phone_number.trim().to_owned(),
        password: password.to_owned(),
    })
}

/// Registration form. On success shows a confirmation and returns to the
/// login page after a short delay.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_public_redirect(session, navigate.clone());

    let email = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        success.set(String::new());
        let req = match validate_register_input(&email.get(), &phone_number.get(), &password.get())
        {
            Ok(req) => req,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&req).await {
                    Ok(()) => {
                        success.set(
                            "Registration successful! Please check your email to verify your account."
                                .to_owned(),
                        );
                        gloo_timers::future::sleep(std::time::Duration::from_secs(3)).await;
                        navigate("/login", leptos_router::NavigateOptions::default());
                    }
                    Err(_) => {
                        error.set(
                            "Registration failed. The email or phone number may already be in use."
                                .to_owned(),
                        );
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Create an Account"</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="error">{move || error.get()}</p>
                </Show>
                <Show when=move || !success.get().is_empty()>
                    <p class="success">{move || success.get()}</p>
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
                    <label>"Phone Number (Optional)"</label>
                    <input
                        type="tel"
                        prop:value=move || phone_number.get()
                        on:input=move |ev| phone_number.set(event_target_value(&ev))
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
                    "Register"
                </button>
                <p class="auth-form__switch">
                    "Already have an account? "
                    <a href="/login">"Login here"</a>
                </p>
            </form>
        </div>
    }
}
