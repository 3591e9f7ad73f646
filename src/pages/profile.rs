//! Profile screen: editable personal fields plus read-only account info.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::{City, Profile, ProfileUpdateRequest, city_value_for_index};
use crate::state::session::SessionState;
use crate::util::format::{locale_date, yes_no};
use crate::util::guard;

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

/// Assemble the update payload from the form fields. The password is
/// attached only when the user typed a new one; an unselected city submits
/// as zero, matching what the form previously held.
#[allow(clippy::too_many_arguments)]
fn build_profile_update(
    first_name: &str,
    last_name: &str,
    national_code: &str,
    email: &str,
    phone_number: &str,
    city_value: &str,
    pic_dir: &str,
    password: &str,
) -> ProfileUpdateRequest {
    ProfileUpdateRequest {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        national_code: national_code.to_owned(),
        email: email.to_owned(),
        phone_number: phone_number.to_owned(),
        city_id: city_value.parse().unwrap_or_default(),
        pic_dir: pic_dir.to_owned(),
        password: if password.is_empty() {
            None
        } else {
            Some(password.to_owned())
        },
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_protected_redirect(session, navigate);

    let cities = RwSignal::new(Vec::<City>::new());
    let account = RwSignal::new(Profile::default());
    let loading = RwSignal::new(true);
    // (is_success, text) for the status line above the form.
    let message = RwSignal::new(None::<(bool, String)>);

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let national_code = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let city_value = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().token.unwrap_or_default();
            let (profile_result, cities_result) = futures::future::join(
                crate::net::api::fetch_profile(&token),
                crate::net::api::fetch_cities(&token),
            )
            .await;
            match (profile_result, cities_result) {
                (Ok(profile), Ok(city_list)) => {
                    first_name.set(profile.first_name.clone().unwrap_or_default());
                    last_name.set(profile.last_name.clone().unwrap_or_default());
                    national_code.set(profile.national_code.clone().unwrap_or_default());
                    email.set(profile.email.clone().unwrap_or_default());
                    phone_number.set(profile.phone_number.clone().unwrap_or_default());
                    city_value.set(
                        profile
                            .city_id
                            .map(|id| id.to_string())
                            .unwrap_or_default(),
                    );
                    account.set(profile);
                    cities.set(city_list);
                }
                _ => message.set(Some((false, "Could not load profile data.".to_owned()))),
            }
            loading.set(false);
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        message.set(None);
        let req = build_profile_update(
            &first_name.get(),
            &last_name.get(),
            &national_code.get(),
            &email.get(),
            &phone_number.get(),
            &city_value.get(),
            &account.get().pic_dir.unwrap_or_default(),
            &password.get(),
        );

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().token.unwrap_or_default();
            match crate::net::api::update_profile(&token, &req).await {
                Ok(()) => message.set(Some((true, "Profile updated successfully!".to_owned()))),
                Err(_) => message.set(Some((
                    false,
                    "Failed to update profile. Please check your input.".to_owned(),
                ))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
        }
    };

    view! {
        <div class="auth-page">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="container">"Loading profile..."</div> }
            >
                <form class="auth-form profile-form" on:submit=on_submit>
                    <h2>"My Profile"</h2>
                    {move || {
                        message
                            .get()
                            .map(|(is_success, text)| {
                                let class = if is_success { "success" } else { "error" };
                                view! { <p class=class>{text}</p> }
                            })
                    }}

                    <div class="form-group">
                        <label>"First Name"</label>
                        <input
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Last Name"</label>
                        <input
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"National Code"</label>
                        <input
                            type="text"
                            prop:value=move || national_code.get()
                            on:input=move |ev| national_code.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Email"</label>
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Phone Number"</label>
                        <input
                            type="tel"
                            prop:value=move || phone_number.get()
                            on:input=move |ev| phone_number.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"City"</label>
                        <select
                            prop:value=move || city_value.get()
                            on:change=move |ev| city_value.set(event_target_value(&ev))
                        >
                            <option value="">"Select a city"</option>
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
                    </div>
                    <div class="form-group">
                        <label>"New Password (leave blank to keep current)"</label>
                        <input
                            type="password"
                            placeholder="Enter new password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="profile-form__readonly">
                        <h4>"Account Information"</h4>
                        <p><strong>"Wallet Balance: "</strong>{move || account.get().wallet}</p>
                        <p><strong>"Role: "</strong>{move || account.get().role}</p>
                        <p>
                            <strong>"Email Verified: "</strong>
                            {move || yes_no(account.get().email_verified)}
                        </p>
                        <p>
                            <strong>"Phone Verified: "</strong>
                            {move || yes_no(account.get().phone_verified)}
                        </p>
                        <p>
                            <strong>"Member Since: "</strong>
                            {move || locale_date(&account.get().created_at)}
                        </p>
                    </div>

                    <button type="submit" class="btn">"Update Profile"</button>
                    <a href="/dashboard" class="btn btn--secondary">"Back to Dashboard"</a>
                </form>
            </Show>
        </div>
    }
}
