//! REST helpers for the reservation service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with a bearer
//! credential header. Server-side (SSR): stubs returning an error since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<T, String>` outputs instead of panics; pages collapse
//! the strings into their static error lines, so a failed fetch degrades to
//! a message rather than a crash.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AdminTicket, AnswerReportRequest, City, LoginRequest, LoginResponse,
    ManageReservationRequest, Penalty, PaymentRequest, Profile, ProfileUpdateRequest,
    RegisterRequest, Report, ReportRequest, Reservation, ReservationRequest,
    SearchTicketsRequest, TicketDetail, TicketSummary, UserTicket,
};

/// Origin of the reservation service.
#[cfg(any(test, feature = "hydrate"))]
const API_BASE: &str = "http://localhost:3000";

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn ticket_detail_path(ticket_id: i64) -> String {
    format!("/ticket-detail/{ticket_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn ticket_penalties_path(ticket_id: i64) -> String {
    format!("/ticket-penalties/{ticket_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn penalty_path(ticket_id: i64) -> String {
    format!("/penalty/{ticket_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_tickets_path(user_id: i64, completed: bool) -> String {
    if completed {
        format!("/admin/users/{user_id}/completed-tickets")
    } else {
        format!("/admin/users/{user_id}/notcompleted-tickets")
    }
}

#[cfg(not(feature = "hydrate"))]
fn server_stub<T>() -> Result<T, String> {
    Err("not available on server".to_owned())
}

// =============================================================
// Request plumbing (hydrate only)
// =============================================================

/// GET an authenticated JSON resource.
#[cfg(feature = "hydrate")]
async fn get_authed<T: serde::de::DeserializeOwned>(
    path: &str,
    token: &str,
    what: &str,
) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(&endpoint(path))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        log::warn!("{what}: server returned {}", resp.status());
        return Err(request_failed_message(what, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// POST/PUT an authenticated JSON body, parsing the response as `T`.
#[cfg(feature = "hydrate")]
async fn send_authed<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    method: &str,
    path: &str,
    token: &str,
    body: &B,
    what: &str,
) -> Result<T, String> {
    let builder = match method {
        "PUT" => gloo_net::http::Request::put(&endpoint(path)),
        _ => gloo_net::http::Request::post(&endpoint(path)),
    };
    let resp = builder
        .header("Authorization", &bearer(token))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        log::warn!("{what}: server returned {}", resp.status());
        return Err(request_failed_message(what, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// POST/PUT an authenticated JSON body, ignoring the response body.
#[cfg(feature = "hydrate")]
async fn send_authed_unit<B: serde::Serialize>(
    method: &str,
    path: &str,
    token: &str,
    body: &B,
    what: &str,
) -> Result<(), String> {
    let builder = match method {
        "PUT" => gloo_net::http::Request::put(&endpoint(path)),
        _ => gloo_net::http::Request::post(&endpoint(path)),
    };
    let resp = builder
        .header("Authorization", &bearer(token))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        log::warn!("{what}: server returned {}", resp.status());
        return Err(request_failed_message(what, resp.status()));
    }
    Ok(())
}

// =============================================================
// Auth
// =============================================================

/// Exchange credentials for an access token via `POST /log-in`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server rejects
/// the credentials.
pub async fn login(req: &LoginRequest) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/log-in"))
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("login", resp.status()));
        }
        resp.json::<LoginResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        server_stub()
    }
}

/// Create an account via `POST /sign-in`.
///
/// # Errors
///
/// Returns an error string if the request fails, typically because the
/// email or phone number is already in use.
pub async fn register(req: &RegisterRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/sign-in"))
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("registration", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        server_stub()
    }
}

// =============================================================
// Cities & tickets
// =============================================================

/// Fetch the city list for the route selects via `GET /city`.
///
/// # Errors
///
/// Returns an error string on any request failure.
pub async fn fetch_cities(token: &str) -> Result<Vec<City>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_authed("/city", token, "city fetch").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        server_stub()
    }
}

/// Search tickets matching the filter via `POST /search-tickets`.
///
/// # Errors
///
/// Returns an error string on any request failure.
pub async fn search_tickets(
    token: &str,
    req: &SearchTicketsRequest,
) -> Result<Vec<TicketSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        send_authed("POST", "/search-tickets", token, req, "ticket search").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, req);
        server_stub()
    }
}

/// Hold the given tickets via `POST /reservation`.
///
/// # Errors
///
/// Returns an error string if the hold fails, e.g. the ticket was already
/// booked.
pub async fn reserve_tickets(token: &str, ticket_ids: &[i64]) -> Result<(), String> {
    let req = ReservationRequest {
        tickets: ticket_ids.to_vec(),
    };
    #[cfg(feature = "hydrate")]
    {
        send_authed_unit("POST", "/reservation", token, &req, "reservation").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, req);
        server_stub()
    }
}

/// Fetch one ticket record via `GET /ticket-detail/{id}`.
///
/// # Errors
///
/// Returns an error string on any request failure.
pub async fn fetch_ticket_detail(token: &str, ticket_id: i64) -> Result<TicketDetail, String> {
    #[cfg(feature = "hydrate")]
    {
        get_authed(&ticket_detail_path(ticket_id), token, "ticket detail fetch").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, ticket_id);
        server_stub()
    }
}

// =============================================================
// Reservations & payment
// =============================================================

/// Fetch the viewer's reservations via `GET /allReservation`.
///
/// # Errors
///
/// Returns an error string on any request failure.
pub async fn fetch_reservations(token: &str) -> Result<Vec<Reservation>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_authed("/allReservation", token, "reservation fetch").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        server_stub()
    }
}

/// Confirm a payment via `POST /payment`.
///
/// # Errors
///
/// Returns an error string if the payment is rejected.
pub async fn submit_payment(token: &str, req: &PaymentRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        send_authed_unit("POST", "/payment", token, req, "payment").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, req);
        server_stub()
    }
}

/// Fetch the cancellation fee preview via `GET /ticket-penalties/{ticket_id}`.
///
/// # Errors
///
/// Returns an error string on any request failure.
pub async fn fetch_ticket_penalties(token: &str, ticket_id: i64) -> Result<Penalty, String> {
    #[cfg(feature = "hydrate")]
    {
        get_authed(&ticket_penalties_path(ticket_id), token, "penalty fetch").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, ticket_id);
        server_stub()
    }
}

/// Cancel a reserved ticket via `PUT /penalty/{ticket_id}`. The penalty
/// itself is computed server-side.
///
/// # Errors
///
/// Returns an error string if the cancellation is rejected.
pub async fn cancel_reservation(token: &str, ticket_id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let empty = serde_json::json!({});
        send_authed_unit("PUT", &penalty_path(ticket_id), token, &empty, "cancellation").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, ticket_id);
        server_stub()
    }
}

// =============================================================
// Profile
// =============================================================

/// Fetch the viewer's profile via `GET /profile`.
///
/// # Errors
///
/// Returns an error string on any request failure.
pub async fn fetch_profile(token: &str) -> Result<Profile, String> {
    #[cfg(feature = "hydrate")]
    {
        get_authed("/profile", token, "profile fetch").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        server_stub()
    }
}

/// Update the viewer's profile via `PUT /profile`.
///
/// # Errors
///
/// Returns an error string if the server rejects the update.
pub async fn update_profile(token: &str, req: &ProfileUpdateRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        send_authed_unit("PUT", "/profile", token, req, "profile update").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, req);
        server_stub()
    }
}

// =============================================================
// Reports
// =============================================================

/// Fetch the viewer's support reports via `GET /reports`, newest first.
///
/// # Errors
///
/// Returns an error string on any request failure.
pub async fn fetch_reports(token: &str) -> Result<Vec<Report>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_authed("/reports", token, "report fetch").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        server_stub()
    }
}

/// Submit a new support report via `POST /report`.
///
/// # Errors
///
/// Returns an error string if the request fails, typically because the
/// reservation id does not belong to the viewer.
pub async fn submit_report(token: &str, req: &ReportRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        send_authed_unit("POST", "/report", token, req, "report submission").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, req);
        server_stub()
    }
}

// =============================================================
// Admin console
// =============================================================

/// Fetch every user report via `GET /admin/reports`.
///
/// # Errors
///
/// Returns an error string on any request failure.
pub async fn fetch_admin_reports(token: &str) -> Result<Vec<Report>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_authed("/admin/reports", token, "admin report fetch").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        server_stub()
    }
}

/// Answer a user report via `PUT /admin/reports/answer`.
///
/// # Errors
///
/// Returns an error string if the answer is rejected.
pub async fn answer_report(token: &str, req: &AnswerReportRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        send_authed_unit("PUT", "/admin/reports/answer", token, req, "report answer").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, req);
        server_stub()
    }
}

/// Override a reservation status via `PUT /admin/reports/manage`.
///
/// # Errors
///
/// Returns an error string if the override is rejected.
pub async fn manage_reservation(
    token: &str,
    req: &ManageReservationRequest,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        send_authed_unit("PUT", "/admin/reports/manage", token, req, "status override").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, req);
        server_stub()
    }
}

/// Fetch every ticket in the system via `GET /admin/tickets`.
///
/// # Errors
///
/// Returns an error string on any request failure.
pub async fn fetch_admin_tickets(token: &str) -> Result<Vec<AdminTicket>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_authed("/admin/tickets", token, "admin ticket fetch").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        server_stub()
    }
}

/// Fetch one user's completed or pending tickets via the admin lookups.
///
/// # Errors
///
/// Returns an error string on any request failure, typically an unknown
/// user id.
pub async fn fetch_user_tickets(
    token: &str,
    user_id: i64,
    completed: bool,
) -> Result<Vec<UserTicket>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_authed(&user_tickets_path(user_id, completed), token, "user ticket fetch").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user_id, completed);
        server_stub()
    }
}
