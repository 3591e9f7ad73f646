//! Wire DTOs for the reservation service endpoints.
//!
//! DESIGN
//! ======
//! Field names follow the service verbatim, including its misspellings
//! (`befor_day`, `reserevation_id`) and the camelCase timestamps on ticket
//! detail, so serde round-trips stay lossless. Vocabularies the client
//! itself chooses (vehicle, payment method, report type, manageable
//! reservation status) are typed enums with exact wire spellings; status
//! fields on records the server owns stay plain strings and are passed
//! through as received.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================
// Auth
// =============================================================

/// Credentials posted to `/log-in`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The user record embedded in a login response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginUser {
    pub id: i64,
    pub email: String,
    /// Account role string (`"ADMIN"` routes to the admin console).
    pub role: String,
}

/// Successful `/log-in` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: LoginUser,
}

/// Registration payload posted to `/sign-in`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    /// Optional; the service accepts an empty string.
    pub phone_number: String,
    pub password: String,
}

// =============================================================
// Cities & ticket search
// =============================================================

/// A city row from `/city`. The service keys search requests by list
/// position, not by an id field; see [`city_value_for_index`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub province: String,
}

/// City id submitted for the option at `index` in the `/city` list.
pub fn city_value_for_index(index: usize) -> i64 {
    index as i64 + 1
}

/// Vehicle kinds offered by the search form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleType {
    Bus,
    Train,
    Airplane,
}

impl VehicleType {
    pub const ALL: [Self; 3] = [Self::Bus, Self::Train, Self::Airplane];

    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Bus => "BUS",
            Self::Train => "TRAIN",
            Self::Airplane => "AIRPLANE",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_wire() == value)
    }

    /// Human label for the search select.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bus => "Bus",
            Self::Train => "Train",
            Self::Airplane => "Airplane",
        }
    }
}

/// Search filter posted to `/search-tickets`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchTicketsRequest {
    pub origin_city_id: i64,
    pub destination_city_id: i64,
    /// `YYYY-MM-DD` from the date input.
    pub departure_date: String,
    pub vehicle_type: VehicleType,
}

/// A search result row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TicketSummary {
    pub id: i64,
    pub origin_province: String,
    pub destination_province: String,
    pub departure_time: String,
    pub amount: i64,
}

/// Full ticket record from `/ticket-detail/{id}`. This endpoint alone uses
/// camelCase timestamps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TicketDetail {
    pub id: i64,
    pub origin: String,
    pub destination: String,
    #[serde(rename = "departureTime")]
    pub departure_time: String,
    #[serde(rename = "arrivalTime")]
    pub arrival_time: String,
    pub amount: i64,
    pub vehicle_type: String,
    pub status: String,
}

// =============================================================
// Reservations & payment
// =============================================================

/// Reservation claim posted to `/reservation`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReservationRequest {
    /// Ticket ids to hold; the UI always sends exactly one.
    pub tickets: Vec<i64>,
}

/// A held reservation from `/allReservation`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub ticket_id: i64,
    pub payment_id: i64,
    pub amount: i64,
    /// Server-owned status, rendered and compared as received.
    pub status: String,
}

/// Payment methods offered by the payment modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    Wallet,
    CreditCard,
    BankTransfer,
    Crypto,
    Cash,
}

impl PaymentType {
    pub const ALL: [Self; 5] = [
        Self::Wallet,
        Self::CreditCard,
        Self::BankTransfer,
        Self::Crypto,
        Self::Cash,
    ];

    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Wallet => "WALLET",
            Self::CreditCard => "CREDIT_CARD",
            Self::BankTransfer => "BANK_TRANSFER",
            Self::Crypto => "CRYPTO",
            Self::Cash => "CASH",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_wire() == value)
    }
}

/// Payment confirmation posted to `/payment`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub payment_id: i64,
    #[serde(rename = "type")]
    pub method: PaymentType,
    pub payment_status: String,
    pub reservation_status: String,
}

impl PaymentRequest {
    /// The only transition the UI issues: mark the payment completed and
    /// the reservation reserved.
    pub fn completed(payment_id: i64, method: PaymentType) -> Self {
        Self {
            payment_id,
            method,
            payment_status: "COMPLETED".to_owned(),
            reservation_status: ReservationStatus::Reserved.as_wire().to_owned(),
        }
    }
}

/// Cancellation fee preview from `/ticket-penalties/{ticket_id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Penalty {
    pub penalty_text: String,
    /// Percentage charged when cancelling before the cutoff. The wire
    /// spells the field `befor_day`.
    #[serde(rename = "befor_day")]
    pub before_day: i64,
    /// Percentage charged when cancelling after the cutoff.
    pub after_day: i64,
}

/// Reservation statuses an admin may assign via the manage modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    #[serde(rename = "RESERVED")]
    Reserved,
    #[serde(rename = "RESERVING")]
    Reserving,
    #[serde(rename = "CANCELED")]
    Canceled,
    #[serde(rename = "CANCELED-BY-TIME")]
    CanceledByTime,
}

impl ReservationStatus {
    pub const ALL: [Self; 4] = [
        Self::Reserved,
        Self::Reserving,
        Self::Canceled,
        Self::CanceledByTime,
    ];

    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Reserved => "RESERVED",
            Self::Reserving => "RESERVING",
            Self::Canceled => "CANCELED",
            Self::CanceledByTime => "CANCELED-BY-TIME",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_wire() == value)
    }
}

// =============================================================
// Profile
// =============================================================

/// Profile record from `/profile`. Editable fields may be absent for a
/// fresh account, so they come through as options.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub national_code: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub city_id: Option<i64>,
    #[serde(default)]
    pub pic_dir: Option<String>,
    #[serde(default)]
    pub wallet: i64,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub phone_verified: bool,
    #[serde(default)]
    pub created_at: String,
}

/// Editable subset sent back via `PUT /profile`. The password rides along
/// only when the user typed a new one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdateRequest {
    pub first_name: String,
    pub last_name: String,
    pub national_code: String,
    pub email: String,
    pub phone_number: String,
    pub city_id: i64,
    pub pic_dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

// =============================================================
// Reports
// =============================================================

/// A support report, optionally answered by an admin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub user_id: i64,
    pub reservation_id: i64,
    pub request_text: String,
    #[serde(default)]
    pub response_text: Option<String>,
}

/// Report categories offered by the support widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportType {
    #[serde(rename = "PAYMENT-ISSUE")]
    PaymentIssue,
    #[serde(rename = "TRAVEL-DELAY")]
    TravelDelay,
    #[serde(rename = "UNEXPECTED-RESERVED")]
    UnexpectedReserved,
    #[serde(rename = "ETC.")]
    Etc,
}

impl ReportType {
    pub const ALL: [Self; 4] = [
        Self::PaymentIssue,
        Self::TravelDelay,
        Self::UnexpectedReserved,
        Self::Etc,
    ];

    pub fn as_wire(self) -> &'static str {
        match self {
            Self::PaymentIssue => "PAYMENT-ISSUE",
            Self::TravelDelay => "TRAVEL-DELAY",
            Self::UnexpectedReserved => "UNEXPECTED-RESERVED",
            Self::Etc => "ETC.",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_wire() == value)
    }

    /// Human label for the support widget select.
    pub fn label(self) -> &'static str {
        match self {
            Self::PaymentIssue => "Payment Issue",
            Self::TravelDelay => "Travel Delay",
            Self::UnexpectedReserved => "Unexpected Reservation",
            Self::Etc => "Other",
        }
    }
}

/// New report posted to `/report`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub reservation_id: i64,
    pub request_type: ReportType,
    pub request_text: String,
}

/// Admin answer sent via `PUT /admin/reports/answer`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnswerReportRequest {
    pub id: i64,
    pub response_text: String,
}

/// Admin status override sent via `PUT /admin/reports/manage`. The wire
/// spells the id field `reserevation_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ManageReservationRequest {
    #[serde(rename = "reserevation_id")]
    pub reservation_id: i64,
    pub to_status_reservation: ReservationStatus,
}

// =============================================================
// Admin oversight
// =============================================================

/// A ticket row from `/admin/tickets`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminTicket {
    pub id: i64,
    pub route_id: i64,
    pub vehicle_id: i64,
    pub amount: i64,
    pub departure_time: String,
    pub status: String,
}

/// A per-user ticket row from the admin completed/pending lookups.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserTicket {
    pub id: i64,
    /// Origin province.
    pub province: String,
    /// Destination province.
    pub province_2: String,
    pub status: String,
    #[serde(default)]
    pub payment_status: Option<String>,
}
