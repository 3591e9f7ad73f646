use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_reservation() -> Reservation {
    Reservation {
        id: 42,
        ticket_id: 7,
        payment_id: 9,
        amount: 1500,
        status: "RESERVING".to_owned(),
    }
}

// =============================================================
// Enum wire spellings
// =============================================================

#[test]
fn vehicle_type_serializes_to_wire_spelling() {
    assert_eq!(serde_json::to_string(&VehicleType::Bus).unwrap(), "\"BUS\"");
    assert_eq!(serde_json::to_string(&VehicleType::Train).unwrap(), "\"TRAIN\"");
    assert_eq!(serde_json::to_string(&VehicleType::Airplane).unwrap(), "\"AIRPLANE\"");
}

#[test]
fn vehicle_type_round_trips_through_from_wire() {
    for vehicle in VehicleType::ALL {
        assert_eq!(VehicleType::from_wire(vehicle.as_wire()), Some(vehicle));
    }
    assert_eq!(VehicleType::from_wire("BOAT"), None);
}

#[test]
fn payment_type_serializes_to_wire_spelling() {
    assert_eq!(serde_json::to_string(&PaymentType::Wallet).unwrap(), "\"WALLET\"");
    assert_eq!(
        serde_json::to_string(&PaymentType::CreditCard).unwrap(),
        "\"CREDIT_CARD\""
    );
    assert_eq!(
        serde_json::to_string(&PaymentType::BankTransfer).unwrap(),
        "\"BANK_TRANSFER\""
    );
}

#[test]
fn reservation_status_uses_dashed_wire_spelling() {
    assert_eq!(
        serde_json::to_string(&ReservationStatus::CanceledByTime).unwrap(),
        "\"CANCELED-BY-TIME\""
    );
    assert_eq!(
        ReservationStatus::from_wire("CANCELED-BY-TIME"),
        Some(ReservationStatus::CanceledByTime)
    );
}

#[test]
fn report_type_uses_dashed_wire_spelling() {
    assert_eq!(
        serde_json::to_string(&ReportType::PaymentIssue).unwrap(),
        "\"PAYMENT-ISSUE\""
    );
    assert_eq!(serde_json::to_string(&ReportType::Etc).unwrap(), "\"ETC.\"");
    assert_eq!(ReportType::from_wire("ETC."), Some(ReportType::Etc));
}

// =============================================================
// Field renames & misspelled wire names
// =============================================================

#[test]
fn ticket_detail_uses_camel_case_timestamps() {
    let json = r#"{
        "id": 3,
        "origin": "Tehran",
        "destination": "Shiraz",
        "departureTime": "2025-06-01T08:30:00Z",
        "arrivalTime": "2025-06-01T12:00:00Z",
        "amount": 2500,
        "vehicle_type": "TRAIN",
        "status": "ACTIVE"
    }"#;
    let detail: TicketDetail = serde_json::from_str(json).unwrap();
    assert_eq!(detail.departure_time, "2025-06-01T08:30:00Z");
    assert_eq!(detail.arrival_time, "2025-06-01T12:00:00Z");

    let out = serde_json::to_value(&detail).unwrap();
    assert!(out.get("departureTime").is_some());
    assert!(out.get("departure_time").is_none());
}

#[test]
fn penalty_reads_misspelled_before_field() {
    let json = r#"{"penalty_text": "standard policy", "befor_day": 10, "after_day": 50}"#;
    let penalty: Penalty = serde_json::from_str(json).unwrap();
    assert_eq!(penalty.before_day, 10);
    assert_eq!(penalty.after_day, 50);
}

#[test]
fn manage_request_writes_misspelled_reservation_field() {
    let req = ManageReservationRequest {
        reservation_id: 12,
        to_status_reservation: ReservationStatus::Canceled,
    };
    let out = serde_json::to_value(&req).unwrap();
    assert_eq!(out["reserevation_id"], 12);
    assert_eq!(out["to_status_reservation"], "CANCELED");
}

#[test]
fn payment_request_writes_type_field() {
    let req = PaymentRequest::completed(9, PaymentType::Wallet);
    let out = serde_json::to_value(&req).unwrap();
    assert_eq!(out["type"], "WALLET");
    assert_eq!(out["payment_status"], "COMPLETED");
    assert_eq!(out["reservation_status"], "RESERVED");
}

// =============================================================
// Optional / defaulted fields
// =============================================================

#[test]
fn profile_update_omits_password_when_unchanged() {
    let req = ProfileUpdateRequest {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        national_code: "0012345678".to_owned(),
        email: "ada@example.com".to_owned(),
        phone_number: String::new(),
        city_id: 2,
        pic_dir: String::new(),
        password: None,
    };
    let out = serde_json::to_value(&req).unwrap();
    assert!(out.get("password").is_none());

    let with_password = ProfileUpdateRequest {
        password: Some("hunter22".to_owned()),
        ..req
    };
    let out = serde_json::to_value(&with_password).unwrap();
    assert_eq!(out["password"], "hunter22");
}

#[test]
fn profile_tolerates_sparse_records() {
    let profile: Profile = serde_json::from_str(r#"{"wallet": 100, "role": "USER"}"#).unwrap();
    assert_eq!(profile.wallet, 100);
    assert!(profile.first_name.is_none());
    assert!(!profile.email_verified);
}

#[test]
fn report_without_response_deserializes() {
    let json = r#"{"id": 1, "user_id": 2, "reservation_id": 3, "request_text": "lost ticket"}"#;
    let report: Report = serde_json::from_str(json).unwrap();
    assert!(report.response_text.is_none());
}

#[test]
fn user_ticket_without_payment_status_deserializes() {
    let json = r#"{"id": 1, "province": "Tehran", "province_2": "Mashhad", "status": "RESERVED"}"#;
    let ticket: UserTicket = serde_json::from_str(json).unwrap();
    assert!(ticket.payment_status.is_none());
}

// =============================================================
// Misc
// =============================================================

#[test]
fn city_value_is_one_based_list_position() {
    assert_eq!(city_value_for_index(0), 1);
    assert_eq!(city_value_for_index(6), 7);
}

#[test]
fn reservation_round_trips() {
    let reservation = make_reservation();
    let json = serde_json::to_string(&reservation).unwrap();
    assert_eq!(serde_json::from_str::<Reservation>(&json).unwrap(), reservation);
}
