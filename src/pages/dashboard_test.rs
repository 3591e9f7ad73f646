use super::*;

#[test]
fn build_search_request_parses_form_values() {
    let req = build_search_request("1", "7", "2025-06-01", "TRAIN").unwrap();
    assert_eq!(req.origin_city_id, 1);
    assert_eq!(req.destination_city_id, 7);
    assert_eq!(req.departure_date, "2025-06-01");
    assert_eq!(req.vehicle_type, VehicleType::Train);
}

#[test]
fn build_search_request_requires_origin() {
    assert_eq!(
        build_search_request("", "7", "2025-06-01", "BUS"),
        Err("Select an origin city.")
    );
}

#[test]
fn build_search_request_requires_destination() {
    assert_eq!(
        build_search_request("1", "", "2025-06-01", "BUS"),
        Err("Select a destination city.")
    );
}

#[test]
fn build_search_request_requires_date() {
    assert_eq!(
        build_search_request("1", "7", "", "BUS"),
        Err("Pick a departure date.")
    );
}

#[test]
fn build_search_request_defaults_unknown_vehicle_to_bus() {
    let req = build_search_request("1", "7", "2025-06-01", "ZEPPELIN").unwrap();
    assert_eq!(req.vehicle_type, VehicleType::Bus);
}
