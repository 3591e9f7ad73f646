use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("/city"), "http://localhost:3000/city");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("tok-1"), "Bearer tok-1");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("login", 401), "login failed: 401");
    assert_eq!(request_failed_message("payment", 500), "payment failed: 500");
}

#[test]
fn ticket_detail_path_formats_expected_path() {
    assert_eq!(ticket_detail_path(12), "/ticket-detail/12");
}

#[test]
fn penalty_paths_format_expected_paths() {
    assert_eq!(ticket_penalties_path(7), "/ticket-penalties/7");
    assert_eq!(penalty_path(7), "/penalty/7");
}

#[test]
fn user_tickets_path_switches_on_completion() {
    assert_eq!(user_tickets_path(9, true), "/admin/users/9/completed-tickets");
    assert_eq!(user_tickets_path(9, false), "/admin/users/9/notcompleted-tickets");
}
