use super::*;

#[test]
fn validate_user_id_parses_positive_integer() {
    assert_eq!(validate_user_id("7"), Ok(7));
    assert_eq!(validate_user_id("  42  "), Ok(42));
}

#[test]
fn validate_user_id_rejects_empty_input() {
    assert_eq!(validate_user_id(""), Err("Please enter a User ID."));
    assert_eq!(validate_user_id("   "), Err("Please enter a User ID."));
}

#[test]
fn validate_user_id_rejects_non_numeric_and_non_positive() {
    assert_eq!(validate_user_id("abc"), Err("Please enter a User ID."));
    assert_eq!(validate_user_id("0"), Err("Please enter a User ID."));
    assert_eq!(validate_user_id("-3"), Err("Please enter a User ID."));
}

#[test]
fn results_heading_names_the_lookup() {
    assert_eq!(results_heading(true, 7), "Completed Tickets for User ID: 7");
    assert_eq!(results_heading(false, 7), "Pending Tickets for User ID: 7");
}
