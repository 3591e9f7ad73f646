use super::*;

#[test]
fn validate_register_input_accepts_full_input() {
    let req = validate_register_input(" ada@example.com ", " 09120000000 ", "longenough").unwrap();
    assert_eq!(req.email, "ada@example.com");
    assert_eq!(req.phone_number, "09120000000");
    assert_eq!(req.password, "longenough");
}

#[test]
fn validate_register_input_allows_empty_phone() {
    let req = validate_register_input("ada@example.com", "", "longenough").unwrap();
    assert_eq!(req.phone_number, "");
}

#[test]
fn validate_register_input_requires_email() {
    assert_eq!(
        validate_register_input("  ", "", "longenough"),
        Err("Enter an email first.")
    );
}

#[test]
fn validate_register_input_rejects_short_password() {
    assert_eq!(
        validate_register_input("ada@example.com", "", "seven77"),
        Err("Password must be at least 8 characters long.")
    );
}

#[test]
fn validate_register_input_accepts_exactly_min_length() {
    assert!(validate_register_input("ada@example.com", "", "eight888").is_ok());
}
