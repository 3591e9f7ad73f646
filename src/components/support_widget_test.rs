use super::*;

#[test]
fn validate_report_input_parses_reservation_and_trims_text() {
    assert_eq!(
        validate_report_input(" 42 ", "  double charge  "),
        Ok((42, "double charge".to_owned()))
    );
}

#[test]
fn validate_report_input_requires_numeric_reservation() {
    assert_eq!(
        validate_report_input("", "double charge"),
        Err("Enter the reservation ID first.")
    );
    assert_eq!(
        validate_report_input("abc", "double charge"),
        Err("Enter the reservation ID first.")
    );
}

#[test]
fn validate_report_input_requires_details() {
    assert_eq!(
        validate_report_input("42", "   "),
        Err("Describe the problem first.")
    );
}
