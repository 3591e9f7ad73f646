use super::*;

#[test]
fn validate_answer_trims_and_accepts_content() {
    assert_eq!(validate_answer("  resolved  "), Some("resolved".to_owned()));
}

#[test]
fn validate_answer_rejects_blank_text() {
    assert_eq!(validate_answer(""), None);
    assert_eq!(validate_answer("   \n\t"), None);
}
