use super::*;

#[test]
fn parse_ticket_id_reads_numeric_segment() {
    assert_eq!(parse_ticket_id(Some("42")), Some(42));
}

#[test]
fn parse_ticket_id_rejects_missing_segment() {
    assert_eq!(parse_ticket_id(None), None);
}

#[test]
fn parse_ticket_id_rejects_non_numeric_segment() {
    assert_eq!(parse_ticket_id(Some("abc")), None);
    assert_eq!(parse_ticket_id(Some("")), None);
}
