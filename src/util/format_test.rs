use super::*;

#[test]
fn status_class_lowercases_wire_status() {
    assert_eq!(status_class("RESERVED"), "status-reserved");
    assert_eq!(status_class("CANCELED-BY-TIME"), "status-canceled-by-time");
}

#[test]
fn locale_datetime_passes_through_without_a_browser() {
    // Non-hydrate builds have no `Date`; the raw wire string is shown.
    assert_eq!(locale_datetime("2025-06-01T08:30:00Z"), "2025-06-01T08:30:00Z");
}

#[test]
fn yes_no_renders_flags() {
    assert_eq!(yes_no(true), "Yes");
    assert_eq!(yes_no(false), "No");
}
