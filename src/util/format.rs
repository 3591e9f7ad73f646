//! Display formatting for wire values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// CSS modifier class for a reservation/ticket status string.
pub fn status_class(status: &str) -> String {
    format!("status-{}", status.to_lowercase())
}

/// Render an ISO-8601 timestamp in the viewer's locale.
///
/// Falls back to the raw wire string when no browser `Date` is available
/// (SSR) or the value does not parse.
pub fn locale_datetime(iso: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
        if date.get_time().is_nan() {
            return iso.to_owned();
        }
        date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
            .into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        iso.to_owned()
    }
}

/// Render an ISO-8601 timestamp as a locale date only.
pub fn locale_date(iso: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
        if date.get_time().is_nan() {
            return iso.to_owned();
        }
        date.to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED)
            .into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        iso.to_owned()
    }
}

/// Yes/No rendering for verified flags.
pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
