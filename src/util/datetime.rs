//! Timestamp display formatting for list and log tables.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

/// Render a server timestamp for table display.
///
/// Server timestamps are ISO-8601 strings; in the browser they go through
/// `Date.toLocaleString`. Missing or empty values render as a dash.
pub fn format_timestamp(value: Option<&str>) -> String {
    match value {
        Some(raw) if !raw.is_empty() => locale_string(raw),
        _ => "—".to_owned(),
    }
}

#[cfg(feature = "hydrate")]
fn locale_string(iso: &str) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
    if date.get_time().is_nan() {
        return iso.to_owned();
    }
    date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

#[cfg(not(feature = "hydrate"))]
fn locale_string(iso: &str) -> String {
    iso.to_owned()
}
