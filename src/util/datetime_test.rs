use super::*;

#[test]
fn missing_timestamp_renders_dash() {
    assert_eq!(format_timestamp(None), "—");
    assert_eq!(format_timestamp(Some("")), "—");
}

#[test]
fn present_timestamp_passes_through_outside_browser() {
    // The non-hydrate build has no `Date`; the raw ISO string is kept.
    assert_eq!(
        format_timestamp(Some("2025-01-02T03:04:05Z")),
        "2025-01-02T03:04:05Z"
    );
}
