use intl_office_shared::dates;

/// Today's date as a `YYYY-MM-DD` string in the browser's local time,
/// used to seed the "new article" form.
pub fn today_ymd() -> String {
    let now = js_sys::Date::new_0();
    format!("{:04}-{:02}-{:02}", now.get_full_year(), now.get_month() + 1, now.get_date())
}

/// Render a wire date for display; falls back to the raw string when the
/// record carries something unexpected.
pub fn display_date(wire_date: &str) -> String {
    dates::date_from_wire(wire_date).unwrap_or_else(|_| wire_date.to_string())
}
