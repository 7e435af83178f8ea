use chrono::NaiveDate;

/// Parses the store's textual event date, "DD/MM/YYYY".
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%d/%m/%Y").ok()
}

/// Keeps only ASCII digits, the normalization applied to CEPs and phone
/// numbers before they reach an external lookup.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|ch| ch.is_ascii_digit()).collect()
}
