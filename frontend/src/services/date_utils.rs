use chrono::NaiveTime;
use js_sys::Date;

/// Get current date in YYYY-MM-DD format
pub fn get_current_date() -> String {
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    format!("{:04}-{:02}-{:02}", year as u32, month as u32, day as u32)
}

/// Local wall-clock time, used for the time-of-day theme
pub fn get_current_time() -> NaiveTime {
    let now = Date::new_0();
    NaiveTime::from_hms_opt(now.get_hours(), now.get_minutes(), now.get_seconds()).unwrap_or_default()
}
