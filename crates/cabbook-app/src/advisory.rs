//! Advisory checks the form shows without blocking a submit

use chrono::NaiveDate;
use tracing::warn;

/// Warning text when `pickup_date` lies before `today`.
///
/// Dates that do not parse as `YYYY-MM-DD` are left alone; the request
/// stores whatever the customer typed.
pub fn pickup_date_advisory(pickup_date: &str, today: NaiveDate) -> Option<String> {
    let date = NaiveDate::parse_from_str(pickup_date.trim(), "%Y-%m-%d").ok()?;
    if date < today {
        let message = format!("Pickup date {} is before today ({})", date, today);
        warn!("{}", message);
        Some(message)
    } else {
        None
    }
}

/// Today's date in local time, as the date picker's minimum
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
