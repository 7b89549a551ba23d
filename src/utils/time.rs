use chrono::{NaiveDate, SecondsFormat, Utc};

pub fn time_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Today's date as `YYYY-MM-DD` (UTC), the format cohort dates are stored in.
pub fn today() -> String {
    iso_date(Utc::now().date_naive())
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
