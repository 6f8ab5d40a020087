//! Spanish (Argentina) renderings of calendar dates.

use chrono::{Locale, NaiveDate, NaiveTime};

const LOCALE: Locale = Locale::es_AR;

/// Full date style, e.g. `lunes, 3 de junio de 2024`.
pub fn format_full(date: NaiveDate) -> String {
    localized(date, "%A, %-d de %B de %Y")
}

/// Calendar card heading, e.g. `lunes 3 jun`.
pub fn format_day_heading(date: NaiveDate) -> String {
    localized(date, "%A %-d %b")
}

/// `dd/MM/yyyy`
pub fn format_numeric(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn localized(date: NaiveDate, pattern: &str) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized(pattern, LOCALE)
        .to_string()
}
