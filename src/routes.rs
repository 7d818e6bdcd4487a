//! Navigation URLs

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a query component
const QUERY_COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'`');

/// Meal-log page for one day: `<path>?date=<date>`
pub fn meal_logs_url(path: &str, date: &str) -> String {
    // Date inputs only yield `YYYY-MM-DD`, which passes unescaped; anything
    // else is escaped so it stays a single `date` value.
    format!("{}?date={}", path, utf8_percent_encode(date, QUERY_COMPONENT))
}
