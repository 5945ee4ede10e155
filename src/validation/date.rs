//! Syntactic check for dates written as `"<Month> <day><ordinal>"`, e.g. `"September 1st"`.
//!
//! The check is loose: the ordinal token is only looked up in [`ORDINAL_TOKENS`], never
//! compared with the parsed day, so `"September 11st"` is accepted.

use chrono::{Month, NaiveDate};

/// The three-character endings a date may carry.
pub const ORDINAL_TOKENS: [&str; 10] = [
    "0th", "1st", "2nd", "3rd", "4th", "5th", "6th", "7th", "8th", "9th",
];

/// Shortest string that can hold a month, a day and an ordinal.
pub const MIN_DATE_LEN: usize = 7;

/// Days are checked against a non-leap year, so `"February 29th"` is rejected.
const REFERENCE_YEAR: i32 = 1900;

/// Returns `true` when `candidate` is a well-formed visit date.
///
/// Everything but the last two characters must parse as `"<Month> <day>"` and the last
/// three characters must be one of the [`ORDINAL_TOKENS`].
pub fn check_date_format(candidate: &str) -> bool {
    let chars: Vec<char> = candidate.chars().collect();
    if chars.len() < MIN_DATE_LEN {
        return false;
    }

    let prefix: String = chars[..chars.len() - 2].iter().collect();
    let ordinal: String = chars[chars.len() - 3..].iter().collect();

    parses_as_month_day(&prefix) && ORDINAL_TOKENS.contains(&ordinal.as_str())
}

/// The prefix must be exactly a full month name and a day, separated by whitespace.
/// chrono alone would also take `"Sep 1"` and `"September1"`.
fn parses_as_month_day(prefix: &str) -> bool {
    let mut tokens = prefix.split_whitespace();
    let (Some(month), Some(_day), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return false;
    };
    if !is_full_month_name(month) {
        return false;
    }

    let dated = format!("{prefix} {REFERENCE_YEAR}");
    NaiveDate::parse_from_str(&dated, "%B %d %Y").is_ok()
}

fn is_full_month_name(token: &str) -> bool {
    token
        .parse::<Month>()
        .is_ok_and(|month| token.eq_ignore_ascii_case(month.name()))
}
