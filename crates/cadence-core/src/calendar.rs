//! Calendar-day arithmetic for scheduling.
//!
//! Every scheduling decision works on civil dates (`YYYY-MM-DD`, no time of
//! day), so month and year rollover are plain calendar arithmetic and
//! daylight-saving transitions cannot shift a day. Dates render zero-padded,
//! which keeps their string order identical to their chronological order.

use jiff::{civil::Date, Span, Zoned};

/// Returns the server-local calendar date in the system time zone.
///
/// This is the only place the engine reads the clock; everything else takes
/// `today` as an argument.
pub fn today() -> Date {
    Zoned::now().date()
}

/// Shifts `date` by `n` calendar days (`n` may be negative).
///
/// Results outside the representable range saturate at [`Date::MIN`] or
/// [`Date::MAX`].
pub fn add_days(date: Date, n: i64) -> Date {
    Span::new()
        .try_days(n)
        .ok()
        .and_then(|span| date.checked_add(span).ok())
        .unwrap_or(if n < 0 { Date::MIN } else { Date::MAX })
}

/// Returns true if `a` falls strictly before `b`.
pub fn is_before(a: Date, b: Date) -> bool {
    a < b
}

/// Parses a strict `YYYY-MM-DD` string.
///
/// Empty, padded or otherwise malformed input yields `None`, which callers
/// treat as "no date".
pub fn parse_date(input: &str) -> Option<Date> {
    let bytes = input.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_only = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_only {
        return None;
    }
    input.parse::<Date>().ok()
}

/// The `len` consecutive dates starting at `start`.
pub fn window(start: Date, len: i64) -> impl Iterator<Item = Date> {
    (0..len.max(0)).map(move |offset| add_days(start, offset))
}
