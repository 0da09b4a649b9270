//! Persian (fa-IR) date formatting: Solar Hijri calendar, Persian digits.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

/// Cumulative day counts at the start of each Gregorian month.
const GREGORIAN_MONTH_OFFSETS: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Convert a Gregorian date to a Solar Hijri `(year, month, day)`.
pub fn to_jalali(date: NaiveDate) -> (i64, i64, i64) {
    let gy = i64::from(date.year());
    let gm = date.month() as usize;
    let gd = i64::from(date.day());

    let gy2 = if gm > 2 { gy + 1 } else { gy };
    let mut days = 355_666 + 365 * gy + (gy2 + 3) / 4 - (gy2 + 99) / 100 + (gy2 + 399) / 400
        + gd
        + GREGORIAN_MONTH_OFFSETS[gm - 1];

    // 12053 days per 33-year cycle, 1461 per 4-year sub-cycle.
    let mut jy = -1595 + 33 * (days / 12053);
    days %= 12053;
    jy += 4 * (days / 1461);
    days %= 1461;
    if days > 365 {
        jy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    // First six months have 31 days, the rest 30 (29 in common years).
    let (jm, jd) = if days < 186 {
        (1 + days / 31, 1 + days % 31)
    } else {
        (7 + (days - 186) / 30, 1 + (days - 186) % 30)
    };

    (jy, jm, jd)
}

/// Replace ASCII digits with Extended Arabic-Indic (Persian) digits.
pub fn persian_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x06F0 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

/// Format a timestamp the way `fa-IR` locales do, e.g. `۱۴۰۳/۳/۱۲، ۱۴:۰۵:۰۹`.
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    let (year, month, day) = to_jalali(dt.date_naive());
    let text = format!(
        "{}/{}/{}، {}:{:02}:{:02}",
        year,
        month,
        day,
        dt.hour(),
        dt.minute(),
        dt.second()
    );
    persian_digits(&text)
}
