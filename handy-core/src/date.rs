// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

/// Relative-time units, largest first: length in seconds and Vietnamese suffix.
const UNITS: [(i64, &str); 5] = [
    (31_536_000, "năm trước"),
    (2_592_000, "tháng trước"),
    (86_400, "ngày trước"),
    (3_600, "giờ trước"),
    (60, "phút trước"),
];

const JUST_NOW: &str = "vài giây trước";

/// Render `date` through a fixed-token pattern.
///
/// Tokens are replaced in this order, first occurrence only: `yyyy` (year),
/// `MM` (month), `dd` (day), `HH` (hour, 24h), `mm` (minute), `ss` (second).
/// All but the year are zero-padded to two digits. Anything else is copied.
///
/// ```
/// use chrono::NaiveDate;
/// use handy_core::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 7)
///     .and_then(|day| day.and_hms_opt(9, 5, 0))
///     .unwrap();
///
/// assert_eq!(format_date(&date, "dd/MM/yyyy HH:mm:ss"), "07/03/2024 09:05:00");
/// ```
pub fn format_date<D>(date: &D, format: &str) -> String
where
    D: Datelike + Timelike,
{
    let replacements = [
        ("yyyy", date.year().to_string()),
        ("MM", format!("{:02}", date.month())),
        ("dd", format!("{:02}", date.day())),
        ("HH", format!("{:02}", date.hour())),
        ("mm", format!("{:02}", date.minute())),
        ("ss", format!("{:02}", date.second())),
    ];

    replacements
        .iter()
        .fold(format.to_owned(), |rendered, (token, value)| {
            rendered.replacen(token, value, 1)
        })
}

/// How long ago `date` was, relative to now, in Vietnamese ("3 ngày trước").
pub fn time_ago<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    time_ago_from(date, &Utc::now())
}

/// How long before `now` `date` was.
///
/// The largest unit that fits more than once is used and the count is floored.
/// Anything up to a minute, and dates in the future, read "vài giây trước".
pub fn time_ago_from<Tz, Now>(date: &DateTime<Tz>, now: &DateTime<Now>) -> String
where
    Tz: TimeZone,
    Now: TimeZone,
{
    let seconds = (now.timestamp_millis() - date.timestamp_millis()).div_euclid(1000);

    UNITS
        .iter()
        .find(|(unit, _)| seconds > *unit)
        .map_or_else(
            || JUST_NOW.to_owned(),
            |(unit, suffix)| format!("{} {suffix}", seconds / unit),
        )
}
