//! Timestamp rendering.
//!
//! All functions here are pure: the output depends only on the arguments and
//! the two fixed lookup tables.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use super::options::{DateOrder, DisplayFlag, DisplayFlags, TimestampConfig};

/// Default delimiter between the year, month and day fields.
pub const DATE_DELIMITER: char = '-';

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

const WEEKDAYS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

const SECS_PER_DAY: u64 = 24 * 60 * 60;

fn number(value: u32, flags: DisplayFlags) -> String {
    if flags.contains(DisplayFlag::HideZero) {
        value.to_string()
    } else {
        format!("{:02}", value)
    }
}

/// Render a calendar date.
///
/// ```
/// use chrono::NaiveDate;
/// use daylog::timestamp::{format_date, DateOrder, DisplayFlags};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// let stamp = format_date(date, DateOrder::YearMonthDay, DisplayFlags::empty(), '-');
/// assert_eq!(stamp, "2024-03-05_TUE");
/// ```
pub fn format_date(date: NaiveDate, order: DateOrder, flags: DisplayFlags, delimiter: char) -> String {
    let month = if flags.contains(DisplayFlag::MonthAsText) {
        MONTHS[date.month0() as usize].to_string()
    } else {
        number(date.month(), flags)
    };
    let day = number(date.day(), flags);

    let mut out = if flags.contains(DisplayFlag::HideYear) {
        match order {
            DateOrder::YearMonthDay | DateOrder::MonthDayYear => {
                format!("{month}{delimiter}{day}")
            }
            DateOrder::DayMonthYear => format!("{day}{delimiter}{month}"),
        }
    } else {
        let year = date.year();
        match order {
            DateOrder::YearMonthDay => format!("{year}{delimiter}{month}{delimiter}{day}"),
            DateOrder::MonthDayYear => format!("{month}{delimiter}{day}{delimiter}{year}"),
            DateOrder::DayMonthYear => format!("{day}{delimiter}{month}{delimiter}{year}"),
        }
    };

    if !flags.contains(DisplayFlag::HideWeekday) {
        out.push(flags.filler());
        out.push_str(WEEKDAYS[date.weekday().num_days_from_sunday() as usize]);
    }
    out
}

/// Render a time of day.
///
/// With [`DisplayFlag::TwelveHour`], midnight reads `12` tagged `AM`, noon
/// reads `12` tagged `PM`, and 13..=23 drop by twelve and are tagged `PM`.
pub fn format_time(time: NaiveTime, flags: DisplayFlags) -> String {
    let twelve_hour = flags.contains(DisplayFlag::TwelveHour);
    let (is_pm, hour) = if twelve_hour {
        time.hour12()
    } else {
        (false, time.hour())
    };

    let mut out = format!("{}:{}", number(hour, flags), number(time.minute(), flags));
    if !flags.contains(DisplayFlag::HideSeconds) {
        out.push(':');
        out.push_str(&number(time.second(), flags));
    }

    if twelve_hour {
        out.push(flags.filler());
        out.push_str(if is_pm { "PM" } else { "AM" });
    }
    out
}

/// Render a full stamp: date, filler, then time of day.
pub fn format_datetime(dt: NaiveDateTime, config: &TimestampConfig, delimiter: char) -> String {
    let mut out = format_date(dt.date(), config.order, config.flags, delimiter);
    out.push(config.flags.filler());
    out.push_str(&format_time(dt.time(), config.flags));
    out
}

/// Hundredths of a second in the fractional part of `secs`.
fn hundredths(secs: f64) -> u32 {
    ((secs - secs.floor()) * 100.0) as u32
}

/// Render a duration chronometer-style.
///
/// `SS.ff` under a minute, `MM:SS.ff` under an hour, `HH:MM:SS.ff` beyond.
/// The sign is dropped. The hours field widens as needed.
pub fn format_duration(secs: f64) -> String {
    let secs = secs.abs();
    let whole = secs as u64;
    let hour = whole / 3600;
    let min = (whole / 60) % 60;
    let sec = whole % 60;
    let frac = hundredths(secs);

    if hour != 0 {
        format!("{hour:02}:{min:02}:{sec:02}.{frac:02}")
    } else if min != 0 {
        format!("{min:02}:{sec:02}.{frac:02}")
    } else {
        format!("{sec:02}.{frac:02}")
    }
}

/// Render a duration as a wall-clock `HH:MM:SS.ff` within one day.
///
/// Returns the stamp and the number of whole days that overflowed.
pub fn format_duration_24(secs: f64) -> (String, u64) {
    let secs = secs.abs();
    let whole = secs as u64;
    let day = whole / SECS_PER_DAY;
    let rest = whole % SECS_PER_DAY;
    let stamp = format!(
        "{:02}:{:02}:{:02}.{:02}",
        rest / 3600,
        (rest / 60) % 60,
        rest % 60,
        hundredths(secs)
    );
    (stamp, day)
}
