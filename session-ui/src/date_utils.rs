/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Human-readable timestamps.
//!
//! All functions take the date and "now" in the same timezone so callers
//! decide whether to render in local time (the app) or a fixed offset (tests).

use chrono::{DateTime, Datelike, TimeZone, Timelike};

use crate::i18n::Translator;

pub const MS_6_DAYS: i64 = 6 * 24 * 60 * 60 * 1000;

const DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Convert a millisecond Unix timestamp into `tz`.
/// Returns `None` when the timestamp is outside chrono's range.
pub fn from_timestamp_ms<Tz: TimeZone>(tz: &Tz, timestamp_ms: i64) -> Option<DateTime<Tz>> {
    tz.timestamp_millis_opt(timestamp_ms).single()
}

pub fn week_day_name<Tz: TimeZone>(date: &DateTime<Tz>, tr: &Translator) -> String {
    tr.t(DAYS[date.weekday().num_days_from_sunday() as usize])
}

pub fn month_name<Tz: TimeZone>(date: &DateTime<Tz>, tr: &Translator) -> String {
    tr.t(MONTHS[date.month0() as usize])
}

fn twelve_hour_time<Tz: TimeZone>(date: &DateTime<Tz>, tr: &Translator) -> String {
    let hours = match date.hour() % 12 {
        0 => 12,
        h => h,
    };
    let ampm = if date.hour() >= 12 {
        tr.t("PM")
    } else {
        tr.t("AM")
    };
    format!("{hours}:{:02}{ampm}", date.minute())
}

/// `20:15`, or `8:15PM` with `show_twelve_hour`.
pub fn format_time<Tz: TimeZone>(
    date: &DateTime<Tz>,
    show_twelve_hour: bool,
    tr: &Translator,
) -> String {
    if show_twelve_hour {
        twelve_hour_time(date, tr)
    } else {
        format!("{:02}:{:02}", date.hour(), date.minute())
    }
}

/// Absolute date, getting more verbose the further `date` is from `now`:
/// time only today, weekday and time within six days, month and day within
/// the year, otherwise the full date including the year.
pub fn format_date<Tz: TimeZone>(
    date: &DateTime<Tz>,
    now: &DateTime<Tz>,
    show_twelve_hour: bool,
    tr: &Translator,
) -> String {
    let time = format_time(date, show_twelve_hour, tr);
    if date.date_naive() == now.date_naive() {
        time
    } else if now.timestamp_millis() - date.timestamp_millis() < MS_6_DAYS {
        tr.t_with(
            "%(weekDayName)s %(time)s",
            &[("weekDayName", week_day_name(date, tr).as_str()), ("time", time.as_str())],
        )
    } else if now.year() == date.year() {
        tr.t_with(
            "%(weekDayName)s, %(monthName)s %(day)s %(time)s",
            &[
                ("weekDayName", week_day_name(date, tr).as_str()),
                ("monthName", month_name(date, tr).as_str()),
                ("day", date.day().to_string().as_str()),
                ("time", time.as_str()),
            ],
        )
    } else {
        format_full_date(date, show_twelve_hour, tr)
    }
}

/// Weekday, month, day, year and time, e.g. `Wed, Dec 28 2022 10:00`.
pub fn format_full_date<Tz: TimeZone>(
    date: &DateTime<Tz>,
    show_twelve_hour: bool,
    tr: &Translator,
) -> String {
    tr.t_with(
        "%(weekDayName)s, %(monthName)s %(day)s %(fullYear)s %(time)s",
        &[
            ("weekDayName", week_day_name(date, tr).as_str()),
            ("monthName", month_name(date, tr).as_str()),
            ("day", date.day().to_string().as_str()),
            ("fullYear", date.year().to_string().as_str()),
            ("time", format_time(date, show_twelve_hour, tr).as_str()),
        ],
    )
}

/// Compact form used for older activity: time today, `Mar 3` within the
/// current year, `Mar 3, 2021` before that.
pub fn format_relative_time<Tz: TimeZone>(
    date: &DateTime<Tz>,
    now: &DateTime<Tz>,
    show_twelve_hour: bool,
    tr: &Translator,
) -> String {
    if date.date_naive() == now.date_naive() {
        return format_time(date, show_twelve_hour, tr);
    }
    let month = month_name(date, tr);
    let day = date.day().to_string();
    if date.year() == now.year() {
        tr.t_with(
            "%(monthName)s %(day)s",
            &[("monthName", month.as_str()), ("day", day.as_str())],
        )
    } else {
        tr.t_with(
            "%(monthName)s %(day)s, %(fullYear)s",
            &[
                ("monthName", month.as_str()),
                ("day", day.as_str()),
                ("fullYear", date.year().to_string().as_str()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use chrono::{FixedOffset, Utc};

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    fn en() -> Translator {
        Translator::default()
    }

    #[test]
    fn formats_24_and_12_hour_clock() {
        let evening = utc(2022, 9, 20, 20, 15);
        assert_eq!(format_time(&evening, false, &en()), "20:15");
        assert_eq!(format_time(&evening, true, &en()), "8:15PM");

        let midnight = utc(2022, 9, 20, 0, 5);
        assert_eq!(format_time(&midnight, false, &en()), "00:05");
        assert_eq!(format_time(&midnight, true, &en()), "12:05AM");

        let noon = utc(2022, 9, 20, 12, 0);
        assert_eq!(format_time(&noon, true, &en()), "12:00PM");
    }

    #[test]
    fn format_date_same_day_is_time_only() {
        let now = utc(2022, 9, 20, 22, 0);
        assert_eq!(format_date(&utc(2022, 9, 20, 8, 30), &now, false, &en()), "08:30");
    }

    #[test]
    fn format_date_within_six_days_uses_weekday() {
        // 2022-09-20 is a Tuesday
        let now = utc(2022, 9, 23, 10, 0);
        let date = utc(2022, 9, 20, 20, 15);
        assert_eq!(format_date(&date, &now, false, &en()), "Tue 20:15");
    }

    #[test]
    fn format_date_within_year_adds_month_and_day() {
        let now = utc(2022, 9, 23, 10, 0);
        let date = utc(2022, 3, 3, 9, 5);
        assert_eq!(format_date(&date, &now, false, &en()), "Thu, Mar 3 09:05");
    }

    #[test]
    fn format_date_previous_year_adds_year() {
        let now = utc(2022, 9, 23, 10, 0);
        let date = utc(2021, 3, 3, 9, 5);
        assert_eq!(format_date(&date, &now, false, &en()), "Wed, Mar 3 2021 09:05");
        assert_eq!(format_date(&date, &now, true, &en()), "Wed, Mar 3 2021 9:05AM");
    }

    #[test]
    fn format_date_previous_year_in_german() {
        let de = Translator::new(Language::De);
        let now = utc(2022, 9, 23, 10, 0);
        let date = utc(2021, 3, 3, 9, 5);
        assert_eq!(format_date(&date, &now, false, &de), "Mi, 3. März 2021 09:05");
    }

    #[test]
    fn relative_time_today_this_year_and_older() {
        let now = utc(2022, 9, 23, 10, 0);
        assert_eq!(format_relative_time(&utc(2022, 9, 23, 7, 45), &now, false, &en()), "07:45");
        assert_eq!(format_relative_time(&utc(2022, 3, 3, 7, 45), &now, false, &en()), "Mar 3");
        assert_eq!(
            format_relative_time(&utc(2021, 3, 3, 7, 45), &now, false, &en()),
            "Mar 3, 2021"
        );
    }

    #[test]
    fn german_names_and_order() {
        let de = Translator::new(Language::De);
        let now = utc(2022, 9, 23, 10, 0);
        assert_eq!(format_relative_time(&utc(2022, 3, 3, 7, 45), &now, false, &de), "3. März");
        assert_eq!(format_date(&utc(2022, 9, 20, 20, 15), &now, false, &de), "Di 20:15");
    }

    #[test]
    fn calendar_day_follows_the_timezone() {
        // 23:30 UTC is already the next day at UTC+2.
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let date = plus_two.from_utc_datetime(&utc(2022, 9, 20, 23, 30).naive_utc());
        let now = plus_two.from_utc_datetime(&utc(2022, 9, 21, 9, 0).naive_utc());
        assert_eq!(format_date(&date, &now, false, &en()), "01:30");
    }

    #[test]
    fn out_of_range_timestamp_is_none() {
        assert!(from_timestamp_ms(&Utc, i64::MAX).is_none());
        assert!(from_timestamp_ms(&Utc, 0).is_some());
    }
}
