// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{at, pay_day, ymd};
use crate::{DATE_FORMAT, PayDayResult, compute_next, compute_remaining, start_of_day};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use chrono_tz::Europe::Bucharest;

#[test]
fn test_compute_next_later_this_month() {
    let result: PayDayResult = compute_next(pay_day(25), &at(2026, 10, 17, 10, 0));
    assert_eq!(result.next_pay_day, ymd(2026, 10, 25));
    assert_eq!(result.days_until, 8);
}

#[test]
fn test_compute_next_rolls_over_when_passed() {
    let result: PayDayResult = compute_next(pay_day(10), &at(2026, 10, 17, 10, 0));
    assert_eq!(result.next_pay_day, ymd(2026, 11, 10));
}

#[test]
fn test_compute_next_pay_day_today_after_midnight_rolls_over() {
    let result: PayDayResult = compute_next(pay_day(17), &at(2026, 10, 17, 10, 0));
    assert_eq!(result.next_pay_day, ymd(2026, 11, 17));
    assert_eq!(result.days_until, 31);
}

#[test]
fn test_compute_next_pay_day_today_at_midnight_is_kept() {
    let result: PayDayResult = compute_next(pay_day(17), &at(2026, 10, 17, 0, 0));
    assert_eq!(result.next_pay_day, ymd(2026, 10, 17));
    assert_eq!(result.days_until, 1);
}

#[test]
fn test_compute_next_rolls_over_into_next_year() {
    let result: PayDayResult = compute_next(pay_day(5), &at(2026, 12, 20, 12, 0));
    assert_eq!(result.next_pay_day, ymd(2027, 1, 5));
    assert_eq!(result.days_until, 16);
}

#[test]
fn test_compute_next_normalizes_current_month() {
    // 2026-02-28 is a Saturday
    let result: PayDayResult = compute_next(pay_day(31), &at(2026, 2, 10, 9, 0));
    assert_eq!(result.next_pay_day, ymd(2026, 2, 27));
    assert_eq!(result.days_until, 17);
}

#[test]
fn test_compute_next_rollover_skips_normalization() {
    // Rollover applies the raw day: February 31st carries into March.
    let result: PayDayResult = compute_next(pay_day(31), &at(2026, 1, 31, 9, 0));
    assert_eq!(result.next_pay_day, ymd(2026, 3, 3));
    assert_eq!(result.days_until, 31);

    let result: PayDayResult = compute_next(pay_day(31), &at(2026, 10, 31, 8, 0));
    assert_eq!(result.next_pay_day, ymd(2026, 12, 1));
    assert_eq!(result.days_until, 31);
}

#[test]
fn test_compute_next_days_until_is_positive() {
    let nows: [DateTime<Utc>; 5] = [
        at(2026, 1, 1, 0, 0),
        at(2026, 2, 28, 23, 59),
        at(2026, 6, 15, 12, 0),
        at(2026, 12, 31, 23, 59),
        at(2024, 2, 29, 6, 30),
    ];

    for now in nows {
        for day in 1..=31 {
            let result: PayDayResult = compute_next(pay_day(day), &now);
            assert!(result.days_until >= 1, "pay day {day} at {now}");
            assert!(start_of_day(result.next_pay_day, &Utc) >= now, "pay day {day} at {now}");
        }
    }
}

#[test]
fn test_compute_remaining_from_start_of_march() {
    let dates: Vec<NaiveDate> = compute_remaining(pay_day(15), &at(2026, 3, 1, 9, 0));
    let expected: Vec<NaiveDate> = (3..=12).map(|month| ymd(2026, month, 15)).collect();
    assert_eq!(dates, expected);
}

#[test]
fn test_compute_remaining_skips_passed_current_month() {
    let dates: Vec<NaiveDate> = compute_remaining(pay_day(15), &at(2026, 10, 17, 10, 0));
    assert_eq!(dates, vec![ymd(2026, 11, 15), ymd(2026, 12, 15)]);
}

#[test]
fn test_compute_remaining_thirty_first_whole_year() {
    let dates: Vec<NaiveDate> = compute_remaining(pay_day(31), &at(2026, 1, 1, 0, 0));
    assert_eq!(
        dates,
        vec![
            ymd(2026, 1, 31),
            ymd(2026, 2, 27),
            ymd(2026, 3, 31),
            ymd(2026, 4, 30),
            ymd(2026, 5, 31),
            ymd(2026, 6, 30),
            ymd(2026, 7, 31),
            ymd(2026, 8, 31),
            ymd(2026, 9, 30),
            ymd(2026, 10, 31),
            ymd(2026, 11, 30),
            ymd(2026, 12, 31),
        ]
    );
}

#[test]
fn test_compute_remaining_thirty_first_with_weekend_shifts() {
    let dates: Vec<NaiveDate> = compute_remaining(pay_day(31), &at(2023, 4, 1, 8, 0));
    assert_eq!(dates.first(), Some(&ymd(2023, 5, 1)));
    assert!(dates.contains(&ymd(2023, 9, 29)));
    assert_eq!(dates.len(), 9);
}

#[test]
fn test_compute_remaining_excludes_date_equal_to_now() {
    let dates: Vec<NaiveDate> = compute_remaining(pay_day(15), &at(2026, 12, 15, 0, 0));
    assert!(dates.is_empty());
}

#[test]
fn test_compute_remaining_empty_after_last_pay_day() {
    let dates: Vec<NaiveDate> = compute_remaining(pay_day(31), &at(2026, 12, 31, 12, 0));
    assert!(dates.is_empty());
}

#[test]
fn test_compute_remaining_properties() {
    let nows: [DateTime<Utc>; 4] = [
        at(2026, 1, 1, 0, 0),
        at(2023, 4, 30, 12, 0),
        at(2024, 2, 29, 0, 0),
        at(2026, 10, 17, 10, 0),
    ];

    for now in nows {
        for day in 1..=31 {
            let dates: Vec<NaiveDate> = compute_remaining(pay_day(day), &now);
            assert!(dates.len() <= 12);
            assert!(
                dates.windows(2).all(|pair| pair[0] < pair[1]),
                "pay day {day} at {now}: {dates:?}"
            );
            for date in &dates {
                assert_eq!(date.year(), now.year());
                assert!(start_of_day(*date, &Utc) > now);
                let formatted: String = date.format(DATE_FORMAT).to_string();
                assert_eq!(NaiveDate::parse_from_str(&formatted, DATE_FORMAT).unwrap(), *date);
            }
        }
    }
}

#[test]
fn test_compute_next_counts_short_day_at_spring_change() {
    // Clocks go forward on 2026-03-29, leaving 47h30m until the 31st.
    let now: DateTime<chrono_tz::Tz> = Bucharest.with_ymd_and_hms(2026, 3, 28, 23, 30, 0).unwrap();
    let result: PayDayResult = compute_next(pay_day(31), &now);
    assert_eq!(result.next_pay_day, ymd(2026, 3, 31));
    assert_eq!(result.days_until, 2);
}

#[test]
fn test_compute_next_counts_long_day_at_autumn_change() {
    // Clocks go back on 2026-10-25, leaving 48h30m until the 27th.
    let now: DateTime<chrono_tz::Tz> = Bucharest.with_ymd_and_hms(2026, 10, 25, 0, 30, 0).unwrap();
    let result: PayDayResult = compute_next(pay_day(27), &now);
    assert_eq!(result.next_pay_day, ymd(2026, 10, 27));
    assert_eq!(result.days_until, 3);
}

#[test]
fn test_compute_remaining_uses_zone_of_now() {
    // 01:00 on the 15th in Bucharest is still the 14th in UTC.
    let now: DateTime<chrono_tz::Tz> = Bucharest.with_ymd_and_hms(2026, 11, 15, 1, 0, 0).unwrap();
    assert_eq!(
        compute_remaining(pay_day(15), &now),
        vec![ymd(2026, 12, 15)]
    );
    assert_eq!(
        compute_remaining(pay_day(15), &now.with_timezone(&Utc)),
        vec![ymd(2026, 11, 15), ymd(2026, 12, 15)]
    );
}
