use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use leave_approval::LeaveError;
use leave_approval::model::leave_request::LeaveRequest;
use leave_approval::utils::business_days::{apply_duration, count_business_days, validate};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn full_week_counts_five() {
    // 2024-01-01 is a Monday, 2024-01-07 a Sunday
    let count = count_business_days(date(2024, 1, 1), date(2024, 1, 7), &HashSet::new());
    assert_eq!(count, 5.0);
}

#[test]
fn midweek_holiday_is_excluded() {
    let holidays = HashSet::from([date(2024, 1, 3)]);
    let count = count_business_days(date(2024, 1, 1), date(2024, 1, 7), &holidays);
    assert_eq!(count, 4.0);
}

#[test]
fn weekend_only_counts_zero() {
    let count = count_business_days(date(2024, 1, 6), date(2024, 1, 7), &HashSet::new());
    assert_eq!(count, 0.0);
}

#[test]
fn spans_month_and_year_boundaries() {
    // Fri 2024-12-27 .. Fri 2025-01-03 has 6 weekdays; New Year is off, Christmas is outside
    let holidays = HashSet::from([date(2025, 1, 1), date(2024, 12, 25)]);
    let count = count_business_days(date(2024, 12, 27), date(2025, 1, 3), &holidays);
    assert_eq!(count, 5.0);
}

#[test]
fn apply_duration_on_submitted_request() {
    let mut leave = LeaveRequest::new(date(2024, 1, 1), date(2024, 1, 7));
    leave.employee_id = Some("EMP-001".to_string());

    apply_duration(&mut leave, &HashSet::from([date(2024, 1, 3)])).unwrap();

    assert_eq!(leave.duration, Some(4.0));
    assert_eq!(leave.duration_type.as_deref(), Some("Days"));
    assert_eq!(leave.employee_id.as_deref(), Some("EMP-001"));
}

#[test]
fn apply_duration_requires_both_dates() {
    let mut leave = LeaveRequest {
        leave_start_date: Some(date(2024, 1, 1)),
        ..Default::default()
    };
    assert_eq!(
        apply_duration(&mut leave, &HashSet::new()),
        Err(LeaveError::MissingDate)
    );
    assert_eq!(leave.duration, None);
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100i32, 1u32..13u32, 1u32..29u32)
        .prop_filter_map("valid date", |(year, month, day)| {
            NaiveDate::from_ymd_opt(year, month, day)
        })
}

fn ordered_range() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (date_strategy(), 0i64..120).prop_map(|(start, len)| (start, start + chrono::Duration::days(len)))
}

fn weekdays_between(start: NaiveDate, end: NaiveDate) -> usize {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn no_holidays_counts_weekdays((start, end) in ordered_range()) {
        let count = count_business_days(start, end, &HashSet::new());
        prop_assert_eq!(count, weekdays_between(start, end) as f64);
    }

    #[test]
    fn single_day_is_one_or_zero(day in date_strategy()) {
        let expected = if matches!(day.weekday(), Weekday::Sat | Weekday::Sun) { 0.0 } else { 1.0 };
        prop_assert_eq!(count_business_days(day, day, &HashSet::new()), expected);
    }

    #[test]
    fn outside_holidays_have_no_effect(
        (start, end) in ordered_range(),
        before in 1i64..400,
        after in 1i64..400,
    ) {
        let holidays = HashSet::from([
            start - chrono::Duration::days(before),
            end + chrono::Duration::days(after),
        ]);
        prop_assert_eq!(
            count_business_days(start, end, &holidays),
            count_business_days(start, end, &HashSet::new())
        );
    }

    #[test]
    fn every_day_a_holiday_counts_zero((start, end) in ordered_range()) {
        let holidays: HashSet<_> = start.iter_days().take_while(|d| *d <= end).collect();
        prop_assert_eq!(count_business_days(start, end, &holidays), 0.0);
    }

    #[test]
    fn validate_matches_ordering(a in date_strategy(), b in date_strategy()) {
        let result = validate(Some(a), Some(b));
        if b < a {
            prop_assert_eq!(result, Err(LeaveError::InvertedRange));
        } else {
            prop_assert_eq!(result, Ok((a, b)));
        }
        prop_assert_eq!(validate(None, Some(b)), Err(LeaveError::MissingDate));
        prop_assert_eq!(validate(Some(a), None), Err(LeaveError::MissingDate));
    }
}
