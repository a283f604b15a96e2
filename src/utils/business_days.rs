use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::{debug, info};

use crate::errors::LeaveError;
use crate::model::leave_request::{DURATION_TYPE_DAYS, LeaveRequest};

/// Returns true for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Checks that both leave dates are present and in order.
pub fn validate(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<(NaiveDate, NaiveDate), LeaveError> {
    let (Some(start), Some(end)) = (start, end) else {
        return Err(LeaveError::MissingDate);
    };

    if end < start {
        return Err(LeaveError::InvertedRange);
    }

    Ok((start, end))
}

/// Counts the dates in `[start, end]` (both inclusive) that are neither a
/// weekend day nor in `holidays`.
///
/// An inverted range yields 0.
pub fn count_business_days(start: NaiveDate, end: NaiveDate, holidays: &HashSet<NaiveDate>) -> f64 {
    start
        .iter_days()
        .take_while(|date| *date <= end)
        .filter(|date| !is_weekend(*date) && !holidays.contains(date))
        .count() as f64
}

/// Validates the leave dates and writes the business-day count onto the
/// record. The record is left untouched on error.
pub fn apply_duration(
    leave: &mut LeaveRequest,
    holidays: &HashSet<NaiveDate>,
) -> Result<(), LeaveError> {
    let (start, end) = validate(leave.leave_start_date, leave.leave_end_date).inspect_err(|e| {
        info!(leave_id = ?leave.id, error = %e, "Leave duration rejected");
    })?;

    let days = count_business_days(start, end, holidays);
    debug!(leave_id = ?leave.id, %start, %end, days, "Leave duration calculated");

    leave.duration = Some(days);
    leave.duration_type = Some(DURATION_TYPE_DAYS.to_string());
    Ok(())
}
