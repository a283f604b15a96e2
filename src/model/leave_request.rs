use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

use crate::errors::LeaveError;
use crate::utils::business_days;

/// Literal stored in `duration_type` once a duration has been applied.
pub const DURATION_TYPE_DAYS: &str = "Days";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveType {
    Sick,
    Vacation,
    Casual,
    Marriage,
    Paternity,
    Maternity,
    Others,
}

/// A leave request as exchanged with the storage layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": 1,
        "employeeId": "EMP-001",
        "firstName": "John",
        "lastName": "Doe",
        "email": "john.doe@company.com",
        "leaveStartDate": "2024-01-01",
        "leaveEndDate": "2024-01-07",
        "leaveType": "VACATION",
        "duration": 5.0,
        "durationType": "Days",
        "leaveStatus": "PENDING"
    })
)]
pub struct LeaveRequest {
    #[schema(example = 1)]
    pub id: Option<u64>,

    #[schema(example = "EMP-001")]
    pub employee_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,

    pub email: Option<String>,
    pub position: Option<String>,
    pub phone: Option<String>,

    pub manager_id: Option<String>,
    pub manager_name: Option<String>,
    pub manager_email: Option<String>,

    /// first day of leave, inclusive
    #[schema(example = "2024-01-01", format = "date", value_type = Option<String>)]
    pub leave_start_date: Option<NaiveDate>,

    /// last day of leave, inclusive
    #[schema(example = "2024-01-07", format = "date", value_type = Option<String>)]
    pub leave_end_date: Option<NaiveDate>,

    pub leave_reason: Option<String>,
    pub leave_type: Option<LeaveType>,

    /// number of business days covered, set by [`LeaveRequest::calculate_duration`]
    #[schema(example = 5.0)]
    pub duration: Option<f64>,
    #[schema(example = "Days")]
    pub duration_type: Option<String>,
    pub comments: Option<String>,

    pub medical_document: Option<String>,

    pub leave_status: Option<LeaveStatus>,
}

impl LeaveRequest {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            leave_start_date: Some(start),
            leave_end_date: Some(end),
            ..Default::default()
        }
    }

    /// Fills `duration` and `duration_type` from the leave dates, skipping
    /// weekends and the given national holidays.
    pub fn calculate_duration(&mut self, holidays: &HashSet<NaiveDate>) -> Result<(), LeaveError> {
        business_days::apply_duration(self, holidays)
    }
}
