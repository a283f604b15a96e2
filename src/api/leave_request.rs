use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::holidays::HolidayCalendar;
use crate::model::leave_request::LeaveRequest;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculateDuration {
    pub leave_request: LeaveRequest,
    /// Extra holidays to exclude on top of the configured national holidays
    #[serde(default)]
    #[schema(example = json!(["2024-01-03"]), value_type = Vec<String>)]
    pub national_holidays: Vec<NaiveDate>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "data": ["2024-01-01", "2024-12-25"],
    "total": 2
}))]
pub struct HolidayListResponse {
    #[schema(value_type = Vec<String>)]
    pub data: Vec<NaiveDate>,
    #[schema(example = 2)]
    pub total: usize,
}

/* =========================
Calculate leave duration
========================= */
/// Swagger doc for calculate_duration endpoint
#[utoipa::path(
    post,
    path = "/api/v1/leave/duration",
    request_body(
        content = CalculateDuration,
        description = "Leave request and optional extra holidays",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Leave request with duration filled in", body = LeaveRequest),
        (status = 400, description = "Missing or inverted leave dates", body = Object, example = json!({
            "message": "Leave end date cannot be before the start date"
        }))
    ),
    tag = "Leave"
)]
#[instrument(
    name = "leave_duration",
    skip(calendar, payload),
    fields(leave_id = ?payload.leave_request.id)
)]
pub async fn calculate_duration(
    calendar: web::Data<HolidayCalendar>,
    payload: web::Json<CalculateDuration>,
) -> actix_web::Result<impl Responder> {
    let CalculateDuration {
        mut leave_request,
        national_holidays,
    } = payload.into_inner();

    if national_holidays.is_empty() {
        leave_request.calculate_duration(calendar.dates())?;
    } else {
        let holidays = calendar.merged_with(national_holidays);
        leave_request.calculate_duration(holidays.dates())?;
    }

    Ok(HttpResponse::Ok().json(leave_request))
}

/// for listing the configured national holidays
#[utoipa::path(
    get,
    path = "/api/v1/holidays",
    responses(
        (status = 200, description = "Configured national holidays, ascending", body = HolidayListResponse)
    ),
    tag = "Holiday"
)]
pub async fn holiday_list(calendar: web::Data<HolidayCalendar>) -> impl Responder {
    let data = calendar.sorted();
    let total = data.len();
    HttpResponse::Ok().json(HolidayListResponse { data, total })
}
