use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::{Display, Error};

/// Validation failures raised while computing a leave duration.
///
/// These are deterministic input errors: the caller must reject the leave
/// request instead of retrying or substituting defaults.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum LeaveError {
    #[display(fmt = "Leave start and end dates cannot be null")]
    MissingDate,

    #[display(fmt = "Leave end date cannot be before the start date")]
    InvertedRange,
}

impl ResponseError for LeaveError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "message": self.to_string()
        }))
    }
}
