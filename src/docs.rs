use crate::api::leave_request::{CalculateDuration, HolidayListResponse};
use crate::model::leave_request::{LeaveRequest, LeaveStatus, LeaveType};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Approval API",
        version = "1.0.0",
        description = r#"
## Leave duration service

Computes the number of business days covered by a leave request.

### 🔹 Rules
- Both the start and the end date are inclusive
- Saturdays and Sundays never count
- National holidays never count, whatever the weekday

### 📦 Response Format
- JSON-based responses
- Validation failures return `400` with a `message` field

---
Built with **Rust**, **Actix Web**, **Chrono**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::leave_request::calculate_duration,
        crate::api::leave_request::holiday_list,
    ),
    components(
        schemas(
            LeaveRequest,
            LeaveStatus,
            LeaveType,
            CalculateDuration,
            HolidayListResponse
        )
    ),
    tags(
        (name = "Leave", description = "Leave duration APIs"),
        (name = "Holiday", description = "National holiday calendar APIs"),
    )
)]
pub struct ApiDoc;
