pub mod api;
pub mod config;
pub mod docs;
pub mod errors;
pub mod holidays;
pub mod model;
pub mod routes;
pub mod utils;

pub use errors::LeaveError;
pub use holidays::HolidayCalendar;
pub use model::leave_request::{LeaveRequest, LeaveStatus, LeaveType};
