//! Endpoint configuration for the scheduling service.
//!
//! The options path has moved a few times on the service side
//! (`get-schedules-solutions`, `create_and_get_schedule_options`, ...), so
//! every request URL is assembled here and nowhere else.

/// Development default; pages accept an override through their `base_url`
/// prop.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const SCHEDULE_OPTIONS_PATH: &str = "create-and-get-schedule-options";
const CREATE_SCHEDULES_PATH: &str = "create-schedules";

/// URL of the endpoint returning every generated schedule option.
pub fn schedule_options_url(base_url: &str) -> String {
    join(base_url, SCHEDULE_OPTIONS_PATH)
}

/// URL of the endpoint that kicks off schedule generation.
pub fn create_schedules_url(base_url: &str) -> String {
    join(base_url, CREATE_SCHEDULES_PATH)
}

fn join(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}
