use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Directory of all employees a schedule option may reference, keyed by
/// employee id in payload order.
pub type EmployeeDirectory = IndexMap<String, Employee>;

/// One employee record as published by the scheduling service.
///
/// Only `employee_name` is needed for display. The remaining fields mirror
/// the rest of the service payload and are defaulted when absent, so a
/// partial record still renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Display name shown in summary lines ("{name} works {n} shifts.").
    pub employee_name: String,
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub employee_priority: String,
    #[serde(default)]
    pub employee_status: String,
    #[serde(default)]
    pub employee_position: String,
}
