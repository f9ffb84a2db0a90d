//! Wire types for the schedule options endpoint.
//!
//! The payload carries every generated schedule option plus the metadata
//! needed to describe each one: the employee directory shared by all
//! options, the schedule documents themselves, and three per-employee shift
//! counters per option. Option ids tie `schedules` and `additional_data`
//! together.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::employee::EmployeeDirectory;
use crate::model::schedule::{ScheduleDocument, ShiftCountMapping};

/// Top-level body of `GET {base}/create-and-get-schedule-options`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOptionsResponse {
    pub schedules_info: SchedulesInfo,
    /// Shift counters per schedule option, keyed by the same option ids as
    /// `schedules_info.schedules`. Its iteration order drives the order the
    /// option cards are rendered in.
    pub additional_data: IndexMap<String, ScheduleStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulesInfo {
    pub employees: EmployeeDirectory,
    pub schedules: IndexMap<String, ScheduleDocument>,
}

/// The three independent per-employee metrics attached to one option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStats {
    pub number_of_shifts: ShiftCountMapping,
    pub number_closing_shifts: ShiftCountMapping,
    pub number_morning_shifts: ShiftCountMapping,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "schedules_info": {
            "employees": {
                "e2": {
                    "employee_name": "Bob",
                    "employee_id": "e2",
                    "employee_priority": "medium",
                    "employee_status": "senior_employee",
                    "employee_position": "full_timer"
                },
                "e1": { "employee_name": "Alice" }
            },
            "schedules": {
                "option-1": {
                    "2024-01-01": { "morning": "Alice 06:00-14:00", "closing": "Bob 16:00-00:00" },
                    "2024-01-02": { "morning": "Bob 06:00-14:00", "closing": "Alice 16:00-00:00" }
                }
            }
        },
        "additional_data": {
            "option-1": {
                "number_of_shifts": { "e2": 2, "e1": 2 },
                "number_closing_shifts": { "e1": 1, "e2": 1 },
                "number_morning_shifts": { "e1": 1, "e2": 1 }
            }
        }
    }"#;

    #[test]
    fn deserializes_service_payload() {
        let response: ScheduleOptionsResponse = serde_json::from_str(PAYLOAD).unwrap();

        let employees = &response.schedules_info.employees;
        assert_eq!(employees["e1"].employee_name, "Alice");
        assert_eq!(employees["e2"].employee_position, "full_timer");
        // Fields missing from a record fall back to empty strings.
        assert_eq!(employees["e1"].employee_position, "");

        let schedule = &response.schedules_info.schedules["option-1"];
        assert_eq!(schedule["2024-01-01"]["morning"], "Alice 06:00-14:00");

        let stats = &response.additional_data["option-1"];
        assert_eq!(stats.number_of_shifts["e1"], 2);
        assert_eq!(stats.number_closing_shifts["e2"], 1);
    }

    #[test]
    fn maps_keep_json_object_order() {
        let response: ScheduleOptionsResponse = serde_json::from_str(PAYLOAD).unwrap();

        let employee_ids: Vec<&String> = response.schedules_info.employees.keys().collect();
        assert_eq!(employee_ids, ["e2", "e1"]);

        let counted: Vec<&String> = response.additional_data["option-1"]
            .number_of_shifts
            .keys()
            .collect();
        assert_eq!(counted, ["e2", "e1"]);
    }
}
