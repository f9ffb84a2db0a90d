//! Builds the per-card display data out of a fetched payload.

use common::display::grid::build_grid;
use common::display::summary::{build_summary_lines, SummaryError};
use common::model::options::ScheduleOptionsResponse;

use super::state::ScheduleOptionView;

/// Builds one [`ScheduleOptionView`] per entry of `additional_data`, in
/// payload order.
///
/// An option whose schedule document is missing from `schedules` still
/// gets a card; its table is just empty. An employee id that the
/// directory cannot resolve fails the whole build, so the caller falls
/// back to the no-data view rather than rendering a partial card set.
pub fn build_option_views(
    response: &ScheduleOptionsResponse,
) -> Result<Vec<ScheduleOptionView>, SummaryError> {
    let employees = &response.schedules_info.employees;

    response
        .additional_data
        .iter()
        .map(|(option_id, stats)| {
            let grid = response
                .schedules_info
                .schedules
                .get(option_id)
                .map(build_grid)
                .unwrap_or_default();

            Ok(ScheduleOptionView {
                grid,
                total_shifts: build_summary_lines(&stats.number_of_shifts, employees, "shifts")?,
                closing_shifts: build_summary_lines(
                    &stats.number_closing_shifts,
                    employees,
                    "closing shifts",
                )?,
                morning_shifts: build_summary_lines(
                    &stats.number_morning_shifts,
                    employees,
                    "morning shifts",
                )?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::employee::{Employee, EmployeeDirectory};
    use common::model::options::{ScheduleStats, SchedulesInfo};
    use common::model::schedule::{DayAssignment, ScheduleDocument, ShiftCountMapping};

    fn employee(name: &str) -> Employee {
        Employee {
            employee_name: name.to_string(),
            employee_id: String::new(),
            employee_priority: String::new(),
            employee_status: String::new(),
            employee_position: String::new(),
        }
    }

    fn response() -> ScheduleOptionsResponse {
        let employees = EmployeeDirectory::from_iter([
            ("e1".to_string(), employee("Alice")),
            ("e2".to_string(), employee("Bob")),
        ]);

        let schedule = ScheduleDocument::from_iter([(
            "2024-01-01".to_string(),
            DayAssignment::from_iter([("morning".to_string(), "Alice 06:00-14:00".to_string())]),
        )]);

        let stats = ScheduleStats {
            number_of_shifts: ShiftCountMapping::from_iter([
                ("e1".to_string(), 1),
                ("e2".to_string(), 0),
            ]),
            number_closing_shifts: ShiftCountMapping::new(),
            number_morning_shifts: ShiftCountMapping::from_iter([("e1".to_string(), 1)]),
        };

        ScheduleOptionsResponse {
            schedules_info: SchedulesInfo {
                employees,
                schedules: [("option-1".to_string(), schedule)].into_iter().collect(),
            },
            additional_data: [("option-1".to_string(), stats)].into_iter().collect(),
        }
    }

    #[test]
    fn builds_one_card_per_option() {
        let views = build_option_views(&response()).unwrap();

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].grid.dates, ["2024-01-01"]);
        assert_eq!(views[0].total_shifts.len(), 2);
        assert!(views[0].closing_shifts.is_empty());
        assert_eq!(views[0].morning_shifts[0].to_string(), "Alice works 1 morning shifts.");
    }

    #[test]
    fn option_without_schedule_document_gets_an_empty_grid() {
        let mut response = response();
        response.schedules_info.schedules.clear();

        let views = build_option_views(&response).unwrap();

        assert_eq!(views.len(), 1);
        assert!(views[0].grid.dates.is_empty());
        assert!(views[0].grid.rows.is_empty());
    }

    #[test]
    fn unresolvable_employee_fails_the_build() {
        let mut response = response();
        response.schedules_info.employees.shift_remove("e2");

        assert!(build_option_views(&response).is_err());
    }
}
