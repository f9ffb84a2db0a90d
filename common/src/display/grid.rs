//! Schedule grid construction.
//!
//! Turns one [`ScheduleDocument`] into the row/column structure the table
//! component renders: columns are the document's dates in order, rows are
//! the shift types of the *first* date. A cell holds the assignment text
//! for its (shift type, date) pair, or nothing when the date has no such
//! shift type.
//!
//! Building never fails. Dates whose assignments diverge from the first
//! date's shift-type set degrade to empty cells (missing keys) or are left
//! out of the table entirely (extra keys); [`check_uniform_shift_types`]
//! exists so callers can surface that divergence instead of losing it
//! silently.

use thiserror::Error;

use crate::model::schedule::ScheduleDocument;

/// Display-ready grid for one schedule option.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Grid {
    /// Column headers: the document's date keys in order.
    pub dates: Vec<String>,
    /// One row per canonical shift type, in first-date order.
    pub rows: Vec<GridRow>,
}

/// One table row: a shift-type label and one cell per date.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub shift_type: String,
    /// `None` renders as an empty cell: that date has no such shift type.
    pub cells: Vec<Option<String>>,
}

/// A date whose shift-type keys differ from the first date's.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("shift types for {date} do not match the first date of the schedule")]
pub struct GridSchemaError {
    pub date: String,
}

/// Builds the grid for `schedule`.
///
/// The first date's shift-type keys form the canonical row set. An empty
/// document yields an empty grid.
pub fn build_grid(schedule: &ScheduleDocument) -> Grid {
    let Some(first_day) = schedule.values().next() else {
        return Grid::default();
    };

    let dates = schedule.keys().cloned().collect();
    let rows = first_day
        .keys()
        .map(|shift_type| GridRow {
            shift_type: shift_type.clone(),
            cells: schedule
                .values()
                .map(|day| day.get(shift_type).cloned())
                .collect(),
        })
        .collect();

    Grid { dates, rows }
}

/// Checks that every date carries the same shift-type keys as the first
/// one, reporting the first date that does not.
///
/// [`build_grid`] stays usable on a non-uniform document; this check lets
/// the caller log what the table will not show.
pub fn check_uniform_shift_types(schedule: &ScheduleDocument) -> Result<(), GridSchemaError> {
    let mut days = schedule.iter();
    let Some((_, first_day)) = days.next() else {
        return Ok(());
    };

    for (date, day) in days {
        let same_keys = day.len() == first_day.len() && first_day.keys().all(|k| day.contains_key(k));
        if !same_keys {
            return Err(GridSchemaError { date: date.clone() });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::schedule::DayAssignment;

    fn day(entries: &[(&str, &str)]) -> DayAssignment {
        entries
            .iter()
            .map(|(shift_type, assignment)| (shift_type.to_string(), assignment.to_string()))
            .collect()
    }

    fn two_day_schedule() -> ScheduleDocument {
        ScheduleDocument::from_iter([
            (
                "2024-01-01".to_string(),
                day(&[("morning", "Alice 06:00-14:00"), ("evening", "Bob 14:00-22:00")]),
            ),
            (
                "2024-01-02".to_string(),
                day(&[("morning", "Bob 06:00-14:00"), ("evening", "Alice 14:00-22:00")]),
            ),
        ])
    }

    #[test]
    fn headers_and_rows_follow_document_order() {
        let grid = build_grid(&two_day_schedule());

        assert_eq!(grid.dates, ["2024-01-01", "2024-01-02"]);
        let labels: Vec<&str> = grid.rows.iter().map(|r| r.shift_type.as_str()).collect();
        assert_eq!(labels, ["morning", "evening"]);
        assert_eq!(
            grid.rows[0].cells,
            [
                Some("Alice 06:00-14:00".to_string()),
                Some("Bob 06:00-14:00".to_string())
            ]
        );
    }

    #[test]
    fn missing_shift_type_yields_empty_cell() {
        let mut schedule = two_day_schedule();
        schedule["2024-01-02"].shift_remove("evening");

        let grid = build_grid(&schedule);

        assert_eq!(grid.rows[1].shift_type, "evening");
        assert_eq!(
            grid.rows[1].cells,
            [Some("Bob 14:00-22:00".to_string()), None]
        );
    }

    #[test]
    fn extra_shift_type_is_not_rendered() {
        let mut schedule = two_day_schedule();
        schedule["2024-01-02"].insert("night".to_string(), "Carol 22:00-06:00".to_string());

        let grid = build_grid(&schedule);

        assert!(grid.rows.iter().all(|row| row.shift_type != "night"));
        assert_eq!(grid.rows.len(), 2);
    }

    #[test]
    fn build_grid_is_idempotent() {
        let schedule = two_day_schedule();
        assert_eq!(build_grid(&schedule), build_grid(&schedule));
    }

    #[test]
    fn empty_document_yields_empty_grid() {
        let grid = build_grid(&ScheduleDocument::new());
        assert!(grid.dates.is_empty());
        assert!(grid.rows.is_empty());
    }

    #[test]
    fn uniform_schedule_passes_schema_check() {
        assert_eq!(check_uniform_shift_types(&two_day_schedule()), Ok(()));
        assert_eq!(check_uniform_shift_types(&ScheduleDocument::new()), Ok(()));
    }

    #[test]
    fn schema_check_reports_first_divergent_date() {
        let mut schedule = two_day_schedule();
        schedule["2024-01-02"].insert("night".to_string(), "Carol 22:00-06:00".to_string());
        schedule.insert("2024-01-03".to_string(), day(&[("morning", "Alice")]));

        let err = check_uniform_shift_types(&schedule).unwrap_err();
        assert_eq!(err.date, "2024-01-02");
    }
}
