//! Per-employee shift-count summaries.
//!
//! Each schedule option carries three count mappings (total, closing,
//! morning). [`build_summary_lines`] turns one of them into the list of
//! lines a card renders, resolving employee ids to display names through
//! the shared directory.

use std::fmt;

use thiserror::Error;

use crate::model::employee::EmployeeDirectory;
use crate::model::schedule::ShiftCountMapping;

/// One line of a summary group, rendered as
/// "`{employee_name}` works `{count}` `{label}`.".
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    pub employee_name: String,
    pub count: u32,
    pub label: String,
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} works {} {}.", self.employee_name, self.count, self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SummaryError {
    /// A counted employee id is absent from the directory.
    #[error("employee {employee_id} appears in the shift counts but not in the employee directory")]
    MissingEmployee { employee_id: String },
}

/// Builds one summary line per entry of `counts`, in insertion order.
///
/// `label` is the metric name rendered after the count ("shifts",
/// "closing shifts", "morning shifts"). Every counted employee id must
/// resolve through `employees`; an unknown id fails the whole build rather
/// than producing a partial list.
pub fn build_summary_lines(
    counts: &ShiftCountMapping,
    employees: &EmployeeDirectory,
    label: &str,
) -> Result<Vec<SummaryLine>, SummaryError> {
    counts
        .iter()
        .map(|(employee_id, count)| {
            let employee =
                employees
                    .get(employee_id)
                    .ok_or_else(|| SummaryError::MissingEmployee {
                        employee_id: employee_id.clone(),
                    })?;
            Ok(SummaryLine {
                employee_name: employee.employee_name.clone(),
                count: *count,
                label: label.to_string(),
            })
        })
        .collect()
}
