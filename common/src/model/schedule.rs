use indexmap::IndexMap;

/// Assignments for one calendar date: shift-type key -> assignment text
/// (the employee working it and the shift's period of time). Iteration
/// order follows the JSON object the service sent.
pub type DayAssignment = IndexMap<String, String>;

/// One full schedule option: date key -> that day's assignments, in
/// document order. The date keys become the columns of the rendered table.
pub type ScheduleDocument = IndexMap<String, DayAssignment>;

/// Per-employee counters for a single metric (total shifts, closing
/// shifts, or morning shifts), keyed by employee id in payload order.
pub type ShiftCountMapping = IndexMap<String, u32>;
