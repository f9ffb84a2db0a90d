//! State of the schedule options page.
//!
//! The page holds one request-scoped snapshot: either it is still waiting
//! for the fetch, the fetch failed, or every card's display data has been
//! built. Nothing here is mutated after the fetch resolves.

use common::display::grid::Grid;
use common::display::summary::SummaryLine;

/// Fetch lifecycle. The builders only ever run on the way into `Loaded`.
pub enum FetchState {
    Loading,
    Failed,
    Loaded(Vec<ScheduleOptionView>),
}

/// Display-ready data for one option card: the grid plus the three
/// summary groups, all derived from the fetched payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleOptionView {
    pub grid: Grid,
    pub total_shifts: Vec<SummaryLine>,
    pub closing_shifts: Vec<SummaryLine>,
    pub morning_shifts: Vec<SummaryLine>,
}

pub struct ScheduleOptionsPage {
    pub fetch_state: FetchState,

    /// Guard so the first-render fetch runs only once.
    pub loaded: bool,
}

impl ScheduleOptionsPage {
    pub fn new() -> Self {
        Self {
            fetch_state: FetchState::Loading,
            loaded: false,
        }
    }
}
