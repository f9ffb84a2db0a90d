//! Update function for the schedule options page.
//!
//! One message per fetch outcome. A payload that decodes but cannot be
//! turned into a complete card set (an unresolvable employee id) is
//! treated like a failed fetch: logged, then the fallback view.

use gloo_console as console;
use yew::Context;

use common::display::grid::check_uniform_shift_types;

use super::helpers::build_option_views;
use super::messages::Msg;
use super::state::{FetchState, ScheduleOptionsPage};

pub fn update(
    page: &mut ScheduleOptionsPage,
    _ctx: &Context<ScheduleOptionsPage>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::ReceiveOptions(response) => {
            // Shift types that only appear after the first date never make
            // it into a table; say so instead of dropping them silently.
            for (option_id, schedule) in &response.schedules_info.schedules {
                if let Err(err) = check_uniform_shift_types(schedule) {
                    console::warn!(format!("schedule option {option_id}: {err}"));
                }
            }

            page.fetch_state = match build_option_views(&response) {
                Ok(options) => FetchState::Loaded(options),
                Err(err) => {
                    console::error!(format!("discarding schedule payload: {err}"));
                    FetchState::Failed
                }
            };
            true
        }
        Msg::FetchFailed => {
            page.fetch_state = FetchState::Failed;
            true
        }
    }
}
