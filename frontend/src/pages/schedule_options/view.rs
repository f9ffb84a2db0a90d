//! View rendering for the schedule options page.
//!
//! Three shapes: nothing below the navbar while the fetch is in flight, a
//! single "No schedules yet" element when it failed, and one card per
//! schedule option when it succeeded.

use yew::prelude::*;

use crate::components::options_navbar::OptionsNavbar;
use crate::components::schedule_card::ScheduleCard;

use super::state::{FetchState, ScheduleOptionView, ScheduleOptionsPage};

pub fn view(page: &ScheduleOptionsPage, ctx: &Context<ScheduleOptionsPage>) -> Html {
    let props = ctx.props();

    html! {
        <div class="schedule-options-page">
            <OptionsNavbar
                on_navigate={props.on_navigate.clone()}
                base_url={props.base_url.clone()}
            />
            {
                match &page.fetch_state {
                    FetchState::Loading => html! {},
                    FetchState::Failed => html! {
                        <div class="no-schedules">
                            <p>{ "No schedules yet" }</p>
                        </div>
                    },
                    FetchState::Loaded(options) => html! {
                        <div class="card-grid">
                            { for options.iter().map(render_card) }
                        </div>
                    },
                }
            }
        </div>
    }
}

fn render_card(option: &ScheduleOptionView) -> Html {
    html! {
        <ScheduleCard
            grid={option.grid.clone()}
            total_shifts={option.total_shifts.clone()}
            closing_shifts={option.closing_shifts.clone()}
            morning_shifts={option.morning_shifts.clone()}
        />
    }
}
