use common::display::grid::Grid;
use common::display::summary::SummaryLine;
use yew::prelude::*;

use crate::components::schedule_table::ScheduleTable;

#[derive(Properties, PartialEq)]
pub struct ScheduleCardProps {
    pub grid: Grid,
    pub total_shifts: Vec<SummaryLine>,
    pub closing_shifts: Vec<SummaryLine>,
    pub morning_shifts: Vec<SummaryLine>,
}

pub enum Msg {
    PeekEnter,
    PeekLeave,
}

/// Card describing one schedule option: the three per-employee summary
/// groups, a "Peek" button revealing the full table while hovered, and a
/// "Select schedule" placeholder.
pub struct ScheduleCard {
    peek_open: bool,
}

impl Component for ScheduleCard {
    type Message = Msg;
    type Properties = ScheduleCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { peek_open: false }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::PeekEnter => {
                let changed = !self.peek_open;
                self.peek_open = true;
                changed
            }
            Msg::PeekLeave => {
                let changed = self.peek_open;
                self.peek_open = false;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();

        html! {
            <div class="schedule-card">
                <h1 class="card-title">{ "Schedule Information" }</h1>
                <div class="card-summaries">
                    { summary_group("Number of shifts for each employee:", &props.total_shifts) }
                    { summary_group("Number of closing shifts for each employee:", &props.closing_shifts) }
                    { summary_group("Number of morning shifts for each employee:", &props.morning_shifts) }
                </div>
                <div class="card-actions">
                    <div
                        class="peek-anchor"
                        onmouseenter={link.callback(|_| Msg::PeekEnter)}
                        onmouseleave={link.callback(|_| Msg::PeekLeave)}
                    >
                        <button class="card-btn">{ "Peek" }</button>
                        {
                            if self.peek_open {
                                html! {
                                    <div class="peek-popover" style="position:absolute;z-index:100;">
                                        <ScheduleTable grid={props.grid.clone()} />
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                    <button class="card-btn">{ "Select schedule" }</button>
                </div>
            </div>
        }
    }
}

fn summary_group(heading: &str, lines: &[SummaryLine]) -> Html {
    html! {
        <div class="summary-group">
            <h3>{ heading }</h3>
            { for lines.iter().map(|line| html! { <p class="summary-line">{ line.to_string() }</p> }) }
        </div>
    }
}
