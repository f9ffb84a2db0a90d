use common::display::grid::{Grid, GridRow};
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct ScheduleTableProps {
    pub grid: Grid,
}

/// Renders a built [`Grid`] as an HTML table: dates across the top, one
/// row per shift type.
pub struct ScheduleTable;

impl Component for ScheduleTable {
    type Message = ();
    type Properties = ScheduleTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ScheduleTable
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let grid = &ctx.props().grid;

        html! {
            <div class="schedule-table-wrap">
                <table class="schedule-table">
                    <thead>
                        <tr>
                            // blank corner above the shift-type column
                            <th></th>
                            { for grid.dates.iter().map(|date| html! { <th>{ date }</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        { for grid.rows.iter().map(render_row) }
                    </tbody>
                </table>
            </div>
        }
    }
}

fn render_row(row: &GridRow) -> Html {
    html! {
        <tr>
            <th>{ &row.shift_type }</th>
            {
                for row.cells.iter().map(|cell| html! {
                    <td>{ cell.clone().unwrap_or_default() }</td>
                })
            }
        </tr>
    }
}
