//! Schedule options page: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic and view
//! rendering.
//!
//! Responsibilities
//! - Issue the single GET for the full schedule options payload on first
//!   render and hand the outcome to `update` as a message.
//! - Render the fallback view ("No schedules yet") whenever that fetch
//!   fails or its payload is unusable; no grid or summary is built in that
//!   case.

use gloo_console as console;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::options::ScheduleOptionsResponse;

use crate::api;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ScheduleOptionsProps;
pub use state::ScheduleOptionsPage;

impl Component for ScheduleOptionsPage {
    type Message = Msg;
    type Properties = ScheduleOptionsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ScheduleOptionsPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let url = api::schedule_options_url(&ctx.props().base_url);
            let link = ctx.link().clone();
            spawn_local(async move {
                let response = Request::get(&url).send().await;

                match response {
                    Ok(resp) if resp.ok() => {
                        match resp.json::<ScheduleOptionsResponse>().await {
                            Ok(payload) => link.send_message(Msg::ReceiveOptions(payload)),
                            Err(err) => {
                                console::error!(format!("undecodable schedule payload: {err}"));
                                link.send_message(Msg::FetchFailed);
                            }
                        }
                    }
                    Ok(resp) => {
                        console::error!("schedule options request failed", resp.status());
                        link.send_message(Msg::FetchFailed);
                    }
                    Err(err) => {
                        console::error!(format!("schedule options request failed: {err}"));
                        link.send_message(Msg::FetchFailed);
                    }
                }
            });
        }
    }
}
