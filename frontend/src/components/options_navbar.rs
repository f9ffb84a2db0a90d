use gloo_console as console;
use gloo_net::http::Request;
use yew::prelude::*;

use crate::api;
use crate::app::Page;
use crate::helpers::show_toast;
use crate::top_sheet::{close_top_sheet, open_top_sheet, TopSheet};

#[derive(Properties, PartialEq)]
pub struct OptionsNavbarProps {
    pub on_navigate: Callback<Page>,
    pub base_url: String,
}

pub enum Msg {
    CreateSchedules,
    CreateFinished,
}

/// Navbar of the schedule options page. "Create Schedule" opens the
/// placeholder modal and asks the service to generate a fresh set of
/// options; the outcome is toasted and logged, nothing on this page
/// re-fetches automatically.
pub struct OptionsNavbar {
    create_modal_ref: NodeRef,
}

impl Component for OptionsNavbar {
    type Message = Msg;
    type Properties = OptionsNavbarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            create_modal_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CreateSchedules => {
                open_top_sheet(self.create_modal_ref.clone());

                let url = api::create_schedules_url(&ctx.props().base_url);
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match Request::get(&url).send().await {
                        Ok(response) if response.ok() => {
                            console::log!("schedules created");
                            show_toast("Schedule creation started.");
                        }
                        Ok(response) => {
                            console::error!("failed to create schedules", response.status());
                            show_toast("Failed to create schedules.");
                        }
                        Err(err) => {
                            console::error!(format!("failed to create schedules: {err}"));
                            show_toast("Failed to create schedules.");
                        }
                    }
                    link.send_message(Msg::CreateFinished);
                });
                false
            }
            Msg::CreateFinished => {
                close_top_sheet(self.create_modal_ref.clone());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();

        html! {
            <div>
                <nav class="navbar options-navbar">
                    <h1 class="page-title">{ "Schedule Options" }</h1>
                    <div class="navbar-actions">
                        <button
                            class="nav-btn"
                            onclick={props.on_navigate.reform(|_: MouseEvent| Page::Home)}
                        >
                            { "Home Page" }
                        </button>
                        <button class="nav-btn" onclick={link.callback(|_| Msg::CreateSchedules)}>
                            { "Create Schedule" }
                        </button>
                        // Employee management is not built yet; the entry keeps its place.
                        <button class="nav-btn">{ "Employees" }</button>
                    </div>
                </nav>
                <TopSheet node_ref={self.create_modal_ref.clone()}>
                    <div class="create-modal">
                        <h3>{ "Creating new schedule options..." }</h3>
                    </div>
                </TopSheet>
            </div>
        }
    }
}
