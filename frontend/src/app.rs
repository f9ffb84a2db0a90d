use yew::{html, Component, Context, Html};

use crate::pages::home::HomePage;
use crate::pages::schedule_options::ScheduleOptionsPage;

/// Top-level views reachable from the navigation chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    ScheduleOptions,
}

pub enum Msg {
    Navigate(Page),
}

pub struct App {
    page: Page,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { page: Page::Home }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) => {
                let changed = self.page != page;
                self.page = page;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = ctx.link().callback(Msg::Navigate);
        match self.page {
            Page::Home => html! { <HomePage {on_navigate} /> },
            Page::ScheduleOptions => html! { <ScheduleOptionsPage {on_navigate} /> },
        }
    }
}
