use yew::prelude::*;

use crate::app::Page;
use crate::components::home_navbar::HomeNavbar;
use crate::components::sidebar::Sidebar;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub on_navigate: Callback<Page>,
}

pub enum Msg {
    ToggleSidebar,
}

/// Landing view: a navbar with a hamburger button and the collapsible
/// sidebar. Sidebar visibility lives here and is handed down as props plus
/// a toggle callback.
pub struct HomePage {
    sidebar_open: bool,
}

impl Component for HomePage {
    type Message = Msg;
    type Properties = HomePageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            sidebar_open: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleSidebar => {
                self.sidebar_open = !self.sidebar_open;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_toggle = ctx.link().callback(|_: MouseEvent| Msg::ToggleSidebar);

        html! {
            <div class="home-page">
                <HomeNavbar on_menu_click={on_toggle.clone()} />
                <Sidebar
                    is_open={self.sidebar_open}
                    {on_toggle}
                    on_navigate={ctx.props().on_navigate.clone()}
                />
            </div>
        }
    }
}
