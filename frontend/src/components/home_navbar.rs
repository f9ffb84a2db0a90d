use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HomeNavbarProps {
    /// Fired by the hamburger button; the parent owns the sidebar state.
    pub on_menu_click: Callback<MouseEvent>,
}

pub struct HomeNavbar;

impl Component for HomeNavbar {
    type Message = ();
    type Properties = HomeNavbarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        HomeNavbar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="navbar home-navbar">
                <button
                    class="menu-btn"
                    title="Toggle sidebar"
                    onclick={ctx.props().on_menu_click.clone()}
                >
                    <span class="menu-bar"></span>
                    <span class="menu-bar"></span>
                    <span class="menu-bar"></span>
                </button>
                <h1 class="page-title">{ "Home Page" }</h1>
            </div>
        }
    }
}
