use yew::prelude::*;

use crate::app::Page;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub is_open: bool,
    pub on_toggle: Callback<MouseEvent>,
    pub on_navigate: Callback<Page>,
}

/// Slide-out navigation panel. Visibility is owned by the parent page and
/// arrives through `is_open`; the panel itself is stateless.
pub struct Sidebar;

impl Component for Sidebar {
    type Message = ();
    type Properties = SidebarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Sidebar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let class = if props.is_open {
            "sidebar open"
        } else {
            "sidebar"
        };

        html! {
            <div {class}>
                <button class="sidebar-close" onclick={props.on_toggle.clone()}>
                    { "\u{00d7}" }
                </button>
                <nav class="sidebar-nav">
                    <a
                        class="sidebar-link"
                        onclick={props.on_navigate.reform(|_: MouseEvent| Page::Home)}
                    >
                        { "Home Page" }
                    </a>
                    <a
                        class="sidebar-link"
                        onclick={props.on_navigate.reform(|_: MouseEvent| Page::ScheduleOptions)}
                    >
                        { "Schedule Options" }
                    </a>
                    // Employee management is not built yet; the entry keeps its place.
                    <button class="sidebar-link">{ "Employees" }</button>
                </nav>
            </div>
        }
    }
}
