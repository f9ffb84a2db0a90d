use crate::app::App;

mod api;
mod app;
mod components;
mod helpers;
mod pages;
mod top_sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
