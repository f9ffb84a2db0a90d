//! Overlay container shown and hidden by toggling a `show` class on its
//! root node, addressed through a `NodeRef` so any component can drive it.

use js_sys::Function;
use uuid::Uuid;
use yew::{html, Component, Context, Html, NodeRef, Properties};

pub struct TopSheet {
    id: String,
}

#[derive(Properties, PartialEq)]
pub struct TopSheetProps {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = TopSheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("top-sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    toggle_show_class(top_sheet_ref, "add");
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    toggle_show_class(top_sheet_ref, "remove");
}

// The class flip runs through a delayed JS snippet so the sheet's CSS
// transition starts after the node is in the DOM.
fn toggle_show_class(top_sheet_ref: NodeRef, method: &str) {
    if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
        let func = Function::new_no_args(&format!(
            "document.querySelector('#{}').classList.{}('show')",
            top_sheet.id(),
            method
        ));
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50);
        }
    }
}
