use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Displays a transient notification at the bottom of the screen and
/// removes it after a few seconds. Used for outcomes that deserve more
/// than a console line but not a dedicated view (e.g. the create-schedules
/// trigger).
pub fn show_toast(message: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
            toast.set_text_content(Some(message));
            let html_toast: HtmlElement = toast.unchecked_into();
            let style = html_toast.style();
            style.set_property("position", "fixed").ok();
            style.set_property("bottom", "20px").ok();
            style.set_property("left", "50%").ok();
            style.set_property("transform", "translateX(-50%)").ok();
            style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
            style.set_property("color", "#fff").ok();
            style.set_property("padding", "10px 20px").ok();
            style.set_property("border-radius", "4px").ok();
            style.set_property("z-index", "10000").ok();

            if body.append_child(&html_toast).is_ok() {
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(3000).await;
                    if let Some(parent) = html_toast.parent_node() {
                        parent.remove_child(&html_toast).ok();
                    }
                });
            }
        }
    }
}
