//! Browser helpers for component tests.

use std::time::Duration;

use wasm_bindgen::JsCast;
use yew::html::BaseComponent;

/// Render `C` into a fresh `<div>` appended to `<body>`.
pub fn mount<C>() -> web_sys::Element
where
    C: BaseComponent,
    C::Properties: Default,
{
    let root = gloo::utils::document().create_element("div").unwrap();
    gloo::utils::body().append_child(&root).unwrap();
    yew::Renderer::<C>::with_root(root.clone()).render();
    root
}

pub async fn settle() {
    yew::platform::time::sleep(Duration::from_millis(20)).await;
}

/// One trip through the event loop: enough for a render, not for a fetch.
pub async fn tick() {
    yew::platform::time::sleep(Duration::ZERO).await;
}

/// Poll until `done` holds, for at most two seconds.
pub async fn wait_until(root: &web_sys::Element, done: impl Fn(&web_sys::Element) -> bool) {
    for _ in 0..100 {
        if done(root) {
            return;
        }
        settle().await;
    }
    panic!("timed out; DOM is {:?}", root.inner_html());
}

pub fn text(root: &web_sys::Element) -> String {
    root.text_content().unwrap_or_default()
}

pub fn select(root: &web_sys::Element) -> web_sys::HtmlSelectElement {
    root.query_selector("select").unwrap().unwrap().unchecked_into()
}

pub fn button(root: &web_sys::Element, selector: &str) -> web_sys::HtmlElement {
    root.query_selector(selector).unwrap().unwrap().unchecked_into()
}

pub fn type_into(root: &web_sys::Element, field: &str, value: &str) {
    let input: web_sys::HtmlInputElement = root
        .query_selector(&format!("input[name={field}]"))
        .unwrap()
        .unwrap()
        .unchecked_into();
    input.set_value(value);
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}
