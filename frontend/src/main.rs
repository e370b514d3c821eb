use tracing::{info, warn};
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod logging;
mod pages;
mod services;
mod store;

use components::layout::{Layout, Route};
use pages::{contacts::ContactsPage, home::HomePage, organizations::OrganizationsPage};
use store::StoreProvider;

const TAILWIND_CSS: &str = "https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css";

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Contacts => html! { <ContactsPage /> },
        Route::Organizations => html! { <OrganizationsPage /> },
        Route::NotFound => html! {
            <div class="min-h-full flex items-center justify-center">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-white">{"404"}</h1>
                    <p class="text-xl mt-4 text-gray-400">{"Page Not Found"}</p>
                </div>
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <StoreProvider>
            <BrowserRouter>
                <Layout>
                    <Switch<Route> render={switch} />
                </Layout>
            </BrowserRouter>
        </StoreProvider>
    }
}

fn load_stylesheet(href: &str) -> Result<(), JsValue> {
    let document = gloo::utils::document();
    let head = document.head().ok_or_else(|| JsValue::from_str("document has no <head>"))?;
    let link = document.create_element("link")?;
    link.set_attribute("href", href)?;
    link.set_attribute("rel", "stylesheet")?;
    head.append_child(&link)?;
    Ok(())
}

fn main() {
    let config = config::config();
    logging::init(config.log_level);
    info!(api = %config.api_base_url, "starting roster");

    if let Err(e) = load_stylesheet(TAILWIND_CSS) {
        warn!("failed to load stylesheet: {e:?}");
    }

    yew::Renderer::<App>::new().render();
}
