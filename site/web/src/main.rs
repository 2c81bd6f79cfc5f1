//! Browser entry point: mounts the portfolio into `#root`.
//!
//! Build with `trunk serve` from this directory.

use leptos::prelude::*;
use portfolio_site::components::PortfolioApp;
use portfolio_site::startup;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

fn main() {
    console_error_panic_hook::set_once();

    let document = web_sys::window().and_then(|window| window.document());
    let lookup = |id: &str| {
        document
            .as_ref()?
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    };
    let mount = |root: HtmlElement| {
        leptos::mount::mount_to(root, || view! { <PortfolioApp /> }).forget();
    };

    if let Err(err) = startup::start(lookup, mount) {
        wasm_bindgen::throw_str(&err.to_string());
    }
}
