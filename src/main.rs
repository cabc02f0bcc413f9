use std::rc::Rc;

use artifact_files::app::App;
use artifact_files::core::frame::{BrowserFrame, HostFrame};
use artifact_files::core::{ArtifactClient, JsArtifactClient, MemoryClient};
use artifact_files::utils::console;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// The host page's SDK object if present, otherwise the demo repository.
fn select_client() -> Rc<dyn ArtifactClient> {
    match JsArtifactClient::from_window() {
        Some(client) => {
            console::log("Using host artifact client");
            Rc::new(client)
        }
        None => {
            console::log("No host artifact client; using demo repository");
            Rc::new(MemoryClient::demo())
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let client = select_client();
    let frame: Rc<dyn HostFrame> = Rc::new(BrowserFrame::from_location());

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, move || view! { <App client=client frame=frame /> }).forget();
}
