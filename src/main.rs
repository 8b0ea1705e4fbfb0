use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod state;
mod utils;

use components::AppShell;

const APP_CSS: Asset = asset!("/assets/styling/app.css");
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("[toxicfy] logger already initialised: {err}");
    }
    info!("starting Toxicfy");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Toxicfy" }
        document::Meta { name: "theme-color", content: "#10b981" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }
        document::Meta { name: "apple-mobile-web-app-title", content: "Toxicfy" }

        document::Script { src: TAILWIND_CDN }
        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
