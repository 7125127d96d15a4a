//! Browser app: wires the fetch-or-fallback pipeline to the live DOM.
//!
//! Single-threaded and event-driven. The content fetch is the only thing the
//! render pass waits on; the hero background load is fire-and-forget and
//! swaps in whenever it completes.

mod dom;
mod fetch;
mod hero;

use wasm_bindgen_futures::spawn_local;

use crate::render::render_page;
use crate::router::{route, PageKind};

/// Entry point, invoked from the wasm start hook in `main.rs`.
pub fn start() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if let Some(body) = document.body() {
        let _ = body.class_list().add_1("loaded");
    }

    let path = window.location().pathname().unwrap_or_default();
    let kind = route(&path);

    spawn_local(async move {
        let doc = fetch::load_document().await;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let mut surface = dom::DomSurface::new(document);
        render_page(&doc, kind, &mut surface);

        if kind == PageKind::Landing {
            hero::apply_hero_background(&doc.landing_page.hero.background_image);
        }
    });
}
