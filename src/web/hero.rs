//! Out-of-band hero background load.
//!
//! Probes the image off-DOM and applies the resulting background once the
//! probe settles. Exactly two outcomes, no timeout, no cancellation; a page
//! navigation discards in-flight work via full reload.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::hero::{hero_background_css, HeroOutcome, HERO_LOADED_CLASS};
use crate::slots::id;

pub(super) fn apply_hero_background(url: &str) {
    let owned = url.to_string();
    probe_image(url, move |outcome| {
        if outcome == HeroOutcome::Failed {
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "Failed to load hero background image: {owned}"
            )));
        }
        apply_outcome(outcome, &owned);
    });
}

/// Starts a fire-and-forget image load and delivers the completion variant
/// through `on_done`. The callback runs exactly once.
pub(super) fn probe_image<F>(url: &str, on_done: F)
where
    F: FnOnce(HeroOutcome) + 'static,
{
    let image = match web_sys::HtmlImageElement::new() {
        Ok(image) => image,
        Err(_) => {
            on_done(HeroOutcome::Failed);
            return;
        }
    };

    // onload and onerror both need the callback; whichever fires first takes it.
    let done = Rc::new(RefCell::new(Some(
        Box::new(on_done) as Box<dyn FnOnce(HeroOutcome)>
    )));

    let done_ok = Rc::clone(&done);
    let onload = Closure::wrap(Box::new(move || {
        if let Some(f) = done_ok.borrow_mut().take() {
            f(HeroOutcome::Loaded);
        }
    }) as Box<dyn FnMut()>);
    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let done_err = Rc::clone(&done);
    let onerror = Closure::wrap(Box::new(move || {
        if let Some(f) = done_err.borrow_mut().take() {
            f(HeroOutcome::Failed);
        }
    }) as Box<dyn FnMut()>);
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    image.set_src(url);
}

fn apply_outcome(outcome: HeroOutcome, url: &str) {
    let Some(section) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id::HERO_SECTION))
    else {
        return;
    };

    let css = hero_background_css(outcome, url);
    let _ = section.set_attribute("style", &format!("background-image: {css};"));
    let _ = section.class_list().add_1(HERO_LOADED_CLASS);
}
