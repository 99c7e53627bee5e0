//! In-page anchor navigation.
//!
//! Fragment links get their default jump suppressed and an eased scroll to
//! the target instead (1.5 s, power2-in-out, 80 px header offset). A link
//! whose fragment has no matching element still suppresses the default but
//! scrolls nowhere — that quirk is load-bearing for the observed behavior
//! and is kept as-is.

use instant::Instant;
use portfolio_core::constants::SCROLL_DURATION_SEC;
use portfolio_core::{anchor_scroll_plan, Ease, Tween};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

pub fn mount(document: &web::Document) {
    let Ok(links) = document.query_selector_all(r##"a[href^="#"]"##) else {
        return;
    };
    // One scroll tween at a time; a new click cancels the pending frame.
    let active: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    for i in 0..links.length() {
        let Some(el) = links.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let link = el.clone();
        let active = active.clone();
        dom::listen_forever(el.as_ref(), "click", move |ev: web::Event| {
            ev.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(id) = href.strip_prefix('#') else {
                return;
            };
            if id.is_empty() {
                return;
            }
            let Some(document) = dom::window_document() else {
                return;
            };
            let Some(window) = web::window() else { return };
            let from = window.scroll_y().unwrap_or(0.0) as f32;
            let target_top = document
                .get_element_by_id(id)
                .map(|t| t.get_bounding_client_rect().top() as f32 + from);
            match anchor_scroll_plan(target_top) {
                Some(dest) => start_scroll(&window, from, dest, active.clone()),
                // Missing target: default stays suppressed, nothing scrolls.
                None => log::warn!("anchor #{id} has no target"),
            }
        });
    }
}

fn start_scroll(window: &web::Window, from: f32, dest: f32, active: Rc<Cell<Option<i32>>>) {
    if let Some(id) = active.take() {
        _ = window.cancel_animation_frame(id);
    }

    let mut tween = Tween::new(from, dest, SCROLL_DURATION_SEC, Ease::Power2InOut);
    let mut last = Instant::now();

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let active_for_tick = active.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let now = Instant::now();
        let dt = (now - last).as_secs_f32();
        last = now;
        let y = tween.step(dt);
        if let Some(w) = web::window() {
            w.scroll_to_with_x_and_y(0.0, y as f64);
            if tween.finished() {
                active_for_tick.set(None);
            } else if let Ok(id) = w.request_animation_frame(
                tick_clone.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            ) {
                active_for_tick.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));
    if let Ok(id) =
        window.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
    {
        active.set(Some(id));
    }
}
