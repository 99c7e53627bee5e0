//! Custom cursor: a lagged inner dot plus a ring bound directly to the
//! pointer. Never mounted on touch-primary devices — those keep the native
//! cursor and get no hover scaling.

use glam::Vec2;
use portfolio_core::constants::HOVER_SCALE;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::INTERACTIVE_SELECTOR;

pub struct CursorProxies {
    dot: web::HtmlElement,
    ring: web::HtmlElement,
}

/// Probed once at mount. A device that identifies as touch-capable never
/// receives the follower.
pub fn is_touch_device(window: &web::Window) -> bool {
    if window.navigator().max_touch_points() > 0 {
        return true;
    }
    js_sys::Reflect::has(window.as_ref(), &"ontouchstart".into()).unwrap_or(false)
}

pub fn mount(document: &web::Document) -> Option<CursorProxies> {
    let body = document.body()?;

    let dot = create_proxy(document, "cursor-dot")?;
    let ring = create_proxy(document, "cursor-ring")?;
    _ = dot
        .style()
        .set_property("transition", "transform 0.3s ease-out");
    _ = body.append_child(&dot);
    _ = body.append_child(&ring);

    // Hide the native cursor while the proxies are up.
    _ = body.style().set_property("cursor", "none");

    let proxies = CursorProxies { dot, ring };
    wire_hover(document, &proxies.dot);
    log::info!("custom cursor mounted");
    Some(proxies)
}

impl CursorProxies {
    /// Per-frame placement: the dot gets the lagged position, the ring the
    /// raw sample.
    pub fn place(&self, dot_px: Vec2, ring_px: Vec2) {
        place_at(&self.dot, dot_px);
        place_at(&self.ring, ring_px);
    }

    /// Remove the proxies and restore the native cursor.
    pub fn unmount(self) {
        self.dot.remove();
        self.ring.remove();
        if let Some(body) = crate::dom::window_document().and_then(|d| d.body()) {
            _ = body.style().set_property("cursor", "auto");
        }
    }
}

fn create_proxy(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    let el: web::HtmlElement = document
        .create_element("div")
        .ok()?
        .dyn_into()
        .ok()?;
    el.set_id(id);
    el.set_class_name(id);
    let style = el.style();
    _ = style.set_property("position", "fixed");
    _ = style.set_property("pointer-events", "none");
    _ = style.set_property("transform", "translate(-50%, -50%)");
    Some(el)
}

fn place_at(el: &web::HtmlElement, px: Vec2) {
    let style = el.style();
    _ = style.set_property("left", &format!("{}px", px.x));
    _ = style.set_property("top", &format!("{}px", px.y));
}

/// Scale the dot while the pointer is over an interactive element.
fn wire_hover(document: &web::Document, dot: &web::HtmlElement) {
    let Ok(list) = document.query_selector_all(INTERACTIVE_SELECTOR) else {
        return;
    };
    for i in 0..list.length() {
        let Some(node) = list.item(i) else { continue };
        let Ok(el) = node.dyn_into::<web::Element>() else {
            continue;
        };
        attach_scale(&el, dot, "mouseenter", HOVER_SCALE);
        attach_scale(&el, dot, "mouseleave", 1.0);
    }
}

fn attach_scale(el: &web::Element, dot: &web::HtmlElement, event: &str, scale: f32) {
    let dot = dot.clone();
    let closure = Closure::wrap(Box::new(move || {
        _ = dot.style().set_property(
            "transform",
            &format!("translate(-50%, -50%) scale({scale})"),
        );
    }) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
