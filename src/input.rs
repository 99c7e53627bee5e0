//! Pointer sampling.
//!
//! One pointermove listener writes the shared snapshot cell; the particle
//! field and the cursor follower each copy the cell out at the start of
//! their frame step, so neither sees a half-frame update.
//!
//! This module is self-contained (no `crate::` paths) so the pure parts can
//! be compiled into host-side tests directly.

use portfolio_core::PointerSnapshot;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Normalized device coordinates for a client-pixel position: \[-1, 1\] on
/// both axes, +y up.
#[inline]
pub fn pointer_ndc(client_x: f32, client_y: f32, width: f32, height: f32) -> [f32; 2] {
    let w = width.max(1.0);
    let h = height.max(1.0);
    [
        (client_x / w) * 2.0 - 1.0,
        -(client_y / h) * 2.0 + 1.0,
    ]
}

#[inline]
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0) as f32;
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0) as f32;
    (w, h)
}

/// The pointermove registration; detached on teardown.
pub struct PointerListener {
    window: web::Window,
    closure: Closure<dyn FnMut(web::PointerEvent)>,
}

impl PointerListener {
    pub fn detach(self) {
        _ = self.window.remove_event_listener_with_callback(
            "pointermove",
            self.closure.as_ref().unchecked_ref(),
        );
    }
}

pub fn wire_pointer(
    window: &web::Window,
    cell: Rc<RefCell<PointerSnapshot>>,
) -> PointerListener {
    let w = window.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (vw, vh) = viewport_size(&w);
        *cell.borrow_mut() =
            PointerSnapshot::from_client(ev.client_x() as f32, ev.client_y() as f32, vw, vh);
    }) as Box<dyn FnMut(web::PointerEvent)>);
    _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    PointerListener {
        window: window.clone(),
        closure,
    }
}
