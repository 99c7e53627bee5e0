//! The requestAnimationFrame loop.
//!
//! One tick advances every per-frame consumer against the same immutable
//! pointer snapshot, then renders. The loop owns a cancellation handle:
//! teardown stops the next scheduled step (steps themselves never block
//! and are never interrupted mid-way).

use instant::Instant;
use portfolio_core::{DriftCamera, Follower, ParticleField, PointerSnapshot};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{LINK_DISTANCE, MAX_LINK_VERTICES};
use crate::cursor::CursorProxies;
use crate::render;
use crate::scroll::RevealEngine;

pub struct FrameContext<'a> {
    pub field: ParticleField,
    pub camera: DriftCamera,
    pub dot: Follower,
    pub pointer: Rc<RefCell<PointerSnapshot>>,
    pub gpu: Option<render::GpuState<'a>>,
    pub canvas: web::HtmlCanvasElement,
    pub cursor: Option<CursorProxies>,
    pub reveal: Rc<RefCell<RevealEngine>>,
    pub last_instant: Instant,
    pub link_scratch: Vec<render::SceneVertex>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // One snapshot per frame; both consumers read the same value.
        let pointer = *self.pointer.borrow();

        self.field.step(pointer);
        self.camera.step(pointer.ndc);
        self.dot.step(pointer.px);
        if let Some(cursor) = &self.cursor {
            cursor.place(self.dot.position, pointer.px);
        }

        self.reveal.borrow_mut().tick(dt);

        if let Some(gpu) = &mut self.gpu {
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            collect_links(&self.field, &mut self.link_scratch);
            if let Err(e) = gpu.render(&self.field, &self.camera, &self.link_scratch) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

/// Line overlay: a segment between every pair of particles closer than the
/// link distance, capped so a dense cluster cannot overrun the vertex buffer.
pub fn collect_links(field: &ParticleField, out: &mut Vec<render::SceneVertex>) {
    out.clear();
    let ps = &field.particles;
    let limit = LINK_DISTANCE * LINK_DISTANCE;
    'outer: for i in 0..ps.len() {
        for j in (i + 1)..ps.len() {
            if out.len() + 2 > MAX_LINK_VERTICES {
                break 'outer;
            }
            let d = ps[i].position - ps[j].position;
            if d.length_squared() < limit {
                out.push(render::SceneVertex::from(ps[i].position));
                out.push(render::SceneVertex::from(ps[j].position));
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    max_points: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, max_points).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    /// Cancel the next scheduled step. The current step, if one is on the
    /// stack, finishes normally.
    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> FrameLoop {
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let running = Rc::new(Cell::new(true));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let raf_for_tick = raf_id.clone();
    let running_for_tick = running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_for_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            ) {
                raf_for_tick.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(Some(id));
        }
    }
    FrameLoop { raf_id, running }
}
