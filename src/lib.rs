#![cfg(target_arch = "wasm32")]
//! WASM entry point for the portfolio front-end.
//!
//! Mount order matters: content renders first so every later query (reveal
//! sections, anchor links, hover targets, form fields) sees the final DOM.
//! Each component mounts independently; a failure logs and skips that
//! component without touching the others.

use instant::Instant;
use portfolio_core::{particle_count_for_width, DriftCamera, Follower, ParticleField, PointerSnapshot};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod contact;
mod cursor;
mod dom;
mod frame;
mod input;
mod nav;
mod render;
mod scroll;
mod sections;

use crate::constants::{CANVAS_ID, FIELD_SEED};

thread_local! {
    static APP: RefCell<Option<AppHandle>> = RefCell::new(None);
}

/// Everything teardown must undo: the frame loop, the removable listeners,
/// the cursor proxies, and the GPU resources held by the frame context.
struct AppHandle {
    frame_loop: frame::FrameLoop,
    pointer: input::PointerListener,
    resize: dom::ListenerHandle,
    ctx: Rc<RefCell<frame::FrameContext<'static>>>,
}

impl AppHandle {
    fn teardown(self) {
        self.frame_loop.stop();
        self.pointer.detach();
        self.resize.detach();
        let mut ctx = self.ctx.borrow_mut();
        if let Some(cursor) = ctx.cursor.take() {
            cursor.unmount();
        }
        // Dropping the GPU state releases the surface, pipelines, and
        // buffers; nothing waits for garbage collection.
        ctx.gpu = None;
        log::info!("portfolio-web torn down");
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Cancel the frame loop, detach input listeners, restore the native
/// cursor, and release rendering resources.
#[wasm_bindgen]
pub fn shutdown() {
    if let Some(app) = APP.with(|a| a.borrow_mut().take()) {
        app.teardown();
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    sections::render_all(&document);

    let reveal = scroll::mount(&window, &document);
    nav::mount(&document);
    if let Err(e) = contact::mount(&window, &document) {
        log::warn!("contact form not mounted: {e:?}");
    }

    let cursor = if cursor::is_touch_device(&window) {
        log::info!("touch device: native cursor kept");
        None
    } else {
        cursor::mount(&document)
    };

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);
    let canvas_for_resize = canvas.clone();
    let resize = dom::listen(window.as_ref(), "resize", move |_| {
        dom::sync_canvas_backing_size(&canvas_for_resize);
    });

    let (viewport_w, _) = input::viewport_size(&window);
    let count = particle_count_for_width(viewport_w);
    let field = ParticleField::new(count, FIELD_SEED);

    let pointer_cell = Rc::new(RefCell::new(PointerSnapshot::default()));
    let pointer = input::wire_pointer(&window, pointer_cell.clone());

    // Rendering capability is optional: without it the backdrop simply
    // stays empty while the rest of the page keeps working.
    let gpu = frame::init_gpu(&canvas, count).await;

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        camera: DriftCamera::default(),
        dot: Follower::default(),
        pointer: pointer_cell,
        gpu,
        canvas,
        cursor,
        reveal,
        last_instant: Instant::now(),
        link_scratch: Vec::new(),
    }));
    let frame_loop = frame::start_loop(ctx.clone());

    APP.with(|a| {
        *a.borrow_mut() = Some(AppHandle {
            frame_loop,
            pointer,
            resize,
            ctx,
        })
    });
    log::info!("portfolio-web mounted ({count} particles)");
    Ok(())
}
