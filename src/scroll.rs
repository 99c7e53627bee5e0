//! Scroll reveal engine wiring.
//!
//! Each `.fade-in-section` element gets a reveal state machine plus an
//! entrance tween (opacity 0→1, translateY 50px→0) and a scrubbed parallax
//! offset; `.stagger-item` children inside it get delayed entrance tweens
//! of their own. `.skill-bar-fill` elements get the one-shot width fill.
//!
//! Threshold checks run against cached layout positions (transform-free),
//! so the state machine is a pure function of the scroll offset.

use portfolio_core::constants::{
    FILL_DURATION_SEC, REVEAL_DURATION_SEC, REVEAL_OFFSET_PX, STAGGER_CARD_SEC, STAGGER_OFFSET_PX,
};
use portfolio_core::{
    parallax_offset, stagger_delay, Ease, FillBar, RevealAction, RevealBinding, Tween,
};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::FILL_EASE_CSS;
use crate::dom;

/// Entrance tween over a 0..1 progress that drives opacity and a vertical
/// offset. Retargeting mid-flight continues from the current progress, so
/// play/reverse replays cleanly in both directions.
struct EntranceTween {
    element: web::HtmlElement,
    offset_px: f32,
    delay_sec: f32,
    pending_delay: f32,
    progress: f32,
    tween: Option<Tween>,
    /// Children own their whole transform; sections share theirs with the
    /// parallax offset, which the engine writes.
    owns_transform: bool,
}

impl EntranceTween {
    fn new(element: web::HtmlElement, offset_px: f32, delay_sec: f32, owns_transform: bool) -> Self {
        let tween = Self {
            element,
            offset_px,
            delay_sec,
            pending_delay: 0.0,
            progress: 0.0,
            tween: None,
            owns_transform,
        };
        tween.apply();
        tween
    }

    fn retarget(&mut self, forward: bool) {
        let to = if forward { 1.0 } else { 0.0 };
        let distance = (to - self.progress).abs();
        if distance <= 0.0 {
            return;
        }
        // Stagger delays apply on entry only; the reverse runs at once.
        self.pending_delay = if forward { self.delay_sec } else { 0.0 };
        self.tween = Some(Tween::new(
            self.progress,
            to,
            REVEAL_DURATION_SEC * distance,
            Ease::Power3Out,
        ));
    }

    /// Advance by dt. Returns true when the progress changed this frame.
    fn tick(&mut self, dt: f32) -> bool {
        let Some(tween) = &mut self.tween else {
            return false;
        };
        if self.pending_delay > 0.0 {
            self.pending_delay -= dt;
            if self.pending_delay > 0.0 {
                return false;
            }
        }
        self.progress = tween.step(dt);
        if tween.finished() {
            self.tween = None;
        }
        self.apply();
        true
    }

    fn translate_px(&self) -> f32 {
        (1.0 - self.progress) * self.offset_px
    }

    fn apply(&self) {
        let style = self.element.style();
        _ = style.set_property("opacity", &format!("{}", self.progress));
        if self.owns_transform {
            _ = style.set_property("transform", &format!("translateY({}px)", self.translate_px()));
        }
    }
}

struct Section {
    element: web::HtmlElement,
    reveal: RevealBinding,
    entrance: EntranceTween,
    children: SmallVec<[EntranceTween; 8]>,
    layout_top: f32,
    layout_height: f32,
    parallax_px: f32,
}

impl Section {
    fn write_transform(&self) {
        let y = self.entrance.translate_px() + self.parallax_px;
        _ = self
            .element
            .style()
            .set_property("transform", &format!("translateY({y}px)"));
    }
}

struct FillTarget {
    element: web::HtmlElement,
    bar: FillBar,
    layout_top: f32,
}

pub struct RevealEngine {
    sections: Vec<Section>,
    fills: Vec<FillTarget>,
    viewport_h: f32,
}

pub fn mount(window: &web::Window, document: &web::Document) -> Rc<RefCell<RevealEngine>> {
    let mut engine = RevealEngine {
        sections: Vec::new(),
        fills: Vec::new(),
        viewport_h: 0.0,
    };

    if let Ok(list) = document.query_selector_all(".fade-in-section") {
        for i in 0..list.length() {
            let Some(el) = list
                .item(i)
                .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
            else {
                continue;
            };
            let stagger = el
                .get_attribute("data-stagger")
                .and_then(|s| s.parse::<f32>().ok())
                .unwrap_or(STAGGER_CARD_SEC);
            let mut children = SmallVec::new();
            if let Ok(kids) = el.query_selector_all(".stagger-item") {
                for (j, k) in (0..kids.length()).enumerate() {
                    let Some(kid) = kids
                        .item(k)
                        .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
                    else {
                        continue;
                    };
                    children.push(EntranceTween::new(
                        kid,
                        STAGGER_OFFSET_PX,
                        stagger_delay(j, stagger),
                        true,
                    ));
                }
            }
            let section = Section {
                entrance: EntranceTween::new(el.clone(), REVEAL_OFFSET_PX, 0.0, false),
                element: el,
                reveal: RevealBinding::new(),
                children,
                layout_top: 0.0,
                layout_height: 0.0,
                parallax_px: 0.0,
            };
            section.write_transform();
            engine.sections.push(section);
        }
    }

    if let Ok(list) = document.query_selector_all(".skill-bar-fill") {
        for i in 0..list.length() {
            let Some(el) = list
                .item(i)
                .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
            else {
                continue;
            };
            let level = el
                .get_attribute("data-level")
                .and_then(|s| s.parse::<u8>().ok())
                .unwrap_or(0);
            engine.fills.push(FillTarget {
                element: el,
                bar: FillBar::new(level),
                layout_top: 0.0,
            });
        }
    }

    log::info!(
        "reveal engine: {} sections, {} skill bars",
        engine.sections.len(),
        engine.fills.len()
    );

    engine.refresh_layout(window);
    let y = scroll_y(window);
    engine.on_scroll(y);

    let engine = Rc::new(RefCell::new(engine));

    let w = window.clone();
    let engine_for_scroll = engine.clone();
    dom::listen_forever(window.as_ref(), "scroll", move |_| {
        let y = scroll_y(&w);
        engine_for_scroll.borrow_mut().on_scroll(y);
    });

    let w2 = window.clone();
    let engine_for_resize = engine.clone();
    dom::listen_forever(window.as_ref(), "resize", move |_| {
        let mut e = engine_for_resize.borrow_mut();
        e.refresh_layout(&w2);
        let y = scroll_y(&w2);
        e.on_scroll(y);
    });

    engine
}

impl RevealEngine {
    /// Discrete triggers plus the continuous parallax scrub. Called on
    /// every scroll event (and once at mount).
    pub fn on_scroll(&mut self, y: f32) {
        for s in &mut self.sections {
            let top = s.layout_top - y;
            let parallax = parallax_offset(top, s.layout_height, self.viewport_h);
            if parallax != s.parallax_px {
                s.parallax_px = parallax;
                s.write_transform();
            }
            if let Some(action) = s.reveal.update(top, self.viewport_h) {
                let forward = action == RevealAction::Play;
                s.entrance.retarget(forward);
                for c in &mut s.children {
                    c.retarget(forward);
                }
            }
        }
        for f in &mut self.fills {
            let top = f.layout_top - y;
            if let Some(level) = f.bar.update(top, self.viewport_h) {
                let style = f.element.style();
                _ = style.set_property(
                    "transition",
                    &format!("width {FILL_DURATION_SEC}s {FILL_EASE_CSS}"),
                );
                _ = style.set_property("width", &format!("{level}%"));
            }
        }
    }

    /// Advance the entrance tweens; called from the frame loop.
    pub fn tick(&mut self, dt: f32) {
        for s in &mut self.sections {
            if s.entrance.tick(dt) {
                s.write_transform();
            }
            for c in &mut s.children {
                c.tick(dt);
            }
        }
    }

    /// Re-measure layout positions (transform-free) against the current
    /// viewport. Called at mount and on resize.
    pub fn refresh_layout(&mut self, window: &web::Window) {
        self.viewport_h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let y = scroll_y(window);
        for s in &mut self.sections {
            let rect = s.element.get_bounding_client_rect();
            let applied = s.entrance.translate_px() + s.parallax_px;
            s.layout_top = rect.top() as f32 + y - applied;
            s.layout_height = rect.height() as f32;
        }
        for f in &mut self.fills {
            // rect includes ancestor transforms; near enough for the
            // one-shot trigger
            let rect = f.element.get_bounding_client_rect();
            f.layout_top = rect.top() as f32 + y;
        }
    }
}

fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}
