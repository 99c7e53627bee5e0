//! Easing curves and a minimal dt-driven tween.

use crate::constants::HEADER_OFFSET_PX;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Ease {
    #[default]
    Linear,
    Power2Out,
    Power3Out,
    Power2InOut,
}

impl Ease {
    /// Map linear progress t in \[0, 1\] onto the eased curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power2InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
        }
    }
}

/// Scalar tween advanced by per-frame delta time.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    ease: Ease,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            ease,
        }
    }

    /// Advance by dt seconds and return the current value.
    pub fn step(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.value()
    }

    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = self.ease.apply(self.elapsed / self.duration);
        self.from + (self.to - self.from) * t
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Viewport scroll position for an anchor target whose top edge sits at
/// `element_top_abs` pixels from the document top: the element lands with
/// its top offset by the fixed header height below the viewport top.
#[inline]
pub fn scroll_target(element_top_abs: f32) -> f32 {
    (element_top_abs - HEADER_OFFSET_PX).max(0.0)
}

/// Scroll destination for an activated fragment link, if its target exists.
///
/// A fragment with no matching element yields no destination: default
/// navigation is still suppressed and nothing scrolls. That asymmetry is
/// observed behavior and kept deliberately.
#[inline]
pub fn anchor_scroll_plan(target_top_abs: Option<f32>) -> Option<f32> {
    target_top_abs.map(scroll_target)
}
