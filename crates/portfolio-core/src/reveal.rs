//! Scroll-driven visual state.
//!
//! Each registered section carries a small state machine keyed on where its
//! top edge sits relative to the reveal threshold (80% of viewport height).
//! Crossing downward plays the entrance, crossing back upward reverses it,
//! forever — there is no "already played" lockout. Skill bars use a separate
//! one-shot trigger at the same threshold.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealPhase {
    /// Registered but the threshold has never been crossed downward.
    #[default]
    Pending,
    /// Most recent threshold crossing was downward.
    Revealed,
    /// Most recent threshold crossing was upward.
    Reversed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    Play,
    Reverse,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RevealBinding {
    phase: RevealPhase,
}

impl RevealBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Feed the current element top edge (viewport-relative pixels).
    ///
    /// Returns the transition to start, if this update crossed the
    /// threshold. A pending section emits nothing until its first downward
    /// crossing.
    pub fn update(&mut self, element_top: f32, viewport_height: f32) -> Option<RevealAction> {
        let past = element_top <= viewport_height * REVEAL_THRESHOLD;
        match (self.phase, past) {
            (RevealPhase::Revealed, false) => {
                self.phase = RevealPhase::Reversed;
                Some(RevealAction::Reverse)
            }
            (RevealPhase::Revealed, true) => None,
            (_, true) => {
                self.phase = RevealPhase::Revealed;
                Some(RevealAction::Play)
            }
            (_, false) => None,
        }
    }
}

/// Continuous scrubbed parallax: maps the element's travel across the
/// viewport (top edge at viewport bottom → bottom edge at viewport top)
/// onto a vertical drift of -30% of element height. Pure function of the
/// inputs; the caller recomputes it on every scroll event.
pub fn parallax_offset(element_top: f32, element_height: f32, viewport_height: f32) -> f32 {
    let span = viewport_height + element_height;
    if span <= 0.0 {
        return 0.0;
    }
    let progress = ((viewport_height - element_top) / span).clamp(0.0, 1.0);
    PARALLAX_DRIFT * element_height * progress
}

/// One-shot width fill for a numeric skill bar. Fires exactly once per
/// mount, regardless of how often the threshold is re-crossed afterwards.
#[derive(Clone, Copy, Debug)]
pub struct FillBar {
    level: u8,
    fired: bool,
}

impl FillBar {
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(100),
            fired: false,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn fired(&self) -> bool {
        self.fired
    }

    /// Returns the target percentage when the bar first enters the
    /// threshold; `None` on every later call.
    pub fn update(&mut self, element_top: f32, viewport_height: f32) -> Option<u8> {
        if self.fired || element_top > viewport_height * REVEAL_THRESHOLD {
            return None;
        }
        self.fired = true;
        Some(self.level)
    }
}

/// Delay for the n-th staggered child of a section entrance.
#[inline]
pub fn stagger_delay(index: usize, step_sec: f32) -> f32 {
    index as f32 * step_sec
}
