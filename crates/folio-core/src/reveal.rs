//! One-shot visibility reveal.
//!
//! `RevealState` is the state machine behind scroll-triggered entrances: it
//! starts hidden, arms itself on the first intersection report at or above
//! its threshold, then animates to the visible descriptor and stays there.
//! Feeding it further reports (including the region scrolling back out of
//! view) changes nothing.
//!
//! ```rust
//! use folio_core::reveal::{RevealSpec, RevealState};
//!
//! let mut reveal = RevealState::new(RevealSpec::default());
//! assert!(!reveal.is_triggered());
//!
//! reveal.on_intersect(0.05); // below the 10% threshold
//! assert!(!reveal.is_triggered());
//!
//! reveal.on_intersect(0.5);
//! assert!(reveal.is_triggered());
//!
//! reveal.on_intersect(0.0); // scrolled back out: stays triggered
//! assert!(reveal.is_triggered());
//! ```

use web_time::Duration;

use crate::animation::{AnimatedValue, AnimationSpec, Easing};
use crate::error::SpecError;

/// Tuning for a reveal: when it fires and how the entrance looks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    /// Minimum visible fraction that arms the reveal.
    pub threshold: f32,
    /// Pause between the trigger and the start of the transition.
    pub delay: Duration,
    /// Length of the transition itself.
    pub duration: Duration,
    pub easing: Easing,
    /// Hidden-state downward offset in dp.
    pub offset: f32,
    /// Hidden-state scale (1.0 disables scaling).
    pub scale_from: f32,
}

impl Default for RevealSpec {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            delay: Duration::ZERO,
            duration: Duration::from_millis(600),
            easing: Easing::EaseOut,
            offset: 20.0,
            scale_from: 1.0,
        }
    }
}

impl RevealSpec {
    pub fn delayed(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    pub fn validated(self) -> Result<Self, SpecError> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(SpecError::ThresholdOutOfRange(self.threshold));
        }
        if !self.offset.is_finite() {
            return Err(SpecError::NonFiniteOffset(self.offset));
        }
        if !self.scale_from.is_finite() || self.scale_from <= 0.0 {
            return Err(SpecError::BadScale(self.scale_from));
        }
        Ok(self)
    }

    fn anim(&self) -> AnimationSpec {
        AnimationSpec::tween(self.duration, self.easing).after(self.delay)
    }
}

/// A snapshot of the animated visual properties.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl VisualState {
    pub const VISIBLE: VisualState = VisualState {
        opacity: 1.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    pub fn hidden(spec: &RevealSpec) -> Self {
        VisualState {
            opacity: 0.0,
            offset_y: spec.offset,
            scale: spec.scale_from,
        }
    }
}

/// The reveal state machine: hidden until triggered, visible forever after.
pub struct RevealState {
    spec: RevealSpec,
    triggered: bool,
    progress: AnimatedValue<f32>,
}

impl RevealState {
    /// Starts hidden, waiting for an intersection report.
    pub fn new(spec: RevealSpec) -> Self {
        Self {
            spec,
            triggered: false,
            progress: AnimatedValue::new(0.0, spec.anim()),
        }
    }

    /// Starts already settled in the visible state. This is the fail-open
    /// constructor used when no intersection delivery is available: content
    /// must never stay hidden because nothing can measure it.
    pub fn visible(spec: RevealSpec) -> Self {
        Self {
            spec,
            triggered: true,
            progress: AnimatedValue::new(1.0, spec.anim()),
        }
    }

    /// Feed an intersection report. Arms the reveal the first time the
    /// fraction reaches the threshold; every later call is a no-op.
    /// Returns true if this call fired the trigger.
    pub fn on_intersect(&mut self, ratio: f32) -> bool {
        if self.triggered || ratio < self.spec.threshold {
            return false;
        }
        self.trigger()
    }

    /// Arm unconditionally (entrance-on-mount use). One-shot like
    /// `on_intersect`.
    pub fn trigger(&mut self) -> bool {
        if self.triggered {
            return false;
        }
        self.triggered = true;
        self.progress.set_target(1.0);
        true
    }

    /// Advance the transition against the clock. Returns true while the
    /// animation (including its delay) is still running.
    pub fn update(&mut self) -> bool {
        self.progress.update()
    }

    pub fn visual(&self) -> VisualState {
        let p = *self.progress.get();
        VisualState {
            opacity: p,
            offset_y: (1.0 - p) * self.spec.offset,
            scale: self.spec.scale_from + (1.0 - self.spec.scale_from) * p,
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// Triggered and done animating.
    pub fn is_settled(&self) -> bool {
        self.triggered && !self.progress.is_animating()
    }

    pub fn spec(&self) -> &RevealSpec {
        &self.spec
    }
}
