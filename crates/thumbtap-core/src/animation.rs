//! Animation primitives: easing curves, eased values, and the factor driver
//! behind press feedback.
//!
//! Time advances only when the host calls `tick`, so every animation is
//! deterministic under test.

use std::time::Duration;

// =============================================================================
// Easing Functions
// =============================================================================

/// Standard easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing)
    #[default]
    Linear,
    /// Decelerate past the end value, then settle back onto it.
    ///
    /// Larger `tension` means a bigger overshoot.
    Overshoot {
        /// Overshoot tension (2.0 is the classic default)
        tension: f64,
    },
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Overshoot { tension } => Self::overshoot(t, tension),
        }
    }

    fn overshoot(t: f64, tension: f64) -> f64 {
        let t = t - 1.0;
        (t * t).mul_add((tension + 1.0).mul_add(t, tension), 1.0)
    }
}

// =============================================================================
// EasedValue - time-based interpolation
// =============================================================================

/// An easing-based animated value.
#[derive(Debug, Clone)]
pub struct EasedValue {
    /// Start value
    pub from: f64,
    /// End value
    pub to: f64,
    /// Total duration in seconds
    pub duration: f64,
    /// Elapsed time
    pub elapsed: f64,
    /// Easing function
    pub easing: Easing,
}

impl EasedValue {
    /// Create new eased animation.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing: Easing::Linear,
        }
    }

    /// Set easing function.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Get current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        let eased = self.easing.apply(self.progress());
        (self.to - self.from).mul_add(eased, self.from)
    }

    /// Whether animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Update animation.
    pub fn update(&mut self, dt: f64) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    /// Progress from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

// =============================================================================
// FactorAnimator - scalar animation driver
// =============================================================================

/// Drives a single scalar "factor" towards a target over a fixed duration.
///
/// Each [`FactorAnimator::tick`] yields the next intermediate value while an
/// interpolation is running. [`FactorAnimator::force_factor`] jumps straight
/// to a value and drops any running interpolation.
#[derive(Debug, Clone)]
pub struct FactorAnimator {
    value: f32,
    motion: Option<EasedValue>,
    easing: Easing,
    duration: Duration,
}

impl FactorAnimator {
    /// Create a driver resting at `initial`.
    #[must_use]
    pub const fn new(initial: f32, easing: Easing, duration: Duration) -> Self {
        Self {
            value: initial,
            motion: None,
            easing,
            duration,
        }
    }

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.value
    }

    /// Whether an interpolation is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    /// Where the running interpolation ends, if any.
    #[must_use]
    pub fn destination(&self) -> Option<f32> {
        self.motion.as_ref().map(|m| m.to as f32)
    }

    /// Start interpolating from the current value to `target`.
    pub fn animate_to(&mut self, target: f32) {
        let motion = EasedValue::new(
            f64::from(self.value),
            f64::from(target),
            self.duration.as_secs_f64(),
        )
        .with_easing(self.easing);
        log::trace!("factor animation {} -> {}", self.value, target);
        self.motion = Some(motion);
    }

    /// Jump to `value` immediately, cancelling any running interpolation.
    pub fn force_factor(&mut self, value: f32) {
        self.motion = None;
        self.value = value;
    }

    /// Advance by `dt`. Returns the new value while animating, including the
    /// final settled value; `None` once idle.
    pub fn tick(&mut self, dt: Duration) -> Option<f32> {
        let motion = self.motion.as_mut()?;
        motion.update(dt.as_secs_f64());
        self.value = motion.value() as f32;
        if motion.is_complete() {
            self.value = motion.to as f32;
            self.motion = None;
        }
        Some(self.value)
    }
}

// =============================================================================
// AnimationChannel - factor + repaint bookkeeping for a widget
// =============================================================================

/// A widget's view of one animated factor.
///
/// Holds the last value reported by the driver and the last requested target,
/// and raises a repaint request whenever the value actually changes.
#[derive(Debug, Clone)]
pub struct AnimationChannel {
    animator: FactorAnimator,
    factor: f32,
    target: f32,
    repaint_requested: bool,
}

impl AnimationChannel {
    /// Create a channel at rest at zero.
    #[must_use]
    pub const fn new(easing: Easing, duration: Duration) -> Self {
        Self {
            animator: FactorAnimator::new(0.0, easing, duration),
            factor: 0.0,
            target: 0.0,
            repaint_requested: false,
        }
    }

    /// Current factor as last delivered by the driver.
    #[must_use]
    pub const fn factor(&self) -> f32 {
        self.factor
    }

    /// Last requested target.
    #[must_use]
    pub const fn target(&self) -> f32 {
        self.target
    }

    /// Whether the driver is still interpolating.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Request an animation towards `target`.
    ///
    /// Returns `false` without touching the driver when `target` equals the
    /// last requested target.
    pub fn animate_to(&mut self, target: f32) -> bool {
        if self.target == target {
            return false;
        }
        self.target = target;
        self.animator.animate_to(target);
        true
    }

    /// Hard reset: set the factor (and target) to `value` with no transition.
    pub fn force_factor(&mut self, value: f32) {
        self.animator.force_factor(value);
        self.target = value;
        self.set_factor(value);
    }

    /// Advance the driver. Returns `true` if the factor changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        match self.animator.tick(dt) {
            Some(value) => self.set_factor(value),
            None => false,
        }
    }

    /// Consume the pending repaint request, if any.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    fn set_factor(&mut self, value: f32) -> bool {
        if self.factor == value {
            return false;
        }
        self.factor = value;
        self.repaint_requested = true;
        true
    }
}

// =============================================================================
// Tests - TDD Style
// =============================================================================
