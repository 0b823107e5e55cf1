//! Tap versus long-press recognition for a single pointer.
//!
//! A press schedules a long-press timer on the owner's [`TaskQueue`]. Release
//! before the timer fires is a tap; release after it fired is a long release.
//! Cancel ends the gesture silently. Every terminal transition cancels the
//! pending timer, so a stale timer can never arm a finished gesture.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thumbtap_core::{PointerAction, TaskHandle, TaskQueue};

/// Payload of the long-press timer task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongPressTimer;

/// Outcome of a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PressOutcome {
    /// Released before the long-press delay
    SingleTap,
    /// Released after the long press armed
    LongRelease,
}

/// Single-pointer press state machine.
#[derive(Debug, Clone)]
pub struct PressRecognizer {
    is_pressed: bool,
    timer_scheduled: bool,
    long_press_armed: bool,
    pending_timer: Option<TaskHandle>,
    long_press_delay: Duration,
}

impl PressRecognizer {
    /// Create an idle recognizer.
    #[must_use]
    pub const fn new(long_press_delay: Duration) -> Self {
        Self {
            is_pressed: false,
            timer_scheduled: false,
            long_press_armed: false,
            pending_timer: None,
            long_press_delay,
        }
    }

    /// Whether a pointer is currently down.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    /// Whether the long-press timer is waiting to fire.
    #[must_use]
    pub const fn timer_scheduled(&self) -> bool {
        self.timer_scheduled
    }

    /// Whether the long press fired during the current gesture.
    #[must_use]
    pub const fn long_press_armed(&self) -> bool {
        self.long_press_armed
    }

    /// Handle of the pending timer.
    #[must_use]
    pub const fn pending_timer(&self) -> Option<TaskHandle> {
        self.pending_timer
    }

    /// Press target for the animation: 1 while pressed, 0 otherwise.
    #[must_use]
    pub const fn press_target(&self) -> f32 {
        if self.is_pressed {
            1.0
        } else {
            0.0
        }
    }

    /// Feed one pointer action. Returns the outcome when a gesture completes.
    pub fn handle(
        &mut self,
        action: PointerAction,
        timers: &mut TaskQueue<LongPressTimer>,
    ) -> Option<PressOutcome> {
        match action {
            PointerAction::Down => {
                self.start(timers);
                None
            }
            PointerAction::Up => {
                let is_single_tap = self.timer_scheduled && !self.long_press_armed;
                let is_long_press = !self.timer_scheduled && self.long_press_armed;
                self.finish(timers);
                if is_single_tap {
                    Some(PressOutcome::SingleTap)
                } else if is_long_press {
                    Some(PressOutcome::LongRelease)
                } else {
                    None
                }
            }
            PointerAction::Cancel => {
                self.finish(timers);
                None
            }
            PointerAction::Move => None,
        }
    }

    /// Deliver a fired timer. Returns `true` if it armed the long press.
    ///
    /// Anything but the pending handle is ignored.
    pub fn on_timer_fired(&mut self, handle: TaskHandle) -> bool {
        if !self.timer_scheduled || self.pending_timer != Some(handle) {
            log::trace!("ignoring stale long-press timer {}", handle.id());
            return false;
        }
        self.pending_timer = None;
        self.timer_scheduled = false;
        self.long_press_armed = true;
        true
    }

    fn start(&mut self, timers: &mut TaskQueue<LongPressTimer>) {
        self.is_pressed = true;
        self.cancel_timer(timers);
        self.long_press_armed = false;
        let handle = timers.post_delayed(LongPressTimer, self.long_press_delay);
        self.pending_timer = Some(handle);
        self.timer_scheduled = true;
        log::trace!(
            "press started, long-press timer {} in {:?}",
            handle.id(),
            self.long_press_delay
        );
    }

    fn finish(&mut self, timers: &mut TaskQueue<LongPressTimer>) {
        self.is_pressed = false;
        self.cancel_timer(timers);
        self.long_press_armed = false;
        log::trace!("press ended");
    }

    fn cancel_timer(&mut self, timers: &mut TaskQueue<LongPressTimer>) {
        if let Some(handle) = self.pending_timer.take() {
            timers.cancel(handle);
        }
        self.timer_scheduled = false;
    }
}
