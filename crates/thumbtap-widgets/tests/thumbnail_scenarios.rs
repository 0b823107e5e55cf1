//! End-to-end gesture, animation and paint scenarios for `ThumbnailWidget`.

use proptest::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use thumbtap_core::{Canvas, Point, PointerAction, RecordingCanvas, Rect, Widget};
use thumbtap_widgets::{
    AssetReceiver, AssetSource, Contour, HapticFeedback, PressOutcome, RenderLayer,
    ThumbnailContent, ThumbnailWidget, TouchCallback,
};

type Journal = Rc<RefCell<Vec<String>>>;

/// Receiver that journals every call and reports scripted readiness.
struct ScriptedReceiver {
    name: &'static str,
    journal: Journal,
    ready: Rc<Cell<bool>>,
    bounds: Rect,
}

impl ScriptedReceiver {
    fn new(name: &'static str, journal: &Journal) -> (Self, Rc<Cell<bool>>) {
        let ready = Rc::new(Cell::new(false));
        let receiver = Self {
            name,
            journal: Rc::clone(journal),
            ready: Rc::clone(&ready),
            bounds: Rect::default(),
        };
        (receiver, ready)
    }

    fn log(&self, entry: impl Into<String>) {
        self.journal
            .borrow_mut()
            .push(format!("{}.{}", self.name, entry.into()));
    }
}

impl AssetReceiver for ScriptedReceiver {
    fn request(&mut self, source: Option<AssetSource>) {
        match source {
            Some(s) => self.log(format!("request({},once={})", s.key, s.play_once)),
            None => self.log("request(none)"),
        }
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn needs_placeholder(&self) -> bool {
        !self.ready.get()
    }

    fn is_ready(&self) -> bool {
        self.ready.get()
    }

    fn draw(&self, _canvas: &mut dyn Canvas) {
        self.log("draw");
    }

    fn draw_placeholder_contour(&self, _canvas: &mut dyn Canvas, contour: Option<&Contour>) {
        self.log(format!("contour({})", contour.is_some()));
    }

    fn attach(&mut self) {
        self.log("attach");
    }

    fn detach(&mut self) {
        self.log("detach");
    }

    fn destroy(&mut self) {
        self.log("destroy");
    }
}

#[derive(Default)]
struct Outcomes {
    taps: Vec<Duration>,
    long_releases: Vec<Duration>,
    haptics: Vec<Duration>,
}

/// Callback and haptics probe stamped with the simulated clock.
struct Probe {
    outcomes: Rc<RefCell<Outcomes>>,
    clock: Rc<Cell<Duration>>,
}

impl TouchCallback for Probe {
    fn on_single_tap(&mut self) {
        self.outcomes.borrow_mut().taps.push(self.clock.get());
    }

    fn on_long_release(&mut self) {
        self.outcomes.borrow_mut().long_releases.push(self.clock.get());
    }
}

impl HapticFeedback for Probe {
    fn perform_long_press(&mut self) {
        self.outcomes.borrow_mut().haptics.push(self.clock.get());
    }
}

struct Rig {
    widget: ThumbnailWidget,
    journal: Journal,
    image_ready: Rc<Cell<bool>>,
    clip_ready: Rc<Cell<bool>>,
    outcomes: Rc<RefCell<Outcomes>>,
    clock: Rc<Cell<Duration>>,
}

impl Rig {
    fn new() -> Self {
        let journal: Journal = Rc::default();
        let (image, image_ready) = ScriptedReceiver::new("image", &journal);
        let (clip, clip_ready) = ScriptedReceiver::new("clip", &journal);
        let outcomes = Rc::new(RefCell::new(Outcomes::default()));
        let clock = Rc::new(Cell::new(Duration::ZERO));

        let mut widget = ThumbnailWidget::new(image, clip);
        let probe = || Probe {
            outcomes: Rc::clone(&outcomes),
            clock: Rc::clone(&clock),
        };
        widget.set_callback(Some(Box::new(probe())));
        widget.set_haptics(Some(Box::new(probe())));
        widget.layout(Rect::new(0.0, 0.0, 96.0, 96.0));

        Self {
            widget,
            journal,
            image_ready,
            clip_ready,
            outcomes,
            clock,
        }
    }

    /// Advance to absolute time `t_ms` in frame-sized steps.
    fn advance_to(&mut self, t_ms: u64) {
        let target = Duration::from_millis(t_ms);
        while self.clock.get() < target {
            let step = (target - self.clock.get()).min(Duration::from_millis(16));
            self.clock.set(self.clock.get() + step);
            self.widget.tick(step);
        }
    }

    fn at(&mut self, t_ms: u64, action: PointerAction) -> Option<PressOutcome> {
        self.advance_to(t_ms);
        self.widget.on_pointer(action)
    }

    fn paint_journal(&self) -> Vec<String> {
        self.journal.borrow_mut().clear();
        let mut canvas = RecordingCanvas::new();
        self.widget.paint(&mut canvas);
        self.journal.borrow().clone()
    }
}

fn diamond() -> Vec<Point> {
    vec![
        Point::new(0.5, 0.0),
        Point::new(1.0, 0.5),
        Point::new(0.5, 1.0),
        Point::new(0.0, 0.5),
    ]
}

// =============================================================================
// Gesture scenarios
// =============================================================================

#[test]
fn scenario_quick_tap() {
    let mut rig = Rig::new();
    rig.at(0, PointerAction::Down);
    let outcome = rig.at(200, PointerAction::Up);

    assert_eq!(outcome, Some(PressOutcome::SingleTap));
    let o = rig.outcomes.borrow();
    assert_eq!(o.taps, vec![Duration::from_millis(200)]);
    assert!(o.long_releases.is_empty());
    assert!(o.haptics.is_empty());
}

#[test]
fn scenario_long_press_release() {
    let mut rig = Rig::new();
    rig.at(0, PointerAction::Down);
    rig.advance_to(1000);
    assert_eq!(rig.outcomes.borrow().haptics, vec![Duration::from_millis(1000)]);

    let outcome = rig.at(1500, PointerAction::Up);
    assert_eq!(outcome, Some(PressOutcome::LongRelease));
    let o = rig.outcomes.borrow();
    assert_eq!(o.long_releases, vec![Duration::from_millis(1500)]);
    assert!(o.taps.is_empty());
    assert_eq!(o.haptics.len(), 1);
}

#[test]
fn scenario_cancel_silences_timer() {
    let mut rig = Rig::new();
    rig.at(0, PointerAction::Down);
    assert_eq!(rig.at(50, PointerAction::Cancel), None);
    rig.advance_to(1000);
    rig.advance_to(3000);

    let o = rig.outcomes.borrow();
    assert!(o.taps.is_empty());
    assert!(o.long_releases.is_empty());
    assert!(o.haptics.is_empty());
    assert_eq!(rig.widget.next_timer_due_in(), None);
}

#[test]
fn redundant_down_rearms_single_timer() {
    let mut rig = Rig::new();
    rig.at(0, PointerAction::Down);
    rig.at(700, PointerAction::Down);
    assert_eq!(rig.widget.next_timer_due_in(), Some(Duration::from_millis(1000)));

    rig.advance_to(1600);
    assert!(rig.outcomes.borrow().haptics.is_empty());
    rig.advance_to(1700);
    assert_eq!(rig.outcomes.borrow().haptics, vec![Duration::from_millis(1700)]);
}

#[test]
fn release_exactly_at_delay_is_long_release() {
    let mut rig = Rig::new();
    rig.at(0, PointerAction::Down);
    assert_eq!(rig.at(1000, PointerAction::Up), Some(PressOutcome::LongRelease));
}

// =============================================================================
// Animation
// =============================================================================

#[test]
fn press_animation_overshoots_then_settles() {
    let mut rig = Rig::new();
    rig.at(0, PointerAction::Down);
    let mut peak = 0.0f32;
    for t in (10..=230).step_by(10) {
        rig.advance_to(t);
        peak = peak.max(rig.widget.factor());
    }
    assert!(peak > 1.0, "peak factor {peak} should overshoot");
    rig.advance_to(400);
    assert_eq!(rig.widget.factor(), 1.0);
    assert!((rig.widget.scale() - 1.3).abs() < 1e-6);
}

#[test]
fn content_reassignment_snaps_factor_to_rest() {
    let mut rig = Rig::new();
    rig.at(0, PointerAction::Down);
    rig.advance_to(120);
    assert!(rig.widget.factor() > 0.0);

    rig.widget
        .set_content(Some(ThumbnailContent::still(AssetSource::new("next"))))
        .expect("consistent content");
    assert_eq!(rig.widget.factor(), 0.0);
    rig.advance_to(400);
    assert_eq!(rig.widget.factor(), 0.0);
}

#[test]
fn move_after_reassignment_keeps_factor_at_rest() {
    let mut rig = Rig::new();
    rig.at(0, PointerAction::Down);
    rig.advance_to(100);
    rig.widget
        .set_content(Some(ThumbnailContent::still(AssetSource::new("next"))))
        .expect("consistent content");

    assert_eq!(rig.at(110, PointerAction::Move), None);
    rig.advance_to(210);
    assert_eq!(rig.widget.factor(), 0.0);
    assert!(!rig.widget.is_animating());
    assert!(rig.widget.is_pressed());
}

#[test]
fn repeated_down_does_not_restart_animation() {
    let mut rig = Rig::new();
    rig.at(0, PointerAction::Down);
    rig.advance_to(100);
    rig.widget.on_pointer(PointerAction::Down);
    rig.advance_to(240);
    // Finishes on the first schedule
    assert_eq!(rig.widget.factor(), 1.0);
    assert!(!rig.widget.is_animating());
}

// =============================================================================
// Content and paint
// =============================================================================

#[test]
fn scenario_animated_nothing_ready_paints_contour_still_clip() {
    let mut rig = Rig::new();
    rig.widget
        .set_content(Some(
            ThumbnailContent::animated(AssetSource::new("still"), AssetSource::new("loop"))
                .with_outline(diamond()),
        ))
        .expect("consistent content");

    assert_eq!(
        rig.widget.render_plan().layers(),
        &[RenderLayer::Contour, RenderLayer::StaticImage, RenderLayer::Clip]
    );
    assert_eq!(
        rig.paint_journal(),
        vec!["image.contour(true)", "image.draw", "clip.draw"]
    );
}

#[test]
fn animated_clip_ready_paints_clip_only() {
    let mut rig = Rig::new();
    rig.widget
        .set_content(Some(ThumbnailContent::animated(
            AssetSource::new("still"),
            AssetSource::new("loop"),
        )))
        .expect("consistent content");
    rig.clip_ready.set(true);
    assert_eq!(rig.paint_journal(), vec!["clip.draw"]);
}

#[test]
fn static_content_drops_contour_once_ready() {
    let mut rig = Rig::new();
    rig.widget
        .set_content(Some(
            ThumbnailContent::still(AssetSource::new("still")).with_outline(diamond()),
        ))
        .expect("consistent content");
    assert_eq!(
        rig.paint_journal(),
        vec!["image.contour(true)", "image.draw"]
    );
    rig.image_ready.set(true);
    assert_eq!(rig.paint_journal(), vec!["image.draw"]);
}

#[test]
fn set_content_requests_assets_with_play_once_clip() {
    let mut rig = Rig::new();
    rig.journal.borrow_mut().clear();
    rig.widget
        .set_content(Some(ThumbnailContent::animated(
            AssetSource::new("still"),
            AssetSource::new("loop"),
        )))
        .expect("consistent content");
    assert_eq!(
        *rig.journal.borrow(),
        vec!["image.request(still,once=false)", "clip.request(loop,once=true)"]
    );
}

#[test]
fn inconsistent_content_is_rejected_untouched() {
    let mut rig = Rig::new();
    rig.journal.borrow_mut().clear();
    let result = rig.widget.set_content(Some(ThumbnailContent {
        empty: true,
        image: Some(AssetSource::new("stray")),
        ..ThumbnailContent::default()
    }));
    assert!(result.is_err());
    assert!(rig.journal.borrow().is_empty());
    assert!(rig.widget.content().is_none());
}

#[test]
fn lifecycle_is_forwarded_to_both_receivers() {
    let mut rig = Rig::new();
    rig.journal.borrow_mut().clear();
    rig.widget.attach();
    rig.widget.detach();
    rig.widget.destroy();
    assert_eq!(
        *rig.journal.borrow(),
        vec![
            "image.attach",
            "clip.attach",
            "image.detach",
            "clip.detach",
            "image.destroy",
            "clip.destroy"
        ]
    );
}

#[test]
fn pressed_paint_wraps_layers_in_one_scale_transform() {
    let mut rig = Rig::new();
    rig.widget
        .set_content(Some(ThumbnailContent::still(AssetSource::new("still"))))
        .expect("consistent content");
    rig.at(0, PointerAction::Down);
    rig.advance_to(300);

    let mut canvas = RecordingCanvas::new();
    rig.widget.paint(&mut canvas);
    assert_eq!(canvas.transform_pushes(), 1);
    assert_eq!(canvas.transform_depth(), 0);
}

// =============================================================================
// Properties
// =============================================================================

fn action() -> impl Strategy<Value = PointerAction> {
    prop_oneof![
        3 => Just(PointerAction::Down),
        1 => Just(PointerAction::Move),
        3 => Just(PointerAction::Up),
        1 => Just(PointerAction::Cancel),
    ]
}

proptest! {
    #[test]
    fn prop_release_outcome_matches_timer(hold_ms in 0u64..2500) {
        let mut rig = Rig::new();
        rig.at(0, PointerAction::Down);
        let outcome = rig.at(hold_ms, PointerAction::Up);
        let fired = !rig.outcomes.borrow().haptics.is_empty();
        let o = rig.outcomes.borrow();
        if fired {
            prop_assert_eq!(outcome, Some(PressOutcome::LongRelease));
            prop_assert_eq!(o.long_releases.len(), 1);
            prop_assert!(o.taps.is_empty());
        } else {
            prop_assert_eq!(outcome, Some(PressOutcome::SingleTap));
            prop_assert_eq!(o.taps.len(), 1);
            prop_assert!(o.long_releases.is_empty());
        }
    }

    #[test]
    fn prop_at_most_one_outcome_per_gesture(
        steps in proptest::collection::vec((action(), 0u64..800), 1..30)
    ) {
        let mut rig = Rig::new();
        let mut t = 0;
        let mut gestures_completed = 0usize;
        let mut pressed = false;
        for (a, gap) in steps {
            t += gap;
            let outcome = rig.at(t, a);
            match a {
                PointerAction::Down => pressed = true,
                PointerAction::Up => {
                    prop_assert_eq!(outcome.is_some(), pressed);
                    if pressed {
                        gestures_completed += 1;
                    }
                    pressed = false;
                }
                PointerAction::Cancel => {
                    prop_assert_eq!(outcome, None);
                    pressed = false;
                }
                PointerAction::Move => prop_assert_eq!(outcome, None),
            }
        }
        let o = rig.outcomes.borrow();
        prop_assert_eq!(o.taps.len() + o.long_releases.len(), gestures_completed);
    }

    #[test]
    fn prop_cancel_then_wait_is_silent(cancel_ms in 0u64..2000, wait_ms in 0u64..3000) {
        let mut rig = Rig::new();
        rig.at(0, PointerAction::Down);
        rig.at(cancel_ms, PointerAction::Cancel);
        let haptics_at_cancel = rig.outcomes.borrow().haptics.len();
        rig.advance_to(cancel_ms + wait_ms);
        let o = rig.outcomes.borrow();
        prop_assert!(o.taps.is_empty());
        prop_assert!(o.long_releases.is_empty());
        prop_assert_eq!(o.haptics.len(), haptics_at_cancel);
    }
}
