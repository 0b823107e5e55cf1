//! Tappable thumbnail widget.
//!
//! A [`ThumbnailWidget`] shows a static image or a looping clip with a contour
//! placeholder, grows while pressed, and tells a tap from a long press.
//!
//! The host drives time: call [`ThumbnailWidget::tick`] once per frame with
//! the elapsed time. It fires the long-press timer, advances the press
//! animation and reports whether a repaint is needed.

use crate::config::ThumbnailConfig;
use crate::content::{
    AssetReceiver, Contour, ContourProvider, HapticFeedback, OutlineContours, ThumbnailContent,
    TouchCallback,
};
use crate::error::ThumbnailError;
use crate::gesture::{LongPressTimer, PressOutcome, PressRecognizer};
use crate::render_plan::{RenderInputs, RenderLayer, RenderPlan};
use std::any::Any;
use std::time::Duration;
use thumbtap_core::{
    widget::LayoutResult, AnimationChannel, Canvas, Constraints, Event, Insets, Point,
    PointerAction, Rect, Size, TaskQueue, Transform2D, TypeId, Widget,
};

/// Thumbnail with press feedback and tap / long-press detection.
pub struct ThumbnailWidget {
    config: ThumbnailConfig,
    content: Option<ThumbnailContent>,
    contour: Option<Contour>,
    image: Box<dyn AssetReceiver>,
    clip: Box<dyn AssetReceiver>,
    contours: Box<dyn ContourProvider>,
    recognizer: PressRecognizer,
    timers: TaskQueue<LongPressTimer>,
    channel: AnimationChannel,
    callback: Option<Box<dyn TouchCallback>>,
    haptics: Option<Box<dyn HapticFeedback>>,
    insets: Insets,
    bounds: Rect,
    test_id_value: Option<String>,
}

impl ThumbnailWidget {
    /// Create a widget with default configuration.
    ///
    /// `image` receives the static rendition, `clip` the looping one.
    #[must_use]
    pub fn new(image: impl AssetReceiver + 'static, clip: impl AssetReceiver + 'static) -> Self {
        Self::with_config(ThumbnailConfig::default(), image, clip)
    }

    /// Create a widget with explicit configuration.
    ///
    /// `config.placeholder_color` only styles receivers that read it; build
    /// [`ImageSlot`](crate::receiver::ImageSlot)s with
    /// [`ImageSlot::for_config`](crate::receiver::ImageSlot::for_config) to
    /// share it.
    #[must_use]
    pub fn with_config(
        config: ThumbnailConfig,
        image: impl AssetReceiver + 'static,
        clip: impl AssetReceiver + 'static,
    ) -> Self {
        Self {
            recognizer: PressRecognizer::new(config.long_press_delay()),
            channel: AnimationChannel::new(config.press_easing(), config.press_duration()),
            config,
            content: None,
            contour: None,
            image: Box::new(image),
            clip: Box::new(clip),
            contours: Box::new(OutlineContours),
            timers: TaskQueue::new(),
            callback: None,
            haptics: None,
            insets: Insets::ZERO,
            bounds: Rect::default(),
            test_id_value: None,
        }
    }

    /// Replace the contour provider.
    #[must_use]
    pub fn contour_provider(mut self, provider: impl ContourProvider + 'static) -> Self {
        self.contours = Box::new(provider);
        self
    }

    /// Set host padding.
    #[must_use]
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.set_insets(insets);
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Assign new content, replacing the previous one wholesale.
    ///
    /// Any running press animation snaps back to rest. Fails without touching
    /// the widget if `content` is empty but still carries a static image.
    pub fn set_content(&mut self, content: Option<ThumbnailContent>) -> Result<(), ThumbnailError> {
        if let Some(content) = &content {
            content.validate()?;
        }
        self.channel.force_factor(0.0);
        self.image
            .request(content.as_ref().and_then(ThumbnailContent::image_request));
        self.clip
            .request(content.as_ref().and_then(ThumbnailContent::clip_request));
        self.content = content;
        self.contour = self.compute_contour();
        Ok(())
    }

    /// Set or clear the gesture callback.
    pub fn set_callback(&mut self, callback: Option<Box<dyn TouchCallback>>) {
        self.callback = callback;
    }

    /// Set or clear the haptic collaborator.
    pub fn set_haptics(&mut self, haptics: Option<Box<dyn HapticFeedback>>) {
        self.haptics = haptics;
    }

    /// Change host padding and re-derive the render bounds.
    pub fn set_insets(&mut self, insets: Insets) {
        self.insets = insets;
        self.apply_bounds(self.bounds);
    }

    /// Bind asset resources.
    pub fn attach(&mut self) {
        self.image.attach();
        self.clip.attach();
    }

    /// Unbind asset resources.
    pub fn detach(&mut self) {
        self.image.detach();
        self.clip.detach();
    }

    /// Release asset resources for good.
    pub fn destroy(&mut self) {
        self.image.destroy();
        self.clip.destroy();
    }

    /// Advance time by `dt`. Returns `true` if the widget needs a repaint.
    pub fn tick(&mut self, dt: Duration) -> bool {
        for (handle, LongPressTimer) in self.timers.advance(dt) {
            if self.recognizer.on_timer_fired(handle) {
                log::debug!("long press armed");
                if let Some(haptics) = self.haptics.as_mut() {
                    haptics.perform_long_press();
                }
            }
        }
        self.channel.tick(dt);
        self.channel.take_repaint_request()
    }

    /// Feed a pointer action directly.
    pub fn on_pointer(&mut self, action: PointerAction) -> Option<PressOutcome> {
        let was_pressed = self.recognizer.is_pressed();
        let outcome = self.recognizer.handle(action, &mut self.timers);
        if self.recognizer.is_pressed() != was_pressed {
            self.channel.animate_to(self.recognizer.press_target());
        }
        match outcome {
            Some(PressOutcome::SingleTap) => {
                log::debug!("single tap");
                if let Some(callback) = self.callback.as_mut() {
                    callback.on_single_tap();
                }
            }
            Some(PressOutcome::LongRelease) => {
                log::debug!("long release");
                if let Some(callback) = self.callback.as_mut() {
                    callback.on_long_release();
                }
            }
            None => {}
        }
        outcome
    }

    /// Current content.
    #[must_use]
    pub const fn content(&self) -> Option<&ThumbnailContent> {
        self.content.as_ref()
    }

    /// Current contour placeholder.
    #[must_use]
    pub const fn contour(&self) -> Option<&Contour> {
        self.contour.as_ref()
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &ThumbnailConfig {
        &self.config
    }

    /// Host padding.
    #[must_use]
    pub const fn insets(&self) -> Insets {
        self.insets
    }

    /// Press animation factor.
    #[must_use]
    pub const fn factor(&self) -> f32 {
        self.channel.factor()
    }

    /// Whether the press animation is running.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.channel.is_animating()
    }

    /// Whether a pointer is down.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.recognizer.is_pressed()
    }

    /// Gesture state machine.
    #[must_use]
    pub const fn recognizer(&self) -> &PressRecognizer {
        &self.recognizer
    }

    /// Time until the next pending timer fires.
    #[must_use]
    pub fn next_timer_due_in(&self) -> Option<Duration> {
        self.timers.next_due_in()
    }

    /// Rectangle the image and clip draw into.
    #[must_use]
    pub fn render_bounds(&self) -> Rect {
        self.image.bounds()
    }

    /// Current content scale.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.config.scale_for(self.channel.factor())
    }

    /// Point the press scale is anchored on.
    ///
    /// The vertical term subtracts the bottom inset twice, keeping parity with
    /// the placement hosts already rely on.
    #[must_use]
    pub fn scale_pivot(&self) -> Point {
        let b = self.bounds;
        let inner_height = b.height - self.insets.bottom - self.insets.bottom;
        Point::new(b.x + b.width / 2.0, b.y + self.insets.top + inner_height / 2.0)
    }

    /// Layers the next paint will draw.
    #[must_use]
    pub fn render_plan(&self) -> RenderPlan {
        RenderPlan::select(&RenderInputs {
            has_content: self.content.is_some(),
            animated: self.content.as_ref().is_some_and(|c| c.animated),
            image_needs_placeholder: self.image.needs_placeholder(),
            clip_needs_placeholder: self.clip.needs_placeholder(),
            has_contour: self.contour.is_some(),
        })
    }

    fn apply_bounds(&mut self, bounds: Rect) {
        let resized = bounds.size() != self.bounds.size();
        self.bounds = bounds;
        let pad = self.config.content_padding;
        let inner = Rect::from_ltrb(
            bounds.x + pad,
            bounds.y + pad + self.insets.top,
            bounds.right() - pad,
            bounds.bottom() - self.insets.bottom - pad,
        );
        let moved = inner != self.image.bounds();
        self.image.set_bounds(inner);
        self.clip.set_bounds(inner);
        if resized || moved {
            self.contour = self.compute_contour();
        }
    }

    fn compute_contour(&self) -> Option<Contour> {
        let content = self.content.as_ref()?;
        let dimension = self.image.bounds().size().min_dimension();
        self.contours.contour(content, dimension)
    }
}

impl std::fmt::Debug for ThumbnailWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumbnailWidget")
            .field("content", &self.content)
            .field("bounds", &self.bounds)
            .field("factor", &self.channel.factor())
            .field("recognizer", &self.recognizer)
            .finish_non_exhaustive()
    }
}

impl Widget for ThumbnailWidget {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Square, sized by the width constraint. Height constraints are ignored.
    fn measure(&self, constraints: Constraints) -> Size {
        let side = if constraints.has_bounded_width() {
            constraints.max_width
        } else {
            constraints.min_width
        };
        Size::square(side)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.apply_bounds(bounds);
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let factor = self.channel.factor();
        let scaled = factor != 0.0;
        if scaled {
            let scale = self.config.scale_for(factor);
            canvas.push_transform(Transform2D::scale_about(scale, scale, self.scale_pivot()));
        }
        for layer in self.render_plan().layers() {
            match layer {
                RenderLayer::Contour => {
                    self.image
                        .draw_placeholder_contour(canvas, self.contour.as_ref());
                }
                RenderLayer::StaticImage => self.image.draw(canvas),
                RenderLayer::Clip => self.clip.draw(canvas),
            }
        }
        if scaled {
            canvas.pop_transform();
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let action = event.pointer_action()?;
        self.on_pointer(action)
            .map(|outcome| Box::new(outcome) as Box<dyn Any + Send>)
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
