//! A canvas-backed [`AssetReceiver`] with host-driven load status.

use crate::config::ThumbnailConfig;
use crate::content::{AssetReceiver, AssetSource, Contour};
use std::cell::Cell;
use std::rc::Rc;
use thumbtap_core::{Canvas, Color, Rect};

/// Load state of an [`ImageSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Nothing requested
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Decoded and drawable
    Ready,
    /// Load failed
    Failed,
}

/// Handle the host's loader uses to report progress for one slot.
#[derive(Debug, Clone)]
pub struct LoadHandle(Rc<Cell<LoadStatus>>);

impl LoadHandle {
    /// Current status.
    #[must_use]
    pub fn status(&self) -> LoadStatus {
        self.0.get()
    }

    /// Mark the requested asset as decoded.
    pub fn mark_ready(&self) {
        if self.0.get() == LoadStatus::Loading {
            self.0.set(LoadStatus::Ready);
        }
    }

    /// Mark the requested asset as failed.
    pub fn mark_failed(&self) {
        if self.0.get() == LoadStatus::Loading {
            self.0.set(LoadStatus::Failed);
        }
    }
}

/// Draws one image or clip frame into its bounds once the loader reports it
/// ready.
///
/// The slot has no fade-in: the first ready draw is at full `alpha`. Hosts
/// that want a progressive reveal supply their own [`AssetReceiver`].
#[derive(Debug)]
pub struct ImageSlot {
    source: Option<AssetSource>,
    bounds: Rect,
    status: Rc<Cell<LoadStatus>>,
    placeholder_color: Color,
    alpha: f32,
    attached: bool,
}

impl Default for ImageSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageSlot {
    /// Create an idle slot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            bounds: Rect::default(),
            status: Rc::new(Cell::new(LoadStatus::Idle)),
            placeholder_color: ThumbnailConfig::default().placeholder_color,
            alpha: 1.0,
            attached: false,
        }
    }

    /// Create an idle slot styled by `config`.
    #[must_use]
    pub fn for_config(config: &ThumbnailConfig) -> Self {
        Self::new().placeholder_color(config.placeholder_color)
    }

    /// Set the contour fill color.
    #[must_use]
    pub const fn placeholder_color(mut self, color: Color) -> Self {
        self.placeholder_color = color;
        self
    }

    /// Set draw opacity.
    #[must_use]
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// A handle for reporting load progress.
    #[must_use]
    pub fn load_handle(&self) -> LoadHandle {
        LoadHandle(Rc::clone(&self.status))
    }

    /// Current request.
    #[must_use]
    pub const fn source(&self) -> Option<&AssetSource> {
        self.source.as_ref()
    }

    /// Current load status.
    #[must_use]
    pub fn status(&self) -> LoadStatus {
        self.status.get()
    }

    /// Whether resources are bound.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }
}

impl AssetReceiver for ImageSlot {
    fn request(&mut self, source: Option<AssetSource>) {
        if self.source == source {
            return;
        }
        let status = if source.is_some() {
            LoadStatus::Loading
        } else {
            LoadStatus::Idle
        };
        self.status.set(status);
        self.source = source;
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn needs_placeholder(&self) -> bool {
        !self.is_ready()
    }

    fn is_ready(&self) -> bool {
        self.source.is_some() && self.status.get() == LoadStatus::Ready
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        if let Some(source) = self.source.as_ref().filter(|_| self.is_ready()) {
            canvas.draw_image(&source.key, self.bounds, self.alpha);
        }
    }

    fn draw_placeholder_contour(&self, canvas: &mut dyn Canvas, contour: Option<&Contour>) {
        if let Some(contour) = contour.filter(|c| c.is_drawable()) {
            canvas.fill_polygon(&contour.placed_in(self.bounds), self.placeholder_color);
        }
    }

    fn attach(&mut self) {
        self.attached = true;
    }

    fn detach(&mut self) {
        self.attached = false;
    }

    fn destroy(&mut self) {
        self.attached = false;
        self.source = None;
        self.status.set(LoadStatus::Idle);
    }
}
