//! Content model and the collaborators a thumbnail talks to.
//!
//! The widget never decodes anything itself. It hands [`AssetSource`]s to two
//! [`AssetReceiver`]s (one for the static image, one for the looping clip),
//! asks a [`ContourProvider`] for a placeholder outline, and reports gesture
//! outcomes to a [`TouchCallback`].

use crate::error::ThumbnailError;
use serde::{Deserialize, Serialize};
use thumbtap_core::{Canvas, Point, Rect};

/// A key the asset pipeline resolves to pixels or frames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSource {
    /// Lookup key (file id, URL, cache key)
    pub key: String,
    /// Play a looping clip once per request instead of forever
    #[serde(default)]
    pub play_once: bool,
}

impl AssetSource {
    /// Create a source for `key`.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            play_once: false,
        }
    }

    /// Set the play-once flag.
    #[must_use]
    pub const fn with_play_once(mut self, play_once: bool) -> Self {
        self.play_once = play_once;
        self
    }
}

/// What a thumbnail displays.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThumbnailContent {
    /// Content has a looping clip rendition
    pub animated: bool,
    /// Content is a placeholder with nothing to load
    pub empty: bool,
    /// Static image rendition
    pub image: Option<AssetSource>,
    /// Looping clip rendition
    pub clip: Option<AssetSource>,
    /// Opaque-region outline in unit coordinates (0..1 on both axes)
    pub outline: Vec<Point>,
}

impl ThumbnailContent {
    /// Static content backed by `image`.
    #[must_use]
    pub fn still(image: AssetSource) -> Self {
        Self {
            image: Some(image),
            ..Self::default()
        }
    }

    /// Animated content with a still preview and a clip.
    #[must_use]
    pub fn animated(image: AssetSource, clip: AssetSource) -> Self {
        Self {
            animated: true,
            image: Some(image),
            clip: Some(clip),
            ..Self::default()
        }
    }

    /// Content with nothing to load.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            empty: true,
            ..Self::default()
        }
    }

    /// Attach an outline for the contour placeholder.
    #[must_use]
    pub fn with_outline(mut self, outline: Vec<Point>) -> Self {
        self.outline = outline;
        self
    }

    /// Check that empty content carries no static image.
    pub fn validate(&self) -> Result<(), ThumbnailError> {
        if self.empty && self.image.is_some() {
            return Err(ThumbnailError::InconsistentContent);
        }
        Ok(())
    }

    /// The static image to request, if the content is loadable.
    #[must_use]
    pub fn image_request(&self) -> Option<AssetSource> {
        if self.empty {
            None
        } else {
            self.image.clone()
        }
    }

    /// The clip to request, flagged to play once.
    #[must_use]
    pub fn clip_request(&self) -> Option<AssetSource> {
        if self.empty {
            None
        } else {
            self.clip.clone().map(|clip| clip.with_play_once(true))
        }
    }
}

/// A placeholder outline sized for a square of side `dimension`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    points: Vec<Point>,
    dimension: f32,
}

impl Contour {
    /// Create a contour from points in `0..dimension` space.
    #[must_use]
    pub fn new(points: Vec<Point>, dimension: f32) -> Self {
        Self { points, dimension }
    }

    /// Outline points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Side of the square the contour was computed for.
    #[must_use]
    pub const fn dimension(&self) -> f32 {
        self.dimension
    }

    /// Whether the outline encloses an area.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 3 && self.dimension > 0.0
    }

    /// Points positioned inside `bounds`, centred on the shorter axis.
    #[must_use]
    pub fn placed_in(&self, bounds: Rect) -> Vec<Point> {
        let offset = Point::new(
            bounds.x + (bounds.width - self.dimension) / 2.0,
            bounds.y + (bounds.height - self.dimension) / 2.0,
        );
        self.points.iter().map(|p| *p + offset).collect()
    }
}

/// Receives asset requests and draws whatever has loaded.
///
/// Readiness is polled at paint time; implementations load asynchronously.
pub trait AssetReceiver {
    /// Replace the current request. `None` releases it.
    fn request(&mut self, source: Option<AssetSource>);

    /// Destination rectangle for drawing.
    fn set_bounds(&mut self, bounds: Rect);

    /// Current destination rectangle.
    fn bounds(&self) -> Rect;

    /// Whether something should be drawn in place of the asset.
    fn needs_placeholder(&self) -> bool;

    /// Whether the asset is loaded and drawable.
    fn is_ready(&self) -> bool;

    /// Draw the asset (no-op if not ready).
    fn draw(&self, canvas: &mut dyn Canvas);

    /// Draw `contour` as a placeholder inside the receiver's bounds.
    fn draw_placeholder_contour(&self, canvas: &mut dyn Canvas, contour: Option<&Contour>);

    /// Bind underlying resources.
    fn attach(&mut self);

    /// Unbind underlying resources.
    fn detach(&mut self);

    /// Release everything for good.
    fn destroy(&mut self);
}

/// Computes the placeholder outline for content at a given size.
pub trait ContourProvider {
    /// Outline of `content` for a square of side `dimension`.
    fn contour(&self, content: &ThumbnailContent, dimension: f32) -> Option<Contour>;
}

/// Scales the content's unit outline to the requested dimension.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineContours;

impl ContourProvider for OutlineContours {
    fn contour(&self, content: &ThumbnailContent, dimension: f32) -> Option<Contour> {
        if content.outline.is_empty() || dimension <= 0.0 {
            return None;
        }
        let points = content
            .outline
            .iter()
            .map(|p| Point::new(p.x * dimension, p.y * dimension))
            .collect();
        Some(Contour::new(points, dimension))
    }
}

/// Fire-and-forget tactile feedback.
pub trait HapticFeedback {
    /// Signal that a long press just armed.
    fn perform_long_press(&mut self);
}

/// Receives completed gestures.
pub trait TouchCallback {
    /// A press released before the long-press delay.
    fn on_single_tap(&mut self);

    /// A press released after the long press armed.
    fn on_long_release(&mut self);
}
