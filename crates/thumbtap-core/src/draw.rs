//! Draw commands recorded by canvases.
//!
//! All painting reduces to these primitives.

use crate::widget::Transform2D;
use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Stroke style for paths and outlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width; zero means fill only
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Fill and stroke for boxes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color
    pub fill: Option<Color>,
    /// Outline
    pub stroke: Option<StrokeStyle>,
}

impl BoxStyle {
    /// Fill-only style.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }
}

/// A single recorded paint operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a path (polyline or polygon)
    Path {
        /// Points defining the path
        points: Vec<Point>,
        /// Whether the path is closed
        closed: bool,
        /// Stroke style
        style: StrokeStyle,
    },

    /// Draw a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Box style
        style: BoxStyle,
    },

    /// Draw an image or a video frame
    Image {
        /// Source key the backend resolves to pixels
        source: String,
        /// Destination bounds
        bounds: Rect,
        /// Opacity (0.0 - 1.0)
        alpha: f32,
    },

    /// Group of commands with transform
    Group {
        /// Child commands
        children: Vec<DrawCommand>,
        /// Transform to apply
        transform: Transform2D,
    },

    /// Clip to bounds
    Clip {
        /// Clip bounds
        bounds: Rect,
        /// Child command
        child: Box<DrawCommand>,
    },
}

impl DrawCommand {
    /// Create a filled rectangle.
    #[must_use]
    pub const fn filled_rect(bounds: Rect, color: Color) -> Self {
        Self::Rect {
            bounds,
            style: BoxStyle::fill(color),
        }
    }

    /// Create a filled closed polygon.
    #[must_use]
    pub fn filled_polygon(points: &[Point], color: Color) -> Self {
        Self::Path {
            points: points.to_vec(),
            closed: true,
            style: StrokeStyle { color, width: 0.0 },
        }
    }

    /// Wrap in a group with transform.
    #[must_use]
    pub fn with_transform(self, transform: Transform2D) -> Self {
        Self::Group {
            children: vec![self],
            transform,
        }
    }

    /// Wrap with clip bounds.
    #[must_use]
    pub fn with_clip(self, bounds: Rect) -> Self {
        Self::Clip {
            bounds,
            child: Box::new(self),
        }
    }

    /// Strip groups and clips, returning the innermost command.
    #[must_use]
    pub fn leaf(&self) -> &Self {
        match self {
            Self::Group { children, .. } if children.len() == 1 => children[0].leaf(),
            Self::Clip { child, .. } => child.leaf(),
            other => other,
        }
    }

    /// The transform this command is wrapped in, if any.
    #[must_use]
    pub fn transform(&self) -> Option<Transform2D> {
        match self {
            Self::Group { transform, .. } => Some(*transform),
            Self::Clip { child, .. } => child.transform(),
            _ => None,
        }
    }
}
