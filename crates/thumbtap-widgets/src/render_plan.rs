//! Which layers a thumbnail paints, back to front.

use serde::{Deserialize, Serialize};

/// One paintable layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderLayer {
    /// Vector outline placeholder
    Contour,
    /// Static image (or its own placeholder)
    StaticImage,
    /// Looping clip
    Clip,
}

/// Readiness snapshot the plan is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderInputs {
    /// Content is assigned
    pub has_content: bool,
    /// Content is animated
    pub animated: bool,
    /// Static image is not drawable yet
    pub image_needs_placeholder: bool,
    /// Clip is not drawable yet
    pub clip_needs_placeholder: bool,
    /// A contour is available
    pub has_contour: bool,
}

/// Ordered layers for one paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPlan {
    layers: [RenderLayer; 3],
    len: usize,
}

impl RenderPlan {
    /// A plan that paints nothing.
    pub const EMPTY: Self = Self {
        layers: [RenderLayer::Contour; 3],
        len: 0,
    };

    /// Decide the layers for `inputs`.
    ///
    /// Animated content shows its still image (and the contour, while the
    /// still is also loading) until the clip is ready, and the clip is always
    /// painted last. Static content shows the contour until the image loads.
    #[must_use]
    pub fn select(inputs: &RenderInputs) -> Self {
        let mut plan = Self::EMPTY;
        if !inputs.has_content {
            return plan;
        }
        let contour = inputs.has_contour && inputs.image_needs_placeholder;
        if inputs.animated {
            if inputs.clip_needs_placeholder {
                if contour {
                    plan.push(RenderLayer::Contour);
                }
                plan.push(RenderLayer::StaticImage);
            }
            plan.push(RenderLayer::Clip);
        } else {
            if contour {
                plan.push(RenderLayer::Contour);
            }
            plan.push(RenderLayer::StaticImage);
        }
        plan
    }

    /// Layers in paint order.
    #[must_use]
    pub fn layers(&self) -> &[RenderLayer] {
        &self.layers[..self.len]
    }

    /// Whether nothing is painted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `layer` is part of the plan.
    #[must_use]
    pub fn contains(&self, layer: RenderLayer) -> bool {
        self.layers().contains(&layer)
    }

    fn push(&mut self, layer: RenderLayer) {
        if self.len < self.layers.len() {
            self.layers[self.len] = layer;
            self.len += 1;
        }
    }
}

impl Default for RenderPlan {
    fn default() -> Self {
        Self::EMPTY
    }
}
