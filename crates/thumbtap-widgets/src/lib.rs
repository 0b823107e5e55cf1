//! Tappable thumbnail widget for thumbtap.
//!
//! [`ThumbnailWidget`] combines three pieces:
//! - [`PressRecognizer`]: tap versus long press, with a cancellable timer
//! - an overshooting press animation that scales the content
//! - [`RenderPlan`]: which of contour, still image and clip to paint
//!
//! Assets are loaded elsewhere and reach the widget through
//! [`AssetReceiver`]s; [`ImageSlot`] is a ready-made receiver.

pub mod config;
pub mod content;
pub mod error;
pub mod gesture;
pub mod receiver;
pub mod render_plan;
pub mod thumbnail;

pub use config::ThumbnailConfig;
pub use content::{
    AssetReceiver, AssetSource, Contour, ContourProvider, HapticFeedback, OutlineContours,
    ThumbnailContent, TouchCallback,
};
pub use error::ThumbnailError;
pub use gesture::{LongPressTimer, PressOutcome, PressRecognizer};
pub use receiver::{ImageSlot, LoadHandle, LoadStatus};
pub use render_plan::{RenderInputs, RenderLayer, RenderPlan};
pub use thumbnail::ThumbnailWidget;
