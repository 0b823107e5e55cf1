//! Core types and traits for thumbtap widgets.
//!
//! This crate provides the foundation the thumbnail widget builds on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`Insets`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Pointer input: [`Event`], [`PointerAction`]
//! - Rendering: [`Widget`], [`Canvas`], [`RecordingCanvas`], [`DrawCommand`]
//! - Timing: [`AnimationChannel`], [`FactorAnimator`], [`TaskQueue`]

mod color;
mod constraints;
mod event;
mod geometry;

pub mod animation;
pub mod canvas;
pub mod draw;
pub mod scheduler;
pub mod widget;

pub use animation::{AnimationChannel, EasedValue, Easing, FactorAnimator};
pub use canvas::RecordingCanvas;
pub use color::Color;
pub use constraints::Constraints;
pub use draw::{BoxStyle, DrawCommand, StrokeStyle};
pub use event::{Event, PointerAction, PointerId, PointerType};
pub use geometry::{Insets, Point, Rect, Size};
pub use scheduler::{TaskHandle, TaskQueue};
pub use widget::{Canvas, LayoutResult, Transform2D, TypeId, Widget};
