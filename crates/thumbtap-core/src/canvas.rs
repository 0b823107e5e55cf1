//! Canvas implementations for rendering.

use crate::draw::{BoxStyle, DrawCommand, StrokeStyle};
use crate::widget::{Canvas, Transform2D};
use crate::{Color, Point, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (send commands to GPU/WASM)
/// - Diffing (compare render outputs)
///
/// Commands issued while a transform or clip is active are wrapped in
/// [`DrawCommand::Group`] / [`DrawCommand::Clip`] so the scope is visible.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_stack: Vec<Rect>,
    transform_stack: Vec<Transform2D>,
    transform_pushes: usize,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
        self.transform_stack.clear();
        self.transform_pushes = 0;
    }

    /// Get the current transform (identity if no transforms pushed).
    #[must_use]
    pub fn current_transform(&self) -> Transform2D {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or(Transform2D::IDENTITY)
    }

    /// Get the clip stack depth.
    #[must_use]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Get the transform stack depth.
    #[must_use]
    pub fn transform_depth(&self) -> usize {
        self.transform_stack.len()
    }

    /// How many transforms were pushed since creation or the last clear.
    #[must_use]
    pub fn transform_pushes(&self) -> usize {
        self.transform_pushes
    }

    /// Add a raw draw command, wrapped in the active clip and transform.
    pub fn add_command(&mut self, command: DrawCommand) {
        let mut command = command;
        if let Some(clip) = self.clip_stack.last() {
            command = command.with_clip(*clip);
        }
        if let Some(transform) = self.transform_stack.last() {
            command = command.with_transform(*transform);
        }
        self.commands.push(command);
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.add_command(DrawCommand::Rect {
            bounds: rect,
            style: BoxStyle::fill(color),
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        // Recorded as a closed zero-width path; backends triangulate
        self.add_command(DrawCommand::filled_polygon(points, color));
    }

    fn draw_path(&mut self, points: &[Point], color: Color, width: f32) {
        self.add_command(DrawCommand::Path {
            points: points.to_vec(),
            closed: false,
            style: StrokeStyle { color, width },
        });
    }

    fn draw_image(&mut self, source: &str, bounds: Rect, alpha: f32) {
        self.add_command(DrawCommand::Image {
            source: source.to_string(),
            bounds,
            alpha,
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_stack.push(rect);
    }

    fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }

    fn push_transform(&mut self, transform: Transform2D) {
        let composed = transform.then(&self.current_transform());
        self.transform_stack.push(composed);
        self.transform_pushes += 1;
    }

    fn pop_transform(&mut self) {
        self.transform_stack.pop();
    }
}
