use crate::surface::{Fill, Path, Surface};
use gallery_common::{Color, DVec2, Rect, Size};
use serde::Serialize;

/// One call made against a [`Surface`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    SetBackingSize { width: u32, height: u32 },
    SetScale { x: f64, y: f64 },
    ClearRect { rect: Rect },
    FillRect { rect: Rect, fill: Fill },
    FillPath { path: Path, color: Color },
    StrokePath { path: Path, color: Color, width: f64 },
    FillCircle { center: DVec2, radius: f64, color: Color },
}

impl DrawCommand {
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCommand::SetBackingSize { .. } => "set_backing_size",
            DrawCommand::SetScale { .. } => "set_scale",
            DrawCommand::ClearRect { .. } => "clear_rect",
            DrawCommand::FillRect { .. } => "fill_rect",
            DrawCommand::FillPath { .. } => "fill_path",
            DrawCommand::StrokePath { .. } => "stroke_path",
            DrawCommand::FillCircle { .. } => "fill_circle",
        }
    }

    /// True for calls that change pixels.
    pub fn is_draw(&self) -> bool {
        !matches!(
            self,
            DrawCommand::SetBackingSize { .. } | DrawCommand::SetScale { .. }
        )
    }
}

/// Surface that records every call instead of drawing.
///
/// Used for headless inspection (the CLI `commands` dump) and for asserting
/// exactly which primitives a frame issues.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    backing: (u32, u32),
    scale: DVec2,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            backing: (size.width.max(0.0) as u32, size.height.max(0.0) as u32),
            scale: DVec2::ONE,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the log.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn backing_size(&self) -> (u32, u32) {
        self.backing
    }

    pub fn scale(&self) -> DVec2 {
        self.scale
    }

    /// Number of logged commands of the given kind.
    pub fn count(&self, kind: &str) -> usize {
        self.commands.iter().filter(|c| c.kind() == kind).count()
    }

    /// Number of logged commands that change pixels.
    pub fn draw_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_draw()).count()
    }
}

impl Surface for RecordingSurface {
    fn display_size(&self) -> Size {
        self.size
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.backing = (width, height);
        self.scale = DVec2::ONE;
        self.commands
            .push(DrawCommand::SetBackingSize { width, height });
    }

    fn set_scale(&mut self, x: f64, y: f64) {
        self.scale = DVec2::new(x, y);
        self.commands.push(DrawCommand::SetScale { x, y });
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::ClearRect { rect });
    }

    fn fill_rect(&mut self, rect: Rect, fill: &Fill) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            fill: fill.clone(),
        });
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &Path, color: Color, width: f64) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let mut s = RecordingSurface::new(Size::new(100.0, 50.0));
        s.set_backing_size(200, 100);
        s.set_scale(2.0, 2.0);
        s.clear_rect(Rect::from_size(s.display_size()));
        s.fill_circle(DVec2::new(1.0, 2.0), 3.0, Color::WHITE);

        let kinds: Vec<&str> = s.commands().iter().map(DrawCommand::kind).collect();
        assert_eq!(
            kinds,
            vec!["set_backing_size", "set_scale", "clear_rect", "fill_circle"]
        );
        assert_eq!(s.backing_size(), (200, 100));
        assert_eq!(s.scale(), DVec2::new(2.0, 2.0));
        assert_eq!(s.draw_count(), 2);
    }

    #[test]
    fn backing_resize_resets_scale() {
        let mut s = RecordingSurface::new(Size::new(10.0, 10.0));
        s.set_scale(2.0, 2.0);
        s.set_backing_size(20, 20);
        assert_eq!(s.scale(), DVec2::ONE);
    }

    #[test]
    fn take_commands_drains() {
        let mut s = RecordingSurface::new(Size::new(10.0, 10.0));
        s.clear_rect(Rect::from_size(s.display_size()));
        assert_eq!(s.take_commands().len(), 1);
        assert!(s.commands().is_empty());
    }

    #[test]
    fn serializes_with_op_tag() {
        let cmd = DrawCommand::FillCircle {
            center: DVec2::new(1.0, 2.0),
            radius: 3.0,
            color: Color::WHITE,
        };
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["op"], "fill_circle");
        assert_eq!(json["radius"], 3.0);
    }
}
