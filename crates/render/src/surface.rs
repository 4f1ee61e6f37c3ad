use gallery_common::{Color, DVec2, Rect, Size};
use serde::Serialize;

/// A color at a position along a gradient, `offset` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

/// Linear gradient between two points. Colors are interpolated along the
/// projection of each sample point onto the `start -> end` axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearGradient {
    pub start: DVec2,
    pub end: DVec2,
    stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self {
            start,
            end,
            stops: Vec::new(),
        }
    }

    /// Top-to-bottom gradient spanning `size`.
    pub fn vertical(size: Size) -> Self {
        Self::new(DVec2::ZERO, DVec2::new(0.0, size.height))
    }

    /// Insert a stop, keeping stops ordered by offset. Stops with equal
    /// offsets keep insertion order.
    pub fn add_color_stop(&mut self, offset: f64, color: Color) {
        let offset = offset.clamp(0.0, 1.0);
        let at = self.stops.partition_point(|s| s.offset <= offset);
        self.stops.insert(at, ColorStop { offset, color });
    }

    pub fn with_stop(mut self, offset: f64, color: Color) -> Self {
        self.add_color_stop(offset, color);
        self
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Gradient color at `p`. `None` when there is nothing to paint: no stops,
    /// or a zero-length axis.
    pub fn color_at(&self, p: DVec2) -> Option<Color> {
        let first = self.stops.first()?;
        let last = self.stops.last()?;
        let axis = self.end - self.start;
        let len_sq = axis.length_squared();
        if len_sq == 0.0 {
            return None;
        }
        let t = ((p - self.start).dot(axis) / len_sq).clamp(0.0, 1.0);
        if t <= first.offset {
            return Some(first.color);
        }
        if t >= last.offset {
            return Some(last.color);
        }
        let upper = self.stops.partition_point(|s| s.offset <= t);
        let (a, b) = (self.stops[upper - 1], self.stops[upper]);
        let span = b.offset - a.offset;
        let local = if span > 0.0 { (t - a.offset) / span } else { 0.0 };
        Some(a.color.lerp(b.color, local))
    }
}

/// Paint source for rectangle fills.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fill {
    Solid { color: Color },
    Linear(LinearGradient),
}

/// A single open or closed polyline.
///
/// Only one subpath is tracked: `move_to` on a non-empty path starts over.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Path {
    points: Vec<DVec2>,
    closed: bool,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.points.clear();
        self.closed = false;
        self.points.push(DVec2::new(x, y));
        self
    }

    /// Append a vertex. On an empty path this behaves like `move_to`.
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.points.push(DVec2::new(x, y));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.closed = true;
        self
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Edges of the path, including the closing edge when closed.
    pub fn segments(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        let closing = match (self.closed, self.points.first(), self.points.last()) {
            (true, Some(&first), Some(&last)) if self.points.len() > 2 => Some((last, first)),
            _ => None,
        };
        self.points
            .windows(2)
            .map(|w| (w[0], w[1]))
            .chain(closing)
    }

    /// Bounding box of the vertices, if any.
    pub fn bounds(&self) -> Option<Rect> {
        let first = *self.points.first()?;
        let (min, max) = self
            .points
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Some(Rect::new(min.x, min.y, max.x - min.x, max.y - min.y))
    }
}

/// A resizable 2D drawable region.
///
/// All coordinates passed to drawing calls are in displayed-size units and
/// are mapped to backing pixels through the current scale.
pub trait Surface {
    /// Size the surface occupies on screen.
    fn display_size(&self) -> Size;

    /// Resize the backing store. Resets the coordinate scale to 1 and clears
    /// the contents.
    fn set_backing_size(&mut self, width: u32, height: u32);

    /// Set the user-to-backing coordinate scale.
    fn set_scale(&mut self, x: f64, y: f64);

    /// Reset `rect` to fully transparent.
    fn clear_rect(&mut self, rect: Rect);

    fn fill_rect(&mut self, rect: Rect, fill: &Fill);

    /// Fill the polygon described by `path` (nonzero winding). The path is
    /// treated as closed.
    fn fill_path(&mut self, path: &Path, color: Color);

    fn stroke_path(&mut self, path: &Path, color: Color, width: f64);

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color);
}
