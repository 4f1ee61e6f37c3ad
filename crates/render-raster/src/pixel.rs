use crate::raster::{blend, device_span, distance_to_segment, sample_point, winding_number};
use gallery_common::{Color, DVec2, Rect, Size};
use gallery_render::{Fill, Path, SUPERSAMPLE, Surface};
use image::{ImageFormat, RgbaImage};
use sha2::{Digest, Sha256};
use std::io::{Seek, Write};
use thiserror::Error;

/// Largest backing-store side, in pixels, a surface may grow to once the
/// scene supersamples it.
pub const MAX_BACKING_SIDE: u32 = 16_384;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("surface has zero area: {width}x{height}")]
    ZeroArea { width: f64, height: f64 },
    #[error("surface too large: {width}x{height} (max side {max} px after supersampling)")]
    TooLarge { width: f64, height: f64, max: u32 },
    #[error("pixel buffer does not match {width}x{height}")]
    BufferMismatch { width: u32, height: u32 },
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// In-memory RGBA8 surface.
///
/// Pixels are straight (non-premultiplied) alpha, row-major, top-left first.
/// A fresh or resized surface is fully transparent.
#[derive(Debug, Clone)]
pub struct PixelSurface {
    display: Size,
    width: u32,
    height: u32,
    scale: DVec2,
    pixels: Vec<[u8; 4]>,
}

impl PixelSurface {
    /// Surface shown at `display` size, backed 1:1 until a scene attaches.
    pub fn new(display: Size) -> Result<Self, RasterError> {
        if display.is_empty() {
            return Err(RasterError::ZeroArea {
                width: display.width,
                height: display.height,
            });
        }
        let limit = MAX_BACKING_SIDE as f64;
        if display.width * SUPERSAMPLE > limit || display.height * SUPERSAMPLE > limit {
            return Err(RasterError::TooLarge {
                width: display.width,
                height: display.height,
                max: MAX_BACKING_SIDE,
            });
        }
        let width = display.width.round() as u32;
        let height = display.height.round() as u32;
        Ok(Self {
            display,
            width,
            height,
            scale: DVec2::ONE,
            pixels: vec![[0; 4]; width as usize * height as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn scale(&self) -> DVec2 {
        self.scale
    }

    /// Backing-store pixel at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// The backing store as a flat RGBA byte slice, ready for texture upload.
    pub fn as_rgba_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// SHA-256 of the backing-store dimensions and contents, hex encoded.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.width.to_le_bytes());
        hasher.update(self.height.to_le_bytes());
        hasher.update(self.as_rgba_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Copy of the backing store as an `image` buffer.
    pub fn to_image(&self) -> Result<RgbaImage, RasterError> {
        RgbaImage::from_raw(self.width, self.height, self.as_rgba_bytes().to_vec()).ok_or(
            RasterError::BufferMismatch {
                width: self.width,
                height: self.height,
            },
        )
    }

    /// Encode the backing store as PNG, alpha included.
    pub fn write_png<W: Write + Seek>(&self, mut out: W) -> Result<(), RasterError> {
        self.to_image()?.write_to(&mut out, ImageFormat::Png)?;
        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Blend `paint(p)` into every pixel whose center `p` lies in the user-space
    /// box `[min, max]` and for which `paint` returns a color.
    fn paint_box(&mut self, min: DVec2, max: DVec2, mut paint: impl FnMut(DVec2) -> Option<Color>) {
        let Some((xs, ys)) = device_span(min, max, self.scale, self.width, self.height) else {
            return;
        };
        for py in ys {
            for px in xs.clone() {
                if let Some(color) = paint(sample_point(px, py, self.scale)) {
                    let i = self.index(px, py);
                    blend(&mut self.pixels[i], color);
                }
            }
        }
    }
}

impl Surface for PixelSurface {
    fn display_size(&self) -> Size {
        self.display
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        tracing::trace!(width, height, "backing store resized");
        self.width = width;
        self.height = height;
        self.scale = DVec2::ONE;
        self.pixels = vec![[0; 4]; width as usize * height as usize];
    }

    fn set_scale(&mut self, x: f64, y: f64) {
        self.scale = DVec2::new(x, y);
    }

    fn clear_rect(&mut self, rect: Rect) {
        let Some((xs, ys)) =
            device_span(rect.min(), rect.max(), self.scale, self.width, self.height)
        else {
            return;
        };
        for py in ys {
            for px in xs.clone() {
                if rect.contains(sample_point(px, py, self.scale)) {
                    let i = self.index(px, py);
                    self.pixels[i] = [0; 4];
                }
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, fill: &Fill) {
        self.paint_box(rect.min(), rect.max(), |p| {
            if !rect.contains(p) {
                return None;
            }
            match fill {
                Fill::Solid { color } => Some(*color),
                Fill::Linear(gradient) => gradient.color_at(p),
            }
        });
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        let Some(bounds) = path.bounds() else {
            return;
        };
        let points = path.points();
        if points.len() < 3 {
            return;
        }
        let edges: Vec<(DVec2, DVec2)> = points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .map(|(a, b)| (*a, *b))
            .collect();
        self.paint_box(bounds.min(), bounds.max(), |p| {
            (winding_number(p, &edges) != 0).then_some(color)
        });
    }

    fn stroke_path(&mut self, path: &Path, color: Color, width: f64) {
        let half = width / 2.0;
        if half.is_nan() || half <= 0.0 {
            return;
        }
        let Some(bounds) = path.bounds() else {
            return;
        };
        let pad = DVec2::splat(half);
        let Some((xs, ys)) = device_span(
            bounds.min() - pad,
            bounds.max() + pad,
            self.scale,
            self.width,
            self.height,
        ) else {
            return;
        };

        // Overlapping segments must not double-blend, so mark first and paint once.
        let cols = (xs.end - xs.start) as usize;
        let mut covered = vec![false; cols * (ys.end - ys.start) as usize];
        for (a, b) in path.segments() {
            let Some((sx, sy)) = device_span(
                a.min(b) - pad,
                a.max(b) + pad,
                self.scale,
                self.width,
                self.height,
            ) else {
                continue;
            };
            for py in sy {
                for px in sx.clone() {
                    let slot = (py - ys.start) as usize * cols + (px - xs.start) as usize;
                    if !covered[slot]
                        && distance_to_segment(sample_point(px, py, self.scale), a, b) <= half
                    {
                        covered[slot] = true;
                    }
                }
            }
        }

        for (slot, _) in covered.iter().enumerate().filter(|(_, hit)| **hit) {
            let px = xs.start + (slot % cols) as u32;
            let py = ys.start + (slot / cols) as u32;
            let i = self.index(px, py);
            blend(&mut self.pixels[i], color);
        }
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        if !radius.is_finite() || radius <= 0.0 || !center.is_finite() {
            return;
        }
        let r = DVec2::splat(radius);
        let r_sq = radius * radius;
        self.paint_box(center - r, center + r, |p| {
            (p.distance_squared(center) <= r_sq).then_some(color)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_catalog::BiomeType;
    use gallery_render::{LinearGradient, SceneRenderer, render_frame};
    use proptest::prelude::*;
    use std::io::Cursor;

    const CLEAR: [u8; 4] = [0, 0, 0, 0];

    fn surface(w: f64, h: f64) -> PixelSurface {
        PixelSurface::new(Size::new(w, h)).unwrap()
    }

    #[test]
    fn zero_area_is_an_error() {
        let err = PixelSurface::new(Size::new(0.0, 100.0)).unwrap_err();
        assert!(matches!(err, RasterError::ZeroArea { .. }));
        assert!(err.to_string().contains("zero area"));
    }

    #[test]
    fn starts_transparent_at_display_size() {
        let s = surface(30.4, 20.0);
        assert_eq!((s.width(), s.height()), (30, 20));
        assert!(s.pixels().iter().all(|p| *p == CLEAR));
        assert_eq!(s.as_rgba_bytes().len(), 30 * 20 * 4);
        assert!(s.pixel(30, 0).is_none());
    }

    #[test]
    fn attach_doubles_backing_store() {
        let mut s = surface(100.0, 50.0);
        SceneRenderer::attach(&mut s);
        assert_eq!((s.width(), s.height()), (200, 100));
        assert_eq!(s.scale(), DVec2::splat(2.0));
        assert_eq!(s.display_size(), Size::new(100.0, 50.0));
    }

    #[test]
    fn gradient_fill_hits_top_and_bottom_colors() {
        let mut s = surface(100.0, 50.0);
        SceneRenderer::attach(&mut s);
        let top = Color::hex(0x1a1a2e);
        let bottom = Color::hex(0x4a4e69);
        let gradient = LinearGradient::vertical(s.display_size())
            .with_stop(0.0, top)
            .with_stop(1.0, bottom);
        s.fill_rect(Rect::from_size(s.display_size()), &Fill::Linear(gradient));

        assert_eq!(s.pixel(0, 0), Some(top.to_rgba8()));
        assert_eq!(s.pixel(199, 99), Some(bottom.to_rgba8()));
        assert!(s.pixels().iter().all(|p| p[3] == 255));
    }

    #[test]
    fn solid_rect_respects_bounds() {
        let mut s = surface(10.0, 10.0);
        let red = Color::rgb(255, 0, 0);
        s.fill_rect(Rect::new(2.0, 2.0, 3.0, 3.0), &Fill::Solid { color: red });
        assert_eq!(s.pixel(2, 2), Some([255, 0, 0, 255]));
        assert_eq!(s.pixel(4, 4), Some([255, 0, 0, 255]));
        assert_eq!(s.pixel(5, 5), Some(CLEAR));
        assert_eq!(s.pixel(1, 2), Some(CLEAR));
    }

    #[test]
    fn circle_covers_center_not_corner() {
        let mut s = surface(20.0, 20.0);
        s.fill_circle(DVec2::new(10.0, 10.0), 3.0, Color::WHITE);
        assert_eq!(s.pixel(10, 10), Some([255, 255, 255, 255]));
        assert_eq!(s.pixel(0, 0), Some(CLEAR));
        assert_eq!(s.pixel(14, 10), Some(CLEAR));
    }

    #[test]
    fn degenerate_circles_draw_nothing() {
        let mut s = surface(10.0, 10.0);
        s.fill_circle(DVec2::new(5.0, 5.0), 0.0, Color::WHITE);
        s.fill_circle(DVec2::new(5.0, 5.0), -2.0, Color::WHITE);
        s.fill_circle(DVec2::new(f64::NAN, 5.0), 2.0, Color::WHITE);
        assert!(s.pixels().iter().all(|p| *p == CLEAR));
    }

    #[test]
    fn triangle_fill_uses_interior() {
        let mut s = surface(10.0, 10.0);
        let mut tri = Path::new();
        tri.move_to(0.0, 10.0).line_to(5.0, 0.0).line_to(10.0, 10.0).close();
        s.fill_path(&tri, Color::rgb(0, 255, 0));
        assert_eq!(s.pixel(5, 7), Some([0, 255, 0, 255]));
        assert_eq!(s.pixel(0, 0), Some(CLEAR));
        assert_eq!(s.pixel(9, 1), Some(CLEAR));
    }

    #[test]
    fn open_path_fills_as_closed() {
        let mut s = surface(10.0, 10.0);
        let mut tri = Path::new();
        tri.move_to(0.0, 10.0).line_to(5.0, 0.0).line_to(10.0, 10.0);
        s.fill_path(&tri, Color::WHITE);
        assert_eq!(s.pixel(5, 7), Some([255, 255, 255, 255]));
    }

    #[test]
    fn stroke_covers_line_band() {
        let mut s = surface(20.0, 10.0);
        let mut line = Path::new();
        line.move_to(0.0, 5.0).line_to(20.0, 5.0);
        s.stroke_path(&line, Color::WHITE, 2.0);
        assert_eq!(s.pixel(10, 5), Some([255, 255, 255, 255]));
        assert_eq!(s.pixel(10, 4), Some([255, 255, 255, 255]));
        assert_eq!(s.pixel(10, 8), Some(CLEAR));
    }

    #[test]
    fn overlapping_stroke_segments_blend_once() {
        let mut s = surface(20.0, 10.0);
        let mut back_and_forth = Path::new();
        back_and_forth
            .move_to(0.0, 5.0)
            .line_to(15.0, 5.0)
            .line_to(0.0, 5.0);
        s.stroke_path(&back_and_forth, Color::WHITE.with_alpha(0.5), 2.0);
        assert_eq!(s.pixel(5, 5), Some([255, 255, 255, 128]));
    }

    #[test]
    fn clear_rect_resets_to_transparent() {
        let mut s = surface(10.0, 10.0);
        s.fill_rect(Rect::from_size(s.display_size()), &Fill::Solid { color: Color::WHITE });
        s.clear_rect(Rect::new(0.0, 0.0, 5.0, 10.0));
        assert_eq!(s.pixel(4, 3), Some(CLEAR));
        assert_eq!(s.pixel(5, 3), Some([255, 255, 255, 255]));
    }

    #[test]
    fn same_frame_same_digest() {
        let draw = |frame| {
            let mut s = surface(160.0, 100.0);
            SceneRenderer::attach(&mut s);
            render_frame(BiomeType::Ocean, frame, &mut s);
            s.digest()
        };
        assert_eq!(draw(42), draw(42));
        assert_ne!(draw(42), draw(43));
        assert_eq!(draw(0).len(), 64);
    }

    #[test]
    fn unrecognized_biome_leaves_background_transparent() {
        let mut s = surface(160.0, 100.0);
        SceneRenderer::attach(&mut s);
        render_frame(BiomeType::Unrecognized, 0, &mut s);
        let clear = s.pixels().iter().filter(|p| p[3] == 0).count();
        assert!(clear > s.pixels().len() / 2);

        render_frame(BiomeType::Desert, 0, &mut s);
        assert!(s.pixels().iter().all(|p| p[3] == 255));
    }

    #[test]
    fn redraw_starts_from_clear() {
        let mut a = surface(80.0, 60.0);
        SceneRenderer::attach(&mut a);
        render_frame(BiomeType::Mountain, 9, &mut a);
        render_frame(BiomeType::Mountain, 10, &mut a);

        let mut b = surface(80.0, 60.0);
        SceneRenderer::attach(&mut b);
        render_frame(BiomeType::Mountain, 10, &mut b);
        assert_eq!(a.digest(), b.digest());
    }

    #[test]
    fn png_keeps_size_and_straight_alpha() {
        let mut s = surface(4.0, 3.0);
        s.fill_rect(
            Rect::from_size(s.display_size()),
            &Fill::Solid {
                color: Color::WHITE.with_alpha(0.5),
            },
        );
        let mut out = Cursor::new(Vec::new());
        s.write_png(&mut out).unwrap();

        let bytes = out.into_inner();
        assert!(bytes.starts_with(b"\x89PNG"));
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 255, 255, 128]);
        assert_eq!(decoded.as_raw().as_slice(), s.as_rgba_bytes());
    }

    #[test]
    fn oversized_surface_is_an_error() {
        let err = PixelSurface::new(Size::new(1e10, 1e10)).unwrap_err();
        assert!(matches!(err, RasterError::TooLarge { .. }));
        assert!(err.to_string().contains("too large"));

        let edge = MAX_BACKING_SIDE as f64 / SUPERSAMPLE;
        assert!(PixelSurface::new(Size::new(edge + 1.0, 10.0)).is_err());
        assert!(PixelSurface::new(Size::new(10.0, edge + 1.0)).is_err());

        let mut s = PixelSurface::new(Size::new(edge, 1.0)).unwrap();
        SceneRenderer::attach(&mut s);
        assert_eq!(s.width(), MAX_BACKING_SIDE);
    }

    proptest! {
        #[test]
        fn circles_never_paint_outside_their_box(
            cx in -50.0f64..150.0,
            cy in -50.0f64..150.0,
            r in 0.0f64..40.0,
        ) {
            let mut s = surface(100.0, 100.0);
            s.fill_circle(DVec2::new(cx, cy), r, Color::WHITE);
            for y in 0..100u32 {
                for x in 0..100u32 {
                    let p = DVec2::new(x as f64 + 0.5, y as f64 + 0.5);
                    if p.distance(DVec2::new(cx, cy)) > r {
                        prop_assert_eq!(s.pixel(x, y), Some(CLEAR));
                    }
                }
            }
        }
    }
}
