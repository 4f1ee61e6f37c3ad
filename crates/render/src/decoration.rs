//! Biome-specific shapes drawn over the gradient and particle field.
//!
//! Only Mountain and Ocean worlds have decorations. The remaining biomes
//! resolve to [`Bare`], which draws nothing.

use crate::surface::{Path, Surface};
use gallery_catalog::BiomeType;
use gallery_common::{Color, Size};

pub const PEAK_COUNT: usize = 5;
pub const WAVE_COUNT: usize = 3;
/// Horizontal distance between wave samples.
pub const WAVE_STEP: f64 = 10.0;
pub const WAVE_LINE_WIDTH: f64 = 3.0;

const PEAK_TINT: Color = Color::rgb(138, 135, 255);
const WAVE_TINT: Color = Color::rgb(100, 200, 255);

/// Per-biome decoration pass. The default draws nothing.
pub trait Decoration: Sync {
    fn name(&self) -> &'static str;

    fn decorate(&self, _surface: &mut dyn Surface, _size: Size, _frame: u64) {}
}

/// Mountain ranges: translucent triangles whose apexes bob up and down.
#[derive(Debug, Clone, Copy, Default)]
pub struct Peaks;

/// Ocean swell: stacked sine-wave strokes fading with depth.
#[derive(Debug, Clone, Copy, Default)]
pub struct Waves;

/// No decoration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bare;

/// Decoration pass for `biome`.
pub fn decoration_for(biome: BiomeType) -> &'static dyn Decoration {
    match biome {
        BiomeType::Mountain => &Peaks,
        BiomeType::Ocean => &Waves,
        _ => &Bare,
    }
}

impl Peaks {
    fn phase(index: usize, frame: u64) -> f64 {
        (frame as f64 * 0.01 + index as f64).sin()
    }

    /// Outline of peak `index`. Neighbouring peaks overlap by 100 units at
    /// the base.
    pub fn path(index: usize, size: Size, frame: u64) -> Path {
        let (w, h) = (size.width, size.height);
        let left = index as f64 * (w / 4.0);
        let mut path = Path::new();
        path.move_to(left - 50.0, h)
            .line_to(left + w / 8.0, h - 200.0 - Self::phase(index, frame) * 20.0)
            .line_to(left + w / 4.0 + 50.0, h)
            .close();
        path
    }

    pub fn color(index: usize, frame: u64) -> Color {
        PEAK_TINT.with_alpha(0.3 + Self::phase(index, frame) * 0.1)
    }
}

impl Decoration for Peaks {
    fn name(&self) -> &'static str {
        "peaks"
    }

    fn decorate(&self, surface: &mut dyn Surface, size: Size, frame: u64) {
        for index in 0..PEAK_COUNT {
            surface.fill_path(&Self::path(index, size, frame), Self::color(index, frame));
        }
    }
}

impl Waves {
    /// Polyline for wave `index`, sampled every [`WAVE_STEP`] units across
    /// the width. Empty when the surface has no width.
    pub fn path(index: usize, size: Size, frame: u64) -> Path {
        let k = index as f64;
        let t = frame as f64;
        let baseline = size.height / 2.0 + k * 50.0;
        let mut path = Path::new();
        let mut x = 0.0;
        while x < size.width {
            path.line_to(x, baseline + (x * 0.02 + t * 0.02 + k).sin() * 20.0);
            x += WAVE_STEP;
        }
        path
    }

    pub fn color(index: usize) -> Color {
        WAVE_TINT.with_alpha(0.3 - index as f64 * 0.1)
    }
}

impl Decoration for Waves {
    fn name(&self) -> &'static str {
        "waves"
    }

    fn decorate(&self, surface: &mut dyn Surface, size: Size, frame: u64) {
        for index in 0..WAVE_COUNT {
            surface.stroke_path(
                &Self::path(index, size, frame),
                Self::color(index),
                WAVE_LINE_WIDTH,
            );
        }
    }
}

impl Decoration for Bare {
    fn name(&self) -> &'static str {
        "bare"
    }
}
