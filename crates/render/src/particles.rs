//! Ambient particle field. Every particle is a pure function of its index
//! and the frame counter; nothing is stored between frames.

use gallery_common::{Color, DVec2, Size};

pub const PARTICLE_COUNT: usize = 100;

/// One particle as drawn on a given frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub center: DVec2,
    pub radius: f64,
    pub alpha: f64,
}

impl Particle {
    /// Particle `index` on frame `frame` for a surface of `size`.
    ///
    /// Positions wrap with a floating remainder, which keeps the sign of the
    /// dividend: `y` can be negative on surfaces shorter than 300 units.
    pub fn at(index: usize, frame: u64, size: Size) -> Self {
        let i = index as f64;
        let t = frame as f64;
        let x = (i * 137.5 + t * 0.5) % size.width;
        let y = ((i + t * 0.01).sin() * 50.0
            + size.height / 2.0
            + (i * 0.5 + t * 0.02).cos() * 100.0)
            % size.height;
        Self {
            center: DVec2::new(x, y),
            radius: radius(index, frame),
            alpha: alpha(index, frame),
        }
    }

    pub fn color(&self) -> Color {
        Color::WHITE.with_alpha(self.alpha)
    }
}

/// Radius of particle `index` on frame `frame`; always in `[1, 5]`.
pub fn radius(index: usize, frame: u64) -> f64 {
    pulse(index, frame) * 2.0 + 3.0
}

/// Opacity of particle `index` on frame `frame`; always in `[0.1, 0.7]`.
pub fn alpha(index: usize, frame: u64) -> f64 {
    pulse(index, frame) * 0.3 + 0.4
}

fn pulse(index: usize, frame: u64) -> f64 {
    (index as f64 + frame as f64 * 0.02).sin()
}

/// All particles for one frame, in index order.
pub fn particle_field(frame: u64, size: Size) -> impl Iterator<Item = Particle> {
    (0..PARTICLE_COUNT).map(move |i| Particle::at(i, frame, size))
}
