//! Scene Renderer: draws an animated backdrop for a world onto any
//! [`Surface`].
//!
//! # Invariants
//! - A frame is a pure function of `(biome, frame counter, surface size)`.
//! - The frame counter starts at 0 on every bind and grows by 1 per frame.
//! - A cancelled scene issues no further draw calls.
//!
//! [`RecordingSurface`] captures draw calls for inspection; pixel output lives
//! in a separate backend crate.

mod decoration;
mod host;
mod palette;
mod particles;
mod recording;
mod scene;
mod surface;

pub use decoration::{
    Bare, Decoration, PEAK_COUNT, Peaks, WAVE_COUNT, WAVE_LINE_WIDTH, WAVE_STEP, Waves,
    decoration_for,
};
pub use host::SceneHost;
pub use palette::{PALETTE, background, gradient_stops};
pub use particles::{PARTICLE_COUNT, Particle, alpha, particle_field, radius};
pub use recording::{DrawCommand, RecordingSurface};
pub use scene::{SUPERSAMPLE, SceneRenderer, render_frame};
pub use surface::{ColorStop, Fill, LinearGradient, Path, Surface};

pub fn crate_info() -> &'static str {
    "gallery-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
