//! Software raster backend for the scene renderer.
//!
//! Draws into an RGBA8 buffer with pixel-center sampling and source-over
//! blending. There is no antialiasing; crisp edges come from the 2x
//! supersampled backing store the scene sets up on attach.
//!
//! # Invariants
//! - Output depends only on the sequence of draw calls.
//! - Drawing outside the backing store is clipped, never an error.

mod pixel;
mod raster;

pub use pixel::{MAX_BACKING_SIDE, PixelSurface, RasterError};

pub fn crate_info() -> &'static str {
    "gallery-render-raster v0.1.0"
}
