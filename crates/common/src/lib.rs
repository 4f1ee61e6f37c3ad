//! Shared types used across the gallery crates: colors and 2D geometry.
//!
//! All geometry is expressed in displayed-size units (the size a surface has
//! on screen), never in backing pixels.

mod types;

pub use glam::DVec2;
pub use types::{Color, Rect, Size};
