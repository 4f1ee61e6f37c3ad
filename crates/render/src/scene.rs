use crate::decoration::decoration_for;
use crate::palette;
use crate::particles::particle_field;
use crate::surface::{Fill, Surface};
use gallery_catalog::{BiomeType, WorldRecord};
use gallery_common::Rect;

/// Backing-store multiplier applied on attach, per axis.
pub const SUPERSAMPLE: f64 = 2.0;

/// Animated scene for one world.
///
/// Holds the frame counter and nothing else; every frame is a pure function
/// of `(biome, frame, surface size)`.
#[derive(Debug, Clone)]
pub struct SceneRenderer {
    world: WorldRecord,
    frame: u64,
}

impl SceneRenderer {
    /// Renderer for `world`, starting at frame 0.
    pub fn new(world: WorldRecord) -> Self {
        Self { world, frame: 0 }
    }

    pub fn world(&self) -> &WorldRecord {
        &self.world
    }

    /// Frame counter: the `t` the next [`SceneRenderer::draw_next`] will draw.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Prepare a surface for drawing: backing store at [`SUPERSAMPLE`] times
    /// the displayed size, with a matching coordinate scale so drawing stays
    /// in displayed units.
    pub fn attach(surface: &mut dyn Surface) {
        let size = surface.display_size().scaled(SUPERSAMPLE);
        let width = size.width.max(0.0).round() as u32;
        let height = size.height.max(0.0).round() as u32;
        surface.set_backing_size(width, height);
        surface.set_scale(SUPERSAMPLE, SUPERSAMPLE);
    }

    /// Draw the current frame, then advance the counter. Returns the frame
    /// that was drawn.
    pub fn draw_next(&mut self, surface: &mut dyn Surface) -> u64 {
        let drawn = self.frame;
        render_frame(self.world.biome, drawn, surface);
        self.frame += 1;
        tracing::trace!(world = %self.world.id, frame = drawn, "frame drawn");
        drawn
    }
}

/// Paint frame `frame` of a `biome` scene onto `surface`.
pub fn render_frame(biome: BiomeType, frame: u64, surface: &mut dyn Surface) {
    let size = surface.display_size();
    let bounds = Rect::from_size(size);

    surface.clear_rect(bounds);

    if let Some(gradient) = palette::background(biome, size) {
        surface.fill_rect(bounds, &Fill::Linear(gradient));
    }

    for particle in particle_field(frame, size) {
        surface.fill_circle(particle.center, particle.radius, particle.color());
    }

    decoration_for(biome).decorate(surface, size, frame);
}
