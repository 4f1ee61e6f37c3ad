use egui::load::SizedTexture;
use egui::{Color32, ColorImage, Context as EguiContext, RichText, Sense, TextureHandle, TextureOptions};
use gallery_catalog::{Catalog, Selection, WorldRecord, format_population};
use gallery_clock::FrameQueue;
use gallery_common::Size;
use gallery_input::{Action, Transition, dispatch};
use gallery_render::SceneHost;
use gallery_render_raster::PixelSurface;

/// Window and scene dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesktopConfig {
    pub window_width: u32,
    pub window_height: u32,
    /// Displayed size of the scene canvas inside the modal.
    pub scene: Size,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 800,
            scene: Size::new(800.0, 500.0),
        }
    }
}

const CARD_WIDTH: f32 = 240.0;

/// Everything the gallery UI owns: the catalog, which world is open, and the
/// scene host animating it.
pub struct AppState {
    config: DesktopConfig,
    catalog: Catalog,
    selection: Selection,
    host: SceneHost<PixelSurface, FrameQueue>,
    /// Surface handed back by the last unbind, reused on the next bind.
    spare: Option<PixelSurface>,
    texture: Option<TextureHandle>,
    scene_dirty: bool,
}

impl AppState {
    pub fn new(config: DesktopConfig) -> Self {
        Self {
            config,
            catalog: Catalog::builtin(),
            selection: Selection::new(),
            host: SceneHost::new(FrameQueue::new()),
            spare: None,
            texture: None,
            scene_dirty: false,
        }
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    /// Route an action through the selection and onto the scene host.
    pub fn apply(&mut self, action: Action) {
        match dispatch(action, &mut self.selection, &self.catalog) {
            Some(Transition::Bind(world)) => self.open(world),
            Some(Transition::Unbind) => self.close(),
            None => {}
        }
    }

    fn open(&mut self, world: &WorldRecord) {
        let bound = if self.host.active_world().is_some() {
            self.host.rebind(*world)
        } else {
            let surface = self.spare.take().or_else(|| self.fresh_surface());
            self.host.bind(*world, surface)
        };

        if bound {
            tracing::info!(world = world.name, "scene opened");
            self.scene_dirty = true;
        } else {
            tracing::warn!(world = world.name, "no surface for scene; closing");
            self.selection.clear();
        }
    }

    fn close(&mut self) {
        if let Some(surface) = self.host.unbind() {
            self.spare = Some(surface);
        }
        self.texture = None;
        self.scene_dirty = false;
        tracing::info!("scene closed");
    }

    fn fresh_surface(&self) -> Option<PixelSurface> {
        match PixelSurface::new(self.config.scene) {
            Ok(surface) => Some(surface),
            Err(e) => {
                tracing::error!("failed to create scene surface: {e}");
                None
            }
        }
    }

    /// Advance the refresh clock by one display refresh.
    pub fn tick(&mut self) {
        if self.host.tick() > 0 {
            self.scene_dirty = true;
        }
    }

    pub fn is_scene_open(&self) -> bool {
        self.host.active_world().is_some()
    }

    fn upload_scene(&mut self, ctx: &EguiContext) {
        if !self.scene_dirty {
            return;
        }
        let Some(surface) = self.host.surface() else {
            return;
        };
        let image = ColorImage::from_rgba_unmultiplied(
            [surface.width() as usize, surface.height() as usize],
            surface.as_rgba_bytes(),
        );
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::LINEAR),
            None => self.texture = Some(ctx.load_texture("scene", image, TextureOptions::LINEAR)),
        }
        self.scene_dirty = false;
    }

    pub fn draw_ui(&mut self, ctx: &EguiContext) {
        self.upload_scene(ctx);
        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new("Gemini Worlds").size(32.0).strong());
                ui.label("Explore infinite parallel dimensions");
            });
            ui.add_space(16.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for world in self.catalog.iter() {
                        if world_card(ui, world) {
                            actions.push(Action::Select(world.id));
                        }
                    }
                });
            });

            ui.add_space(8.0);
            ui.small("1-6: open world | Esc: close");
        });

        if let Some(world) = self.host.active_world().copied() {
            let screen = ctx.screen_rect();
            egui::Area::new(egui::Id::new("scene_backdrop"))
                .order(egui::Order::Middle)
                .fixed_pos(screen.min)
                .show(ctx, |ui| {
                    ui.painter()
                        .rect_filled(screen, 0.0, Color32::from_black_alpha(200));
                    if ui.allocate_rect(screen, Sense::click()).clicked() {
                        actions.push(Action::Close);
                    }
                });

            egui::Window::new("scene")
                .title_bar(false)
                .resizable(false)
                .collapsible(false)
                .order(egui::Order::Foreground)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.heading(format!("{} {}", world.icon, world.name));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Close").clicked() {
                                actions.push(Action::Close);
                            }
                        });
                    });
                    if let Some(texture) = &self.texture {
                        let size = egui::vec2(
                            self.config.scene.width as f32,
                            self.config.scene.height as f32,
                        );
                        ui.add(egui::Image::new(SizedTexture::new(texture.id(), size)));
                    }
                    ui.label(format!("{} - {}", world.name, world.description));
                });
        }

        for action in actions {
            self.apply(action);
        }
    }
}

/// One catalog card. Returns true when clicked.
fn world_card(ui: &mut egui::Ui, world: &WorldRecord) -> bool {
    let response = egui::Frame::group(ui.style())
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.label(RichText::new(world.icon).size(36.0));
            ui.label(RichText::new(world.name).strong().size(18.0));
            ui.label(world.description);
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.small(format!("Type: {}", world.biome));
                ui.small(format!("Pop: {}", format_population(world.inhabitants)));
            });
        })
        .response
        .interact(Sense::click());
    response.clicked()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_catalog::{BiomeType, WorldId};
    use gallery_clock::RefreshClock;

    fn state() -> AppState {
        AppState::new(DesktopConfig {
            scene: Size::new(80.0, 50.0),
            ..DesktopConfig::default()
        })
    }

    #[test]
    fn default_config() {
        let c = DesktopConfig::default();
        assert_eq!((c.window_width, c.window_height), (1280, 800));
        assert_eq!(c.scene, Size::new(800.0, 500.0));
    }

    #[test]
    fn select_opens_scene_at_supersampled_size() {
        let mut app = state();
        app.apply(Action::Select(WorldId(1)));
        assert!(app.is_scene_open());
        let surface = app.host.surface().unwrap();
        assert_eq!((surface.width(), surface.height()), (160, 100));
        assert!(app.scene_dirty);
    }

    #[test]
    fn switching_reuses_surface_and_restarts() {
        let mut app = state();
        app.apply(Action::Select(WorldId(1)));
        app.tick();
        app.tick();
        app.apply(Action::Select(WorldId(3)));
        assert_eq!(app.host.active_world().unwrap().biome, BiomeType::Ocean);
        assert_eq!(app.host.frame(), Some(1));
        assert_eq!(app.host.clock().pending_count(), 1);
    }

    #[test]
    fn close_stops_animation_and_keeps_spare() {
        let mut app = state();
        app.apply(Action::Select(WorldId(2)));
        app.apply(Action::Close);
        assert!(!app.is_scene_open());
        assert!(app.spare.is_some());
        assert_eq!(app.host.clock().pending_count(), 0);
        assert!(!app.selection.is_open());

        app.apply(Action::Select(WorldId(4)));
        assert!(app.spare.is_none());
        assert!(app.is_scene_open());
    }

    #[test]
    fn zero_area_scene_leaves_gallery_closed() {
        let mut app = AppState::new(DesktopConfig {
            scene: Size::new(0.0, 0.0),
            ..DesktopConfig::default()
        });
        app.apply(Action::Select(WorldId(1)));
        assert!(!app.is_scene_open());
        assert!(!app.selection.is_open());
    }
}
