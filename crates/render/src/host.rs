use crate::scene::SceneRenderer;
use crate::surface::Surface;
use gallery_catalog::WorldRecord;
use gallery_clock::{FrameRequestId, FrameTimer, RefreshClock};
use std::time::Instant;

/// The scene currently bound to a surface.
struct ActiveScene<S> {
    renderer: SceneRenderer,
    surface: S,
    /// Outstanding frame request. `None` only while a frame is executing.
    pending: Option<FrameRequestId>,
}

/// Owns the active scene and drives it from a refresh clock.
///
/// The UI layer calls [`SceneHost::bind`] / [`SceneHost::unbind`]; the host
/// never changes bindings on its own. At most one scene is active, and it
/// exclusively owns its surface.
///
/// # Invariants
/// - An active scene has exactly one pending frame request between frames.
/// - Tearing a scene down cancels its pending request before anything else
///   is bound.
/// - A request id that does not match the active scene's pending request is
///   ignored, so a cancelled scene never draws again.
pub struct SceneHost<S, C> {
    clock: C,
    active: Option<ActiveScene<S>>,
    timer: FrameTimer,
}

impl<S: Surface, C: RefreshClock> SceneHost<S, C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            active: None,
            timer: FrameTimer::default(),
        }
    }

    /// Bind `world` to `surface` and start animating.
    ///
    /// Any active scene is torn down first and its surface dropped; call
    /// [`SceneHost::unbind`] beforehand to keep it. The surface is attached
    /// (backing store supersampled), frame 0 is drawn immediately, and the
    /// next frame is requested. Returns false, with nothing started, when no
    /// surface is available.
    pub fn bind(&mut self, world: WorldRecord, surface: Option<S>) -> bool {
        let _span = tracing::debug_span!("scene_bind", world = %world.id).entered();

        if self.teardown().is_some() {
            tracing::debug!("previous scene replaced");
        }

        let Some(mut surface) = surface else {
            tracing::debug!("surface unavailable, scene not started");
            return false;
        };

        SceneRenderer::attach(&mut surface);
        let mut renderer = SceneRenderer::new(world);
        self.timer.reset();

        let started = Instant::now();
        renderer.draw_next(&mut surface);
        self.timer.record(started.elapsed());

        let pending = Some(self.clock.request_frame());
        tracing::debug!(name = world.name, biome = %world.biome, "scene bound");
        self.active = Some(ActiveScene {
            renderer,
            surface,
            pending,
        });
        true
    }

    /// Bind a different world to the surface the active scene already owns.
    /// The new scene starts from frame 0. Returns false when nothing is bound.
    pub fn rebind(&mut self, world: WorldRecord) -> bool {
        let surface = self.unbind();
        self.bind(world, surface)
    }

    /// Stop animating and hand the surface back.
    pub fn unbind(&mut self) -> Option<S> {
        let surface = self.teardown();
        if surface.is_some() {
            tracing::debug!("scene unbound");
        }
        surface
    }

    fn teardown(&mut self) -> Option<S> {
        let scene = self.active.take()?;
        if let Some(id) = scene.pending {
            self.clock.cancel_frame(id);
        }
        tracing::debug!(
            world = %scene.renderer.world().id,
            frames = scene.renderer.frame(),
            "scene torn down"
        );
        Some(scene.surface)
    }

    /// One refresh tick: run the frames that came due. Returns how many
    /// frames were drawn (0 or 1).
    pub fn tick(&mut self) -> usize {
        let due = self.clock.take_due();
        due.into_iter().filter(|id| self.on_frame(*id)).count()
    }

    /// Run the frame attached to request `id`, if it belongs to the active
    /// scene. Stale or foreign ids are ignored and return false.
    pub fn on_frame(&mut self, id: FrameRequestId) -> bool {
        let Some(scene) = self.active.as_mut() else {
            tracing::trace!(%id, "frame fired with no active scene");
            return false;
        };
        if scene.pending != Some(id) {
            tracing::trace!(%id, "stale frame request ignored");
            return false;
        }

        scene.pending = None;
        let started = Instant::now();
        scene.renderer.draw_next(&mut scene.surface);
        self.timer.record(started.elapsed());
        scene.pending = Some(self.clock.request_frame());
        true
    }

    pub fn active_world(&self) -> Option<&WorldRecord> {
        self.active.as_ref().map(|s| s.renderer.world())
    }

    /// Frame counter of the active scene: frames drawn so far.
    pub fn frame(&self) -> Option<u64> {
        self.active.as_ref().map(|s| s.renderer.frame())
    }

    pub fn pending_request(&self) -> Option<FrameRequestId> {
        self.active.as_ref().and_then(|s| s.pending)
    }

    pub fn is_animating(&self) -> bool {
        self.pending_request().is_some()
    }

    pub fn surface(&self) -> Option<&S> {
        self.active.as_ref().map(|s| &s.surface)
    }

    /// Mutable access to the bound surface, for hosts that need to read back
    /// or annotate it between frames.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.active.as_mut().map(|s| &mut s.surface)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutable access to the clock, for drivers that fire requests themselves
    /// and route them through [`SceneHost::on_frame`].
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Draw-time statistics for the active scene.
    pub fn frame_timer(&self) -> &FrameTimer {
        &self.timer
    }
}
