//! The scene controller: composition root and lifecycle owner

use crate::disposer::{Disposer, DisposerStack};
use crate::hero::HeroOverlay;
use crate::loader::{spawn_load, LoadComplete};
use crate::pointer::PointerTracker;
use crate::scroll::ScrollAnimator;
use crate::surface::RenderSurface;
use crate::tween::Timeline;
use podium_core::{Camera, ModelGroup, Result, SceneGraph, Viewport};
use std::path::PathBuf;

/// Controller configuration supplied by the host
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Path to the one model asset, e.g. `/model.glb`
    pub asset_path: PathBuf,
    /// Initial viewport in device pixels
    pub viewport: Viewport,
    /// Accessibility preference: skip animated transitions entirely
    pub reduced_motion: bool,
}

/// The mutable scene state every handler operates on
///
/// One explicit record instead of state captured in closures, so nothing
/// holds a stale model reference after the asynchronous load lands.
pub struct SceneSession {
    pub scene: SceneGraph,
    pub camera: Camera,
    pub viewport: Viewport,
    /// Cleared at teardown; late async completions check this first
    pub alive: bool,
    /// Bumped at teardown so in-flight loads become stale
    pub generation: u64,
}

impl SceneSession {
    fn new(viewport: Viewport) -> Self {
        let mut camera = Camera::default();
        camera.set_aspect(viewport.aspect());
        Self {
            scene: SceneGraph::new(),
            camera,
            viewport,
            alive: true,
            generation: 1,
        }
    }
}

/// Owns the scene graph, camera, render surface, and the lifecycle of all
/// event-driven components
///
/// The render loop runs from mount: the host calls [`frame`] once per
/// display refresh. The asset loads asynchronously; pointer interaction and
/// the scroll animator are inert until it lands. Teardown via [`dispose`]
/// stops rendering immediately, unwinds registered cleanups in reverse
/// order, and marks any in-flight load stale.
///
/// [`frame`]: SceneController::frame
/// [`dispose`]: SceneController::dispose
pub struct SceneController<S: RenderSurface> {
    session: SceneSession,
    surface: S,
    timeline: Timeline,
    pointer: PointerTracker,
    animator: ScrollAnimator,
    hero: HeroOverlay,
    asset_path: PathBuf,
    load_rx: Option<flume::Receiver<LoadComplete>>,
    disposers: DisposerStack,
}

impl<S: RenderSurface> SceneController<S> {
    /// Mount the controller on a render surface
    ///
    /// Applies the initial viewport to the camera and surface right away;
    /// call [`begin_load`](Self::begin_load) to start fetching the asset.
    pub fn new(config: ControllerConfig, mut surface: S) -> Self {
        let session = SceneSession::new(config.viewport);
        surface.resize(config.viewport.width, config.viewport.height);
        Self {
            session,
            surface,
            timeline: Timeline::new(config.reduced_motion),
            pointer: PointerTracker::new(),
            animator: ScrollAnimator::new(),
            hero: HeroOverlay::new(),
            asset_path: config.asset_path,
            load_rx: None,
            disposers: DisposerStack::new(),
        }
    }

    /// Start the one asynchronous asset load
    pub fn begin_load(&mut self) {
        log::info!("loading model asset {}", self.asset_path.display());
        self.load_rx = Some(spawn_load(
            self.asset_path.clone(),
            self.session.generation,
        ));
    }

    /// Register a cleanup to run at teardown (reverse acquisition order)
    pub fn on_dispose(&mut self, cleanup: impl FnOnce() + 'static) {
        self.disposers.push(Disposer::new(cleanup));
    }

    /// Window/viewport resized
    ///
    /// Pure recomputation: camera aspect and surface size follow the new
    /// dimensions, so repeated calls with equal dimensions are idempotent.
    pub fn handle_resize(&mut self, width: u32, height: u32) {
        if !self.session.alive {
            return;
        }
        self.session.viewport = Viewport::new(width, height);
        self.session.camera.set_aspect(self.session.viewport.aspect());
        self.surface.resize(width, height);
    }

    /// Pointer pressed over the render surface
    pub fn handle_pointer_down(&mut self, x: f64, y: f64) {
        if self.session.alive {
            self.pointer.pointer_down(x, y);
        }
    }

    /// Pointer moved (global, drags may leave the surface)
    pub fn handle_pointer_move(&mut self, x: f64, y: f64) {
        if self.session.alive {
            self.pointer.pointer_move(x, y, self.session.scene.model_mut());
        }
    }

    /// Pointer released anywhere
    pub fn handle_pointer_up(&mut self) {
        self.pointer.pointer_up();
    }

    /// Scroll position changed; container bounds are viewport-relative
    pub fn handle_scroll(&mut self, container_top: f32, container_bottom: f32) {
        if !self.session.alive {
            return;
        }
        let viewport_height = self.session.viewport.height as f32;
        self.animator.on_scroll(
            &self.timeline,
            container_top,
            container_bottom,
            viewport_height,
        );
        self.hero.on_scroll(
            &self.timeline,
            container_top,
            container_bottom,
            viewport_height,
        );
    }

    /// One render-loop iteration: apply pending events, animate, draw
    ///
    /// Renders unconditionally while mounted, whatever loading, dragging, or
    /// animating is in progress. After [`dispose`](Self::dispose) this is a
    /// no-op, even for a frame that was already scheduled.
    pub fn frame(&mut self, dt: f32) -> Result<()> {
        if !self.session.alive {
            return Ok(());
        }
        self.poll_load();

        let scale = self.animator.advance(dt);
        if let Some(model) = self.session.scene.model_mut() {
            model.scale = scale;
        }
        self.hero.advance(dt);

        self.surface.render(&self.session.scene, &self.session.camera)
    }

    /// Drain the load channel without blocking
    fn poll_load(&mut self) {
        let Some(rx) = &self.load_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(msg) => {
                self.load_rx = None;
                self.complete_load(msg);
            }
            Err(flume::TryRecvError::Empty) => {}
            Err(flume::TryRecvError::Disconnected) => {
                self.load_rx = None;
            }
        }
    }

    /// Load-completion entry point
    ///
    /// Checks liveness before touching anything: a completion arriving after
    /// teardown, or from a superseded load, is silently dropped.
    pub fn complete_load(&mut self, msg: LoadComplete) {
        if !self.session.alive || msg.generation != self.session.generation {
            log::debug!("discarding stale asset load (generation {})", msg.generation);
            return;
        }
        match msg.result {
            Ok(mesh) => {
                let model = ModelGroup::from_mesh(mesh, self.session.viewport);
                log::info!(
                    "model installed: diameter {:.3}, target scale {}",
                    model.diameter,
                    model.target_scale
                );
                self.session.camera.frame(model.diameter);
                self.surface.upload_model(&model);
                let target = model.target_scale;
                self.session.scene.install_model(model);
                // Activates pointer rotation implicitly (a model now exists)
                // and pops in right away if the container is already visible.
                self.animator.set_target(&self.timeline, target);
            }
            Err(e) => {
                log::warn!("asset load failed, continuing with lights only: {}", e);
            }
        }
    }

    /// The user triggered the explore action
    pub fn trigger_explore(&mut self) {
        self.hero.explore();
    }

    /// Tear down: stop the render loop, unwind cleanups, release resources,
    /// and mark in-flight loads stale. Idempotent.
    pub fn dispose(&mut self) {
        if !self.session.alive {
            return;
        }
        log::info!("disposing scene controller");
        self.session.alive = false;
        self.session.generation += 1;
        self.load_rx = None;
        self.session.scene.remove_model();
        self.surface.discard_model();
        self.disposers.dispose_all();
    }

    pub fn is_disposed(&self) -> bool {
        !self.session.alive
    }

    pub fn session(&self) -> &SceneSession {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn hero(&self) -> &HeroOverlay {
        &self.hero
    }

    pub fn hero_mut(&mut self) -> &mut HeroOverlay {
        &mut self.hero
    }

    pub fn animator(&self) -> &ScrollAnimator {
        &self.animator
    }

    pub fn is_dragging(&self) -> bool {
        self.pointer.is_dragging()
    }
}

impl<S: RenderSurface> Drop for SceneController<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}
