//! Render surface seam
//!
//! The controller talks to rendering through this trait so the scene logic
//! stays independent of wgpu; the GPU adapter wraps `SceneRenderer`, and the
//! recording double stands in for it under test.

use podium_core::{Camera, ModelGroup, Result, SceneGraph};
use podium_gpu::SceneRenderer;

/// The drawable region the controller renders into
pub trait RenderSurface {
    /// Resize the underlying surface to the viewport in device pixels
    fn resize(&mut self, width: u32, height: u32);

    /// Upload the installed model's geometry
    fn upload_model(&mut self, model: &ModelGroup);

    /// Release the uploaded geometry
    fn discard_model(&mut self);

    /// Draw the current scene/camera state
    fn render(&mut self, scene: &SceneGraph, camera: &Camera) -> Result<()>;
}

/// wgpu-backed surface
pub struct GpuSurface {
    renderer: SceneRenderer,
}

impl GpuSurface {
    pub fn new(renderer: SceneRenderer) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &SceneRenderer {
        &self.renderer
    }
}

impl RenderSurface for GpuSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
    }

    fn upload_model(&mut self, model: &ModelGroup) {
        self.renderer.upload_model(model);
    }

    fn discard_model(&mut self) {
        self.renderer.discard_model();
    }

    fn render(&mut self, scene: &SceneGraph, camera: &Camera) -> Result<()> {
        self.renderer.render(scene, camera)
    }
}

/// Test double recording every call it receives
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub resizes: Vec<(u32, u32)>,
    pub uploads: usize,
    pub discards: usize,
    pub renders: usize,
    /// Model scale observed at each render, when a model was present
    pub rendered_scales: Vec<f32>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_size(&self) -> Option<(u32, u32)> {
        self.resizes.last().copied()
    }
}

impl RenderSurface for RecordingSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.resizes.push((width, height));
    }

    fn upload_model(&mut self, _model: &ModelGroup) {
        self.uploads += 1;
    }

    fn discard_model(&mut self) {
        self.discards += 1;
    }

    fn render(&mut self, scene: &SceneGraph, _camera: &Camera) -> Result<()> {
        self.renders += 1;
        if let Some(model) = scene.model() {
            self.rendered_scales.push(model.scale);
        }
        Ok(())
    }
}
