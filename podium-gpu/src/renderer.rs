//! Scene renderer: one lit model over a fixed-light background

use crate::{shaders, GpuContext};
use bytemuck::{Pod, Zeroable};
use nalgebra::Point3;
use podium_core::{Camera, Error, ModelGroup, Result, SceneGraph, BACKGROUND_COLOR};
use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::window::Window;

/// Vertex data for scene rendering
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SceneVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

impl SceneVertex {
    /// Vertex buffer layout descriptor
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SceneVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                // Normal
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                // Color
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Camera uniform data
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub view_pos: [f32; 3],
    pub _padding: f32,
}

/// Model transform uniform data
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
}

/// Lighting uniform data for the two fixed scene lights
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct LightUniform {
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
    pub light_position: [f32; 3],
    pub light_intensity: f32,
    pub light_color: [f32; 3],
    pub _padding: f32,
}

struct MeshBuffers {
    vertex: wgpu::Buffer,
    index: wgpu::Buffer,
    index_count: u32,
}

/// wgpu-backed renderer for the showcase scene
///
/// The model's vertex and index buffers are uploaded once when the asset is
/// installed; per-frame changes (rotation, animated scale, camera) flow
/// through uniform buffers only.
pub struct SceneRenderer {
    pub gpu: GpuContext,
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    camera_buffer: wgpu::Buffer,
    model_buffer: wgpu::Buffer,
    light_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    depth_view: wgpu::TextureView,
    mesh: Option<MeshBuffers>,
}

impl SceneRenderer {
    /// Create a new renderer for the given window
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let gpu = GpuContext::new().await?;

        let surface = gpu
            .instance
            .create_surface(window.clone())
            .map_err(|e| Error::Gpu(format!("Failed to create surface: {:?}", e)))?;

        let surface_caps = surface.get_capabilities(&gpu.adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let size = window.inner_size();
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&gpu.device, &surface_config);

        let camera_uniform = CameraUniform {
            view_proj: nalgebra::Matrix4::identity().into(),
            view_pos: [0.0, 0.0, 0.0],
            _padding: 0.0,
        };
        let camera_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::bytes_of(&camera_uniform),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let model_uniform = ModelUniform {
            model: nalgebra::Matrix4::identity().into(),
        };
        let model_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Model Buffer"),
                contents: bytemuck::bytes_of(&model_uniform),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let light_uniform = LightUniform {
            ambient_color: [1.0, 1.0, 1.0],
            ambient_intensity: 0.5,
            light_position: [5.0, 5.0, 5.0],
            light_intensity: 1.0,
            light_color: [1.0, 1.0, 1.0],
            _padding: 0.0,
        };
        let light_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Light Buffer"),
                contents: bytemuck::bytes_of(&light_uniform),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let bind_group_layout =
            gpu.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    entries: &[
                        uniform_layout_entry(0),
                        uniform_layout_entry(1),
                        uniform_layout_entry(2),
                    ],
                    label: Some("scene_bind_group_layout"),
                });

        let bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: model_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: light_buffer.as_entire_binding(),
                },
            ],
            label: Some("scene_bind_group"),
        });

        let shader = gpu
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Scene Shader"),
                source: wgpu::ShaderSource::Wgsl(shaders::SCENE_SHADER.into()),
            });

        let pipeline_layout = gpu
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Scene Render Pipeline Layout"),
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            });

        let pipeline = gpu
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Scene Render Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: "vs_main",
                    buffers: &[SceneVertex::desc()],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: "fs_main",
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    unclipped_depth: false,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    conservative: false,
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: wgpu::TextureFormat::Depth32Float,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState {
                    count: 1,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview: None,
            });

        let depth_view = create_depth_view(&gpu.device, &surface_config);

        Ok(Self {
            gpu,
            window,
            surface,
            surface_config,
            pipeline,
            camera_buffer,
            model_buffer,
            light_buffer,
            bind_group,
            depth_view,
            mesh: None,
        })
    }

    /// Window backing this renderer
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Resize the render surface
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            log::debug!("resizing render surface to {}x{}", width, height);
            self.surface_config.width = width;
            self.surface_config.height = height;
            self.surface.configure(&self.gpu.device, &self.surface_config);
            self.depth_view = create_depth_view(&self.gpu.device, &self.surface_config);
        }
    }

    /// Upload the installed model's geometry
    ///
    /// Replaces any previously uploaded geometry; the scene graph holds at
    /// most one model so the old buffers are simply dropped.
    pub fn upload_model(&mut self, model: &ModelGroup) {
        let vertices: Vec<SceneVertex> = model
            .mesh
            .vertices
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let normal = model
                    .mesh
                    .normals
                    .as_ref()
                    .and_then(|n| n.get(i))
                    .map(|n| [n.x, n.y, n.z])
                    .unwrap_or([0.0, 0.0, 1.0]);
                let color = model
                    .mesh
                    .colors
                    .as_ref()
                    .and_then(|c| c.get(i))
                    .map(|c| [c[0] as f32 / 255.0, c[1] as f32 / 255.0, c[2] as f32 / 255.0])
                    .unwrap_or([0.8, 0.8, 0.8]);
                SceneVertex {
                    position: [v.x, v.y, v.z],
                    normal,
                    color,
                }
            })
            .collect();

        let indices: Vec<u32> = model
            .mesh
            .faces
            .iter()
            .flat_map(|f| [f[0] as u32, f[1] as u32, f[2] as u32])
            .collect();

        let vertex = self
            .gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Scene Vertex Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index = self
            .gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Scene Index Buffer"),
                contents: bytemuck::cast_slice(&indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        log::info!(
            "uploaded model geometry: {} vertices, {} indices",
            vertices.len(),
            indices.len()
        );
        self.mesh = Some(MeshBuffers {
            vertex,
            index,
            index_count: indices.len() as u32,
        });
    }

    /// Drop the uploaded geometry
    pub fn discard_model(&mut self) {
        self.mesh = None;
    }

    /// Render the current scene and camera state
    ///
    /// Runs unconditionally: with no model installed the pass still clears
    /// to the background color so the lights-only scene stays visible.
    pub fn render(&mut self, scene: &SceneGraph, camera: &Camera) -> Result<()> {
        let camera_uniform = CameraUniform {
            view_proj: (camera.projection_matrix() * camera.view_matrix()).into(),
            view_pos: camera.position.coords.into(),
            _padding: 0.0,
        };
        self.gpu
            .queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&camera_uniform));

        if let Some(model) = scene.model() {
            let model_uniform = ModelUniform {
                model: model.model_matrix().into(),
            };
            self.gpu
                .queue
                .write_buffer(&self.model_buffer, 0, bytemuck::bytes_of(&model_uniform));
        }

        let light_uniform = LightUniform {
            ambient_color: scene.ambient.color,
            ambient_intensity: scene.ambient.intensity,
            light_position: point_to_array(scene.directional.position),
            light_intensity: scene.directional.intensity,
            light_color: scene.directional.color,
            _padding: 0.0,
        };
        self.gpu
            .queue
            .write_buffer(&self.light_buffer, 0, bytemuck::bytes_of(&light_uniform));

        let output = self
            .surface
            .get_current_texture()
            .map_err(|e| Error::Gpu(format!("Failed to get surface texture: {:?}", e)))?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Scene Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: BACKGROUND_COLOR[0] as f64,
                            g: BACKGROUND_COLOR[1] as f64,
                            b: BACKGROUND_COLOR[2] as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if let (Some(mesh), true) = (&self.mesh, scene.has_model()) {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_bind_group(0, &self.bind_group, &[]);
                render_pass.set_vertex_buffer(0, mesh.vertex.slice(..));
                render_pass.set_index_buffer(mesh.index.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

fn uniform_layout_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn point_to_array(p: Point3<f32>) -> [f32; 3] {
    [p.x, p.y, p.z]
}

#[cfg(test)]
mod tests {
    use super::*;

    // Uniform structs must match the WGSL layouts byte for byte
    #[test]
    fn test_uniform_sizes_match_shader_layout() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 80);
        assert_eq!(std::mem::size_of::<ModelUniform>(), 64);
        assert_eq!(std::mem::size_of::<LightUniform>(), 48);
        assert_eq!(std::mem::size_of::<SceneVertex>(), 36);
    }

    #[test]
    fn test_vertex_attributes_cover_the_stride() {
        let layout = SceneVertex::desc();
        assert_eq!(layout.array_stride, 36);
        assert_eq!(layout.attributes.len(), 3);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[2].offset, 24);
    }

    #[test]
    fn test_point_to_array() {
        assert_eq!(point_to_array(Point3::new(5.0, 5.0, 5.0)), [5.0, 5.0, 5.0]);
    }
}

fn create_depth_view(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width: config.width,
            height: config.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Depth32Float,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
