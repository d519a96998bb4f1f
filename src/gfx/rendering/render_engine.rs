//! WGPU-based rendering engine for the editor viewport
//!
//! Owns the surface, device and depth buffer, and replays the [`DrawCall`]s
//! recorded by the scene for one frame. Every draw gets its own block in a
//! dynamic-offset uniform buffer so the whole frame uses one bind group.

use std::sync::Arc;

use log::{debug, info, warn};
use wgpu::{Device, TextureFormat};

use super::pipeline_manager::{PipelineConfig, PipelineManager};
use super::shader_program::{DrawCall, DrawUniforms};
use crate::error::RenderError;
use crate::gfx::resources::texture_resource::TextureResource;
use crate::gfx::scene::mesh::DrawMesh;
use crate::wgpu_utils::{binding_types, DynamicUniformBuffer};

/// Name of the pipeline drawing scene bodies
pub const SCENE_PIPELINE: &str = "Scene";

const SCENE_SHADER: &str = "scene.wgsl";

type UiCallback = fn(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView);

/// Draw blocks allocated up front; the buffer grows past this on demand
const INITIAL_DRAW_CAPACITY: usize = 64;

/// Core rendering engine managing GPU resources and draw calls
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,
    format: TextureFormat,
    pub pipeline_manager: PipelineManager,
    draw_uniforms: DynamicUniformBuffer<DrawUniforms>,
    uniform_layout: wgpu::BindGroupLayout,
    uniform_bind_group: wgpu::BindGroup,
    clear_color: wgpu::Color,
}

impl RenderEngine {
    /// Creates a new render engine for the given window
    ///
    /// # Arguments
    /// * `window` - Window surface target for rendering
    /// * `width` - Initial surface width in pixels
    /// * `height` - Initial surface height in pixels
    /// * `background` - Clear color of the viewport (RGBA)
    ///
    /// # Errors
    /// Fails when no surface, adapter or device can be obtained
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
        background: [f64; 4],
    ) -> Result<RenderEngine, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        info!("using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits {
                    max_texture_dimension_2d: 4096,
                    ..wgpu::Limits::downlevel_defaults()
                },
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_capabilities.formats.first().copied())
            .unwrap_or(TextureFormat::Bgra8Unorm);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_capabilities
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, "depth_texture");

        let draw_uniforms = DynamicUniformBuffer::<DrawUniforms>::new(&device, INITIAL_DRAW_CAPACITY);
        let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Draw Uniforms Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: binding_types::uniform_dynamic(std::mem::size_of::<DrawUniforms>() as u64),
                count: None,
            }],
        });
        let uniform_bind_group = Self::create_uniform_bind_group(&device, &uniform_layout, &draw_uniforms);

        let device_handle: Arc<Device> = device.into();
        let queue_handle: Arc<wgpu::Queue> = queue.into();
        let mut pipeline_manager = PipelineManager::new(device_handle.clone());

        pipeline_manager.load_shader(SCENE_SHADER, include_str!("scene.wgsl"));
        pipeline_manager.register_pipeline(
            SCENE_PIPELINE,
            PipelineConfig::default_with_shader(SCENE_SHADER)
                .with_label(SCENE_PIPELINE)
                .with_color_format(format)
                .with_depth_format(TextureResource::DEPTH_FORMAT)
                .with_bind_group_layouts(vec![uniform_layout.clone()]),
        );

        let [r, g, b, a] = background;
        Ok(RenderEngine {
            surface,
            device: device_handle,
            queue: queue_handle,
            config,
            depth_texture,
            format,
            pipeline_manager,
            draw_uniforms,
            uniform_layout,
            uniform_bind_group,
            clear_color: wgpu::Color { r, g, b, a },
        })
    }

    fn create_uniform_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        buffer: &DynamicUniformBuffer<DrawUniforms>,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Draw Uniforms Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.binding_resource(),
            }],
        })
    }

    /// Renders one frame of recorded draws with an optional UI overlay
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped.
    ///
    /// # Arguments
    /// * `draws` - Draw calls recorded by the scene for this frame
    /// * `ui_callback` - Records the overlay into the same encoder, on top of the scene
    pub fn render_frame<F>(&mut self, draws: &[DrawCall], ui_callback: Option<F>) -> Result<(), RenderError>
    where
        F: FnOnce(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView),
    {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("surface lost, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                debug!("surface timeout, skipping frame");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        for draw in draws {
            draw.mesh.upload(&self.device);
        }
        let blocks: Vec<DrawUniforms> = draws.iter().map(|draw| draw.uniforms).collect();
        if self.draw_uniforms.write_all(&self.device, &self.queue, &blocks) {
            self.uniform_bind_group =
                Self::create_uniform_bind_group(&self.device, &self.uniform_layout, &self.draw_uniforms);
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let pipeline = self
                .pipeline_manager
                .get_pipeline(SCENE_PIPELINE)
                .ok_or_else(|| RenderError::MissingPipeline(SCENE_PIPELINE.to_string()))?;

            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(pipeline);
            for (index, draw) in draws.iter().enumerate() {
                render_pass.set_bind_group(0, &self.uniform_bind_group, &[self.draw_uniforms.offset(index)]);
                render_pass.draw_mesh(&draw.mesh);
            }
        }

        if let Some(ui_callback) = ui_callback {
            ui_callback(&self.device, &self.queue, &mut encoder, &surface_texture_view);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        Ok(())
    }

    /// Renders one frame with the overlay recorded on top of the scene
    pub fn render_frame_with_ui<F>(&mut self, draws: &[DrawCall], ui_callback: F) -> Result<(), RenderError>
    where
        F: FnOnce(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView),
    {
        self.render_frame(draws, Some(ui_callback))
    }

    /// Renders one frame of the scene alone
    pub fn render_frame_simple(&mut self, draws: &[DrawCall]) -> Result<(), RenderError> {
        self.render_frame::<UiCallback>(draws, None)
    }

    /// Resizes the surface and depth buffer; zero sizes are ignored
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);

        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "depth_texture");
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.format
    }
}
