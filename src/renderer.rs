use std::sync::Arc;
use anyhow::{Context, Result};
use winit::window::Window;
use crate::core::WindowDimensions;
use crate::shader::{ProgramReport, ShaderProgram, ShaderSources};
use crate::types::{FrameUniform, FRAME_UNIFORM_SIZE};

/// Background the frame is cleared to before the fractal is drawn
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color::RED;

/// Draws the full-screen fractal triangle from a per-frame uniform block
pub struct FractalRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    program: ShaderProgram,
}

impl FractalRenderer {
    pub async fn new(
        window: Arc<Window>,
        sources: &ShaderSources,
        present_mode: wgpu::PresentMode,
    ) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create window surface")?;
        let adapter = Self::request_adapter(&instance, &surface).await?;
        let (device, queue) = Self::request_device(&adapter).await?;

        let config = Self::create_surface_config(
            &surface,
            &adapter,
            WindowDimensions::new(size.width, size.height),
            present_mode,
        )?;
        if size.width > 0 && size.height > 0 {
            surface.configure(&device, &config);
        }

        let uniform_buffer = Self::create_uniform_buffer(&device);
        let (bind_group_layout, uniform_bind_group) =
            Self::create_uniform_bind_group(&device, &uniform_buffer);
        let program = ShaderProgram::build(&device, sources, &bind_group_layout, config.format);

        log::info!(
            "renderer initialized: {} ({:?}), {}x{} {:?}",
            adapter.get_info().name,
            adapter.get_info().backend,
            config.width,
            config.height,
            config.format
        );

        Ok(Self {
            device,
            queue,
            surface,
            config,
            uniform_buffer,
            uniform_bind_group,
            program,
        })
    }

    async fn request_adapter(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'_>,
    ) -> Result<wgpu::Adapter> {
        instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find appropriate adapter")
    }

    async fn request_device(adapter: &wgpu::Adapter) -> Result<(wgpu::Device, wgpu::Queue)> {
        adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Fractal Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .context("failed to create device")
    }

    fn create_surface_config(
        surface: &wgpu::Surface,
        adapter: &wgpu::Adapter,
        dimensions: WindowDimensions,
        present_mode: wgpu::PresentMode,
    ) -> Result<wgpu::SurfaceConfiguration> {
        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .context("surface is incompatible with the adapter")?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        Ok(wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: dimensions.width,
            height: dimensions.height,
            present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        })
    }

    pub fn create_uniform_buffer(device: &wgpu::Device) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Frame Uniform Buffer"),
            size: FRAME_UNIFORM_SIZE as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Layout and bind group for the frame block at group 0, binding 0
    pub fn create_uniform_bind_group(
        device: &wgpu::Device,
        uniform_buffer: &wgpu::Buffer,
    ) -> (wgpu::BindGroupLayout, wgpu::BindGroup) {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[
                // Binding 0: Frame uniform block
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(FRAME_UNIFORM_SIZE as u64),
                    },
                    count: None,
                },
            ],
            label: Some("frame_bind_group_layout"),
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
            label: Some("frame_bind_group"),
        });

        (bind_group_layout, bind_group)
    }

    pub fn dimensions(&self) -> WindowDimensions {
        WindowDimensions::new(self.config.width, self.config.height)
    }

    pub fn program_report(&self) -> ProgramReport {
        self.program.report
    }

    /// Reconfigure the surface for a new framebuffer size; zero sizes are ignored
    pub fn resize(&mut self, dimensions: WindowDimensions) {
        if dimensions.is_empty() {
            return;
        }

        self.config.width = dimensions.width;
        self.config.height = dimensions.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Reconfigure with the current size after the surface was lost or outdated
    pub fn reconfigure(&mut self) {
        self.resize(self.dimensions());
    }

    /// Upload the uniform block and draw one frame.
    ///
    /// The block is written every frame whether or not it changed. When the
    /// program failed to link the frame is only cleared.
    pub fn render(&mut self, uniform: &FrameUniform) -> std::result::Result<(), wgpu::SurfaceError> {
        if self.dimensions().is_empty() {
            return Ok(());
        }

        self.queue
            .write_buffer(&self.uniform_buffer, 0, uniform.as_bytes());

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Fractal Encoder"),
            });

        record_frame_pass(&mut encoder, &view, &self.program, &self.uniform_bind_group);

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

/// Clear `view` and draw the fractal triangle into it.
///
/// The draw is only recorded when the program linked; otherwise the pass
/// just clears.
pub fn record_frame_pass(
    encoder: &mut wgpu::CommandEncoder,
    view: &wgpu::TextureView,
    program: &ShaderProgram,
    bind_group: &wgpu::BindGroup,
) {
    let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("Fractal Pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        })],
        depth_stencil_attachment: None,
        occlusion_query_set: None,
        timestamp_writes: None,
    });

    if program.report.is_usable() {
        render_pass.set_pipeline(&program.pipeline);
        render_pass.set_bind_group(0, bind_group, &[]);
        render_pass.draw(0..3, 0..1); // Fullscreen triangle
    }
}
