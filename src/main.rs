use std::sync::Arc;
use anyhow::{Context, Result};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use complex_dynamics::camera::{CameraInput, CameraState, FIXED_DT};
use complex_dynamics::cli::{Cli, ViewerConfig};
use complex_dynamics::core::{
    Button, Clock, Controller, FpsCounter, WindowContext, WindowDimensions, WinitController,
};
use complex_dynamics::renderer::FractalRenderer;
use complex_dynamics::shader::ShaderSources;
use complex_dynamics::window::ViewerWindow;

struct App {
    config: ViewerConfig,
    sources: ShaderSources,
    window: Option<ViewerWindow>,
    renderer: Option<FractalRenderer>,
    controller: WinitController,
    camera: CameraState,
    clock: Clock,
    fps: FpsCounter,
    failure: Option<anyhow::Error>,
}

impl App {
    fn new(config: ViewerConfig, sources: ShaderSources) -> Self {
        Self {
            config,
            sources,
            window: None,
            renderer: None,
            controller: WinitController::new(),
            camera: CameraState::new(),
            clock: Clock::new(),
            fps: FpsCounter::default(),
            failure: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title(self.config.title.as_str())
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.config.width,
                        self.config.height,
                    )),
            )
            .context("failed to create window")?;
        let window = ViewerWindow::new(Arc::new(window));

        if !window.capture_cursor() {
            log::warn!("cursor grab unsupported; mouse look may hit the screen edge");
        }

        let renderer = pollster::block_on(FractalRenderer::new(
            window.inner().clone(),
            &self.sources,
            self.config.present_mode(),
        ))
        .context("failed to initialize renderer")?;

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.clock.reset();
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure = Some(err);
        event_loop.exit();
    }

    /// One iteration: input -> camera -> upload -> draw -> present
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        if let Some(fps) = self.fps.record(self.clock.tick()) {
            log::debug!("FPS: {fps:.1}");
        }

        let mouse_delta = self.controller.take_mouse_delta();
        let input = CameraInput::from_controller(&self.controller, mouse_delta);
        self.camera.update(&input, FIXED_DT);

        let uniform = self.camera.to_uniform(renderer.dimensions().aspect_ratio());
        match renderer.render(&uniform) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("surface out of memory");
                self.failure = Some(anyhow::anyhow!("surface out of memory"));
                event_loop.exit();
            }
            Err(e) => log::warn!("render error: {e}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.controller.process_event(&event);
        if self.controller.is_down(Button::Quit) {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(WindowDimensions::new(size.width, size.height));
                }
            }
            WindowEvent::Focused(true) => {
                if let Some(window) = &self.window {
                    window.capture_cursor();
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        self.controller.process_device_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ViewerConfig::from(Cli::parse());
    let sources = ShaderSources::load(&config.shader_dir)?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, sources);

    println!("ComplexDynamics - Controls: WASD move, Q/E down/up, mouse look, +/- zoom, Shift turbo, Escape to quit");
    event_loop.run_app(&mut app)?;

    match app.failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
