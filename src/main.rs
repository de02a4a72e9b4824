use clap::Parser;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use cubefolio::camera::OrbitCamera;
use cubefolio::cli::Cli;
use cubefolio::content::Presenter;
use cubefolio::controls::OrbitControls;
use cubefolio::renderer::SceneRenderer;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<SceneRenderer>,
    camera: OrbitCamera,
    controls: OrbitControls,
    presenter: Presenter,
    last_frame_time: Instant,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(cli: Cli) -> Self {
        let camera = OrbitCamera::new(cli.width as f32 / cli.height as f32);
        let controls = OrbitControls::new(&camera);
        Self {
            cli,
            window: None,
            renderer: None,
            camera,
            controls,
            presenter: Presenter::new(),
            last_frame_time: Instant::now(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            log::debug!("FPS: {:.1}", self.fps);
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;
        self.update_fps(delta);

        // One frame: damped controls → classification → presentation → draw
        self.controls.update(&mut self.camera);
        self.presenter.update(self.camera.world_direction());

        let overlay_enabled = !self.cli.no_overlay;
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            match renderer.render(&self.camera, &self.presenter, window, overlay_enabled) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let size = window.inner_size();
                    renderer.resize(size);
                }
                Err(e) => log::warn!("render error: {}", e),
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Cube Portfolio")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.cli.width,
                        self.cli.height,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let size = window.inner_size();
            self.camera.set_aspect(size.width as f32, size.height as f32);

            let renderer = match pollster::block_on(SceneRenderer::new(window.clone())) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("failed to initialize renderer: {:#}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let the overlay handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        self.controls.process_event(&event);

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(new_size) => {
                self.camera
                    .set_aspect(new_size.width as f32, new_size.height as f32);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    log::info!("Cube Portfolio - drag to rotate, scroll to zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
