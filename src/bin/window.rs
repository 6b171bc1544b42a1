//! 带窗口的作品集 - winit 事件循环 + softbuffer 呈现

mod app_window;

use app_window::events::{keyboard, mouse};
use app_window::present_to_buffer;

use mini_folio::event::Event;
use mini_folio::renderer::FolioRenderer;
use mini_folio::runtime::audio::load_chime;
use mini_folio::runtime::links::SystemBrowser;
use mini_folio::runtime::{FolioApp, FolioConfig, Viewport};
use mini_folio::{Canvas, Point};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::ModifiersState;
use winit::window::{Window, WindowAttributes, WindowId};

struct FolioWindow {
    window: Option<Arc<Window>>,
    surface: Option<softbuffer::Surface<Arc<Window>, Arc<Window>>>,
    app: FolioApp,
    renderer: FolioRenderer,
    canvas: Canvas,
    title: String,
    resizable: bool,
    scale_factor: f64,
    mouse_pos: Point,
    modifiers: ModifiersState,
    started: Instant,
    last_frame: Instant,
}

impl FolioWindow {
    fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let config = FolioConfig::load()?;
        let renderer = FolioRenderer::load(&config);
        let chime = load_chime(&config.assets_path());
        let viewport = Viewport::new(config.window.width, config.window.height);
        let title = config.window.title.clone();
        let resizable = config.window.resizable;

        let app = FolioApp::new(config, viewport, renderer.measure(), Box::new(SystemBrowser), chime);
        let now = Instant::now();

        Ok(Self {
            window: None,
            surface: None,
            app,
            renderer,
            canvas: Canvas::new(viewport.width.ceil() as u32, viewport.height.ceil() as u32),
            title,
            resizable,
            scale_factor: 1.0,
            mouse_pos: Point::new(0.0, 0.0),
            modifiers: ModifiersState::empty(),
            started: now,
            last_frame: now,
        })
    }

    fn timestamp(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn dispatch(&mut self, event: &Event, event_loop: &ActiveEventLoop) {
        if let Err(e) = self.app.handle_event(event) {
            log::error!("❌ {}", e);
        }
        if self.app.should_quit() {
            event_loop.exit();
            return;
        }
        self.request_redraw();
    }

    fn request_redraw(&self) {
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    /// 窗口尺寸变化：换算成逻辑像素后发布新视口
    fn resize(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else { return };
        let size = window.inner_size();
        let width = (size.width as f64 / self.scale_factor) as f32;
        let height = (size.height as f64 / self.scale_factor) as f32;
        if width < 1.0 || height < 1.0 {
            return;
        }
        self.canvas = Canvas::new(width.ceil() as u32, height.ceil() as u32);
        self.dispatch(&Event::Resize { width, height }, event_loop);
    }

    fn present(&mut self) {
        self.renderer.render(&self.app, &mut self.canvas);

        if let (Some(window), Some(surface)) = (&self.window, &mut self.surface) {
            let size = window.inner_size();
            if let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) {
                if let Err(e) = surface.resize(w, h) {
                    log::warn!("⚠️ Surface resize failed: {}", e);
                    return;
                }
                match surface.buffer_mut() {
                    Ok(mut buffer) => {
                        present_to_buffer(&mut buffer, size.width, size.height, &self.canvas, self.scale_factor);
                        if let Err(e) = buffer.present() {
                            log::warn!("⚠️ Present failed: {}", e);
                        }
                    }
                    Err(e) => log::warn!("⚠️ Buffer unavailable: {}", e),
                }
            }
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn std::error::Error>> {
        let viewport = self.app.viewport();
        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(viewport.width, viewport.height))
            .with_resizable(self.resizable);

        let window = Arc::new(event_loop.create_window(attrs)?);
        self.scale_factor = window.scale_factor();
        log::info!("📐 Scale: {}x | Viewport: {}x{}", self.scale_factor, viewport.width, viewport.height);

        let context = softbuffer::Context::new(window.clone())?;
        let surface = softbuffer::Surface::new(&context, window.clone())?;
        self.window = Some(window);
        self.surface = Some(surface);
        Ok(())
    }
}

impl ApplicationHandler for FolioWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.create_window(event_loop) {
            log::error!("❌ Failed to create window: {}", e);
            event_loop.exit();
            return;
        }
        self.last_frame = Instant::now();
        self.present();
        log::info!("🎮 Ready");
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    let key = keyboard::translate_key(&event.logical_key, self.modifiers);
                    self.dispatch(&Event::Key(key), event_loop);
                }
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = scale_factor;
                self.resize(event_loop);
            }

            WindowEvent::Resized(_) => self.resize(event_loop),

            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_pos = mouse::to_logical(position, self.scale_factor);
                let event = mouse::move_event(self.mouse_pos, self.timestamp());
                self.dispatch(&event, event_loop);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(event) = mouse::wheel_event(delta, self.mouse_pos, self.scale_factor) {
                    self.dispatch(&event, event_loop);
                }
            }

            WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                let event = mouse::button_event(state, self.mouse_pos, self.timestamp());
                self.dispatch(&event, event_loop);
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = now.duration_since(self.last_frame).as_secs_f32();
                self.last_frame = now;

                let animating = match self.app.tick(dt) {
                    Ok(animating) => animating,
                    Err(e) => {
                        log::error!("❌ {}", e);
                        false
                    }
                };
                self.present();

                if animating {
                    self.request_redraw();
                }
            }
            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("🚀 Mini Folio");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = FolioWindow::new()?;
    event_loop.run_app(&mut app)?;
    Ok(())
}
