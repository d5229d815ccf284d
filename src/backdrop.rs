//! Backdrop runner.
//!
//! [`Backdrop`] wires the scene to a window: winit delivers resize, cursor,
//! and redraw events; each redraw advances the scene one frame, draws it, and
//! requests the next redraw. The loop ends when the window closes.
//!
//! A missing GPU is not an error. The backdrop is decoration; if no adapter
//! or device can be acquired the failure is logged as a warning, no frame
//! loop starts, and [`Backdrop::run`] returns `Ok`.

use std::sync::Arc;

use tracing::{info, warn};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::config::BackdropConfig;
use crate::error::BackdropError;
use crate::gpu::GpuState;
use crate::scene::Scene;

/// An ambient backdrop, configured and ready to run.
///
/// ```ignore
/// Backdrop::new(BackdropConfig::default().with_palette(Palette::Ocean)).run()?;
/// ```
pub struct Backdrop {
    config: BackdropConfig,
}

impl Backdrop {
    /// Create a backdrop with the given configuration.
    pub fn new(config: BackdropConfig) -> Self {
        Self { config }
    }

    /// Open a window and run the frame loop. Blocks until the window is
    /// closed.
    ///
    /// GPU acquisition failure disables the backdrop and returns `Ok`; only
    /// event loop or window creation problems are reported as errors.
    pub fn run(self) -> Result<(), BackdropError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self.config);
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new(BackdropConfig::default())
    }
}

struct App {
    config: BackdropConfig,
    window: Option<Arc<Window>>,
    scene: Option<Scene>,
    gpu: Option<GpuState>,
}

impl App {
    fn new(config: BackdropConfig) -> Self {
        Self {
            config,
            window: None,
            scene: None,
            gpu: None,
        }
    }

    /// Advance the scene one frame and draw it. Returns `None` without
    /// touching the scene when the backdrop is disabled (no GPU acquired).
    fn redraw_frame(&mut self) -> Option<Result<(), wgpu::SurfaceError>> {
        let scene = self.scene.as_mut()?;
        let gpu = self.gpu.as_mut()?;
        let t = scene.tick();
        Some(gpu.render(scene, t))
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.config.window_size;
        let window_attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                warn!(error = %e, "failed to create window, backdrop disabled");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let scene = Scene::new(self.config.clone(), size.width, size.height);

        match pollster::block_on(GpuState::new(window.clone(), &scene)) {
            Ok(gpu) => {
                info!(
                    particles = scene.cloud.len(),
                    shapes = scene.shapes.len(),
                    "backdrop initialized"
                );
                self.gpu = Some(gpu);
                self.scene = Some(scene);
                self.window = Some(window.clone());
                window.request_redraw();
            }
            Err(e) => {
                // Decorative feature: skip it, keep the application alive.
                warn!(error = %e, "rendering unavailable, backdrop disabled");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(scene) = &mut self.scene {
                    scene.set_viewport(physical_size.width, physical_size.height);
                }
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
            }
            event @ WindowEvent::CursorMoved { .. } => {
                // Last value wins; the smoothed copy catches up next frame.
                if let Some(scene) = &mut self.scene {
                    scene.pointer.handle_event(&event);
                }
            }
            WindowEvent::RedrawRequested => {
                match self.redraw_frame() {
                    // Disabled or drew cleanly.
                    None | Some(Ok(())) => {}
                    Some(Err(wgpu::SurfaceError::Lost)) => {
                        if let Some(gpu) = &mut self.gpu {
                            gpu.resize(winit::dpi::PhysicalSize {
                                width: gpu.config.width,
                                height: gpu.config.height,
                            });
                        }
                    }
                    Some(Err(wgpu::SurfaceError::OutOfMemory)) => event_loop.exit(),
                    Some(Err(e)) => eprintln!("Render error: {:?}", e),
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
