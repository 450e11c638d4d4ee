//! Windowed viewer wiring winit events into the scene controller

use crate::controller::{ControllerConfig, SceneController};
use crate::surface::GpuSurface;
use instant::Instant;
use podium_core::{Error, Result, Viewport};
use podium_gpu::SceneRenderer;
use std::path::PathBuf;
use std::sync::Arc;
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::Key,
    window::WindowBuilder,
};

/// Pixels of synthetic page scroll per wheel line
const LINE_SCROLL_PX: f32 = 48.0;

/// Viewer configuration
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub asset_path: PathBuf,
    pub reduced_motion: bool,
}

/// Synthetic page layout standing in for the host page
///
/// The showcase section sits one viewport below the fold, one viewport
/// tall; wheel input scrolls the page and the section's viewport-relative
/// bounds feed the visibility animator.
struct PageScroll {
    scroll_y: f32,
    section_offset: f32,
    section_height: f32,
}

impl PageScroll {
    fn new(viewport_height: f32) -> Self {
        Self {
            scroll_y: 0.0,
            section_offset: viewport_height,
            section_height: viewport_height,
        }
    }

    fn scroll_by(&mut self, delta: f32) {
        self.scroll_y = (self.scroll_y + delta).max(0.0);
    }

    fn jump_to_section(&mut self) {
        self.scroll_y = self.section_offset;
    }

    fn section_bounds(&self) -> (f32, f32) {
        let top = self.section_offset - self.scroll_y;
        (top, top + self.section_height)
    }
}

/// Open a window and run the showcase until closed
pub fn run(config: ViewerConfig) -> Result<()> {
    let event_loop = EventLoop::new()
        .map_err(|e| Error::Visualization(format!("Failed to create event loop: {}", e)))?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("podium")
            .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0))
            .build(&event_loop)
            .map_err(|e| Error::Visualization(format!("Failed to create window: {}", e)))?,
    );

    let renderer = pollster::block_on(SceneRenderer::new(window.clone()))?;
    let size = window.inner_size();

    let mut controller = SceneController::new(
        ControllerConfig {
            asset_path: config.asset_path,
            viewport: Viewport::new(size.width, size.height),
            reduced_motion: config.reduced_motion,
        },
        GpuSurface::new(renderer),
    );
    controller.hero_mut().set_on_explore(|| {
        log::info!("explore requested, scrolling to the showcase section");
    });
    controller.begin_load();

    let mut page = PageScroll::new(size.height as f32);
    let (top, bottom) = page.section_bounds();
    controller.handle_scroll(top, bottom);

    let mut cursor: PhysicalPosition<f64> = PhysicalPosition::new(0.0, 0.0);
    let mut last_frame = Instant::now();

    event_loop
        .run(move |event, target| {
            target.set_control_flow(ControlFlow::Poll);

            if let Event::WindowEvent { event, .. } = event {
                match event {
                    WindowEvent::CloseRequested => {
                        controller.dispose();
                        target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        controller.handle_resize(new_size.width, new_size.height);
                        page.section_height = new_size.height as f32;
                        let (top, bottom) = page.section_bounds();
                        controller.handle_scroll(top, bottom);
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        if button == MouseButton::Left {
                            match state {
                                ElementState::Pressed => {
                                    controller.handle_pointer_down(cursor.x, cursor.y);
                                }
                                ElementState::Released => {
                                    controller.handle_pointer_up();
                                }
                            }
                        }
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        cursor = position;
                        controller.handle_pointer_move(position.x, position.y);
                    }
                    WindowEvent::MouseWheel { delta, .. } => {
                        let delta_px = match delta {
                            MouseScrollDelta::LineDelta(_, y) => -y * LINE_SCROLL_PX,
                            MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                        };
                        page.scroll_by(delta_px);
                        let (top, bottom) = page.section_bounds();
                        controller.handle_scroll(top, bottom);
                    }
                    WindowEvent::KeyboardInput { event, .. } => {
                        if event.state == ElementState::Pressed {
                            if let Key::Character(c) = &event.logical_key {
                                if c.as_str() == "e" || c.as_str() == "E" {
                                    controller.trigger_explore();
                                    page.jump_to_section();
                                    let (top, bottom) = page.section_bounds();
                                    controller.handle_scroll(top, bottom);
                                }
                            }
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        let now = Instant::now();
                        let dt = (now - last_frame).as_secs_f32();
                        last_frame = now;

                        if let Err(e) = controller.frame(dt) {
                            log::error!("render error: {}", e);
                        }
                        if !controller.is_disposed() {
                            controller.surface().renderer().window().request_redraw();
                        }
                    }
                    _ => {}
                }
            }
        })
        .map_err(|e| Error::Visualization(format!("Event loop error: {}", e)))?;

    Ok(())
}
