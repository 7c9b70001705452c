mod gpu;
mod input;

use std::time::Instant;

use anyhow::Context;
use cymatics_core::export::save_png;
use cymatics_core::{render_frame, AppState, FrameClock, ViewerConfig};
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use gpu::Presenter;
use input::PointerTracker;

/// Event-loop side of the viewer: owns the interactive state and paces frames.
struct Viewer {
    config: ViewerConfig,
    state: AppState,
    clock: FrameClock,
    pointer: PointerTracker,
}

impl Viewer {
    fn new(config: ViewerConfig, size: PhysicalSize<u32>) -> Self {
        let clock = FrameClock::new(config.frame_interval());
        Self {
            config,
            state: AppState::new(size.width, size.height),
            clock,
            pointer: PointerTracker::default(),
        }
    }

    fn handle_window_event(&mut self, event: &WindowEvent, presenter: &mut Presenter) {
        if let WindowEvent::Resized(size) = event {
            log::info!("window resized to {}x{}", size.width, size.height);
            presenter.resize(*size);
        }
        if let Some(input) = self.pointer.translate(event) {
            self.state.handle_event(input);
        }
    }

    /// Render and present one frame. Only unrecoverable failures are returned.
    fn redraw(&mut self, presenter: &mut Presenter) -> anyhow::Result<()> {
        self.clock.tick(Instant::now());
        self.state.begin_frame();

        let (width, height) = self.state.window_size();
        if width == 0 || height == 0 {
            return Ok(());
        }

        let frame = render_frame(&self.state, &self.config.field, self.config.figure_size)
            .context("rendering frame")?;

        if self.state.save_requested() {
            if let Err(err) = save_png(&frame.heatmap, &self.config.export_path) {
                log::error!("{err}");
            }
        }

        match presenter.present(&frame.composite) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost, reconfiguring");
                presenter.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                anyhow::bail!("GPU out of memory while presenting");
            }
            Err(err) => log::warn!("frame dropped: {err}"),
        }

        self.state.advance_time();
        Ok(())
    }
}

/// Info-level logger that ignores `RUST_LOG` and friends.
fn logger() -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Info);
    builder
}

fn main() -> anyhow::Result<()> {
    logger().init();

    let config = ViewerConfig::default();
    let (width, height) = config.window_size;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(config.title.as_str())
        .with_inner_size(PhysicalSize::new(width, height))
        .with_resizable(true)
        .build(&event_loop)?;
    log::info!("starting {} at {}x{}", config.title, width, height);

    let mut presenter = pollster::block_on(Presenter::new(&window))?;
    let mut viewer = Viewer::new(config, window.inner_size());
    let mut fatal: Option<anyhow::Error> = None;

    event_loop.run(|event, elwt| {
        match event {
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                if let Err(err) = viewer.redraw(&mut presenter) {
                    log::error!("{err:#}");
                    fatal = Some(err);
                    elwt.exit();
                    return;
                }
            }
            Event::WindowEvent { event, .. } => viewer.handle_window_event(&event, &mut presenter),
            Event::AboutToWait => {
                if viewer.clock.is_due(Instant::now()) {
                    window.request_redraw();
                } else if let Some(deadline) = viewer.clock.deadline() {
                    elwt.set_control_flow(ControlFlow::WaitUntil(deadline));
                }
            }
            _ => {}
        }
        if !viewer.state.is_running() && !elwt.exiting() {
            log::info!("close requested, shutting down");
            elwt.exit();
        }
    })?;

    match fatal {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
