use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, Size};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::device::{Gpu, GpuInit};
use crate::error::RenderError;
use crate::render::{TriangleRenderer, WgpuBackend};

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Inner size used when no monitor reports its dimensions.
    pub fallback_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "triangle".to_string(),
            fallback_size: LogicalSize::new(800.0, 600.0),
        }
    }
}

/// Entry point for the runtime.
///
/// Opens one window covering the display, draws the triangle once and waits
/// until the window is closed.
pub struct Runtime;

impl Runtime {
    pub fn run(config: RuntimeConfig, gpu_init: GpuInit, renderer: TriangleRenderer) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut state = AppState::new(config, gpu_init, renderer);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        outcome(state.fatal)
    }
}

fn outcome(fatal: Option<RenderError>) -> Result<()> {
    match fatal {
        Some(err) => Err(err).context("triangle could not be drawn"),
        None => Ok(()),
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    renderer: TriangleRenderer,

    entry: Option<WindowEntry>,
    drawn: bool,
    fatal: Option<RenderError>,
}

impl AppState {
    fn new(config: RuntimeConfig, gpu_init: GpuInit, renderer: TriangleRenderer) -> Self {
        Self {
            config,
            gpu_init,
            renderer,
            entry: None,
            drawn: false,
            fatal: None,
        }
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry, RenderError> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(display_area(event_loop, &self.config));

        let window = event_loop
            .create_window(attrs)
            .map_err(|e| RenderError::ContextUnavailable {
                reason: format!("failed to create window: {e}"),
            })?;

        let gpu_init = self.gpu_init.clone();

        WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .map_err(|e| RenderError::ContextUnavailable {
            reason: format!("{e:#}"),
        })
    }

    /// Logs `err` and keeps the first failure for the exit status.
    fn record_failure(&mut self, err: RenderError) {
        report(&err);
        self.fatal.get_or_insert(err);
    }

    // There is only one frame, so any failure ends the run.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: RenderError) {
        self.record_failure(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                entry.with_window(|w| w.request_redraw());
                self.entry = Some(entry);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.entry = None;
                event_loop.exit();
            }

            // One frame only; later redraw requests are ignored.
            WindowEvent::RedrawRequested if !self.drawn => {
                let Some(entry) = self.entry.as_ref() else {
                    return;
                };
                self.drawn = true;

                let renderer = &self.renderer;
                let result = entry.with(|fields| {
                    fields.window.pre_present_notify();
                    let mut backend = WgpuBackend::new(fields.gpu);
                    renderer.initialize_and_render(&mut backend)
                });

                match result {
                    Ok(()) => log::info!("triangle presented; close the window to exit"),
                    Err(err) => self.fail(event_loop, err),
                }
            }

            _ => {}
        }
    }
}

/// Inner size covering the primary monitor, the equivalent of sizing a canvas
/// to the whole page.
fn display_area(event_loop: &ActiveEventLoop, config: &RuntimeConfig) -> Size {
    event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next())
        .map(|monitor| monitor.size())
        .filter(|size| size.width > 0 && size.height > 0)
        .map(Size::from)
        .unwrap_or_else(|| config.fallback_size.into())
}

fn report(err: &RenderError) {
    match err {
        // The compiler/linker diagnostic has already been logged.
        RenderError::ShaderBuild(_) => log::error!("triangle not drawn: shader build failed"),
        other => log::error!("triangle not drawn: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShaderBuildError;
    use crate::shader::ShaderStage;
    use crate::test_log;

    fn state() -> AppState {
        AppState::new(RuntimeConfig::default(), GpuInit::default(), TriangleRenderer::default())
    }

    #[test]
    fn clean_run_exits_ok() {
        assert!(outcome(state().fatal).is_ok());
    }

    #[test]
    fn shader_build_failure_fails_the_run() {
        let mut state = state();
        state.record_failure(RenderError::ShaderBuild(ShaderBuildError::Compile {
            stage: ShaderStage::Fragment,
            diagnostic: "error: expected `}`".to_owned(),
        }));

        let err = outcome(state.fatal).unwrap_err();
        assert_eq!(err.to_string(), "triangle could not be drawn");
        assert!(format!("{err:#}").contains("fragment shader failed to compile"));
    }

    #[test]
    fn non_device_failures_fail_the_run() {
        for err in [
            RenderError::MissingAttribute { name: "position".to_owned() },
            RenderError::EmptySurface { width: 0, height: 0 },
            RenderError::IndexOutOfRange { index: 3, vertex_count: 3 },
            RenderError::FrameUnavailable {
                reason: "timeout".to_owned(),
                fatal: false,
            },
        ] {
            let mut state = state();
            state.record_failure(err);
            assert!(outcome(state.fatal).is_err());
        }
    }

    #[test]
    fn first_failure_is_kept() {
        let mut state = state();
        state.record_failure(RenderError::EmptySurface { width: 0, height: 0 });
        state.record_failure(RenderError::ContextUnavailable {
            reason: "lost".to_owned(),
        });
        assert!(matches!(state.fatal, Some(RenderError::EmptySurface { .. })));
    }

    #[test]
    fn recorded_failure_is_logged() {
        let mut state = state();
        let ((), records) = test_log::capture(|| {
            state.record_failure(RenderError::MissingAttribute {
                name: "position".to_owned(),
            })
        });

        assert_eq!(
            test_log::errors(&records),
            vec!["triangle not drawn: linked program has no vertex input named `position`"]
        );
    }
}
