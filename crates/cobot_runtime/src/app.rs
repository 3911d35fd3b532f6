//! Window event handling and the per-frame loop

use cobot_core::math::DVec2;
use cobot_core::time::SimulationTime;
use cobot_core::{ConfigError, FrameInput, Simulation, Viewport};
use cobot_metrics::{FrameTimer, PhaseProfiler, ReportClock};
use cobot_render::window::{create_window, WindowConfig};
use cobot_render::{build_scene, wgpu, CanvasRenderer, Mesh};
use cobot_services::{PointerRegister, ResizeDebouncer, Settings};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

pub struct App {
    settings: Settings,
    window: Option<Arc<Window>>,
    renderer: Option<CanvasRenderer>,
    sim: Simulation<StdRng>,
    pointer: PointerRegister,
    resize: ResizeDebouncer,
    mesh: Mesh,
    flicker: StdRng,
    started: Instant,
    time: SimulationTime,
    frame_timer: FrameTimer,
    profiler: PhaseProfiler,
    report: ReportClock,
}

impl App {
    pub fn new(settings: Settings, mut rng: StdRng) -> Result<Self, ConfigError> {
        // Placeholder layout until the window reports its real size.
        let viewport = Viewport::new(
            f64::from(settings.window.width),
            f64::from(settings.window.height),
        );
        let flicker = StdRng::seed_from_u64(rng.gen());
        let sim = Simulation::new(settings.simulation.clone(), viewport, rng)?;
        let pointer = PointerRegister::new(
            viewport.center(),
            settings.simulation.behavior.activity_threshold,
        );
        let report = ReportClock::new(settings.metrics.report_interval());

        Ok(Self {
            settings,
            window: None,
            renderer: None,
            sim,
            pointer,
            resize: ResizeDebouncer::default(),
            mesh: Mesh::new(),
            flicker,
            started: Instant::now(),
            time: SimulationTime::new(),
            frame_timer: FrameTimer::new(120),
            profiler: PhaseProfiler::new(),
            report,
        })
    }

    fn clock(&self) -> Duration {
        self.started.elapsed()
    }

    fn logical_viewport(window: &Window, size: PhysicalSize<u32>) -> Viewport {
        let logical = size.to_logical::<f64>(window.scale_factor());
        Viewport::new(logical.width, logical.height)
    }

    fn apply_viewport(&mut self, viewport: Viewport) {
        if let Err(err) = self.sim.resize(viewport) {
            tracing::error!(error = %err, "failed to re-anchor arm");
        }
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        self.frame_timer.begin();

        let clock = self.clock();
        let now = self.time.advance_to(clock);
        let sample = self.pointer.take();
        let input = FrameInput {
            now,
            pointer: sample.position,
            pointer_moved: sample.moved,
        };

        let sim = &mut self.sim;
        self.profiler.time_phase("simulate", || sim.step(input));

        let flicker: f32 = self.flicker.gen();
        let view = self.sim.view();
        let mesh = &mut self.mesh;
        self.profiler
            .time_phase("tessellate", || build_scene(&view, flicker, mesh));

        if let Some(renderer) = self.renderer.as_mut() {
            let viewport = self.sim.viewport();
            let canvas = [viewport.width as f32, viewport.height as f32];
            let mesh = &self.mesh;
            let result = self
                .profiler
                .time_phase("present", || renderer.render(mesh, canvas));
            match result {
                Ok(()) => {}
                Err(err @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                    tracing::warn!(error = ?err, "surface invalidated, reconfiguring");
                    renderer.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    tracing::error!("GPU out of memory");
                    event_loop.exit();
                }
                Err(err) => tracing::warn!(error = ?err, "frame skipped"),
            }
        }

        self.profiler.end_frame();
        self.frame_timer.end();
        self.maybe_report();
    }

    fn maybe_report(&mut self) {
        if !self.report.due() {
            return;
        }
        let (min_ms, max_ms) = self.frame_timer.frame_time_range_ms();
        tracing::info!(
            fps = self.frame_timer.fps(),
            avg_ms = self.frame_timer.frame_time_ms(),
            min_ms,
            max_ms,
            frames = self.time.frame_count(),
            mode = ?self.sim.mode(),
            sparks = self.sim.sparks().len(),
            vertices = self.mesh.len(),
            "frame stats"
        );
        for (phase, _) in self.profiler.iter() {
            tracing::info!(
                phase,
                per_frame_ms = self.profiler.per_frame(phase).as_secs_f64() * 1000.0,
                "phase timing"
            );
        }
        self.profiler.reset();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_settings = &self.settings.window;
        let config = WindowConfig {
            title: window_settings.title.clone(),
            width: window_settings.width,
            height: window_settings.height,
        };
        let window = match create_window(event_loop, config) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                tracing::error!(error = %err, "failed to create window");
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(CanvasRenderer::new(window.clone())) {
            Ok(renderer) => self.renderer = Some(renderer),
            Err(err) => {
                tracing::warn!(error = %err, "renderer unavailable, simulating without output");
            }
        }

        // First layout is applied immediately; only later resizes are debounced.
        let viewport = Self::logical_viewport(&window, window.inner_size());
        self.apply_viewport(viewport);
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(window) = &self.window {
                    let logical = position.to_logical::<f64>(window.scale_factor());
                    self.pointer.record(DVec2::new(logical.x, logical.y));
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
                if let Some(window) = &self.window {
                    let viewport = Self::logical_viewport(window, size);
                    let now = self.clock();
                    self.resize.notify(viewport, now);
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        let now = self.clock();
        if let Some(viewport) = self.resize.poll(now) {
            self.apply_viewport(viewport);
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
