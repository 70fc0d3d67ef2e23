//! Window host loop
//!
//! Owns the window, the GPU state and the [`Simulation`]. Input is gathered
//! from window events, the step function runs at a fixed cadence and a
//! redraw follows every step.

use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Fullscreen, Window, WindowId};

use crate::consts::{FRAME_DT, FRAME_RATE};
use crate::display::DisplayConfig;
use crate::error::AppError;
use crate::input::InputCollector;
use crate::renderer::{RenderState, build_frame};
use crate::settings::Settings;
use crate::sim::{Simulation, TickInput, tick};
use crate::ui::hud::title_line;

/// How often the HUD readouts are written to the debug log
const HUD_LOG_INTERVAL: Duration = Duration::from_secs(1);

/// Wall-clock UTC seconds since the Unix epoch
pub fn clock_secs() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

fn frame_interval() -> Duration {
    Duration::from_secs_f32(1.0 / FRAME_RATE)
}

struct App {
    settings: Settings,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    sim: Option<Simulation>,
    input: InputCollector,
    next_tick: Instant,
    last_hud_log: Instant,
    /// Fullscreen state last pushed to the window
    window_fullscreen: bool,
    title: String,
    /// First fatal error, reported once the loop has exited
    error: Option<AppError>,
}

impl App {
    fn new(settings: Settings) -> Self {
        let now = Instant::now();
        Self {
            settings,
            window: None,
            render_state: None,
            sim: None,
            input: InputCollector::new(),
            next_tick: now,
            last_hud_log: now,
            window_fullscreen: false,
            title: String::new(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let monitor_size = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next())
            .map(|m| {
                let size = m.size();
                (size.width, size.height)
            })
            .unwrap_or(DisplayConfig::default().monitor_size);

        let display = DisplayConfig::new(
            (self.settings.window_width, self.settings.window_height),
            monitor_size,
            self.settings.start_fullscreen,
        );

        let mut attrs = Window::default_attributes()
            .with_title(self.settings.scenario.title())
            .with_inner_size(PhysicalSize::new(
                display.windowed_size.0,
                display.windowed_size.1,
            ));
        if display.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(event_loop.create_window(attrs)?);
        let render_state = pollster::block_on(RenderState::new(window.clone()))?;
        log::info!(
            "Window {}x{} on a {}x{} monitor",
            display.size.0,
            display.size.1,
            monitor_size.0,
            monitor_size.1
        );

        self.window_fullscreen = display.fullscreen;
        self.sim = Some(Simulation::new(&self.settings, display, clock_secs()));
        self.render_state = Some(render_state);
        self.window = Some(window);
        self.next_tick = Instant::now();
        Ok(())
    }

    /// Push display changes made by the step function out to the window
    fn sync_window(&mut self) {
        let (Some(window), Some(sim)) = (&self.window, &self.sim) else {
            return;
        };

        if sim.display.fullscreen != self.window_fullscreen {
            self.window_fullscreen = sim.display.fullscreen;
            if sim.display.fullscreen {
                window.set_fullscreen(Some(Fullscreen::Borderless(None)));
            } else {
                window.set_fullscreen(None);
                let (w, h) = sim.display.windowed_size;
                let _ = window.request_inner_size(PhysicalSize::new(w, h));
            }
        }

        let title = title_line(sim);
        if title != self.title {
            window.set_title(&title);
            self.title = title;
        }
    }

    fn run_tick(&mut self, event_loop: &ActiveEventLoop) {
        let Some(sim) = self.sim.as_mut() else {
            return;
        };

        let input = TickInput {
            events: self.input.take(),
            clock_secs: clock_secs(),
        };
        tick(sim, &input, FRAME_DT);

        if !sim.running {
            log::info!("Simulation stopped after {} frames", sim.frame);
            event_loop.exit();
            return;
        }

        self.sync_window();
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(render_state), Some(sim)) = (&mut self.render_state, &self.sim) else {
            return;
        };

        let frame = build_frame(sim);
        if self.last_hud_log.elapsed() >= HUD_LOG_INTERVAL {
            self.last_hud_log = Instant::now();
            let readout: Vec<&str> = frame.labels.iter().map(|l| l.text.as_str()).collect();
            log::debug!("{}", readout.join(" | "));
        }

        match render_state.render(&frame.vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_state.reconfigure()
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none()
            && let Err(e) = self.init(event_loop)
        {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            WindowEvent::Resized(size) => {
                if let Some(render_state) = &mut self.render_state {
                    render_state.resize(size.width, size.height);
                }
                self.input.handle_window_event(&event);
            }
            _ => {
                self.input.handle_window_event(&event);
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.sim.is_none() {
            return;
        }

        let now = Instant::now();
        if now >= self.next_tick {
            self.run_tick(event_loop);
            self.next_tick += frame_interval();
            // Drop missed frames instead of bursting to catch up
            if self.next_tick < now {
                self.next_tick = now + frame_interval();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_tick));
    }
}

/// Open the window and run until the user quits or the run ends
pub fn run(settings: Settings) -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(settings);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
