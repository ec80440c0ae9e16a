use crate::{
    clock::{FrameStats, SimulationClock},
    config::ArenaConfig,
    error::InitError,
    host::{Host, HostEvent},
    input::InputState,
    render::SceneRenderer,
    sim::World,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Owns the host, its window and drawing context, and all simulation
/// state for the lifetime of the program.
pub struct EngineContext<H: Host> {
    host: H,
    surface: H::Surface,
    draw: H::Context,

    input: InputState,
    world: World,
    renderer: SceneRenderer,

    clock: SimulationClock,
    stats: FrameStats,
    last_ticks: u64,
    idle_sleep_ms: u64,
}

impl<H: Host> EngineContext<H> {
    /// Creates the window and drawing context. On failure whatever was
    /// already created is released before the error is returned.
    pub fn init(mut host: H, cfg: &ArenaConfig) -> Result<Self, InitError> {
        let win = &cfg.window;

        let surface = match host.create_surface(&win.title, win.width, win.height) {
            Ok(s) => s,
            Err(e) => {
                host.shutdown_subsystem();
                return Err(InitError::SurfaceCreationFailed(e.0));
            }
        };
        log::info!("window '{}' created ({}x{})", win.title, win.width, win.height);

        let draw = match host.create_drawing_context(&surface) {
            Ok(c) => c,
            Err(e) => {
                host.destroy_surface(surface);
                host.shutdown_subsystem();
                return Err(InitError::DrawContextCreationFailed(e.0));
            }
        };
        log::info!("drawing context ready");

        let world = World::layout(win.width, win.height, cfg.sim.player_size, cfg.sim.player_speed);
        let last_ticks = host.now_ticks();

        Ok(Self {
            host,
            surface,
            draw,
            input: InputState::default(),
            world,
            renderer: SceneRenderer::default(),
            clock: SimulationClock::from_hz(cfg.sim.fixed_hz),
            stats: FrameStats::new(cfg.frame.fps_report_ms),
            last_ticks,
            idle_sleep_ms: cfg.frame.idle_sleep_ms,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn run(&mut self) {
        while self.run_iteration() == LoopState::Running {}
    }

    /// One pass of the loop: drain events, account elapsed time, run every
    /// due fixed step, then either render once or yield briefly.
    pub fn run_iteration(&mut self) -> LoopState {
        if self.input.quit_requested() {
            return LoopState::Stopped;
        }

        self.drain_events();

        let now = self.host.now_ticks();
        let elapsed = now.saturating_sub(self.last_ticks);
        self.last_ticks = now;

        self.clock.advance(elapsed);

        if let Some(window) = self.stats.accumulate(elapsed) {
            match window.ms_per_frame() {
                Some(ms) => log::info!("FPS: {:.1} | {:.3} ms", window.fps(), ms),
                None => log::debug!("no frames rendered in the last window"),
            }
        }

        let step_ms = self.clock.step_ms() as f32;
        let mut render = false;
        while self.clock.consume_step() {
            self.world.step(&self.input, step_ms);
            render = true;
        }

        if render {
            self.renderer.draw(&mut self.draw, &self.world);
            self.stats.frame_rendered();
        } else {
            self.host.sleep(self.idle_sleep_ms);
        }

        if self.input.quit_requested() {
            LoopState::Stopped
        } else {
            LoopState::Running
        }
    }

    fn drain_events(&mut self) {
        while !self.input.quit_requested() {
            let Some(event) = self.host.poll_event() else { break; };
            match event {
                HostEvent::Quit => self.input.request_quit(),
                HostEvent::KeyDown(key) => self.input.on_key_down(key),
                HostEvent::KeyUp(key) => self.input.on_key_up(key),
            }
        }
    }

    /// Releases the drawing context, the window and the host subsystem, in
    /// that order. Returns the host so callers can inspect it.
    pub fn shutdown(self) -> H {
        let Self { mut host, surface, draw, .. } = self;
        host.destroy_context(draw);
        host.destroy_surface(surface);
        host.shutdown_subsystem();
        log::info!("shutdown");
        host
    }
}
