use std::{
    collections::VecDeque,
    sync::Arc,
    thread,
    time::{Duration, Instant},
};

use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    error::OsError,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{Key as LogicalKey, NamedKey},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window, WindowAttributes, WindowId},
};

use super::framebuffer::PixelsContext;
use crate::{
    host::{Host, HostError, HostEvent},
    input::Key,
};

/// Pumps allowed while waiting for the platform to hand out a window.
const CREATE_WINDOW_ATTEMPTS: u32 = 100;

pub struct WinitSurface {
    window: Arc<Window>,
    width: u32,
    height: u32,
}

/// Host backed by a winit event loop that is pumped on demand instead of
/// owning the thread, so the frame loop keeps control of pacing.
pub struct WinitHost {
    event_loop: EventLoop<()>,
    pump: Pump,
    origin: Instant,
}

impl WinitHost {
    pub fn new() -> Result<Self, HostError> {
        let event_loop = EventLoop::new().map_err(|e| HostError::new(e.to_string()))?;
        Ok(Self {
            event_loop,
            pump: Pump::default(),
            origin: Instant::now(),
        })
    }

    fn pump_once(&mut self, timeout: Duration) {
        if let PumpStatus::Exit(code) = self.event_loop.pump_app_events(Some(timeout), &mut self.pump) {
            log::debug!("event loop exited with code {code}");
            self.pump.queue.push_back(HostEvent::Quit);
        }
    }
}

impl Host for WinitHost {
    type Surface = WinitSurface;
    type Context = PixelsContext;

    fn create_surface(&mut self, title: &str, width: u32, height: u32) -> Result<WinitSurface, HostError> {
        self.pump.pending = Some(
            Window::default_attributes()
                .with_title(title)
                .with_inner_size(LogicalSize::new(width, height))
                .with_resizable(false),
        );

        for _ in 0..CREATE_WINDOW_ATTEMPTS {
            self.pump_once(Duration::from_millis(10));
            if let Some(created) = self.pump.created.take() {
                let window = created.map_err(|e| HostError::new(e.to_string()))?;
                return Ok(WinitSurface { window, width, height });
            }
        }

        self.pump.pending = None;
        Err(HostError::new("event loop never became ready to create a window"))
    }

    fn create_drawing_context(&mut self, surface: &WinitSurface) -> Result<PixelsContext, HostError> {
        PixelsContext::new(Arc::clone(&surface.window), surface.width, surface.height)
            .map_err(|e| HostError::new(e.to_string()))
    }

    fn poll_event(&mut self) -> Option<HostEvent> {
        if self.pump.queue.is_empty() {
            self.pump_once(Duration::ZERO);
        }
        self.pump.queue.pop_front()
    }

    fn now_ticks(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep(&mut self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }

    fn destroy_context(&mut self, ctx: PixelsContext) {
        drop(ctx);
    }

    fn destroy_surface(&mut self, surface: WinitSurface) {
        if self.pump.window_id == Some(surface.window.id()) {
            self.pump.window_id = None;
        }
        drop(surface);
    }

    fn shutdown_subsystem(&mut self) {
        self.pump.queue.clear();
        log::debug!("window system released");
    }
}

#[derive(Default)]
struct Pump {
    pending: Option<WindowAttributes>,
    created: Option<Result<Arc<Window>, OsError>>,
    window_id: Option<WindowId>,
    queue: VecDeque<HostEvent>,
}

impl Pump {
    fn create_pending(&mut self, el: &ActiveEventLoop) {
        let Some(attrs) = self.pending.take() else { return; };
        let created = el.create_window(attrs).map(Arc::new);
        if let Ok(window) = &created {
            self.window_id = Some(window.id());
        }
        self.created = Some(created);
    }
}

impl ApplicationHandler for Pump {
    fn resumed(&mut self, el: &ActiveEventLoop) {
        self.create_pending(el);
    }

    fn window_event(&mut self, _el: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        if Some(id) != self.window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => self.queue.push_back(HostEvent::Quit),
            WindowEvent::KeyboardInput { event, .. } => {
                let key = map_key(event.logical_key.as_ref());
                self.queue.push_back(match event.state {
                    ElementState::Pressed => HostEvent::KeyDown(key),
                    ElementState::Released => HostEvent::KeyUp(key),
                });
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, el: &ActiveEventLoop) {
        // Some platforms only resume once; pick up requests made afterwards.
        self.create_pending(el);
    }
}

/// Maps by the character the layout produces, so movement follows the
/// printed W/A/S/D keys on any keyboard layout.
fn map_key(key: LogicalKey<&str>) -> Key {
    match key {
        LogicalKey::Character(c) if c.eq_ignore_ascii_case("w") => Key::W,
        LogicalKey::Character(c) if c.eq_ignore_ascii_case("a") => Key::A,
        LogicalKey::Character(c) if c.eq_ignore_ascii_case("s") => Key::S,
        LogicalKey::Character(c) if c.eq_ignore_ascii_case("d") => Key::D,
        LogicalKey::Named(NamedKey::Escape) => Key::Escape,
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_and_escape_are_recognized() {
        assert_eq!(map_key(LogicalKey::Character("w")), Key::W);
        assert_eq!(map_key(LogicalKey::Character("a")), Key::A);
        assert_eq!(map_key(LogicalKey::Character("s")), Key::S);
        assert_eq!(map_key(LogicalKey::Character("d")), Key::D);
        assert_eq!(map_key(LogicalKey::Named(NamedKey::Escape)), Key::Escape);
    }

    #[test]
    fn shifted_letters_still_move() {
        assert_eq!(map_key(LogicalKey::Character("W")), Key::W);
        assert_eq!(map_key(LogicalKey::Character("D")), Key::D);
    }

    #[test]
    fn other_characters_and_arrows_are_ignored() {
        // the key in the QWERTY "w" position types "z" on AZERTY
        assert_eq!(map_key(LogicalKey::Character("z")), Key::Other);
        assert_eq!(map_key(LogicalKey::Character("q")), Key::Other);
        assert_eq!(map_key(LogicalKey::Named(NamedKey::ArrowUp)), Key::Other);
        assert_eq!(map_key(LogicalKey::Named(NamedKey::Space)), Key::Other);
    }
}
