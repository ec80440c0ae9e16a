//! Capability the frame loop needs from the windowing/rendering host.
//!
//! The loop never talks to a window system directly; a backend (see
//! [`crate::platform`]) or a test double implements these traits.

use thiserror::Error;

use crate::{
    geometry::{Color, Rect},
    input::Key,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Diagnostic reported by the host when it cannot create something.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct HostError(pub String);

impl HostError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Accelerated 2D drawing primitives. Calls are infallible from the
/// caller's point of view; backends log what they cannot do.
pub trait DrawContext {
    fn set_draw_color(&mut self, color: Color);
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect);
    fn present(&mut self);
}

pub trait Host {
    type Surface;
    type Context: DrawContext;

    fn create_surface(&mut self, title: &str, width: u32, height: u32)
        -> Result<Self::Surface, HostError>;

    fn create_drawing_context(&mut self, surface: &Self::Surface)
        -> Result<Self::Context, HostError>;

    /// Non-blocking; `None` once the queue is empty.
    fn poll_event(&mut self) -> Option<HostEvent>;

    /// Monotonically non-decreasing milliseconds.
    fn now_ticks(&self) -> u64;

    fn sleep(&mut self, ms: u64);

    fn destroy_context(&mut self, ctx: Self::Context);
    fn destroy_surface(&mut self, surface: Self::Surface);
    fn shutdown_subsystem(&mut self);
}
