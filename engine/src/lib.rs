//! Arena engine: a fixed-timestep loop moving one square around a map.
//!
//! The loop itself ([`EngineContext`]) only talks to a [`Host`]; the
//! desktop backend lives in [`platform`].

pub mod clock;
pub mod config;
pub mod context;
pub mod error;
pub mod geometry;
pub mod host;
pub mod input;
pub mod render;
pub mod sim;

#[cfg(any(windows, target_os = "macos", target_os = "linux"))]
pub mod platform;

pub use config::ArenaConfig;
pub use context::{EngineContext, LoopState};
pub use error::InitError;
pub use host::{DrawContext, Host, HostError, HostEvent};
