use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub sim: SimConfig,
    #[serde(default)]
    pub frame: FrameConfig,
}

impl ArenaConfig {
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let cfg: Self = toml::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        cfg.validate()
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(cfg)
    }

    /// Rejects values the frame loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        let w = &self.window;
        if w.width == 0 || w.height == 0 || w.width > MAX_WINDOW_SIDE || w.height > MAX_WINDOW_SIDE {
            bail!("window size {}x{} must be within 1..={MAX_WINDOW_SIDE}", w.width, w.height);
        }

        let sim = &self.sim;
        if !(1..=MAX_FIXED_HZ).contains(&sim.fixed_hz) {
            bail!("sim.fixed_hz = {} must be within 1..={MAX_FIXED_HZ}", sim.fixed_hz);
        }
        if !sim.player_speed.is_finite() || sim.player_speed < 0.0 {
            bail!("sim.player_speed = {} must be a finite, non-negative number", sim.player_speed);
        }
        if sim.player_size == 0 || sim.player_size > w.width.min(w.height) / 2 {
            bail!("sim.player_size = {} must fit inside the map", sim.player_size);
        }

        if self.frame.fps_report_ms == 0 {
            bail!("frame.fps_report_ms must be positive");
        }
        Ok(())
    }

    /// Like [`load_toml`](Self::load_toml), but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_toml(path)
    }
}

const MAX_WINDOW_SIDE: u32 = 16_384;
const MAX_FIXED_HZ: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_title() -> String { "Arena".to_string() }
fn default_width() -> u32 { 800 }
fn default_height() -> u32 { 600 }

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: default_title(), width: default_width(), height: default_height() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default = "default_fixed_hz")]
    pub fixed_hz: u32,
    /// Pixels per millisecond.
    #[serde(default = "default_player_speed")]
    pub player_speed: f32,
    #[serde(default = "default_player_size")]
    pub player_size: u32,
}

fn default_fixed_hz() -> u32 { 60 }
fn default_player_speed() -> f32 { 0.1 }
fn default_player_size() -> u32 { 20 }

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fixed_hz: default_fixed_hz(),
            player_speed: default_player_speed(),
            player_size: default_player_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameConfig {
    #[serde(default = "default_fps_report_ms")]
    pub fps_report_ms: u64,
    #[serde(default = "default_idle_sleep_ms")]
    pub idle_sleep_ms: u64,
}

fn default_fps_report_ms() -> u64 { 1000 }
fn default_idle_sleep_ms() -> u64 { 1 }

impl Default for FrameConfig {
    fn default() -> Self {
        Self { fps_report_ms: default_fps_report_ms(), idle_sleep_ms: default_idle_sleep_ms() }
    }
}
