use crate::modules::error::ConfigError;
use macroquad::prelude::Color;

pub const DEFAULT_GRAVITY: f32 = 0.5;
pub const MIN_GRAVITY: f32 = 0.1;
pub const GRAVITY_STEP: f32 = 0.1;

pub const DEFAULT_SPAWN_INTERVAL_MS: u32 = 1000;
pub const MIN_SPAWN_INTERVAL_MS: u32 = 1000;
pub const SPAWN_INTERVAL_STEP_MS: u32 = 1000;

pub const DEFAULT_SHAPES_PER_TICK: u32 = 1;
pub const MIN_SHAPES_PER_TICK: u32 = 1;

/// Startup settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub gravity: f32,
    pub spawn_interval_ms: u32,
    pub shapes_per_tick: u32,
    pub background: Color,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            viewport_width: 1024.0,
            viewport_height: 768.0,
            gravity: DEFAULT_GRAVITY,
            spawn_interval_ms: DEFAULT_SPAWN_INTERVAL_MS,
            shapes_per_tick: DEFAULT_SHAPES_PER_TICK,
            // #002433
            background: Color::from_rgba(0x00, 0x24, 0x33, 255),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.viewport_width > 0.0 && self.viewport_height > 0.0) {
            return Err(ConfigError::InvalidViewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }
        if !(self.gravity >= MIN_GRAVITY) {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }
        if self.spawn_interval_ms < MIN_SPAWN_INTERVAL_MS {
            return Err(ConfigError::InvalidInterval(self.spawn_interval_ms));
        }
        if self.shapes_per_tick < MIN_SHAPES_PER_TICK {
            return Err(ConfigError::InvalidShapesPerTick(self.shapes_per_tick));
        }
        Ok(())
    }
}

/// Values the control panel changes while the toy runs.
///
/// Every change goes through one of the step methods below. They apply the
/// floors: gravity resets to 0.5 when a decrement would drop it below 0.1,
/// while the interval and the spawn rate stop at their minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    gravity: f32,
    spawn_interval_ms: u32,
    shapes_per_tick: u32,
}

impl Params {
    pub fn new(gravity: f32, spawn_interval_ms: u32, shapes_per_tick: u32) -> Self {
        Params { gravity: round_tenth(gravity), spawn_interval_ms, shapes_per_tick }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Params::new(config.gravity, config.spawn_interval_ms, config.shapes_per_tick)
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn spawn_interval_ms(&self) -> u32 {
        self.spawn_interval_ms
    }

    pub fn shapes_per_tick(&self) -> u32 {
        self.shapes_per_tick
    }

    pub fn increase_gravity(&mut self) -> f32 {
        self.gravity = round_tenth(self.gravity + GRAVITY_STEP);
        self.gravity
    }

    pub fn decrease_gravity(&mut self) -> f32 {
        let lowered = round_tenth(self.gravity - GRAVITY_STEP);
        self.gravity = if lowered < MIN_GRAVITY { DEFAULT_GRAVITY } else { lowered };
        self.gravity
    }

    pub fn increase_interval(&mut self) -> u32 {
        self.spawn_interval_ms = self.spawn_interval_ms.saturating_add(SPAWN_INTERVAL_STEP_MS);
        self.spawn_interval_ms
    }

    pub fn decrease_interval(&mut self) -> u32 {
        self.spawn_interval_ms = self
            .spawn_interval_ms
            .saturating_sub(SPAWN_INTERVAL_STEP_MS)
            .max(MIN_SPAWN_INTERVAL_MS);
        self.spawn_interval_ms
    }

    pub fn increase_shapes_per_tick(&mut self) -> u32 {
        self.shapes_per_tick = self.shapes_per_tick.saturating_add(1);
        self.shapes_per_tick
    }

    pub fn decrease_shapes_per_tick(&mut self) -> u32 {
        self.shapes_per_tick = self.shapes_per_tick.saturating_sub(1).max(MIN_SHAPES_PER_TICK);
        self.shapes_per_tick
    }
}

impl Default for Params {
    fn default() -> Self {
        Params::from_config(&AppConfig::default())
    }
}

// Steps are a tenth, so keep the value on the tenth grid
fn round_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
