use thiserror::Error;

/// Problems found while setting the toy up. Nothing fails once it runs.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("control panel layout is missing required control `{selector}`")]
    MissingControl { selector: &'static str },

    #[error("initial gravity {0} is below the minimum of 0.1")]
    InvalidGravity(f32),

    #[error("initial spawn interval {0} ms is below the minimum of 1000 ms")]
    InvalidInterval(u32),

    #[error("initial shapes per tick must be at least 1, got {0}")]
    InvalidShapesPerTick(u32),

    #[error("viewport must have a positive size, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}
