use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, VariantError>;

#[derive(Error, Debug)]
pub enum VariantError {
    #[error("Property {key} is not a valid base-10 integer: {value:?}")]
    Parse { key: String, value: String },

    #[error("Version code must be positive, got {value}")]
    NonPositiveVersionCode { value: u32 },

    #[error("SDK bounds violated: minSdk {min} <= targetSdk {target} <= compileSdk {compile} does not hold")]
    SdkBounds { min: u32, target: u32, compile: u32 },

    #[error("Override source is not valid UTF-8: {path}")]
    NotUtf8 { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Exit codes for CLI commands
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    pub const CONFIG_ERROR: i32 = 3;
}
