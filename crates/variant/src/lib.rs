//! Build-variant configuration resolution for Kitaby Android
//!
//! The Android packaging toolchain stamps each installable bundle with an
//! application id, a version code/name pair, and SDK bounds. Developers
//! override the version pair per machine through an untracked
//! `local.properties` file; everything else is fixed at compile time.
//! This crate implements that resolution: load the optional override
//! source, merge it over the defaults, and hand the toolchain a single
//! immutable record.
//!
//! # Example
//!
//! ```rust
//! use kitaby_variant::{resolve, BuildType, EnvOverrides, LocalProperties, VariantDefaults};
//!
//! let overrides = LocalProperties::parse("flutter.versionCode=42\n");
//! let config = resolve(
//!     &overrides,
//!     &VariantDefaults::default(),
//!     BuildType::Debug,
//!     EnvOverrides::default(),
//! )
//! .expect("valid overrides");
//!
//! assert_eq!(config.version_code, 42);
//! assert_eq!(config.version_name, "1.0");
//! ```

pub mod defaults;
pub mod error;
pub mod properties;
pub mod resolver;

pub use defaults::{SdkBounds, VariantDefaults};
pub use error::{Result, VariantError};
pub use properties::LocalProperties;
pub use resolver::{resolve, BuildType, EnvOverrides, ResolvedConfig, SigningConfig};

/// Override key carrying the version code.
pub const VERSION_CODE_KEY: &str = "flutter.versionCode";

/// Override key carrying the version name.
pub const VERSION_NAME_KEY: &str = "flutter.versionName";

/// Environment variable holding the optional Maps API key.
pub const MAPS_API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";
