//! Compile-time variant defaults
//!
//! These mirror the values the packaging toolchain would otherwise bake in
//! directly. Keeping them as an explicit record makes the SDK bound
//! invariant checkable on every resolution.

use crate::error::{Result, VariantError};
use serde::{Deserialize, Serialize};

/// Globally-unique identifier of the installable package.
pub const APPLICATION_ID: &str = "com.example.kitaby_flutter";

/// Fallback version code when no override is present.
pub const DEFAULT_VERSION_CODE: &str = "1";

/// Fallback version name when no override is present.
pub const DEFAULT_VERSION_NAME: &str = "1.0";

/// Minimum supported Android API level.
pub const MIN_SDK: u32 = 21;

/// API level the app targets.
pub const TARGET_SDK: u32 = 34;

/// API level the app compiles against.
pub const COMPILE_SDK: u32 = 34;

/// NDK release pinned by the build.
pub const NDK_VERSION: &str = "26.1.10909125";

/// SDK bounds stamped on the produced bundle.
///
/// Invariant: `min <= target <= compile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkBounds {
    pub min: u32,
    pub target: u32,
    pub compile: u32,
}

impl SdkBounds {
    /// Check the ordering invariant.
    pub fn validate(&self) -> Result<()> {
        if self.min <= self.target && self.target <= self.compile {
            Ok(())
        } else {
            Err(VariantError::SdkBounds {
                min: self.min,
                target: self.target,
                compile: self.compile,
            })
        }
    }
}

impl Default for SdkBounds {
    fn default() -> Self {
        Self {
            min: MIN_SDK,
            target: TARGET_SDK,
            compile: COMPILE_SDK,
        }
    }
}

/// Defaults a resolution falls back to when the override source is silent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantDefaults {
    pub application_id: String,
    /// Fallback version code, parsed the same way an override would be.
    pub version_code: String,
    pub version_name: String,
    pub sdk: SdkBounds,
    pub ndk_version: String,
}

impl Default for VariantDefaults {
    fn default() -> Self {
        Self {
            application_id: APPLICATION_ID.to_string(),
            version_code: DEFAULT_VERSION_CODE.to_string(),
            version_name: DEFAULT_VERSION_NAME.to_string(),
            sdk: SdkBounds::default(),
            ndk_version: NDK_VERSION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sdk_bounds_hold() {
        assert!(SdkBounds::default().validate().is_ok());
    }

    #[test]
    fn test_min_above_target_rejected() {
        let bounds = SdkBounds {
            min: 35,
            target: 34,
            compile: 34,
        };
        assert!(matches!(
            bounds.validate(),
            Err(VariantError::SdkBounds { min: 35, .. })
        ));
    }

    #[test]
    fn test_target_above_compile_rejected() {
        let bounds = SdkBounds {
            min: 21,
            target: 35,
            compile: 34,
        };
        assert!(bounds.validate().is_err());
    }

    #[test]
    fn test_defaults_are_non_empty() {
        let defaults = VariantDefaults::default();
        assert!(!defaults.version_code.is_empty());
        assert!(!defaults.version_name.is_empty());
        assert!(!defaults.application_id.is_empty());
    }
}
