//! The variant resolver
//!
//! Single-pass merge of the override source over the compile-time
//! defaults. Resolution is pure and idempotent: no writes, no hidden
//! state, safe to call concurrently.

use crate::defaults::VariantDefaults;
use crate::error::{Result, VariantError};
use crate::properties::LocalProperties;
use crate::{MAPS_API_KEY_ENV, VERSION_CODE_KEY, VERSION_NAME_KEY};
use serde::{Deserialize, Serialize};

/// Named build configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildType {
    #[default]
    Debug,
    Release,
}

impl BuildType {
    pub fn name(self) -> &'static str {
        match self {
            BuildType::Debug => "debug",
            BuildType::Release => "release",
        }
    }

    /// Keystore identity used to sign this build type.
    ///
    /// No release keystore is configured yet, so release builds reuse the
    /// debug keystore and installs keep working.
    pub fn signing(self) -> SigningConfig {
        SigningConfig::Debug
    }
}

/// Keystore identity used to sign a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SigningConfig {
    Debug,
}

/// Values sourced from the process environment, captured once at startup.
///
/// Resolution itself never reads the environment; callers capture this
/// and pass it in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub maps_api_key: Option<String>,
}

impl EnvOverrides {
    /// Capture recognized environment keys. Unset and empty values are
    /// both treated as absent.
    pub fn from_env() -> Self {
        Self {
            maps_api_key: std::env::var(MAPS_API_KEY_ENV)
                .ok()
                .filter(|v| !v.is_empty()),
        }
    }
}

/// The resolved build parameters consumed by the packaging toolchain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    pub application_id: String,
    pub version_code: u32,
    pub version_name: String,
    pub sdk: crate::SdkBounds,
    pub ndk_version: String,
    pub build_type: BuildType,
    pub signing: SigningConfig,
    /// True when a release build falls back to the debug keystore.
    pub release_signed_with_debug_keys: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maps_api_key: Option<String>,
}

/// Resolve concrete build parameters from overrides and defaults.
///
/// For `flutter.versionCode` and `flutter.versionName`, an override that
/// is present and non-empty wins; otherwise the default applies. A
/// malformed version code is fatal rather than silently defaulted, since
/// an explicit override that does not parse indicates operator error.
pub fn resolve(
    overrides: &LocalProperties,
    defaults: &VariantDefaults,
    build_type: BuildType,
    env: EnvOverrides,
) -> Result<ResolvedConfig> {
    defaults.sdk.validate()?;

    let raw_code = overrides
        .get_non_empty(VERSION_CODE_KEY)
        .unwrap_or(defaults.version_code.as_str());
    let version_code: u32 = raw_code.parse().map_err(|_| VariantError::Parse {
        key: VERSION_CODE_KEY.to_string(),
        value: raw_code.to_string(),
    })?;
    if version_code == 0 {
        return Err(VariantError::NonPositiveVersionCode {
            value: version_code,
        });
    }

    let version_name = overrides
        .get_non_empty(VERSION_NAME_KEY)
        .unwrap_or(defaults.version_name.as_str())
        .to_string();

    let signing = build_type.signing();

    Ok(ResolvedConfig {
        application_id: defaults.application_id.clone(),
        version_code,
        version_name,
        sdk: defaults.sdk,
        ndk_version: defaults.ndk_version.clone(),
        build_type,
        signing,
        release_signed_with_debug_keys: build_type == BuildType::Release
            && signing == SigningConfig::Debug,
        maps_api_key: env.maps_api_key,
    })
}
