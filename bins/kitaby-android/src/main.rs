//! Kitaby Android CLI
//!
//! Resolves build-variant configuration for the Kitaby Android app and
//! emits it for the packaging toolchain.

mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use kitaby_variant::error::exit_codes;
use kitaby_variant::{
    resolve, BuildType, EnvOverrides, LocalProperties, ResolvedConfig, VariantDefaults,
    MAPS_API_KEY_ENV,
};
use output::{format_count, Status};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "kitaby-android")]
#[command(about = "Build-variant configuration tools for Kitaby Android")]
#[command(version)]
struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the build-variant configuration
    Resolve {
        /// Path to the local.properties override source
        #[arg(long, default_value = "android/local.properties")]
        properties: PathBuf,
        /// Build type: debug, release
        #[arg(long, default_value = "debug")]
        build_type: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Diagnose the override source and environment
    Doctor {
        /// Path to the local.properties override source
        #[arg(long, default_value = "android/local.properties")]
        properties: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    let exit_code = match cli.command {
        Commands::Resolve {
            properties,
            build_type,
            json,
        } => run_resolve(&properties, &build_type, json, cli.quiet),
        Commands::Doctor { properties } => run_doctor(&properties),
    };

    std::process::exit(exit_code);
}

fn run_resolve(properties: &Path, build_type: &str, json: bool, quiet: bool) -> i32 {
    let build_type = match build_type {
        "debug" => BuildType::Debug,
        "release" => BuildType::Release,
        _ => {
            Status::error(&format!(
                "Unknown build type: {}. Use debug or release",
                build_type
            ));
            return exit_codes::FAILURE;
        }
    };

    let overrides = match LocalProperties::load(properties) {
        Ok(props) => props,
        Err(e) => {
            Status::error(&format!("Failed to read {}: {}", properties.display(), e));
            return exit_codes::CONFIG_ERROR;
        }
    };

    if !quiet && !json && overrides.is_empty() {
        Status::info(&format!(
            "No overrides at {}; using defaults",
            properties.display()
        ));
    }

    match resolve(
        &overrides,
        &VariantDefaults::default(),
        build_type,
        EnvOverrides::from_env(),
    ) {
        Ok(config) => {
            if json {
                match serde_json::to_string_pretty(&config) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        Status::error(&format!("Serialization failed: {}", e));
                        return exit_codes::FAILURE;
                    }
                }
            } else if !quiet {
                print_summary(&config);
            }
            exit_codes::SUCCESS
        }
        Err(e) => {
            Status::error(&format!("Resolution failed: {}", e));
            exit_codes::CONFIG_ERROR
        }
    }
}

fn print_summary(config: &ResolvedConfig) {
    Status::header("Resolved configuration");
    println!("  applicationId  {}", config.application_id);
    println!("  versionCode    {}", config.version_code);
    println!("  versionName    {}", config.version_name);
    println!("  minSdk         {}", config.sdk.min);
    println!("  targetSdk      {}", config.sdk.target);
    println!("  compileSdk     {}", config.sdk.compile);
    println!("  ndkVersion     {}", config.ndk_version);
    println!("  buildType      {}", config.build_type.name());
    println!();

    if config.release_signed_with_debug_keys {
        Status::warning("Release build is signed with the debug keystore");
    }

    // Report presence only; the key itself stays out of the output.
    if config.maps_api_key.is_some() {
        Status::info(&format!("Maps API key: set (from {})", MAPS_API_KEY_ENV));
    } else {
        Status::info("Maps API key: not set");
    }
}

fn run_doctor(properties: &Path) -> i32 {
    println!("Environment Check");
    println!();

    if properties.exists() {
        match LocalProperties::load(properties) {
            Ok(props) => {
                Status::success(&format!(
                    "{}: found ({})",
                    properties.display(),
                    format_count(props.len(), "entry", "entries")
                ));
                let recognized = props.recognized_keys();
                if recognized.is_empty() {
                    Status::info("No recognized override keys; defaults apply");
                } else {
                    for key in recognized {
                        Status::success(&format!("override: {}", key));
                    }
                }
            }
            Err(e) => {
                Status::error(&format!("{}: {}", properties.display(), e));
                return exit_codes::CONFIG_ERROR;
            }
        }
    } else {
        Status::info(&format!(
            "{}: not present (defaults apply)",
            properties.display()
        ));
    }

    if EnvOverrides::from_env().maps_api_key.is_some() {
        Status::success(&format!("{}: set", MAPS_API_KEY_ENV));
    } else {
        Status::warning(&format!("{}: not set", MAPS_API_KEY_ENV));
    }

    let defaults = VariantDefaults::default();
    match defaults.sdk.validate() {
        Ok(()) => {
            Status::success(&format!(
                "SDK bounds: {} <= {} <= {}",
                defaults.sdk.min, defaults.sdk.target, defaults.sdk.compile
            ));
            exit_codes::SUCCESS
        }
        Err(e) => {
            Status::error(&format!("SDK bounds: {}", e));
            exit_codes::CONFIG_ERROR
        }
    }
}
