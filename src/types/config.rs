//! Configuration structures for the facility map browser
//!
//! This module contains the application configuration with validation logic,
//! plus the CLI argument structure for the headless demo driver.

use crate::error::{AppError, AppResult};
use crate::map::region::Coordinate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;

/// Built-in configuration defaults
pub mod defaults {
    /// Span in degrees of the region placed around a position
    pub const REGION_DELTA: f64 = 0.01;

    /// Center the map jumps to when a search is submitted (Taipei Main Station)
    pub const SEARCHED_CENTER: (f64, f64) = (25.0478, 121.5171);

    /// Position the demo geolocation stub reports (Hsinchu)
    pub const FALLBACK_CENTER: (f64, f64) = (24.78132, 121.03129);

    /// How long a submission stays in flight before settling back to idle
    pub const SUBMIT_SETTLE_MS: u64 = 300;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "caremap",
    version,
    about = "Care-facility map browser - headless state-model driver",
    long_about = "Drives the facility map state model without a UI host: loads the bundled \
facility datasets, applies filter selections, optionally submits a search, and prints the \
annotated facility list a presentation surface would render.

EXAMPLES:
    # Show the default dataset with all filters selected
    caremap

    # Narrow the facet selections
    caremap --space-types nursing_room,family_restroom --amenities 尿布檯

    # Drive a search submission and export the result
    caremap --search 台北車站 --export facilities.jsonl

    # Generate a configuration template
    caremap --print-config > my-config.json

    # Validate configuration without driving the screen
    caremap --config my-config.json --dry-run"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. Defaults apply for any missing field."
    )]
    pub config: Option<String>,

    /// Space-type facet selection (comma separated keys)
    #[arg(
        long,
        value_delimiter = ',',
        help = "Space types to keep selected (default: all)",
        long_help = "Comma-separated space-type keys to keep selected; every other space type \
is toggled off. Keys: nursing_room, family_restroom, accessible_restroom."
    )]
    pub space_types: Vec<String>,

    /// Access-method facet selection (comma separated keys)
    #[arg(
        long,
        value_delimiter = ',',
        help = "Access methods to keep selected (default: all)",
        long_help = "Comma-separated access-method keys to keep selected. Keys: open_access, \
registration_required, staff_assistance."
    )]
    pub access_methods: Vec<String>,

    /// Space-size facet selection (comma separated keys)
    #[arg(
        long,
        value_delimiter = ',',
        help = "Space sizes to keep selected (default: all)",
        long_help = "Comma-separated space-size keys to keep selected. Keys: spacious, medium, \
narrow."
    )]
    pub space_sizes: Vec<String>,

    /// Amenity tags to add to the filter (repeatable)
    #[arg(long, value_delimiter = ',', help = "Amenity tags to add (max 10)")]
    pub amenities: Vec<String>,

    /// Search text to submit after applying filters
    #[arg(long, help = "Submit a search with this text (swaps to the searched dataset)")]
    pub search: Option<String>,

    /// Output path for the annotated facility list (JSONL)
    #[arg(long, help = "Write the annotated facility list to this JSONL file")]
    pub export: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without driving the screen
    #[arg(long, help = "Validate configuration without driving the screen")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Span in degrees of the region placed around a position
    pub region_delta: f64,
    /// Center the map jumps to when a search is submitted
    pub searched_center: Coordinate,
    /// Position the demo geolocation stub reports
    pub fallback_center: Coordinate,
    /// Milliseconds a submission stays in flight before settling
    pub submit_settle_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let (searched_lat, searched_lng) = defaults::SEARCHED_CENTER;
        let (fallback_lat, fallback_lng) = defaults::FALLBACK_CENTER;
        Self {
            region_delta: defaults::REGION_DELTA,
            searched_center: Coordinate::new(searched_lat, searched_lng),
            fallback_center: Coordinate::new(fallback_lat, fallback_lng),
            submit_settle_ms: defaults::SUBMIT_SETTLE_MS,
        }
    }
}

impl AppConfig {
    /// Load configuration from CLI arguments, reading the config file if given
    pub fn from_cli_args(args: &CliArgs) -> AppResult<Self> {
        let config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config)
    }

    /// Load configuration from a JSON file, with defaults for missing fields
    pub fn from_file(path: &str) -> AppResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::configuration_error(format!("Failed to read config file '{}': {}", path, e))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            AppError::configuration_error(format!("Failed to parse config file '{}': {}", path, e))
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> AppResult<()> {
        if self.region_delta <= 0.0 {
            return Err(AppError::configuration_error("region_delta must be positive"));
        }
        if !self.searched_center.is_valid() {
            return Err(AppError::configuration_error(
                "searched_center is outside valid coordinate ranges",
            ));
        }
        if !self.fallback_center.is_valid() {
            return Err(AppError::configuration_error(
                "fallback_center is outside valid coordinate ranges",
            ));
        }
        if self.submit_settle_ms == 0 {
            return Err(AppError::configuration_error("submit_settle_ms must be greater than 0"));
        }
        Ok(())
    }

    /// Serialize the configuration as pretty JSON
    pub fn print_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
