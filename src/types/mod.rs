//! Core types and identifiers for the facility map browser
//!
//! This module contains the fundamental types, identifiers, and configuration
//! structures used throughout the application.
//!
//! # Overview
//!
//! - **Identifiers**: facility ids from the datasets, session ids for logging
//! - **Enums**: type-safe keys for space types, access methods, space sizes,
//!   and dataset selection
//! - **Configuration**: application configuration with validation and CLI
//!   support for the demo driver

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
