// src/models/mod.rs

//! Domain models for the extraction pipeline.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod lead;
mod record;

// Re-export all public types
pub use config::{Config, FetchConfig, PathsConfig, PipelineConfig};
pub use lead::Lead;
pub use record::{ExtractionResult, PageRecord, SizeBucket};
