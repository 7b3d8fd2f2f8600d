// src/lib.rs

//! Prospector Library
//!
//! Streams Common Crawl WET archives, extracts business contact signals
//! (emails, headquarters address, industry, company size, country) per
//! page, and emits one NDJSON record per discovered email.

pub mod error;
pub mod fetch;
pub mod locale;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod wet;
