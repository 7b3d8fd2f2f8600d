// src/pipeline/mod.rs

//! Pipeline entry points and durable state.
//!
//! - [`Ledger`]: append-only completion log enabling resume
//! - [`LeadSink`]: buffered NDJSON output writer
//! - [`run_pipeline`]: concurrent fetch/process loop

mod ledger;
mod run;
mod sink;

pub use ledger::Ledger;
pub use run::{RunStats, run_pipeline};
pub use sink::LeadSink;
