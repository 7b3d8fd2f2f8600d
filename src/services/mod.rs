// src/services/mod.rs

//! Extraction services.
//!
//! Each service derives one signal from raw page text using the static
//! tables in [`crate::locale`]. None of them can fail: missing signals
//! come back as empty values.

mod address;
mod email;
mod enrich;
mod industry;
mod size;

pub use address::extract_address;
pub use email::extract_emails;
pub use enrich::PageEnricher;
pub use industry::classify_industry;
pub use size::estimate_size;
