// src/locale/mod.rs

//! Static multilingual pattern tables.
//!
//! Process-wide immutable lookup data consumed by the extraction services:
//! address-label phrases, city and TLD country maps, postal-code patterns,
//! industry keyword sets, and company-size phrase patterns. Loaded once at
//! first use and never mutated, so concurrent readers need no locking.
//!
//! Tables whose consumers tie-break by "first match in table order" are
//! slices, not maps, to keep that order fixed.

mod address;
mod geo;
mod industry;
mod size;

pub use address::ADDRESS_LABELS;
pub use geo::{COMPOUND_TLDS, MAJOR_CITIES, TLD_COUNTRY, country_from_domain, postal_pattern};
pub use industry::INDUSTRY_KEYWORDS;
pub use size::{SIZE_KEYWORDS, SIZE_PATTERNS};
