//! Dataset loading for the airfield engine.
//!
//! Responsibilities:
//! - Decode the countries, airports, and runways CSV datasets into core
//!   entities, fail-fast on the first defective row.
//! - Build the immutable [`airfield_core::Index`] from one load.
//!
//! Boundaries:
//! - No domain rules live here (those are `airfield-core`).
//! - No retrieval: callers hand over readers or file paths; downloading and
//!   caching the datasets is their concern.

#![forbid(unsafe_code)]

mod loader;

pub use loader::{
    Dataset, LoadError, load_paths, load_readers, read_airports, read_countries, read_runways,
};
