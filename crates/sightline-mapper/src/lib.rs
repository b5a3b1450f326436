//! Sightline Mapper
//!
//! The observable-to-CTIM mapping engine: turns Qualys IOC event records
//! into CTIM sightings, judgements, indicators and relationships.
//!
//! # Architecture
//!
//! ```text
//! Observable → Observer → EventSource → events → builder → Bundle
//!                                        │
//!                            relations ──┤── targets
//! ```
//!
//! # Key Features
//!
//! - **Closed observable registry**: each kind builds its own query filter
//! - **Two-phase fetch**: active-state query first, then the full result
//!   set; overlapping events are kept, never deduplicated
//! - **Tolerant event access**: every field lookup goes through the path
//!   accessor, so missing fields produce empty relations or null values
//!   instead of failures
//! - **Pivot URLs**: `refer` builds a browsable Qualys hunting search
//!
//! # Example Usage
//!
//! ```
//! use sightline_mapper::Observer;
//! use sightline_transport::MockSource;
//!
//! let observer = Observer::new(MockSource::new());
//! let bundle = observer
//!     .observe("https://api.qualys.test", "md5", "d41d8cd98f00b204e9800998ecf8427e")
//!     .unwrap();
//! assert!(bundle.is_empty());
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod error;
pub mod observer;
pub mod path;
pub mod relations;
pub mod target;

#[cfg(test)]
mod tests;

pub use builder::map_event;
pub use error::ObserveError;
pub use observer::{refer, Observer};

// The kind listing is part of this crate's exposed contract
pub use sightline_domain::list_kinds;
