//! FlowDeck Core — catalog model, disclosure state machine, summary counters.
//!
//! This crate contains everything below the terminal layer:
//! - Nested catalog records (roles → flows → steps), order-preserving
//! - The built-in Zornicare user-flow catalog
//! - TOML loading for external catalogs, with id-uniqueness validation
//! - The two-slot disclosure state machine driving expand/collapse
//! - Aggregate counts for the summary panel

pub mod catalog;
pub mod disclosure;
pub mod model;
pub mod summary;

pub use disclosure::Disclosure;
pub use model::{Catalog, CatalogError, Flow, Role, Step};
pub use summary::Summary;
