//! stockbot-catalog
//!
//! Remote catalog access: the HTTP source, its wire format, and the
//! single-slot TTL cache that fronts unscoped queries.

pub mod cache;
pub mod client;
pub mod http;
pub mod wire;

pub use cache::{CatalogCache, Clock, ManualClock, SystemClock};
pub use client::CatalogClient;
pub use http::HttpCatalog;
