//! Catalog API layer: request building and response parsing.
//!
//! The plugin follows a host-does-IO pattern: this layer describes HTTP
//! round-trips as plain data, and the Zellij shim executes them through the
//! host's `web_request` facility. Responses return as events carrying the
//! original context map, from which [`RequestKind`] recovers the issuing
//! operation.
//!
//! # Modules
//!
//! - [`request`]: Request/response data types and the `RequestKind` tag
//! - [`catalog`]: `CatalogClient` builders and parsers for each operation

pub mod catalog;
pub mod request;

pub use catalog::CatalogClient;
pub use request::{ApiRequest, ApiResponse, HttpMethod, RequestKind};
