//! Planning Center API integration.
//!
//! Provides the paginated collection fetcher, lookups and per-record mutations
//! for the People and Publishing APIs.

/// API client for Planning Center Online requests
pub mod api;
/// Request/response plumbing and the transport seam
pub mod transport;
/// Data types representing Planning Center resources
pub mod types;

// Re-export key components
pub use api::{where_filter, PlanningCenterClient};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
pub use types::{BatchReport, Contact, FieldDatum, FieldDefinitionId, Fetched, FetchStatus, Record};
