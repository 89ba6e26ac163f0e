// Harness platform API access
pub mod client;
pub mod types;

pub use client::{build_query, build_request_body, ConnectorClient};
pub use types::{ConnectorFilter, ListConnectorsBody};
