//! Core utilities shared across the application:
//! - `http`: session credentials and the fixed request header set

pub mod http;

// Re-export commonly used items for convenience
pub use http::{build_header_map, Credentials};
