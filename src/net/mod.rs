//! Backend API surface: wire types, the authorized HTTP client, and typed
//! endpoint wrappers.

pub mod api;
pub mod http;
pub mod types;
