//! Data transfer objects for the wire formats spoken by the backends.

pub mod http;
