//! Adapters for the transport port: a real HTTPS client and an in-memory
//! recorder.

pub mod http;
pub mod in_memory;
