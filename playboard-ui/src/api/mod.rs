//! API Client
//!
//! HTTP access to the dashboard backend.

pub mod client;

pub use client::HttpBackend;
