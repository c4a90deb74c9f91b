//! Salesforce API module.
//!
//! This module provides:
//! - SOAP partner login and session credentials
//! - HTTP client for the weekly data export servlet

pub mod client;
pub mod session;

pub use client::{content_length, parse_index, ExportClient};
pub use session::{login, SessionCredentials};
