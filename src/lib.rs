//! zmfc - a command-line client for the ChangeMan ZMF REST API
//!
//! This library translates change-management operations (checkin, build,
//! audit, promote, freeze, ...) into authenticated HTTP requests against a
//! ZMF REST endpoint and normalizes the vendor's response envelope into a
//! uniform success/failure contract.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod payload;
pub mod session;
