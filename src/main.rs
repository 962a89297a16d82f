//! zmfc - command-line client for the ChangeMan ZMF REST API

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
#![allow(clippy::module_name_repetitions, clippy::cargo_common_metadata)]

use std::process::ExitCode;

use colored::Colorize;

use zmfc::error::ZmfError;

// Exit codes: clap owns 2 for usage errors; 3 is reserved for a
// domain-level rejection by the API so scripts can tell it apart from
// transport or config failures (1).
const EXIT_FAILURE: u8 = 1;
const EXIT_REJECTED: u8 = 3;

fn main() -> ExitCode {
    match zmfc::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            if err
                .downcast_ref::<ZmfError>()
                .is_some_and(ZmfError::is_rejection)
            {
                ExitCode::from(EXIT_REJECTED)
            } else {
                ExitCode::from(EXIT_FAILURE)
            }
        }
    }
}
