//! Command-line interface: argument definitions and command dispatch

pub mod app;
pub mod commands;

pub use app::run;
