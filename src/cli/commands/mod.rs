//! Command handlers, grouped by the API surface they drive

pub mod component;
pub mod package;

use crate::session::ZmfResult;

/// Print an unwrapped result the way the API shaped it: pretty JSON with
/// sorted keys, or a marker line when the envelope carried no result at all
pub(crate) fn print_result(result: Option<&ZmfResult>) -> anyhow::Result<()> {
    match result {
        Some(rows) => println!("{}", serde_json::to_string_pretty(rows)?),
        None => println!("no result"),
    }
    Ok(())
}
