//! Config document loading for package creation
//!
//! Package descriptions arrive as a flat YAML or TOML mapping, read from a
//! file or from standard input, and get merged field-by-field into the
//! outbound payload. The parser is selected by file extension: `.toml` picks
//! TOML, anything else is treated as YAML.

use std::io::Read;

use serde_json::Value;

use crate::error::ZmfError;
use crate::payload::extension;

/// Flat config mapping, keys in document order lost to the parser but
/// stable for any given document
pub type ConfigMap = serde_json::Map<String, Value>;

/// Read a config document from `path`, or from stdin when `path` is `-`.
///
/// The top level must be a mapping; anything else is a config error, as is
/// any open or parse failure.
pub fn read_config(path: &str) -> Result<ConfigMap, ZmfError> {
    let text = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|err| config_error(path, &err))?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(|err| config_error(path, &err))?
    };
    parse_config(path, &text)
}

/// Parse a config document already in memory; `path` only labels errors and
/// selects the parser
pub fn parse_config(path: &str, text: &str) -> Result<ConfigMap, ZmfError> {
    let value: Value = if extension(path).eq_ignore_ascii_case("toml") {
        let parsed: toml::Value =
            toml::from_str(text).map_err(|err| config_error(path, &err))?;
        serde_json::to_value(parsed).map_err(|err| config_error(path, &err))?
    } else {
        serde_yaml::from_str(text).map_err(|err| config_error(path, &err))?
    };

    match value {
        Value::Object(map) => Ok(map),
        other => Err(ZmfError::Config {
            path: path.to_string(),
            reason: format!("expected a mapping at the top level, got {other}"),
        }),
    }
}

fn config_error(path: &str, err: &dyn std::fmt::Display) -> ZmfError {
    ZmfError::Config {
        path: path.to_string(),
        reason: err.to_string(),
    }
}
