//! Payload construction and component-grouping helpers
//!
//! Pure, stateless transformations from CLI-level arguments into the flat
//! URL-encoded field lists the ZMF endpoints expect. Nothing in this module
//! performs I/O.

use std::fmt;

use serde_json::Value;

/// An ordered list of form fields for one outbound request.
///
/// List-valued fields repeat the key, which is how the ZMF API expects
/// multi-component requests to be encoded. The same field list serves as a
/// request body (PUT/POST/DELETE) or a query string (GET).
#[derive(Debug, Clone, Default)]
pub struct Payload {
    fields: Vec<(String, String)>,
}

impl Payload {
    /// Create an empty payload
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a scalar field
    #[must_use]
    pub fn set(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.fields.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a list field; the key repeats once per element
    #[must_use]
    pub fn set_all<S: AsRef<str>>(mut self, key: &str, values: &[S]) -> Self {
        for value in values {
            self.fields
                .push((key.to_string(), value.as_ref().to_string()));
        }
        self
    }

    /// Append the four fixed job-card fields for the given user and action
    #[must_use]
    pub fn set_jobcard(mut self, user: &str, action: &str) -> Self {
        for (key, value) in jobcard(user, action) {
            self.fields.push((key.to_string(), value));
        }
        self
    }

    /// Merge a flat config mapping; scalars are stringified, arrays repeat
    /// the key, nulls are dropped
    #[must_use]
    pub fn merge(mut self, entries: &serde_json::Map<String, Value>) -> Self {
        for (key, value) in entries {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items {
                        self.fields.push((key.clone(), scalar_string(item)));
                    }
                }
                other => self.fields.push((key.clone(), scalar_string(other))),
            }
        }
        self
    }

    /// Borrow the fields for form or query encoding
    #[must_use]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Look up the first value for a field, if present
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Extract the extension of the final path segment.
///
/// Matches the semantics callers rely on for component typing: the suffix
/// after the last `.`, or an empty string when the final segment has no
/// suffix, starts with its only dot, or ends in a trailing dot.
#[must_use]
pub fn extension(path: &str) -> &str {
    let name = final_segment(path);
    match name.rfind('.') {
        Some(i) if i > 0 && i + 1 < name.len() => &name[i + 1..],
        _ => "",
    }
}

/// Extract the final path segment without its extension
#[must_use]
pub fn stem(path: &str) -> &str {
    let name = final_segment(path);
    match name.rfind('.') {
        Some(i) if i > 0 && i + 1 < name.len() => &name[..i],
        _ => name,
    }
}

fn final_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Components of one type, batched into a single outbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentGroup {
    /// Upper-cased extension, which doubles as the ZMF component type
    pub component_type: String,
    /// Component stems in their original relative order
    pub stems: Vec<String>,
}

/// Group component paths by their derived type.
///
/// Sorts by lower-cased extension (stable, so same-type components keep
/// their relative order) and batches equal extensions into one group. Every
/// component of a type lands in exactly one group, and groups come out in
/// ascending extension order.
#[must_use]
pub fn group_by_type<S: AsRef<str>>(components: &[S]) -> Vec<ComponentGroup> {
    let mut sorted: Vec<&str> = components.iter().map(AsRef::as_ref).collect();
    sorted.sort_by_key(|c| extension(c).to_lowercase());

    let mut groups: Vec<ComponentGroup> = Vec::new();
    for component in sorted {
        let tp = extension(component).to_uppercase();
        match groups.last_mut() {
            Some(group) if group.component_type == tp => {
                group.stems.push(stem(component).to_string());
            }
            _ => groups.push(ComponentGroup {
                component_type: tp,
                stems: vec![stem(component).to_string()],
            }),
        }
    }
    groups
}

/// Synthesize the four fixed-format batch-job header fields.
///
/// Line 1 carries the user id and the upper-cased first letter of the
/// action; lines 2-4 are constant text required by the job submission
/// convention.
#[must_use]
pub fn jobcard(user: &str, action: &str) -> [(&'static str, String); 4] {
    let initial: String = action
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default();
    [
        ("jobCard01", format!("//{user}{initial} JOB 0,'CHANGEMAN',")),
        ("jobCard02", "//         CLASS=A,MSGCLASS=A,".to_string()),
        ("jobCard03", "//         NOTIFY=&SYSUID".to_string()),
        ("jobCard04", "//*".to_string()),
    ]
}

/// Interpret a JSON value as a non-negative-ish sort key.
///
/// Integers pass through, digit-only strings parse, everything else
/// (negative strings, floats, nulls, objects) sorts as zero. Used to rank
/// package ids, which the API returns inconsistently typed.
#[must_use]
pub fn int_or_zero(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n.as_i64().unwrap_or(0),
        Value::String(s) => s
            .parse::<i64>()
            .ok()
            .filter(|n| *n >= 0)
            .unwrap_or(0),
        _ => 0,
    }
}
