//! Tests for the payload construction and grouping helpers
//!
//! The extension and jobcard tables mirror the fixed-format conventions the
//! ZMF endpoints expect; the grouping tests pin down the deterministic
//! per-type batching.

use serde_json::{Value, json};
use test_case::test_case;

use zmfc::payload::{ComponentGroup, Payload, extension, group_by_type, int_or_zero, jobcard, stem};

// =============================================================================
// Extension / stem tests
// =============================================================================

#[test_case("file/with/path/and.ext", "ext" ; "path with extension")]
#[test_case("file/with/path/and", "" ; "path without extension")]
#[test_case("file/with/path.ext/and", "" ; "dot in directory only")]
#[test_case("file.ext", "ext" ; "bare file with extension")]
#[test_case("file.tar.gz", "gz" ; "last suffix wins")]
#[test_case(".ext", "" ; "hidden file has no extension")]
#[test_case("file.", "" ; "trailing dot")]
#[test_case(".", "" ; "single dot")]
#[test_case("", "" ; "empty string")]
fn test_extension(path: &str, expected: &str) {
    assert_eq!(extension(path), expected);
}

#[test_case("file/with/path/and.ext", "and" ; "path with extension")]
#[test_case("file/with/path/and", "and" ; "path without extension")]
#[test_case("file.ext", "file" ; "bare file")]
#[test_case(".ext", ".ext" ; "hidden file keeps its name")]
#[test_case("", "" ; "empty string")]
fn test_stem(path: &str, expected: &str) {
    assert_eq!(stem(path), expected);
}

// =============================================================================
// Jobcard tests
// =============================================================================

#[test_case("", "", "// JOB 0,'CHANGEMAN'," ; "empty user and action")]
#[test_case("U000000", "audit", "//U000000A JOB 0,'CHANGEMAN'," ; "lowercase action")]
#[test_case("U000000", "AUDIT", "//U000000A JOB 0,'CHANGEMAN'," ; "uppercase action")]
#[test_case("U000000", "build", "//U000000B JOB 0,'CHANGEMAN'," ; "build action")]
fn test_jobcard_line1(user: &str, action: &str, expected: &str) {
    let cards = jobcard(user, action);
    assert_eq!(cards[0], ("jobCard01", expected.to_string()));
}

#[test]
fn test_jobcard_constant_lines() {
    let cards = jobcard("U000000", "audit");
    assert_eq!(
        cards[1],
        ("jobCard02", "//         CLASS=A,MSGCLASS=A,".to_string())
    );
    assert_eq!(cards[2], ("jobCard03", "//         NOTIFY=&SYSUID".to_string()));
    assert_eq!(cards[3], ("jobCard04", "//*".to_string()));
}

// =============================================================================
// Grouping tests
// =============================================================================

#[test]
fn test_group_by_type_batches_per_extension() {
    let groups = group_by_type(&["a.sre", "b.srb", "c.sre"]);
    assert_eq!(
        groups,
        vec![
            ComponentGroup {
                component_type: "SRB".to_string(),
                stems: vec!["b".to_string()],
            },
            ComponentGroup {
                component_type: "SRE".to_string(),
                stems: vec!["a".to_string(), "c".to_string()],
            },
        ]
    );
}

#[test]
fn test_group_by_type_is_case_insensitive() {
    let groups = group_by_type(&["src/A.SRE", "src/b.sre"]);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].component_type, "SRE");
    assert_eq!(groups[0].stems, vec!["A", "b"]);
}

#[test]
fn test_group_by_type_empty_input() {
    assert!(group_by_type::<&str>(&[]).is_empty());
}

#[test]
fn test_group_by_type_strips_directories() {
    let groups = group_by_type(&["some/dir/prog.sre"]);
    assert_eq!(groups[0].stems, vec!["prog"]);
}

// =============================================================================
// int_or_zero tests
// =============================================================================

#[test_case(json!("1"), 1 ; "digit string parses")]
#[test_case(json!("a"), 0 ; "non numeric string is zero")]
#[test_case(json!("-1"), 0 ; "negative string is zero")]
#[test_case(json!(-1), -1 ; "negative integer passes through")]
#[test_case(json!(1.9), 0 ; "float is zero")]
#[test_case(Value::Null, 0 ; "null is zero")]
#[test_case(json!({}), 0 ; "object is zero")]
fn test_int_or_zero(value: Value, expected: i64) {
    assert_eq!(int_or_zero(&value), expected);
}

// =============================================================================
// Payload tests
// =============================================================================

#[test]
fn test_payload_repeats_list_keys() {
    let payload = Payload::new()
        .set("package", "APP 000001")
        .set_all("targetComponent", &["a", "c"]);
    assert_eq!(
        payload.fields(),
        &[
            ("package".to_string(), "APP 000001".to_string()),
            ("targetComponent".to_string(), "a".to_string()),
            ("targetComponent".to_string(), "c".to_string()),
        ]
    );
}

#[test]
fn test_payload_merge_stringifies_scalars() {
    let config = json!({
        "applName": "APP",
        "workChangeRequest": 42,
        "tags": ["x", "y"],
        "skipped": null,
    });
    let Value::Object(map) = config else {
        unreachable!()
    };
    let payload = Payload::new().merge(&map);
    assert_eq!(payload.get("applName"), Some("APP"));
    assert_eq!(payload.get("workChangeRequest"), Some("42"));
    assert_eq!(payload.get("skipped"), None);
    let tags: Vec<&str> = payload
        .fields()
        .iter()
        .filter(|(k, _)| k == "tags")
        .map(|(_, v)| v.as_str())
        .collect();
    assert_eq!(tags, vec!["x", "y"]);
}

#[test]
fn test_payload_jobcard_fields() {
    let payload = Payload::new().set_jobcard("U000000", "audit");
    assert_eq!(payload.get("jobCard01"), Some("//U000000A JOB 0,'CHANGEMAN',"));
    assert_eq!(payload.get("jobCard04"), Some("//*"));
}
