//! Fixture replay integration tests
//!
//! Replays each usage-variation fixture through the CLI runtime and compares
//! the full output with the expected transcript.

use builtins::CoercionEngine;
use integration_tests::capturing_runtime;

/// Kind label of each array_merge input, `None` for the accepted container.
const MERGE_LABELS: [Option<&str>; 25] = [
    Some("int"),
    Some("int"),
    Some("int"),
    Some("int"),
    Some("float"),
    Some("float"),
    Some("float"),
    Some("float"),
    Some("float"),
    Some("null"),
    Some("null"),
    Some("bool"),
    Some("bool"),
    Some("bool"),
    Some("bool"),
    Some("string"),
    Some("string"),
    None,
    Some("string"),
    Some("string"),
    Some("string"),
    Some("object"),
    Some("unset"),
    Some("unset"),
    Some("resource"),
];

fn transcript(header: &str, label: &str, iterations: Vec<Vec<String>>) -> Vec<String> {
    let mut lines = vec![header.to_string()];
    for (index, body) in iterations.into_iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("-- {} {} --", label, index + 1));
        lines.extend(body);
    }
    lines.push("Done".to_string());
    lines
}

/// Test: full array_merge transcript
#[test]
fn test_replay_array_merge() {
    let (mut runtime, output) = capturing_runtime(CoercionEngine::default());
    runtime.run_fixture("array_merge").unwrap();

    let expected = transcript(
        "*** Testing array_merge() : usage variations ***",
        "Iteration",
        MERGE_LABELS
            .iter()
            .map(|label| match label {
                Some(label) => vec![
                    format!("Warning: array_merge(): Argument #1 must be of type array, {} given", label),
                    "NULL".to_string(),
                ],
                None => ["array(2) {", "  [0]=>", "  int(1)", "  [1]=>", "  int(2)", "}"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            })
            .collect(),
    );
    assert_eq!(*output.borrow(), expected);
}

/// Test: full array_intersect transcript
#[test]
fn test_replay_array_intersect() {
    let (mut runtime, output) = capturing_runtime(CoercionEngine::default());
    runtime.run_fixture("array_intersect").unwrap();

    let expected = transcript(
        "*** Testing array_intersect() : Passing non-array values to $arr1 argument ***",
        "Iterator",
        MERGE_LABELS
            .iter()
            .flatten()
            .map(|label| {
                let warning = format!(
                    "Warning: array_intersect(): Argument #1 must be of type array, {} given",
                    label
                );
                vec![warning.clone(), "NULL".to_string(), warning, "NULL".to_string()]
            })
            .collect(),
    );
    assert_eq!(*output.borrow(), expected);
}

/// Test: full mb_ereg_replace transcript
#[test]
fn test_replay_mb_ereg_replace() {
    let (mut runtime, output) = capturing_runtime(CoercionEngine::default());
    runtime.run_fixture("mb_ereg_replace").unwrap();

    // true where the input stringifies to the empty pattern
    let empty = [
        false, false, false, false, false, false, false, false, false, true, true, false, true, false, true, true,
        true, false, false, false, false, true, true,
    ];
    let expected = transcript(
        "*** Testing mb_ereg_replace() : usage variations ***",
        "Iteration",
        empty
            .iter()
            .map(|&empty| {
                if empty {
                    vec![
                        "Warning: mb_ereg_replace(): Empty pattern".to_string(),
                        "bool(false)".to_string(),
                    ]
                } else {
                    vec!["string(10) \"string_val\"".to_string()]
                }
            })
            .collect(),
    );
    assert_eq!(*output.borrow(), expected);
}

/// Test: null deprecation does not fire for the container fixtures
#[test]
fn test_replay_with_null_deprecation() {
    let (mut runtime, output) = capturing_runtime(CoercionEngine::default().with_null_deprecation(true));
    runtime.run_fixture("array_merge").unwrap();
    assert!(output.borrow().iter().all(|line| !line.starts_with("Deprecated:")));

    let (mut runtime, output) = capturing_runtime(CoercionEngine::default().with_null_deprecation(true));
    runtime.run_fixture("mb_ereg_replace").unwrap();
    let deprecations = output
        .borrow()
        .iter()
        .filter(|line| line.starts_with("Deprecated: mb_ereg_replace(): Passing null to parameter #1"))
        .count();
    // null twice, undefined and unset
    assert_eq!(deprecations, 4);
}
