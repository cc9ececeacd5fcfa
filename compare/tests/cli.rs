use std::process::{Command, Stdio};

use embedcheck::{compare::Verdict, config::ComparePaths};

// The binary reads fixed locations next to the crate, so the outcome depends
// on whether both pipelines have written their dumps. Either way it must print
// exactly one verdict and exit 0, or print nothing and exit non-zero.
#[test]
fn test_binary_prints_verdict_or_fails_cleanly() {
    let output = Command::new(env!("CARGO_BIN_EXE_embedcheck"))
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run embedcheck");
    let stdout = String::from_utf8(output.stdout).expect("stdout is utf-8");
    let stderr = String::from_utf8_lossy(&output.stderr);

    let paths = ComparePaths::default();
    let both_present = paths.left.is_file() && paths.right.is_file();

    if output.status.success() {
        assert!(both_present);
        let expected = [Verdict::Equal.to_string(), Verdict::NotEqual.to_string()];
        let line = stdout.strip_suffix('\n').expect("verdict ends with a newline");
        assert!(expected.iter().any(|v| v == line), "unexpected stdout: {stdout:?}");
    } else {
        assert_eq!(output.status.code(), Some(1));
        assert!(stdout.is_empty(), "unexpected stdout: {stdout:?}");
        assert!(stderr.contains("Failed to"), "missing diagnostic: {stderr:?}");
    }
}

#[test]
fn test_binary_names_missing_document() {
    let paths = ComparePaths::default();
    if paths.left.is_file() {
        return;
    }

    let output = Command::new(env!("CARGO_BIN_EXE_embedcheck"))
        .output()
        .expect("failed to run embedcheck");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(
        stderr.contains("python-embeddings.json"),
        "diagnostic should name the path: {stderr:?}"
    );
}
