mod common;
use common::{run_in, run_ok, run_should_fail_with, stderr_of, stdout_of};

// ── generate ──────────────────────────────────────────────────────────────────

#[test]
fn generate_plain() {
    assert_eq!(run_ok(&["generate", "8"]), "[0, 1, 1, 2, 3, 5, 8, 13]\n");
}

#[test]
fn generate_zero() {
    assert_eq!(run_ok(&["generate", "0"]), "[]\n");
}

#[test]
fn generate_lines() {
    assert_eq!(run_ok(&["generate", "4", "--format", "lines"]), "0\n1\n1\n2\n");
}

#[test]
fn generate_json() {
    let out = run_ok(&["generate", "3", "--format", "json"]);
    assert_eq!(out, "{\"length\":3,\"values\":[\"0\",\"1\",\"1\"]}\n");
}

#[test]
fn generate_recursive_matches_iterative() {
    let iterative = run_ok(&["generate", "120"]);
    let recursive = run_ok(&["generate", "120", "--recursive"]);
    assert_eq!(iterative, recursive);
}

#[test]
fn generate_negative() {
    run_should_fail_with(&["generate", "-1"], "sequence length is less than 0");
}

#[test]
fn generate_fraction() {
    run_should_fail_with(&["generate", "2.5"], "sequence length is not an integer");
}

#[test]
fn generate_word() {
    run_should_fail_with(&["generate", "four"], "sequence length is not an integer");
}

#[test]
fn generate_unknown_format() {
    run_should_fail_with(&["generate", "4", "--format", "yaml"], "unknown output format 'yaml'");
}

#[test]
fn generate_over_default_limit() {
    run_should_fail_with(&["generate", "100001"], "exceeds the configured maximum of 100000");
}

// ── verify ────────────────────────────────────────────────────────────────────

#[test]
fn verify_five_hundred() {
    assert_eq!(run_ok(&["verify", "500"]), "ok: 500 terms satisfy the recurrence\n");
}

#[test]
fn verify_rejects_negative() {
    run_should_fail_with(&["verify", "-3"], "sequence length is less than 0");
}

// ── demo ──────────────────────────────────────────────────────────────────────

#[test]
fn demo_reports_every_check() {
    let out = run_ok(&["demo"]);
    assert!(out.starts_with("[0, 1, 1, 2"));
    assert!(out.contains("verified 500 terms\n"));
    assert!(out.contains("prefix shared: true\n"));
    assert!(out.contains("distinct storage: true\n"));
    assert!(out.contains("mutation isolated: true\n"));
}

// ── recursive strategy ────────────────────────────────────────────────────────

#[test]
fn verify_recursive() {
    assert_eq!(run_ok(&["verify", "500", "--recursive"]), "ok: 500 terms satisfy the recurrence\n");
}

#[test]
fn verify_recursive_rejects_fraction() {
    run_should_fail_with(&["verify", "2.5", "--recursive"], "sequence length is not an integer");
}

#[test]
fn recursive_at_configured_maximum() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    std::fs::write(dir.path().join("fibseq.toml"), "[generate]\nmax_length = 50000\n").unwrap();

    let output = run_in(dir.path(), &["verify", "50000", "--recursive"]);
    assert!(output.status.success(), "status {:?}: {}", output.status, stderr_of(&output));
    assert_eq!(stdout_of(&output), "ok: 50000 terms satisfy the recurrence\n");

    let over = run_in(dir.path(), &["verify", "50001", "--recursive"]);
    assert_eq!(over.status.code(), Some(1));
    assert!(stderr_of(&over).contains("exceeds the configured maximum of 50000"));
}

#[test]
fn generate_recursive_lines_match_iterative() {
    let iterative = run_ok(&["generate", "3000", "--format", "lines"]);
    let recursive = run_ok(&["generate", "3000", "--format", "lines", "--recursive"]);
    assert_eq!(iterative.lines().count(), 3000);
    assert_eq!(iterative, recursive);
}
