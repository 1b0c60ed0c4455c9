/// Smoke tests to verify the binary runs without panicking
use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--"])
        .args(args)
        .output()
        .expect("Failed to execute cargo run")
}

#[test]
fn binary_shows_help() {
    let output = run(&["--help"]);

    assert!(
        output.status.success(),
        "Binary failed to run --help: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("rainpuddle"),
        "Help output should mention rainpuddle"
    );
}

#[test]
fn binary_shows_version() {
    let output = run(&["--version"]);

    assert!(
        output.status.success(),
        "Binary failed to run --version: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn table_lists_districts() {
    let output = run(&["table"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Sha Tin"));
    assert!(stdout.contains("Tuen Mun"));
    assert!(stdout.contains("18 districts"));
}

#[test]
fn replay_runs_to_final_frame() {
    let output = run(&["replay", "--district", "Sha Tin", "--rainfall", "5", "--seed", "1"]);
    assert!(
        output.status.success(),
        "replay failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].contains("size=17.5 drops=60"));
    assert!(lines.last().is_some_and(|l| l.ends_with("(final)")));
}

#[test]
fn replay_rejects_unknown_district() {
    let output = run(&["replay", "--district", "Atlantis"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("panicked at"));
}

#[test]
fn invalid_subcommand_fails_gracefully() {
    let output = run(&["nonexistent-command"]);

    // Should fail with error, not panic
    assert!(
        !output.status.success(),
        "Invalid subcommand should return error status"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    // Should show helpful error, not a panic backtrace
    assert!(
        !stderr.contains("panicked at"),
        "Invalid subcommand should not cause panic"
    );
}
