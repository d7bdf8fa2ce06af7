use std::{io::Write, process::Command};

fn level_file(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(text.as_bytes()).expect("write level");
    file
}

#[test]
fn describe_prints_board_without_opening_window() {
    let level = level_file("2 1 1 0 90\n-2 3\n");
    let output = Command::new(env!("CARGO_BIN_EXE_lightbot"))
        .arg(level.path())
        .arg("--describe")
        .output()
        .expect("failed to invoke lightbot binary");

    assert!(output.status.success(), "lightbot --describe should succeed");
    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    assert_eq!(
        stdout,
        "z = 2, active = true, lit up = false\n\
         z = 3, active = false, lit up = false\n\
         \n\
         start: (1, 0) facing 90 degrees\n\
         floor 2x1 at level 0: 6 vertices, 1 interior edges\n"
    );
}

#[test]
fn malformed_level_exits_with_failure() {
    let level = level_file("2 2 0 0 0\n0 0\n");
    let output = Command::new(env!("CARGO_BIN_EXE_lightbot"))
        .arg(level.path())
        .arg("--describe")
        .output()
        .expect("failed to invoke lightbot binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load level"), "stderr: {stderr}");
}

#[test]
fn missing_config_file_is_reported() {
    let level = level_file("1 1 0 0 0\n0\n");
    let output = Command::new(env!("CARGO_BIN_EXE_lightbot"))
        .arg(level.path())
        .args(["--describe", "--config", "/nonexistent/lightbot.toml"])
        .output()
        .expect("failed to invoke lightbot binary");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read config file"));
}
