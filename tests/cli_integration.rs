//! Integration tests that run the CLI binary.

fn bin() -> std::process::Command {
    let bin = env!("CARGO_BIN_EXE_biaslens");
    let mut cmd = std::process::Command::new(bin);
    cmd.env_remove("BIASLENS_API_URL");
    cmd.env_remove("BIASLENS_MODE");
    cmd
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let output = bin()
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty());
    assert!(
        stdout.contains("biaslens") || stdout.contains("bias"),
        "expected usage text in output"
    );
}

#[test]
fn cli_version_succeeds() {
    let output = bin()
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("biaslens"));
}

#[test]
fn cli_config_reports_api_url_override() {
    // Run from a temp dir so dotenv() won't load .env from the project root
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .arg("config")
        .env("BIASLENS_API_URL", "http://example.invalid:1234/")
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Trailing slash is stripped on load
    assert!(stdout.contains("http://example.invalid:1234"));
    assert!(!stdout.contains("1234/"));
    assert!(stdout.contains("quick"));
}

#[test]
fn cli_one_shot_fails_when_service_unreachable() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .arg("-t")
        .arg("hello")
        .env("BIASLENS_API_URL", "http://127.0.0.1:9")
        .env("BIASLENS_TIMEOUT_SECS", "2")
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        !output.status.success(),
        "expected failure when the service is unreachable"
    );
}

#[test]
fn cli_rejects_unknown_mode() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .arg("-t")
        .arg("hello")
        .arg("--mode")
        .arg("extreme")
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown mode"));
}
