use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const LOG: &str = "\
2024-05-02 10:00:00.000000 [PID:1] [0] [ID:0] EXECUTING Suite.A
2024-05-02 10:00:01.000000 [PID:2] [1] [ID:1] EXECUTING Suite.B
2024-05-02 10:00:02.000000 [PID:2] [1] [ID:1] PASSED Suite.B in 1.0 seconds
2024-05-02 10:00:05.000000 [PID:1] [0] [ID:0] PASSED Suite.A in 5.0 seconds
2024-05-02 10:00:05.500000 [PID:3] [2] [ID:2] EXECUTING Suite.Hung
";

fn write_log(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp log");
    file.write_all(contents.as_bytes()).expect("write temp log");
    file
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_pabotscope"))
        .args(args)
        .output()
        .expect("run pabotscope")
}

#[test]
fn cli_prints_histogram_then_table() {
    let log = write_log(LOG);
    let output = run(&[log.path().to_str().unwrap(), "--block", "#"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let blank = stdout.lines().position(|l| l.is_empty()).unwrap();
    assert!(blank > 0);
    assert_eq!(stdout.lines().nth(blank + 1), Some("Top Longest Running Tests:"));

    let a = stdout.find("Suite.A").unwrap();
    let b = stdout.find("Suite.B").unwrap();
    assert!(a < b);
    assert!(!stdout.contains("Suite.Hung"));
}

#[test]
fn cli_top_flag_limits_rows() {
    let log = write_log(LOG);
    let output = run(&[log.path().to_str().unwrap(), "-n", "1"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Suite.A"));
    assert!(!stdout.contains("Suite.B"));
}

#[test]
fn cli_summary_flag() {
    let log = write_log(LOG);
    let output = run(&[log.path().to_str().unwrap(), "--summary"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("2 completed, 1 unfinished"));
    assert!(stdout.contains("Peak workers: 2"));
}

#[test]
fn cli_empty_log_succeeds() {
    let log = write_log("just noise\n");
    let output = run(&[log.path().to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("\nTop Longest Running Tests:"));
}

#[test]
fn cli_missing_file_fails() {
    let output = run(&["/no/such/dir/pabot.log"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("not found"));
}

#[test]
fn cli_rejects_bad_bucket() {
    let log = write_log(LOG);
    let output = run(&[log.path().to_str().unwrap(), "--bucket", "0"]);

    assert!(!output.status.success());
}

#[test]
fn cli_rejects_huge_width() {
    let log = write_log(LOG);
    let output = run(&[
        log.path().to_str().unwrap(),
        "--width",
        "1000000000",
        "--bucket",
        "0.000001",
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("too large"));
}

#[test]
fn cli_requires_log_path() {
    let output = run(&[]);
    assert!(!output.status.success());
}
