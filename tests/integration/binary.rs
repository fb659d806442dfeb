use assert_cmd::Command;
use tempfile::tempdir;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_line_report"))
}

#[test]
fn prints_report_for_sample_txt_in_working_dir() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("sample.txt"), "ab\nabcd\na\n").unwrap();

    binary()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("Project: go-app\nLines: 3\nFiltered:\n- abcd\n")
        .stderr("");
}

#[test]
fn missing_sample_txt_prints_fallback_and_succeeds() {
    let dir = tempdir().unwrap();

    binary()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("Project: go-app\nLines: 4\nFiltered:\n- alpha\n- beta\n- gamma\n- delta\n")
        .stderr("");
}

#[test]
fn arguments_are_ignored() {
    let dir = tempdir().unwrap();

    binary()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .args(["--help", "other.txt"])
        .assert()
        .success()
        .stdout(predicates::str::starts_with("Project: go-app\nLines: 4\n"));
}

#[test]
fn debug_logging_goes_to_stderr_only() {
    let dir = tempdir().unwrap();

    binary()
        .current_dir(dir.path())
        .env("RUST_LOG", "debug")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout("Project: go-app\nLines: 4\nFiltered:\n- alpha\n- beta\n- gamma\n- delta\n")
        .stderr(predicates::str::contains("using fallback lines"));
}
