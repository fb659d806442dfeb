use std::fs;

use line_report::render;
use line_report_domain::AppConfigBuilder;
use line_report_infra::FsTextSource;
use line_report_usecase::ReadLines;
use tempfile::tempdir;

#[test]
fn renders_filtered_report_for_sample_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.txt");
    fs::write(&path, "ab\nabcd\na\n").unwrap();

    let config = AppConfigBuilder::default().input_path(path).build().unwrap();

    assert_eq!(render(&config), "Project: go-app\nLines: 3\nFiltered:\n- abcd");
}

#[test]
fn missing_file_reads_as_fallback() {
    let dir = tempdir().unwrap();
    let lines = ReadLines::new(&FsTextSource).run(&dir.path().join("does-not-exist.txt"));

    assert_eq!(lines, ["alpha", "beta", "gamma", "delta"]);
}

#[test]
fn blank_file_reads_as_empty_not_fallback() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blank.txt");
    fs::write(&path, "\n\n").unwrap();

    assert!(ReadLines::new(&FsTextSource).run(&path).is_empty());

    let config = AppConfigBuilder::default().input_path(path).build().unwrap();
    assert_eq!(render(&config), "Project: go-app\nLines: 0\nFiltered:");
}

#[test]
fn crlf_input_keeps_carriage_returns() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("crlf.txt");
    fs::write(&path, "ab\r\nxy\r\n").unwrap();

    // "ab\r" is three characters long and therefore passes the default threshold.
    let config = AppConfigBuilder::default().input_path(path).build().unwrap();
    assert_eq!(
        render(&config),
        "Project: go-app\nLines: 2\nFiltered:\n- ab\r\n- xy\r"
    );
}

#[test]
fn missing_file_renders_fallback_report() {
    let dir = tempdir().unwrap();
    let config = AppConfigBuilder::default()
        .project_name("demo")
        .input_path(dir.path().join("absent.txt"))
        .min_line_length(5usize)
        .build()
        .unwrap();

    assert_eq!(
        render(&config),
        "Project: demo\nLines: 4\nFiltered:\n- alpha\n- gamma\n- delta"
    );
}
