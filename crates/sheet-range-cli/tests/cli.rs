//! End-to-end tests for the `a1` binary

use std::io::Write;
use std::process::{Command, Output};

fn a1(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_a1"))
        .args(args)
        .output()
        .expect("failed to run a1")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "a1 failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_parse_prints_fields() {
    let out = stdout(&a1(&["parse", "Sheet1!B2:D10"]));
    assert!(out.contains("Sheet: Sheet1"));
    assert!(out.contains("Start: B2 (row 2, column 2)"));
    assert!(out.contains("End:   D10 (row 10, column 4)"));
}

#[test]
fn test_parse_json() {
    let out = stdout(&a1(&["parse", "B2:D", "--json"]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["start_col"], 2);
    assert_eq!(value["end_col"], 4);
    assert!(value["end_row"].is_null());
}

#[test]
fn test_parse_rejects_bad_notation() {
    let output = a1(&["parse", "Sheet1!ZZZ"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse range 'Sheet1!ZZZ'"));
}

#[test]
fn test_jump() {
    assert_eq!(stdout(&a1(&["jump", "B2:D10"])).trim(), "B3:D11");
    assert_eq!(stdout(&a1(&["jump", "B2:D10", "--truncate"])).trim(), "B3:D10");
    assert_eq!(stdout(&a1(&["jump", "B2:D10", "-n", "3"])).trim(), "B5:D13");
}

#[test]
fn test_rows_with_negative_offsets() {
    assert_eq!(stdout(&a1(&["rows", "Data!B5:D9", "-2", "1"])).trim(), "Data!B3:D6");
    assert_eq!(stdout(&a1(&["rows", "Data!B5:D9", "2"])).trim(), "Data!B7:D7");
}

#[test]
fn test_fit_csv() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "a,b").unwrap();
    writeln!(file, "c,d").unwrap();
    writeln!(file, "e,f").unwrap();
    file.flush().unwrap();

    let path = file.path().to_str().unwrap();
    assert_eq!(stdout(&a1(&["fit", "B2", path])).trim(), "B2:C4");
}

#[test]
fn test_grid_json() {
    let out = stdout(&a1(&["grid", "Sheet1!B2:D10", "--json"]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["startRowIndex"], 1);
    assert_eq!(value["startColumnIndex"], 1);
    assert_eq!(value["endRowIndex"], 10);
    assert_eq!(value["endColumnIndex"], 4);
}

#[test]
fn test_column_conversion() {
    assert_eq!(stdout(&a1(&["column", "53"])).trim(), "BA");
    assert_eq!(stdout(&a1(&["column", "AZ"])).trim(), "52");
    assert!(!a1(&["column", "0"]).status.success());
    assert!(!a1(&["column", "a1"]).status.success());
}
