//! End-to-end tests for the `partcheck` binary: stdout contract and exit
//! status.

use pretty_assertions::assert_eq;
use std::ffi::OsStr;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use zip::write::{SimpleFileOptions, ZipWriter};

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/></Types>"#;
const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;
const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;
const WORKBOOK: &str = r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheets/></workbook>"#;
const SHEET: &str = r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData/></worksheet>"#;

fn write_package(dir: &Path, file_name: &str, entries: &[(&str, &str)]) -> PathBuf {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer.start_file(*name, SimpleFileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    let bytes = writer.finish().unwrap().into_inner();

    let path = dir.join(file_name);
    std::fs::write(&path, bytes).unwrap();
    path
}

fn workbook_entries(with_sheet: bool) -> Vec<(&'static str, &'static str)> {
    let mut entries = vec![
        ("[Content_Types].xml", CONTENT_TYPES),
        ("_rels/.rels", ROOT_RELS),
        ("xl/workbook.xml", WORKBOOK),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
    ];
    if with_sheet {
        entries.push(("xl/worksheets/sheet1.xml", SHEET));
    }
    entries
}

fn partcheck(args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_partcheck"))
        .args(args)
        .env_remove("PARTCHECK_LOG")
        .output()
        .expect("failed to run partcheck")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn valid_package_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_package(dir.path(), "ok.xlsx", &workbook_entries(true));

    let output = partcheck(&[path.as_os_str()]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "XLSX validation passed (zip/xml/rels checks).\n");
}

#[test]
fn missing_sheet_exits_one_with_issue_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_package(dir.path(), "broken.xlsx", &workbook_entries(false));

    let output = partcheck(&[path.as_os_str()]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_of(&output),
        "XLSX validation found issues:\n\
         - Broken rel target in xl/_rels/workbook.xml.rels (Id=rId1): worksheets/sheet1.xml -> xl/worksheets/sheet1.xml\n"
    );
}

#[test]
fn missing_file_exits_two_with_error_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.xlsx");

    let output = partcheck(&[path.as_os_str()]);

    assert_eq!(output.status.code(), Some(2));
    let stdout = stdout_of(&output);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("ERROR: file not found: "), "stdout: {}", stdout);
}

#[test]
fn directory_and_non_zip_inputs_exit_two() {
    let dir = tempfile::tempdir().unwrap();
    let output = partcheck(&[dir.path().as_os_str()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_of(&output).starts_with("ERROR: not a file: "));

    let text = dir.path().join("notes.xlsx");
    std::fs::write(&text, "plain text").unwrap();
    let output = partcheck(&[text.as_os_str()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_of(&output).starts_with("ERROR: invalid zip container: "));
}

#[test]
fn verbose_lists_checked_parts_before_summary() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_package(dir.path(), "ok.xlsx", &workbook_entries(true));

    let output = partcheck(&[path.as_os_str(), OsStr::new("--verbose")]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.first(), Some(&"OK XML: [Content_Types].xml"));
    assert!(lines.contains(&"OK REL: xl/_rels/workbook.xml.rels#rId1 -> xl/worksheets/sheet1.xml"));
    assert_eq!(lines.last(), Some(&"XLSX validation passed (zip/xml/rels checks)."));
}

#[test]
fn json_output_carries_issues() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_package(dir.path(), "broken.xlsx", &workbook_entries(false));

    let output = partcheck(&[path.as_os_str(), OsStr::new("--json")]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains(r#""status": "failed""#), "stdout: {}", stdout);
    assert!(stdout.contains(r#""resolved": "xl/worksheets/sheet1.xml""#));
}

#[test]
fn document_type_flag_selects_main_part() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_package(dir.path(), "ok.xlsx", &workbook_entries(true));

    let output = partcheck(&[path.as_os_str(), OsStr::new("--type"), OsStr::new("docx")]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_of(&output),
        "DOCX validation found issues:\n- Missing document part (expected word/document.xml)\n"
    );
}

#[test]
fn repeated_runs_print_identical_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_package(dir.path(), "broken.xlsx", &workbook_entries(false));

    let first = partcheck(&[path.as_os_str()]);
    let second = partcheck(&[path.as_os_str()]);
    assert_eq!(first.stdout, second.stdout);
}
