//! Turning a validation run into process output.

use crate::error::PartcheckError;
use crate::validate::ValidationReport;
use serde::Serialize;
use std::fmt::Write as _;

/// Process outcome of a run. The discriminant is the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Outcome {
    Passed = 0,
    IssuesFound = 1,
    ContainerError = 2,
}

impl Outcome {
    pub fn of(result: &Result<ValidationReport, PartcheckError>) -> Self {
        match result {
            Ok(report) if report.is_valid() => Outcome::Passed,
            Ok(_) => Outcome::IssuesFound,
            Err(_) => Outcome::ContainerError,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Plain-text rendering: diagnostics (if any were collected), then either
/// the pass line or a header with one `- <issue>` line per issue.
pub fn render_text(report: &ValidationReport) -> String {
    let mut out = String::new();
    let label = report.document_type.label();

    for diagnostic in &report.diagnostics {
        let _ = writeln!(out, "{}", diagnostic);
    }

    if report.is_valid() {
        let _ = writeln!(out, "{} validation passed (zip/xml/rels checks).", label);
    } else {
        let _ = writeln!(out, "{} validation found issues:", label);
        for issue in &report.issues {
            let _ = writeln!(out, "- {}", issue);
        }
    }

    out
}

/// Single-line rendering of a container-level failure.
pub fn render_error_text(error: &PartcheckError) -> String {
    format!("ERROR: {}\n", error)
}

pub fn render_json(report: &ValidationReport) -> String {
    let mut out = report.to_json();
    out.push('\n');
    out
}

#[derive(Serialize)]
struct ErrorDocument {
    error: String,
}

pub fn render_error_json(error: &PartcheckError) -> String {
    let doc = ErrorDocument {
        error: error.to_string(),
    };
    let mut out = serde_json::to_string_pretty(&doc).unwrap_or_default();
    out.push('\n');
    out
}

/// Render whichever side of `result` applies.
pub fn render(result: &Result<ValidationReport, PartcheckError>, json: bool) -> String {
    match (result, json) {
        (Ok(report), false) => render_text(report),
        (Ok(report), true) => render_json(report),
        (Err(e), false) => render_error_text(e),
        (Err(e), true) => render_error_json(e),
    }
}
