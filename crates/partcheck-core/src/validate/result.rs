use super::issue::{Diagnostic, Issue};
use crate::types::DocumentType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Passed,
    Failed,
}

/// Everything one validation run found, in reporting order: required-part
/// issues, then XML issues by part name, then relationship issues by
/// relationships part and document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub document_type: DocumentType,
    pub main_part: Option<String>,
    pub status: Status,
    pub issues: Vec<Issue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn new(
        document_type: DocumentType,
        main_part: Option<String>,
        issues: Vec<Issue>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        let status = if issues.is_empty() {
            Status::Passed
        } else {
            Status::Failed
        };
        Self {
            document_type,
            main_part,
            status,
            issues,
            diagnostics,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status == Status::Passed
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
