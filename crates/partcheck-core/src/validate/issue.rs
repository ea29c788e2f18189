use crate::types::DocumentType;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueKind {
    MissingPart,
    InvalidXml,
    BrokenRelationship,
    EmptyTarget,
}

/// Why a missing part was expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum PartRole {
    /// Mandatory in every package.
    Required,
    /// Main document part of the given document type.
    MainDocument { document_type: DocumentType },
}

/// A structural defect found in an opened package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    MissingPart {
        part: String,
        #[serde(flatten)]
        role: PartRole,
    },
    InvalidXml {
        part: String,
        message: String,
    },
    BrokenRelationship {
        rels_part: String,
        id: String,
        target: String,
        resolved: String,
    },
    EmptyTarget {
        rels_part: String,
        id: String,
    },
}

impl Issue {
    pub fn kind(&self) -> IssueKind {
        match self {
            Issue::MissingPart { .. } => IssueKind::MissingPart,
            Issue::InvalidXml { .. } => IssueKind::InvalidXml,
            Issue::BrokenRelationship { .. } => IssueKind::BrokenRelationship,
            Issue::EmptyTarget { .. } => IssueKind::EmptyTarget,
        }
    }

    /// The part the issue is reported against.
    pub fn part(&self) -> &str {
        match self {
            Issue::MissingPart { part, .. } | Issue::InvalidXml { part, .. } => part,
            Issue::BrokenRelationship { rels_part, .. } | Issue::EmptyTarget { rels_part, .. } => {
                rels_part
            }
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::MissingPart {
                part,
                role: PartRole::Required,
            } => write!(f, "Missing required part: {}", part),
            Issue::MissingPart {
                part,
                role: PartRole::MainDocument { document_type },
            } => write!(f, "Missing {} part (expected {})", document_type.noun(), part),
            Issue::InvalidXml { part, message } => write!(f, "Invalid XML in {}: {}", part, message),
            Issue::BrokenRelationship {
                rels_part,
                id,
                target,
                resolved,
            } => write!(
                f,
                "Broken rel target in {} (Id={}): {} -> {}",
                rels_part, id, target, resolved
            ),
            Issue::EmptyTarget { rels_part, id } => {
                write!(f, "Empty target in {} (Id={})", rels_part, id)
            }
        }
    }
}

/// A successful check, reported only in verbose mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    XmlOk {
        part: String,
    },
    RelationshipOk {
        rels_part: String,
        id: String,
        resolved: String,
    },
    ExternalSkipped {
        rels_part: String,
        id: String,
        target: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::XmlOk { part } => write!(f, "OK XML: {}", part),
            Diagnostic::RelationshipOk {
                rels_part,
                id,
                resolved,
            } => write!(f, "OK REL: {}#{} -> {}", rels_part, id, resolved),
            Diagnostic::ExternalSkipped {
                rels_part,
                id,
                target,
            } => write!(f, "SKIP External rel {}#{} -> {}", rels_part, id, target),
        }
    }
}

/// Issues and diagnostics produced by one unit of work. Workers each return
/// their own value; merging happens in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub issues: Vec<Issue>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Findings {
    pub fn merge(parts: impl IntoIterator<Item = Findings>) -> Self {
        parts.into_iter().fold(Findings::default(), |mut acc, part| {
            acc.issues.extend(part.issues);
            acc.diagnostics.extend(part.diagnostics);
            acc
        })
    }
}
