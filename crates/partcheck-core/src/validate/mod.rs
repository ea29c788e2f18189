//! Structural validation of an opened package.
//!
//! Three independent checks run against the same read-only
//! [`ArchiveIndex`]:
//!
//! 1. **Required parts**: `[Content_Types].xml`, `_rels/.rels` and the main
//!    document part for the configured [`crate::types::DocumentType`].
//! 2. **Well-formedness**: every `.xml` and `.rels` entry parses.
//! 3. **Relationships**: every internal target named in a
//!    `<dir>/_rels/<name>.rels` part resolves to an entry of the package.
//!
//! Per-part work fans out on the rayon pool. Each task returns its own
//! [`Findings`]; results are collected in input order, so the report is the
//! same whatever order the tasks finish in.

mod issue;
mod relationships;
mod required;
mod result;
mod settings;
mod wellformed;

pub use issue::{Diagnostic, Findings, Issue, IssueKind, PartRole};
pub use relationships::{check_relationships_part, relationships_parts};
pub use required::{check_required_parts, find_main_part};
pub use result::{Status, ValidationReport};
pub use settings::ValidatorSettings;
pub use wellformed::{check_part, xml_candidates};

use crate::error::Result;
use crate::package::ArchiveIndex;
use rayon::prelude::*;
use std::io::{Read, Seek};
use std::path::Path;

pub struct Validator {
    settings: ValidatorSettings,
}

impl Validator {
    pub fn new(settings: ValidatorSettings) -> Self {
        Self { settings }
    }

    /// Run every check against `index`.
    ///
    /// # Errors
    /// Only container-level failures (an entry that cannot be read back out
    /// of the archive) are errors. Structural defects are returned as issues
    /// in the report.
    pub fn validate<R>(&self, index: &ArchiveIndex<R>) -> Result<ValidationReport>
    where
        R: Read + Seek + Send,
    {
        let document_type = self.settings.document_type;
        let verbose = self.settings.verbose;
        let parallel = self.settings.parallel;

        let required = || check_required_parts(index, document_type);
        let wellformed = || {
            fan_out(&xml_candidates(index), parallel, |part| {
                check_part(index, part, verbose)
            })
        };
        let relationships = || {
            fan_out(&relationships_parts(index), parallel, |rels_part| {
                check_relationships_part(index, rels_part, verbose)
            })
        };

        let ((required_issues, main_part), (xml_findings, rel_findings)) = if parallel {
            rayon::join(required, || rayon::join(wellformed, relationships))
        } else {
            (required(), (wellformed(), relationships()))
        };
        let xml_findings = xml_findings?;
        let rel_findings = rel_findings?;

        let mut issues = required_issues;
        issues.extend(xml_findings.issues);
        issues.extend(rel_findings.issues);

        let mut diagnostics = xml_findings.diagnostics;
        diagnostics.extend(rel_findings.diagnostics);

        tracing::info!(
            entries = index.len(),
            issues = issues.len(),
            "validation finished"
        );

        Ok(ValidationReport::new(document_type, main_part, issues, diagnostics))
    }
}

/// Open the package at `path` and validate it. The archive handle is
/// released before this returns, on success and on failure.
pub fn validate_path<P: AsRef<Path>>(path: P, settings: &ValidatorSettings) -> Result<ValidationReport> {
    let index = match ArchiveIndex::open(path.as_ref()) {
        Ok(index) => index,
        Err(e) => {
            tracing::warn!(path = %path.as_ref().display(), error = %e, "cannot open package");
            return Err(e);
        }
    };
    Validator::new(settings.clone()).validate(&index)
}

fn fan_out<F>(items: &[&str], parallel: bool, check: F) -> Result<Findings>
where
    F: Fn(&str) -> Result<Findings> + Sync + Send,
{
    let per_item: Vec<Findings> = if parallel {
        items.par_iter().map(|item| check(item)).collect::<Result<_>>()?
    } else {
        items.iter().map(|item| check(item)).collect::<Result<_>>()?
    };
    Ok(Findings::merge(per_item))
}
