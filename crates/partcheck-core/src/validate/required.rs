use super::issue::{Issue, PartRole};
use crate::package::content_types::REQUIRED_PARTS;
use crate::package::ArchiveIndex;
use crate::types::DocumentType;
use std::io::{Read, Seek};

/// Locate the main document part.
///
/// The canonical path wins when present. Otherwise any entry named
/// `<dir>/<main file name>` qualifies, and the shortest such path (then the
/// byte-wise smallest) is chosen so the answer does not depend on archive
/// order.
pub fn find_main_part(names: &[String], document_type: DocumentType) -> Option<&str> {
    let canonical = document_type.main_part();
    if let Some(name) = names.iter().find(|name| *name == canonical) {
        return Some(name.as_str());
    }

    let suffix = format!("/{}", document_type.main_file_name());
    names
        .iter()
        .filter(|name| name.ends_with(&suffix))
        .min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
        .map(String::as_str)
}

/// Check the fixed set of mandatory parts and the main document part.
/// Returns the issues and the main part that was found, if any.
pub fn check_required_parts<R: Read + Seek>(
    index: &ArchiveIndex<R>,
    document_type: DocumentType,
) -> (Vec<Issue>, Option<String>) {
    let mut issues: Vec<Issue> = REQUIRED_PARTS
        .iter()
        .filter(|part| !index.contains(part))
        .map(|part| Issue::MissingPart {
            part: part.to_string(),
            role: PartRole::Required,
        })
        .collect();

    let main_part = find_main_part(index.names(), document_type).map(str::to_string);
    match &main_part {
        Some(part) => tracing::debug!(main_part = %part, "found main document part"),
        None => issues.push(Issue::MissingPart {
            part: document_type.main_part().to_string(),
            role: PartRole::MainDocument { document_type },
        }),
    }

    (issues, main_part)
}
