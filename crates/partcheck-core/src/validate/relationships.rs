use super::issue::{Diagnostic, Findings, Issue};
use crate::error::Result;
use crate::package::part_uri::{self, is_relationships_part};
use crate::package::relationships::read_relationships;
use crate::package::ArchiveIndex;
use crate::xml;
use std::io::{Read, Seek};

/// Relationships parts to resolve, in sorted order.
pub fn relationships_parts<R: Read + Seek>(index: &ArchiveIndex<R>) -> Vec<&str> {
    index
        .names()
        .iter()
        .map(String::as_str)
        .filter(|name| is_relationships_part(name))
        .collect()
}

/// Resolve every relationship declared in `rels_part` and check that each
/// internal target exists in the package.
///
/// A relationships part that does not parse yields no findings: the
/// well-formedness check already reports it.
pub fn check_relationships_part<R: Read + Seek>(
    index: &ArchiveIndex<R>,
    rels_part: &str,
    verbose: bool,
) -> Result<Findings> {
    let mut findings = Findings::default();

    let Some(source_dir) = part_uri::source_dir(rels_part) else {
        return Ok(findings);
    };

    let bytes = index.read(rels_part)?;
    let Ok(text) = xml::decode(&bytes) else {
        return Ok(findings);
    };
    let Ok(doc) = xml::parse(&text) else {
        return Ok(findings);
    };

    let relationships = read_relationships(&doc);
    tracing::debug!(
        rels_part,
        source_dir,
        count = relationships.len(),
        "resolving relationships"
    );

    for rel in relationships {
        if rel.is_external() {
            if verbose {
                findings.diagnostics.push(Diagnostic::ExternalSkipped {
                    rels_part: rels_part.to_string(),
                    id: rel.id,
                    target: rel.target,
                });
            }
            continue;
        }

        if rel.target.is_empty() {
            findings.issues.push(Issue::EmptyTarget {
                rels_part: rels_part.to_string(),
                id: rel.id,
            });
            continue;
        }

        let resolved = part_uri::resolve_target(source_dir, &rel.target);
        if !index.contains(&resolved) {
            tracing::debug!(rels_part, id = %rel.id, %resolved, "dangling relationship");
            findings.issues.push(Issue::BrokenRelationship {
                rels_part: rels_part.to_string(),
                id: rel.id,
                target: rel.target,
                resolved,
            });
        } else if verbose {
            findings.diagnostics.push(Diagnostic::RelationshipOk {
                rels_part: rels_part.to_string(),
                id: rel.id,
                resolved,
            });
        }
    }

    Ok(findings)
}
