use super::issue::{Diagnostic, Findings, Issue};
use crate::error::Result;
use crate::package::content_types::is_xml_part;
use crate::package::ArchiveIndex;
use crate::xml;
use std::io::{Read, Seek};

/// Entries that must parse as XML, in sorted order.
pub fn xml_candidates<R: Read + Seek>(index: &ArchiveIndex<R>) -> Vec<&str> {
    index
        .names()
        .iter()
        .map(String::as_str)
        .filter(|name| is_xml_part(name))
        .collect()
}

/// Parse one entry. A parse failure becomes an `InvalidXml` issue; only a
/// failure to read the entry out of the archive is an error.
pub fn check_part<R: Read + Seek>(
    index: &ArchiveIndex<R>,
    part: &str,
    verbose: bool,
) -> Result<Findings> {
    let bytes = index.read(part)?;
    let mut findings = Findings::default();

    match xml::check_well_formed(&bytes) {
        Ok(()) => {
            tracing::debug!(part, "well-formed");
            if verbose {
                findings.diagnostics.push(Diagnostic::XmlOk {
                    part: part.to_string(),
                });
            }
        }
        Err(e) => {
            tracing::debug!(part, error = %e, "malformed XML");
            findings.issues.push(Issue::InvalidXml {
                part: part.to_string(),
                message: e.to_string(),
            });
        }
    }

    Ok(findings)
}
