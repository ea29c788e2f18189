//! In-memory package fixtures for integration tests.

#![allow(dead_code)]

use partcheck_core::ArchiveIndex;
use std::io::{Cursor, Write};
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

pub const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
</Types>"#;

pub const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"
          xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets>
</workbook>"#;

pub const SHEET: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <sheetData><row r="1"><c r="A1"><v>1</v></c></row></sheetData>
</worksheet>"#;

pub const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"/>"#;

pub const OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
pub const WORKSHEET: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet";
pub const STYLES_REL: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
pub const HYPERLINK: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";

/// One `<Relationship>` element.
pub fn rel(id: &str, rel_type: &str, target: &str) -> String {
    format!(r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#, id, rel_type, target)
}

pub fn external_rel(id: &str, rel_type: &str, target: &str) -> String {
    format!(
        r#"<Relationship Id="{}" Type="{}" Target="{}" TargetMode="External"/>"#,
        id, rel_type, target
    )
}

/// A relationships part holding `rels`.
pub fn rels_part(rels: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{}</Relationships>"#,
        rels.concat()
    )
}

#[derive(Clone, Default)]
pub struct PackageBuilder {
    entries: Vec<(String, Vec<u8>)>,
}

impl PackageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content types, root relationships, a workbook with one sheet and a
    /// styles part. Validates cleanly.
    pub fn minimal_workbook() -> Self {
        Self::new()
            .with("[Content_Types].xml", CONTENT_TYPES)
            .with(
                "_rels/.rels",
                rels_part(&[rel("rId1", OFFICE_DOCUMENT, "xl/workbook.xml")]),
            )
            .with("xl/workbook.xml", WORKBOOK)
            .with(
                "xl/_rels/workbook.xml.rels",
                rels_part(&[
                    rel("rId1", WORKSHEET, "worksheets/sheet1.xml"),
                    rel("rId2", STYLES_REL, "styles.xml"),
                ]),
            )
            .with("xl/worksheets/sheet1.xml", SHEET)
            .with("xl/styles.xml", STYLES)
    }

    /// Add or replace an entry.
    pub fn with(mut self, name: &str, content: impl AsRef<[u8]>) -> Self {
        self.entries.retain(|(existing, _)| existing != name);
        self.entries.push((name.to_string(), content.as_ref().to_vec()));
        self
    }

    pub fn without(mut self, name: &str) -> Self {
        self.entries.retain(|(existing, _)| existing != name);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        for (name, content) in &self.entries {
            writer.start_file(name.as_str(), options).unwrap();
            writer.write_all(content).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    pub fn index(&self) -> ArchiveIndex<Cursor<Vec<u8>>> {
        ArchiveIndex::from_reader(Cursor::new(self.build())).unwrap()
    }
}
