use serde::{Deserialize, Serialize};

/// The OOXML document family a package is expected to belong to. Only the
/// main document part lookup depends on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Word,
    #[default]
    Excel,
    PowerPoint,
}

impl DocumentType {
    /// Canonical location of the main document part.
    pub fn main_part(self) -> &'static str {
        match self {
            DocumentType::Word => "word/document.xml",
            DocumentType::Excel => "xl/workbook.xml",
            DocumentType::PowerPoint => "ppt/presentation.xml",
        }
    }

    /// File name of the main document part, used when the part has been
    /// relocated to another directory.
    pub fn main_file_name(self) -> &'static str {
        match self {
            DocumentType::Word => "document.xml",
            DocumentType::Excel => "workbook.xml",
            DocumentType::PowerPoint => "presentation.xml",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentType::Word => "DOCX",
            DocumentType::Excel => "XLSX",
            DocumentType::PowerPoint => "PPTX",
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            DocumentType::Word => "document",
            DocumentType::Excel => "workbook",
            DocumentType::PowerPoint => "presentation",
        }
    }
}
