pub mod error;
pub mod types;
pub mod xml;
pub mod package;
pub mod validate;
pub mod report;

pub use error::{PartcheckError, Result};
pub use types::DocumentType;

pub use package::{ArchiveIndex, Relationship, TargetMode};
pub use report::Outcome;
pub use validate::{validate_path, Issue, IssueKind, ValidationReport, Validator, ValidatorSettings};
