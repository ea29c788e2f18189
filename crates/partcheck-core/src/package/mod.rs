pub mod archive;
pub mod content_types;
pub mod part_uri;
pub mod relationships;

pub use archive::ArchiveIndex;
pub use relationships::{Relationship, TargetMode};
