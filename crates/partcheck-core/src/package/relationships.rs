use roxmltree::Document;
use serde::{Deserialize, Serialize};

/// Namespace of the root `<Relationships>` element and its children.
pub const PACKAGE_RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Default)]
pub enum TargetMode {
    #[default]
    Internal,
    External,
}

impl TargetMode {
    /// Only the exact value `External` marks an out-of-package target.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("External") => TargetMode::External,
            _ => TargetMode::Internal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub id: String,
    pub rel_type: String,
    pub target: String,
    #[serde(default)]
    pub target_mode: TargetMode,
}

impl Relationship {
    pub fn is_external(&self) -> bool {
        self.target_mode == TargetMode::External
    }
}

/// Collect the `<Relationship>` children of a parsed relationships part, in
/// document order. Missing attributes read as empty strings.
pub fn read_relationships(doc: &Document<'_>) -> Vec<Relationship> {
    doc.root_element()
        .children()
        .filter(|node| {
            node.is_element()
                && node.tag_name().name() == "Relationship"
                && node.tag_name().namespace() == Some(PACKAGE_RELATIONSHIPS_NS)
        })
        .map(|node| Relationship {
            id: node.attribute("Id").unwrap_or_default().to_string(),
            rel_type: node.attribute("Type").unwrap_or_default().to_string(),
            target: node.attribute("Target").unwrap_or_default().to_string(),
            target_mode: TargetMode::from_attribute(node.attribute("TargetMode")),
        })
        .collect()
}
