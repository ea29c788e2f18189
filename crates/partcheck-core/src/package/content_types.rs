/// Content-types manifest every package must carry.
pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";

/// Relationships part owned by the package root.
pub const ROOT_RELATIONSHIPS_PART: &str = "_rels/.rels";

/// Parts that must be present by exact name, in reporting order.
pub const REQUIRED_PARTS: [&str; 2] = [CONTENT_TYPES_PART, ROOT_RELATIONSHIPS_PART];

pub mod content_type_values {
    pub const XML: &str = "application/xml";
    pub const RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
}

/// Default content type implied by a part name's extension, for the
/// extensions that carry XML. Binary parts (images, embeddings) yield `None`.
pub fn default_xml_content_type(name: &str) -> Option<&'static str> {
    if name.ends_with(".xml") {
        Some(content_type_values::XML)
    } else if name.ends_with(".rels") {
        Some(content_type_values::RELATIONSHIPS)
    } else {
        None
    }
}

/// Whether the part should be checked for XML well-formedness.
pub fn is_xml_part(name: &str) -> bool {
    default_xml_content_type(name).is_some()
}
