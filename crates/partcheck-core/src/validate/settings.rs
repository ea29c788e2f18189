use crate::types::DocumentType;
use serde::{Deserialize, Serialize};

/// Settings for a validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorSettings {
    /// Document type whose main part must be present.
    pub document_type: DocumentType,

    /// Record a diagnostic for every part and relationship that checks out.
    pub verbose: bool,

    /// Run the checkers and their per-part work on the rayon pool.
    /// Output is identical either way.
    pub parallel: bool,
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self {
            document_type: DocumentType::Excel,
            verbose: false,
            parallel: true,
        }
    }
}

impl ValidatorSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document_type(mut self, document_type: DocumentType) -> Self {
        self.document_type = document_type;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
