use serde::{Deserialize, Serialize};

/// Reserved name of the single record without a parent.
pub const ROOT_NAME: &str = "LANGUAL THESAURUS ROOT";

/// One descriptor of the thesaurus: a named category with a unique code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescriptorRecord {
    /// Facet code (FTC), e.g. `B1272`
    pub code: String,

    /// Term, stored upper-case; not unique across codes
    pub name: String,

    /// Broader term (BT); `None` only for the root
    #[serde(default)]
    pub parent_code: Option<String>,
}

impl DescriptorRecord {
    /// Build a normalised record. An empty parent code means "no parent".
    pub fn new(code: &str, name: &str, parent_code: Option<&str>) -> Self {
        let parent_code = parent_code
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        Self {
            code: code.trim().to_string(),
            name: name.trim().to_uppercase(),
            parent_code,
        }
    }

    /// Apply the same normalisation as [`DescriptorRecord::new`] to a
    /// deserialized record.
    pub fn normalized(self) -> Self {
        Self::new(&self.code, &self.name, self.parent_code.as_deref())
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }

    /// `code, name` line used by the presenter
    pub fn label(&self) -> String {
        format!("{}, {}", self.code, self.name)
    }
}

/// Size summary of a built index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub records: usize,
    pub edges: usize,
    pub leaves: usize,
}
