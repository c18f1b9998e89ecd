//! Field descriptors for the type under test
//!
//! A `FieldSpec` describes one field declared directly on a type: its name
//! and a coarse type tag. The verifier only exercises fields tagged as
//! text; everything else is ignored during discovery.

use serde::Serialize;

/// Coarse type tag for a declared field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Text content (`String` / `Option<String>`)
    Text,
    /// Integer or floating-point numeric
    Numeric,
    /// Boolean flag
    Boolean,
    /// Anything else (nested structs, collections, ...)
    Opaque,
}

/// One field declared directly on the type under test
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Field name as declared
    pub name: String,

    /// Declared type tag
    pub ty: FieldType,
}

impl FieldSpec {
    /// Create a descriptor with an explicit type tag
    #[must_use]
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self { name: name.into(), ty }
    }

    /// Shorthand for a text field
    #[must_use]
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Text)
    }

    /// Whether this field holds text
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self.ty, FieldType::Text)
    }
}
