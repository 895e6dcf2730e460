use crate::value::ValueKind;

/// Errors raised when reading trait data through a typed view.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TraitError {
    #[error(
        "invalid data type for property '{key}' of trait '{trait_id}': expected {expected}, found {found}"
    )]
    InvalidPropertyType {
        trait_id: String,
        key: String,
        expected: ValueKind,
        found: ValueKind,
    },
    #[error("traits data is missing required traits: {}", .missing.join(", "))]
    MissingTraits { missing: Vec<String> },
}

pub type Result<T, E = TraitError> = std::result::Result<T, E>;
