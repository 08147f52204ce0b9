// File: src/error.rs
use thiserror::Error;

/// Problems with the consonant or vowel catalogs. Every downstream component
/// relies on the inventory invariants, so these abort a run before any
/// generation happens.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A catalog file is not valid JSON or is missing required fields.
    #[error("malformed {catalog} catalog: {source}")]
    Malformed {
        catalog: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{catalog} catalog is empty")]
    EmptyCatalog { catalog: &'static str },

    #[error("{catalog} catalog contains an entry with an empty letter")]
    EmptyLetter { catalog: &'static str },

    #[error("consonant '{letter}' is declared more than once")]
    DuplicateConsonant { letter: String },

    /// The A and E groups must partition the vowel set.
    #[error("vowel '{letter}' is declared more than once")]
    DuplicateVowel { letter: String },

    /// Vowels must be a single character so the tone marker can find them.
    #[error("vowel '{letter}' is not a single character")]
    MultiCharVowel { letter: String },

    #[error("vowel '{letter}' has no tone table entry")]
    MissingToneEntry { letter: String },
}

/// Crate-level error for everything outside the pure core.
#[derive(Debug, Error)]
pub enum ForgeError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
