//! Error types

use std::fmt;

/// Error returned from script registry lookups.
///
/// Phonetic lookups never produce this error for offsets without a table
/// entry; those return the all-zero sentinel vector instead. Only an
/// unregistered language code is an error.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ScriptError {
    UnsupportedLanguage(String),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::UnsupportedLanguage(code) => {
                write!(f, "language '{}' is not supported", code)
            }
        }
    }
}

impl std::error::Error for ScriptError {}
