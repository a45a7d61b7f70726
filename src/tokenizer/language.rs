//! Identifier grammar per source language.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::keyword::JavaKeyword;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    /// Letter or `_` followed by letters, digits or `_`. Every run is reported.
    /// `'...'` closed on the same line is a string.
    #[default]
    Generic,
    /// Java identifiers (`$` allowed), reserved words and literals excluded.
    Java,
    /// Generic identifiers; `'` only opens a char literal, so lifetimes and
    /// labels keep their names.
    Rust,
}

impl Language {
    /// Picks a profile from a file extension, falling back to [`Language::Generic`].
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some("java") => Language::Java,
            Some("rs") => Language::Rust,
            _ => Language::Generic,
        }
    }

    pub fn is_identifier_start(self, c: char) -> bool {
        match self {
            Language::Generic | Language::Rust => c.is_alphabetic() || c == '_',
            Language::Java => c.is_alphabetic() || c == '_' || c == '$',
        }
    }

    pub fn is_identifier_continue(self, c: char) -> bool {
        match self {
            Language::Generic | Language::Rust => c.is_alphanumeric() || c == '_',
            Language::Java => c.is_alphanumeric() || c == '_' || c == '$',
        }
    }

    /// Whether `word` is a reserved word that never names anything.
    pub fn is_reserved(self, word: &str) -> bool {
        match self {
            Language::Generic | Language::Rust => false,
            Language::Java => JavaKeyword::try_from(word).is_ok(),
        }
    }

    /// Whether `'` opens a string that may hold several characters, rather
    /// than a single char literal.
    pub fn has_single_quoted_strings(self) -> bool {
        matches!(self, Language::Generic)
    }
}
