//! # Tokenizer Component
//!
//! The Tokenizer scans raw source text and yields the identifier tokens it
//! contains, each with its exact character span in the original text.
//!
//! ## Design Principles
//!
//! * **Lazy and restartable**: [`Tokenizer::tokenize`](token::Tokenizer::tokenize)
//!   returns an iterator that scans on demand. Calling it again starts a fresh scan
//!   over the same text and yields the same sequence.
//! * **Never fails**: unterminated comments and literals, stray quotes and unknown
//!   characters degrade the scan instead of aborting it. Identifier recall may drop
//!   on broken input, but the iterator always runs to the end of the text.
//! * **Identifiers only**: comments, string/text-block/character literal bodies and
//!   numeric literals are consumed whole so nothing inside them is reported.
//!
//! ## Component Structure
//!
//! * [`token`]: identifier tokens, the scanner and its iterator
//! * [`language`]: identifier grammar per source language
//! * [`keyword`]: reserved words excluded by the Java profile
//! * [`literal`]: string, text block, character and number literals
//! * [`comment`]: line and block comments
//! * [`whitespace`]: whitespace and newline handling
//!
//! ## Usage Example
//!
//! ```rust
//! use idspan::tokenizer::{language::Language, token::Tokenizer};
//!
//! let tokenizer = Tokenizer::new(Language::Generic);
//! let names: Vec<&str> = tokenizer
//!     .tokenize("let total = count + 1; // ignored")
//!     .map(|token| token.text)
//!     .collect();
//! assert_eq!(names, vec!["let", "total", "count"]);
//! ```

pub mod comment;
pub mod keyword;
pub mod language;
pub mod literal;
pub mod token;
pub mod whitespace;

pub use language::Language;
pub use token::{tokenize, IdentifierToken, Tokenizer, Tokens};
