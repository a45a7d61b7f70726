pub mod annotator;
pub mod config;
pub mod error;
pub mod tokenizer;
pub mod workspace;

// Re-exports
pub use annotator::{annotate, annotate_lines, annotate_source, AnnotatedLine, Annotation};
pub use config::AnnotatorConfig;
pub use error::*;
pub use tokenizer::{IdentifierToken, Language, Tokenizer};
pub use workspace::{AnnotateResponse, Workspace};
