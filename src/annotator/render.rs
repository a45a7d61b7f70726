use std::fmt;

use serde::Serialize;

use super::line::LineRecord;
use crate::tokenizer::IdentifierToken;

/// Separates a line's text from its marker block.
pub const MARKER_BLOCK_SEPARATOR: &str = "   ";

/// An identifier positioned on its line, with 1-based columns.
/// `end_column` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation<'a> {
    pub identifier: &'a str,
    pub start_column: usize,
    pub end_column: usize,
}

impl<'a> Annotation<'a> {
    pub fn new(token: &IdentifierToken<'a>, line: &LineRecord<'_>) -> Self {
        Self {
            identifier: token.text,
            start_column: token.start - line.start + 1,
            end_column: token.end - line.start + 1,
        }
    }
}

impl fmt::Display for Annotation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}:{}-{}]",
            self.identifier, self.start_column, self.end_column
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedLine<'a> {
    /// 1-based.
    pub line_number: usize,
    pub text: &'a str,
    pub annotations: Vec<Annotation<'a>>,
}

impl fmt::Display for AnnotatedLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:\t{}", self.line_number, self.text)?;
        let mut annotations = self.annotations.iter();
        if let Some(first) = annotations.next() {
            write!(f, "{MARKER_BLOCK_SEPARATOR}{first}")?;
            for annotation in annotations {
                write!(f, " {annotation}")?;
            }
        }
        Ok(())
    }
}

/// Joins rendered lines with `\n`, without a trailing newline.
pub fn render(lines: &[AnnotatedLine<'_>]) -> String {
    let mut output = String::new();
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        output.push_str(&line.to_string());
    }
    output
}
