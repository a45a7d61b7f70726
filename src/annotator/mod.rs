//! # Annotator Component
//!
//! Turns a source text and its identifier tokens into the annotated listing:
//!
//! ```text
//! 109:	    private void processNode(Node node) {   [processNode:18-29] [Node:30-34] [node:35-39]
//! 110:	    }
//! ```
//!
//! Every line is prefixed with its 1-based number and a tab. Lines holding
//! identifiers get three spaces and one `[name:start-end]` marker per
//! identifier, columns 1-based with an exclusive end. Lines are joined by `\n`.
//!
//! The pipeline is [`LineIndex::new`] (split), [`LineIndex::line_of`] (binary
//! search per token), bucket by line, then [`render`].

pub mod line;
pub mod render;

pub use line::{LineIndex, LineRecord};
pub use render::{render, AnnotatedLine, Annotation};

use crate::tokenizer::{IdentifierToken, Language, Tokenizer};

/// Groups `tokens` under the lines of `source`. Every line is returned, in
/// order, including the ones without identifiers. Within a line, annotations
/// keep the order the tokens arrived in.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn annotate_lines<'a, I>(source: &'a str, tokens: I) -> Vec<AnnotatedLine<'a>>
where
    I: IntoIterator<Item = IdentifierToken<'a>>,
{
    let index = LineIndex::new(source);
    let mut buckets: Vec<Vec<Annotation<'a>>> = vec![Vec::new(); index.len()];

    let mut placed = 0usize;
    for token in tokens {
        let Some(line) = index.line_of(token.start).and_then(|i| index.get(i)) else {
            tracing::warn!(
                identifier = token.text,
                start = token.start,
                "token lies outside the source text, skipping"
            );
            continue;
        };
        if token.end < token.start || token.end > line.end {
            tracing::warn!(
                identifier = token.text,
                start = token.start,
                end = token.end,
                line = line.number(),
                "token span does not fit its line, skipping"
            );
            continue;
        }
        buckets[line.index].push(Annotation::new(&token, line));
        placed += 1;
    }
    tracing::debug!(lines = index.len(), tokens = placed, "grouped identifiers by line");

    index
        .lines()
        .iter()
        .zip(buckets)
        .map(|(line, annotations)| AnnotatedLine {
            line_number: line.number(),
            text: line.text,
            annotations,
        })
        .collect()
}

/// Renders the annotated listing of `source` for the given tokens.
pub fn annotate<'a, I>(source: &'a str, tokens: I) -> String
where
    I: IntoIterator<Item = IdentifierToken<'a>>,
{
    render(&annotate_lines(source, tokens))
}

/// Tokenizes `source` with `language` and renders the annotated listing.
pub fn annotate_source(source: &str, language: Language) -> String {
    annotate(source, Tokenizer::new(language).tokenize(source))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tokenizer::tokenize;

    #[test]
    fn test_single_line() {
        assert_eq!(
            annotate("int x = 1;", tokenize("int x = 1;")),
            "1:\tint x = 1;   [int:1-4] [x:5-6]"
        );
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(annotate_source("", Language::Generic), "");
        assert_eq!(annotate_source("\n", Language::Generic), "1:\t");
    }

    #[test]
    fn test_multi_line_listing() {
        let source = "class Node {\n\n    int value;\n}\n";
        assert_eq!(
            annotate_source(source, Language::Java),
            "1:\tclass Node {   [Node:7-11]\n2:\t\n3:\t    int value;   [value:9-14]\n4:\t}"
        );
    }

    #[test]
    fn test_tokens_keep_arrival_order_within_a_line() {
        let source = "a b";
        let tokens = vec![IdentifierToken::new("b", 2), IdentifierToken::new("a", 0)];
        assert_eq!(annotate(source, tokens), "1:\ta b   [b:3-4] [a:1-2]");
    }

    #[test]
    fn test_out_of_range_tokens_are_dropped() {
        let tokens = vec![IdentifierToken::new("ghost", 40), IdentifierToken::new("a", 0)];
        assert_eq!(annotate("a", tokens), "1:\ta   [a:1-2]");
    }

    #[test]
    fn test_tokens_not_fitting_their_line_are_dropped() {
        let source = "abc\ndef";
        let backwards = IdentifierToken {
            text: "x",
            start: 5,
            end: 2,
        };
        let spanning = IdentifierToken {
            text: "c\nd",
            start: 2,
            end: 5,
        };
        let kept = IdentifierToken::new("def", 4);
        assert_eq!(
            annotate(source, vec![backwards, spanning, kept]),
            "1:\tabc\n2:\tdef   [def:1-4]"
        );
    }

    #[test]
    fn test_structured_lines() {
        let lines = annotate_lines("x\ny z", tokenize("x\ny z"));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].line_number, 2);
        assert_eq!(
            lines[1].annotations,
            vec![
                Annotation {
                    identifier: "y",
                    start_column: 1,
                    end_column: 2
                },
                Annotation {
                    identifier: "z",
                    start_column: 3,
                    end_column: 4
                },
            ]
        );
    }
}
