use nom::{
    branch::alt,
    bytes::complete::take_while,
    character::complete::satisfy,
    combinator::recognize,
    error::{context, VerboseError},
    sequence::pair,
    IResult,
};
use serde::Serialize;

use super::{
    comment::{parse_comment, CommentType},
    language::Language,
    literal::{parse_literal, parse_number, LiteralKind},
    whitespace::{parse_newline, parse_whitespace},
};

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// One lexical unit recognised by the scanner. Only [`Lexeme::Identifier`]
/// ever leaves the tokenizer; the rest exist so their bodies get skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme<'a> {
    Identifier(&'a str),
    Keyword(&'a str),
    Number(&'a str),
    Literal(LiteralKind),
    Comment(CommentType),
    Whitespace,
    Newline,
}

/// An identifier and its span, in characters, within the scanned text.
///
/// `start` is inclusive and `end` exclusive, so
/// `source.chars().skip(start).take(end - start)` spells `text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IdentifierToken<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

impl<'a> IdentifierToken<'a> {
    pub fn new(text: &'a str, start: usize) -> Self {
        Self {
            text,
            start,
            end: start + text.chars().count(),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tokenizer {
    language: Language,
}

impl Tokenizer {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Starts a scan over `source`. Each call returns an independent iterator
    /// positioned at the beginning of the text.
    #[tracing::instrument(level = "debug", skip(self, source), fields(language = %self.language, bytes = source.len()))]
    pub fn tokenize<'a>(&self, source: &'a str) -> Tokens<'a> {
        Tokens {
            rest: source,
            offset: 0,
            language: self.language,
        }
    }
}

/// Scans `source` with the generic identifier grammar.
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokenizer::default().tokenize(source)
}

/// Lazy iterator over the identifier tokens of one text.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
    offset: usize,
    language: Language,
}

impl<'a> Tokens<'a> {
    /// Character offset of the next unscanned position.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn advance(&mut self, remaining: &'a str) {
        let consumed = &self.rest[..self.rest.len() - remaining.len()];
        self.offset += consumed.chars().count();
        self.rest = remaining;
    }

    fn skip_char(&mut self) {
        let mut chars = self.rest.chars();
        if let Some(c) = chars.next() {
            tracing::trace!(offset = self.offset, ?c, "skipping unrecognised character");
            self.offset += 1;
            self.rest = chars.as_str();
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = IdentifierToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let language = self.language;
        while !self.rest.is_empty() {
            let start = self.offset;
            let result = alt((
                // Formatting
                parse_whitespace,
                parse_newline,
                // Skipped bodies
                parse_comment,
                |input: &'a str| parse_literal(input, language),
                parse_number,
                // Names
                |input: &'a str| parse_word(input, language),
            ))(self.rest);

            match result {
                Ok((remaining, lexeme)) => {
                    self.advance(remaining);
                    if let Lexeme::Identifier(text) = lexeme {
                        return Some(IdentifierToken::new(text, start));
                    }
                }
                // Punctuation, operators and stray quotes carry no names.
                Err(_) => self.skip_char(),
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Recognises a maximal identifier-grammar run and classifies it as an
/// identifier or a reserved word of `language`.
pub fn parse_word(input: &str, language: Language) -> ParserResult<Lexeme> {
    let identifier: ParserResult<&str> = context(
        "identifier",
        recognize(pair(
            satisfy(|c| language.is_identifier_start(c)),
            take_while(|c: char| language.is_identifier_continue(c)),
        )),
    )(input);
    let (rest, word) = identifier?;

    if language.is_reserved(word) {
        return Ok((rest, Lexeme::Keyword(word)));
    }

    Ok((rest, Lexeme::Identifier(word)))
}
