//! # Whitespace Handling
//!
//! Whitespace never carries identifiers, but the scanner still recognises it
//! as its own lexeme so that runs of blanks are consumed in one step instead
//! of falling through to the single-character skip.
//!
//! Two kinds are recognised:
//!
//! * [`Lexeme::Whitespace`]: spaces, tabs and form feeds
//! * [`Lexeme::Newline`]: line breaks (`\n`, `\r\n` and a lone `\r`)

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    combinator::value,
    error::context,
};

use super::token::{Lexeme, ParserResult};

/// Parses a run of spaces, tabs and form feeds.
///
/// # Examples
///
/// ```
/// # use idspan::tokenizer::whitespace::parse_whitespace;
/// # use idspan::tokenizer::token::Lexeme;
/// let (rest, lexeme) = parse_whitespace(" \t hello").unwrap();
/// assert_eq!(lexeme, Lexeme::Whitespace);
/// assert_eq!(rest, "hello");
/// ```
pub fn parse_whitespace(input: &str) -> ParserResult<Lexeme> {
    context(
        "whitespace expected",
        value(
            Lexeme::Whitespace,
            take_while1(|c: char| c == ' ' || c == '\t' || c == '\x0c'),
        ),
    )(input)
}

/// Parses one line break, Windows style first.
pub fn parse_newline(input: &str) -> ParserResult<Lexeme> {
    context(
        "newline expected",
        value(Lexeme::Newline, alt((tag("\r\n"), tag("\n"), tag("\r")))),
    )(input)
}
