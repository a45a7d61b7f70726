use nom::{
    branch::alt,
    bytes::complete::{tag, take_till, take_until},
    combinator::{rest, value},
    error::context,
    sequence::{delimited, preceded},
};

use super::token::{Lexeme, ParserResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentType {
    Line,               // //
    Block,              // /* */
    DocumentationLine,  // ///
    DocumentationBlock, // /** */
    /// `/*` with no closing `*/`; swallows the rest of the input.
    Unterminated,
}

pub fn parse_line_comment(input: &str) -> ParserResult<CommentType> {
    context(
        "line comment",
        value(
            CommentType::Line,
            preceded(tag("//"), take_till(|c: char| c == '\n')),
        ),
    )(input)
}

pub fn parse_block_comment(input: &str) -> ParserResult<CommentType> {
    context(
        "block comment",
        value(
            CommentType::Block,
            delimited(tag("/*"), take_until("*/"), tag("*/")),
        ),
    )(input)
}

pub fn parse_line_documentation_comment(input: &str) -> ParserResult<CommentType> {
    context(
        "line document comment",
        value(
            CommentType::DocumentationLine,
            preceded(tag("///"), take_till(|c: char| c == '\n')),
        ),
    )(input)
}

pub fn parse_block_documentation_comment(input: &str) -> ParserResult<CommentType> {
    context(
        "block document comment",
        value(
            CommentType::DocumentationBlock,
            delimited(tag("/**"), take_until("*/"), tag("*/")),
        ),
    )(input)
}

pub fn parse_unterminated_comment(input: &str) -> ParserResult<CommentType> {
    context(
        "unterminated block comment",
        value(CommentType::Unterminated, preceded(tag("/*"), rest)),
    )(input)
}

#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_comment(input: &str) -> ParserResult<Lexeme> {
    let (rest, comment_type) = context(
        "comment",
        alt((
            parse_block_documentation_comment,
            parse_line_documentation_comment,
            parse_block_comment,
            parse_line_comment,
            parse_unterminated_comment,
        )),
    )(input)?;
    Ok((rest, Lexeme::Comment(comment_type)))
}
