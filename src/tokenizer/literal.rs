use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{anychar, char, none_of, satisfy},
    combinator::{map, recognize, value},
    error::{context, ErrorKind, ParseError, VerboseError},
    sequence::{delimited, pair, preceded},
};

use super::language::Language;
use super::token::{Lexeme, ParserResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    String,
    SingleQuoted,
    TextBlock,
    Char,
}

/// Body of a `"`-quoted string. Backslash escapes the next character. The
/// literal ends at the closing quote or, when unterminated, right before the
/// line break so the next line is scanned normally.
fn parse_string_body(input: &str) -> ParserResult<&str> {
    let mut chars = input.char_indices().peekable();
    while let Some((index, c)) = chars.next() {
        match c {
            '"' => return Ok((&input[index + 1..], &input[..index])),
            '\n' | '\r' => return Ok((&input[index..], &input[..index])),
            '\\' => {
                if let Some(&(next, '\n' | '\r')) = chars.peek() {
                    return Ok((&input[next..], &input[..next]));
                }
                chars.next();
            }
            _ => {}
        }
    }
    Ok(("", input))
}

/// Body of a `"""` text block, up to the closing `"""` or the end of input.
fn parse_text_block_body(input: &str) -> ParserResult<&str> {
    let mut index = 0;
    while index < input.len() {
        let remaining = &input[index..];
        if remaining.starts_with("\"\"\"") {
            return Ok((&remaining[3..], &input[..index]));
        }
        let mut chars = remaining.chars();
        let skipped = match chars.next() {
            Some('\\') => 1 + chars.next().map_or(0, |c| c.len_utf8()),
            Some(c) => c.len_utf8(),
            None => break,
        };
        index += skipped;
    }
    Ok(("", input))
}

/// Body of a `'`-quoted string. Unlike `"` strings it must close on the same
/// line, otherwise the quote is an apostrophe and nothing is consumed.
fn parse_single_quoted_body(input: &str) -> ParserResult<&str> {
    let mut chars = input.char_indices();
    while let Some((index, c)) = chars.next() {
        match c {
            '\'' => return Ok((&input[index + 1..], &input[..index])),
            '\n' | '\r' => break,
            '\\' => {
                if let Some((_, '\n' | '\r')) = chars.next() {
                    break;
                }
            }
            _ => {}
        }
    }
    Err(nom::Err::Error(VerboseError::from_error_kind(
        input,
        ErrorKind::Char,
    )))
}

fn parse_single_quoted(input: &str) -> ParserResult<LiteralKind> {
    context(
        "single-quoted string",
        value(
            LiteralKind::SingleQuoted,
            preceded(char('\''), parse_single_quoted_body),
        ),
    )(input)
}

fn parse_string_literal(input: &str) -> ParserResult<LiteralKind> {
    context(
        "string literal",
        value(LiteralKind::String, preceded(char('"'), parse_string_body)),
    )(input)
}

fn parse_text_block(input: &str) -> ParserResult<LiteralKind> {
    context(
        "text block",
        value(
            LiteralKind::TextBlock,
            preceded(tag("\"\"\""), parse_text_block_body),
        ),
    )(input)
}

fn parse_char_literal(input: &str) -> ParserResult<LiteralKind> {
    context(
        "char literal",
        value(
            LiteralKind::Char,
            delimited(
                char('\''),
                alt((
                    recognize(pair(
                        preceded(char('\\'), anychar),
                        take_while(|c: char| c != '\'' && c != '\n'),
                    )),
                    recognize(none_of("'\\\n")),
                )),
                char('\''),
            ),
        ),
    )(input)
}

#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_literal<'a>(input: &'a str, language: Language) -> ParserResult<'a, Lexeme<'a>> {
    let quoted = move |input: &'a str| -> ParserResult<'a, LiteralKind> {
        if language.has_single_quoted_strings() {
            parse_single_quoted(input)
        } else {
            parse_char_literal(input)
        }
    };
    context(
        "literal",
        map(
            alt((parse_text_block, parse_string_literal, quoted)),
            Lexeme::Literal,
        ),
    )(input)
}

/// Numeric literal in any base, with suffixes, separators and exponent
/// letters (`0x1F`, `10L`, `1_000`, `1e10`, `3.14f`). A `.` belongs to the
/// number only when a digit follows, so `arr[0].length` stops at `0`.
pub fn parse_number(input: &str) -> ParserResult<Lexeme> {
    let first_digit: ParserResult<char> = satisfy(|c| c.is_ascii_digit())(input);
    let (body, _) = first_digit?;
    let mut end = input.len() - body.len();
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        let fraction = c == '.' && chars.peek().is_some_and(|next| next.is_ascii_digit());
        if !(c.is_alphanumeric() || c == '_' || fraction) {
            break;
        }
        end += c.len_utf8();
    }
    Ok((&input[end..], Lexeme::Number(&input[..end])))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_string() {
        let (rest, lexeme) = parse_literal("\"hello world\" tail", Language::Generic).unwrap();
        assert_eq!(lexeme, Lexeme::Literal(LiteralKind::String));
        assert_eq!(rest, " tail");
    }

    #[test]
    fn test_string_with_escapes() {
        let (rest, _) = parse_literal(r#""say \"hi\" \\" after"#, Language::Generic).unwrap();
        assert_eq!(rest, " after");
    }

    #[test]
    fn test_empty_string() {
        let (rest, lexeme) = parse_literal("\"\"x", Language::Generic).unwrap();
        assert_eq!(lexeme, Lexeme::Literal(LiteralKind::String));
        assert_eq!(rest, "x");
    }

    #[test]
    fn test_unterminated_string_stops_at_line_end() {
        let (rest, _) = parse_literal("\"open\nnext", Language::Generic).unwrap();
        assert_eq!(rest, "\nnext");

        let (rest, _) = parse_literal("\"open\\\r\nnext", Language::Generic).unwrap();
        assert_eq!(rest, "\r\nnext");

        let (rest, _) = parse_literal("\"open", Language::Generic).unwrap();
        assert_eq!(rest, "");
    }

    #[test]
    fn test_text_block() {
        let input = "\"\"\"\n  select name\n  from \"users\"\n\"\"\"; done";
        let (rest, lexeme) = parse_literal(input, Language::Java).unwrap();
        assert_eq!(lexeme, Lexeme::Literal(LiteralKind::TextBlock));
        assert_eq!(rest, "; done");
    }

    #[test]
    fn test_unterminated_text_block() {
        let (rest, _) = parse_literal("\"\"\"\nnever closed", Language::Java).unwrap();
        assert_eq!(rest, "");
    }

    #[test]
    fn test_char_literals() {
        for input in ["'a'", "'\\n'", "'\\''", "'\\u0041'", "'é'"] {
            let (rest, lexeme) = parse_literal(input, Language::Java).unwrap();
            assert_eq!(lexeme, Lexeme::Literal(LiteralKind::Char), "{input}");
            assert_eq!(rest, "", "{input}");
        }
    }

    #[test]
    fn test_lone_quote_is_not_a_literal() {
        for language in [Language::Java, Language::Rust] {
            assert!(parse_literal("'a>", language).is_err());
            assert!(parse_literal("''", language).is_err());
            assert!(parse_literal("'hello world'", language).is_err());
        }
    }

    #[test]
    fn test_single_quoted_strings() {
        let cases = [
            ("'hello world') x", ") x"),
            ("''", ""),
            ("'it\\'s' y", " y"),
            ("'a'", ""),
        ];
        for (input, expected_rest) in cases {
            let (rest, lexeme) = parse_literal(input, Language::Generic).unwrap();
            assert_eq!(lexeme, Lexeme::Literal(LiteralKind::SingleQuoted), "{input}");
            assert_eq!(rest, expected_rest, "{input}");
        }
    }

    #[test]
    fn test_single_quote_must_close_on_its_line() {
        assert!(parse_literal("'s fine", Language::Generic).is_err());
        assert!(parse_literal("'open\nclosed'", Language::Generic).is_err());
        assert!(parse_literal("'open\\\nclosed'", Language::Generic).is_err());
    }

    #[test]
    fn test_number_literals() {
        let cases = [
            ("123", ""),
            ("0x1F;", ";"),
            ("10L)", ")"),
            ("1_000 ", " "),
            ("3.14f", ""),
            ("1e10+", "+"),
            ("0.length", ".length"),
        ];
        for (input, expected_rest) in cases {
            let (rest, lexeme) = parse_number(input).unwrap();
            assert!(matches!(lexeme, Lexeme::Number(_)), "{input}");
            assert_eq!(rest, expected_rest, "{input}");
        }
        assert!(parse_number("x1").is_err());
    }
}
