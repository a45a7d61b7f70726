/// Java reserved words plus the `true`, `false` and `null` literals.
///
/// Contextual keywords (`var`, `record`, `yield`, `sealed`, `permits`, ...) are
/// not listed: they are ordinary identifiers outside their context.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display, strum::EnumIter, strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum JavaKeyword {
    Abstract,
    Assert,
    Boolean,
    Break,
    Byte,
    Case,
    Catch,
    Char,
    Class,
    Const,
    Continue,
    Default,
    Do,
    Double,
    Else,
    Enum,
    Extends,
    Final,
    Finally,
    Float,
    For,
    Goto,
    If,
    Implements,
    Import,
    Instanceof,
    Int,
    Interface,
    Long,
    Native,
    New,
    Package,
    Private,
    Protected,
    Public,
    Return,
    Short,
    Static,
    Strictfp,
    Super,
    Switch,
    Synchronized,
    This,
    Throw,
    Throws,
    Transient,
    Try,
    Void,
    Volatile,
    While,
    // Literals
    True,
    False,
    Null,
    #[strum(serialize = "_")]
    Underscore,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    // check if all keywords are recognised from their spelling
    #[test]
    fn test_all_keyword() {
        for keyword_string in JavaKeyword::iter().map(|k| k.to_string()) {
            let keyword = JavaKeyword::from_str(&keyword_string).unwrap();
            assert_eq!(keyword.as_ref(), keyword_string);
        }
    }

    #[test]
    fn test_spellings() {
        assert_eq!(JavaKeyword::try_from("instanceof"), Ok(JavaKeyword::Instanceof));
        assert_eq!(JavaKeyword::try_from("_"), Ok(JavaKeyword::Underscore));
        assert!(JavaKeyword::try_from("Int").is_err());
        assert!(JavaKeyword::try_from("record").is_err());
    }
}
