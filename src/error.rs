use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum ScriptError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lexer(#[from] LexerError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parser(#[from] ParserError),
}

impl ScriptError {
    /// 1-based line and column of the offending token, when the failure has one.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            ScriptError::Lexer(err) => err.position(),
            ScriptError::Parser(err) => err.position(),
        }
    }
}

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum LexerError {
    #[error("empty input")]
    #[diagnostic(
        code(lexer::empty_input),
        help("The input was empty or contained only whitespace.")
    )]
    EmptyInput,

    #[error("unterminated string")]
    #[diagnostic(
        code(lexer::unterminated_string),
        help("Every string literal must be closed with '\"' before the end of the input.")
    )]
    UnterminatedString {
        #[source_code]
        src: NamedSource<String>,
        #[label("string opened here is never closed")]
        span: SourceSpan,
        line: usize,
        column: usize,
    },

    #[error("unexpected character '{found}'")]
    #[diagnostic(
        code(lexer::unexpected_character),
        help("This character does not begin any token of the script dialect.")
    )]
    UnexpectedCharacter {
        #[source_code]
        src: NamedSource<String>,
        #[label("no lexical rule matches this character")]
        span: SourceSpan,
        found: char,
        line: usize,
        column: usize,
    },
}

impl LexerError {
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            LexerError::EmptyInput => None,
            LexerError::UnterminatedString { line, column, .. }
            | LexerError::UnexpectedCharacter { line, column, .. } => Some((*line, *column)),
        }
    }
}

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum ParserError {
    #[error("expected operator after '{key}'")]
    #[diagnostic(
        code(parser::expected_operator),
        help("A property is written as `key <operator> value`, where the operator is one of '=', '<', '>', '<=', '>=', '!=' or '<>'.")
    )]
    ExpectedOperator {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected an operator here")]
        span: SourceSpan,
        key: String,
        line: usize,
        column: usize,
    },

    #[error("expected '}}'")]
    #[diagnostic(
        code(parser::expected_closing_brace),
        help("Every '{{' must be matched by a closing '}}'.")
    )]
    ExpectedClosingBrace {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected '}}' here")]
        span: SourceSpan,
        line: usize,
        column: usize,
    },

    #[error("unexpected token '{found}'")]
    #[diagnostic(
        code(parser::unexpected_token),
        help("A value is a string, number, boolean, identifier, or a braced block.")
    )]
    UnexpectedToken {
        #[source_code]
        src: NamedSource<String>,
        #[label("the parser did not expect this token")]
        span: SourceSpan,
        found: String,
        line: usize,
        column: usize,
    },
}

impl ParserError {
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            ParserError::ExpectedOperator { line, column, .. }
            | ParserError::ExpectedClosingBrace { line, column, .. }
            | ParserError::UnexpectedToken { line, column, .. } => Some((*line, *column)),
        }
    }
}
