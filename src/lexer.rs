use crate::error::LexerError;
use miette::NamedSource;

/// The kinds of tokens the lexer can produce.
/// Each token is a meaningful unit of Clausewitz script syntax.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// A bare word: a key, an unquoted string value, or an `@variable` reference.
    Identifier,
    /// A string literal, enclosed in double quotes.
    String,
    /// A number literal, integer or decimal. The literal text is kept verbatim;
    /// numeric conversion happens in the parser.
    Number,
    /// The literals `yes` and `no`.
    Boolean,
    /// `=`
    Equals,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `<=`
    LessThanOrEqual,
    /// `>=`
    GreaterThanOrEqual,
    /// `!=` or `<>`; the token text records which spelling was used.
    NotEqual,
    /// `#` up to the end of the line, body trimmed.
    Comment,
    /// End of the input. Exactly one per token sequence, always last.
    EndOfInput,
}

impl TokenKind {
    /// Whether this token kind can appear between a key and its value.
    #[must_use]
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Equals
                | TokenKind::LessThan
                | TokenKind::GreaterThan
                | TokenKind::LessThanOrEqual
                | TokenKind::GreaterThanOrEqual
                | TokenKind::NotEqual
        )
    }
}

/// A token with its verbatim text and source position.
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// 1-based line of the token's first character.
    pub line: usize,
    /// 1-based column of the token's first character.
    pub column: usize,
    pub pos_start: usize,
    pub pos_end: usize,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        text: String,
        line: usize,
        column: usize,
        pos_start: usize,
        pos_end: usize,
    ) -> Token {
        Token {
            kind,
            text,
            line,
            column,
            pos_start,
            pos_end,
        }
    }

    pub(crate) fn span(&self) -> miette::SourceSpan {
        (self.pos_start, self.pos_end - self.pos_start).into()
    }
}

pub(crate) fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '@'
}

pub(crate) fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit() || matches!(c, ':' | '.' | '[' | ']')
}

pub struct Lexer<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    position: usize,
    line: usize,
    column: usize,
    source_name: String,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::new_with_name(input, "script.txt")
    }

    pub fn new_with_name(input: &'a str, name: impl Into<String>) -> Self {
        Self {
            input,
            chars: input.chars().peekable(),
            position: 0,
            line: 1,
            column: 1,
            source_name: name.into(),
        }
    }

    /// Scans the whole input into a token sequence terminated by one
    /// `EndOfInput` token.
    ///
    /// # Errors
    ///
    /// Fails on empty or whitespace-only input, an unterminated string, or a
    /// character no lexical rule matches. The first error aborts the scan.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexerError> {
        if self.input.trim().is_empty() {
            return Err(LexerError::EmptyInput);
        }
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::EndOfInput;
            tokens.push(token);
            if done {
                break;
            }
        }
        Ok(tokens)
    }

    /// Same as [`tokenize`](Self::tokenize), with `Comment` tokens removed.
    pub fn tokenize_without_comments(&mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens = self.tokenize()?;
        tokens.retain(|t| t.kind != TokenKind::Comment);
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token, LexerError> {
        self.skip_whitespace();

        let (start_line, start_column, start_pos) = (self.line, self.column, self.position);

        let Some(&c) = self.peek() else {
            return Ok(Token::new(
                TokenKind::EndOfInput,
                String::new(),
                start_line,
                start_column,
                start_pos,
                start_pos,
            ));
        };

        let (kind, text) = match c {
            '=' => {
                self.advance();
                (TokenKind::Equals, "=".to_string())
            }
            '{' => {
                self.advance();
                (TokenKind::LeftBrace, "{".to_string())
            }
            '}' => {
                self.advance();
                (TokenKind::RightBrace, "}".to_string())
            }
            '<' => {
                self.advance();
                match self.peek() {
                    Some('=') => {
                        self.advance();
                        (TokenKind::LessThanOrEqual, "<=".to_string())
                    }
                    Some('>') => {
                        self.advance();
                        (TokenKind::NotEqual, "<>".to_string())
                    }
                    _ => (TokenKind::LessThan, "<".to_string()),
                }
            }
            '>' => {
                self.advance();
                if self.peek() == Some(&'=') {
                    self.advance();
                    (TokenKind::GreaterThanOrEqual, ">=".to_string())
                } else {
                    (TokenKind::GreaterThan, ">".to_string())
                }
            }
            '!' => {
                self.advance();
                if self.peek() == Some(&'=') {
                    self.advance();
                    (TokenKind::NotEqual, "!=".to_string())
                } else {
                    return Err(self.err_unexpected_character('!', start_line, start_column, start_pos));
                }
            }
            '#' => self.read_comment(),
            '"' => self.read_string(start_line, start_column, start_pos)?,
            c if c.is_ascii_digit() => self.read_number(),
            '-' if self.peek_second().is_some_and(|c| c.is_ascii_digit()) => self.read_number(),
            c if is_identifier_start(c) => self.read_identifier(),
            other => {
                return Err(self.err_unexpected_character(other, start_line, start_column, start_pos));
            }
        };

        Ok(Token::new(
            kind,
            text,
            start_line,
            start_column,
            start_pos,
            self.position,
        ))
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next();
        if let Some(c) = c {
            self.position += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        c
    }

    fn peek(&mut self) -> Option<&char> {
        self.chars.peek()
    }

    fn peek_second(&self) -> Option<char> {
        let mut lookahead = self.chars.clone();
        lookahead.next();
        lookahead.next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if matches!(c, ' ' | '\t' | '\r' | '\n') {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_comment(&mut self) -> (TokenKind, String) {
        self.advance(); // consume the '#'
        let mut body = String::new();
        while let Some(&c) = self.peek() {
            if c == '\n' {
                break;
            }
            body.push(c);
            self.advance();
        }
        (TokenKind::Comment, body.trim().to_string())
    }

    fn read_string(
        &mut self,
        start_line: usize,
        start_column: usize,
        start_pos: usize,
    ) -> Result<(TokenKind, String), LexerError> {
        self.advance(); // consume the opening quote
        let mut value = String::new();
        loop {
            let Some(&c) = self.peek() else {
                return Err(LexerError::UnterminatedString {
                    src: self.named_source(),
                    span: (start_pos, 1).into(),
                    line: start_line,
                    column: start_column,
                });
            };
            match c {
                '"' => {
                    self.advance();
                    return Ok((TokenKind::String, value));
                }
                '\\' if self.peek_second() == Some('"') => {
                    self.advance();
                    self.advance();
                    value.push('"');
                }
                c => {
                    // Raw newlines are permitted inside string literals.
                    value.push(c);
                    self.advance();
                }
            }
        }
    }

    fn read_number(&mut self) -> (TokenKind, String) {
        let mut text = String::new();
        if self.peek() == Some(&'-') {
            text.push('-');
            self.advance();
        }
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                text.push(*c);
                self.advance();
            } else {
                break;
            }
        }
        // A '.' only belongs to the number when a digit follows it; a trailing
        // dot is left for the next token.
        if self.peek() == Some(&'.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
            text.push('.');
            self.advance();
            while let Some(c) = self.peek() {
                if c.is_ascii_digit() {
                    text.push(*c);
                    self.advance();
                } else {
                    break;
                }
            }
        }
        (TokenKind::Number, text)
    }

    fn read_identifier(&mut self) -> (TokenKind, String) {
        let mut ident = String::new();
        while let Some(&c) = self.peek() {
            if is_identifier_continue(c) {
                ident.push(c);
                self.advance();
            } else {
                break;
            }
        }
        match ident.as_str() {
            "yes" | "no" => (TokenKind::Boolean, ident),
            _ => (TokenKind::Identifier, ident),
        }
    }

    fn err_unexpected_character(
        &self,
        found: char,
        line: usize,
        column: usize,
        pos: usize,
    ) -> LexerError {
        LexerError::UnexpectedCharacter {
            src: self.named_source(),
            span: (pos, found.len_utf8()).into(),
            found,
            line,
            column,
        }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.source_name, self.input.to_string())
    }
}
