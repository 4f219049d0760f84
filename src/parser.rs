use crate::ast::{Document, Operator, Property, SourcePos, Value};
use crate::error::{ParserError, ScriptError};
use crate::lexer::{Lexer, Token, TokenKind};
use log::{debug, trace};
use miette::NamedSource;
use std::sync::Arc;

/// A recursive descent parser for Clausewitz script.
///
/// Comments are stripped before parsing; a single cursor walks the token
/// sequence with at most one extra token of lookahead. Recursion depth mirrors
/// the brace nesting of the input, so adversarially deep documents can
/// exhaust the call stack.
#[derive(Debug)]
pub struct Parser {
    source: Arc<NamedSource<String>>,
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(source_text: &str) -> Result<Self, ScriptError> {
        Self::new_with_name(source_text, "script.txt")
    }

    pub fn new_with_name(source_text: &str, name: impl Into<String>) -> Result<Self, ScriptError> {
        let name = name.into();
        let tokens = Lexer::new_with_name(source_text, name.clone()).tokenize_without_comments()?;
        Ok(Self {
            source: Arc::new(NamedSource::new(name, source_text.to_string())),
            tokens,
            position: 0,
        })
    }

    /// Document ::= PropertyList
    ///
    /// # Errors
    ///
    /// Fails fast on the first grammar violation; no partial document is
    /// returned. The sole local recovery is the stray-token skip inside
    /// property lists.
    pub fn parse_document(&mut self) -> Result<Document, ScriptError> {
        let properties = self.parse_properties()?;
        debug!(
            "parsed document with {} top-level properties",
            properties.len()
        );
        Ok(Document::from_properties(properties))
    }

    /// PropertyList ::= { Property }
    ///
    /// Ends at a closing brace or the end of the input. A token that cannot
    /// start a property is consumed and dropped rather than failing the
    /// parse; stray tokens between properties are tolerated.
    fn parse_properties(&mut self) -> Result<Vec<Property>, ScriptError> {
        let mut properties = Vec::new();
        loop {
            match self.current().kind {
                TokenKind::RightBrace | TokenKind::EndOfInput => break,
                TokenKind::Identifier => properties.push(self.parse_property()?),
                kind => {
                    trace!(
                        "skipping stray {:?} token at {}:{}",
                        kind,
                        self.current().line,
                        self.current().column
                    );
                    self.advance();
                }
            }
        }
        Ok(properties)
    }

    /// Property ::= Identifier Operator Value
    fn parse_property(&mut self) -> Result<Property, ScriptError> {
        let key_token = self.current().clone();
        self.advance();

        let op_token = self.current().clone();
        let Some(operator) = Operator::from_token(&op_token) else {
            return Err(self.err_expected_operator(&key_token.text).into());
        };
        self.advance();

        let value = self.parse_value()?;
        Ok(Property {
            key: key_token.text,
            operator,
            value,
            pos: Some(SourcePos {
                line: key_token.line,
                column: key_token.column,
            }),
        })
    }

    /// Value ::= Block | Array | String | Number | Boolean | Identifier
    fn parse_value(&mut self) -> Result<Value, ScriptError> {
        let token = self.current().clone();
        match token.kind {
            TokenKind::LeftBrace => self.parse_block_or_array(),
            TokenKind::String | TokenKind::Identifier => {
                self.advance();
                Ok(Value::String(token.text))
            }
            TokenKind::Number => {
                self.advance();
                self.number_value(&token)
            }
            TokenKind::Boolean => {
                self.advance();
                Ok(Value::Boolean(token.text == "yes"))
            }
            _ => Err(self.err_unexpected_token(&token).into()),
        }
    }

    /// Decides Block vs Array with one token of lookahead past the `{`:
    /// a leading number or boolean not followed by an operator is an array;
    /// every other case is a block. One token cannot tell an identifier
    /// array from a property list, so `{ a b c }` is read as a block and
    /// then rejected for its missing operator.
    fn parse_block_or_array(&mut self) -> Result<Value, ScriptError> {
        self.advance(); // consume '{'

        let first = self.current().kind;
        let value = if first == TokenKind::RightBrace {
            Value::Block(Vec::new())
        } else if matches!(first, TokenKind::Number | TokenKind::Boolean)
            && !self.peek_next().kind.is_operator()
        {
            Value::Array(self.parse_array_values()?)
        } else {
            Value::Block(self.parse_properties()?)
        };

        if self.current().kind != TokenKind::RightBrace {
            return Err(self.err_expected_closing_brace().into());
        }
        self.advance();
        Ok(value)
    }

    /// Consumes primitive tokens until something that is not a primitive;
    /// the caller's closing-brace check rejects whatever stopped the loop.
    fn parse_array_values(&mut self) -> Result<Vec<Value>, ScriptError> {
        let mut values = Vec::new();
        loop {
            let token = self.current().clone();
            match token.kind {
                TokenKind::String | TokenKind::Identifier => {
                    self.advance();
                    values.push(Value::String(token.text));
                }
                TokenKind::Number => {
                    self.advance();
                    values.push(self.number_value(&token)?);
                }
                TokenKind::Boolean => {
                    self.advance();
                    values.push(Value::Boolean(token.text == "yes"));
                }
                _ => break,
            }
        }
        Ok(values)
    }

    fn number_value(&self, token: &Token) -> Result<Value, ScriptError> {
        let n: f64 = token
            .text
            .parse()
            .map_err(|_| ScriptError::from(self.err_unexpected_token(token)))?;
        Ok(Value::from_f64(n))
    }

    // === Cursor helpers ===

    fn current(&self) -> &Token {
        // The sequence always ends with EndOfInput, so clamping to the last
        // token keeps the cursor well defined.
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    fn peek_next(&self) -> &Token {
        &self.tokens[(self.position + 1).min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    // === Error constructors ===

    fn err_expected_operator(&self, key: &str) -> ParserError {
        let token = self.current();
        ParserError::ExpectedOperator {
            src: (*self.source).clone(),
            span: token.span(),
            key: key.to_string(),
            line: token.line,
            column: token.column,
        }
    }

    fn err_expected_closing_brace(&self) -> ParserError {
        let token = self.current();
        ParserError::ExpectedClosingBrace {
            src: (*self.source).clone(),
            span: token.span(),
            line: token.line,
            column: token.column,
        }
    }

    fn err_unexpected_token(&self, token: &Token) -> ParserError {
        ParserError::UnexpectedToken {
            src: (*self.source).clone(),
            span: token.span(),
            found: token.text.clone(),
            line: token.line,
            column: token.column,
        }
    }
}
