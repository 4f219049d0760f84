//! Top-level entry points for the tokenize → parse → mutate → stringify
//! pipeline, plus JSON/YAML export of parsed documents.

use crate::ast::Document;
use crate::error::ScriptError;
use crate::lexer::{Lexer, Token};
use crate::parser::Parser;
use crate::serialization::{block_to_plain, to_plain, PlainValue};
use crate::stringify::StringifyOptions;
use log::debug;
use serde::{Serialize, Serializer};

/// Scans `source` into its full token sequence, comments included.
///
/// # Errors
///
/// Returns a [`ScriptError`] for empty input, an unterminated string, or an
/// unexpected character; the error carries the 1-based position where one
/// exists.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ScriptError> {
    Ok(Lexer::new(source).tokenize()?)
}

/// [`tokenize`] with `Comment` tokens removed.
///
/// # Errors
///
/// Same failure modes as [`tokenize`].
pub fn tokenize_without_comments(source: &str) -> Result<Vec<Token>, ScriptError> {
    Ok(Lexer::new(source).tokenize_without_comments()?)
}

/// Parses `source` into an editable [`Document`].
///
/// # Errors
///
/// Fails fast on the first lexical or grammar error; no partial document is
/// returned.
pub fn parse(source: &str) -> Result<Document, ScriptError> {
    Parser::new(source)?.parse_document()
}

/// [`parse`] with a source name for error reports.
///
/// # Errors
///
/// Same failure modes as [`parse`].
pub fn parse_with_name(source: &str, name: &str) -> Result<Document, ScriptError> {
    debug!("parsing {name} ({} bytes)", source.len());
    Parser::new_with_name(source, name)?.parse_document()
}

/// Renders a document back into script text. See [`crate::stringify`].
#[must_use]
pub fn stringify(document: &Document, options: &StringifyOptions) -> String {
    crate::stringify::stringify(document, options)
}

impl Document {
    /// The document as a generic serializable value. Lossy: duplicate keys
    /// collapse to the last occurrence and operators are dropped.
    #[must_use]
    pub fn to_plain(&self) -> PlainValue {
        PlainValue::Object(block_to_plain(&self.properties))
    }

    /// Serializes the document's data to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.to_plain())
    }

    /// Serializes the document's data to YAML.
    ///
    /// # Errors
    ///
    /// Returns a `serde_yaml::Error` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.to_plain())
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_plain().serialize(serializer)
    }
}

impl Serialize for crate::ast::Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        to_plain(self).serialize(serializer)
    }
}
