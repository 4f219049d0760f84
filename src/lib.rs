pub mod api;
pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod stringify;
mod path;
mod serialization;

pub use api::{parse, parse_with_name, stringify, tokenize, tokenize_without_comments};
pub use ast::{Document, Operator, Property, SourcePos, Value};
pub use error::{LexerError, ParserError, ScriptError};
pub use lexer::{Token, TokenKind};
pub use serialization::PlainValue;
pub use stringify::StringifyOptions;
