use crate::lexer::{Token, TokenKind};
use std::fmt;

/// The operator that links a property's key to its value.
///
/// `!=` and `<>` are two spellings of the same comparison; the `angle` flag
/// records which one the source used so it round-trips verbatim.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Equals,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    NotEqual { angle: bool },
}

impl Operator {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "=",
            Operator::LessThan => "<",
            Operator::GreaterThan => ">",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThanOrEqual => ">=",
            Operator::NotEqual { angle: false } => "!=",
            Operator::NotEqual { angle: true } => "<>",
        }
    }

    pub(crate) fn from_token(token: &Token) -> Option<Operator> {
        match token.kind {
            TokenKind::Equals => Some(Operator::Equals),
            TokenKind::LessThan => Some(Operator::LessThan),
            TokenKind::GreaterThan => Some(Operator::GreaterThan),
            TokenKind::LessThanOrEqual => Some(Operator::LessThanOrEqual),
            TokenKind::GreaterThanOrEqual => Some(Operator::GreaterThanOrEqual),
            TokenKind::NotEqual => Some(Operator::NotEqual {
                angle: token.text == "<>",
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1-based line and column of a node in the original source.
/// Diagnostic only; it does not participate in equality.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SourcePos {
    pub line: usize,
    pub column: usize,
}

/// A parsed value: a primitive leaf, a block of properties, or an inline
/// array of primitives.
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    /// An ordered, duplicate-permitting property list enclosed in braces.
    Block(Vec<Property>),
    /// An ordered sequence of unlabeled primitive values enclosed in braces.
    Array(Vec<Value>),
}

impl Value {
    /// Collapses a parsed numeric literal: values with no fractional part are
    /// integers, everything else stays a float. `1.0` becomes `Integer(1)`.
    #[must_use]
    pub fn from_f64(n: f64) -> Value {
        if n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
            Value::Integer(n as i64)
        } else {
            Value::Float(n)
        }
    }

    #[must_use]
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Value::String(_) | Value::Integer(_) | Value::Float(_) | Value::Boolean(_)
        )
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_block(&self) -> Option<&Vec<Property>> {
        match self {
            Value::Block(properties) => Some(properties),
            _ => None,
        }
    }

    pub fn as_block_mut(&mut self) -> Option<&mut Vec<Property>> {
        match self {
            Value::Block(properties) => Some(properties),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }
}

/// One `key <operator> value` triplet. Keys need not be unique within their
/// container; duplicates are a first-class feature of the dialect.
#[derive(Debug, Clone)]
pub struct Property {
    pub key: String,
    pub operator: Operator,
    pub value: Value,
    pub pos: Option<SourcePos>,
}

impl Property {
    pub fn new(key: impl Into<String>, operator: Operator, value: Value) -> Property {
        Property {
            key: key.into(),
            operator,
            value,
            pos: None,
        }
    }
}

impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        // pos is diagnostic only.
        self.key == other.key && self.operator == other.operator && self.value == other.value
    }
}

/// The root of a parsed script: an ordered property sequence, structurally a
/// block without enclosing braces.
///
/// The document exclusively owns its tree; every block and array owns its
/// children by value, so in-place mutation affects exactly one location.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Document {
    pub properties: Vec<Property>,
}

impl Document {
    #[must_use]
    pub fn new() -> Document {
        Document::default()
    }

    #[must_use]
    pub fn from_properties(properties: Vec<Property>) -> Document {
        Document { properties }
    }

    /// The root property sequence.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut Vec<Property> {
        &mut self.properties
    }

    #[must_use]
    pub fn into_properties(self) -> Vec<Property> {
        self.properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_collapse() {
        assert_eq!(Value::from_f64(1.0), Value::Integer(1));
        assert_eq!(Value::from_f64(0.0), Value::Integer(0));
        assert_eq!(Value::from_f64(-3.0), Value::Integer(-3));
        assert_eq!(Value::from_f64(1.75), Value::Float(1.75));
        assert_eq!(Value::from_f64(-0.25), Value::Float(-0.25));
    }

    #[test]
    fn test_operator_spelling() {
        assert_eq!(Operator::NotEqual { angle: false }.as_str(), "!=");
        assert_eq!(Operator::NotEqual { angle: true }.as_str(), "<>");
        assert_eq!(Operator::LessThanOrEqual.to_string(), "<=");
    }

    #[test]
    fn test_property_equality_ignores_pos() {
        let mut a = Property::new("k", Operator::Equals, Value::Integer(1));
        let b = Property::new("k", Operator::Equals, Value::Integer(1));
        a.pos = Some(SourcePos { line: 4, column: 2 });
        assert_eq!(a, b);
    }
}
