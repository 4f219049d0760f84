// Error surface tests for the public API layer
// Tokenize and parse failures, position reporting, and empty-input handling

use clausewitz_core::{parse, tokenize, tokenize_without_comments, LexerError, ScriptError};

#[test]
fn test_tokenize_empty_input() {
    for source in ["", "   ", " \t\r\n "] {
        let err = tokenize(source).unwrap_err();
        assert!(matches!(err, ScriptError::Lexer(LexerError::EmptyInput)));
        assert_eq!(err.position(), None);
    }
}

#[test]
fn test_parse_empty_input() {
    let err = parse("").unwrap_err();
    assert!(matches!(err, ScriptError::Lexer(LexerError::EmptyInput)));
    assert_eq!(err.position(), None);
}

#[test]
fn test_tokenize_unterminated_string_position() {
    let err = tokenize("name = \"unterminated").unwrap_err();
    match err {
        ScriptError::Lexer(LexerError::UnterminatedString { line, .. }) => {
            assert_eq!(line, 1);
        }
        other => panic!("expected UnterminatedString, got {other:?}"),
    }
}

#[test]
fn test_parse_surfaces_lex_failure() {
    let err = parse("value = $broken").unwrap_err();
    match err {
        ScriptError::Lexer(LexerError::UnexpectedCharacter { found, .. }) => {
            assert_eq!(found, '$');
        }
        other => panic!("expected UnexpectedCharacter, got {other:?}"),
    }
}

#[test]
fn test_tokenize_without_comments_filters() {
    let with = tokenize("a = 1 # note").unwrap();
    let without = tokenize_without_comments("a = 1 # note").unwrap();
    assert_eq!(with.len(), without.len() + 1);
}

#[test]
fn test_error_display() {
    let err = parse("a = \"oops").unwrap_err();
    let text = format!("{err}");
    assert!(text.contains("unterminated"));
}
