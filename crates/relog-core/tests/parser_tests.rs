use relog_core::{parse, ParseErrorKind, Value};

// ============================================================================
// Basic lines
// ============================================================================

#[test]
fn single_line_single_field() {
    let records = parse("level=info").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].get("level"),
        Some(&Value::String("info".to_string()))
    );
}

#[test]
fn multiple_fields_keep_insertion_order() {
    let records = parse("a=1 b=2 c=3").unwrap();
    let keys: Vec<&str> = records[0].iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
}

#[test]
fn multiple_lines_multiple_records() {
    let records = parse("a=1\nb=2\nc=3\n").unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[2].get("c"), Some(&Value::Integer(3)));
}

#[test]
fn typed_values_per_field() {
    let records = parse("n=7 x=2.5 ok=true s=text").unwrap();
    let r = &records[0];
    assert_eq!(r.get("n"), Some(&Value::Integer(7)));
    assert_eq!(r.get("x"), Some(&Value::Float(2.5)));
    assert_eq!(r.get("ok"), Some(&Value::Bool(true)));
    assert_eq!(r.get("s"), Some(&Value::String("text".to_string())));
}

#[test]
fn empty_input_yields_no_records() {
    assert!(parse("").unwrap().is_empty());
}

// ============================================================================
// Flag-style fields (no '=')
// ============================================================================

#[test]
fn flag_field_defaults_to_bool_true() {
    let records = parse("debug\n").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("debug"), Some(&Value::Bool(true)));
}

#[test]
fn flag_field_at_eof_without_newline() {
    let records = parse("debug").unwrap();
    assert_eq!(records[0].get("debug"), Some(&Value::Bool(true)));
}

#[test]
fn flag_field_between_valued_fields() {
    let records = parse("a=1 verbose b=2").unwrap();
    let r = &records[0];
    assert_eq!(r.get("verbose"), Some(&Value::Bool(true)));
    assert_eq!(r.get("b"), Some(&Value::Integer(2)));
}

// ============================================================================
// Quoted values
// ============================================================================

#[test]
fn quoted_value_keeps_spaces() {
    let records = parse("msg=\"hello world\"").unwrap();
    assert_eq!(
        records[0].get("msg"),
        Some(&Value::String("hello world".to_string()))
    );
}

#[test]
fn quoted_numeric_skips_inference() {
    let records = parse("a=\"123\" b=123").unwrap();
    let r = &records[0];
    assert_eq!(r.get("a"), Some(&Value::String("123".to_string())));
    assert_eq!(r.get("b"), Some(&Value::Integer(123)));
}

#[test]
fn quoted_empty_value() {
    let records = parse("msg=\"\"").unwrap();
    assert_eq!(records[0].get("msg"), Some(&Value::String(String::new())));
}

#[test]
fn escaped_quote_inside_value() {
    let records = parse(r#"msg="say \"hi\"""#).unwrap();
    assert_eq!(
        records[0].get("msg"),
        Some(&Value::String("say \"hi\"".to_string()))
    );
}

#[test]
fn newline_inside_quoted_value_is_allowed() {
    let records = parse("msg=\"two\nlines\"\nnext=1\n").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0].get("msg"),
        Some(&Value::String("two\nlines".to_string()))
    );
    assert_eq!(records[1].get("next"), Some(&Value::Integer(1)));
}

// ============================================================================
// Whitespace, blank lines, CRLF
// ============================================================================

#[test]
fn leading_and_trailing_spaces_are_skipped() {
    let records = parse("   a=1   b=2   \n").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].len(), 2);
}

#[test]
fn blank_line_runs_produce_no_empty_records() {
    let records = parse("a=1\n\n\n\nb=2\n").unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn spaces_only_line_produces_no_record() {
    let records = parse("a=1\n   \nb=2\n").unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn crlf_line_endings_are_tolerated() {
    let records = parse("a=1\r\nb=2\r\n").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get("a"), Some(&Value::Integer(1)));
    assert_eq!(records[1].get("b"), Some(&Value::Integer(2)));
}

// ============================================================================
// Duplicate keys
// ============================================================================

#[test]
fn repeated_key_last_assignment_wins() {
    let records = parse("a=1 a=2").unwrap();
    assert_eq!(records[0].len(), 1);
    assert_eq!(records[0].get("a"), Some(&Value::Integer(2)));
}

// ============================================================================
// Fatal conditions
// ============================================================================

#[test]
fn invalid_escape_fails_with_row_one() {
    let err = parse(r#"level=info msg="bad\qend""#).unwrap_err();
    assert_eq!(err.row, 1);
    assert_eq!(err.kind, ParseErrorKind::InvalidEscape('q'));
}

#[test]
fn invalid_escape_reports_the_failing_row() {
    let err = parse("a=1\nb=2\nmsg=\"oops\\x\"\n").unwrap_err();
    assert_eq!(err.row, 3);
    assert_eq!(err.kind, ParseErrorKind::InvalidEscape('x'));
}

#[test]
fn escaped_backslash_is_not_supported() {
    // Only the closing quote is escapable.
    let err = parse(r#"p="a\\b""#).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidEscape('\\'));
}

#[test]
fn unterminated_quote_is_fatal() {
    let err = parse("msg=\"never closed").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnterminatedQuote);
}

#[test]
fn integer_overflow_is_fatal() {
    let err = parse("n=99999999999999999999").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::IntegerOverflow("99999999999999999999".to_string())
    );
}

#[test]
fn failure_discards_all_prior_records() {
    // Two good lines, then a bad one: the whole document fails.
    let result = parse("a=1\nb=2\nc=\"unclosed\n");
    assert!(result.is_err());
}

#[test]
fn error_column_localizes_within_the_line() {
    let err = parse(r#"msg="bad\qend""#).unwrap_err();
    // The backslash sits at column 9; the offending 'q' right after it.
    assert_eq!(err.col, 10);
}

#[test]
fn error_display_carries_position_and_cause() {
    let err = parse(r#"msg="bad\qend""#).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("row 1"), "unexpected message: {text}");
    assert!(
        text.contains("invalid escaped character 'q'"),
        "unexpected message: {text}"
    );
}
