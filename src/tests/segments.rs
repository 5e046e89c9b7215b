use super::*;
use pretty_assertions::assert_eq;
use ntest::test_case;

#[test]
fn no_delimiters() {
    assert_eq!(split("hello", "(", ")", false), vec![text("hello")]);
}

#[test]
fn empty_text_is_kept_whole() {
    assert_eq!(split("", "(", ")", false), vec![text("")]);
}

#[test]
fn only_left_delimiter() {
    assert_eq!(
        split("hello ( world", "(", ")", false),
        vec![text("hello "), text("( world")]
    );
}

#[test]
fn both_delimiters() {
    assert_eq!(
        split("hello ( world ) boo", "(", ")", false),
        vec![text("hello "), math(" world ", false), text(" boo")]
    );
}

#[test]
fn multi_character_delimiters() {
    assert_eq!(
        split("hello [[ world ]] boo", "[[", "]]", false),
        vec![text("hello "), math(" world ", false), text(" boo")]
    );
}

#[test]
fn splits_multiple_times() {
    assert_eq!(
        split("hello ( world ) boo ( more ) stuff", "(", ")", false),
        vec![
            text("hello "),
            math(" world ", false),
            text(" boo "),
            math(" more ", false),
            text(" stuff"),
        ]
    );
}

#[test]
fn unclosed_tail_is_left_as_text() {
    assert_eq!(
        split("hello ( world ) boo ( left", "(", ")", false),
        vec![
            text("hello "),
            math(" world ", false),
            text(" boo "),
            text("( left"),
        ]
    );
}

#[test_case("hello ( world { ) } ) boo", " world { ) } ")]
#[test_case("hello ( world { { } ) } ) boo", " world { { } ) } ")]
#[test_case("hello ( world \\) ) boo", " world \\) ")]
fn close_hidden_from_matching(input: &str, data: &str) {
    assert_eq!(
        split(input, "(", ")", false),
        vec![text("hello "), math(data, false), text(" boo")]
    );
}

#[test]
fn close_inside_braced_command_argument() {
    assert_eq!(
        split("\\(\\text{)}\\)", "\\(", "\\)", false),
        vec![text(""), math("\\text{)}", false), text("")]
    );
}

#[test]
fn escaped_left_is_still_found() {
    // Only the closing side knows about escapes.
    assert_eq!(
        split("hello \\( ( world ) boo", "(", ")", false),
        vec![text("hello \\"), math(" ( world ", false), text(" boo")]
    );
}

#[test]
fn same_left_and_right() {
    assert_eq!(
        split("hello $ world $ boo", "$", "$", false),
        vec![text("hello "), math(" world ", false), text(" boo")]
    );
    assert_eq!(
        split("a $$ b", "$", "$", false),
        vec![text("a "), math("", false), text(" b")]
    );
}

#[test]
fn display_flag_is_carried() {
    assert_eq!(
        split("hello ( world ) boo", "(", ")", true),
        vec![text("hello "), math(" world ", true), text(" boo")]
    );
}

#[test]
fn spans_at_edges_keep_empty_text() {
    assert_eq!(
        split("( x )", "(", ")", false),
        vec![text(""), math(" x ", false), text("")]
    );
    assert_eq!(
        split("(a)(b)", "(", ")", false),
        vec![text(""), math("a", false), text(""), math("b", false), text("")]
    );
}

#[test]
fn empty_delimiters_are_rejected() {
    assert!(matches!(
        split_at_delimiters(vec![text("a)")], "", ")", false),
        Err(Error::Validation(_))
    ));
    assert!(matches!(
        split_at_delimiters(vec![text("(a")], "(", "", false),
        Err(Error::Validation(_))
    ));
}

#[test]
fn more_than_one_start_segment() {
    let start = vec![
        text("hello ( world ) boo"),
        math("math", true),
        text("hello ( world ) boo"),
    ];

    assert_eq!(
        split_at_delimiters(start, "(", ")", false).unwrap(),
        vec![
            text("hello "),
            math(" world ", false),
            text(" boo"),
            math("math", true),
            text("hello "),
            math(" world ", false),
            text(" boo"),
        ]
    );
}

#[test]
fn no_splitting_inside_math() {
    let start = vec![text("hello ( world ) boo"), math("hello ( world ) boo", true)];

    assert_eq!(
        split_at_delimiters(start, "(", ")", false).unwrap(),
        vec![
            text("hello "),
            math(" world ", false),
            text(" boo"),
            math("hello ( world ) boo", true),
        ]
    );
}

#[test]
fn multibyte_text() {
    assert_eq!(
        split("π ≈ \\(3.14\\) ✓", "\\(", "\\)", false),
        vec![text("π ≈ "), math("3.14", false), text(" ✓")]
    );
}
