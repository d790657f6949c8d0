use std::sync::OnceLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstLetter {
    Keep,
    Capitalize,
    Lowercase,
}

/// Turns a raw storyboard identifier into a bare Swift identifier.
///
/// Every non-alphanumeric character is dropped, then only the first
/// character is recased according to `first_letter`. When the result equals
/// `do_not_shadow` an underscore is appended so an enum case cannot shadow
/// the type it describes.
pub fn swift_identifier(
    raw: &str,
    first_letter: FirstLetter,
    do_not_shadow: Option<&str>,
) -> String {
    let stripped = non_alphanumeric_regex().replace_all(raw, "");

    let mut chars = stripped.chars();
    let mut identifier = match (first_letter, chars.next()) {
        (_, None) => String::new(),
        (FirstLetter::Keep, Some(first)) => first.to_string(),
        (FirstLetter::Capitalize, Some(first)) => first.to_uppercase().collect(),
        (FirstLetter::Lowercase, Some(first)) => first.to_lowercase().collect(),
    };
    identifier.push_str(chars.as_str());

    if do_not_shadow == Some(identifier.as_str()) {
        identifier.push('_');
    }
    identifier
}

/// Quotes `value` as a Swift string literal.
pub fn swift_string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => literal.push_str("\\\\"),
            '"' => literal.push_str("\\\""),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            ch if ch.is_control() => literal.push_str(&format!("\\u{{{:x}}}", ch as u32)),
            ch => literal.push(ch),
        }
    }
    literal.push('"');
    literal
}

fn non_alphanumeric_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^\p{L}\p{M}\p{N}]+").expect("identifier regex"))
}

#[cfg(test)]
mod identifier_tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_whitespace() {
        assert_eq!(
            swift_identifier("show-detail view!", FirstLetter::Keep, None),
            "showdetailview"
        );
        assert_eq!(swift_identifier("a_b.c", FirstLetter::Keep, None), "abc");
    }

    #[test]
    fn keeps_unicode_letters_and_digits() {
        assert_eq!(swift_identifier("über 2", FirstLetter::Keep, None), "über2");
        assert_eq!(
            swift_identifier("über", FirstLetter::Capitalize, None),
            "Über"
        );
    }

    #[test]
    fn only_the_first_letter_is_recased() {
        assert_eq!(
            swift_identifier("toBarScreen", FirstLetter::Capitalize, None),
            "ToBarScreen"
        );
        assert_eq!(
            swift_identifier("ShowDetail", FirstLetter::Lowercase, None),
            "showDetail"
        );
        assert_eq!(
            swift_identifier("-URLList", FirstLetter::Lowercase, None),
            "uRLList"
        );
    }

    #[test]
    fn appends_underscore_when_shadowing() {
        assert_eq!(
            swift_identifier("Cell", FirstLetter::Keep, Some("Cell")),
            "Cell_"
        );
        assert_eq!(
            swift_identifier("My Cell", FirstLetter::Keep, Some("MyCell")),
            "MyCell_"
        );
        assert_eq!(
            swift_identifier("Cell", FirstLetter::Keep, Some("OtherCell")),
            "Cell"
        );
    }

    #[test]
    fn empty_and_symbol_only_inputs_produce_empty_identifiers() {
        assert_eq!(swift_identifier("", FirstLetter::Capitalize, None), "");
        assert_eq!(swift_identifier("--", FirstLetter::Lowercase, None), "");
    }

    #[test]
    fn string_literals_escape_quotes_and_backslashes() {
        assert_eq!(swift_string_literal("foo"), r#""foo""#);
        assert_eq!(swift_string_literal(r#"a"b"#), r#""a\"b""#);
        assert_eq!(swift_string_literal(r"x\y"), r#""x\\y""#);
        assert_eq!(swift_string_literal("line\nbreak\ttab"), r#""line\nbreak\ttab""#);
        assert_eq!(swift_string_literal("bell\u{7}"), r#""bell\u{7}""#);
    }

    #[test]
    fn synthesis_is_idempotent_for_valid_identifiers() {
        for raw in ["fooBar", "Main", "cell42", "ÉcranPrincipal"] {
            for policy in [FirstLetter::Keep, FirstLetter::Capitalize, FirstLetter::Lowercase] {
                let once = swift_identifier(raw, policy, None);
                assert_eq!(swift_identifier(&once, policy, None), once);
            }
        }
    }
}
