use magpie::tokenize;
use magpie::tokenizer::{Attribute, HtmlToken, ParseErrorKind, TagTokenType};

fn characters(tokens: &[HtmlToken]) -> String {
    tokens
        .iter()
        .filter_map(|token| match token {
            HtmlToken::Character(c) => Some(*c),
            _ => None,
        })
        .collect()
}

fn first_attribute(tokens: &[HtmlToken]) -> Attribute {
    tokens
        .iter()
        .find_map(|token| match token {
            HtmlToken::TagToken(TagTokenType::StartTag(tag)) => tag.attributes.first().cloned(),
            _ => None,
        })
        .expect("expected a start tag with attributes")
}

#[test]
fn named_reference_should_expand_in_data() {
    // arrange
    let text = "a&amp;b";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(characters(&tokens), "a&b");
    assert!(errors.is_empty());
}

#[test]
fn named_reference_without_semicolon_should_expand_with_error() {
    // arrange
    let text = "&amp";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(characters(&tokens), "&");
    assert_eq!(
        errors[0].kind,
        ParseErrorKind::MissingSemicolonAfterCharacterReference
    );
}

#[test]
fn longest_match_overrun_should_be_reprocessed() {
    // arrange: `&not` matches, `in` is consumed past it and must reappear
    let text = "&notin";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(characters(&tokens), "\u{00AC}in");
    assert_eq!(
        errors[0].kind,
        ParseErrorKind::MissingSemicolonAfterCharacterReference
    );
}

#[test]
fn two_code_point_reference_should_emit_both() {
    // arrange
    let text = "&NotEqualTilde;";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(characters(&tokens), "\u{2242}\u{0338}");
    assert!(errors.is_empty());
}

#[test]
fn unknown_reference_with_semicolon_should_report_error() {
    // arrange
    let text = "&xyz;";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(characters(&tokens), "&xyz;");
    assert_eq!(
        errors[0].kind,
        ParseErrorKind::UnknownNamedCharacterReference
    );
}

#[test]
fn bare_ampersand_should_stay_literal() {
    // arrange
    let text = "fish & chips";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(characters(&tokens), "fish & chips");
    assert!(errors.is_empty());
}

#[test]
fn query_string_should_not_expand_in_attribute() {
    // arrange: the historical rule keeps `&foo` and friends literal
    let text = r#"<a href="?x=1&foo=2">"#;

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(
        first_attribute(&tokens),
        Attribute::new(String::from("href"), String::from("?x=1&foo=2"))
    );
    assert!(errors.is_empty());
}

#[test]
fn matched_reference_before_equals_should_stay_literal_in_attribute() {
    // arrange: `&not` is a real entity but `=` follows the match
    let text = "<a href=a&not=b>";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(
        first_attribute(&tokens),
        Attribute::new(String::from("href"), String::from("a&not=b"))
    );
    assert_eq!(
        errors[0].kind,
        ParseErrorKind::UnexpectedCharacterInUnquotedAttributeValue
    );
    assert_eq!(errors.len(), 1);
}

#[test]
fn matched_reference_before_alphanumeric_should_stay_literal_in_attribute() {
    // arrange
    let text = r#"<a href="&notit;">"#;

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(
        first_attribute(&tokens),
        Attribute::new(String::from("href"), String::from("&notit;"))
    );
    assert!(errors.is_empty());
}

#[test]
fn reference_with_semicolon_should_expand_in_attribute() {
    // arrange
    let text = r#"<p title="a&#x41;b&quot;c">"#;

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(
        first_attribute(&tokens),
        Attribute::new(String::from("title"), String::from("aAb\"c"))
    );
    assert!(errors.is_empty());
}

#[test]
fn decimal_reference_should_expand() {
    // arrange
    let text = "&#9731;";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(characters(&tokens), "\u{2603}");
    assert!(errors.is_empty());
}

#[test]
fn hexadecimal_reference_should_expand_outside_the_bmp() {
    // arrange
    let text = "&#x1D538;";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(characters(&tokens), "\u{1D538}");
    assert!(errors.is_empty());
}

#[test]
fn c1_control_reference_should_remap_to_windows_1252() {
    // arrange
    let text = "&#128;";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(characters(&tokens), "\u{20AC}");
    assert_eq!(errors[0].kind, ParseErrorKind::ControlCharacterReference);
}

#[test]
fn null_reference_should_become_replacement_character() {
    // arrange
    let text = "&#0;";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(characters(&tokens), "\u{FFFD}");
    assert_eq!(errors[0].kind, ParseErrorKind::NullCharacterReference);
}

#[test]
fn surrogate_reference_should_become_replacement_character() {
    // arrange
    let text = "&#xD800;";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(characters(&tokens), "\u{FFFD}");
    assert_eq!(errors[0].kind, ParseErrorKind::SurrogateCharacterReference);
}

#[test]
fn out_of_range_reference_should_become_replacement_character() {
    // arrange
    let text = "&#x110000;";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(characters(&tokens), "\u{FFFD}");
    assert_eq!(
        errors[0].kind,
        ParseErrorKind::CharacterReferenceOutsideUnicodeRange
    );
}

#[test]
fn overlong_digit_run_should_saturate_out_of_range() {
    // arrange
    let text = "&#99999999999999999999999;";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(characters(&tokens), "\u{FFFD}");
    assert_eq!(
        errors[0].kind,
        ParseErrorKind::CharacterReferenceOutsideUnicodeRange
    );
}

#[test]
fn noncharacter_reference_should_keep_its_value() {
    // arrange
    let text = "&#xFDD0;";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(characters(&tokens), "\u{FDD0}");
    assert_eq!(
        errors[0].kind,
        ParseErrorKind::NoncharacterCharacterReference
    );
}

#[test]
fn numeric_reference_without_digits_should_flush_raw() {
    // arrange
    let text = "&#x;";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(characters(&tokens), "&#x;");
    assert_eq!(
        errors[0].kind,
        ParseErrorKind::AbsenceOfDigitsInNumericCharacterReference
    );
}

#[test]
fn numeric_reference_without_semicolon_should_expand_with_error() {
    // arrange
    let text = "&#65 ";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(characters(&tokens), "A ");
    assert_eq!(
        errors[0].kind,
        ParseErrorKind::MissingSemicolonAfterCharacterReference
    );
}

#[test]
fn reference_should_expand_inside_rcdata() {
    // arrange
    let mut source = magpie::stream::SliceSource::from("&lt;b&gt;</title>");
    let mut tokens: Vec<HtmlToken> = Vec::new();
    let mut errors: Vec<magpie::tokenizer::ParseError> = Vec::new();

    let options = magpie::tokenizer::TokenizerOptions {
        initial_state: magpie::tokenizer::TokenizerState::RCDATA,
        ..Default::default()
    };

    // act
    let mut tokenizer =
        magpie::tokenizer::Tokenizer::with_options(&mut source, &mut tokens, &mut errors, options);
    tokenizer.set_last_start_tag("title");
    tokenizer.run().unwrap();
    drop(tokenizer);

    // assert
    assert_eq!(characters(&tokens), "<b>");
    assert!(errors.is_empty());
}
