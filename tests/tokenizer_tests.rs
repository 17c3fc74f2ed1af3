use indoc::indoc;

use magpie::stream::SliceSource;
use magpie::tokenize;
use magpie::tokenizer::{
    Attribute, CommentToken, DoctypeToken, HtmlToken, ParseError, ParseErrorKind, TagToken,
    TagTokenType, Tokenizer, TokenizerOptions, TokenizerState,
};

fn tokenize_with(
    text: &str,
    options: TokenizerOptions,
    last_start_tag: Option<&str>,
) -> (Vec<HtmlToken>, Vec<ParseError>) {
    let mut source = SliceSource::from(text);
    let mut tokens: Vec<HtmlToken> = Vec::new();
    let mut errors: Vec<ParseError> = Vec::new();

    let mut tokenizer = Tokenizer::with_options(&mut source, &mut tokens, &mut errors, options);
    if let Some(name) = last_start_tag {
        tokenizer.set_last_start_tag(name);
    }
    tokenizer.run().unwrap();
    drop(tokenizer);

    (tokens, errors)
}

fn characters(tokens: &[HtmlToken]) -> String {
    tokens
        .iter()
        .filter_map(|token| match token {
            HtmlToken::Character(c) => Some(*c),
            _ => None,
        })
        .collect()
}

fn start_tag(name: &str, attributes: Vec<(&str, &str)>) -> HtmlToken {
    let mut tag = TagToken::new(String::from(name));
    tag.attributes = attributes
        .into_iter()
        .map(|(name, value)| Attribute::new(String::from(name), String::from(value)))
        .collect();

    HtmlToken::TagToken(TagTokenType::StartTag(tag))
}

fn end_tag(name: &str) -> HtmlToken {
    HtmlToken::TagToken(TagTokenType::EndTag(TagToken::new(String::from(name))))
}

#[test]
fn doctype_should_tokenize_name() {
    // arrange
    let text = "<!DOCTYPE html>";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    let expected = vec![
        HtmlToken::DocType(DoctypeToken {
            name: String::from("html"),
            public_identifier: None,
            system_identifier: None,
            force_quirks: false,
        }),
        HtmlToken::EndOfFile { offset: 15 },
    ];

    assert_eq!(expected, tokens);
    assert!(errors.is_empty());
}

#[test]
fn start_tag_with_quoted_attribute_and_entity_should_tokenize() {
    // arrange
    let text = "<p class='x'>a&amp;b</p>";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    let expected = vec![
        start_tag("p", vec![("class", "x")]),
        HtmlToken::Character('a'),
        HtmlToken::Character('&'),
        HtmlToken::Character('b'),
        end_tag("p"),
        HtmlToken::EndOfFile { offset: 24 },
    ];

    assert_eq!(expected, tokens);
    assert!(errors.is_empty());
}

#[test]
fn self_closing_tag_should_set_flag() {
    // arrange
    let text = "<img/>";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    let mut tag = TagToken::new(String::from("img"));
    tag.self_closing = true;
    let expected = vec![
        HtmlToken::TagToken(TagTokenType::StartTag(tag)),
        HtmlToken::EndOfFile { offset: 6 },
    ];

    assert_eq!(expected, tokens);
    assert!(errors.is_empty());
}

#[test]
fn uppercase_tag_and_attribute_names_should_lowercase() {
    // arrange
    let text = r#"<DIV CLASS="Top">"#;

    // act
    let (tokens, _) = tokenize(text).unwrap();

    // assert: values keep their case, names do not
    assert_eq!(tokens[0], start_tag("div", vec![("class", "Top")]));
}

#[test]
fn unquoted_attribute_value_should_tokenize() {
    // arrange
    let text = "<a href=x>";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(tokens[0], start_tag("a", vec![("href", "x")]));
    assert!(errors.is_empty());
}

#[test]
fn attribute_without_value_should_be_empty() {
    // arrange
    let text = "<script defer></script>";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    let expected = vec![
        start_tag("script", vec![("defer", "")]),
        end_tag("script"),
        HtmlToken::EndOfFile { offset: 23 },
    ];

    assert_eq!(expected, tokens);
    assert!(errors.is_empty());
}

#[test]
fn duplicate_attribute_should_be_dropped_and_reported() {
    // arrange
    let text = r#"<div id="a" id="b">"#;

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(tokens[0], start_tag("div", vec![("id", "a")]));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ParseErrorKind::DuplicateAttribute);
}

#[test]
fn script_body_less_than_should_not_terminate_early() {
    // arrange
    let text = r#"<script>var s = "<"; </script>"#;

    // act
    let (tokens, _) = tokenize(text).unwrap();

    // assert
    assert_eq!(tokens[0], start_tag("script", vec![]));
    assert_eq!(characters(&tokens), r#"var s = "<"; "#);
    assert!(tokens.contains(&end_tag("script")));
    assert!(matches!(tokens.last(), Some(HtmlToken::EndOfFile { .. })));
}

#[test]
fn empty_comment_should_tokenize() {
    // arrange
    let text = "<!---->";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    let expected = vec![
        HtmlToken::Comment(CommentToken::new(String::new())),
        HtmlToken::EndOfFile { offset: 7 },
    ];

    assert_eq!(expected, tokens);
    assert!(errors.is_empty());
}

#[test]
fn abruptly_closed_empty_comment_should_report_error() {
    // arrange
    let text = "<!--->";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(
        tokens[0],
        HtmlToken::Comment(CommentToken::new(String::new()))
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ParseErrorKind::AbruptClosingOfEmptyComment);
}

#[test]
fn incorrectly_closed_comment_should_keep_data() {
    // arrange
    let text = "<!--x--!>";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(
        tokens[0],
        HtmlToken::Comment(CommentToken::new(String::from("x")))
    );
    assert_eq!(errors[0].kind, ParseErrorKind::IncorrectlyClosedComment);
}

#[test]
fn incorrectly_opened_comment_should_become_bogus_comment() {
    // arrange
    let text = "<!doc>";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(
        tokens[0],
        HtmlToken::Comment(CommentToken::new(String::from("doc")))
    );
    assert_eq!(errors[0].kind, ParseErrorKind::IncorrectlyOpenedComment);
}

#[test]
fn question_mark_should_open_bogus_comment() {
    // arrange
    let text = "<?xml version=\"1.0\"?>";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(
        tokens[0],
        HtmlToken::Comment(CommentToken::new(String::from("?xml version=\"1.0\"?")))
    );
    assert_eq!(
        errors[0].kind,
        ParseErrorKind::UnexpectedQuestionMarkInsteadOfTagName
    );
}

#[test]
fn doctype_with_public_and_system_identifiers_should_tokenize() {
    // arrange
    let text = concat!(
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD HTML 4.01//EN\" ",
        "\"http://www.w3.org/TR/html4/strict.dtd\">"
    );

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(
        tokens[0],
        HtmlToken::DocType(DoctypeToken {
            name: String::from("html"),
            public_identifier: Some(String::from("-//W3C//DTD HTML 4.01//EN")),
            system_identifier: Some(String::from("http://www.w3.org/TR/html4/strict.dtd")),
            force_quirks: false,
        })
    );
    assert!(errors.is_empty());
}

#[test]
fn doctype_with_bogus_keyword_should_force_quirks() {
    // arrange
    let text = "<!DOCTYPE html BLAH \"x\">";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    match &tokens[0] {
        HtmlToken::DocType(doctype) => {
            assert_eq!(doctype.name, "html");
            assert!(doctype.force_quirks);
        }
        token => panic!("expected doctype, got {:?}", token),
    }
    assert_eq!(
        errors[0].kind,
        ParseErrorKind::InvalidCharacterSequenceAfterDoctypeName
    );
}

#[test]
fn doctype_without_name_should_stay_empty_and_force_quirks() {
    // arrange
    let text = "<!DOCTYPE>";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(
        tokens[0],
        HtmlToken::DocType(DoctypeToken {
            name: String::new(),
            public_identifier: None,
            system_identifier: None,
            force_quirks: true,
        })
    );
    assert_eq!(errors[0].kind, ParseErrorKind::MissingDoctypeName);
}

#[test]
fn missing_end_tag_name_should_emit_nothing() {
    // arrange
    let text = "</>";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(tokens, vec![HtmlToken::EndOfFile { offset: 3 }]);
    assert_eq!(errors[0].kind, ParseErrorKind::MissingEndTagName);
}

#[test]
fn eof_inside_tag_should_drop_the_tag() {
    // arrange
    let text = "<div class=";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(tokens, vec![HtmlToken::EndOfFile { offset: 11 }]);
    assert_eq!(errors[0].kind, ParseErrorKind::EofInTag);
}

#[test]
fn lone_less_than_at_eof_should_emit_character() {
    // arrange
    let text = "a<";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    let expected = vec![
        HtmlToken::Character('a'),
        HtmlToken::Character('<'),
        HtmlToken::EndOfFile { offset: 2 },
    ];

    assert_eq!(expected, tokens);
    assert_eq!(errors[0].kind, ParseErrorKind::EofBeforeTagName);
}

#[test]
fn null_in_data_should_pass_through_with_error() {
    // arrange
    let text = "a\u{0000}b";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(characters(&tokens), "a\u{0000}b");
    assert_eq!(errors[0].kind, ParseErrorKind::UnexpectedNullCharacter);
}

#[test]
fn crlf_should_reach_the_sink_as_line_feed() {
    // arrange
    let text = "a\r\nb\rc";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(characters(&tokens), "a\nb\nc");
    assert!(errors.is_empty());
}

#[test]
fn cdata_in_foreign_content_should_emit_characters() {
    // arrange
    let options = TokenizerOptions {
        adjusted_current_node_is_foreign: true,
        ..TokenizerOptions::default()
    };

    // act
    let (tokens, errors) = tokenize_with("<![CDATA[x]]>", options, None);

    // assert
    assert_eq!(characters(&tokens), "x");
    assert!(errors.is_empty());
}

#[test]
fn cdata_in_html_content_should_become_bogus_comment() {
    // arrange
    let text = "<![CDATA[x]]>";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(
        tokens[0],
        HtmlToken::Comment(CommentToken::new(String::from("[CDATA[x]]")))
    );
    assert_eq!(errors[0].kind, ParseErrorKind::CdataInHtmlContent);
}

#[test]
fn cdata_bracket_run_should_keep_interior_brackets() {
    // arrange
    let options = TokenizerOptions {
        adjusted_current_node_is_foreign: true,
        ..TokenizerOptions::default()
    };

    // act
    let (tokens, _) = tokenize_with("<![CDATA[a]b]]]>", options, None);

    // assert
    assert_eq!(characters(&tokens), "a]b]");
}

#[test]
fn plaintext_should_emit_everything_verbatim() {
    // arrange
    let options = TokenizerOptions {
        initial_state: TokenizerState::PLAINTEXT,
        ..TokenizerOptions::default()
    };

    // act
    let (tokens, errors) = tokenize_with("a<b</plaintext>", options, None);

    // assert
    assert_eq!(characters(&tokens), "a<b</plaintext>");
    assert!(errors.is_empty());
}

#[test]
fn rcdata_should_only_close_on_appropriate_end_tag() {
    // arrange
    let options = TokenizerOptions {
        initial_state: TokenizerState::RCDATA,
        ..TokenizerOptions::default()
    };

    // act
    let (tokens, errors) = tokenize_with("x</ti</title>", options, Some("title"));

    // assert
    assert_eq!(characters(&tokens), "x</ti");
    assert!(tokens.contains(&end_tag("title")));
    assert!(errors.is_empty());
}

#[test]
fn rawtext_should_not_expand_entities() {
    // arrange
    let options = TokenizerOptions {
        initial_state: TokenizerState::RAWTEXT,
        ..TokenizerOptions::default()
    };

    // act
    let (tokens, errors) = tokenize_with("&amp;</style>", options, Some("style"));

    // assert
    assert_eq!(characters(&tokens), "&amp;");
    assert!(tokens.contains(&end_tag("style")));
    assert!(errors.is_empty());
}

#[test]
fn script_data_escaped_should_pass_markup_through() {
    // arrange
    let options = TokenizerOptions {
        initial_state: TokenizerState::ScriptData,
        ..TokenizerOptions::default()
    };

    // act
    let (tokens, errors) = tokenize_with("<!--<b>--></script>", options, Some("script"));

    // assert
    assert_eq!(characters(&tokens), "<!--<b>-->");
    assert!(tokens.contains(&end_tag("script")));
    assert!(errors.is_empty());
}

#[test]
fn script_data_double_escaped_should_swallow_inner_script_end_tag() {
    // arrange
    let options = TokenizerOptions {
        initial_state: TokenizerState::ScriptData,
        ..TokenizerOptions::default()
    };
    let body = "<!--<script>alert('<br/>')</script>x-->";
    let text = format!("{}</script>", body);

    // act
    let (tokens, errors) = tokenize_with(&text, options, Some("script"));

    // assert: the inner end tag stays character data, the outer one closes
    assert_eq!(characters(&tokens), body);
    assert_eq!(
        tokens
            .iter()
            .filter(|token| matches!(token, HtmlToken::TagToken(TagTokenType::EndTag(_))))
            .count(),
        1
    );
    assert!(errors.is_empty());
}

#[test]
fn nested_comment_should_report_error_but_continue() {
    // arrange
    let text = "<!--a<!--b-->";

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    assert_eq!(
        tokens[0],
        HtmlToken::Comment(CommentToken::new(String::from("a<!--b")))
    );
    assert_eq!(errors[0].kind, ParseErrorKind::NestedComment);
}

#[test]
fn multi_line_document_should_tokenize_in_order() {
    // arrange
    let text = indoc! {r#"
        <!DOCTYPE html>
        <html>
        <body class="main">
        <p>one</p>
        </body>
        </html>
    "#};

    // act
    let (tokens, errors) = tokenize(text).unwrap();

    // assert
    let tags: Vec<&HtmlToken> = tokens
        .iter()
        .filter(|token| matches!(token, HtmlToken::TagToken(_) | HtmlToken::DocType(_)))
        .collect();

    assert_eq!(
        tags,
        vec![
            &HtmlToken::DocType(DoctypeToken {
                name: String::from("html"),
                public_identifier: None,
                system_identifier: None,
                force_quirks: false,
            }),
            &start_tag("html", vec![]),
            &start_tag("body", vec![("class", "main")]),
            &start_tag("p", vec![]),
            &end_tag("p"),
            &end_tag("body"),
            &end_tag("html"),
        ]
    );
    assert!(errors.is_empty());
}

#[test]
fn sample_document_should_tokenize_without_faults() {
    // arrange
    let text = include_str!("samples/sample.html");

    // act
    let (tokens, _) = tokenize(text).unwrap();

    // assert
    let eof_count = tokens
        .iter()
        .filter(|token| matches!(token, HtmlToken::EndOfFile { .. }))
        .count();
    assert_eq!(eof_count, 1);
}
