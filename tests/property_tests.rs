use itertools::Itertools;
use proptest::prelude::*;

use magpie::stream::SliceSource;
use magpie::tokenize;
use magpie::tokenizer::{HtmlToken, ParseError, Tokenizer};

fn tokenize_bytes(bytes: &[u8]) -> (Vec<HtmlToken>, Vec<ParseError>) {
    let mut source = SliceSource::new(bytes);
    let mut tokens: Vec<HtmlToken> = Vec::new();
    let mut errors: Vec<ParseError> = Vec::new();

    Tokenizer::new(&mut source, &mut tokens, &mut errors)
        .run()
        .expect("slice sources and vec sinks never fault");

    (tokens, errors)
}

proptest! {
    #[test]
    fn token_stream_ends_with_exactly_one_end_of_file(input in ".*") {
        let (tokens, _) = tokenize(&input).unwrap();

        let eof_count = tokens
            .iter()
            .filter(|token| matches!(token, HtmlToken::EndOfFile { .. }))
            .count();

        prop_assert_eq!(eof_count, 1);
        let last_is_eof = matches!(tokens.last(), Some(HtmlToken::EndOfFile { .. }));
        prop_assert!(last_is_eof);
    }

    #[test]
    fn arbitrary_bytes_never_fault_and_terminate_once(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let (tokens, _) = tokenize_bytes(&bytes);

        let eof_count = tokens
            .iter()
            .filter(|token| matches!(token, HtmlToken::EndOfFile { .. }))
            .count();

        prop_assert_eq!(eof_count, 1);
    }

    #[test]
    fn attribute_names_are_pairwise_distinct(input in ".*") {
        let (tokens, _) = tokenize(&input).unwrap();

        for token in &tokens {
            if let HtmlToken::TagToken(tag) = token {
                let names: Vec<&String> =
                    tag.attributes().iter().map(|attribute| &attribute.name).collect();

                prop_assert_eq!(names.iter().unique().count(), names.len());
            }
        }
    }

    #[test]
    fn tag_names_are_lowercase_for_ascii_sources(name in "[a-zA-Z]{1,8}") {
        let input = format!("<{}></{}>", name, name);
        let (tokens, _) = tokenize(&input).unwrap();

        for token in &tokens {
            if let HtmlToken::TagToken(tag) = token {
                prop_assert_eq!(tag.tag_name(), name.to_ascii_lowercase());
            }
        }
    }

    #[test]
    fn tag_tokens_always_carry_a_name(input in ".*") {
        let (tokens, _) = tokenize(&input).unwrap();

        for token in &tokens {
            if let HtmlToken::TagToken(tag) = token {
                prop_assert!(!tag.tag_name().is_empty());
            }
        }
    }

    #[test]
    fn greater_than_in_data_positions_survives(text in "[a-z>]{0,32}") {
        let (tokens, _) = tokenize(&text).unwrap();

        let characters: String = tokens
            .iter()
            .filter_map(|token| match token {
                HtmlToken::Character(c) => Some(*c),
                _ => None,
            })
            .collect();

        prop_assert_eq!(characters, text);
    }

    #[test]
    fn newlines_normalize_to_line_feeds(runs in proptest::collection::vec(prop_oneof![Just("\r"), Just("\n"), Just("\r\n"), Just("a")], 0..24)) {
        let input: String = runs.concat();
        let (tokens, _) = tokenize(&input).unwrap();

        let characters: String = tokens
            .iter()
            .filter_map(|token| match token {
                HtmlToken::Character(c) => Some(*c),
                _ => None,
            })
            .collect();

        let expected: String = input.replace("\r\n", "\n").replace('\r', "\n");
        prop_assert_eq!(characters, expected);
    }
}
