//! The byte-to-code-point input stream.
//!
//! <https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream>

use thiserror::Error;

use crate::tokenizer::{ErrorSink, ParseErrorKind};

const CARRIAGE_RETURN: u8 = 0x0D;
const LINE_FEED: u8 = 0x0A;

/// A sequential source of bytes feeding the tokenizer.
///
/// `Ok(None)` is end-of-stream. The stream is drained exactly once; after
/// `Ok(None)` the tokenizer never reads again.
pub trait ByteSource {
    fn read_byte(&mut self) -> Result<Option<u8>, ByteSourceFault>;
}

/// A fatal failure of the underlying byte source. Unlike parse errors this
/// halts tokenization.
#[derive(Debug, Error)]
#[error("byte source failure: {message}")]
pub struct ByteSourceFault {
    pub message: String,
}

impl ByteSourceFault {
    pub fn new(message: &str) -> Self {
        ByteSourceFault {
            message: message.to_string(),
        }
    }
}

/// A [`ByteSource`] over an in-memory slice.
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    index: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        SliceSource { bytes, index: 0 }
    }
}

impl<'a> From<&'a str> for SliceSource<'a> {
    fn from(text: &'a str) -> Self {
        SliceSource::new(text.as_bytes())
    }
}

impl ByteSource for SliceSource<'_> {
    fn read_byte(&mut self) -> Result<Option<u8>, ByteSourceFault> {
        match self.bytes.get(self.index) {
            Some(byte) => {
                self.index += 1;
                Ok(Some(*byte))
            }
            None => Ok(None),
        }
    }
}

/// One decoded item of the input stream.
///
/// `code_point` is `None` once the source is exhausted; `offset` is the
/// 1-based count of source bytes consumed up to and including this item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputItem {
    pub code_point: Option<char>,
    pub offset: u64,
}

impl InputItem {
    pub(crate) fn start() -> Self {
        InputItem {
            code_point: None,
            offset: 0,
        }
    }
}

/// Decodes a [`ByteSource`] into Unicode code points, normalizing CR and
/// CRLF to LF along the way.
pub struct InputStream<'a> {
    source: &'a mut dyn ByteSource,
    offset: u64,
    last_was_cr: bool,
    rewound: Option<u8>,
    drained: bool,
}

impl<'a> InputStream<'a> {
    pub fn new(source: &'a mut dyn ByteSource) -> Self {
        InputStream {
            source,
            offset: 0,
            last_was_cr: false,
            rewound: None,
            drained: false,
        }
    }

    /// Returns the next code point, or an EOF item after the source is
    /// drained. EOF items repeat idempotently.
    ///
    /// Invalid UTF-8 is reported to `errors` and replaced by U+FFFD; only a
    /// failing byte source is fatal.
    pub fn next(&mut self, errors: &mut dyn ErrorSink) -> Result<InputItem, ByteSourceFault> {
        loop {
            let byte = match self.read_byte()? {
                Some(byte) => byte,
                None => return Ok(self.end()),
            };

            if byte == CARRIAGE_RETURN {
                self.last_was_cr = true;
                return Ok(self.item(LINE_FEED as char));
            }

            let swallow = self.last_was_cr && byte == LINE_FEED;
            self.last_was_cr = false;
            if swallow {
                continue;
            }

            if byte < 0x80 {
                return Ok(self.item(byte as char));
            }

            return self.decode_multibyte(byte, errors);
        }
    }

    fn decode_multibyte(
        &mut self,
        lead: u8,
        errors: &mut dyn ErrorSink,
    ) -> Result<InputItem, ByteSourceFault> {
        let (continuations, first_bits) = match lead {
            0xC2..=0xDF => (1, u32::from(lead & 0x1F)),
            0xE0..=0xEF => (2, u32::from(lead & 0x0F)),
            0xF0..=0xF4 => (3, u32::from(lead & 0x07)),
            _ => return Ok(self.replace_invalid(errors)),
        };

        let mut code_point = first_bits;
        for index in 0..continuations {
            let byte = match self.read_byte()? {
                Some(byte) => byte,
                None => return Ok(self.replace_invalid(errors)),
            };

            if !continuation_in_range(lead, byte, index) {
                // resynchronize on the offending byte
                self.rewound = Some(byte);
                self.offset -= 1;
                return Ok(self.replace_invalid(errors));
            }

            code_point = (code_point << 6) | u32::from(byte & 0x3F);
        }

        let decoded = char::from_u32(code_point).unwrap_or(char::REPLACEMENT_CHARACTER);
        Ok(self.item(decoded))
    }

    fn replace_invalid(&mut self, errors: &mut dyn ErrorSink) -> InputItem {
        log::warn!("invalid utf-8 sequence ending at byte {}", self.offset);
        errors.accept_error(ParseErrorKind::InvalidUtf8, self.offset);
        self.item(char::REPLACEMENT_CHARACTER)
    }

    fn read_byte(&mut self) -> Result<Option<u8>, ByteSourceFault> {
        if let Some(byte) = self.rewound.take() {
            self.offset += 1;
            return Ok(Some(byte));
        }

        if self.drained {
            return Ok(None);
        }

        match self.source.read_byte()? {
            Some(byte) => {
                self.offset += 1;
                Ok(Some(byte))
            }
            None => {
                self.drained = true;
                Ok(None)
            }
        }
    }

    fn item(&self, code_point: char) -> InputItem {
        InputItem {
            code_point: Some(code_point),
            offset: self.offset,
        }
    }

    fn end(&self) -> InputItem {
        InputItem {
            code_point: None,
            offset: self.offset,
        }
    }
}

/// The second byte of E0/ED/F0/F4 sequences has a narrowed range that rules
/// out overlong encodings and surrogates.
fn continuation_in_range(lead: u8, byte: u8, index: usize) -> bool {
    if index == 0 {
        return match lead {
            0xE0 => (0xA0..=0xBF).contains(&byte),
            0xED => (0x80..=0x9F).contains(&byte),
            0xF0 => (0x90..=0xBF).contains(&byte),
            0xF4 => (0x80..=0x8F).contains(&byte),
            _ => (0x80..=0xBF).contains(&byte),
        };
    }

    (0x80..=0xBF).contains(&byte)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::ParseError;

    fn drain(bytes: &[u8]) -> (Vec<InputItem>, Vec<ParseError>) {
        let mut source = SliceSource::new(bytes);
        let mut stream = InputStream::new(&mut source);
        let mut errors: Vec<ParseError> = Vec::new();

        let mut items = Vec::new();
        loop {
            let item = stream.next(&mut errors).unwrap();
            let done = item.code_point.is_none();
            items.push(item);
            if done {
                break;
            }
        }

        (items, errors)
    }

    fn code_points(items: &[InputItem]) -> String {
        items.iter().filter_map(|item| item.code_point).collect()
    }

    #[test]
    fn next_should_normalize_every_newline_flavor() {
        // arrange
        let bytes = b"a\rb\r\nc\nd";

        // act
        let (items, errors) = drain(bytes);

        // assert
        assert_eq!(code_points(&items), "a\nb\nc\nd");
        assert!(errors.is_empty());
    }

    #[test]
    fn next_should_report_one_based_offsets() {
        // arrange
        let bytes = b"ab";

        // act
        let (items, _) = drain(bytes);

        // assert
        assert_eq!(items[0].offset, 1);
        assert_eq!(items[1].offset, 2);
    }

    #[test]
    fn swallowed_line_feed_should_count_into_the_next_item() {
        // arrange
        let bytes = b"\r\nx";

        // act
        let (items, _) = drain(bytes);

        // assert
        assert_eq!(items[0], InputItem { code_point: Some('\n'), offset: 1 });
        assert_eq!(items[1], InputItem { code_point: Some('x'), offset: 3 });
    }

    #[test]
    fn next_should_decode_multibyte_sequences() {
        // arrange
        let bytes = "☃𝔸é".as_bytes();

        // act
        let (items, errors) = drain(bytes);

        // assert
        assert_eq!(code_points(&items), "☃𝔸é");
        assert_eq!(items.last().unwrap().offset, bytes.len() as u64);
        assert!(errors.is_empty());
    }

    #[test]
    fn invalid_sequences_should_become_replacement_characters() {
        // arrange: a stray continuation byte, then a truncated 3-byte lead
        let bytes = &[b'a', 0x80, b'b', 0xE2, b'c'][..];

        // act
        let (items, errors) = drain(bytes);

        // assert
        assert_eq!(code_points(&items), "a\u{FFFD}b\u{FFFD}c");
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|error| error.kind == ParseErrorKind::InvalidUtf8));
    }

    #[test]
    fn surrogate_encodings_should_be_rejected() {
        // arrange: UTF-8 encoding of U+D800
        let bytes = &[0xED, 0xA0, 0x80][..];

        // act
        let (items, errors) = drain(bytes);

        // assert
        assert!(code_points(&items).starts_with('\u{FFFD}'));
        assert!(!errors.is_empty());
    }

    #[test]
    fn eof_should_repeat_idempotently() {
        // arrange
        let mut source = SliceSource::new(b"a");
        let mut stream = InputStream::new(&mut source);
        let mut errors: Vec<ParseError> = Vec::new();

        // act
        let _ = stream.next(&mut errors).unwrap();
        let first_eof = stream.next(&mut errors).unwrap();
        let second_eof = stream.next(&mut errors).unwrap();

        // assert
        assert_eq!(first_eof, second_eof);
        assert!(first_eof.code_point.is_none());
        assert_eq!(first_eof.offset, 1);
    }
}
