//! An HTML tokenizer implementing the WHATWG tokenization algorithm.
//!
//! The [`tokenizer::Tokenizer`] pulls bytes from a [`stream::ByteSource`],
//! decodes them into code points, and hands [`tokenizer::HtmlToken`]s to a
//! [`tokenizer::TokenSink`] in document order. Parse errors flow through a
//! separate [`tokenizer::ErrorSink`] and never stop tokenization.
//!
//! ```
//! use magpie::tokenize;
//! use magpie::tokenizer::HtmlToken;
//!
//! let (tokens, errors) = tokenize("<p>hi</p>").unwrap();
//!
//! assert!(matches!(tokens.last(), Some(HtmlToken::EndOfFile { .. })));
//! assert!(errors.is_empty());
//! ```

pub mod stream;
pub mod tokenizer;

pub use tokenizer::tokenize;
