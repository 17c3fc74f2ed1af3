//! The HTML tokenizer state machine.
//!
//! <https://html.spec.whatwg.org/multipage/parsing.html#tokenization>

use std::collections::VecDeque;

use thiserror::Error;

use crate::stream::{ByteSource, ByteSourceFault, InputItem, InputStream, SliceSource};

pub(crate) mod chars;
mod named_character_references;
mod state_impls;

use named_character_references::NamedReference;

/// A token handed to the [`TokenSink`], in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlToken {
    DocType(DoctypeToken),
    TagToken(TagTokenType),
    Comment(CommentToken),
    Character(char),
    EndOfFile { offset: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctypeToken {
    pub name: String,
    pub public_identifier: Option<String>,
    pub system_identifier: Option<String>,
    pub force_quirks: bool,
}

impl DoctypeToken {
    pub fn new() -> Self {
        DoctypeToken {
            name: String::new(),
            public_identifier: None,
            system_identifier: None,
            force_quirks: false,
        }
    }
}

impl Default for DoctypeToken {
    fn default() -> Self {
        DoctypeToken::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagTokenType {
    StartTag(TagToken),
    EndTag(TagToken),
}

impl TagTokenType {
    pub fn tag_name(&self) -> &str {
        match self {
            TagTokenType::StartTag(tag) => &tag.tag_name,
            TagTokenType::EndTag(tag) => &tag.tag_name,
        }
    }

    pub fn tag_name_mut(&mut self) -> &mut String {
        match self {
            TagTokenType::StartTag(tag) => &mut tag.tag_name,
            TagTokenType::EndTag(tag) => &mut tag.tag_name,
        }
    }

    pub fn attributes(&self) -> &Vec<Attribute> {
        match self {
            TagTokenType::StartTag(tag) => &tag.attributes,
            TagTokenType::EndTag(tag) => &tag.attributes,
        }
    }

    pub fn attributes_mut(&mut self) -> &mut Vec<Attribute> {
        match self {
            TagTokenType::StartTag(tag) => &mut tag.attributes,
            TagTokenType::EndTag(tag) => &mut tag.attributes,
        }
    }

    pub fn self_closing(&self) -> bool {
        match self {
            TagTokenType::StartTag(tag) => tag.self_closing,
            TagTokenType::EndTag(tag) => tag.self_closing,
        }
    }

    pub fn self_closing_mut(&mut self) -> &mut bool {
        match self {
            TagTokenType::StartTag(tag) => &mut tag.self_closing,
            TagTokenType::EndTag(tag) => &mut tag.self_closing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToken {
    pub tag_name: String,
    pub self_closing: bool,
    pub attributes: Vec<Attribute>,
}

impl TagToken {
    pub fn new(tag_name: String) -> Self {
        TagToken {
            tag_name,
            self_closing: false,
            attributes: Vec::new(),
        }
    }
}

/// A completed attribute. Names are lowercased while they are built; a tag
/// never carries two attributes with the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: String, value: String) -> Self {
        Attribute { name, value }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentToken {
    pub data: String,
}

impl CommentToken {
    pub fn new(data: String) -> Self {
        CommentToken { data }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenizerState {
    Data,
    RCDATA,
    RAWTEXT,
    ScriptData,
    PLAINTEXT,
    TagOpen,
    EndTagOpen,
    TagName,
    RCDATALessThanSign,
    RCDATAEndTagOpen,
    RCDATAEndTagName,
    RAWTEXTLessThanSign,
    RAWTEXTEndTagOpen,
    RAWTEXTEndTagName,
    ScriptDataLessThanSign,
    ScriptDataEndTagOpen,
    ScriptDataEndTagName,
    ScriptDataEscapeStart,
    ScriptDataEscapeStartDash,
    ScriptDataEscaped,
    ScriptDataEscapedDash,
    ScriptDataEscapedDashDash,
    ScriptDataEscapedLessThanSign,
    ScriptDataEscapedEndTagOpen,
    ScriptDataEscapedEndTagName,
    ScriptDataDoubleEscapeStart,
    ScriptDataDoubleEscaped,
    ScriptDataDoubleEscapedDash,
    ScriptDataDoubleEscapedDashDash,
    ScriptDataDoubleEscapedLessThanSign,
    ScriptDataDoubleEscapeEnd,
    BeforeAttributeName,
    AttributeName,
    AfterAttributeName,
    BeforeAttributeValue,
    AttributeValueDoubleQuoted,
    AttributeValueSingleQuoted,
    AttributeValueUnquoted,
    AfterAttributeValueQuoted,
    SelfClosingStartTag,
    BogusComment,
    MarkupDeclarationOpen,
    CommentStart,
    CommentStartDash,
    Comment,
    CommentLessThanSign,
    CommentLessThanSignBang,
    CommentLessThanSignBangDash,
    CommentLessThanSignBangDashDash,
    CommentEndDash,
    CommentEnd,
    CommentEndBang,
    DOCTYPE,
    BeforeDOCTYPEName,
    DOCTYPEName,
    AfterDOCTYPEName,
    AfterDOCTYPEPublicKeyword,
    BeforeDOCTYPEPublicIdentifier,
    DOCTYPEPublicIdentifierDoubleQuoted,
    DOCTYPEPublicIdentifierSingleQuoted,
    AfterDOCTYPEPublicIdentifier,
    BetweenDOCTYPEPublicAndSystemIdentifiers,
    AfterDOCTYPESystemKeyword,
    BeforeDOCTYPESystemIdentifier,
    DOCTYPESystemIdentifierDoubleQuoted,
    DOCTYPESystemIdentifierSingleQuoted,
    AfterDOCTYPESystemIdentifier,
    BogusDOCTYPE,
    CDATASection,
    CDATASectionBracket,
    CDATASectionEnd,
    CharacterReference,
    NamedCharacterReference,
    AmbiguousAmpersand,
    NumericCharacterReference,
    HexadecimalCharacterReferenceStart,
    DecimalCharacterReferenceStart,
    HexadecimalCharacterReference,
    DecimalCharacterReference,
    NumericCharacterReferenceEnd,
}

/// A recoverable parse error. Reported with the source offset it was
/// detected at; tokenization always continues.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("abrupt closing of empty comment")]
    AbruptClosingOfEmptyComment,
    #[error("abrupt doctype public identifier")]
    AbruptDoctypePublicIdentifier,
    #[error("abrupt doctype system identifier")]
    AbruptDoctypeSystemIdentifier,
    #[error("absence of digits in numeric character reference")]
    AbsenceOfDigitsInNumericCharacterReference,
    #[error("CDATA in html content")]
    CdataInHtmlContent,
    #[error("character reference outside unicode range")]
    CharacterReferenceOutsideUnicodeRange,
    #[error("control character reference")]
    ControlCharacterReference,
    #[error("duplicate attribute")]
    DuplicateAttribute,
    #[error("eof before tag name")]
    EofBeforeTagName,
    #[error("eof in CDATA")]
    EofInCdata,
    #[error("eof in comment")]
    EofInComment,
    #[error("eof in doctype")]
    EofInDoctype,
    #[error("eof in script html comment like text")]
    EofInScriptHtmlCommentLikeText,
    #[error("eof in tag")]
    EofInTag,
    #[error("incorrectly closed comment")]
    IncorrectlyClosedComment,
    #[error("incorrectly opened comment")]
    IncorrectlyOpenedComment,
    #[error("invalid character sequence after doctype name")]
    InvalidCharacterSequenceAfterDoctypeName,
    #[error("invalid first character of tag name")]
    InvalidFirstCharacterOfTagName,
    #[error("invalid utf-8 in input stream")]
    InvalidUtf8,
    #[error("missing attribute value")]
    MissingAttributeValue,
    #[error("missing doctype name")]
    MissingDoctypeName,
    #[error("missing doctype public identifier")]
    MissingDoctypePublicIdentifier,
    #[error("missing doctype system identifier")]
    MissingDoctypeSystemIdentifier,
    #[error("missing end tag name")]
    MissingEndTagName,
    #[error("missing quote before doctype public identifier")]
    MissingQuoteBeforeDoctypePublicIdentifier,
    #[error("missing quote before doctype system identifier")]
    MissingQuoteBeforeDoctypeSystemIdentifier,
    #[error("missing semicolon after character reference")]
    MissingSemicolonAfterCharacterReference,
    #[error("missing whitespace after doctype public keyword")]
    MissingWhitespaceAfterDoctypePublicKeyword,
    #[error("missing whitespace after doctype system keyword")]
    MissingWhitespaceAfterDoctypeSystemKeyword,
    #[error("missing whitespace before doctype name")]
    MissingWhitespaceBeforeDoctypeName,
    #[error("missing whitespace between attributes")]
    MissingWhitespaceBetweenAttributes,
    #[error("missing whitespace between doctype public and system identifiers")]
    MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
    #[error("nested comment")]
    NestedComment,
    #[error("noncharacter character reference")]
    NoncharacterCharacterReference,
    #[error("null character reference")]
    NullCharacterReference,
    #[error("surrogate character reference")]
    SurrogateCharacterReference,
    #[error("unexpected character after doctype system identifier")]
    UnexpectedCharacterAfterDoctypeSystemIdentifier,
    #[error("unexpected character in attribute name")]
    UnexpectedCharacterInAttributeName,
    #[error("unexpected character in unquoted attribute value")]
    UnexpectedCharacterInUnquotedAttributeValue,
    #[error("unexpected equals sign before attribute name")]
    UnexpectedEqualsSignBeforeAttributeName,
    #[error("unexpected null character")]
    UnexpectedNullCharacter,
    #[error("unexpected question mark instead of tag name")]
    UnexpectedQuestionMarkInsteadOfTagName,
    #[error("unexpected solidus in tag")]
    UnexpectedSolidusInTag,
    #[error("unknown named character reference")]
    UnknownNamedCharacterReference,
}

/// A parse error together with the offset it was detected at.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("{kind} at byte {offset}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub offset: u64,
}

/// Returned by a [`TokenSink`] to halt tokenization.
#[derive(Debug, Error)]
#[error("token sink rejection: {message}")]
pub struct SinkRejection {
    pub message: String,
}

impl SinkRejection {
    pub fn new(message: &str) -> Self {
        SinkRejection {
            message: message.to_string(),
        }
    }
}

/// A fatal tokenizer failure. Parse errors never surface here; only the byte
/// source, a rejecting sink, or a corrupted tokenizer do.
#[derive(Debug, Error)]
pub enum TokenizerFault {
    #[error(transparent)]
    ByteSource(#[from] ByteSourceFault),
    #[error(transparent)]
    SinkRejected(#[from] SinkRejection),
    #[error("tokenizer invariant violated: {0}")]
    Invariant(&'static str),
}

/// Receives tokens in emission order. An `Err` halts the tokenizer.
pub trait TokenSink {
    fn accept(&mut self, token: HtmlToken) -> Result<(), SinkRejection>;
}

impl TokenSink for Vec<HtmlToken> {
    fn accept(&mut self, token: HtmlToken) -> Result<(), SinkRejection> {
        self.push(token);
        Ok(())
    }
}

/// Receives parse errors in detection order. Never fatal.
pub trait ErrorSink {
    fn accept_error(&mut self, kind: ParseErrorKind, offset: u64);
}

impl ErrorSink for Vec<ParseError> {
    fn accept_error(&mut self, kind: ParseErrorKind, offset: u64) {
        self.push(ParseError { kind, offset });
    }
}

#[derive(Debug, Copy, Clone)]
pub struct TokenizerOptions {
    pub initial_state: TokenizerState,
    /// Whether the adjusted current node is outside the HTML namespace;
    /// controls `<![CDATA[` handling.
    pub adjusted_current_node_is_foreign: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        TokenizerOptions {
            initial_state: TokenizerState::Data,
            adjusted_current_node_is_foreign: false,
        }
    }
}

pub struct Tokenizer<'a> {
    state: TokenizerState,
    return_state: Option<TokenizerState>,
    input: InputStream<'a>,
    token_sink: &'a mut dyn TokenSink,
    error_sink: &'a mut dyn ErrorSink,
    replay: VecDeque<InputItem>,
    current_item: InputItem,
    temporary_buffer: Vec<char>,
    open_markup: Vec<InputItem>,
    doctype_keyword: Vec<InputItem>,
    comment_token: Option<CommentToken>,
    doctype_token: Option<DoctypeToken>,
    tag_token: Option<TagTokenType>,
    current_attribute: Option<Attribute>,
    current_attribute_is_duplicate: bool,
    character_reference_code: u64,
    last_entity: Option<&'static NamedReference>,
    reference_overrun: Vec<InputItem>,
    last_start_tag: Option<String>,
    adjusted_current_node_is_foreign: bool,
    eof_emitted: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(
        source: &'a mut dyn ByteSource,
        token_sink: &'a mut dyn TokenSink,
        error_sink: &'a mut dyn ErrorSink,
    ) -> Self {
        Tokenizer::with_options(source, token_sink, error_sink, TokenizerOptions::default())
    }

    pub fn with_options(
        source: &'a mut dyn ByteSource,
        token_sink: &'a mut dyn TokenSink,
        error_sink: &'a mut dyn ErrorSink,
        options: TokenizerOptions,
    ) -> Self {
        Tokenizer {
            state: options.initial_state,
            return_state: None,
            input: InputStream::new(source),
            token_sink,
            error_sink,
            replay: VecDeque::new(),
            current_item: InputItem::start(),
            temporary_buffer: Vec::new(),
            open_markup: Vec::new(),
            doctype_keyword: Vec::new(),
            comment_token: None,
            doctype_token: None,
            tag_token: None,
            current_attribute: None,
            current_attribute_is_duplicate: false,
            character_reference_code: 0,
            last_entity: None,
            reference_overrun: Vec::new(),
            last_start_tag: None,
            adjusted_current_node_is_foreign: options.adjusted_current_node_is_foreign,
            eof_emitted: false,
        }
    }

    /// Switches the machine to `state` before the next input item is
    /// consumed. Tree builders use this for RCDATA, RAWTEXT, script data and
    /// PLAINTEXT elements.
    pub fn set_state(&mut self, state: TokenizerState) {
        self.state = state;
    }

    pub fn state(&self) -> TokenizerState {
        self.state
    }

    /// Seeds the appropriate-end-tag predicate. The fragment parsing
    /// algorithm requires this when tokenization starts inside an RCDATA,
    /// RAWTEXT or script element.
    pub fn set_last_start_tag(&mut self, name: &str) {
        self.last_start_tag = Some(name.to_string());
    }

    /// Drives the machine until the end-of-file token has been emitted or a
    /// fatal fault occurs.
    pub fn run(&mut self) -> Result<(), TokenizerFault> {
        while !self.is_terminated() {
            self.step()?;
        }

        Ok(())
    }

    pub fn is_terminated(&self) -> bool {
        self.eof_emitted
    }

    /// Performs one dispatch of the state machine: consumes at most one
    /// input item and emits zero or more tokens.
    pub fn step(&mut self) -> Result<(), TokenizerFault> {
        if self.eof_emitted {
            return Ok(());
        }

        match self.state {
            TokenizerState::Data => self.data_state(),
            TokenizerState::RCDATA => self.rcdata_state(),
            TokenizerState::RAWTEXT => self.rawtext_state(),
            TokenizerState::ScriptData => self.script_data_state(),
            TokenizerState::PLAINTEXT => self.plaintext_state(),
            TokenizerState::TagOpen => self.tag_open_state(),
            TokenizerState::EndTagOpen => self.end_tag_open_state(),
            TokenizerState::TagName => self.tag_name_state(),
            TokenizerState::RCDATALessThanSign => self.rcdata_less_than_sign_state(),
            TokenizerState::RCDATAEndTagOpen => self.rcdata_end_tag_open_state(),
            TokenizerState::RCDATAEndTagName => self.rcdata_end_tag_name_state(),
            TokenizerState::RAWTEXTLessThanSign => self.rawtext_less_than_sign_state(),
            TokenizerState::RAWTEXTEndTagOpen => self.rawtext_end_tag_open_state(),
            TokenizerState::RAWTEXTEndTagName => self.rawtext_end_tag_name_state(),
            TokenizerState::ScriptDataLessThanSign => self.script_data_less_than_sign_state(),
            TokenizerState::ScriptDataEndTagOpen => self.script_data_end_tag_open_state(),
            TokenizerState::ScriptDataEndTagName => self.script_data_end_tag_name_state(),
            TokenizerState::ScriptDataEscapeStart => self.script_data_escape_start_state(),
            TokenizerState::ScriptDataEscapeStartDash => self.script_data_escape_start_dash_state(),
            TokenizerState::ScriptDataEscaped => self.script_data_escaped_state(),
            TokenizerState::ScriptDataEscapedDash => self.script_data_escaped_dash_state(),
            TokenizerState::ScriptDataEscapedDashDash => self.script_data_escaped_dash_dash_state(),
            TokenizerState::ScriptDataEscapedLessThanSign => {
                self.script_data_escaped_less_than_sign_state()
            }
            TokenizerState::ScriptDataEscapedEndTagOpen => {
                self.script_data_escaped_end_tag_open_state()
            }
            TokenizerState::ScriptDataEscapedEndTagName => {
                self.script_data_escaped_end_tag_name_state()
            }
            TokenizerState::ScriptDataDoubleEscapeStart => {
                self.script_data_double_escape_start_state()
            }
            TokenizerState::ScriptDataDoubleEscaped => self.script_data_double_escaped_state(),
            TokenizerState::ScriptDataDoubleEscapedDash => {
                self.script_data_double_escaped_dash_state()
            }
            TokenizerState::ScriptDataDoubleEscapedDashDash => {
                self.script_data_double_escaped_dash_dash_state()
            }
            TokenizerState::ScriptDataDoubleEscapedLessThanSign => {
                self.script_data_double_escaped_less_than_sign_state()
            }
            TokenizerState::ScriptDataDoubleEscapeEnd => self.script_data_double_escape_end_state(),
            TokenizerState::BeforeAttributeName => self.before_attribute_name_state(),
            TokenizerState::AttributeName => self.attribute_name_state(),
            TokenizerState::AfterAttributeName => self.after_attribute_name_state(),
            TokenizerState::BeforeAttributeValue => self.before_attribute_value_state(),
            TokenizerState::AttributeValueDoubleQuoted => {
                self.attribute_value_double_quoted_state()
            }
            TokenizerState::AttributeValueSingleQuoted => {
                self.attribute_value_single_quoted_state()
            }
            TokenizerState::AttributeValueUnquoted => self.attribute_value_unquoted_state(),
            TokenizerState::AfterAttributeValueQuoted => self.after_attribute_value_quoted_state(),
            TokenizerState::SelfClosingStartTag => self.self_closing_start_tag_state(),
            TokenizerState::BogusComment => self.bogus_comment_state(),
            TokenizerState::MarkupDeclarationOpen => self.markup_declaration_open_state(),
            TokenizerState::CommentStart => self.comment_start_state(),
            TokenizerState::CommentStartDash => self.comment_start_dash_state(),
            TokenizerState::Comment => self.comment_state(),
            TokenizerState::CommentLessThanSign => self.comment_less_than_sign_state(),
            TokenizerState::CommentLessThanSignBang => self.comment_less_than_sign_bang_state(),
            TokenizerState::CommentLessThanSignBangDash => {
                self.comment_less_than_sign_bang_dash_state()
            }
            TokenizerState::CommentLessThanSignBangDashDash => {
                self.comment_less_than_sign_bang_dash_dash_state()
            }
            TokenizerState::CommentEndDash => self.comment_end_dash_state(),
            TokenizerState::CommentEnd => self.comment_end_state(),
            TokenizerState::CommentEndBang => self.comment_end_bang_state(),
            TokenizerState::DOCTYPE => self.doctype_state(),
            TokenizerState::BeforeDOCTYPEName => self.before_doctype_name_state(),
            TokenizerState::DOCTYPEName => self.doctype_name_state(),
            TokenizerState::AfterDOCTYPEName => self.after_doctype_name_state(),
            TokenizerState::AfterDOCTYPEPublicKeyword => self.after_doctype_public_keyword_state(),
            TokenizerState::BeforeDOCTYPEPublicIdentifier => {
                self.before_doctype_public_identifier_state()
            }
            TokenizerState::DOCTYPEPublicIdentifierDoubleQuoted => {
                self.doctype_public_identifier_double_quoted_state()
            }
            TokenizerState::DOCTYPEPublicIdentifierSingleQuoted => {
                self.doctype_public_identifier_single_quoted_state()
            }
            TokenizerState::AfterDOCTYPEPublicIdentifier => {
                self.after_doctype_public_identifier_state()
            }
            TokenizerState::BetweenDOCTYPEPublicAndSystemIdentifiers => {
                self.between_doctype_public_and_system_identifiers_state()
            }
            TokenizerState::AfterDOCTYPESystemKeyword => self.after_doctype_system_keyword_state(),
            TokenizerState::BeforeDOCTYPESystemIdentifier => {
                self.before_doctype_system_identifier_state()
            }
            TokenizerState::DOCTYPESystemIdentifierDoubleQuoted => {
                self.doctype_system_identifier_double_quoted_state()
            }
            TokenizerState::DOCTYPESystemIdentifierSingleQuoted => {
                self.doctype_system_identifier_single_quoted_state()
            }
            TokenizerState::AfterDOCTYPESystemIdentifier => {
                self.after_doctype_system_identifier_state()
            }
            TokenizerState::BogusDOCTYPE => self.bogus_doctype_state(),
            TokenizerState::CDATASection => self.cdata_section_state(),
            TokenizerState::CDATASectionBracket => self.cdata_section_bracket_state(),
            TokenizerState::CDATASectionEnd => self.cdata_section_end_state(),
            TokenizerState::CharacterReference => self.character_reference_state(),
            TokenizerState::NamedCharacterReference => self.named_character_reference_state(),
            TokenizerState::AmbiguousAmpersand => self.ambiguous_ampersand_state(),
            TokenizerState::NumericCharacterReference => self.numeric_character_reference_state(),
            TokenizerState::HexadecimalCharacterReferenceStart => {
                self.hexadecimal_character_reference_start_state()
            }
            TokenizerState::DecimalCharacterReferenceStart => {
                self.decimal_character_reference_start_state()
            }
            TokenizerState::HexadecimalCharacterReference => {
                self.hexadecimal_character_reference_state()
            }
            TokenizerState::DecimalCharacterReference => self.decimal_character_reference_state(),
            TokenizerState::NumericCharacterReferenceEnd => {
                self.numeric_character_reference_end_state()
            }
        }
    }

    /// Pops the replay queue before pulling a fresh item from the stream.
    /// Reconsumed and re-fed items land in this queue.
    fn next_item(&mut self) -> Result<InputItem, TokenizerFault> {
        let item = match self.replay.pop_front() {
            Some(item) => item,
            None => self.input.next(&mut *self.error_sink)?,
        };

        self.current_item = item;
        Ok(item)
    }

    /// Switches to `state` without advancing past the current input item.
    fn reconsume_in_state(&mut self, state: TokenizerState) {
        self.replay.push_front(self.current_item);
        self.state = state;
    }

    /// Queues `items` to be processed next, ahead of fresh stream input but
    /// behind nothing else.
    fn replay_items(&mut self, items: Vec<InputItem>) {
        for item in items.into_iter().rev() {
            self.replay.push_front(item);
        }
    }

    fn parse_error(&mut self, kind: ParseErrorKind) {
        self.error_sink.accept_error(kind, self.current_item.offset);
    }

    fn emit(&mut self, token: HtmlToken) -> Result<(), TokenizerFault> {
        #[cfg(feature = "debug_prints")]
        println!("emitting token: {:?}", token);

        log::trace!("emit {:?}", token);

        if let HtmlToken::TagToken(TagTokenType::StartTag(tag)) = &token {
            // self-closing start tags never establish a pending end tag
            if !tag.self_closing {
                self.last_start_tag = Some(tag.tag_name.clone());
            }
        }

        if let HtmlToken::EndOfFile { .. } = &token {
            self.eof_emitted = true;
        }

        self.token_sink.accept(token)?;
        Ok(())
    }

    fn emit_end_of_file(&mut self) -> Result<(), TokenizerFault> {
        let offset = self.current_item.offset;
        self.emit(HtmlToken::EndOfFile { offset })
    }

    fn emit_current_tag_token(&mut self) -> Result<(), TokenizerFault> {
        self.commit_current_attribute();

        if let Some(tag_token) = self.tag_token.take() {
            self.emit(HtmlToken::TagToken(tag_token))?;
        }

        Ok(())
    }

    fn emit_current_comment_token(&mut self) -> Result<(), TokenizerFault> {
        if let Some(comment_token) = self.comment_token.take() {
            self.emit(HtmlToken::Comment(comment_token))?;
        }

        Ok(())
    }

    fn emit_current_doctype_token(&mut self) -> Result<(), TokenizerFault> {
        if let Some(doctype_token) = self.doctype_token.take() {
            self.emit(HtmlToken::DocType(doctype_token))?;
        }

        Ok(())
    }

    fn current_tag_token_mut(&mut self) -> Result<&mut TagTokenType, TokenizerFault> {
        self.tag_token
            .as_mut()
            .ok_or(TokenizerFault::Invariant("no current tag"))
    }

    fn current_doctype_token_mut(&mut self) -> Result<&mut DoctypeToken, TokenizerFault> {
        self.doctype_token
            .as_mut()
            .ok_or(TokenizerFault::Invariant("no current doctype"))
    }

    fn current_comment_token_mut(&mut self) -> Result<&mut CommentToken, TokenizerFault> {
        self.comment_token
            .as_mut()
            .ok_or(TokenizerFault::Invariant("no current comment"))
    }

    fn current_attribute_mut(&mut self) -> Result<&mut Attribute, TokenizerFault> {
        self.current_attribute
            .as_mut()
            .ok_or(TokenizerFault::Invariant("no current attribute"))
    }

    /// Commits any pending attribute, then begins a fresh one.
    fn start_new_attribute(&mut self, attribute: Attribute) {
        self.commit_current_attribute();
        self.current_attribute = Some(attribute);
    }

    /// Moves the pending attribute onto the current tag unless it was
    /// flagged as a duplicate when its name completed.
    fn commit_current_attribute(&mut self) {
        if let Some(attribute) = self.current_attribute.take() {
            if !self.current_attribute_is_duplicate {
                if let Some(tag_token) = self.tag_token.as_mut() {
                    tag_token.attributes_mut().push(attribute);
                }
            }
        }

        self.current_attribute_is_duplicate = false;
    }

    /// Runs the duplicate check the moment the attribute name state is left.
    /// A duplicate keeps accumulating its value but is dropped on commit.
    fn finish_attribute_name(&mut self) {
        let is_duplicate = match (&self.current_attribute, &self.tag_token) {
            (Some(attribute), Some(tag_token)) => tag_token
                .attributes()
                .iter()
                .any(|existing| existing.name == attribute.name),
            _ => false,
        };

        if is_duplicate {
            self.parse_error(ParseErrorKind::DuplicateAttribute);
            self.current_attribute_is_duplicate = true;
        }
    }

    fn push_char_to_attribute_name(&mut self, c: char) -> Result<(), TokenizerFault> {
        self.current_attribute_mut()?.name.push(c);
        Ok(())
    }

    fn push_char_to_attribute_value(&mut self, c: char) -> Result<(), TokenizerFault> {
        self.current_attribute_mut()?.value.push(c);
        Ok(())
    }

    fn current_return_state(&self) -> Result<TokenizerState, TokenizerFault> {
        self.return_state
            .ok_or(TokenizerFault::Invariant("no return state"))
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#appropriate-end-tag-token>
    fn is_current_end_tag_token_appropriate(&self) -> bool {
        let end_tag = match &self.tag_token {
            Some(TagTokenType::EndTag(end_tag)) => end_tag,
            _ => return false,
        };

        match &self.last_start_tag {
            Some(name) => *name == end_tag.tag_name,
            None => false,
        }
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#charref-in-attribute>
    fn charref_in_attribute(&self) -> bool {
        matches!(
            self.return_state,
            Some(TokenizerState::AttributeValueDoubleQuoted)
                | Some(TokenizerState::AttributeValueSingleQuoted)
                | Some(TokenizerState::AttributeValueUnquoted)
        )
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#flush-code-points-consumed-as-a-character-reference>
    fn flush_code_points_consumed_as_character_reference(
        &mut self,
    ) -> Result<(), TokenizerFault> {
        let code_points: Vec<char> = self.temporary_buffer.drain(..).collect();
        for c in code_points {
            if self.charref_in_attribute() {
                self.current_attribute_mut()?.value.push(c);
            } else {
                self.emit(HtmlToken::Character(c))?;
            }
        }

        Ok(())
    }
}

/// Tokenizes an in-memory document, collecting tokens and parse errors.
pub fn tokenize(text: &str) -> Result<(Vec<HtmlToken>, Vec<ParseError>), TokenizerFault> {
    let mut source = SliceSource::from(text);
    let mut tokens: Vec<HtmlToken> = Vec::new();
    let mut errors: Vec<ParseError> = Vec::new();

    Tokenizer::new(&mut source, &mut tokens, &mut errors).run()?;

    Ok((tokens, errors))
}
