use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::stream::InputItem;

use super::{
    chars,
    named_character_references::NAMED_REFERENCE_TRIE,
    Attribute, CommentToken, DoctypeToken, HtmlToken, ParseErrorKind, TagToken, TagTokenType,
    Tokenizer, TokenizerFault, TokenizerState,
};

impl<'a> Tokenizer<'a> {
    /// <https://html.spec.whatwg.org/multipage/parsing.html#data-state>
    pub(super) fn data_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('&') => {
                self.return_state = Some(TokenizerState::Data);
                self.state = TokenizerState::CharacterReference;
            }
            Some('<') => {
                self.state = TokenizerState::TagOpen;
            }
            Some(chars::NULL) => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);

                self.emit(HtmlToken::Character(chars::NULL))?;
            }
            Some(c) => {
                self.emit(HtmlToken::Character(c))?;
            }
            None => self.emit_end_of_file()?,
        };

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#rcdata-state>
    pub(super) fn rcdata_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('&') => {
                self.return_state = Some(TokenizerState::RCDATA);
                self.state = TokenizerState::CharacterReference;
            }
            Some('<') => {
                self.state = TokenizerState::RCDATALessThanSign;
            }
            Some(chars::NULL) => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);

                self.emit(HtmlToken::Character(chars::REPLACEMENT_CHARACTER))?;
            }
            Some(c) => {
                self.emit(HtmlToken::Character(c))?;
            }
            None => self.emit_end_of_file()?,
        };

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#rawtext-state>
    pub(super) fn rawtext_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('<') => {
                self.state = TokenizerState::RAWTEXTLessThanSign;
            }
            Some(chars::NULL) => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);

                self.emit(HtmlToken::Character(chars::REPLACEMENT_CHARACTER))?;
            }
            Some(c) => {
                self.emit(HtmlToken::Character(c))?;
            }
            None => self.emit_end_of_file()?,
        };

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#script-data-state>
    pub(super) fn script_data_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('<') => {
                self.state = TokenizerState::ScriptDataLessThanSign;
            }
            Some(chars::NULL) => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);

                self.emit(HtmlToken::Character(chars::REPLACEMENT_CHARACTER))?;
            }
            Some(c) => {
                self.emit(HtmlToken::Character(c))?;
            }
            None => self.emit_end_of_file()?,
        };

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#plaintext-state>
    pub(super) fn plaintext_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(chars::NULL) => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);

                self.emit(HtmlToken::Character(chars::REPLACEMENT_CHARACTER))?;
            }
            Some(c) => {
                self.emit(HtmlToken::Character(c))?;
            }
            None => self.emit_end_of_file()?,
        };

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state>
    pub(super) fn tag_open_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('!') => {
                self.open_markup.clear();
                self.state = TokenizerState::MarkupDeclarationOpen;
            }
            Some('/') => {
                self.state = TokenizerState::EndTagOpen;
            }
            Some(c) if c.is_ascii_alphabetic() => {
                self.tag_token = Some(TagTokenType::StartTag(TagToken::new(String::new())));
                self.reconsume_in_state(TokenizerState::TagName);
            }
            Some('?') => {
                self.parse_error(ParseErrorKind::UnexpectedQuestionMarkInsteadOfTagName);

                self.comment_token = Some(CommentToken::new(String::new()));
                self.reconsume_in_state(TokenizerState::BogusComment);
            }
            Some(_) => {
                self.parse_error(ParseErrorKind::InvalidFirstCharacterOfTagName);

                self.emit(HtmlToken::Character('<'))?;
                self.reconsume_in_state(TokenizerState::Data);
            }
            None => {
                self.parse_error(ParseErrorKind::EofBeforeTagName);

                self.emit(HtmlToken::Character('<'))?;
                self.emit_end_of_file()?;
            }
        };

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#end-tag-open-state>
    pub(super) fn end_tag_open_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if c.is_ascii_alphabetic() => {
                self.tag_token = Some(TagTokenType::EndTag(TagToken::new(String::new())));
                self.reconsume_in_state(TokenizerState::TagName);
            }
            Some('>') => {
                self.parse_error(ParseErrorKind::MissingEndTagName);

                self.state = TokenizerState::Data;
            }
            Some(_) => {
                self.parse_error(ParseErrorKind::InvalidFirstCharacterOfTagName);

                self.comment_token = Some(CommentToken::new(String::new()));
                self.reconsume_in_state(TokenizerState::BogusComment);
            }
            None => {
                self.parse_error(ParseErrorKind::EofBeforeTagName);

                self.emit(HtmlToken::Character('<'))?;
                self.emit(HtmlToken::Character('/'))?;
                self.emit_end_of_file()?;
            }
        };

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state>
    pub(super) fn tag_name_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if is_whitespace(c) => {
                self.state = TokenizerState::BeforeAttributeName;
            }
            Some('/') => {
                self.state = TokenizerState::SelfClosingStartTag;
            }
            Some('>') => {
                self.state = TokenizerState::Data;
                self.emit_current_tag_token()?;
            }
            Some(chars::NULL) => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);

                self.current_tag_token_mut()?
                    .tag_name_mut()
                    .push(chars::REPLACEMENT_CHARACTER);
            }
            Some(c) if c.is_ascii_uppercase() => {
                self.current_tag_token_mut()?
                    .tag_name_mut()
                    .push(c.to_ascii_lowercase());
            }
            Some(c) => {
                self.current_tag_token_mut()?.tag_name_mut().push(c);
            }
            None => {
                self.parse_error(ParseErrorKind::EofInTag);

                self.emit_end_of_file()?;
            }
        };

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#rcdata-less-than-sign-state>
    pub(super) fn rcdata_less_than_sign_state(&mut self) -> Result<(), TokenizerFault> {
        self.raw_less_than_sign(TokenizerState::RCDATAEndTagOpen, TokenizerState::RCDATA)
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-open-state>
    pub(super) fn rcdata_end_tag_open_state(&mut self) -> Result<(), TokenizerFault> {
        self.raw_end_tag_open(TokenizerState::RCDATAEndTagName, TokenizerState::RCDATA)
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-name-state>
    pub(super) fn rcdata_end_tag_name_state(&mut self) -> Result<(), TokenizerFault> {
        self.raw_end_tag_name(TokenizerState::RCDATA)
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#rawtext-less-than-sign-state>
    pub(super) fn rawtext_less_than_sign_state(&mut self) -> Result<(), TokenizerFault> {
        self.raw_less_than_sign(TokenizerState::RAWTEXTEndTagOpen, TokenizerState::RAWTEXT)
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-open-state>
    pub(super) fn rawtext_end_tag_open_state(&mut self) -> Result<(), TokenizerFault> {
        self.raw_end_tag_open(TokenizerState::RAWTEXTEndTagName, TokenizerState::RAWTEXT)
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-name-state>
    pub(super) fn rawtext_end_tag_name_state(&mut self) -> Result<(), TokenizerFault> {
        self.raw_end_tag_name(TokenizerState::RAWTEXT)
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#script-data-less-than-sign-state>
    pub(super) fn script_data_less_than_sign_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('/') => {
                self.temporary_buffer.clear();
                self.state = TokenizerState::ScriptDataEndTagOpen;
            }
            Some('!') => {
                self.state = TokenizerState::ScriptDataEscapeStart;
                self.emit(HtmlToken::Character('<'))?;
                self.emit(HtmlToken::Character('!'))?;
            }
            _ => {
                self.emit(HtmlToken::Character('<'))?;
                self.reconsume_in_state(TokenizerState::ScriptData);
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#script-data-end-tag-open-state>
    pub(super) fn script_data_end_tag_open_state(&mut self) -> Result<(), TokenizerFault> {
        self.raw_end_tag_open(TokenizerState::ScriptDataEndTagName, TokenizerState::ScriptData)
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#script-data-end-tag-name-state>
    pub(super) fn script_data_end_tag_name_state(&mut self) -> Result<(), TokenizerFault> {
        self.raw_end_tag_name(TokenizerState::ScriptData)
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#script-data-escape-start-state>
    pub(super) fn script_data_escape_start_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('-') => {
                self.state = TokenizerState::ScriptDataEscapeStartDash;
                self.emit(HtmlToken::Character('-'))?;
            }
            _ => {
                self.reconsume_in_state(TokenizerState::ScriptData);
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#script-data-escape-start-dash-state>
    pub(super) fn script_data_escape_start_dash_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('-') => {
                self.state = TokenizerState::ScriptDataEscapedDashDash;
                self.emit(HtmlToken::Character('-'))?;
            }
            _ => {
                self.reconsume_in_state(TokenizerState::ScriptData);
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-state>
    pub(super) fn script_data_escaped_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('-') => {
                self.state = TokenizerState::ScriptDataEscapedDash;
                self.emit(HtmlToken::Character('-'))?;
            }
            Some('<') => {
                self.state = TokenizerState::ScriptDataEscapedLessThanSign;
            }
            Some(chars::NULL) => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);

                self.emit(HtmlToken::Character(chars::REPLACEMENT_CHARACTER))?;
            }
            Some(c) => {
                self.emit(HtmlToken::Character(c))?;
            }
            None => {
                self.parse_error(ParseErrorKind::EofInScriptHtmlCommentLikeText);

                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-dash-state>
    pub(super) fn script_data_escaped_dash_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('-') => {
                self.state = TokenizerState::ScriptDataEscapedDashDash;
                self.emit(HtmlToken::Character('-'))?;
            }
            Some('<') => {
                self.state = TokenizerState::ScriptDataEscapedLessThanSign;
            }
            Some(chars::NULL) => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);

                self.state = TokenizerState::ScriptDataEscaped;
                self.emit(HtmlToken::Character(chars::REPLACEMENT_CHARACTER))?;
            }
            Some(c) => {
                self.state = TokenizerState::ScriptDataEscaped;
                self.emit(HtmlToken::Character(c))?;
            }
            None => {
                self.parse_error(ParseErrorKind::EofInScriptHtmlCommentLikeText);

                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-dash-dash-state>
    pub(super) fn script_data_escaped_dash_dash_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('-') => {
                self.emit(HtmlToken::Character('-'))?;
            }
            Some('<') => {
                self.state = TokenizerState::ScriptDataEscapedLessThanSign;
            }
            Some('>') => {
                self.state = TokenizerState::ScriptData;
                self.emit(HtmlToken::Character('>'))?;
            }
            Some(chars::NULL) => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);

                self.state = TokenizerState::ScriptDataEscaped;
                self.emit(HtmlToken::Character(chars::REPLACEMENT_CHARACTER))?;
            }
            Some(c) => {
                self.state = TokenizerState::ScriptDataEscaped;
                self.emit(HtmlToken::Character(c))?;
            }
            None => {
                self.parse_error(ParseErrorKind::EofInScriptHtmlCommentLikeText);

                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-less-than-sign-state>
    pub(super) fn script_data_escaped_less_than_sign_state(
        &mut self,
    ) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('/') => {
                self.temporary_buffer.clear();
                self.state = TokenizerState::ScriptDataEscapedEndTagOpen;
            }
            Some(c) if c.is_ascii_alphabetic() => {
                self.temporary_buffer.clear();
                self.emit(HtmlToken::Character('<'))?;
                self.reconsume_in_state(TokenizerState::ScriptDataDoubleEscapeStart);
            }
            _ => {
                self.emit(HtmlToken::Character('<'))?;
                self.reconsume_in_state(TokenizerState::ScriptDataEscaped);
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-end-tag-open-state>
    pub(super) fn script_data_escaped_end_tag_open_state(&mut self) -> Result<(), TokenizerFault> {
        self.raw_end_tag_open(
            TokenizerState::ScriptDataEscapedEndTagName,
            TokenizerState::ScriptDataEscaped,
        )
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-end-tag-name-state>
    pub(super) fn script_data_escaped_end_tag_name_state(&mut self) -> Result<(), TokenizerFault> {
        self.raw_end_tag_name(TokenizerState::ScriptDataEscaped)
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escape-start-state>
    pub(super) fn script_data_double_escape_start_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if is_whitespace(c) || c == '/' || c == '>' => {
                if self.temporary_buffer.iter().collect::<String>() == "script" {
                    self.state = TokenizerState::ScriptDataDoubleEscaped;
                } else {
                    self.state = TokenizerState::ScriptDataEscaped;
                }

                self.emit(HtmlToken::Character(c))?;
            }
            Some(c) if c.is_ascii_uppercase() => {
                self.temporary_buffer.push(c.to_ascii_lowercase());
                self.emit(HtmlToken::Character(c))?;
            }
            Some(c) if c.is_ascii_lowercase() => {
                self.temporary_buffer.push(c);
                self.emit(HtmlToken::Character(c))?;
            }
            _ => {
                self.reconsume_in_state(TokenizerState::ScriptDataEscaped);
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-state>
    pub(super) fn script_data_double_escaped_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('-') => {
                self.state = TokenizerState::ScriptDataDoubleEscapedDash;
                self.emit(HtmlToken::Character('-'))?;
            }
            Some('<') => {
                self.state = TokenizerState::ScriptDataDoubleEscapedLessThanSign;
                self.emit(HtmlToken::Character('<'))?;
            }
            Some(chars::NULL) => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);

                self.emit(HtmlToken::Character(chars::REPLACEMENT_CHARACTER))?;
            }
            Some(c) => {
                self.emit(HtmlToken::Character(c))?;
            }
            None => {
                self.parse_error(ParseErrorKind::EofInScriptHtmlCommentLikeText);

                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-dash-state>
    pub(super) fn script_data_double_escaped_dash_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('-') => {
                self.state = TokenizerState::ScriptDataDoubleEscapedDashDash;
                self.emit(HtmlToken::Character('-'))?;
            }
            Some('<') => {
                self.state = TokenizerState::ScriptDataDoubleEscapedLessThanSign;
                self.emit(HtmlToken::Character('<'))?;
            }
            Some(chars::NULL) => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);

                self.state = TokenizerState::ScriptDataDoubleEscaped;
                self.emit(HtmlToken::Character(chars::REPLACEMENT_CHARACTER))?;
            }
            Some(c) => {
                self.state = TokenizerState::ScriptDataDoubleEscaped;
                self.emit(HtmlToken::Character(c))?;
            }
            None => {
                self.parse_error(ParseErrorKind::EofInScriptHtmlCommentLikeText);

                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-dash-dash-state>
    pub(super) fn script_data_double_escaped_dash_dash_state(
        &mut self,
    ) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('-') => {
                self.emit(HtmlToken::Character('-'))?;
            }
            Some('<') => {
                self.state = TokenizerState::ScriptDataDoubleEscapedLessThanSign;
                self.emit(HtmlToken::Character('<'))?;
            }
            Some('>') => {
                self.state = TokenizerState::ScriptData;
                self.emit(HtmlToken::Character('>'))?;
            }
            Some(chars::NULL) => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);

                self.state = TokenizerState::ScriptDataDoubleEscaped;
                self.emit(HtmlToken::Character(chars::REPLACEMENT_CHARACTER))?;
            }
            Some(c) => {
                self.state = TokenizerState::ScriptDataDoubleEscaped;
                self.emit(HtmlToken::Character(c))?;
            }
            None => {
                self.parse_error(ParseErrorKind::EofInScriptHtmlCommentLikeText);

                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-less-than-sign-state>
    pub(super) fn script_data_double_escaped_less_than_sign_state(
        &mut self,
    ) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('/') => {
                self.temporary_buffer.clear();
                self.state = TokenizerState::ScriptDataDoubleEscapeEnd;
                self.emit(HtmlToken::Character('/'))?;
            }
            _ => {
                self.reconsume_in_state(TokenizerState::ScriptDataDoubleEscaped);
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escape-end-state>
    pub(super) fn script_data_double_escape_end_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if is_whitespace(c) || c == '/' || c == '>' => {
                if self.temporary_buffer.iter().collect::<String>() == "script" {
                    self.state = TokenizerState::ScriptDataEscaped;
                } else {
                    self.state = TokenizerState::ScriptDataDoubleEscaped;
                }

                self.emit(HtmlToken::Character(c))?;
            }
            Some(c) if c.is_ascii_uppercase() => {
                self.temporary_buffer.push(c.to_ascii_lowercase());
                self.emit(HtmlToken::Character(c))?;
            }
            Some(c) if c.is_ascii_lowercase() => {
                self.temporary_buffer.push(c);
                self.emit(HtmlToken::Character(c))?;
            }
            _ => {
                self.reconsume_in_state(TokenizerState::ScriptDataDoubleEscaped);
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state>
    pub(super) fn before_attribute_name_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if is_whitespace(c) => {
                // ignore
            }
            Some('/') | Some('>') | None => {
                self.reconsume_in_state(TokenizerState::AfterAttributeName);
            }
            Some('=') => {
                self.parse_error(ParseErrorKind::UnexpectedEqualsSignBeforeAttributeName);

                self.start_new_attribute(Attribute::new(String::from('='), String::new()));
                self.state = TokenizerState::AttributeName;
            }
            Some(_) => {
                self.start_new_attribute(Attribute::new(String::new(), String::new()));
                self.reconsume_in_state(TokenizerState::AttributeName);
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state>
    pub(super) fn attribute_name_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if is_whitespace(c) => {
                self.finish_attribute_name();
                self.reconsume_in_state(TokenizerState::AfterAttributeName);
            }
            Some('/') | Some('>') | None => {
                self.finish_attribute_name();
                self.reconsume_in_state(TokenizerState::AfterAttributeName);
            }
            Some('=') => {
                self.finish_attribute_name();
                self.state = TokenizerState::BeforeAttributeValue;
            }
            Some(c) if c.is_ascii_uppercase() => {
                self.push_char_to_attribute_name(c.to_ascii_lowercase())?;
            }
            Some(chars::NULL) => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);

                self.push_char_to_attribute_name(chars::REPLACEMENT_CHARACTER)?;
            }
            Some(c @ ('"' | '\'' | '<')) => {
                self.parse_error(ParseErrorKind::UnexpectedCharacterInAttributeName);

                self.push_char_to_attribute_name(c)?;
            }
            Some(c) => {
                self.push_char_to_attribute_name(c)?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-name-state>
    pub(super) fn after_attribute_name_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if is_whitespace(c) => {
                // ignore
            }
            Some('/') => {
                self.state = TokenizerState::SelfClosingStartTag;
            }
            Some('=') => {
                self.state = TokenizerState::BeforeAttributeValue;
            }
            Some('>') => {
                self.state = TokenizerState::Data;
                self.emit_current_tag_token()?;
            }
            Some(_) => {
                self.start_new_attribute(Attribute::new(String::new(), String::new()));
                self.reconsume_in_state(TokenizerState::AttributeName);
            }
            None => {
                self.parse_error(ParseErrorKind::EofInTag);

                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-value-state>
    pub(super) fn before_attribute_value_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if is_whitespace(c) => {
                // ignore
            }
            Some('"') => {
                self.state = TokenizerState::AttributeValueDoubleQuoted;
            }
            Some('\'') => {
                self.state = TokenizerState::AttributeValueSingleQuoted;
            }
            Some('>') => {
                self.parse_error(ParseErrorKind::MissingAttributeValue);

                self.state = TokenizerState::Data;
                self.emit_current_tag_token()?;
            }
            Some(_) | None => {
                self.reconsume_in_state(TokenizerState::AttributeValueUnquoted);
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state>
    pub(super) fn attribute_value_double_quoted_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('"') => {
                self.state = TokenizerState::AfterAttributeValueQuoted;
            }
            Some('&') => {
                self.return_state = Some(TokenizerState::AttributeValueDoubleQuoted);
                self.state = TokenizerState::CharacterReference;
            }
            Some(chars::NULL) => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);

                self.push_char_to_attribute_value(chars::REPLACEMENT_CHARACTER)?;
            }
            Some(c) => {
                self.push_char_to_attribute_value(c)?;
            }
            None => {
                self.parse_error(ParseErrorKind::EofInTag);

                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(single-quoted)-state>
    pub(super) fn attribute_value_single_quoted_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('\'') => {
                self.state = TokenizerState::AfterAttributeValueQuoted;
            }
            Some('&') => {
                self.return_state = Some(TokenizerState::AttributeValueSingleQuoted);
                self.state = TokenizerState::CharacterReference;
            }
            Some(chars::NULL) => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);

                self.push_char_to_attribute_value(chars::REPLACEMENT_CHARACTER)?;
            }
            Some(c) => {
                self.push_char_to_attribute_value(c)?;
            }
            None => {
                self.parse_error(ParseErrorKind::EofInTag);

                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(unquoted)-state>
    pub(super) fn attribute_value_unquoted_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if is_whitespace(c) => {
                self.state = TokenizerState::BeforeAttributeName;
            }
            Some('&') => {
                self.return_state = Some(TokenizerState::AttributeValueUnquoted);
                self.state = TokenizerState::CharacterReference;
            }
            Some('>') => {
                self.state = TokenizerState::Data;
                self.emit_current_tag_token()?;
            }
            Some(chars::NULL) => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);

                self.push_char_to_attribute_value(chars::REPLACEMENT_CHARACTER)?;
            }
            Some(c @ ('"' | '\'' | '<' | '=' | '`')) => {
                self.parse_error(ParseErrorKind::UnexpectedCharacterInUnquotedAttributeValue);

                self.push_char_to_attribute_value(c)?;
            }
            Some(c) => {
                self.push_char_to_attribute_value(c)?;
            }
            None => {
                self.parse_error(ParseErrorKind::EofInTag);

                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-value-(quoted)-state>
    pub(super) fn after_attribute_value_quoted_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if is_whitespace(c) => {
                self.state = TokenizerState::BeforeAttributeName;
            }
            Some('/') => {
                self.state = TokenizerState::SelfClosingStartTag;
            }
            Some('>') => {
                self.state = TokenizerState::Data;
                self.emit_current_tag_token()?;
            }
            Some(_) => {
                self.parse_error(ParseErrorKind::MissingWhitespaceBetweenAttributes);

                self.reconsume_in_state(TokenizerState::BeforeAttributeName);
            }
            None => {
                self.parse_error(ParseErrorKind::EofInTag);

                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state>
    pub(super) fn self_closing_start_tag_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('>') => {
                *self.current_tag_token_mut()?.self_closing_mut() = true;
                self.state = TokenizerState::Data;
                self.emit_current_tag_token()?;
            }
            Some(_) => {
                self.parse_error(ParseErrorKind::UnexpectedSolidusInTag);

                self.reconsume_in_state(TokenizerState::BeforeAttributeName);
            }
            None => {
                self.parse_error(ParseErrorKind::EofInTag);

                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#bogus-comment-state>
    pub(super) fn bogus_comment_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('>') => {
                self.state = TokenizerState::Data;
                self.emit_current_comment_token()?;
            }
            Some(chars::NULL) => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);

                self.current_comment_token_mut()?
                    .data
                    .push(chars::REPLACEMENT_CHARACTER);
            }
            Some(c) => {
                self.current_comment_token_mut()?.data.push(c);
            }
            None => {
                self.emit_current_comment_token()?;
                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state>
    ///
    /// Accumulates up to seven characters and discriminates incrementally;
    /// on a mismatch the collected characters are re-fed through the bogus
    /// comment state, which reproduces the lookahead behavior of the
    /// standard without peeking at the stream.
    pub(super) fn markup_declaration_open_state(&mut self) -> Result<(), TokenizerFault> {
        let item = self.next_item()?;

        if item.code_point.is_some() {
            self.open_markup.push(item);

            let collected: String = self
                .open_markup
                .iter()
                .filter_map(|buffered| buffered.code_point)
                .collect();

            if collected == "--" {
                self.open_markup.clear();
                self.comment_token = Some(CommentToken::new(String::new()));
                self.state = TokenizerState::CommentStart;
                return Ok(());
            }

            if collected.eq_ignore_ascii_case("doctype") {
                self.open_markup.clear();
                self.state = TokenizerState::DOCTYPE;
                return Ok(());
            }

            if collected == "[CDATA[" {
                self.open_markup.clear();

                if self.adjusted_current_node_is_foreign {
                    self.state = TokenizerState::CDATASection;
                } else {
                    self.parse_error(ParseErrorKind::CdataInHtmlContent);

                    self.comment_token = Some(CommentToken::new(String::from("[CDATA[")));
                    self.state = TokenizerState::BogusComment;
                }

                return Ok(());
            }

            let still_open = "--".starts_with(&collected)
                || "doctype".starts_with(&collected.to_ascii_lowercase())
                || "[CDATA[".starts_with(&collected);
            if still_open {
                return Ok(());
            }

            self.open_markup.pop();
        }

        self.parse_error(ParseErrorKind::IncorrectlyOpenedComment);

        self.comment_token = Some(CommentToken::new(String::new()));
        self.state = TokenizerState::BogusComment;

        let mut rejected = std::mem::take(&mut self.open_markup);
        rejected.push(item);
        self.replay_items(rejected);

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#comment-start-state>
    pub(super) fn comment_start_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('-') => {
                self.state = TokenizerState::CommentStartDash;
            }
            Some('>') => {
                self.parse_error(ParseErrorKind::AbruptClosingOfEmptyComment);

                self.state = TokenizerState::Data;
                self.emit_current_comment_token()?;
            }
            _ => {
                self.reconsume_in_state(TokenizerState::Comment);
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#comment-start-dash-state>
    pub(super) fn comment_start_dash_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('-') => {
                self.state = TokenizerState::CommentEnd;
            }
            Some('>') => {
                self.parse_error(ParseErrorKind::AbruptClosingOfEmptyComment);

                self.state = TokenizerState::Data;
                self.emit_current_comment_token()?;
            }
            Some(_) => {
                self.current_comment_token_mut()?.data.push('-');

                self.reconsume_in_state(TokenizerState::Comment);
            }
            None => {
                self.parse_error(ParseErrorKind::EofInComment);

                self.emit_current_comment_token()?;
                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#comment-state>
    pub(super) fn comment_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('<') => {
                self.current_comment_token_mut()?.data.push('<');
                self.state = TokenizerState::CommentLessThanSign;
            }
            Some('-') => {
                self.state = TokenizerState::CommentEndDash;
            }
            Some(chars::NULL) => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);

                self.current_comment_token_mut()?
                    .data
                    .push(chars::REPLACEMENT_CHARACTER);
            }
            Some(c) => {
                self.current_comment_token_mut()?.data.push(c);
            }
            None => {
                self.parse_error(ParseErrorKind::EofInComment);

                self.emit_current_comment_token()?;
                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-state>
    pub(super) fn comment_less_than_sign_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('!') => {
                self.current_comment_token_mut()?.data.push('!');
                self.state = TokenizerState::CommentLessThanSignBang;
            }
            Some('<') => {
                self.current_comment_token_mut()?.data.push('<');
            }
            _ => {
                self.reconsume_in_state(TokenizerState::Comment);
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-state>
    pub(super) fn comment_less_than_sign_bang_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('-') => {
                self.state = TokenizerState::CommentLessThanSignBangDash;
            }
            _ => {
                self.reconsume_in_state(TokenizerState::Comment);
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-state>
    pub(super) fn comment_less_than_sign_bang_dash_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('-') => {
                self.state = TokenizerState::CommentLessThanSignBangDashDash;
            }
            _ => {
                self.reconsume_in_state(TokenizerState::CommentEndDash);
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-dash-state>
    pub(super) fn comment_less_than_sign_bang_dash_dash_state(
        &mut self,
    ) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('>') | None => {
                self.reconsume_in_state(TokenizerState::CommentEnd);
            }
            _ => {
                self.parse_error(ParseErrorKind::NestedComment);

                self.reconsume_in_state(TokenizerState::CommentEnd);
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#comment-end-dash-state>
    pub(super) fn comment_end_dash_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('-') => {
                self.state = TokenizerState::CommentEnd;
            }
            Some(_) => {
                self.current_comment_token_mut()?.data.push('-');

                self.reconsume_in_state(TokenizerState::Comment);
            }
            None => {
                self.parse_error(ParseErrorKind::EofInComment);

                self.emit_current_comment_token()?;
                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#comment-end-state>
    pub(super) fn comment_end_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('>') => {
                self.state = TokenizerState::Data;
                self.emit_current_comment_token()?;
            }
            Some('!') => {
                self.state = TokenizerState::CommentEndBang;
            }
            Some('-') => {
                self.current_comment_token_mut()?.data.push('-');
            }
            Some(_) => {
                self.current_comment_token_mut()?.data.push_str("--");

                self.reconsume_in_state(TokenizerState::Comment);
            }
            None => {
                self.parse_error(ParseErrorKind::EofInComment);

                self.emit_current_comment_token()?;
                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#comment-end-bang-state>
    pub(super) fn comment_end_bang_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('-') => {
                self.current_comment_token_mut()?.data.push_str("--!");
                self.state = TokenizerState::CommentEndDash;
            }
            Some('>') => {
                self.parse_error(ParseErrorKind::IncorrectlyClosedComment);

                self.state = TokenizerState::Data;
                self.emit_current_comment_token()?;
            }
            Some(_) => {
                self.current_comment_token_mut()?.data.push_str("--!");

                self.reconsume_in_state(TokenizerState::Comment);
            }
            None => {
                self.parse_error(ParseErrorKind::EofInComment);

                self.emit_current_comment_token()?;
                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#doctype-state>
    pub(super) fn doctype_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if is_whitespace(c) => {
                self.state = TokenizerState::BeforeDOCTYPEName;
            }
            Some('>') => {
                self.reconsume_in_state(TokenizerState::BeforeDOCTYPEName);
            }
            Some(_) => {
                self.parse_error(ParseErrorKind::MissingWhitespaceBeforeDoctypeName);

                self.reconsume_in_state(TokenizerState::BeforeDOCTYPEName);
            }
            None => {
                self.parse_error(ParseErrorKind::EofInDoctype);

                let mut doctype_token = DoctypeToken::new();
                doctype_token.force_quirks = true;
                self.doctype_token = Some(doctype_token);

                self.emit_current_doctype_token()?;
                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-name-state>
    pub(super) fn before_doctype_name_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if is_whitespace(c) => {
                // ignore
            }
            Some(c) if c.is_ascii_uppercase() => {
                let mut doctype_token = DoctypeToken::new();
                doctype_token.name.push(c.to_ascii_lowercase());
                self.doctype_token = Some(doctype_token);
                self.state = TokenizerState::DOCTYPEName;
            }
            Some(chars::NULL) => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);

                let mut doctype_token = DoctypeToken::new();
                doctype_token.name.push(chars::REPLACEMENT_CHARACTER);
                self.doctype_token = Some(doctype_token);
                self.state = TokenizerState::DOCTYPEName;
            }
            Some('>') => {
                self.parse_error(ParseErrorKind::MissingDoctypeName);

                let mut doctype_token = DoctypeToken::new();
                doctype_token.force_quirks = true;
                self.doctype_token = Some(doctype_token);

                self.state = TokenizerState::Data;
                self.emit_current_doctype_token()?;
            }
            Some(c) => {
                let mut doctype_token = DoctypeToken::new();
                doctype_token.name.push(c);
                self.doctype_token = Some(doctype_token);
                self.state = TokenizerState::DOCTYPEName;
            }
            None => {
                self.parse_error(ParseErrorKind::EofInDoctype);

                let mut doctype_token = DoctypeToken::new();
                doctype_token.force_quirks = true;
                self.doctype_token = Some(doctype_token);

                self.emit_current_doctype_token()?;
                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state>
    pub(super) fn doctype_name_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if is_whitespace(c) => {
                self.state = TokenizerState::AfterDOCTYPEName;
            }
            Some('>') => {
                self.state = TokenizerState::Data;
                self.emit_current_doctype_token()?;
            }
            Some(c) if c.is_ascii_uppercase() => {
                self.current_doctype_token_mut()?
                    .name
                    .push(c.to_ascii_lowercase());
            }
            Some(chars::NULL) => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);

                self.current_doctype_token_mut()?
                    .name
                    .push(chars::REPLACEMENT_CHARACTER);
            }
            Some(c) => {
                self.current_doctype_token_mut()?.name.push(c);
            }
            None => {
                self.parse_error(ParseErrorKind::EofInDoctype);

                self.current_doctype_token_mut()?.force_quirks = true;

                self.emit_current_doctype_token()?;
                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-name-state>
    ///
    /// The `PUBLIC` / `SYSTEM` keywords are recognized incrementally; a
    /// mismatch re-feeds the collected characters through the bogus DOCTYPE
    /// state, mirroring the standard's lookahead.
    pub(super) fn after_doctype_name_state(&mut self) -> Result<(), TokenizerFault> {
        let item = self.next_item()?;

        if !self.doctype_keyword.is_empty() {
            return self.continue_doctype_keyword(item);
        }

        match item.code_point {
            Some(c) if is_whitespace(c) => {
                // ignore
            }
            Some('>') => {
                self.state = TokenizerState::Data;
                self.emit_current_doctype_token()?;
            }
            Some(_) => {
                return self.continue_doctype_keyword(item);
            }
            None => {
                self.parse_error(ParseErrorKind::EofInDoctype);

                self.current_doctype_token_mut()?.force_quirks = true;

                self.emit_current_doctype_token()?;
                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    fn continue_doctype_keyword(&mut self, item: InputItem) -> Result<(), TokenizerFault> {
        if item.code_point.is_some() {
            self.doctype_keyword.push(item);

            let collected: String = self
                .doctype_keyword
                .iter()
                .filter_map(|buffered| buffered.code_point)
                .collect();
            let lowered = collected.to_ascii_lowercase();

            if lowered == "public" {
                self.doctype_keyword.clear();
                self.state = TokenizerState::AfterDOCTYPEPublicKeyword;
                return Ok(());
            }

            if lowered == "system" {
                self.doctype_keyword.clear();
                self.state = TokenizerState::AfterDOCTYPESystemKeyword;
                return Ok(());
            }

            if "public".starts_with(&lowered) || "system".starts_with(&lowered) {
                return Ok(());
            }

            self.doctype_keyword.pop();
        }

        self.parse_error(ParseErrorKind::InvalidCharacterSequenceAfterDoctypeName);

        self.current_doctype_token_mut()?.force_quirks = true;
        self.state = TokenizerState::BogusDOCTYPE;

        let mut rejected = std::mem::take(&mut self.doctype_keyword);
        rejected.push(item);
        self.replay_items(rejected);

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-keyword-state>
    pub(super) fn after_doctype_public_keyword_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if is_whitespace(c) => {
                self.state = TokenizerState::BeforeDOCTYPEPublicIdentifier;
            }
            Some('"') => {
                self.parse_error(ParseErrorKind::MissingWhitespaceAfterDoctypePublicKeyword);

                self.current_doctype_token_mut()?.public_identifier = Some(String::new());
                self.state = TokenizerState::DOCTYPEPublicIdentifierDoubleQuoted;
            }
            Some('\'') => {
                self.parse_error(ParseErrorKind::MissingWhitespaceAfterDoctypePublicKeyword);

                self.current_doctype_token_mut()?.public_identifier = Some(String::new());
                self.state = TokenizerState::DOCTYPEPublicIdentifierSingleQuoted;
            }
            Some('>') => {
                self.parse_error(ParseErrorKind::MissingDoctypePublicIdentifier);

                self.current_doctype_token_mut()?.force_quirks = true;
                self.state = TokenizerState::Data;
                self.emit_current_doctype_token()?;
            }
            Some(_) => {
                self.parse_error(ParseErrorKind::MissingQuoteBeforeDoctypePublicIdentifier);

                self.current_doctype_token_mut()?.force_quirks = true;
                self.reconsume_in_state(TokenizerState::BogusDOCTYPE);
            }
            None => {
                self.parse_error(ParseErrorKind::EofInDoctype);

                self.current_doctype_token_mut()?.force_quirks = true;
                self.emit_current_doctype_token()?;
                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-public-identifier-state>
    pub(super) fn before_doctype_public_identifier_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if is_whitespace(c) => {
                // ignore
            }
            Some('"') => {
                self.current_doctype_token_mut()?.public_identifier = Some(String::new());
                self.state = TokenizerState::DOCTYPEPublicIdentifierDoubleQuoted;
            }
            Some('\'') => {
                self.current_doctype_token_mut()?.public_identifier = Some(String::new());
                self.state = TokenizerState::DOCTYPEPublicIdentifierSingleQuoted;
            }
            Some('>') => {
                self.parse_error(ParseErrorKind::MissingDoctypePublicIdentifier);

                self.current_doctype_token_mut()?.force_quirks = true;
                self.state = TokenizerState::Data;
                self.emit_current_doctype_token()?;
            }
            Some(_) => {
                self.parse_error(ParseErrorKind::MissingQuoteBeforeDoctypePublicIdentifier);

                self.current_doctype_token_mut()?.force_quirks = true;
                self.reconsume_in_state(TokenizerState::BogusDOCTYPE);
            }
            None => {
                self.parse_error(ParseErrorKind::EofInDoctype);

                self.current_doctype_token_mut()?.force_quirks = true;
                self.emit_current_doctype_token()?;
                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(double-quoted)-state>
    pub(super) fn doctype_public_identifier_double_quoted_state(
        &mut self,
    ) -> Result<(), TokenizerFault> {
        self.doctype_public_identifier_quoted('"')
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(single-quoted)-state>
    pub(super) fn doctype_public_identifier_single_quoted_state(
        &mut self,
    ) -> Result<(), TokenizerFault> {
        self.doctype_public_identifier_quoted('\'')
    }

    fn doctype_public_identifier_quoted(&mut self, quote: char) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if c == quote => {
                self.state = TokenizerState::AfterDOCTYPEPublicIdentifier;
            }
            Some(chars::NULL) => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);

                self.push_char_to_doctype_public_identifier(chars::REPLACEMENT_CHARACTER)?;
            }
            Some('>') => {
                self.parse_error(ParseErrorKind::AbruptDoctypePublicIdentifier);

                self.current_doctype_token_mut()?.force_quirks = true;
                self.state = TokenizerState::Data;
                self.emit_current_doctype_token()?;
            }
            Some(c) => {
                self.push_char_to_doctype_public_identifier(c)?;
            }
            None => {
                self.parse_error(ParseErrorKind::EofInDoctype);

                self.current_doctype_token_mut()?.force_quirks = true;
                self.emit_current_doctype_token()?;
                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-identifier-state>
    pub(super) fn after_doctype_public_identifier_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if is_whitespace(c) => {
                self.state = TokenizerState::BetweenDOCTYPEPublicAndSystemIdentifiers;
            }
            Some('>') => {
                self.state = TokenizerState::Data;
                self.emit_current_doctype_token()?;
            }
            Some('"') => {
                self.parse_error(
                    ParseErrorKind::MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
                );

                self.current_doctype_token_mut()?.system_identifier = Some(String::new());
                self.state = TokenizerState::DOCTYPESystemIdentifierDoubleQuoted;
            }
            Some('\'') => {
                self.parse_error(
                    ParseErrorKind::MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
                );

                self.current_doctype_token_mut()?.system_identifier = Some(String::new());
                self.state = TokenizerState::DOCTYPESystemIdentifierSingleQuoted;
            }
            Some(_) => {
                self.parse_error(ParseErrorKind::MissingQuoteBeforeDoctypeSystemIdentifier);

                self.current_doctype_token_mut()?.force_quirks = true;
                self.reconsume_in_state(TokenizerState::BogusDOCTYPE);
            }
            None => {
                self.parse_error(ParseErrorKind::EofInDoctype);

                self.current_doctype_token_mut()?.force_quirks = true;
                self.emit_current_doctype_token()?;
                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#between-doctype-public-and-system-identifiers-state>
    pub(super) fn between_doctype_public_and_system_identifiers_state(
        &mut self,
    ) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if is_whitespace(c) => {
                // ignore
            }
            Some('>') => {
                self.state = TokenizerState::Data;
                self.emit_current_doctype_token()?;
            }
            Some('"') => {
                self.current_doctype_token_mut()?.system_identifier = Some(String::new());
                self.state = TokenizerState::DOCTYPESystemIdentifierDoubleQuoted;
            }
            Some('\'') => {
                self.current_doctype_token_mut()?.system_identifier = Some(String::new());
                self.state = TokenizerState::DOCTYPESystemIdentifierSingleQuoted;
            }
            Some(_) => {
                self.parse_error(ParseErrorKind::MissingQuoteBeforeDoctypeSystemIdentifier);

                self.current_doctype_token_mut()?.force_quirks = true;
                self.reconsume_in_state(TokenizerState::BogusDOCTYPE);
            }
            None => {
                self.parse_error(ParseErrorKind::EofInDoctype);

                self.current_doctype_token_mut()?.force_quirks = true;
                self.emit_current_doctype_token()?;
                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-keyword-state>
    pub(super) fn after_doctype_system_keyword_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if is_whitespace(c) => {
                self.state = TokenizerState::BeforeDOCTYPESystemIdentifier;
            }
            Some('"') => {
                self.parse_error(ParseErrorKind::MissingWhitespaceAfterDoctypeSystemKeyword);

                self.current_doctype_token_mut()?.system_identifier = Some(String::new());
                self.state = TokenizerState::DOCTYPESystemIdentifierDoubleQuoted;
            }
            Some('\'') => {
                self.parse_error(ParseErrorKind::MissingWhitespaceAfterDoctypeSystemKeyword);

                self.current_doctype_token_mut()?.system_identifier = Some(String::new());
                self.state = TokenizerState::DOCTYPESystemIdentifierSingleQuoted;
            }
            Some('>') => {
                self.parse_error(ParseErrorKind::MissingDoctypeSystemIdentifier);

                self.current_doctype_token_mut()?.force_quirks = true;
                self.state = TokenizerState::Data;
                self.emit_current_doctype_token()?;
            }
            Some(_) => {
                self.parse_error(ParseErrorKind::MissingQuoteBeforeDoctypeSystemIdentifier);

                self.current_doctype_token_mut()?.force_quirks = true;
                self.reconsume_in_state(TokenizerState::BogusDOCTYPE);
            }
            None => {
                self.parse_error(ParseErrorKind::EofInDoctype);

                self.current_doctype_token_mut()?.force_quirks = true;
                self.emit_current_doctype_token()?;
                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-system-identifier-state>
    pub(super) fn before_doctype_system_identifier_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if is_whitespace(c) => {
                // ignore
            }
            Some('"') => {
                self.current_doctype_token_mut()?.system_identifier = Some(String::new());
                self.state = TokenizerState::DOCTYPESystemIdentifierDoubleQuoted;
            }
            Some('\'') => {
                self.current_doctype_token_mut()?.system_identifier = Some(String::new());
                self.state = TokenizerState::DOCTYPESystemIdentifierSingleQuoted;
            }
            Some('>') => {
                self.parse_error(ParseErrorKind::MissingDoctypeSystemIdentifier);

                self.current_doctype_token_mut()?.force_quirks = true;
                self.state = TokenizerState::Data;
                self.emit_current_doctype_token()?;
            }
            Some(_) => {
                self.parse_error(ParseErrorKind::MissingQuoteBeforeDoctypeSystemIdentifier);

                self.current_doctype_token_mut()?.force_quirks = true;
                self.reconsume_in_state(TokenizerState::BogusDOCTYPE);
            }
            None => {
                self.parse_error(ParseErrorKind::EofInDoctype);

                self.current_doctype_token_mut()?.force_quirks = true;
                self.emit_current_doctype_token()?;
                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(double-quoted)-state>
    pub(super) fn doctype_system_identifier_double_quoted_state(
        &mut self,
    ) -> Result<(), TokenizerFault> {
        self.doctype_system_identifier_quoted('"')
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(single-quoted)-state>
    pub(super) fn doctype_system_identifier_single_quoted_state(
        &mut self,
    ) -> Result<(), TokenizerFault> {
        self.doctype_system_identifier_quoted('\'')
    }

    fn doctype_system_identifier_quoted(&mut self, quote: char) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if c == quote => {
                self.state = TokenizerState::AfterDOCTYPESystemIdentifier;
            }
            Some(chars::NULL) => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);

                self.push_char_to_doctype_system_identifier(chars::REPLACEMENT_CHARACTER)?;
            }
            Some('>') => {
                self.parse_error(ParseErrorKind::AbruptDoctypeSystemIdentifier);

                self.current_doctype_token_mut()?.force_quirks = true;
                self.state = TokenizerState::Data;
                self.emit_current_doctype_token()?;
            }
            Some(c) => {
                self.push_char_to_doctype_system_identifier(c)?;
            }
            None => {
                self.parse_error(ParseErrorKind::EofInDoctype);

                self.current_doctype_token_mut()?.force_quirks = true;
                self.emit_current_doctype_token()?;
                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-identifier-state>
    pub(super) fn after_doctype_system_identifier_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if is_whitespace(c) => {
                // ignore
            }
            Some('>') => {
                self.state = TokenizerState::Data;
                self.emit_current_doctype_token()?;
            }
            Some(_) => {
                // force-quirks stays untouched here
                self.parse_error(ParseErrorKind::UnexpectedCharacterAfterDoctypeSystemIdentifier);

                self.reconsume_in_state(TokenizerState::BogusDOCTYPE);
            }
            None => {
                self.parse_error(ParseErrorKind::EofInDoctype);

                self.current_doctype_token_mut()?.force_quirks = true;
                self.emit_current_doctype_token()?;
                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#bogus-doctype-state>
    pub(super) fn bogus_doctype_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('>') => {
                self.state = TokenizerState::Data;
                self.emit_current_doctype_token()?;
            }
            Some(chars::NULL) => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);
            }
            Some(_) => {
                // ignore
            }
            None => {
                self.emit_current_doctype_token()?;
                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-state>
    pub(super) fn cdata_section_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(']') => {
                self.state = TokenizerState::CDATASectionBracket;
            }
            Some(c) => {
                self.emit(HtmlToken::Character(c))?;
            }
            None => {
                self.parse_error(ParseErrorKind::EofInCdata);

                self.emit_end_of_file()?;
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-bracket-state>
    pub(super) fn cdata_section_bracket_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(']') => {
                self.state = TokenizerState::CDATASectionEnd;
            }
            _ => {
                self.emit(HtmlToken::Character(']'))?;
                self.reconsume_in_state(TokenizerState::CDATASection);
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-end-state>
    pub(super) fn cdata_section_end_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(']') => {
                self.emit(HtmlToken::Character(']'))?;
            }
            Some('>') => {
                self.state = TokenizerState::Data;
            }
            _ => {
                self.emit(HtmlToken::Character(']'))?;
                self.emit(HtmlToken::Character(']'))?;
                self.reconsume_in_state(TokenizerState::CDATASection);
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state>
    pub(super) fn character_reference_state(&mut self) -> Result<(), TokenizerFault> {
        self.temporary_buffer.clear();
        self.temporary_buffer.push('&');
        self.last_entity = None;
        self.reference_overrun.clear();

        match self.next_item()?.code_point {
            Some(c) if c.is_ascii_alphanumeric() => {
                self.reconsume_in_state(TokenizerState::NamedCharacterReference);
            }
            Some('#') => {
                self.temporary_buffer.push('#');
                self.state = TokenizerState::NumericCharacterReference;
            }
            _ => {
                self.flush_code_points_consumed_as_character_reference()?;

                let return_state = self.current_return_state()?;
                self.reconsume_in_state(return_state);
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state>
    ///
    /// Walks the reference trie one character at a time, remembering the
    /// longest terminal seen. Input consumed past that terminal is replayed
    /// once the walk falls off the trie.
    pub(super) fn named_character_reference_state(&mut self) -> Result<(), TokenizerFault> {
        let item = self.next_item()?;

        if let Some(c) = item.code_point {
            if let Some(key) = reference_key(&self.temporary_buffer, c) {
                if let Some(cursor) = NAMED_REFERENCE_TRIE.find(&key) {
                    self.temporary_buffer.push(c);
                    self.reference_overrun.push(item);

                    if let Some(reference) = cursor.entity() {
                        self.last_entity = Some(reference);
                        self.reference_overrun.clear();
                    }

                    return Ok(());
                }
            }
        }

        self.finish_named_character_reference(item)
    }

    fn finish_named_character_reference(
        &mut self,
        item: InputItem,
    ) -> Result<(), TokenizerFault> {
        let reference = match self.last_entity.take() {
            Some(reference) => reference,
            None => {
                // nothing matched; the whole buffer flushes as-is
                self.reference_overrun.clear();
                self.flush_code_points_consumed_as_character_reference()?;
                self.reconsume_in_state(TokenizerState::AmbiguousAmpersand);
                return Ok(());
            }
        };

        let trailing_semicolon = reference.name.ends_with(';');

        let next_after_match = self
            .reference_overrun
            .first()
            .and_then(|overrun| overrun.code_point)
            .or(item.code_point);

        let historical = self.charref_in_attribute()
            && !trailing_semicolon
            && matches!(next_after_match, Some(next) if next == '=' || next.is_ascii_alphanumeric());

        if historical {
            // legacy attribute rule: everything consumed stays literal
            self.reference_overrun.clear();
            self.flush_code_points_consumed_as_character_reference()?;

            let return_state = self.current_return_state()?;
            self.reconsume_in_state(return_state);
            return Ok(());
        }

        if !trailing_semicolon {
            self.parse_error(ParseErrorKind::MissingSemicolonAfterCharacterReference);
        }

        self.temporary_buffer.clear();
        self.temporary_buffer.extend(reference.characters.chars());
        self.flush_code_points_consumed_as_character_reference()?;
        self.state = self.current_return_state()?;

        self.replay.push_front(item);
        let overrun = std::mem::take(&mut self.reference_overrun);
        self.replay_items(overrun);

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#ambiguous-ampersand-state>
    pub(super) fn ambiguous_ampersand_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if c.is_ascii_alphanumeric() => {
                if self.charref_in_attribute() {
                    self.current_attribute_mut()?.value.push(c);
                } else {
                    self.emit(HtmlToken::Character(c))?;
                }
            }
            Some(';') => {
                self.parse_error(ParseErrorKind::UnknownNamedCharacterReference);

                let return_state = self.current_return_state()?;
                self.reconsume_in_state(return_state);
            }
            _ => {
                let return_state = self.current_return_state()?;
                self.reconsume_in_state(return_state);
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state>
    pub(super) fn numeric_character_reference_state(&mut self) -> Result<(), TokenizerFault> {
        self.character_reference_code = 0;

        match self.next_item()?.code_point {
            Some(c @ (chars::LATIN_SMALL_LETTER_X | chars::LATIN_CAPITAL_LETTER_X)) => {
                self.temporary_buffer.push(c);
                self.state = TokenizerState::HexadecimalCharacterReferenceStart;
            }
            _ => {
                self.reconsume_in_state(TokenizerState::DecimalCharacterReferenceStart);
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-start-state>
    pub(super) fn hexadecimal_character_reference_start_state(
        &mut self,
    ) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if c.is_ascii_hexdigit() => {
                self.reconsume_in_state(TokenizerState::HexadecimalCharacterReference);
            }
            _ => {
                self.parse_error(ParseErrorKind::AbsenceOfDigitsInNumericCharacterReference);

                self.flush_code_points_consumed_as_character_reference()?;

                let return_state = self.current_return_state()?;
                self.reconsume_in_state(return_state);
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-start-state>
    pub(super) fn decimal_character_reference_start_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if c.is_ascii_digit() => {
                self.reconsume_in_state(TokenizerState::DecimalCharacterReference);
            }
            _ => {
                self.parse_error(ParseErrorKind::AbsenceOfDigitsInNumericCharacterReference);

                self.flush_code_points_consumed_as_character_reference()?;

                let return_state = self.current_return_state()?;
                self.reconsume_in_state(return_state);
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-state>
    pub(super) fn hexadecimal_character_reference_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if c.is_ascii_hexdigit() => {
                let digit = c.to_digit(16).unwrap_or(0);
                self.character_reference_code = self
                    .character_reference_code
                    .saturating_mul(16)
                    .saturating_add(u64::from(digit));
            }
            Some(';') => {
                self.state = TokenizerState::NumericCharacterReferenceEnd;
            }
            _ => {
                self.parse_error(ParseErrorKind::MissingSemicolonAfterCharacterReference);

                self.reconsume_in_state(TokenizerState::NumericCharacterReferenceEnd);
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-state>
    pub(super) fn decimal_character_reference_state(&mut self) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if c.is_ascii_digit() => {
                let digit = c.to_digit(10).unwrap_or(0);
                self.character_reference_code = self
                    .character_reference_code
                    .saturating_mul(10)
                    .saturating_add(u64::from(digit));
            }
            Some(';') => {
                self.state = TokenizerState::NumericCharacterReferenceEnd;
            }
            _ => {
                self.parse_error(ParseErrorKind::MissingSemicolonAfterCharacterReference);

                self.reconsume_in_state(TokenizerState::NumericCharacterReferenceEnd);
            }
        }

        Ok(())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state>
    ///
    /// Acts without consuming input: applies the numeric fixups and flushes
    /// the resulting code point to the return state.
    pub(super) fn numeric_character_reference_end_state(&mut self) -> Result<(), TokenizerFault> {
        if self.character_reference_code == 0x00 {
            self.parse_error(ParseErrorKind::NullCharacterReference);
            self.character_reference_code = 0xFFFD;
        } else if self.character_reference_code > 0x10FFFF {
            self.parse_error(ParseErrorKind::CharacterReferenceOutsideUnicodeRange);
            self.character_reference_code = 0xFFFD;
        } else if is_surrogate(self.character_reference_code) {
            self.parse_error(ParseErrorKind::SurrogateCharacterReference);
            self.character_reference_code = 0xFFFD;
        } else if is_noncharacter(self.character_reference_code) {
            self.parse_error(ParseErrorKind::NoncharacterCharacterReference);
        } else if self.character_reference_code == 0x0D
            || (is_control(self.character_reference_code)
                && !is_ascii_whitespace(self.character_reference_code))
        {
            self.parse_error(ParseErrorKind::ControlCharacterReference);

            if let Some(remapped) = CONTROL_REFERENCE_REMAP.get(&self.character_reference_code) {
                self.character_reference_code = *remapped;
            }
        }

        let code_point = u32::try_from(self.character_reference_code)
            .ok()
            .and_then(char::from_u32)
            .unwrap_or(chars::REPLACEMENT_CHARACTER);

        self.temporary_buffer.clear();
        self.temporary_buffer.push(code_point);
        self.flush_code_points_consumed_as_character_reference()?;
        self.state = self.current_return_state()?;

        Ok(())
    }

    /// Shared by the RCDATA and RAWTEXT less-than-sign states.
    fn raw_less_than_sign(
        &mut self,
        end_tag_open_state: TokenizerState,
        raw_state: TokenizerState,
    ) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some('/') => {
                self.temporary_buffer.clear();
                self.state = end_tag_open_state;
            }
            _ => {
                self.emit(HtmlToken::Character('<'))?;
                self.reconsume_in_state(raw_state);
            }
        }

        Ok(())
    }

    /// Shared by every raw-text end-tag-open state.
    fn raw_end_tag_open(
        &mut self,
        name_state: TokenizerState,
        raw_state: TokenizerState,
    ) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if c.is_ascii_alphabetic() => {
                self.tag_token = Some(TagTokenType::EndTag(TagToken::new(String::new())));
                self.reconsume_in_state(name_state);
            }
            _ => {
                self.emit(HtmlToken::Character('<'))?;
                self.emit(HtmlToken::Character('/'))?;
                self.reconsume_in_state(raw_state);
            }
        }

        Ok(())
    }

    /// Shared by every raw-text end-tag-name state. Only an appropriate end
    /// tag closes the raw element; anything else re-emits the consumed text.
    fn raw_end_tag_name(&mut self, raw_state: TokenizerState) -> Result<(), TokenizerFault> {
        match self.next_item()?.code_point {
            Some(c) if is_whitespace(c) && self.is_current_end_tag_token_appropriate() => {
                self.state = TokenizerState::BeforeAttributeName;
            }
            Some('/') if self.is_current_end_tag_token_appropriate() => {
                self.state = TokenizerState::SelfClosingStartTag;
            }
            Some('>') if self.is_current_end_tag_token_appropriate() => {
                self.state = TokenizerState::Data;
                self.emit_current_tag_token()?;
            }
            Some(c) if c.is_ascii_uppercase() => {
                self.current_tag_token_mut()?
                    .tag_name_mut()
                    .push(c.to_ascii_lowercase());
                self.temporary_buffer.push(c);
            }
            Some(c) if c.is_ascii_lowercase() => {
                self.current_tag_token_mut()?.tag_name_mut().push(c);
                self.temporary_buffer.push(c);
            }
            _ => {
                self.emit(HtmlToken::Character('<'))?;
                self.emit(HtmlToken::Character('/'))?;

                let buffered: Vec<char> = self.temporary_buffer.drain(..).collect();
                for c in buffered {
                    self.emit(HtmlToken::Character(c))?;
                }

                self.tag_token = None;
                self.reconsume_in_state(raw_state);
            }
        }

        Ok(())
    }

    fn push_char_to_doctype_public_identifier(&mut self, c: char) -> Result<(), TokenizerFault> {
        self.current_doctype_token_mut()?
            .public_identifier
            .get_or_insert_with(String::new)
            .push(c);

        Ok(())
    }

    fn push_char_to_doctype_system_identifier(&mut self, c: char) -> Result<(), TokenizerFault> {
        self.current_doctype_token_mut()?
            .system_identifier
            .get_or_insert_with(String::new)
            .push(c);

        Ok(())
    }
}

/// Tokenizer whitespace: tab, LF, FF and space. CR never reaches the state
/// machine because the input stream normalizes it.
fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        chars::CHARACTER_TABULATION | chars::LINE_FEED | chars::FORM_FEED | chars::SPACE
    )
}

/// Builds the trie key for the buffered reference text extended by `next`.
/// Entity names are pure ASCII, so any other character ends the walk.
fn reference_key(buffer: &[char], next: char) -> Option<Vec<u8>> {
    if !next.is_ascii() {
        return None;
    }

    let mut key: Vec<u8> = buffer.iter().map(|&c| c as u8).collect();
    key.push(next as u8);
    Some(key)
}

/// <https://infra.spec.whatwg.org/#surrogate>
fn is_surrogate(code_point: u64) -> bool {
    (0xD800..=0xDFFF).contains(&code_point)
}

/// <https://infra.spec.whatwg.org/#noncharacter>
fn is_noncharacter(code_point: u64) -> bool {
    (0xFDD0..=0xFDEF).contains(&code_point)
        || (code_point <= 0x10FFFF && matches!(code_point & 0xFFFF, 0xFFFE | 0xFFFF))
}

/// <https://infra.spec.whatwg.org/#control>
fn is_control(code_point: u64) -> bool {
    code_point <= 0x001F || (0x007F..=0x009F).contains(&code_point)
}

/// <https://infra.spec.whatwg.org/#ascii-whitespace>
fn is_ascii_whitespace(code_point: u64) -> bool {
    matches!(code_point, 0x0009 | 0x000A | 0x000C | 0x000D | 0x0020)
}

/// The Windows-1252 remap applied to C1 control references.
///
/// <https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state>
static CONTROL_REFERENCE_REMAP: Lazy<HashMap<u64, u64>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert(0x80, 0x20AC);
    table.insert(0x82, 0x201A);
    table.insert(0x83, 0x0192);
    table.insert(0x84, 0x201E);
    table.insert(0x85, 0x2026);
    table.insert(0x86, 0x2020);
    table.insert(0x87, 0x2021);
    table.insert(0x88, 0x02C6);
    table.insert(0x89, 0x2030);
    table.insert(0x8A, 0x0160);
    table.insert(0x8B, 0x2039);
    table.insert(0x8C, 0x0152);
    table.insert(0x8E, 0x017D);
    table.insert(0x91, 0x2018);
    table.insert(0x92, 0x2019);
    table.insert(0x93, 0x201C);
    table.insert(0x94, 0x201D);
    table.insert(0x95, 0x2022);
    table.insert(0x96, 0x2013);
    table.insert(0x97, 0x2014);
    table.insert(0x98, 0x02DC);
    table.insert(0x99, 0x2122);
    table.insert(0x9A, 0x0161);
    table.insert(0x9B, 0x203A);
    table.insert(0x9C, 0x0153);
    table.insert(0x9E, 0x017E);
    table.insert(0x9F, 0x0178);
    table
});
