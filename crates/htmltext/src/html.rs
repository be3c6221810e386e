//! HTML tokenizing support.
//!
//! This module adapts the html5gum tokenizer to the [`Token`] stream the
//! driver consumes.

use html5gum::{DefaultEmitter, StringReader, Token as HtmlToken, Tokenizer};
use htmltext_core::{Token, TokenError};

const LOG_TARGET: &str = "htmltext::html";

/// Iterator over the tokens of an HTML string.
///
/// Raw-text elements such as `script`, `style` and `title` yield their
/// content as a single text token. Adjacent character data is merged. The
/// stream always ends with exactly one `Token::Error(TokenError::EndOfInput)`
/// unless a tokenizer diagnostic ends it first in strict mode.
pub struct HtmlTokens<'a> {
    inner: Tokenizer<StringReader<'a>, DefaultEmitter>,
    strict: bool,
    pending_text: String,
    queued: Option<Token>,
    done: bool,
}

impl<'a> HtmlTokens<'a> {
    /// Tokenize `html`, skipping recoverable tokenizer diagnostics
    pub fn new(html: &'a str) -> Self {
        Self::with_strict(html, false)
    }

    /// Tokenize `html`; when `strict` is set the first tokenizer diagnostic
    /// is reported as [`TokenError::Malformed`]
    pub fn with_strict(html: &'a str, strict: bool) -> Self {
        let mut emitter = DefaultEmitter::default();
        emitter.switch_states(true);

        Self {
            inner: Tokenizer::new_with_emitter(html, emitter),
            strict,
            pending_text: String::new(),
            queued: None,
            done: false,
        }
    }

    /// Convert one html5gum token, or `None` if it should be skipped
    fn convert(&mut self, token: HtmlToken) -> Option<Token> {
        match token {
            HtmlToken::StartTag(tag) => {
                let name = String::from_utf8_lossy(&tag.name).into_owned();
                if tag.self_closing {
                    Some(Token::SelfClosing(name))
                } else {
                    Some(Token::StartTag(name))
                }
            }
            HtmlToken::EndTag(tag) => Some(Token::EndTag(
                String::from_utf8_lossy(&tag.name).into_owned(),
            )),
            HtmlToken::String(text) => {
                self.pending_text.push_str(&String::from_utf8_lossy(&text));
                None
            }
            HtmlToken::Comment(_) => Some(Token::Comment),
            HtmlToken::Doctype(_) => Some(Token::Doctype),
            HtmlToken::Error(err) => {
                if self.strict {
                    Some(Token::Error(TokenError::Malformed(format!("{err:?}"))))
                } else {
                    log::debug!(target: LOG_TARGET, "skipping tokenizer diagnostic: {err:?}");
                    None
                }
            }
        }
    }

    fn take_text(&mut self) -> Option<Token> {
        if self.pending_text.is_empty() {
            None
        } else {
            Some(Token::Text(std::mem::take(&mut self.pending_text)))
        }
    }
}

impl Iterator for HtmlTokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some(token) = self.queued.take() {
            return Some(token);
        }
        if self.done {
            return None;
        }

        while let Some(item) = self.inner.next() {
            let token = match item {
                Ok(token) => token,
                Err(never) => match never {},
            };
            let Some(token) = self.convert(token) else {
                continue;
            };
            if matches!(token, Token::Error(_)) {
                self.done = true;
            }
            // Text collected before this token goes out first
            return match self.take_text() {
                Some(text) => {
                    self.queued = Some(token);
                    Some(text)
                }
                None => Some(token),
            };
        }

        self.done = true;
        match self.take_text() {
            Some(text) => {
                self.queued = Some(Token::Error(TokenError::EndOfInput));
                Some(text)
            }
            None => Some(Token::Error(TokenError::EndOfInput)),
        }
    }
}

/// Tokenize an HTML string with the default (lenient) settings.
///
/// # Example
///
/// ```rust
/// use htmltext::{tokenize, Token};
///
/// let tokens: Vec<Token> = tokenize("<p>Hi</p>").collect();
/// assert_eq!(tokens[0], Token::StartTag("p".to_string()));
/// assert_eq!(tokens[1], Token::Text("Hi".to_string()));
/// ```
pub fn tokenize(html: &str) -> HtmlTokens<'_> {
    HtmlTokens::new(html)
}
