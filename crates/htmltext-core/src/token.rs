//! Token model consumed by the driver

/// A single token produced by a markup tokenizer.
///
/// Tag names are opaque and case-sensitive; the driver compares them for
/// exact equality and never normalizes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `<name>`
    StartTag(String),
    /// `</name>`
    EndTag(String),
    /// `<name/>`, or a void element
    SelfClosing(String),
    /// Character data, undecorated
    Text(String),
    Comment,
    Doctype,
    /// Terminates the stream
    Error(TokenError),
}

/// Why a token stream stopped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// Ordinary end of input
    #[error("end of input")]
    EndOfInput,

    /// The input could not be tokenized
    #[error("malformed input: {0}")]
    Malformed(String),

    /// The underlying stream failed
    #[error("stream failure: {0}")]
    Stream(String),
}

impl Token {
    /// Whether this token counts as a tag-like construct for plain-text detection
    pub fn is_tag_like(&self) -> bool {
        matches!(
            self,
            Token::StartTag(_) | Token::SelfClosing(_) | Token::Comment | Token::Doctype
        )
    }
}
