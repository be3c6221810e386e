//! htmltext-core - token-driven HTML to plain text conversion
//!
//! This crate holds the part of the conversion that does not care where the
//! tokens come from: the tag stack, the linebreak tables, the [`Texter`]
//! callback contract with its default [`SimpleTexter`], and the [`parse`]
//! driver that ties them together. The `htmltext` crate plugs an HTML
//! tokenizer in front of it.
//!
//! # Architecture
//!
//! ```text
//! HTML String ──tokenizer──▶ Token stream ──▶ ┌────────┐ ──▶ Texter ──▶ Plain text
//!                                             │ parse  │
//!                                             │ (stack)│ ──▶ ParseError
//!                                             └────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use htmltext_core::{parse, LineBreak, SimpleTexter, Texter, Token};
//!
//! let tokens = vec![
//!     Token::StartTag("p".to_string()),
//!     Token::Text("Hello   world".to_string()),
//!     Token::EndTag("p".to_string()),
//! ];
//!
//! let mut texter = SimpleTexter::new(LineBreak::Unix);
//! parse(tokens, false, Some(&mut texter)).unwrap();
//! assert_eq!(texter.finish(), "Hello world");
//! ```

mod breakers;
mod driver;
mod options;
mod stack;
mod texter;
mod token;

pub use breakers::{closing_breaks, is_void, opening_breaks, self_breaks, VOID_ELEMENTS};
pub use driver::parse;
pub use options::{LineBreak, ParseLineBreakError};
pub use stack::TagStack;
pub use texter::{collapse_whitespace, SimpleTexter, Texter};
pub use token::{Token, TokenError};

/// Error type for a failed parse.
///
/// Every variant is terminal for the parse call that produced it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// End of input reached while an element was still open
    #[error("Unterminated tag: <{0}>")]
    UnterminatedTag(String),

    /// End tag with no open element to close
    #[error("End tag without start: </{0}>")]
    StrayEndTag(String),

    /// End tag does not close the innermost open element
    #[error("Tag mismatch: <{expected}> with </{got}>")]
    TagMismatch { expected: String, got: String },

    /// Tags were required but the input contained none
    #[error("Contains no tags")]
    NoTags,

    /// The token source failed for a reason other than end of input
    #[error("Tokenizer error: {0}")]
    Tokenizer(TokenError),
}

pub type Result<T> = std::result::Result<T, ParseError>;
