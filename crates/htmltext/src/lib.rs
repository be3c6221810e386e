//! # htmltext
//!
//! Convert HTML to plain text.
//!
//! Markup is tokenized and walked once. Paragraphs, headings and list items
//! become linebreaks, whitespace runs collapse to one space, `<title>`
//! contents are dropped, and everything else is kept as text. Nesting is
//! checked on the way: an unclosed or mismatched tag makes the conversion
//! fail.
//!
//! ## Example
//!
//! ```rust
//! use htmltext::{html_to_text, is_plain_text, LineBreak};
//!
//! let text = html_to_text("<p>Hello</p><p>World</p>", LineBreak::Unix);
//! assert_eq!(text, "Hello\n\nWorld");
//!
//! assert!(is_plain_text("hello world"));
//! assert!(!is_plain_text("<p>hi</p>"));
//! ```
//!
//! ## Example (custom texter)
//!
//! ```rust
//! use htmltext::{custom_to_text, Texter};
//!
//! #[derive(Default)]
//! struct Shout(String);
//!
//! impl Texter for Shout {
//!     fn start_tag(&mut self, _tag: &str) {}
//!     fn self_tag(&mut self, _tag: &str) {}
//!     fn end_tag(&mut self, _tag: &str) {}
//!     fn text(&mut self, _enclosing: &str, input: &str) {
//!         self.0.push_str(&input.to_uppercase());
//!     }
//!     fn finish(&self) -> String {
//!         self.0.clone()
//!     }
//! }
//!
//! let mut shout = Shout::default();
//! let text = custom_to_text("<b>hey</b>", true, &mut shout).unwrap();
//! assert_eq!(text, "HEY");
//! ```

#[cfg(feature = "html")]
pub mod html;
#[cfg(feature = "html")]
mod service;

#[cfg(feature = "html")]
pub use html::{tokenize, HtmlTokens};
#[cfg(feature = "html")]
pub use service::{TextOptions, TextService};

pub use htmltext_core::{
    collapse_whitespace, is_void, parse, LineBreak, ParseError, Result, SimpleTexter, TagStack,
    Texter, Token, TokenError,
};

/// Generate text from HTML using the built-in texter.
///
/// Returns an empty string if the markup is not well-formed.
#[cfg(feature = "html")]
pub fn html_to_text(html: &str, line_break: LineBreak) -> String {
    TextService::with_options(TextOptions::default().line_break(line_break)).to_text(html)
}

/// Generate text from HTML using a supplied texter.
///
/// If `require_tags` is set, input that looks like plain text fails with
/// [`ParseError::NoTags`].
#[cfg(feature = "html")]
pub fn custom_to_text(html: &str, require_tags: bool, texter: &mut dyn Texter) -> Result<String> {
    TextService::new().to_text_with(html, require_tags, texter)
}

/// Returns true if the source appears to be plain text: it contains no
/// tags, doctype or comments, and is not malformed markup.
#[cfg(feature = "html")]
pub fn is_plain_text(html: &str) -> bool {
    TextService::new().is_plain_text(html)
}

/// Check that the markup is well-formed.
#[cfg(feature = "html")]
pub fn validate(html: &str) -> Result<()> {
    TextService::new().validate(html)
}
