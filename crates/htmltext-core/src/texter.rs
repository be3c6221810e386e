//! Callback contract for building text, and the default implementation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::breakers::{closing_breaks, opening_breaks, self_breaks};
use crate::options::LineBreak;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\p{Zs}]+").unwrap());

/// Receives tag and text events from the driver and produces text.
///
/// An implementation may ignore any event; the driver only needs the
/// callbacks to exist.
pub trait Texter {
    /// Handle a start tag
    fn start_tag(&mut self, tag: &str);

    /// Handle a self-closing tag. `tag` is empty for comments and doctypes.
    fn self_tag(&mut self, tag: &str);

    /// Handle a closing tag
    fn end_tag(&mut self, tag: &str);

    /// Handle a text run inside `enclosing` (empty at top level)
    fn text(&mut self, enclosing: &str, input: &str);

    /// The text built so far. Calling this again without new events returns
    /// the same value.
    fn finish(&self) -> String;
}

impl<T: Texter + ?Sized> Texter for &mut T {
    fn start_tag(&mut self, tag: &str) {
        (**self).start_tag(tag);
    }

    fn self_tag(&mut self, tag: &str) {
        (**self).self_tag(tag);
    }

    fn end_tag(&mut self, tag: &str) {
        (**self).end_tag(tag);
    }

    fn text(&mut self, enclosing: &str, input: &str) {
        (**self).text(enclosing, input);
    }

    fn finish(&self) -> String {
        (**self).finish()
    }
}

impl<T: Texter + ?Sized> Texter for Box<T> {
    fn start_tag(&mut self, tag: &str) {
        (**self).start_tag(tag);
    }

    fn self_tag(&mut self, tag: &str) {
        (**self).self_tag(tag);
    }

    fn end_tag(&mut self, tag: &str) {
        (**self).end_tag(tag);
    }

    fn text(&mut self, enclosing: &str, input: &str) {
        (**self).text(enclosing, input);
    }

    fn finish(&self) -> String {
        (**self).finish()
    }
}

/// Collapse every whitespace run to a single space
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").into_owned()
}

/// Default [`Texter`]: paragraph, heading and list breaks from the built-in
/// tables, collapsed whitespace, and `<title>` contents dropped.
#[derive(Debug, Clone, Default)]
pub struct SimpleTexter {
    buf: String,
    line_break: LineBreak,
}

impl SimpleTexter {
    pub fn new(line_break: LineBreak) -> Self {
        Self {
            buf: String::new(),
            line_break,
        }
    }

    fn push_breaks(&mut self, count: usize) {
        for _ in 0..count {
            self.buf.push_str(self.line_break.as_str());
        }
    }
}

impl Texter for SimpleTexter {
    fn start_tag(&mut self, tag: &str) {
        self.push_breaks(opening_breaks(tag));
    }

    fn self_tag(&mut self, tag: &str) {
        self.push_breaks(self_breaks(tag));
    }

    fn end_tag(&mut self, tag: &str) {
        self.push_breaks(closing_breaks(tag));
    }

    fn text(&mut self, enclosing: &str, input: &str) {
        if enclosing != "title" {
            self.buf.push_str(&collapse_whitespace(input));
        }
    }

    fn finish(&self) -> String {
        self.buf
            .trim_matches(|c| matches!(c, ' ' | '\r' | '\n'))
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("a  b\t\tc\n\nd"), "a b c d");
        assert_eq!(collapse_whitespace("a\u{00A0}\u{2003} b"), "a b");
        assert_eq!(collapse_whitespace("   "), " ");
        assert_eq!(collapse_whitespace("plain"), "plain");
    }

    #[test]
    fn test_collapse_whitespace_idempotent() {
        let once = collapse_whitespace(" x \n\t y  ");
        assert_eq!(collapse_whitespace(&once), once);
    }

    #[test]
    fn test_paragraph_breaks() {
        let mut texter = SimpleTexter::new(LineBreak::Unix);
        texter.start_tag("p");
        texter.text("p", "Hello");
        texter.end_tag("p");
        texter.start_tag("p");
        texter.text("p", "World");
        texter.end_tag("p");
        assert_eq!(texter.finish(), "Hello\n\nWorld");
    }

    #[test]
    fn test_windows_breaks() {
        let mut texter = SimpleTexter::new(LineBreak::Windows);
        texter.text("", "one");
        texter.self_tag("br");
        texter.text("", "two");
        texter.start_tag("h1");
        texter.text("h1", "three");
        texter.end_tag("h1");
        assert_eq!(texter.finish(), "one\r\ntwo\r\n\r\nthree");
    }

    #[test]
    fn test_title_dropped() {
        let mut texter = SimpleTexter::default();
        texter.start_tag("title");
        texter.text("title", "Ignored");
        texter.end_tag("title");
        texter.text("", "Kept");
        assert_eq!(texter.finish(), "Kept");
    }

    #[test]
    fn test_finish_trims_only_spaces_and_breaks() {
        let mut texter = SimpleTexter::default();
        texter.text("", "\t x \t");
        texter.self_tag("br");
        assert_eq!(texter.finish(), "x");
        assert_eq!(texter.finish(), "x");
    }

    #[test]
    fn test_list_items() {
        let mut texter = SimpleTexter::default();
        texter.start_tag("ul");
        for item in ["one", "two"] {
            texter.start_tag("li");
            texter.text("li", item);
            texter.end_tag("li");
        }
        texter.end_tag("ul");
        assert_eq!(texter.finish(), "one\ntwo");
    }

    #[test]
    fn test_boxed_texter() {
        let mut boxed: Box<dyn Texter> = Box::new(SimpleTexter::default());
        boxed.start_tag("p");
        boxed.text("p", "boxed");
        boxed.end_tag("p");
        assert_eq!(boxed.finish(), "boxed");
    }
}
