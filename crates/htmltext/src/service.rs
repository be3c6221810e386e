//! TextService - the main entry point for HTML to plain text conversion.

use htmltext_core::{parse, LineBreak, ParseError, Result, SimpleTexter, Texter};

use crate::html::HtmlTokens;

/// Options for TextService
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextOptions {
    /// Linebreak written by the built-in texter
    pub line_break: LineBreak,

    /// Treat tokenizer diagnostics as errors instead of skipping them
    pub strict: bool,
}

impl TextOptions {
    pub fn line_break(mut self, line_break: LineBreak) -> Self {
        self.line_break = line_break;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// The main service for converting HTML to plain text.
///
/// Holds no state between calls, so one service can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct TextService {
    options: TextOptions,
}

impl TextService {
    /// Create a new TextService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a TextService with custom options
    pub fn with_options(options: TextOptions) -> Self {
        Self { options }
    }

    /// Convert HTML to text with the built-in texter, returning `""` if the
    /// markup is not well-formed
    pub fn to_text(&self, html: &str) -> String {
        self.try_to_text(html).unwrap_or_default()
    }

    /// Convert HTML to text with the built-in texter
    pub fn try_to_text(&self, html: &str) -> Result<String> {
        let mut texter = SimpleTexter::new(self.options.line_break);
        self.to_text_with(html, false, &mut texter)
    }

    /// Convert HTML to text with a caller-supplied texter.
    ///
    /// With `require_tags` set, input containing no tags fails with
    /// [`ParseError::NoTags`].
    pub fn to_text_with(
        &self,
        html: &str,
        require_tags: bool,
        texter: &mut dyn Texter,
    ) -> Result<String> {
        parse(self.tokens(html), require_tags, Some(&mut *texter))?;
        Ok(texter.finish())
    }

    /// Check that the markup is well-formed without producing text
    pub fn validate(&self, html: &str) -> Result<()> {
        parse(self.tokens(html), false, None)
    }

    /// Whether the source contains no tags, doctype or comments at all.
    ///
    /// Malformed markup is not plain text.
    pub fn is_plain_text(&self, html: &str) -> bool {
        matches!(parse(self.tokens(html), true, None), Err(ParseError::NoTags))
    }

    fn tokens<'a>(&self, html: &'a str) -> HtmlTokens<'a> {
        HtmlTokens::with_strict(html, self.options.strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = TextOptions::default();
        assert_eq!(options.line_break, LineBreak::Unix);
        assert!(!options.strict);
        assert_eq!(TextService::new().to_text("<p>a</p><p>b</p>"), "a\n\nb");
    }

    #[test]
    fn test_windows_line_breaks() {
        let service =
            TextService::with_options(TextOptions::default().line_break(LineBreak::Windows));
        assert_eq!(
            service.to_text("<h1>Title</h1><p>Body</p>"),
            "Title\r\n\r\n\r\nBody"
        );
    }

    #[test]
    fn test_try_to_text_surfaces_error() {
        let service = TextService::new();
        assert_eq!(
            service.try_to_text("<p>Hi"),
            Err(ParseError::UnterminatedTag("p".to_string()))
        );
        assert_eq!(service.to_text("<p>Hi"), "");
    }

    #[test]
    fn test_require_tags() {
        let service = TextService::new();
        let mut texter = SimpleTexter::default();
        assert_eq!(
            service.to_text_with("just text", true, &mut texter),
            Err(ParseError::NoTags)
        );
        let mut texter = SimpleTexter::default();
        assert_eq!(
            service.to_text_with("just   text", false, &mut texter),
            Ok("just text".to_string())
        );
    }

    #[test]
    fn test_validate() {
        let service = TextService::new();
        assert_eq!(service.validate("<div><p>ok</p></div>"), Ok(()));
        assert_eq!(
            service.validate("</p>"),
            Err(ParseError::StrayEndTag("p".to_string()))
        );
    }

    #[test]
    fn test_strict_mode() {
        let lenient = TextService::new();
        let strict = TextService::with_options(TextOptions::default().strict(true));
        let html = "<p>x</p></>";
        assert_eq!(lenient.to_text(html), "x");
        assert!(matches!(strict.try_to_text(html), Err(ParseError::Tokenizer(_))));
    }

    #[test]
    fn test_service_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TextService>();
    }
}
