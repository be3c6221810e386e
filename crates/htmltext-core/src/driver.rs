//! The parse loop: walks a token stream, keeps the tag stack balanced and
//! forwards events to a [`Texter`].

use crate::breakers::is_void;
use crate::stack::TagStack;
use crate::texter::Texter;
use crate::token::{Token, TokenError};
use crate::{ParseError, Result};

const LOG_TARGET: &str = "htmltext::driver";

/// Drive `tokens` through the tag stack, calling `texter` for every tag and
/// text event.
///
/// Stops at the first error. An iterator that runs out without an explicit
/// [`TokenError::EndOfInput`] is treated as ending normally. When
/// `require_tags` is set, input without any start tag, self-closing tag,
/// comment or doctype fails with [`ParseError::NoTags`].
///
/// Pass `None` as `texter` to only check well-formedness.
pub fn parse<I>(tokens: I, require_tags: bool, mut texter: Option<&mut dyn Texter>) -> Result<()>
where
    I: IntoIterator<Item = Token>,
{
    let mut stack = TagStack::new();
    let mut untagged = true;
    let mut tokens = tokens.into_iter();

    let result = loop {
        let token = match tokens.next() {
            Some(Token::StartTag(tag)) if is_void(&tag) => Token::SelfClosing(tag),
            Some(token) => token,
            None => Token::Error(TokenError::EndOfInput),
        };
        log::trace!(target: LOG_TARGET, "token at depth {}: {token:?}", stack.depth());
        if token.is_tag_like() {
            untagged = false;
        }

        match token {
            Token::Error(TokenError::EndOfInput) => {
                if let Some(open) = stack.pop() {
                    break Err(ParseError::UnterminatedTag(open));
                }
                if untagged && require_tags {
                    break Err(ParseError::NoTags);
                }
                break Ok(());
            }

            Token::Error(cause) => break Err(ParseError::Tokenizer(cause)),

            Token::StartTag(tag) => {
                if let Some(texter) = texter.as_deref_mut() {
                    texter.start_tag(&tag);
                }
                stack.push(tag);
            }

            Token::Text(text) => {
                if let Some(texter) = texter.as_deref_mut() {
                    texter.text(stack.peek(), &text);
                }
            }

            Token::SelfClosing(tag) => {
                if let Some(texter) = texter.as_deref_mut() {
                    texter.self_tag(&tag);
                }
            }

            Token::Comment | Token::Doctype => {
                if let Some(texter) = texter.as_deref_mut() {
                    texter.self_tag("");
                }
            }

            Token::EndTag(tag) => {
                let Some(open) = stack.pop() else {
                    break Err(ParseError::StrayEndTag(tag));
                };
                if open != tag {
                    break Err(ParseError::TagMismatch {
                        expected: open,
                        got: tag,
                    });
                }
                if let Some(texter) = texter.as_deref_mut() {
                    texter.end_tag(&tag);
                }
            }
        }
    };

    if let Err(err) = &result {
        log::debug!(target: LOG_TARGET, "parse failed: {err}");
    }
    result
}
