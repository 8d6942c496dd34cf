//! Tag-event extraction from raw source text.
//!
//! The nesting check works on a flat token stream of the original bytes,
//! not on the parsed tree; the two are independent views of the same
//! source. This module adapts the html5ever tokenizer into that stream.

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    BufferQueue, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

/// A start or end tag event, carrying the tag name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagToken {
    Open(String),
    Close(String),
}

struct TagCollector {
    tags: Vec<TagToken>,
}

impl TokenSink for TagCollector {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        if let Token::TagToken(tag) = token {
            match tag.kind {
                TagKind::StartTag => {
                    // Self-closing tags open nothing; the stack never sees them.
                    if !tag.self_closing {
                        self.tags.push(TagToken::Open(tag.name.to_string()));
                    }
                }
                TagKind::EndTag => self.tags.push(TagToken::Close(tag.name.to_string())),
            }
        }
        TokenSinkResult::Continue
    }
}

/// Scan `source` into the tag-event stream consumed by the nesting check.
/// Text, comment, and doctype tokens are dropped here.
pub fn tag_stream(source: &str) -> Vec<TagToken> {
    let mut input: BufferQueue = BufferQueue::default();
    input.push_back(StrTendril::from(source));
    let mut tokenizer = Tokenizer::new(TagCollector { tags: Vec::new() }, TokenizerOpts::default());
    let _ = tokenizer.feed(&mut input);
    tokenizer.end();
    tokenizer.sink.tags
}
