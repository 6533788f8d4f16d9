//! Streaming visible-text extraction built on `lol_html`.
//!
//! The scan keeps exactly one piece of state: the name of the most recent
//! start tag. A text node is dropped when that tag is `script` or `style`.
//! There is no element stack, so text that follows `</script>` is still
//! attributed to the script until the next start tag opens; nesting is not
//! tracked. Self-closing tags such as `<br/>` do not count as start tags.
//!
//! The rewriter runs in strict mode and bails out on markup it cannot
//! tokenize unambiguously (e.g. `<select><xmp>`). The scan ends there.

use lol_html::{doc_text, element, HtmlRewriter, OutputSink, Settings};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Bytes handed to the rewriter per step; segments are produced as they complete
const CHUNK_SIZE: usize = 8 * 1024;

/// Start tags whose text content never counts as visible text
const SUPPRESSED_TAGS: [&str; 2] = ["script", "style"];

/// Returns a lazy iterator over the visible text segments of an HTML document
///
/// Each segment is one text node, entity-decoded and trimmed. Empty
/// segments are skipped. If the document cannot be parsed past some point,
/// the iterator simply ends there; segments produced before that are kept.
///
/// # Example
///
/// ```
/// use skweez::extract::text_segments;
///
/// let html = b"<script>var x=1</script><p>hello &amp; world</p>";
/// let segments: Vec<String> = text_segments(html).collect();
/// assert_eq!(segments, vec!["hello & world"]);
/// ```
pub fn text_segments(html: &[u8]) -> TextSegments<'_> {
    TextSegments::new(html)
}

/// Iterator returned by [`text_segments`]
pub struct TextSegments<'a> {
    rewriter: Option<HtmlRewriter<'static, NoopSink>>,
    input: &'a [u8],
    state: Rc<RefCell<ScanState>>,
}

#[derive(Default)]
struct ScanState {
    /// Name of the most recently opened element
    last_start_tag: String,
    /// Text of the node currently being streamed
    pending: String,
    ready: VecDeque<String>,
}

impl ScanState {
    fn in_suppressed_element(&self) -> bool {
        SUPPRESSED_TAGS
            .iter()
            .any(|tag| self.last_start_tag.eq_ignore_ascii_case(tag))
    }

    fn push_text(&mut self, text: &str, last_in_node: bool) {
        self.pending.push_str(text);
        if last_in_node {
            self.finish_node();
        }
    }

    fn finish_node(&mut self) {
        let raw = std::mem::take(&mut self.pending);
        if raw.is_empty() || self.in_suppressed_element() {
            return;
        }

        let decoded = html_escape::decode_html_entities(&raw);
        let trimmed = decoded.trim();
        if !trimmed.is_empty() {
            self.ready.push_back(trimmed.to_string());
        }
    }
}

impl<'a> TextSegments<'a> {
    fn new(input: &'a [u8]) -> Self {
        let state = Rc::new(RefCell::new(ScanState::default()));
        let tag_state = Rc::clone(&state);
        let text_state = Rc::clone(&state);

        let rewriter = HtmlRewriter::new(
            Settings {
                element_content_handlers: vec![element!("*", move |el| {
                    if !el.is_self_closing() {
                        tag_state.borrow_mut().last_start_tag = el.tag_name();
                    }
                    Ok(())
                })],
                document_content_handlers: vec![doc_text!(move |chunk| {
                    text_state
                        .borrow_mut()
                        .push_text(chunk.as_str(), chunk.last_in_text_node());
                    Ok(())
                })],
                strict: true,
                ..Settings::default()
            },
            NoopSink,
        );

        Self {
            rewriter: Some(rewriter),
            input,
            state,
        }
    }

    /// Feeds the next chunk of input, or finishes the document
    fn advance(&mut self) {
        if self.input.is_empty() {
            if let Some(rewriter) = self.rewriter.take() {
                if let Err(e) = rewriter.end() {
                    tracing::trace!("HTML scan stopped at end of document: {}", e);
                }
                self.state.borrow_mut().finish_node();
            }
            return;
        }

        let (chunk, rest) = self.input.split_at(self.input.len().min(CHUNK_SIZE));
        self.input = rest;

        let failed = match self.rewriter.as_mut() {
            Some(rewriter) => match rewriter.write(chunk) {
                Ok(()) => false,
                Err(e) => {
                    tracing::trace!("HTML scan stopped early: {}", e);
                    true
                }
            },
            None => false,
        };

        if failed {
            self.rewriter = None;
            self.input = &[];
        }
    }
}

impl Iterator for TextSegments<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let ready = self.state.borrow_mut().ready.pop_front();
            if ready.is_some() {
                return ready;
            }

            self.rewriter.as_ref()?;
            self.advance();
        }
    }
}

/// Discards the rewritten output; only the handlers matter here
struct NoopSink;

impl OutputSink for NoopSink {
    fn handle_chunk(&mut self, _chunk: &[u8]) {}
}
