//! Highlight span resolution: split analyzed text into plain and annotated segments.

use super::RawHighlight;

/// A contiguous piece of the analyzed text, either plain or annotated with
/// one bias category. Concatenating a resolved sequence in order reproduces
/// the input text exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Annotated { text: &'a str, category: &'a str },
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Segment::Plain(text) => text,
            Segment::Annotated { text, .. } => text,
        }
    }
}

/// Resolve raw highlight spans into an ordered, non-overlapping segment
/// sequence covering `text` exactly once.
///
/// Offsets count Unicode scalar values (the upstream service indexes strings
/// by code point). Invalid spans (negative start, end past the text,
/// zero-width or inverted) are silently dropped. Overlaps are resolved by a
/// greedy sweep in ascending `(start, end)` order: a span colliding with an
/// already-emitted one is truncated to begin where the previous span ended,
/// and dropped if nothing remains. Never fails, deterministic for any input.
///
/// An empty `text` resolves to an empty sequence.
pub fn resolve_segments<'a>(text: &'a str, highlights: &'a [RawHighlight]) -> Vec<Segment<'a>> {
    // Byte offset of every char boundary, plus the end of the text.
    let byte_at: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_len = byte_at.len() - 1;

    let mut spans: Vec<(usize, usize, &str)> = highlights
        .iter()
        .filter(|h| h.start >= 0 && h.end <= char_len as i64 && h.start < h.end)
        .map(|h| (h.start as usize, h.end as usize, h.category.as_str()))
        .collect();
    spans.sort_by_key(|&(start, end, _)| (start, end));

    let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
    let mut pos = 0usize;
    for (start, end, category) in spans {
        let start = start.max(pos);
        if start >= end {
            continue;
        }
        if start > pos {
            segments.push(Segment::Plain(&text[byte_at[pos]..byte_at[start]]));
        }
        segments.push(Segment::Annotated {
            text: &text[byte_at[start]..byte_at[end]],
            category,
        });
        pos = end;
    }
    if pos < char_len {
        segments.push(Segment::Plain(&text[byte_at[pos]..]));
    }
    segments
}
