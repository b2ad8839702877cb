// Chunk: docs/chunks/segment_model - Colored segments and committed lines
//!
//! The data the presentation layer consumes: lines made of `(text, tag)`
//! segments.
//!
//! Concatenating a line's segment texts gives back the raw line exactly;
//! segments partition the line with no gaps or overlaps.

use serde::{Deserialize, Serialize};

/// Display color category of a segment.
///
/// The tag says what a span of text *is*; mapping tags to actual colors is
/// left to a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTag {
    Keyword,
    Builtin,
    /// The reserved self-reference token (`self`)
    SelfRef,
    String,
    Number,
    /// A class name, declared or referenced
    TypeName,
    /// The name following a callable-introducing keyword
    FunctionName,
    /// `__name__`-style identifiers
    Dunder,
    /// An identifier directly after a `.`
    Attribute,
    Decorator,
    Comment,
    /// Plain identifiers, whitespace, operators and punctuation
    #[default]
    Default,
}

impl ColorTag {
    /// All tags, in declaration order.
    pub const ALL: [ColorTag; 12] = [
        ColorTag::Keyword,
        ColorTag::Builtin,
        ColorTag::SelfRef,
        ColorTag::String,
        ColorTag::Number,
        ColorTag::TypeName,
        ColorTag::FunctionName,
        ColorTag::Dunder,
        ColorTag::Attribute,
        ColorTag::Decorator,
        ColorTag::Comment,
        ColorTag::Default,
    ];
}

/// A contiguous run of line text with one color tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub tag: ColorTag,
}

impl Segment {
    /// Creates a new segment with the given text and tag.
    pub fn new(text: impl Into<String>, tag: ColorTag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }

    /// Creates a default-colored segment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, ColorTag::Default)
    }

    /// Number of characters in this segment.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Where a line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOrigin {
    /// Fixed at startup, never re-tokenized, never removed
    Prologue,
    /// Committed by the user with the commit key
    User,
}

/// A finished line as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    segments: Vec<Segment>,
    origin: LineOrigin,
}

impl Line {
    /// Creates a prologue line from pre-computed segments.
    pub fn prologue(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            origin: LineOrigin::Prologue,
        }
    }

    /// Creates a committed user line.
    pub fn user(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            origin: LineOrigin::User,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn origin(&self) -> LineOrigin {
        self.origin
    }

    /// Reconstructs the raw line text from the segments.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Returns the total character count across all segments.
    pub fn char_count(&self) -> usize {
        self.segments.iter().map(Segment::char_count).sum()
    }

    /// Returns true if the line has no text.
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.text.is_empty())
    }
}

/// What a line store mutation did.
///
/// The editor uses this to decide whether the current line must be
/// re-tokenized and the row count recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Nothing changed (length cap hit, nothing to delete).
    Unchanged,
    /// Only the current line's text changed.
    CurrentLineChanged,
    /// The current line was committed and the current line is now empty.
    Committed,
    /// The last committed line was pulled back into the current line.
    MergedUp,
}

impl EditOutcome {
    /// Returns true if the edit was a no-op.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, EditOutcome::Unchanged)
    }

    /// Returns true if the committed line sequence changed.
    pub fn changed_committed_lines(&self) -> bool {
        matches!(self, EditOutcome::Committed | EditOutcome::MergedUp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_text_concatenates_segments() {
        let line = Line::user(vec![
            Segment::new("class ", ColorTag::Keyword),
            Segment::new("Foo", ColorTag::TypeName),
            Segment::plain(":"),
        ]);
        assert_eq!(line.text(), "class Foo:");
        assert_eq!(line.char_count(), 10);
        assert_eq!(line.origin(), LineOrigin::User);
    }

    #[test]
    fn char_count_counts_characters_not_bytes() {
        let line = Line::user(vec![Segment::new("\"héllo\"", ColorTag::String)]);
        assert_eq!(line.char_count(), 7);
    }

    #[test]
    fn empty_line() {
        assert!(Line::user(vec![]).is_empty());
        assert_eq!(Line::user(vec![]).text(), "");
        assert!(!Line::prologue(vec![Segment::plain(" ")]).is_empty());
    }

    #[test]
    fn default_tag_is_default() {
        assert_eq!(ColorTag::default(), ColorTag::Default);
        assert_eq!(Segment::plain("x").tag, ColorTag::Default);
    }

    #[test]
    fn tags_serialize_snake_case() {
        let json = serde_json::to_string(&Segment::new("self", ColorTag::SelfRef)).unwrap();
        assert_eq!(json, r#"{"text":"self","tag":"self_ref"}"#);

        let seg: Segment = serde_json::from_str(r#"{"text":"Foo","tag":"type_name"}"#).unwrap();
        assert_eq!(seg, Segment::new("Foo", ColorTag::TypeName));
    }

    #[test]
    fn outcome_predicates() {
        assert!(EditOutcome::Unchanged.is_unchanged());
        assert!(!EditOutcome::CurrentLineChanged.changed_committed_lines());
        assert!(EditOutcome::Committed.changed_committed_lines());
        assert!(EditOutcome::MergedUp.changed_committed_lines());
    }
}
