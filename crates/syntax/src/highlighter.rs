// Chunk: docs/chunks/python_lexer - Tokens to colored segments

//! Turns a line into colored segments.
//!
//! The lexer yields one token per construct; the highlighter groups them
//! into the segments a reader would expect to see colored as a unit:
//!
//! - whitespace right after a keyword joins the keyword (`"class "`)
//! - adjacent whitespace, operators and punctuation form one default
//!   segment (`" = "`, `"):"`)
//! - everything else is a segment of its own
//!
//! The segments always concatenate back to the input line.

use code_window_buffer::{ColorTag, Segment};

use crate::lexer::{IdentClass, Lexer, TokenKind};
use crate::vocabulary::Vocabulary;

impl IdentClass {
    pub fn tag(self) -> ColorTag {
        match self {
            IdentClass::DeclaredType | IdentClass::TypeLike => ColorTag::TypeName,
            IdentClass::Callable => ColorTag::FunctionName,
            IdentClass::SelfRef => ColorTag::SelfRef,
            IdentClass::Keyword => ColorTag::Keyword,
            IdentClass::Builtin => ColorTag::Builtin,
            IdentClass::Dunder => ColorTag::Dunder,
            IdentClass::Attribute => ColorTag::Attribute,
            IdentClass::Plain => ColorTag::Default,
        }
    }
}

impl TokenKind {
    pub fn tag(self) -> ColorTag {
        match self {
            TokenKind::Comment => ColorTag::Comment,
            TokenKind::String => ColorTag::String,
            TokenKind::Number => ColorTag::Number,
            TokenKind::Identifier(class) => class.tag(),
            TokenKind::Decorator => ColorTag::Decorator,
            TokenKind::Whitespace | TokenKind::Operator | TokenKind::Punctuation => ColorTag::Default,
        }
    }

    fn is_gap(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Operator | TokenKind::Punctuation
        )
    }
}

/// What the last segment can still absorb.
#[derive(Clone, Copy)]
enum Tail {
    /// A keyword: absorbs one following whitespace run
    Keyword,
    /// Whitespace/operators/punctuation: absorbs more of the same
    Gap,
    Closed,
}

/// Highlights single lines against a fixed vocabulary.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    vocab: Vocabulary,
}

impl Highlighter {
    pub fn new(vocab: Vocabulary) -> Self {
        Self { vocab }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Tokenizes `line` into colored segments.
    pub fn tokenize(&self, line: &str) -> Vec<Segment> {
        tokenize_with(line, &self.vocab)
    }
}

/// Tokenizes `line` with the Python vocabulary.
///
/// ```
/// use code_window_buffer::{ColorTag, Segment};
/// use code_window_syntax::tokenize;
///
/// assert_eq!(
///     tokenize("class Foo:"),
///     vec![
///         Segment::new("class ", ColorTag::Keyword),
///         Segment::new("Foo", ColorTag::TypeName),
///         Segment::new(":", ColorTag::Default),
///     ]
/// );
/// ```
pub fn tokenize(line: &str) -> Vec<Segment> {
    tokenize_with(line, Vocabulary::python_shared())
}

/// Tokenizes `line` into colored segments using `vocab`.
pub fn tokenize_with(line: &str, vocab: &Vocabulary) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut tail = Tail::Closed;

    for token in Lexer::new(line, vocab) {
        let text = &line[token.range];
        let absorbed = match (tail, token.kind) {
            (Tail::Keyword, TokenKind::Whitespace) => true,
            (Tail::Gap, kind) => kind.is_gap(),
            _ => false,
        };

        if let (true, Some(last)) = (absorbed, segments.last_mut()) {
            last.text.push_str(text);
            continue;
        }

        segments.push(Segment::new(text, token.kind.tag()));
        tail = match token.kind {
            TokenKind::Identifier(IdentClass::Keyword) => Tail::Keyword,
            kind if kind.is_gap() => Tail::Gap,
            _ => Tail::Closed,
        };
    }

    segments
}
