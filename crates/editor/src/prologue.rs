// Chunk: docs/chunks/editor_config - Default prologue shown above the editable region

//! The pre-highlighted lines shown before the user starts typing.
//!
//! These segments are fixed at startup and never re-tokenized, so they keep
//! their hand-tuned grouping (leading indentation folded into `"  def "`).

use code_window_buffer::{ColorTag, Segment};

fn attribute_line(attr: &str, value: &str) -> Vec<Segment> {
    vec![
        Segment::plain("    "),
        Segment::new("self", ColorTag::SelfRef),
        Segment::plain("."),
        Segment::new(attr, ColorTag::Attribute),
        Segment::plain(" = "),
        Segment::new(format!("\"{}\"", value), ColorTag::String),
    ]
}

/// The `student.py` class: a declaration, a constructor and four fields.
pub fn student_prologue() -> Vec<Vec<Segment>> {
    vec![
        vec![
            Segment::new("class ", ColorTag::Keyword),
            Segment::new("Student", ColorTag::TypeName),
            Segment::plain(":"),
        ],
        vec![
            Segment::new("  def ", ColorTag::Keyword),
            Segment::new("__init__", ColorTag::FunctionName),
            Segment::plain("("),
            Segment::new("self", ColorTag::SelfRef),
            Segment::plain("):"),
        ],
        attribute_line("name", "Caleb Kilgo"),
        attribute_line("university", "UAH"),
        attribute_line("major", "Computer Science"),
        attribute_line("focus", "Data Science"),
    ]
}
