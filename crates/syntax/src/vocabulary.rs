// Chunk: docs/chunks/python_lexer - Keyword and builtin tables

//! Word tables the lexer classifies identifiers against.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Python 3 keywords, including the `match`/`case` soft keywords.
pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield", "match", "case",
];

/// Python builtin functions and types.
pub const PYTHON_BUILTINS: &[&str] = &[
    "abs", "all", "any", "bin", "bool", "bytearray", "bytes", "callable", "chr",
    "classmethod", "compile", "complex", "dict", "dir", "divmod", "enumerate", "eval", "exec",
    "filter", "float", "format", "frozenset", "getattr", "globals", "hasattr", "hash", "help",
    "hex", "id", "input", "int", "isinstance", "issubclass", "iter", "len", "list", "locals",
    "map", "max", "memoryview", "min", "next", "object", "oct", "open", "ord", "pow", "print",
    "property", "range", "repr", "reversed", "round", "set", "setattr", "slice", "sorted",
    "staticmethod", "str", "sum", "super", "tuple", "type", "vars", "zip",
];

/// What kind of name a keyword announces for the identifier after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    /// `class Foo` - the next identifier is a type name
    Type,
    /// `def foo` - the next identifier is a callable name
    Callable,
}

/// The fixed word tables for one language.
///
/// Built once and never mutated; the lexer only reads from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub keywords: HashSet<String>,
    pub builtins: HashSet<String>,
    /// The self-reference token
    pub self_token: String,
    /// Keywords whose next identifier is a type name
    pub type_introducers: HashSet<String>,
    /// Keywords whose next identifier is a callable name
    pub callable_introducers: HashSet<String>,
}

fn to_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Vocabulary {
    /// The Python vocabulary.
    pub fn python() -> Self {
        Self {
            keywords: to_set(PYTHON_KEYWORDS),
            builtins: to_set(PYTHON_BUILTINS),
            self_token: "self".to_string(),
            type_introducers: to_set(&["class"]),
            callable_introducers: to_set(&["def"]),
        }
    }

    /// A shared Python vocabulary, built on first use.
    pub fn python_shared() -> &'static Vocabulary {
        static PYTHON: OnceLock<Vocabulary> = OnceLock::new();
        PYTHON.get_or_init(Vocabulary::python)
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    pub fn is_builtin(&self, word: &str) -> bool {
        self.builtins.contains(word)
    }

    pub fn is_self(&self, word: &str) -> bool {
        self.self_token == word
    }

    /// Returns the kind of name `keyword` announces, if any.
    pub fn introduces(&self, keyword: &str) -> Option<NameKind> {
        if self.type_introducers.contains(keyword) {
            Some(NameKind::Type)
        } else if self.callable_introducers.contains(keyword) {
            Some(NameKind::Callable)
        } else {
            None
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::python()
    }
}
