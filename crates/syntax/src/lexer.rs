// Chunk: docs/chunks/python_lexer - Hand-written single-line lexer for Python-like source
//!
//! Single-pass lexer over one line of source.
//!
//! At each position the lexer tries, in order: a whitespace run, a comment,
//! a string literal (with optional prefix and triple quotes), a numeric
//! literal, an identifier, a decorator, a multi-character operator, and
//! finally a single punctuation character. Every construct takes the longest
//! match available at that position. Reaching the end of the line in the
//! middle of a construct simply ends the token there.
//!
//! The only state is scoped to one line: which kind of name the previous
//! keyword announced, and the last non-whitespace character seen. Nothing
//! carries over between lines.
//!
//! Positions are byte offsets. Every construct the lexer recognizes is
//! ASCII, and any other character becomes a one-character punctuation
//! token, so token boundaries always fall on character boundaries.

use std::ops::Range;

use crate::vocabulary::{NameKind, Vocabulary};

/// How an identifier was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentClass {
    /// Directly after a type-introducing keyword (`class Foo`)
    DeclaredType,
    /// Directly after a callable-introducing keyword (`def foo`)
    Callable,
    SelfRef,
    Keyword,
    Builtin,
    /// `__name__`
    Dunder,
    /// Directly after a `.`
    Attribute,
    /// Starts with an uppercase letter; presumed to name a class
    TypeLike,
    Plain,
}

/// The kind of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Run of spaces and tabs
    Whitespace,
    /// `#` to end of line
    Comment,
    String,
    Number,
    Identifier(IdentClass),
    /// `@` and any `name.path` characters after it
    Decorator,
    /// An entry of the multi-character operator table
    Operator,
    /// Any other single character
    Punctuation,
}

/// A token: its kind and the byte range it covers in the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub range: Range<usize>,
}

const THREE_CHAR_OPERATORS: &[&[u8]] = &[b"**=", b"//=", b">>=", b"<<=", b"..."];

const TWO_CHAR_OPERATORS: &[&[u8]] = &[
    b"==", b"!=", b">=", b"<=", b":=", b"**", b"//", b"->", b"<<", b">>", b"+=", b"-=", b"*=",
    b"/=", b"%=", b"&=", b"|=", b"^=",
];

const STRING_PREFIXES: [&[&str]; 3] = [
    &["r", "u", "f", "b"],
    &["br", "rb", "fr", "rf", "ur", "ru", "fb", "bf", "fu", "uf"],
    &["bfr", "brf", "rfr", "rfb", "fbr", "frb"],
];

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_digit_or_sep(b: u8) -> bool {
    b.is_ascii_digit() || b == b'_'
}

fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

fn is_quote(b: u8) -> bool {
    b == b'"' || b == b'\''
}

/// Returns the first index at or after `from` whose byte fails `pred`.
fn skip_while(bytes: &[u8], from: usize, pred: impl Fn(u8) -> bool) -> usize {
    let mut i = from;
    while i < bytes.len() && pred(bytes[i]) {
        i += 1;
    }
    i
}

/// Length of the longest known string prefix at `start` that is directly
/// followed by a quote. Zero means a bare quote.
fn string_prefix_len(bytes: &[u8], start: usize) -> Option<usize> {
    (0..=3).rev().find(|&len| {
        let Some(prefix) = bytes.get(start..start + len) else {
            return false;
        };
        let known = len == 0
            || STRING_PREFIXES[len - 1]
                .iter()
                .any(|p| p.as_bytes().eq_ignore_ascii_case(prefix));
        known && bytes.get(start + len).copied().is_some_and(is_quote)
    })
}

/// Scans a string literal starting at `start`, returning its end.
fn scan_string(bytes: &[u8], start: usize) -> Option<usize> {
    let prefix_len = string_prefix_len(bytes, start)?;
    let open = start + prefix_len;
    let quote = bytes[open];
    let raw = bytes[start..open].iter().any(|b| b.eq_ignore_ascii_case(&b'r'));
    let closer = [quote; 3];
    let triple = bytes[open..].starts_with(&closer);

    let mut i = open + if triple { 3 } else { 1 };
    while i < bytes.len() {
        if !raw && bytes[i] == b'\\' {
            i += 2;
            continue;
        }
        if triple {
            if bytes[i..].starts_with(&closer) {
                i += 3;
                break;
            }
        } else if bytes[i] == quote {
            i += 1;
            break;
        }
        i += 1;
    }
    Some(i.min(bytes.len()))
}

/// `0x1F`, `0b1010`, `0o777`, with `_` separators.
fn scan_radix_number(bytes: &[u8], start: usize) -> Option<usize> {
    if bytes.get(start) != Some(&b'0') {
        return None;
    }
    let digit: fn(u8) -> bool = match *bytes.get(start + 1)? {
        b'x' | b'X' => |b| b.is_ascii_hexdigit() || b == b'_',
        b'b' | b'B' => |b| matches!(b, b'0' | b'1' | b'_'),
        b'o' | b'O' => |b| matches!(b, b'0'..=b'7' | b'_'),
        _ => return None,
    };
    let end = skip_while(bytes, start + 2, digit);
    (end > start + 2).then_some(end)
}

/// `1`, `1_000`, `1.`, `1.5`, `.5`, each with an optional `e[+-]digits`.
fn scan_decimal_number(bytes: &[u8], start: usize) -> Option<usize> {
    let digit_at = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);

    let mut i = if digit_at(start) {
        let mut i = skip_while(bytes, start + 1, is_digit_or_sep);
        if bytes.get(i) == Some(&b'.') {
            i += 1;
            if digit_at(i) {
                i = skip_while(bytes, i + 1, is_digit_or_sep);
            }
        }
        i
    } else if bytes.get(start) == Some(&b'.') && digit_at(start + 1) {
        skip_while(bytes, start + 2, is_digit_or_sep)
    } else {
        return None;
    };

    // Exponent only counts when complete
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        if digit_at(j) {
            i = skip_while(bytes, j + 1, is_digit_or_sep);
        }
    }
    Some(i)
}

fn scan_number(bytes: &[u8], start: usize) -> Option<usize> {
    scan_radix_number(bytes, start).max(scan_decimal_number(bytes, start))
}

fn scan_operator(bytes: &[u8], start: usize) -> Option<usize> {
    let rest = &bytes[start..];
    if THREE_CHAR_OPERATORS.iter().any(|op| rest.starts_with(op)) {
        Some(start + 3)
    } else if TWO_CHAR_OPERATORS.iter().any(|op| rest.starts_with(op)) {
        Some(start + 2)
    } else {
        None
    }
}

/// Lexer over one line. Iterate it to get the tokens in order.
///
/// The tokens partition the line: each starts where the previous ended, and
/// the last ends at the end of the line.
pub struct Lexer<'a> {
    src: &'a str,
    vocab: &'a Vocabulary,
    pos: usize,
    /// Armed by `class`/`def`, consumed by the next identifier
    expect_name: Option<NameKind>,
    last_non_ws: Option<char>,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str, vocab: &'a Vocabulary) -> Self {
        Self {
            src,
            vocab,
            pos: 0,
            expect_name: None,
            last_non_ws: None,
        }
    }

    fn classify(&mut self, ident: &str) -> IdentClass {
        if let Some(kind) = self.expect_name.take() {
            return match kind {
                NameKind::Type => IdentClass::DeclaredType,
                NameKind::Callable => IdentClass::Callable,
            };
        }
        if self.vocab.is_self(ident) {
            IdentClass::SelfRef
        } else if self.vocab.is_keyword(ident) {
            self.expect_name = self.vocab.introduces(ident);
            IdentClass::Keyword
        } else if self.vocab.is_builtin(ident) {
            IdentClass::Builtin
        } else if is_dunder(ident) {
            IdentClass::Dunder
        } else if self.last_non_ws == Some('.') {
            IdentClass::Attribute
        } else if ident.as_bytes()[0].is_ascii_uppercase() {
            IdentClass::TypeLike
        } else {
            IdentClass::Plain
        }
    }
}

/// `__` word characters `__`, with at least one character between.
fn is_dunder(ident: &str) -> bool {
    ident.len() >= 5 && ident.starts_with("__") && ident.ends_with("__")
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let src = self.src;
        let bytes = src.as_bytes();
        let start = self.pos;
        let &first = bytes.get(start)?;

        let (kind, end) = if is_blank(first) {
            (TokenKind::Whitespace, skip_while(bytes, start + 1, is_blank))
        } else if first == b'#' {
            (TokenKind::Comment, bytes.len())
        } else if let Some(end) = scan_string(bytes, start) {
            (TokenKind::String, end)
        } else if let Some(end) = scan_number(bytes, start) {
            (TokenKind::Number, end)
        } else if is_ident_start(first) {
            let end = skip_while(bytes, start + 1, is_ident_byte);
            let class = self.classify(&src[start..end]);
            (TokenKind::Identifier(class), end)
        } else if first == b'@' {
            let end = skip_while(bytes, start + 1, |b| is_ident_byte(b) || b == b'.');
            (TokenKind::Decorator, end)
        } else if let Some(end) = scan_operator(bytes, start) {
            (TokenKind::Operator, end)
        } else {
            let width = src[start..].chars().next().map_or(1, char::len_utf8);
            (TokenKind::Punctuation, start + width)
        };

        match kind {
            TokenKind::Whitespace | TokenKind::Comment => {}
            TokenKind::Identifier(_) => {
                self.last_non_ws = src[start..end].chars().next_back();
            }
            _ => {
                self.expect_name = None;
                self.last_non_ws = src[start..end].chars().next_back();
            }
        }

        self.pos = end;
        Some(Token {
            kind,
            range: start..end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(src: &str) -> Vec<(TokenKind, &str)> {
        let vocab = Vocabulary::python();
        Lexer::new(src, &vocab)
            .map(|t| (t.kind, &src[t.range]))
            .collect()
    }

    fn ident(class: IdentClass) -> TokenKind {
        TokenKind::Identifier(class)
    }

    // ==================== Whitespace & comments ====================

    #[test]
    fn empty_line_has_no_tokens() {
        assert!(lex("").is_empty());
    }

    #[test]
    fn whitespace_run_is_one_token() {
        assert_eq!(
            lex(" \t  x"),
            vec![(TokenKind::Whitespace, " \t  "), (ident(IdentClass::Plain), "x")]
        );
    }

    #[test]
    fn comment_takes_rest_of_line() {
        assert_eq!(
            lex("x  # 'not a string' 0x1"),
            vec![
                (ident(IdentClass::Plain), "x"),
                (TokenKind::Whitespace, "  "),
                (TokenKind::Comment, "# 'not a string' 0x1"),
            ]
        );
    }

    // ==================== Strings ====================

    #[test]
    fn simple_strings() {
        assert_eq!(lex("'a'"), vec![(TokenKind::String, "'a'")]);
        assert_eq!(lex("\"a b\""), vec![(TokenKind::String, "\"a b\"")]);
    }

    #[test]
    fn string_stops_at_matching_quote() {
        assert_eq!(
            lex("'a\"b' c"),
            vec![
                (TokenKind::String, "'a\"b'"),
                (TokenKind::Whitespace, " "),
                (ident(IdentClass::Plain), "c"),
            ]
        );
    }

    #[test]
    fn escaped_quote_does_not_close() {
        assert_eq!(lex(r#""a\"b""#), vec![(TokenKind::String, r#""a\"b""#)]);
    }

    #[test]
    fn raw_string_keeps_backslash_literal() {
        assert_eq!(
            lex(r#"r"a\"b"#),
            vec![
                (TokenKind::String, r#"r"a\""#),
                (ident(IdentClass::Plain), "b"),
            ]
        );
    }

    #[test]
    fn prefixes_are_case_insensitive() {
        for src in ["f'x'", "B'x'", "Rb'x'", "bR'x'", "fR'x'", "U'x'", "bfr'x'"] {
            assert_eq!(lex(src), vec![(TokenKind::String, src)], "{}", src);
        }
    }

    #[test]
    fn unknown_prefix_is_an_identifier() {
        assert_eq!(
            lex("x'a'"),
            vec![(ident(IdentClass::Plain), "x"), (TokenKind::String, "'a'")]
        );
    }

    #[test]
    fn prefix_letter_without_quote_is_an_identifier() {
        assert_eq!(lex("rb"), vec![(ident(IdentClass::Plain), "rb")]);
        assert_eq!(lex("f(x)")[0], (ident(IdentClass::Plain), "f"));
    }

    #[test]
    fn triple_quoted_string() {
        assert_eq!(
            lex(r#""""a " b""" c"#),
            vec![
                (TokenKind::String, r#""""a " b""""#),
                (TokenKind::Whitespace, " "),
                (ident(IdentClass::Plain), "c"),
            ]
        );
    }

    #[test]
    fn unterminated_strings_run_to_end_of_line() {
        assert_eq!(lex("'abc"), vec![(TokenKind::String, "'abc")]);
        assert_eq!(lex("'''abc''"), vec![(TokenKind::String, "'''abc''")]);
        assert_eq!(lex("'ab\\"), vec![(TokenKind::String, "'ab\\")]);
    }

    #[test]
    fn empty_string_pair() {
        assert_eq!(
            lex("''+''"),
            vec![
                (TokenKind::String, "''"),
                (TokenKind::Punctuation, "+"),
                (TokenKind::String, "''"),
            ]
        );
    }

    #[test]
    fn escape_before_multibyte_char() {
        assert_eq!(lex("'\\é' x")[0], (TokenKind::String, "'\\é'"));
    }

    // ==================== Numbers ====================

    #[test]
    fn decimal_forms() {
        for src in ["0", "42", "1_000", "3.14", "1.", ".5", "1e10", "1.5E-3", "2e+8", "1_0.0_1"] {
            assert_eq!(lex(src), vec![(TokenKind::Number, src)], "{}", src);
        }
    }

    #[test]
    fn radix_forms() {
        for src in ["0x1F", "0XdeadBEEF", "0b1010", "0B1_0", "0o777", "0x_ff"] {
            assert_eq!(lex(src), vec![(TokenKind::Number, src)], "{}", src);
        }
    }

    #[test]
    fn incomplete_radix_falls_back_to_decimal() {
        assert_eq!(
            lex("0x"),
            vec![(TokenKind::Number, "0"), (ident(IdentClass::Plain), "x")]
        );
        assert_eq!(
            lex("0o8"),
            vec![(TokenKind::Number, "0"), (ident(IdentClass::Plain), "o8")]
        );
    }

    #[test]
    fn incomplete_exponent_is_not_consumed() {
        assert_eq!(
            lex("1e"),
            vec![(TokenKind::Number, "1"), (ident(IdentClass::Plain), "e")]
        );
        assert_eq!(
            lex("1e+"),
            vec![
                (TokenKind::Number, "1"),
                (ident(IdentClass::Plain), "e"),
                (TokenKind::Punctuation, "+"),
            ]
        );
    }

    #[test]
    fn number_then_identifier() {
        assert_eq!(
            lex("3abc"),
            vec![(TokenKind::Number, "3"), (ident(IdentClass::Plain), "abc")]
        );
    }

    // ==================== Identifiers ====================

    #[test]
    fn class_announces_type_name() {
        assert_eq!(
            lex("class foo"),
            vec![
                (ident(IdentClass::Keyword), "class"),
                (TokenKind::Whitespace, " "),
                (ident(IdentClass::DeclaredType), "foo"),
            ]
        );
    }

    #[test]
    fn def_announces_callable_name() {
        assert_eq!(lex("def run")[2], (ident(IdentClass::Callable), "run"));
        // Even a dunder or builtin name right after def is the callable name
        assert_eq!(lex("def __init__")[2], (ident(IdentClass::Callable), "__init__"));
        assert_eq!(lex("def print")[2], (ident(IdentClass::Callable), "print"));
    }

    #[test]
    fn punctuation_disarms_expected_name() {
        assert_eq!(lex("def (x")[3], (ident(IdentClass::Plain), "x"));
    }

    #[test]
    fn expected_name_is_consumed_once() {
        let tokens = lex("class A B");
        assert_eq!(tokens[2], (ident(IdentClass::DeclaredType), "A"));
        assert_eq!(tokens[4], (ident(IdentClass::TypeLike), "B"));
    }

    #[test]
    fn self_keyword_builtin_dunder() {
        assert_eq!(lex("self")[0].0, ident(IdentClass::SelfRef));
        assert_eq!(lex("return")[0].0, ident(IdentClass::Keyword));
        assert_eq!(lex("None")[0].0, ident(IdentClass::Keyword));
        assert_eq!(lex("len")[0].0, ident(IdentClass::Builtin));
        assert_eq!(lex("__name__")[0].0, ident(IdentClass::Dunder));
        assert_eq!(lex("____")[0].0, ident(IdentClass::Plain));
    }

    #[test]
    fn attribute_after_dot() {
        let tokens = lex("obj.value");
        assert_eq!(tokens[2], (ident(IdentClass::Attribute), "value"));
    }

    #[test]
    fn attribute_after_dot_and_whitespace() {
        assert_eq!(lex("obj. value")[3], (ident(IdentClass::Attribute), "value"));
    }

    #[test]
    fn builtin_and_keyword_win_over_attribute() {
        assert_eq!(lex("x.len")[2], (ident(IdentClass::Builtin), "len"));
        assert_eq!(lex("x.if")[2], (ident(IdentClass::Keyword), "if"));
        assert_eq!(lex("x.__dict__")[2], (ident(IdentClass::Dunder), "__dict__"));
    }

    #[test]
    fn attribute_wins_over_uppercase() {
        assert_eq!(lex("os.Path")[2], (ident(IdentClass::Attribute), "Path"));
    }

    #[test]
    fn uppercase_names_look_like_types() {
        assert_eq!(lex("Student")[0].0, ident(IdentClass::TypeLike));
        assert_eq!(lex("MAX_SIZE")[0].0, ident(IdentClass::TypeLike));
        assert_eq!(lex("_Private")[0].0, ident(IdentClass::Plain));
    }

    #[test]
    fn number_after_dot_resets_attribute_context() {
        let tokens = lex("x.5 y");
        assert_eq!(tokens[1], (TokenKind::Number, ".5"));
        assert_eq!(tokens[3], (ident(IdentClass::Plain), "y"));
    }

    // ==================== Decorators & operators ====================

    #[test]
    fn decorator_path() {
        assert_eq!(
            lex("@app.route('/')"),
            vec![
                (TokenKind::Decorator, "@app.route"),
                (TokenKind::Punctuation, "("),
                (TokenKind::String, "'/'"),
                (TokenKind::Punctuation, ")"),
            ]
        );
    }

    #[test]
    fn bare_at_is_a_decorator() {
        assert_eq!(lex("a @ b")[2], (TokenKind::Decorator, "@"));
        assert_eq!(
            lex("a @= b")[2..4],
            [(TokenKind::Decorator, "@"), (TokenKind::Punctuation, "=")]
        );
    }

    #[test]
    fn decorator_takes_digits_after_at() {
        assert_eq!(lex("@1x"), vec![(TokenKind::Decorator, "@1x")]);
    }

    #[test]
    fn decorator_disarms_expected_name() {
        assert_eq!(lex("def @x y")[4], (ident(IdentClass::Plain), "y"));
    }

    #[test]
    fn operators_take_longest_match() {
        assert_eq!(lex("**=")[0], (TokenKind::Operator, "**="));
        assert_eq!(lex("//=")[0], (TokenKind::Operator, "//="));
        assert_eq!(lex("**")[0], (TokenKind::Operator, "**"));
        assert_eq!(lex("->")[0], (TokenKind::Operator, "->"));
        assert_eq!(lex(":=")[0], (TokenKind::Operator, ":="));
        assert_eq!(lex("...")[0], (TokenKind::Operator, "..."));
    }

    #[test]
    fn single_characters_fall_back_to_punctuation() {
        assert_eq!(
            lex("(),"),
            vec![
                (TokenKind::Punctuation, "("),
                (TokenKind::Punctuation, ")"),
                (TokenKind::Punctuation, ","),
            ]
        );
    }

    #[test]
    fn non_ascii_characters_are_single_punctuation_tokens() {
        assert_eq!(
            lex("é→x"),
            vec![
                (TokenKind::Punctuation, "é"),
                (TokenKind::Punctuation, "→"),
                (ident(IdentClass::Plain), "x"),
            ]
        );
    }

    #[test]
    fn tokens_partition_the_line() {
        let src = "  @dec.x def f(a, b=0x1F): return a**2 + f'{b}' # done";
        let vocab = Vocabulary::python();
        let mut expected_start = 0;
        for token in Lexer::new(src, &vocab) {
            assert_eq!(token.range.start, expected_start);
            assert!(token.range.end > token.range.start);
            expected_start = token.range.end;
        }
        assert_eq!(expected_start, src.len());
    }
}
