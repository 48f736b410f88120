//! Translation of spreadsheet wildcard patterns into regular expressions.
//!
//! `*` matches any run of characters and `?` exactly one character; every other character is
//! literal. With tilde escapes enabled, `~*`, `~?` and `~~` stand for the literal character instead.
//! The translation is engine-agnostic: anchoring and case-insensitivity are applied when the regex
//! is compiled.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Star,
    QMark,
    Literal(char),
}

fn tokenize_pattern(pattern: &str, tilde_escapes: bool) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '~' if tilde_escapes => match chars.peek() {
                Some(&next) if matches!(next, '*' | '?' | '~') => {
                    let _ = chars.next();
                    tokens.push(Token::Literal(next));
                }
                _ => tokens.push(Token::Literal('~')),
            },
            '*' => tokens.push(Token::Star),
            '?' => tokens.push(Token::QMark),
            other => tokens.push(Token::Literal(other)),
        }
    }
    tokens
}

fn render(tokens: Vec<Token>, capacity: usize) -> String {
    let mut out = String::with_capacity(capacity * 2);
    let mut buf = [0u8; 4];
    for token in tokens {
        match token {
            Token::Star => out.push_str(".*"),
            Token::QMark => out.push('.'),
            Token::Literal(c) => out.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }
    out
}

/// Converts a wildcard pattern into an unanchored regex body.
///
/// ```
/// assert_eq!(formula_lookup::wildcard::to_regex("* Blvd"), ".* Blvd");
/// assert_eq!(formula_lookup::wildcard::to_regex("1.5?"), r"1\.5.");
/// assert_eq!(formula_lookup::wildcard::to_regex("a~*b"), r"a\~.*b");
/// ```
pub fn to_regex(pattern: &str) -> String {
    render(tokenize_pattern(pattern, false), pattern.len())
}

/// Like [`to_regex`], but `~*`, `~?` and `~~` produce the literal character.
///
/// ```
/// assert_eq!(formula_lookup::wildcard::to_regex_with_tilde("a~*b"), r"a\*b");
/// ```
pub fn to_regex_with_tilde(pattern: &str) -> String {
    render(tokenize_pattern(pattern, true), pattern.len())
}
