//! Line trimming and tokenization for hand notation.

/// Longest token the legacy notation keeps; longer runs are cut down to this.
pub const MAX_TOKEN_LEN: usize = 3;

/// How to treat tokens longer than [`MAX_TOKEN_LEN`] characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenPolicy {
    /// Keep the first three characters and ignore the rest.
    #[default]
    Truncate,
    /// Pass the whole token through so the codec can reject it.
    Strict,
}

/// Whitespace as understood by the notation: ASCII tab through carriage
/// return, space, NEL (U+0085) and no-break space (U+00A0).
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, '\u{09}'..='\u{0D}' | ' ' | '\u{85}' | '\u{A0}')
}

/// Strip boundary whitespace. Returns `None` when nothing is left.
///
/// ```
/// use poker_hands::token::trim;
///
/// assert_eq!(trim("  Ah Kh \r\n"), Some("Ah Kh"));
/// assert_eq!(trim(" \t\n"), None);
/// ```
pub fn trim(line: &str) -> Option<&str> {
    let t = line.trim_matches(is_whitespace);
    if t.is_empty() {
        None
    } else {
        Some(t)
    }
}

/// Split a line into tokens, left to right.
///
/// ```
/// use poker_hands::token::{tokenize, TokenPolicy};
///
/// let xs: Vec<_> = tokenize("Ah  ?13\tAhhh", TokenPolicy::Truncate).collect();
/// assert_eq!(xs, ["Ah", "?13", "Ahh"]);
/// ```
pub fn tokenize(line: &str, policy: TokenPolicy) -> Tokens<'_> {
    Tokens { rest: line, policy }
}

/// Lazy iterator returned by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
    policy: TokenPolicy,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.rest.trim_start_matches(is_whitespace);
        if start.is_empty() {
            self.rest = start;
            return None;
        }
        let end = start.find(is_whitespace).unwrap_or(start.len());
        let (token, rest) = start.split_at(end);
        self.rest = rest;
        Some(match self.policy {
            TokenPolicy::Truncate => truncate(token),
            TokenPolicy::Strict => token,
        })
    }
}

fn truncate(token: &str) -> &str {
    match token.char_indices().nth(MAX_TOKEN_LEN) {
        Some((cut, _)) => &token[..cut],
        None => token,
    }
}
