//! Conversion between notation tokens and cards.

use crate::cards::{Card, CardParseError, DECK_SIZE};
use crate::token::TokenPolicy;
use std::fmt;

/// Marker that opens a future-card token, as in `?7`.
pub const FUTURE_MARKER: char = '?';

/// Reasons a single token is dropped from a hand.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TokenError {
    #[error("invalid card '{token}': {source}")]
    InvalidCard {
        token: String,
        source: CardParseError,
    },
    #[error("future card index in '{0}' is out of range (deck has {max} cards)", max = DECK_SIZE)]
    FutureIndexOutOfRange(String),
    #[error("malformed future card '{0}'")]
    MalformedFutureIndex(String),
}

/// Position in the generated deck that a future card will take. Always `< 52`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FutureIndex(usize);

impl FutureIndex {
    pub fn new(index: usize) -> Option<Self> {
        (index < DECK_SIZE).then_some(Self(index))
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for FutureIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", FUTURE_MARKER, self.0)
    }
}

/// A decoded token: either a known card or a reference into the future deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Card(Card),
    Future(FutureIndex),
}

pub fn is_future(token: &str) -> bool {
    token.starts_with(FUTURE_MARKER)
}

/// Decode one token, branching on the future-card marker.
///
/// ```
/// use poker_hands::cards::{Card, Rank, Suit};
/// use poker_hands::codec::{decode, Token};
/// use poker_hands::token::TokenPolicy;
///
/// assert_eq!(
///     decode("Qd", TokenPolicy::Strict).unwrap(),
///     Token::Card(Card::new(Rank::Queen, Suit::Diamonds))
/// );
/// assert!(matches!(decode("?7", TokenPolicy::Strict).unwrap(), Token::Future(i) if i.get() == 7));
/// assert!(decode("?52", TokenPolicy::Strict).is_err());
/// ```
pub fn decode(token: &str, policy: TokenPolicy) -> Result<Token, TokenError> {
    if is_future(token) {
        future_index_from_token(token, policy).map(Token::Future)
    } else {
        card_from_token(token, policy).map(Token::Card)
    }
}

/// Card named by the first two characters of `token`. Under
/// [`TokenPolicy::Strict`] the token must be exactly two characters long.
pub fn card_from_token(token: &str, policy: TokenPolicy) -> Result<Card, TokenError> {
    let invalid = |source| TokenError::InvalidCard { token: token.to_string(), source };
    let mut chars = token.chars();
    let (value, suit) = match (chars.next(), chars.next()) {
        (Some(v), Some(s)) => (v, s),
        _ => return Err(invalid(CardParseError::Invalid(token.to_string()))),
    };
    if policy == TokenPolicy::Strict && chars.next().is_some() {
        return Err(invalid(CardParseError::Invalid(token.to_string())));
    }
    Card::from_letters(value, suit).map_err(invalid)
}

/// Deck index named by a `?N` token.
///
/// The legacy policy reads the leading digits after the marker and ignores any
/// trailing characters; the strict policy requires digits only. Either way at
/// least one digit is required and the value must be below the deck size.
pub fn future_index_from_token(token: &str, policy: TokenPolicy) -> Result<FutureIndex, TokenError> {
    let body = token
        .strip_prefix(FUTURE_MARKER)
        .ok_or_else(|| TokenError::MalformedFutureIndex(token.to_string()))?;
    let digits_end = body.find(|c: char| !c.is_ascii_digit()).unwrap_or(body.len());
    if digits_end == 0 || (policy == TokenPolicy::Strict && digits_end != body.len()) {
        return Err(TokenError::MalformedFutureIndex(token.to_string()));
    }
    body[..digits_end]
        .parse::<usize>()
        .ok()
        .and_then(FutureIndex::new)
        .ok_or_else(|| TokenError::FutureIndexOutOfRange(token.to_string()))
}
