use crate::codec::{decode, Token, TokenError};
use crate::hand::{Hand, SlotRef};
use crate::registry::FutureCards;
use crate::token::{tokenize, TokenPolicy};
use tracing::warn;

/// A parsed hand together with the tokens that were dropped from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedHand {
    pub hand: Hand,
    pub rejected: Vec<TokenError>,
}

/// Build a hand from one trimmed line.
///
/// Cards are appended in token order. Each `?N` appends a placeholder and
/// registers it in `registry` under `N`, addressed as slot `k` of hand
/// `hand_index`. Tokens that fail to decode are logged, recorded in
/// [`ParsedHand::rejected`], and leave no slot behind.
///
/// ```
/// use poker_hands::parser::parse_hand;
/// use poker_hands::registry::FutureCards;
/// use poker_hands::token::TokenPolicy;
///
/// let mut fc = FutureCards::new();
/// let parsed = parse_hand("?0 Ah Zz Kh", 0, &mut fc, TokenPolicy::Truncate);
/// assert_eq!(parsed.hand.len(), 3);
/// assert_eq!(parsed.rejected.len(), 1);
/// assert_eq!(fc.len(), 1);
/// ```
pub fn parse_hand(
    line: &str,
    hand_index: usize,
    registry: &mut FutureCards,
    policy: TokenPolicy,
) -> ParsedHand {
    let mut out = ParsedHand::default();
    for token in tokenize(line, policy).filter(|t| !t.is_empty()) {
        match decode(token, policy) {
            Ok(Token::Card(card)) => out.hand.push_card(card),
            Ok(Token::Future(index)) => {
                let slot = out.hand.push_pending(index);
                registry.register(index, SlotRef { hand: hand_index, slot });
            }
            Err(e) => {
                warn!(hand = hand_index, error = %e, "dropping token");
                out.rejected.push(e);
            }
        }
    }
    out
}
