//! Line-oriented input driver: one hand per line, future cards resolved after
//! the whole input has been read.

use crate::deck::Deck;
use crate::hand::Hand;
use crate::parser::parse_hand;
use crate::registry::FutureCards;
use crate::token::{trim, TokenPolicy};
use std::io::{self, BufRead};
use tracing::debug;

/// Fewest slots a hand may have.
pub const MIN_HAND_SIZE: usize = 5;

/// Knobs for [`read_hands`] and [`load_hands`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    pub min_hand_size: usize,
    pub token_policy: TokenPolicy,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self { min_hand_size: MIN_HAND_SIZE, token_policy: TokenPolicy::default() }
    }
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ReadError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("not enough cards in hand on line {line}: found {found}, need at least {required}")]
    NotEnoughCards { line: usize, found: usize, required: usize },
}

/// Read every hand from `source`, registering placeholders in `registry`.
///
/// Blank lines are skipped and do not count as hands. A hand that ends up
/// with fewer than `options.min_hand_size` slots aborts the read: nothing
/// further is read, no hands are returned and `registry` is left as it was.
/// The returned hands still hold pending slots; see [`load_hands`] for the
/// resolved form.
pub fn read_hands<R: BufRead>(
    mut source: R,
    registry: &mut FutureCards,
    options: &ReadOptions,
) -> Result<Vec<Hand>, ReadError> {
    let mut pending = FutureCards::new();
    let mut hands = Vec::new();
    let mut line = String::new();
    let mut line_no = 0;
    loop {
        line.clear();
        if source.read_line(&mut line)? == 0 {
            break;
        }
        line_no += 1;
        let Some(trimmed) = trim(&line) else {
            continue;
        };
        let parsed = parse_hand(trimmed, hands.len(), &mut pending, options.token_policy);
        if parsed.hand.len() < options.min_hand_size {
            debug!(
                line = line_no,
                found = parsed.hand.len(),
                required = options.min_hand_size,
                "not enough cards in hand"
            );
            return Err(ReadError::NotEnoughCards {
                line: line_no,
                found: parsed.hand.len(),
                required: options.min_hand_size,
            });
        }
        debug!(line = line_no, cards = parsed.hand.len(), "read hand");
        hands.push(parsed.hand);
    }
    registry.append(pending);
    Ok(hands)
}

/// Read all hands and resolve their future cards against a fresh deck.
///
/// ```
/// use poker_hands::reader::{load_hands, ReadOptions};
///
/// let input = "?0 ?1 Ah Kh Qh\n\n9d 9c ?0 2c 3c\n";
/// let hands = load_hands(input.as_bytes(), &ReadOptions::default()).unwrap();
/// assert_eq!(hands[0].to_string(), "2s 3s Ah Kh Qh");
/// assert_eq!(hands[1].to_string(), "9d 9c 2s 2c 3c");
/// ```
pub fn load_hands<R: BufRead>(source: R, options: &ReadOptions) -> Result<Vec<Hand>, ReadError> {
    let mut registry = FutureCards::new();
    let mut hands = read_hands(source, &mut registry, options)?;
    let deck = Deck::generate();
    registry.resolve_all(&deck, &mut hands);
    Ok(hands)
}
