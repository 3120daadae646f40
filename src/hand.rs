use crate::cards::Card;
use crate::codec::FutureIndex;
use std::fmt;

/// One position in a hand: a known card, or a placeholder waiting for the
/// deck card at its future index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Card(Card),
    Pending(FutureIndex),
}

impl Slot {
    pub fn card(self) -> Option<Card> {
        match self {
            Slot::Card(c) => Some(c),
            Slot::Pending(_) => None,
        }
    }

    pub fn is_resolved(self) -> bool {
        matches!(self, Slot::Card(_))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Card(c) => write!(f, "{c}"),
            Slot::Pending(_) => f.write_str("??"),
        }
    }
}

/// Address of a slot inside a collection of hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotRef {
    pub hand: usize,
    pub slot: usize,
}

/// Cards from one input line, in input order.
///
/// ```
/// use poker_hands::cards::{Card, Rank, Suit};
/// use poker_hands::hand::Hand;
///
/// let mut hand = Hand::default();
/// hand.push_card(Card::new(Rank::Ace, Suit::Hearts));
/// hand.push_card(Card::new(Rank::Ten, Suit::Clubs));
/// assert_eq!(hand.to_string(), "Ah 0c");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    slots: Vec<Slot>,
}

impl Hand {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn push_card(&mut self, card: Card) {
        self.slots.push(Slot::Card(card));
    }

    /// Append a placeholder and return its slot position.
    pub fn push_pending(&mut self, index: FutureIndex) -> usize {
        self.slots.push(Slot::Pending(index));
        self.slots.len() - 1
    }

    pub fn pending(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_resolved()).count()
    }

    pub fn is_resolved(&self) -> bool {
        self.pending() == 0
    }

    /// All cards, or `None` while any placeholder is unresolved.
    pub fn cards(&self) -> Option<Vec<Card>> {
        self.slots.iter().map(|s| s.card()).collect()
    }

    pub(crate) fn fill(&mut self, slot: usize, card: Card) {
        self.slots[slot] = Slot::Card(card);
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{slot}")?;
        }
        Ok(())
    }
}
