use crate::cards::{Card, DECK_SIZE};
use std::ops::Index;

/// The 52-card lookup deck used to resolve future cards. Position `i` always
/// holds [`Card::from_index(i)`](Card::from_index); it is never shuffled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use poker_hands::deck::Deck;
    ///
    /// let deck = Deck::generate();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck[0].to_string(), "2s");
    /// assert_eq!(deck[51].to_string(), "Ac");
    /// ```
    pub fn generate() -> Self {
        let cards = (0..DECK_SIZE).filter_map(Card::from_index).collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    #[cfg(test)]
    pub(crate) fn truncate(&mut self, len: usize) {
        self.cards.truncate(len);
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}
