//! Deferred bindings from future-card indices to hand slots.

use crate::codec::FutureIndex;
use crate::deck::Deck;
use crate::hand::{Hand, SlotRef};
use tracing::debug;

/// Buckets of slot references keyed by future index.
///
/// Bucket `i` lists every slot that must become deck card `i`. The table only
/// grows as far as the highest registered index; gaps stay as empty buckets.
/// Resolution consumes the registry, so it happens at most once.
///
/// ```
/// use poker_hands::codec::FutureIndex;
/// use poker_hands::deck::Deck;
/// use poker_hands::hand::{Hand, SlotRef};
/// use poker_hands::registry::FutureCards;
///
/// let mut hands = vec![Hand::default()];
/// let slot = hands[0].push_pending(FutureIndex::new(1).unwrap());
///
/// let mut fc = FutureCards::new();
/// fc.register(FutureIndex::new(1).unwrap(), SlotRef { hand: 0, slot });
/// fc.resolve_all(&Deck::generate(), &mut hands);
/// assert_eq!(hands[0].to_string(), "3s");
/// ```
#[derive(Debug, Default)]
pub struct FutureCards {
    buckets: Vec<Vec<SlotRef>>,
}

impl FutureCards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, index: FutureIndex, slot: SlotRef) {
        let i = index.get();
        if i >= self.buckets.len() {
            self.buckets.resize_with(i + 1, Vec::new);
        }
        debug!(index = i, hand = slot.hand, slot = slot.slot, "registered future card");
        self.buckets[i].push(slot);
    }

    /// Move every binding from `other` into `self`, keeping bucket order.
    pub fn append(&mut self, other: FutureCards) {
        if other.buckets.len() > self.buckets.len() {
            self.buckets.resize_with(other.buckets.len(), Vec::new);
        }
        for (mine, theirs) in self.buckets.iter_mut().zip(other.buckets) {
            mine.extend(theirs);
        }
    }

    /// Slots waiting on `index`.
    pub fn bucket(&self, index: FutureIndex) -> &[SlotRef] {
        self.buckets.get(index.get()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of bucket entries, including empty gaps.
    pub fn span(&self) -> usize {
        self.buckets.len()
    }

    /// Total registered slot references.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Overwrite every registered slot with the deck card at its index.
    ///
    /// # Panics
    /// When the deck is shorter than the registered span or a reference points
    /// outside `hands`. Both mean the registry was built against other inputs.
    pub fn resolve_all(self, deck: &Deck, hands: &mut [Hand]) {
        assert!(
            deck.len() >= self.buckets.len(),
            "deck of {} cards cannot resolve future index {}",
            deck.len(),
            self.buckets.len().saturating_sub(1)
        );
        for (i, bucket) in self.buckets.into_iter().enumerate() {
            if bucket.is_empty() {
                continue;
            }
            let card = deck[i];
            for r in bucket {
                let hand = hands
                    .get_mut(r.hand)
                    .unwrap_or_else(|| panic!("future card refers to missing hand {}", r.hand));
                assert!(r.slot < hand.len(), "future card refers to missing slot {r:?}");
                hand.fill(r.slot, card);
            }
            debug!(index = i, %card, "resolved future card");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};

    fn idx(i: usize) -> FutureIndex {
        FutureIndex::new(i).unwrap()
    }

    #[test]
    fn register_grows_sparsely() {
        let mut fc = FutureCards::new();
        fc.register(idx(7), SlotRef { hand: 0, slot: 0 });
        fc.register(idx(2), SlotRef { hand: 0, slot: 1 });
        fc.register(idx(7), SlotRef { hand: 1, slot: 0 });
        assert_eq!(fc.span(), 8);
        assert_eq!(fc.len(), 3);
        assert_eq!(fc.bucket(idx(7)).len(), 2);
        assert!(fc.bucket(idx(5)).is_empty());
        assert!(fc.bucket(idx(40)).is_empty());
    }

    #[test]
    fn append_merges_buckets() {
        let mut fc = FutureCards::new();
        fc.register(idx(1), SlotRef { hand: 0, slot: 0 });
        let mut more = FutureCards::new();
        more.register(idx(1), SlotRef { hand: 1, slot: 2 });
        more.register(idx(9), SlotRef { hand: 1, slot: 0 });
        fc.append(more);
        assert_eq!(fc.span(), 10);
        assert_eq!(fc.bucket(idx(1)), &[SlotRef { hand: 0, slot: 0 }, SlotRef { hand: 1, slot: 2 }]);
        assert_eq!(fc.bucket(idx(9)).len(), 1);

        fc.append(FutureCards::new());
        assert_eq!(fc.len(), 3);
    }

    #[test]
    fn shared_index_resolves_identically() {
        let mut hands = vec![Hand::default(), Hand::default()];
        let mut fc = FutureCards::new();
        for (h, hand) in hands.iter_mut().enumerate() {
            hand.push_card(Card::new(Rank::Ace, Suit::Clubs));
            let slot = hand.push_pending(idx(14));
            fc.register(idx(14), SlotRef { hand: h, slot });
        }
        fc.resolve_all(&Deck::generate(), &mut hands);
        let three_h = Card::new(Rank::Three, Suit::Hearts);
        assert_eq!(hands[0].slots()[1].card(), Some(three_h));
        assert_eq!(hands[1].slots()[1].card(), Some(three_h));
    }

    #[test]
    fn empty_registry_is_a_no_op() {
        let mut hands = vec![Hand::default()];
        hands[0].push_card(Card::new(Rank::Two, Suit::Spades));
        let before = hands.clone();
        FutureCards::new().resolve_all(&Deck::generate(), &mut hands);
        assert_eq!(hands, before);
    }

    #[test]
    #[should_panic(expected = "cannot resolve future index")]
    fn short_deck_is_fatal() {
        let mut fc = FutureCards::new();
        fc.register(idx(51), SlotRef { hand: 0, slot: 0 });
        let mut short = Deck::generate();
        short.truncate(10);
        fc.resolve_all(&short, &mut []);
    }

    #[test]
    #[should_panic(expected = "missing hand")]
    fn dangling_reference_is_fatal() {
        let mut fc = FutureCards::new();
        fc.register(idx(0), SlotRef { hand: 3, slot: 0 });
        fc.resolve_all(&Deck::generate(), &mut []);
    }
}
