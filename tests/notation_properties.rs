use poker_hands::cards::{Card, Rank, Suit, DECK_SIZE};
use poker_hands::deck::Deck;
use poker_hands::token::{tokenize, trim, TokenPolicy};
use proptest::prelude::*;
use std::collections::HashSet;

fn any_value_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['2', '3', '4', '5', '6', '7', '8', '9', '0', 'J', 'Q', 'K', 'A'])
}

fn any_suit_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['s', 'h', 'd', 'c'])
}

fn any_card() -> impl Strategy<Value = Card> {
    (0..DECK_SIZE).prop_map(|i| Card::from_index(i).unwrap())
}

fn whitespace() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![' ', '\t', '\u{0B}', '\u{0C}', '\u{85}', '\u{A0}']),
        1..4,
    )
    .prop_map(|cs| cs.into_iter().collect())
}

#[test]
fn every_value_suit_pair_round_trips() {
    for r in Rank::ALL {
        for s in Suit::ALL {
            let text = format!("{}{}", r.to_char(), s.to_char());
            let card = Card::from_letters(r.to_char(), s.to_char()).unwrap();
            assert_eq!(card, Card::new(r, s));
            assert_eq!(card.to_string(), text);
        }
    }
}

#[test]
fn deck_covers_every_card_once() {
    let deck = Deck::generate();
    let seen: HashSet<(Rank, Suit)> = deck.iter().map(|c| (c.rank(), c.suit())).collect();
    assert_eq!(deck.len(), 52);
    assert_eq!(seen.len(), 52);
}

proptest! {
    #[test]
    fn render_inverts_make_card(v in any_value_char(), s in any_suit_char()) {
        let card = Card::from_letters(v, s).unwrap();
        prop_assert!(card.is_valid());
        prop_assert_eq!(card.to_string(), format!("{v}{s}"));
    }

    #[test]
    fn deck_position_matches_index_formula(i in 0..DECK_SIZE) {
        let card = Deck::generate()[i];
        prop_assert_eq!(card.rank().value() as usize, i % 13 + 2);
        prop_assert_eq!(card.suit().index() as usize, i / 13);
        prop_assert_eq!(card.index(), i);
    }

    #[test]
    fn tokens_come_back_in_order(cards in prop::collection::vec(any_card(), 1..12), seps in prop::collection::vec(whitespace(), 12)) {
        let mut line = seps[0].clone();
        for (c, sep) in cards.iter().zip(seps.iter().skip(1).chain(std::iter::repeat(&seps[0]))) {
            line.push_str(&c.to_string());
            line.push_str(sep);
        }
        let trimmed = trim(&line).unwrap();
        let tokens: Vec<&str> = tokenize(trimmed, TokenPolicy::Strict).collect();
        let expected: Vec<String> = cards.iter().map(Card::to_string).collect();
        prop_assert_eq!(tokens, expected);
    }

    #[test]
    fn unknown_letters_never_make_cards(v in any::<char>(), s in any::<char>()) {
        let value_ok = "234567890JQKA".contains(v);
        let suit_ok = "shdc".contains(s);
        prop_assert_eq!(Card::from_letters(v, s).is_ok(), value_ok && suit_ok);
    }
}
