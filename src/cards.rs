use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank for a numeric value in `2..=14`.
    pub const fn from_value(value: u8) -> Option<Rank> {
        if value < 2 || value > 14 {
            return None;
        }
        Some(Rank::ALL[(value - 2) as usize])
    }

    /// Notation letter. Ten is written `0` so every card fits in two characters.
    pub const fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => '0',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            '0' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(RankParseError::Invalid(c.to_string())),
        }
    }
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::try_from(c),
            _ => Err(RankParseError::Invalid(s.to_string())),
        }
    }
}

/// Four suits in deck order: spades, hearts, diamonds, clubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Spades = 0,
    Hearts = 1,
    Diamonds = 2,
    Clubs = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Option<Suit> {
        if index as usize >= Suit::ALL.len() {
            return None;
        }
        Some(Suit::ALL[index as usize])
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Suit::try_from(c),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            's' => Ok(Suit::Spades),
            'h' => Ok(Suit::Hearts),
            'd' => Ok(Suit::Diamonds),
            'c' => Ok(Suit::Clubs),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Whether a raw (value, suit index) pair names a real card.
///
/// ```
/// use poker_hands::cards::is_valid;
///
/// assert!(is_valid(14, 0));
/// assert!(!is_valid(1, 0));
/// assert!(!is_valid(10, 4));
/// ```
pub const fn is_valid(value: u8, suit: u8) -> bool {
    value >= 2 && value <= 14 && (suit as usize) < Suit::ALL.len()
}

/// A playing card: rank + suit.
///
/// ```
/// use poker_hands::cards::{Card, Rank, Suit};
///
/// let card = Card::from_letters('0', 'c').unwrap();
/// assert_eq!(card, Card::new(Rank::Ten, Suit::Clubs));
/// assert_eq!(card.to_string(), "0c");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Build a card from its value letter and suit letter.
    pub fn from_letters(value: char, suit: char) -> Result<Self, CardParseError> {
        let rank = Rank::try_from(value)?;
        let suit = Suit::try_from(suit)?;
        Ok(Card::new(rank, suit))
    }

    /// Build a card from a numeric value (`2..=14`) and suit index (`0..4`).
    pub fn from_parts(value: u8, suit: u8) -> Result<Self, CardParseError> {
        match (Rank::from_value(value), Suit::from_index(suit)) {
            (Some(r), Some(s)) => Ok(Card::new(r, s)),
            _ => Err(CardParseError::OutOfRange { value, suit }),
        }
    }

    /// Card at position `index` of the generated deck: `index / 13` picks the
    /// suit, `index % 13 + 2` the value.
    ///
    /// ```
    /// use poker_hands::cards::Card;
    ///
    /// assert_eq!(Card::from_index(0).unwrap().to_string(), "2s");
    /// assert_eq!(Card::from_index(13).unwrap().to_string(), "2h");
    /// assert_eq!(Card::from_index(51).unwrap().to_string(), "Ac");
    /// assert!(Card::from_index(52).is_none());
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= DECK_SIZE {
            return None;
        }
        Card::from_parts((index % 13 + 2) as u8, (index / 13) as u8).ok()
    }

    /// Inverse of [`Card::from_index`].
    pub const fn index(self) -> usize {
        self.suit.index() as usize * 13 + (self.rank.value() as usize - 2)
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub const fn is_valid(self) -> bool {
        is_valid(self.rank.value(), self.suit.index())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error("no card with value {value} and suit index {suit}")]
    OutOfRange { value: u8, suit: u8 },
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(value), Some(suit), None) => Card::from_letters(value, suit),
            _ => Err(CardParseError::Invalid(s.to_string())),
        }
    }
}
