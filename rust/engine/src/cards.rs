use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Represents one of the four suits in a standard 52-card deck.
/// Declaration order is the ordinal used by [`Card::index`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠), ordinal 0
    Spades,
    /// Hearts suit (♥), ordinal 1
    Hearts,
    /// Diamonds suit (♦), ordinal 2
    Diamonds,
    /// Clubs suit (♣), ordinal 3
    Clubs,
}

impl Suit {
    pub fn ordinal(self) -> u8 {
        match self {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
        }
    }

    pub fn from_ordinal(v: u8) -> Option<Suit> {
        match v {
            0 => Some(Suit::Spades),
            1 => Some(Suit::Hearts),
            2 => Some(Suit::Diamonds),
            3 => Some(Suit::Clubs),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Numeric values are assigned for comparison and hand evaluation purposes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    pub fn from_u8(v: u8) -> Option<Rank> {
        match v {
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            14 => Some(Rank::Ace),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> char {
        match self {
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            r => char::from(b'0' + r.value()),
        }
    }
}

/// Represents a single playing card with a rank and suit.
/// Ordering compares rank first, then suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Numeric encoding shared with action providers: `suit * 13 + rank - 1`.
    ///
    /// Spans 1..=52 so that 0 can stand for an undealt slot.
    ///
    /// ```
    /// use tablestakes_engine::cards::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::new(Rank::Two, Suit::Spades).index(), 1);
    /// assert_eq!(Card::new(Rank::Ace, Suit::Clubs).index(), 52);
    /// ```
    pub fn index(self) -> u32 {
        u32::from(self.suit.ordinal()) * 13 + u32::from(self.rank.value()) - 1
    }

    pub fn from_index(index: u32) -> Option<Card> {
        if index == 0 || index > 52 {
            return None;
        }
        let zero_based = index - 1;
        let suit = Suit::from_ordinal((zero_based / 13) as u8)?;
        let rank = Rank::from_u8((zero_based % 13) as u8 + 2)?;
        Some(Card { rank, suit })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidCard(s.to_string());
        let text = s.trim();
        let split = text
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .ok_or_else(invalid)?;
        let (rank_part, suit_part) = text.split_at(split);

        let rank = match rank_part.to_ascii_uppercase().as_str() {
            "A" => Rank::Ace,
            "K" => Rank::King,
            "Q" => Rank::Queen,
            "J" => Rank::Jack,
            "T" | "10" => Rank::Ten,
            digits => digits
                .parse::<u8>()
                .ok()
                .filter(|v| (2..=9).contains(v))
                .and_then(Rank::from_u8)
                .ok_or_else(invalid)?,
        };
        let suit = match suit_part.to_ascii_lowercase().as_str() {
            "s" | "♠" => Suit::Spades,
            "h" | "♥" => Suit::Hearts,
            "d" | "♦" => Suit::Diamonds,
            "c" | "♣" => Suit::Clubs,
            _ => return Err(invalid()),
        };
        Ok(Card { rank, suit })
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
}

pub fn all_ranks() -> [Rank; 13] {
    [
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
    ]
}

/// All 52 cards in index order.
pub fn full_deck() -> [Card; 52] {
    let mut deck = [Card::new(Rank::Two, Suit::Spades); 52];
    let mut i = 0;
    for &suit in &all_suits() {
        for &rank in &all_ranks() {
            deck[i] = Card { rank, suit };
            i += 1;
        }
    }
    deck
}
