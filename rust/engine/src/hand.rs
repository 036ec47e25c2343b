use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

/// Total order over hands: category first, then the tiebreak ranks.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandRank {
    pub category: Category,
    // ranks ordered by significance, zero padded
    pub tiebreak: [u8; 5],
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandResult {
    pub rank: HandRank,
    /// The cards that make up the winning combination
    pub cards: Vec<Card>,
}

/// Best five-card hand from the hole cards plus whatever board is out.
pub fn evaluate(hole: &[Card], board: &[Card]) -> HandResult {
    let mut all = Vec::with_capacity(hole.len() + board.len());
    all.extend_from_slice(hole);
    all.extend_from_slice(board);
    evaluate_cards(&all)
}

/// Scores every five-card subset and keeps the highest.
///
/// Inputs shorter than five cards are scored as they are, so straights and
/// flushes are never reported for them.
///
/// ```
/// use tablestakes_engine::cards::Card;
/// use tablestakes_engine::hand::{evaluate_cards, Category};
///
/// let cards: Vec<Card> = ["Ah", "Kh", "Qh", "Jh", "Th", "2c", "3d"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// assert_eq!(evaluate_cards(&cards).rank.category, Category::RoyalFlush);
/// ```
pub fn evaluate_cards(cards: &[Card]) -> HandResult {
    // canonical order so equal multisets pick the same five cards
    let mut sorted = cards.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let n = sorted.len();
    if n <= 5 {
        return HandResult {
            rank: score_five(&sorted),
            cards: sorted,
        };
    }

    let mut best: Option<(HandRank, [Card; 5])> = None;
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        let five = [sorted[a], sorted[b], sorted[c], sorted[d], sorted[e]];
                        let rank = score_five(&five);
                        match &best {
                            Some((r, _)) if rank <= *r => {}
                            _ => best = Some((rank, five)),
                        }
                    }
                }
            }
        }
    }

    match best {
        Some((rank, five)) => HandResult {
            rank,
            cards: five.to_vec(),
        },
        None => HandResult {
            rank: score_five(&sorted),
            cards: sorted,
        },
    }
}

/// Scores a hand of at most five cards.
pub fn score_five(cards: &[Card]) -> HandRank {
    let mut rank_counts = [0u8; 15]; // 2..14 used
    for c in cards {
        rank_counts[c.rank.value() as usize] += 1;
    }

    // (count, rank) groups, biggest group first, then highest rank
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .rev()
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));

    let mut tiebreak = [0u8; 5];
    for (slot, &(_, r)) in tiebreak.iter_mut().zip(groups.iter()) {
        *slot = r;
    }

    let is_flush = cards.len() == 5 && cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = if groups.len() == 5 {
        straight_high(&groups)
    } else {
        None
    };

    if let Some(high) = straight_high {
        if is_flush {
            return if high == 14 {
                HandRank {
                    category: Category::RoyalFlush,
                    tiebreak: [14, 0, 0, 0, 0],
                }
            } else {
                HandRank {
                    category: Category::StraightFlush,
                    tiebreak: [high, 0, 0, 0, 0],
                }
            };
        }
    }

    let counts: Vec<u8> = groups.iter().map(|&(c, _)| c).collect();
    let category = match counts.as_slice() {
        [4, ..] => Category::FourOfAKind,
        [3, 2, ..] => Category::FullHouse,
        _ if is_flush => Category::Flush,
        _ if straight_high.is_some() => Category::Straight,
        [3, ..] => Category::ThreeOfAKind,
        [2, 2, ..] => Category::TwoPair,
        [2, ..] => Category::OnePair,
        _ => Category::HighCard,
    };

    if category == Category::Straight {
        if let Some(high) = straight_high {
            tiebreak = [high, 0, 0, 0, 0];
        }
    }
    HandRank { category, tiebreak }
}

// Expects five distinct ranks in descending order.
fn straight_high(groups: &[(u8, u8)]) -> Option<u8> {
    let high = groups[0].1;
    let low = groups[4].1;
    if high - low == 4 {
        return Some(high);
    }
    // wheel: ace plays low
    let ranks: Vec<u8> = groups.iter().map(|&(_, r)| r).collect();
    if ranks == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}

pub fn compare_hands(a: &HandRank, b: &HandRank) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.tiebreak.cmp(&b.tiebreak),
        ord => ord,
    }
}
