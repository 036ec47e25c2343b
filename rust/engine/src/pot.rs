use serde::{Deserialize, Serialize};

use crate::hand::HandRank;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub seat: usize,
    pub amount: u32,
}

/// Splits a single pot between the best hands.
///
/// `contenders` must be in seat order. Ties keep that order through a stable
/// sort, and odd chips go one at a time to the earliest tied seats.
///
/// ```
/// use tablestakes_engine::hand::{Category, HandRank};
/// use tablestakes_engine::pot::split_pot;
///
/// let flush = HandRank { category: Category::Flush, tiebreak: [13, 9, 7, 4, 2] };
/// let payouts = split_pot(100, &[(0, flush), (1, flush), (2, flush)]);
/// let amounts: Vec<u32> = payouts.iter().map(|p| p.amount).collect();
/// assert_eq!(amounts, vec![34, 33, 33]);
/// ```
pub fn split_pot(pot: u32, contenders: &[(usize, HandRank)]) -> Vec<Payout> {
    let mut ranked = contenders.to_vec();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let Some(&(_, best)) = ranked.first() else {
        return Vec::new();
    };
    let winners: Vec<usize> = ranked
        .iter()
        .take_while(|(_, rank)| *rank == best)
        .map(|&(seat, _)| seat)
        .collect();

    let share = pot / winners.len() as u32;
    let mut remainder = pot % winners.len() as u32;
    winners
        .into_iter()
        .map(|seat| {
            let mut amount = share;
            if remainder > 0 {
                amount += 1;
                remainder -= 1;
            }
            Payout { seat, amount }
        })
        .collect()
}
