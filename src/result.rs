//! Result types reported when a hand finishes.

extern crate alloc;

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Card;
use crate::draw::PayLine;
use crate::hand::HandResult;

/// Outcome of a finished draw-poker hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawResult {
    /// The final five cards, in slot order.
    pub hand: [Card; 5],
    /// Evaluation of the final hand.
    pub result: HandResult,
    /// The paytable line the hand landed on.
    pub pay_line: PayLine,
    /// The bet that was placed.
    pub bet: usize,
    /// Credits paid back (bet times the paytable multiplier).
    pub payout: usize,
}

/// A seat's evaluated hand at showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatHand {
    /// Seat index.
    pub seat: usize,
    /// Best five-card hand from the seat's hole cards and the board.
    pub result: HandResult,
}

/// Outcome of a finished hold'em hand.
#[derive(Debug, Clone)]
pub struct ShowdownResult {
    /// The hand number this result belongs to.
    pub hand_number: u64,
    /// Total chips that were in the pot.
    pub pot: usize,
    /// Seats that won a share of the pot.
    pub winners: Vec<usize>,
    /// Evaluated hands of every seat that reached showdown (empty when uncontested).
    pub hands: Vec<SeatHand>,
    /// Chips paid to each winning seat (`seat` -> chips).
    pub payouts: HashMap<usize, usize>,
    /// Whether the hand ended because everyone else folded.
    pub uncontested: bool,
}

impl ShowdownResult {
    /// Returns the chips paid to `seat`, or 0 if it won nothing.
    #[must_use]
    pub fn payout(&self, seat: usize) -> usize {
        self.payouts.get(&seat).copied().unwrap_or(0)
    }

    /// Returns whether the pot was split between several seats.
    #[must_use]
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }
}
