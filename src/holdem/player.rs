//! Seat state.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// A seat at the hold'em table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Seat index.
    pub id: usize,
    /// Display name.
    pub name: String,
    /// Chips behind (not yet in the pot).
    pub chips: usize,
    /// Hole cards (empty or two cards).
    pub hole_cards: Vec<Card>,
    /// Whether the player has folded or is sitting this hand out.
    pub folded: bool,
    /// Whether this seat is controlled by the host rather than the heuristic.
    pub is_human: bool,
    /// Chips put in during the current street.
    pub current_bet: usize,
    /// Whether every chip is committed.
    pub all_in: bool,
    /// Whether the player has acted during the current street.
    pub acted: bool,
    /// Chips put in during the whole hand.
    pub committed: usize,
}

impl Player {
    pub(crate) const fn new(id: usize, name: String, chips: usize, is_human: bool) -> Self {
        Self {
            id,
            name,
            chips,
            hole_cards: Vec::new(),
            folded: false,
            is_human,
            current_bet: 0,
            all_in: false,
            acted: false,
            committed: 0,
        }
    }

    /// Returns whether the player can still win the pot.
    #[must_use]
    pub const fn in_hand(&self) -> bool {
        !self.folded
    }

    /// Returns whether the player can take a turn (in the hand with chips behind).
    #[must_use]
    pub const fn can_act(&self) -> bool {
        !self.folded && self.chips > 0
    }

    /// Returns how much the player must add to match `table_bet`.
    #[must_use]
    pub const fn owes(&self, table_bet: usize) -> usize {
        table_bet.saturating_sub(self.current_bet)
    }

    /// Clears per-hand state. Seats without chips sit the hand out.
    pub(crate) fn reset_for_hand(&mut self) {
        self.hole_cards.clear();
        self.folded = self.chips == 0;
        self.current_bet = 0;
        self.all_in = false;
        self.acted = false;
        self.committed = 0;
    }

    /// Moves up to `amount` chips into the pot and returns how many moved.
    pub(crate) fn commit(&mut self, amount: usize) -> usize {
        let paid = amount.min(self.chips);
        self.chips -= paid;
        self.current_bet += paid;
        self.committed += paid;
        if self.chips == 0 {
            self.all_in = true;
        }
        paid
    }
}
