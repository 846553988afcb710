//! Heuristic decisions for computer-controlled hold'em seats.
//!
//! [`decide`] maps a hand strength in `0.0..=1.0`, plus a random jitter, onto
//! fold / check / call / raise using the thresholds in an [`OpponentProfile`].
//! The only state it touches is the random source it is handed.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, Rank};
use crate::hand::{self, Category};
use crate::holdem::Phase;
use crate::options::{OpponentProfile, RoundingMode, round_amount};

/// An opponent's chosen action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Give up the hand.
    Fold,
    /// Pass without betting.
    Check,
    /// Match the current bet (or go all-in for less).
    Call,
    /// Bet or raise so the seat's street total becomes this amount.
    Raise(usize),
}

/// What an opponent can see when it is due to act.
#[derive(Debug, Clone, Copy)]
pub struct OpponentView<'a> {
    /// The seat's two hole cards.
    pub hole_cards: &'a [Card],
    /// Community cards dealt so far.
    pub board: &'a [Card],
    /// Current phase.
    pub phase: Phase,
    /// Chips in the pot.
    pub pot: usize,
    /// Table bet for this street.
    pub current_bet: usize,
    /// The seat's own bet this street.
    pub player_bet: usize,
    /// Chips behind.
    pub chips: usize,
    /// Size of the last full raise this street.
    pub min_raise: usize,
}

impl OpponentView<'_> {
    /// Returns the chips needed to call.
    #[must_use]
    pub const fn to_call(&self) -> usize {
        self.current_bet.saturating_sub(self.player_bet)
    }
}

/// Returns the strength of a made hand category.
#[must_use]
pub const fn category_strength(category: Category) -> f64 {
    match category {
        Category::HighCard => 0.1,
        Category::Pair => 0.3,
        Category::TwoPair => 0.5,
        Category::ThreeOfAKind => 0.6,
        Category::Straight => 0.7,
        Category::Flush => 0.8,
        Category::FullHouse => 0.85,
        Category::FourOfAKind => 0.9,
        Category::StraightFlush => 0.95,
        Category::RoyalFlush => 1.0,
    }
}

/// Scores two hole cards before the flop.
///
/// Pairs score by rank, two cards Queen or higher score high, connected or
/// suited cards score in the middle and anything else scores low with a little
/// randomness.
#[expect(clippy::suboptimal_flops, reason = "mul_add is not available without std")]
pub fn preflop_strength<R: Rng + ?Sized>(hole_cards: &[Card], rng: &mut R) -> f64 {
    let [first, second] = hole_cards else {
        return 0.0;
    };
    let (high, low) = if first.rank >= second.rank {
        (first, second)
    } else {
        (second, first)
    };
    let suited = high.suit == low.suit;

    if high.rank == low.rank {
        let position = f64::from(high.rank.value() - Rank::Two.value());
        return 0.7 + position / 13.0 * 0.3;
    }
    if low.rank >= Rank::Queen {
        return if suited { 0.7 } else { 0.6 };
    }

    let connected = high.rank.value() - low.rank.value() <= 2;
    match (connected, suited) {
        (true, true) => 0.5,
        (true, false) => 0.4,
        (false, true) => 0.35,
        (false, false) => rng.random_range(0.2..0.3),
    }
}

/// Scores a seat's holding in the given phase.
///
/// After the flop this is the strength of the best made hand from the hole
/// cards and the board.
pub fn hand_strength<R: Rng + ?Sized>(
    hole_cards: &[Card],
    board: &[Card],
    phase: Phase,
    rng: &mut R,
) -> f64 {
    if phase == Phase::PreFlop || board.is_empty() {
        return preflop_strength(hole_cards, rng);
    }
    let cards: Vec<Card> = hole_cards.iter().chain(board).copied().collect();
    hand::evaluate(&cards).map_or(0.0, |result| category_strength(result.category()))
}

/// Picks an action for the seat described by `view`.
///
/// Bet and raise sizes are `min_raise` plus a strength-scaled share of the
/// pot, rounded to `increment`. A size the stack cannot cover becomes an
/// all-in, and an all-in that cannot top the current bet becomes a call.
pub fn decide<R: Rng + ?Sized>(
    view: &OpponentView<'_>,
    profile: &OpponentProfile,
    increment: usize,
    rounding: RoundingMode,
    rng: &mut R,
) -> Decision {
    let strength = hand_strength(view.hole_cards, view.board, view.phase, rng);
    let jitter = if profile.jitter > 0.0 {
        rng.random_range(0.0..profile.jitter)
    } else {
        0.0
    };
    let score = strength + jitter;

    if view.to_call() == 0 {
        if score < profile.check_below {
            return Decision::Check;
        }
        return raise_to(view, bet_size(view, profile, strength, increment, rounding));
    }

    if score < profile.fold_below {
        Decision::Fold
    } else if score < profile.raise_above {
        Decision::Call
    } else {
        raise_to(view, bet_size(view, profile, strength, increment, rounding))
    }
}

#[expect(
    clippy::cast_precision_loss,
    clippy::suboptimal_flops,
    reason = "pot sizes stay far below f64 precision limits and mul_add needs std"
)]
fn bet_size(
    view: &OpponentView<'_>,
    profile: &OpponentProfile,
    strength: f64,
    increment: usize,
    rounding: RoundingMode,
) -> usize {
    let step = increment.max(1);
    let raw = view.min_raise as f64 + strength * view.pot as f64 * profile.pot_fraction;
    let size = round_amount(raw / step as f64, rounding) * step;
    size.max(view.min_raise).max(1)
}

fn raise_to(view: &OpponentView<'_>, size: usize) -> Decision {
    let target = view.current_bet + size;
    let all_in = view.player_bet + view.chips;
    if target < all_in {
        return Decision::Raise(target);
    }
    if all_in > view.current_bet {
        Decision::Raise(all_in)
    } else if view.to_call() > 0 {
        Decision::Call
    } else {
        Decision::Check
    }
}
