//! Poker hand evaluation.
//!
//! [`evaluate`] ranks 5, 6 or 7 cards by the best five-card hand they
//! contain. Results compare by category first and then by their tie-break
//! keys, most significant first.

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use crate::card::Card;
use crate::error::EvalError;

/// The ten poker hand categories, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// No made hand.
    HighCard,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// A straight in one suit.
    StraightFlush,
    /// Ten to Ace in one suit.
    RoyalFlush,
}

impl Category {
    /// Returns the category rank, 0 for high card up to 9 for a royal flush.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::HighCard => 0,
            Self::Pair => 1,
            Self::TwoPair => 2,
            Self::ThreeOfAKind => 3,
            Self::Straight => 4,
            Self::Flush => 5,
            Self::FullHouse => 6,
            Self::FourOfAKind => 7,
            Self::StraightFlush => 8,
            Self::RoyalFlush => 9,
        }
    }

    /// Returns the display name of the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::Pair => "Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The value of the best five-card hand found in a set of cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandResult {
    category: Category,
    keys: Vec<u8>,
}

impl HandResult {
    fn new(category: Category, keys: Vec<u8>) -> Self {
        Self { category, keys }
    }

    /// Returns the hand category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the category rank (0..=9).
    #[must_use]
    pub const fn category_rank(&self) -> u8 {
        self.category.rank()
    }

    /// Returns the tie-break rank values, most significant first.
    ///
    /// Aces count as 14 except in the A-2-3-4-5 straight, whose high card is 5.
    #[must_use]
    pub fn tie_break_keys(&self) -> &[u8] {
        &self.keys
    }
}

impl Ord for HandResult {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.keys.cmp(&other.keys))
    }
}

impl PartialOrd for HandResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.category.fmt(f)
    }
}

/// Evaluates the best five-card hand among 5 to 7 cards.
///
/// The result does not depend on the order of `cards`.
///
/// # Errors
///
/// Returns [`EvalError::CardCount`] if fewer than 5 or more than 7 cards are given.
///
/// # Example
///
/// ```
/// use pkrs::card::{Card, Rank, Suit};
/// use pkrs::hand::{Category, evaluate};
///
/// let cards = [
///     Card::new(Suit::Spades, Rank::Ace),
///     Card::new(Suit::Spades, Rank::King),
///     Card::new(Suit::Spades, Rank::Queen),
///     Card::new(Suit::Spades, Rank::Jack),
///     Card::new(Suit::Spades, Rank::Ten),
/// ];
/// let result = evaluate(&cards).unwrap();
/// assert_eq!(result.category(), Category::RoyalFlush);
/// assert_eq!(result.category_rank(), 9);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandResult, EvalError> {
    let count = cards.len();
    if !(5..=7).contains(&count) {
        return Err(EvalError::CardCount(count));
    }

    (0u32..1 << count)
        .filter(|mask| mask.count_ones() == 5)
        .map(|mask| {
            let five: Vec<Card> = cards
                .iter()
                .enumerate()
                .filter(|(index, _)| mask & (1 << index) != 0)
                .map(|(_, card)| *card)
                .collect();
            rank_five(&five)
        })
        .max()
        .ok_or(EvalError::CardCount(count))
}

/// Compares two hands; `Ordering::Equal` means a split.
#[must_use]
pub fn compare(a: &HandResult, b: &HandResult) -> Ordering {
    a.cmp(b)
}

/// Returns the indices of every hand tied for best.
#[must_use]
pub fn winners(results: &[HandResult]) -> Vec<usize> {
    let Some(best) = results.iter().max() else {
        return Vec::new();
    };
    results
        .iter()
        .enumerate()
        .filter(|(_, result)| *result == best)
        .map(|(index, _)| index)
        .collect()
}

/// Evaluates exactly five cards.
///
/// Unlike [`evaluate`] this cannot fail, which suits fixed five-card games.
#[must_use]
pub fn evaluate_five(cards: &[Card; 5]) -> HandResult {
    rank_five(cards)
}

fn rank_five(cards: &[Card]) -> HandResult {
    let mut values: Vec<u8> = cards.iter().map(|card| card.rank.value()).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.windows(2).all(|pair| pair[0].suit == pair[1].suit);
    let straight = straight_high(&values);

    match (straight, flush) {
        (Some(14), true) => return HandResult::new(Category::RoyalFlush, vec![14]),
        (Some(high), true) => return HandResult::new(Category::StraightFlush, vec![high]),
        (None, true) => return HandResult::new(Category::Flush, values),
        (Some(high), false) => return HandResult::new(Category::Straight, vec![high]),
        (None, false) => {}
    }

    // (count, rank) pairs, biggest group first, higher rank first within a size
    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
    for &value in &values {
        match groups.iter_mut().find(|(_, rank)| *rank == value) {
            Some((count, _)) => *count += 1,
            None => groups.push((1, value)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));
    let ranks: Vec<u8> = groups.iter().map(|&(_, rank)| rank).collect();

    // duplicate cards can leave a single group
    let second = groups.get(1).map_or(0, |&(count, _)| count);
    match (groups[0].0, second) {
        (4.., _) => HandResult::new(Category::FourOfAKind, ranks),
        (3, 2) => HandResult::new(Category::FullHouse, ranks),
        (3, _) => HandResult::new(Category::ThreeOfAKind, ranks.into_iter().take(2).collect()),
        (2, 2) => HandResult::new(Category::TwoPair, ranks),
        (2, _) => HandResult::new(Category::Pair, ranks),
        _ => HandResult::new(Category::HighCard, values),
    }
}

/// Returns the high card of a five-card straight, given ranks sorted high to low.
fn straight_high(values: &[u8]) -> Option<u8> {
    if values == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    values
        .windows(2)
        .all(|pair| pair[0] == pair[1] + 1)
        .then_some(values[0])
}
