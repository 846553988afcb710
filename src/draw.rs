//! Five-card draw video poker ("Jacks or Better").
//!
//! A session moves through [`DrawPhase::Initial`] → [`DrawPhase::PlayerTurn`]
//! → [`DrawPhase::Showdown`] and back to `Initial` via [`DrawPoker::init_game`].
//! Credits carry over between hands; everything else is reset.

use alloc::vec::Vec;
use core::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::card::{self, Card, Rank};
use crate::error::{BetError, DeckError, DrawError};
use crate::hand::{Category, HandResult, evaluate_five};
use crate::options::DrawOptions;
use crate::result::DrawResult;
use crate::sync::{self, Mutex};

/// Number of cards in a draw-poker hand.
pub const HAND_SIZE: usize = 5;

/// Draw-poker session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPhase {
    /// Waiting for a bet.
    Initial,
    /// Five cards dealt; waiting for the discard decision.
    PlayerTurn,
    /// The final hand has been evaluated and paid.
    Showdown,
}

/// The paytable line a final hand falls on.
///
/// Mirrors [`Category`], except that a single pair is split into
/// [`PayLine::JacksOrBetter`] and [`PayLine::LowPair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayLine {
    /// Ten to Ace suited.
    RoyalFlush,
    /// Any other straight flush.
    StraightFlush,
    /// Four of a kind.
    FourOfAKind,
    /// Full house.
    FullHouse,
    /// Flush.
    Flush,
    /// Straight.
    Straight,
    /// Three of a kind.
    ThreeOfAKind,
    /// Two pair.
    TwoPair,
    /// A pair of Jacks, Queens, Kings or Aces.
    JacksOrBetter,
    /// A pair of Tens or lower.
    LowPair,
    /// Nothing.
    HighCard,
}

impl PayLine {
    /// Classifies an evaluated five-card hand.
    #[must_use]
    pub fn from_result(result: &HandResult) -> Self {
        match result.category() {
            Category::RoyalFlush => Self::RoyalFlush,
            Category::StraightFlush => Self::StraightFlush,
            Category::FourOfAKind => Self::FourOfAKind,
            Category::FullHouse => Self::FullHouse,
            Category::Flush => Self::Flush,
            Category::Straight => Self::Straight,
            Category::ThreeOfAKind => Self::ThreeOfAKind,
            Category::TwoPair => Self::TwoPair,
            Category::Pair => {
                let pair = result.tie_break_keys().first().copied().unwrap_or(0);
                if pair >= Rank::Jack.value() {
                    Self::JacksOrBetter
                } else {
                    Self::LowPair
                }
            }
            Category::HighCard => Self::HighCard,
        }
    }

    /// Returns the payout multiplier applied to the bet.
    #[must_use]
    pub const fn multiplier(self) -> usize {
        match self {
            Self::RoyalFlush => 250,
            Self::StraightFlush => 50,
            Self::FourOfAKind => 25,
            Self::FullHouse => 9,
            Self::Flush => 6,
            Self::Straight => 4,
            Self::ThreeOfAKind => 3,
            Self::TwoPair => 2,
            Self::JacksOrBetter => 1,
            Self::LowPair | Self::HighCard => 0,
        }
    }

    /// Returns the display name of the line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RoyalFlush => "Royal Flush",
            Self::StraightFlush => "Straight Flush",
            Self::FourOfAKind => "Four of a Kind",
            Self::FullHouse => "Full House",
            Self::Flush => "Flush",
            Self::Straight => "Straight",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::TwoPair => "Two Pair",
            Self::JacksOrBetter => "Jacks or Better",
            Self::LowPair => "One Pair",
            Self::HighCard => "High Card",
        }
    }
}

impl fmt::Display for PayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single-player video poker session.
pub struct DrawPoker {
    /// Cards left to deal; dealing takes from the end.
    pub deck: Mutex<Vec<Card>>,
    /// Session options.
    pub options: DrawOptions,
    /// Current phase.
    pub phase: Mutex<DrawPhase>,
    hand: Mutex<Option<[Card; HAND_SIZE]>>,
    credits: Mutex<usize>,
    current_bet: Mutex<usize>,
    winner: Mutex<Option<PayLine>>,
    last_result: Mutex<Option<DrawResult>>,
    rng: Mutex<ChaCha8Rng>,
}

impl DrawPoker {
    /// Creates a session with the given seed and deals nothing yet.
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::{DrawOptions, DrawPoker, DrawPhase};
    ///
    /// let session = DrawPoker::new(DrawOptions::default(), 7);
    /// assert_eq!(session.credits(), 100);
    /// assert_eq!(session.phase(), DrawPhase::Initial);
    /// ```
    #[must_use]
    pub fn new(options: DrawOptions, seed: u64) -> Self {
        let credits = options.starting_credits;
        let session = Self {
            deck: Mutex::new(Vec::new()),
            options,
            phase: Mutex::new(DrawPhase::Initial),
            hand: Mutex::new(None),
            credits: Mutex::new(credits),
            current_bet: Mutex::new(0),
            winner: Mutex::new(None),
            last_result: Mutex::new(None),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        };
        session.init_game();
        session
    }

    /// Resets everything except credits and shuffles a fresh deck.
    ///
    /// A bet left on an undrawn hand is returned to the credits.
    pub fn init_game(&self) {
        let mut phase = self.phase.lock();
        let mut bet = self.current_bet.lock();
        if *phase == DrawPhase::PlayerTurn && *bet > 0 {
            *self.credits.lock() += *bet;
        }
        *bet = 0;
        drop(bet);

        let mut deck = card::build_deck();
        sync::with(&self.rng, |rng| card::shuffle(&mut deck, rng));
        *self.deck.lock() = deck;
        *self.hand.lock() = None;
        *self.winner.lock() = None;
        *self.last_result.lock() = None;
        *phase = DrawPhase::Initial;
    }

    /// Places a bet and deals five cards face up.
    ///
    /// # Errors
    ///
    /// Returns an error if a hand is already in play, the amount is zero or
    /// exceeds the credits, or the deck cannot supply five cards. Nothing is
    /// changed when an error is returned.
    pub fn place_bet(&self, amount: usize) -> Result<(), BetError> {
        let mut phase = self.phase.lock();
        if *phase != DrawPhase::Initial {
            return Err(BetError::InvalidState);
        }
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        let mut credits = self.credits.lock();
        if amount > *credits {
            return Err(BetError::InsufficientCredits);
        }

        let mut deck = self.deck.lock();
        if deck.len() < HAND_SIZE {
            return Err(DeckError::Empty.into());
        }
        let mut dealt = [Card::new(card::Suit::Hearts, Rank::Two); HAND_SIZE];
        for slot in &mut dealt {
            *slot = card::deal(&mut deck)?.revealed();
        }
        drop(deck);

        *credits -= amount;
        drop(credits);
        *self.current_bet.lock() = amount;
        *self.hand.lock() = Some(dealt);
        *phase = DrawPhase::PlayerTurn;

        debug!(amount, "draw poker bet placed");
        Ok(())
    }

    /// Replaces the cards at `indices` and settles the hand.
    ///
    /// Slots not listed keep their card; an empty slice stands pat. Repeated
    /// indices are replaced once.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is waiting for a draw, an index is outside
    /// `0..5`, or the deck cannot supply the replacements. Nothing is changed
    /// when an error is returned.
    pub fn discard_and_draw(&self, indices: &[usize]) -> Result<DrawResult, DrawError> {
        let mut phase = self.phase.lock();
        if *phase != DrawPhase::PlayerTurn {
            return Err(DrawError::InvalidState);
        }
        if let Some(&bad) = indices.iter().find(|&&index| index >= HAND_SIZE) {
            return Err(DrawError::InvalidIndex(bad));
        }
        let current = (*self.hand.lock()).ok_or(DrawError::InvalidState)?;

        let mut discards: Vec<usize> = indices.to_vec();
        discards.sort_unstable();
        discards.dedup();

        let mut deck = self.deck.lock();
        if deck.len() < discards.len() {
            return Err(DeckError::Empty.into());
        }
        let replacements = discards
            .iter()
            .map(|&slot| card::deal(&mut deck).map(|card| (slot, card.revealed())))
            .collect::<Result<Vec<_>, _>>()?;
        drop(deck);

        let final_hand: [Card; HAND_SIZE] = core::array::from_fn(|slot| {
            replacements
                .iter()
                .find(|(replaced, _)| *replaced == slot)
                .map_or(current[slot], |&(_, card)| card)
        });

        let result = evaluate_five(&final_hand);
        let pay_line = PayLine::from_result(&result);
        let bet = *self.current_bet.lock();
        let payout = bet * pay_line.multiplier();
        *self.credits.lock() += payout;

        let outcome = DrawResult {
            hand: final_hand,
            result,
            pay_line,
            bet,
            payout,
        };
        *self.hand.lock() = Some(final_hand);
        *self.winner.lock() = Some(pay_line);
        *self.last_result.lock() = Some(outcome.clone());
        *phase = DrawPhase::Showdown;

        info!(
            discarded = discards.len(),
            hand = pay_line.name(),
            bet,
            payout,
            "draw poker hand settled"
        );
        Ok(outcome)
    }

    /// Keeps all five cards and settles the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is waiting for a draw.
    pub fn stand(&self) -> Result<DrawResult, DrawError> {
        self.discard_and_draw(&[])
    }

    /// Adds credits to the balance.
    pub fn add_credits(&self, amount: usize) {
        *self.credits.lock() += amount;
    }

    /// Returns the current credits.
    pub fn credits(&self) -> usize {
        *self.credits.lock()
    }

    /// Returns the bet riding on the current hand (0 when none).
    pub fn current_bet(&self) -> usize {
        *self.current_bet.lock()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> DrawPhase {
        *self.phase.lock()
    }

    /// Returns the paytable line of the last settled hand.
    pub fn winner(&self) -> Option<PayLine> {
        *self.winner.lock()
    }

    /// Returns the player's cards in slot order (empty before a bet).
    pub fn hand(&self) -> Vec<Card> {
        (*self.hand.lock()).map_or_else(Vec::new, |cards| cards.to_vec())
    }

    /// Evaluates the cards currently held, if any.
    pub fn player_hand_result(&self) -> Option<HandResult> {
        (*self.hand.lock()).map(|cards| evaluate_five(&cards))
    }

    /// Returns the outcome of the last settled hand.
    pub fn last_result(&self) -> Option<DrawResult> {
        self.last_result.lock().clone()
    }

    /// Returns the number of cards left in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }
}
