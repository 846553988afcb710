//! No-Limit Texas Hold'em table engine.
//!
//! The table runs one human seat (seat 0) against heuristic opponents.
//! Betting actions are validated against the acting seat and the open betting
//! round; automatic work (opponent moves, dealing the next street, clearing a
//! finished hand) is never applied on its own. Hosts poll
//! [`Table::pending`] and decide when to [`Table::resolve`] it.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU64, Ordering};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::card::{self, Card};
use crate::options::TableOptions;
use crate::result::ShowdownResult;
use crate::sync::{self, Mutex};

mod actions;
mod pending;
pub mod player;
pub mod state;
mod street;

pub use player::Player;
pub use state::{PendingAction, Phase};

const WELCOME: &str = "Welcome to Texas Hold'em! Start a hand to begin.";

/// Table-level betting counters for the hand in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Betting {
    pub(crate) dealer: usize,
    pub(crate) small_blind: usize,
    pub(crate) big_blind: usize,
    /// Seat due to act.
    pub(crate) current: usize,
    pub(crate) pot: usize,
    /// Amount every seat must reach this street.
    pub(crate) current_bet: usize,
    pub(crate) min_raise: usize,
    pub(crate) last_bettor: Option<usize>,
    pub(crate) round_complete: bool,
}

/// A hold'em table that owns its players, deck, and betting state.
pub struct Table {
    /// Cards left to deal; dealing takes from the end.
    pub deck: Mutex<Vec<Card>>,
    /// Table options.
    pub options: TableOptions,
    /// Current phase.
    pub phase: Mutex<Phase>,
    /// Seats in table order; seat 0 is the human.
    pub players: Mutex<Vec<Player>>,
    /// Community cards.
    pub board: Mutex<Vec<Card>>,
    betting: Mutex<Betting>,
    hand_number: AtomicU64,
    message: Mutex<String>,
    last_action: Mutex<String>,
    last_result: Mutex<Option<ShowdownResult>>,
    rng: Mutex<ChaCha8Rng>,
}

impl Table {
    /// Creates a table with the given seed. No hand is dealt yet.
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::{Phase, Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.phase(), Phase::Idle);
    /// assert_eq!(table.players().len(), 4);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut players = Vec::with_capacity(options.seats());
        players.push(Player::new(
            0,
            options.human_name.clone(),
            options.starting_chips,
            true,
        ));
        for (index, name) in options.opponent_names.iter().enumerate() {
            players.push(Player::new(
                index + 1,
                name.clone(),
                options.starting_chips,
                false,
            ));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = card::build_deck();
        card::shuffle(&mut deck, &mut rng);
        let min_raise = options.big_blind;

        Self {
            deck: Mutex::new(deck),
            options,
            phase: Mutex::new(Phase::Idle),
            players: Mutex::new(players),
            board: Mutex::new(Vec::new()),
            betting: Mutex::new(Betting {
                dealer: 0,
                small_blind: 0,
                big_blind: 0,
                current: 0,
                pot: 0,
                current_bet: 0,
                min_raise,
                last_bettor: None,
                round_complete: false,
            }),
            hand_number: AtomicU64::new(0),
            message: Mutex::new(WELCOME.to_string()),
            last_action: Mutex::new(String::new()),
            last_result: Mutex::new(None),
            rng: Mutex::new(rng),
        }
    }

    /// Resets the table to idle, keeping stacks and the dealer button.
    ///
    /// Chips committed to an unfinished hand go back to their owners.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn init_game(&self) {
        let mut phase = self.phase.lock();
        let mut players = self.players.lock();
        let refund = phase.is_betting();
        for player in players.iter_mut() {
            if refund {
                player.chips += player.committed;
            }
            player.reset_for_hand();
            player.folded = false;
        }

        let mut betting = self.betting.lock();
        betting.pot = 0;
        betting.current_bet = 0;
        betting.min_raise = self.options.big_blind;
        betting.last_bettor = None;
        betting.round_complete = false;

        let mut deck = card::build_deck();
        sync::with(&self.rng, |rng| card::shuffle(&mut deck, rng));
        *self.deck.lock() = deck;
        self.board.lock().clear();
        *self.last_result.lock() = None;
        self.last_action.lock().clear();
        *self.message.lock() = WELCOME.to_string();

        if refund {
            info!(hand = self.hand_number(), "unfinished hand abandoned, bets refunded");
        }
        *phase = Phase::Idle;
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        *self.phase.lock()
    }

    /// Returns the number of hands started so far (the current hand's number).
    pub fn hand_number(&self) -> u64 {
        self.hand_number.load(Ordering::SeqCst)
    }

    /// Returns a snapshot of every seat.
    pub fn players(&self) -> Vec<Player> {
        self.players.lock().clone()
    }

    /// Returns the human seat.
    pub fn human_player(&self) -> Option<Player> {
        self.players
            .lock()
            .iter()
            .find(|player| player.is_human)
            .cloned()
    }

    /// Returns seats still in the hand that have chips behind.
    pub fn active_players(&self) -> Vec<Player> {
        self.players
            .lock()
            .iter()
            .filter(|player| player.can_act())
            .cloned()
            .collect()
    }

    /// Returns seats that have not folded.
    pub fn players_in_hand(&self) -> Vec<Player> {
        self.players
            .lock()
            .iter()
            .filter(|player| player.in_hand())
            .cloned()
            .collect()
    }

    /// Returns the seat index due to act, if a betting round is open.
    pub fn current_player_index(&self) -> Option<usize> {
        let phase = *self.phase.lock();
        let betting = *self.betting.lock();
        (phase.is_betting() && !betting.round_complete).then_some(betting.current)
    }

    /// Returns the seat due to act, if a betting round is open.
    pub fn current_player(&self) -> Option<Player> {
        let seat = self.current_player_index()?;
        self.players.lock().get(seat).cloned()
    }

    /// Returns the chips in the pot for the current (or last) hand.
    pub fn pot(&self) -> usize {
        self.betting.lock().pot
    }

    /// Returns the amount every seat must reach this street.
    pub fn current_bet(&self) -> usize {
        self.betting.lock().current_bet
    }

    /// Returns the size of the last full raise this street.
    pub fn min_raise(&self) -> usize {
        self.betting.lock().min_raise
    }

    /// Returns the dealer button seat.
    pub fn dealer_position(&self) -> usize {
        self.betting.lock().dealer
    }

    /// Returns the small blind seat of the current hand.
    pub fn small_blind_index(&self) -> usize {
        self.betting.lock().small_blind
    }

    /// Returns the big blind seat of the current hand.
    pub fn big_blind_index(&self) -> usize {
        self.betting.lock().big_blind
    }

    /// Returns the seat that made the last bet or raise this street.
    pub fn last_bettor(&self) -> Option<usize> {
        self.betting.lock().last_bettor
    }

    /// Returns the community cards.
    pub fn community_cards(&self) -> Vec<Card> {
        self.board.lock().clone()
    }

    /// Returns the status line for display.
    pub fn game_message(&self) -> String {
        self.message.lock().clone()
    }

    /// Returns a description of the last accepted action.
    pub fn last_action(&self) -> String {
        self.last_action.lock().clone()
    }

    /// Returns the result of the last finished hand.
    pub fn last_result(&self) -> Option<ShowdownResult> {
        self.last_result.lock().clone()
    }

    /// Returns the number of cards left in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Adds chips to the human seat.
    pub fn add_chips(&self, amount: usize) {
        if let Some(human) = self.players.lock().iter_mut().find(|player| player.is_human) {
            human.chips += amount;
        }
    }

    fn set_message(&self, message: String) {
        *self.message.lock() = message;
    }
}
