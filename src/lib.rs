//! Poker rules engines with optional `no_std` support.
//!
//! The crate provides two engines:
//!
//! - [`DrawPoker`], a single-player "Jacks or Better" video poker session
//!   (bet, discard, draw, get paid from a fixed paytable).
//! - [`Table`], a No-Limit Texas Hold'em table with blinds, turn rotation,
//!   bet validation and showdown, where one human seat plays against
//!   heuristic opponents.
//!
//! Both are built on the same [`card`] and [`hand`] evaluator modules and are
//! seeded explicitly, so every game is reproducible.
//!
//! # Example
//!
//! ```
//! use pkrs::{DrawOptions, DrawPoker};
//!
//! let session = DrawPoker::new(DrawOptions::default(), 42);
//! session.place_bet(5).unwrap();
//! let outcome = session.stand().unwrap();
//! assert_eq!(outcome.bet, 5);
//! assert_eq!(session.credits(), 95 + outcome.payout);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod draw;
pub mod error;
pub mod hand;
pub mod holdem;
pub mod opponent;
pub mod options;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use draw::{DrawPhase, DrawPoker, HAND_SIZE, PayLine};
pub use error::{
    ActionError, BetError, DeckError, DrawError, ErrorKind, EvalError, StartError,
};
pub use hand::{Category, HandResult};
pub use holdem::{PendingAction, Phase, Player, Table};
pub use opponent::{Decision, OpponentView};
pub use options::{DrawOptions, OpponentProfile, RoundingMode, TableOptions};
pub use result::{DrawResult, SeatHand, ShowdownResult};
