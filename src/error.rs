//! Error types for engine operations.

use thiserror::Error;

/// Broad classification shared by every engine error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A bet or raise outside the legal bounds.
    InvalidAmount,
    /// An action that is not legal right now (wrong phase, wrong seat, nothing to call).
    IllegalAction,
    /// A deal from an exhausted deck.
    EmptyDeck,
}

impl ErrorKind {
    /// Returns whether this kind indicates a broken engine invariant rather
    /// than bad player input.
    #[must_use]
    pub const fn is_invariant_violation(self) -> bool {
        matches!(self, Self::EmptyDeck)
    }
}

/// Errors that can occur while dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur during hand evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The evaluator needs between 5 and 7 cards.
    #[error("expected 5 to 7 cards, got {0}")]
    CardCount(usize),
}

/// Errors that can occur when placing a draw-poker bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet exceeds the available credits.
    #[error("insufficient credits")]
    InsufficientCredits,
    /// A bet is already active.
    #[error("invalid game state for betting")]
    InvalidState,
    /// The deck ran out while dealing.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur when drawing replacement cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No hand is waiting for a draw decision.
    #[error("invalid game state for drawing")]
    InvalidState,
    /// A discard index is outside the hand.
    #[error("discard index {0} is out of range")]
    InvalidIndex(usize),
    /// The deck ran out while drawing.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur when starting a hold'em hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// A hand is already in progress.
    #[error("a hand is already in progress")]
    InvalidState,
    /// Fewer than two players have chips.
    #[error("not enough players with chips")]
    NotEnoughPlayers,
    /// The deck ran out while dealing.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur during hold'em player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No betting round is open.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this seat's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The seat has already folded.
    #[error("player has folded")]
    PlayerFolded,
    /// Checking while owing chips.
    #[error("cannot check while facing a bet")]
    CannotCheck,
    /// Nothing to call, or no chips to call with.
    #[error("nothing to call")]
    CannotCall,
    /// Raise below the current bet plus the minimum raise.
    #[error("raise is below the minimum")]
    RaiseTooSmall,
    /// Raise needs more chips than the player holds.
    #[error("insufficient chips for this raise")]
    InsufficientChips,
    /// The deck ran out while dealing a street.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

impl DeckError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::EmptyDeck
    }
}

impl BetError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroBet | Self::InsufficientCredits => ErrorKind::InvalidAmount,
            Self::InvalidState => ErrorKind::IllegalAction,
            Self::Deck(_) => ErrorKind::EmptyDeck,
        }
    }
}

impl DrawError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidState | Self::InvalidIndex(_) => ErrorKind::IllegalAction,
            Self::Deck(_) => ErrorKind::EmptyDeck,
        }
    }
}

impl StartError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidState | Self::NotEnoughPlayers => ErrorKind::IllegalAction,
            Self::Deck(_) => ErrorKind::EmptyDeck,
        }
    }
}

impl ActionError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::RaiseTooSmall | Self::InsufficientChips => ErrorKind::InvalidAmount,
            Self::InvalidState
            | Self::NotYourTurn
            | Self::PlayerFolded
            | Self::CannotCheck
            | Self::CannotCall => ErrorKind::IllegalAction,
            Self::Deck(_) => ErrorKind::EmptyDeck,
        }
    }
}
