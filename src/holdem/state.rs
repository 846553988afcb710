//! Table phase and pending-work types.

use core::fmt;

/// Hold'em hand phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No hand in progress.
    Idle,
    /// Hole cards dealt, blinds posted.
    PreFlop,
    /// Three community cards out.
    Flop,
    /// Fourth community card out.
    Turn,
    /// Fifth community card out.
    River,
    /// Hands revealed and the pot awarded; waiting to return to idle.
    Showdown,
}

impl Phase {
    /// Returns whether a betting round can be open in this phase.
    #[must_use]
    pub const fn is_betting(self) -> bool {
        matches!(self, Self::PreFlop | Self::Flop | Self::Turn | Self::River)
    }

    /// Returns the phase that follows a completed betting round.
    #[must_use]
    pub const fn next_street(self) -> Option<Self> {
        match self {
            Self::PreFlop => Some(Self::Flop),
            Self::Flop => Some(Self::Turn),
            Self::Turn => Some(Self::River),
            Self::River => Some(Self::Showdown),
            Self::Idle | Self::Showdown => None,
        }
    }

    /// Returns the lowercase phase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::PreFlop => "pre-flop",
            Self::Flop => "flop",
            Self::Turn => "turn",
            Self::River => "river",
            Self::Showdown => "showdown",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Work the table is waiting for a host to trigger.
///
/// A host reads [`Table::pending`](super::Table::pending), waits as long as it
/// likes, and hands the value back to [`Table::resolve`](super::Table::resolve).
/// Every variant carries the hand number so stale work is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PendingAction {
    /// A computer opponent is due to act.
    Opponent {
        /// Hand number.
        hand: u64,
        /// Seat due to act.
        seat: usize,
    },
    /// The betting round is complete; the next street (or showdown) is due.
    AdvanceStreet {
        /// Hand number.
        hand: u64,
        /// Phase whose betting just completed.
        phase: Phase,
    },
    /// The showdown result has been shown; the table can go idle.
    FinishHand {
        /// Hand number.
        hand: u64,
    },
}
