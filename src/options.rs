//! Engine configuration options.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Rounding mode for computed bet sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

#[cfg(feature = "std")]
pub(crate) fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub(crate) fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Configuration options for a draw-poker session.
///
/// ```
/// use pkrs::DrawOptions;
///
/// let options = DrawOptions::default().with_starting_credits(500);
/// assert_eq!(options.starting_credits, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOptions {
    /// Credits the session starts with.
    pub starting_credits: usize,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            starting_credits: 100,
        }
    }
}

impl DrawOptions {
    /// Sets the starting credits.
    #[must_use]
    pub const fn with_starting_credits(mut self, credits: usize) -> Self {
        self.starting_credits = credits;
        self
    }
}

/// Tuning for the heuristic opponents.
///
/// Strength values are on a 0.0 to 1.0 scale. A random jitter in
/// `[0, jitter)` is added to the strength before it is compared with the
/// thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpponentProfile {
    /// When nobody has bet, check below this strength and bet otherwise.
    pub check_below: f64,
    /// When facing a bet, fold below this strength.
    pub fold_below: f64,
    /// Raise at or above this strength, call in between.
    pub raise_above: f64,
    /// Upper bound of the random jitter.
    pub jitter: f64,
    /// Share of the pot, scaled by strength, added to a bet or raise.
    pub pot_fraction: f64,
}

impl Default for OpponentProfile {
    fn default() -> Self {
        Self {
            check_below: 0.5,
            fold_below: 0.3,
            raise_above: 0.7,
            jitter: 0.2,
            pot_fraction: 0.5,
        }
    }
}

/// Configuration options for a hold'em table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pkrs::TableOptions;
///
/// let options = TableOptions::default()
///     .with_blinds(25, 50)
///     .with_starting_chips(2000)
///     .with_opponents(["Dana", "Eli"]);
/// assert_eq!(options.big_blind, 50);
/// assert_eq!(options.seats(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Name of the human seat (always seat 0).
    pub human_name: String,
    /// Names of the computer opponents, seated after the human.
    pub opponent_names: Vec<String>,
    /// Chips every seat starts with.
    pub starting_chips: usize,
    /// Small blind amount.
    pub small_blind: usize,
    /// Big blind amount; also the minimum raise at the start of each street.
    pub big_blind: usize,
    /// Opponent bet sizes are rounded to a multiple of this amount.
    pub bet_increment: usize,
    /// Rounding mode for opponent bet sizes.
    pub rounding: RoundingMode,
    /// Opponent decision thresholds.
    pub opponent: OpponentProfile,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            human_name: "You".to_string(),
            opponent_names: ["Bob", "Alice", "Charlie"]
                .into_iter()
                .map(ToString::to_string)
                .collect(),
            starting_chips: 1000,
            small_blind: 10,
            big_blind: 20,
            bet_increment: 10,
            rounding: RoundingMode::Down,
            opponent: OpponentProfile::default(),
        }
    }
}

impl TableOptions {
    /// Returns the total number of seats.
    #[must_use]
    pub fn seats(&self) -> usize {
        self.opponent_names.len() + 1
    }

    /// Sets the human seat's name.
    #[must_use]
    pub fn with_human_name(mut self, name: &str) -> Self {
        self.human_name = name.to_string();
        self
    }

    /// Replaces the opponents.
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::TableOptions;
    ///
    /// let options = TableOptions::default().with_opponents(["Bob"]);
    /// assert_eq!(options.seats(), 2);
    /// ```
    #[must_use]
    pub fn with_opponents<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.opponent_names = names
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();
        self
    }

    /// Sets the starting stack of every seat.
    #[must_use]
    pub fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the small and big blinds.
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::TableOptions;
    ///
    /// let options = TableOptions::default().with_blinds(5, 10);
    /// assert_eq!(options.small_blind, 5);
    /// assert_eq!(options.big_blind, 10);
    /// ```
    #[must_use]
    pub fn with_blinds(mut self, small: usize, big: usize) -> Self {
        self.small_blind = small;
        self.big_blind = big;
        self
    }

    /// Sets the increment opponent bets are rounded to.
    #[must_use]
    pub fn with_bet_increment(mut self, increment: usize) -> Self {
        self.bet_increment = increment;
        self
    }

    /// Sets the rounding mode for opponent bet sizes.
    #[must_use]
    pub fn with_rounding(mut self, mode: RoundingMode) -> Self {
        self.rounding = mode;
        self
    }

    /// Sets the opponent decision thresholds.
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::{OpponentProfile, TableOptions};
    ///
    /// let cautious = OpponentProfile {
    ///     fold_below: 0.45,
    ///     ..OpponentProfile::default()
    /// };
    /// let options = TableOptions::default().with_opponent(cautious);
    /// assert_eq!(options.opponent.fold_below, 0.45);
    /// ```
    #[must_use]
    pub fn with_opponent(mut self, profile: OpponentProfile) -> Self {
        self.opponent = profile;
        self
    }
}
