use alloc::vec::Vec;

use tracing::{debug, warn};

use crate::card::Card;
use crate::error::ActionError;
use crate::opponent::{self, Decision, OpponentView};
use crate::sync;

use super::{PendingAction, Phase, Table};

impl Table {
    /// Returns the automatic work the table is waiting on, if any.
    ///
    /// `None` means the table is idle or waiting for the human seat.
    pub fn pending(&self) -> Option<PendingAction> {
        let phase = *self.phase.lock();
        let hand = self.hand_number();
        match phase {
            Phase::Idle => None,
            Phase::Showdown => Some(PendingAction::FinishHand { hand }),
            Phase::PreFlop | Phase::Flop | Phase::Turn | Phase::River => {
                let betting = *self.betting.lock();
                if betting.round_complete {
                    return Some(PendingAction::AdvanceStreet { hand, phase });
                }
                self.players
                    .lock()
                    .get(betting.current)
                    .filter(|player| !player.is_human && player.can_act())
                    .map(|player| PendingAction::Opponent {
                        hand,
                        seat: player.id,
                    })
            }
        }
    }

    /// Applies `action` if it still describes the table's pending work.
    ///
    /// Returns `Ok(false)` without touching anything when the action is stale,
    /// for example because the hand ended while a host was delaying it.
    ///
    /// # Errors
    ///
    /// Returns an error if applying the action fails; only deck exhaustion
    /// can cause this during normal play.
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::{Phase, Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 3);
    /// table.start_hand().unwrap();
    /// loop {
    ///     if table.current_player_index() == Some(0) {
    ///         table.fold(0).unwrap();
    ///         continue;
    ///     }
    ///     let Some(action) = table.pending() else { break };
    ///     assert!(table.resolve(action).unwrap());
    /// }
    /// assert_eq!(table.phase(), Phase::Idle);
    /// ```
    pub fn resolve(&self, action: PendingAction) -> Result<bool, ActionError> {
        if self.pending() != Some(action) {
            warn!(?action, "stale pending action ignored");
            return Ok(false);
        }
        match action {
            PendingAction::Opponent { seat, .. } => self.play_opponent(seat).map(|_| true),
            PendingAction::AdvanceStreet { .. } => self.advance_street().map(|()| true),
            PendingAction::FinishHand { .. } => self.finish_hand().map(|()| true),
        }
    }

    /// Resolves whatever work is pending right now.
    ///
    /// # Errors
    ///
    /// Returns an error if applying the action fails.
    pub fn run_pending(&self) -> Result<bool, ActionError> {
        self.pending()
            .map_or(Ok(false), |action| self.resolve(action))
    }

    /// Lets the heuristic choose and apply an action for `seat`.
    ///
    /// # Errors
    ///
    /// Returns an error if `seat` is not due to act or is the human seat.
    pub fn play_opponent(&self, seat: usize) -> Result<Decision, ActionError> {
        let phase = *self.phase.lock();
        if !phase.is_betting() {
            return Err(ActionError::InvalidState);
        }
        let player = self
            .players
            .lock()
            .get(seat)
            .cloned()
            .filter(|player| !player.is_human)
            .ok_or(ActionError::NotYourTurn)?;
        let betting = *self.betting.lock();
        if betting.round_complete || betting.current != seat {
            return Err(ActionError::NotYourTurn);
        }
        let board: Vec<Card> = self.board.lock().clone();

        let view = OpponentView {
            hole_cards: &player.hole_cards,
            board: &board,
            phase,
            pot: betting.pot,
            current_bet: betting.current_bet,
            player_bet: player.current_bet,
            chips: player.chips,
            min_raise: betting.min_raise,
        };
        let decision = sync::with(&self.rng, |rng| {
            opponent::decide(
                &view,
                &self.options.opponent,
                self.options.bet_increment,
                self.options.rounding,
                rng,
            )
        });
        debug!(seat, ?decision, "opponent decided");

        match decision {
            Decision::Fold => self.fold(seat)?,
            Decision::Check => self.check(seat)?,
            Decision::Call => self.call(seat)?,
            Decision::Raise(to) => self.raise(seat, to)?,
        }
        Ok(decision)
    }
}
