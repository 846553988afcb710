use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use tracing::{debug, info};

use crate::error::ActionError;
use crate::result::ShowdownResult;

use super::{Betting, Phase, Player, Table};

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Returns the first seat after `from` (wrapping) that can take a turn.
pub(super) fn next_actor(players: &[Player], from: usize) -> Option<usize> {
    let seats = players.len();
    (1..=seats)
        .map(|step| (from + step) % seats)
        .find(|&seat| players[seat].can_act())
}

/// Returns whether the betting round is over.
///
/// Nobody who can still act may owe chips. Beyond that, either at most one
/// seat can act, or every seat that can act has acted this street.
pub(super) fn round_complete(players: &[Player], current_bet: usize) -> bool {
    let actors: Vec<&Player> = players.iter().filter(|player| player.can_act()).collect();
    if actors.iter().any(|player| player.owes(current_bet) > 0) {
        return false;
    }
    actors.len() <= 1 || actors.iter().all(|player| player.acted)
}

/// Picks the verb form for the seat: the human seat is addressed directly.
pub(super) const fn verb<'a>(player: &Player, second: &'a str, third: &'a str) -> &'a str {
    if player.is_human { second } else { third }
}

impl Table {
    /// Returns whether the betting round in progress is complete.
    pub fn is_betting_round_complete(&self) -> bool {
        let players = self.players.lock();
        let betting = self.betting.lock();
        betting.round_complete || round_complete(&players, betting.current_bet)
    }

    /// Returns whether the seat due to act may check.
    pub fn can_check(&self) -> bool {
        self.with_actor(|player, betting| player.owes(betting.current_bet) == 0)
    }

    /// Returns whether the seat due to act may call.
    pub fn can_call(&self) -> bool {
        self.with_actor(|player, betting| {
            player.owes(betting.current_bet) > 0 && player.chips > 0
        })
    }

    /// Returns the smallest legal raise target for the seat due to act.
    ///
    /// A player who cannot reach it may still go all-in for less.
    pub fn min_raise_amount(&self) -> usize {
        let betting = self.betting.lock();
        betting.current_bet + betting.min_raise
    }

    /// Returns the largest raise target for the seat due to act (all-in).
    pub fn max_raise_amount(&self) -> usize {
        let Some(seat) = self.current_player_index() else {
            return 0;
        };
        self.players
            .lock()
            .get(seat)
            .map_or(0, |player| player.current_bet + player.chips)
    }

    /// Checks: passes the action without putting in chips.
    ///
    /// # Errors
    ///
    /// Returns an error if no betting round is open, it is not `seat`'s turn,
    /// or the seat owes chips.
    pub fn check(&self, seat: usize) -> Result<(), ActionError> {
        self.act(seat, |player, betting| {
            if player.owes(betting.current_bet) > 0 {
                return Err(ActionError::CannotCheck);
            }
            Ok(format!("{} {}", player.name, verb(player, "check", "checks")))
        })
    }

    /// Calls: matches the current bet, or goes all-in for less.
    ///
    /// # Errors
    ///
    /// Returns an error if no betting round is open, it is not `seat`'s turn,
    /// or there is nothing to call.
    pub fn call(&self, seat: usize) -> Result<(), ActionError> {
        self.act(seat, |player, betting| {
            let owed = player.owes(betting.current_bet);
            if owed == 0 || player.chips == 0 {
                return Err(ActionError::CannotCall);
            }
            let paid = player.commit(owed);
            betting.pot += paid;
            if player.all_in {
                Ok(format!("{} {} all-in with {paid}", player.name, verb(player, "are", "is")))
            } else {
                Ok(format!("{} {} {paid}", player.name, verb(player, "call", "calls")))
            }
        })
    }

    /// Bets or raises so that `seat`'s total bet this street becomes `to`.
    ///
    /// `to` must reach [`Table::min_raise_amount`] unless it puts the player
    /// all-in above the current bet.
    ///
    /// # Errors
    ///
    /// Returns an error if no betting round is open, it is not `seat`'s turn,
    /// `to` is below the minimum, or `to` needs more chips than the seat has.
    pub fn raise(&self, seat: usize, to: usize) -> Result<(), ActionError> {
        self.act(seat, |player, betting| {
            let needed = to.saturating_sub(player.current_bet);
            if needed > player.chips {
                return Err(ActionError::InsufficientChips);
            }
            let all_in = needed == player.chips;
            let full = to >= betting.current_bet + betting.min_raise;
            if to <= betting.current_bet || (!full && !all_in) {
                return Err(ActionError::RaiseTooSmall);
            }

            let opened = betting.current_bet == 0;
            betting.pot += player.commit(needed);
            if full {
                betting.min_raise = to - betting.current_bet;
            }
            betting.current_bet = to;
            betting.last_bettor = Some(player.id);

            Ok(if player.all_in {
                format!("{} {} all-in with {to}", player.name, verb(player, "are", "is"))
            } else if opened {
                format!("{} {} {to}", player.name, verb(player, "bet", "bets"))
            } else {
                format!("{} {} to {to}", player.name, verb(player, "raise", "raises"))
            })
        })
    }

    /// Folds the hand.
    ///
    /// When a single player is left in the hand, the pot is awarded to them
    /// at once and the table goes idle.
    ///
    /// # Errors
    ///
    /// Returns an error if no betting round is open or it is not `seat`'s turn.
    pub fn fold(&self, seat: usize) -> Result<(), ActionError> {
        self.act(seat, |player, _| {
            player.folded = true;
            Ok(format!("{} {}", player.name, verb(player, "fold", "folds")))
        })
    }

    fn with_actor(&self, f: impl FnOnce(&Player, &Betting) -> bool) -> bool {
        let Some(seat) = self.current_player_index() else {
            return false;
        };
        let players = self.players.lock();
        let betting = self.betting.lock();
        players.get(seat).is_some_and(|player| f(player, &betting))
    }

    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    fn act(
        &self,
        seat: usize,
        apply: impl FnOnce(&mut Player, &mut Betting) -> Result<String, ActionError>,
    ) -> Result<(), ActionError> {
        let mut phase = self.phase.lock();
        if !phase.is_betting() {
            return Err(ActionError::InvalidState);
        }
        let mut players = self.players.lock();
        let mut betting = self.betting.lock();
        if betting.round_complete {
            return Err(ActionError::InvalidState);
        }
        let player = players.get_mut(seat).ok_or(ActionError::NotYourTurn)?;
        if player.folded {
            return Err(ActionError::PlayerFolded);
        }
        if seat != betting.current {
            return Err(ActionError::NotYourTurn);
        }

        let description = apply(player, &mut betting)?;
        player.acted = true;
        debug!(seat, phase = phase.name(), action = %description, "player acted");
        *self.last_action.lock() = description.clone();

        let in_hand: Vec<usize> = players
            .iter()
            .filter(|player| player.in_hand())
            .map(|player| player.id)
            .collect();
        if let &[winner] = in_hand.as_slice() {
            let result = self.award_uncontested(&mut players, &betting, winner);
            *self.last_result.lock() = Some(result);
            *phase = Phase::Idle;
            return Ok(());
        }

        if round_complete(&players, betting.current_bet) {
            betting.round_complete = true;
        } else if let Some(next) = next_actor(&players, seat) {
            betting.current = next;
        } else {
            betting.round_complete = true;
        }
        drop(players);
        self.set_message(description);
        Ok(())
    }

    fn award_uncontested(
        &self,
        players: &mut [Player],
        betting: &Betting,
        winner: usize,
    ) -> ShowdownResult {
        let pot = betting.pot;
        players[winner].chips += pot;
        let seat = &players[winner];
        let message = format!("{} {} the pot!", seat.name, verb(seat, "win", "wins"));
        let hand_number = self.hand_number();
        info!(hand = hand_number, seat = winner, pot, "pot awarded uncontested");
        self.set_message(message);

        let mut payouts = HashMap::new();
        payouts.insert(winner, pot);
        ShowdownResult {
            hand_number,
            pot,
            winners: vec![winner],
            hands: Vec::new(),
            payouts,
            uncontested: true,
        }
    }
}
