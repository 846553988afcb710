use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::sync::atomic::Ordering;

use tracing::{info, warn};

use crate::card::{self, Card};
use crate::error::{ActionError, DeckError, StartError};
use crate::hand;
use crate::result::{SeatHand, ShowdownResult};
use crate::sync;

use super::actions::{next_actor, round_complete, verb};
use super::{Betting, Phase, Player, Table};

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Cards dealt after the hole cards: one burn per street plus five board cards.
const BOARD_CARDS: usize = 3 + 5;

/// Returns the first seat after `from` (wrapping) that holds chips.
fn next_funded(players: &[Player], from: usize) -> usize {
    let seats = players.len();
    (1..=seats)
        .map(|step| (from + step) % seats)
        .find(|&seat| players[seat].chips > 0)
        .unwrap_or(from)
}

/// Orders `seats` clockwise starting left of the button.
fn order_from_button(seats: &mut [usize], dealer: usize, table_size: usize) {
    seats.sort_by_key(|&seat| (seat + table_size - dealer - 1) % table_size);
}

impl Table {
    /// Starts a new hand.
    ///
    /// Moves the button to the next funded seat, deals two hole cards to
    /// every seat with chips, posts the blinds and opens pre-flop betting with
    /// the seat after the big blind. Seats without chips sit the hand out.
    ///
    /// # Errors
    ///
    /// Returns an error if a hand is in progress or fewer than two seats hold
    /// chips. Nothing is changed when an error is returned.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn start_hand(&self) -> Result<(), StartError> {
        let mut phase = self.phase.lock();
        if !matches!(*phase, Phase::Idle | Phase::Showdown) {
            return Err(StartError::InvalidState);
        }
        let mut players = self.players.lock();
        let funded = players.iter().filter(|player| player.chips > 0).count();
        if funded < 2 {
            return Err(StartError::NotEnoughPlayers);
        }

        let mut deck = card::build_deck();
        if deck.len() < funded * 2 + BOARD_CARDS {
            return Err(DeckError::Empty.into());
        }
        sync::with(&self.rng, |rng| card::shuffle(&mut deck, rng));

        let hand_number = self.hand_number.fetch_add(1, Ordering::SeqCst) + 1;
        let mut betting = self.betting.lock();
        let seats = players.len();
        let dealer = next_funded(&players, betting.dealer);

        for player in players.iter_mut() {
            player.reset_for_hand();
        }

        let mut order: Vec<usize> = (0..seats).filter(|&seat| !players[seat].folded).collect();
        order_from_button(&mut order, dealer, seats);
        for _ in 0..2 {
            for &seat in &order {
                let dealt = card::deal(&mut deck)?;
                let player = &mut players[seat];
                player
                    .hole_cards
                    .push(if player.is_human { dealt.revealed() } else { dealt });
            }
        }
        *self.deck.lock() = deck;
        self.board.lock().clear();

        let small_blind = next_funded(&players, dealer);
        let big_blind = next_funded(&players, small_blind);
        let small = players[small_blind].commit(self.options.small_blind);
        let big = players[big_blind].commit(self.options.big_blind);

        *betting = Betting {
            dealer,
            small_blind,
            big_blind,
            current: next_actor(&players, big_blind).unwrap_or(big_blind),
            pot: small + big,
            current_bet: self.options.big_blind,
            min_raise: self.options.big_blind,
            last_bettor: None,
            round_complete: round_complete(&players, self.options.big_blind),
        };
        *self.last_result.lock() = None;
        self.last_action.lock().clear();
        let (sb, bb) = (&players[small_blind], &players[big_blind]);
        self.set_message(format!(
            "{} {} {small}, {} {} {big}",
            sb.name,
            verb(sb, "post", "posts"),
            bb.name,
            verb(bb, "post", "posts")
        ));
        *phase = Phase::PreFlop;

        info!(
            hand = hand_number,
            dealer, small_blind, big_blind, seated = order.len(),
            "hand started"
        );
        Ok(())
    }

    /// Deals the next street, or settles the showdown after the river.
    pub(super) fn advance_street(&self) -> Result<(), ActionError> {
        let mut phase = self.phase.lock();
        let Some(next) = phase.next_street() else {
            return Err(ActionError::InvalidState);
        };
        let mut players = self.players.lock();
        let mut betting = self.betting.lock();
        if !betting.round_complete {
            return Err(ActionError::InvalidState);
        }

        if next == Phase::Showdown {
            let result = self.settle_showdown(&mut players, &betting);
            drop(betting);
            drop(players);
            *self.last_result.lock() = Some(result);
            *phase = Phase::Showdown;
            return Ok(());
        }

        let count = if next == Phase::Flop { 3 } else { 1 };
        let mut deck = self.deck.lock();
        if deck.len() < count + 1 {
            return Err(DeckError::Empty.into());
        }
        card::deal(&mut deck)?;
        let mut dealt = Vec::with_capacity(count);
        for _ in 0..count {
            dealt.push(card::deal(&mut deck)?.revealed());
        }
        drop(deck);
        self.board.lock().extend(dealt);

        for player in players.iter_mut() {
            player.current_bet = 0;
            player.acted = false;
        }
        betting.current_bet = 0;
        betting.min_raise = self.options.big_blind;
        betting.last_bettor = None;
        betting.round_complete = round_complete(&players, 0);
        betting.current = next_actor(&players, betting.dealer).unwrap_or(betting.dealer);
        drop(betting);
        drop(players);

        let label = match next {
            Phase::Flop => "Flop",
            Phase::Turn => "Turn",
            _ => "River",
        };
        self.set_message(format!("{label} dealt"));
        info!(hand = self.hand_number(), street = next.name(), "street dealt");
        *phase = next;
        Ok(())
    }

    /// Clears a settled hand and returns the table to idle.
    pub(super) fn finish_hand(&self) -> Result<(), ActionError> {
        let mut phase = self.phase.lock();
        if *phase != Phase::Showdown {
            return Err(ActionError::InvalidState);
        }
        *phase = Phase::Idle;
        Ok(())
    }

    fn settle_showdown(&self, players: &mut [Player], betting: &Betting) -> ShowdownResult {
        let board: Vec<Card> = self.board.lock().clone();
        let hand_number = self.hand_number();

        let mut hands = Vec::new();
        for player in players.iter_mut().filter(|player| player.in_hand()) {
            for card in &mut player.hole_cards {
                card.face_up = true;
            }
            let cards: Vec<Card> = player.hole_cards.iter().chain(&board).copied().collect();
            match hand::evaluate(&cards) {
                Ok(result) => hands.push(SeatHand {
                    seat: player.id,
                    result,
                }),
                Err(error) => warn!(seat = player.id, %error, "hand skipped at showdown"),
            }
        }

        let results: Vec<_> = hands.iter().map(|seat| seat.result.clone()).collect();
        let mut winners: Vec<usize> = hand::winners(&results)
            .into_iter()
            .map(|index| hands[index].seat)
            .collect();
        order_from_button(&mut winners, betting.dealer, players.len());

        let pot = betting.pot;
        let mut payouts = HashMap::new();
        if !winners.is_empty() {
            let share = pot / winners.len();
            let odd = pot % winners.len();
            for (position, &seat) in winners.iter().enumerate() {
                let amount = share + usize::from(position < odd);
                players[seat].chips += amount;
                payouts.insert(seat, amount);
            }
        }

        let names: Vec<String> = winners
            .iter()
            .map(|&seat| players[seat].name.clone())
            .collect();
        let best = results.iter().max().map(|result| result.category().name());
        let message = match (winners.as_slice(), best) {
            (&[seat], Some(category)) => {
                let winner = &players[seat];
                format!("{} {} with {category}!", winner.name, verb(winner, "win", "wins"))
            }
            ([_, ..], Some(category)) => format!("Split pot: {} with {category}", names.join(", ")),
            _ => String::from("No winner"),
        };
        self.set_message(message);
        info!(hand = hand_number, pot, winners = ?winners, "showdown settled");

        ShowdownResult {
            hand_number,
            pot,
            winners,
            hands,
            payouts,
            uncontested: false,
        }
    }
}
