//! Heuristic opponent tests.

use pkrs::card::{Card, Rank, Suit};
use pkrs::opponent::{self, Decision, OpponentView};
use pkrs::{Category, OpponentProfile, Phase, RoundingMode};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn steady() -> OpponentProfile {
    OpponentProfile {
        jitter: 0.0,
        ..OpponentProfile::default()
    }
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(77)
}

fn preflop_view(hole_cards: &[Card], chips: usize) -> OpponentView<'_> {
    OpponentView {
        hole_cards,
        board: &[],
        phase: Phase::PreFlop,
        pot: 30,
        current_bet: 20,
        player_bet: 0,
        chips,
        min_raise: 20,
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
}

#[test]
fn preflop_strength_tiers() {
    let mut rng = rng();
    let score = |a: Card, b: Card, rng: &mut ChaCha8Rng| opponent::preflop_strength(&[a, b], rng);

    assert_close(
        score(card(Suit::Hearts, Rank::Ace), card(Suit::Spades, Rank::Ace), &mut rng),
        0.7 + 12.0 / 13.0 * 0.3,
    );
    assert_close(
        score(card(Suit::Hearts, Rank::Two), card(Suit::Spades, Rank::Two), &mut rng),
        0.7,
    );
    assert_close(
        score(card(Suit::Hearts, Rank::King), card(Suit::Hearts, Rank::Queen), &mut rng),
        0.7,
    );
    assert_close(
        score(card(Suit::Hearts, Rank::Queen), card(Suit::Clubs, Rank::Ace), &mut rng),
        0.6,
    );
    assert_close(
        score(card(Suit::Clubs, Rank::Nine), card(Suit::Clubs, Rank::Eight), &mut rng),
        0.5,
    );
    assert_close(
        score(card(Suit::Clubs, Rank::Nine), card(Suit::Hearts, Rank::Seven), &mut rng),
        0.4,
    );
    assert_close(
        score(card(Suit::Spades, Rank::King), card(Suit::Spades, Rank::Four), &mut rng),
        0.35,
    );

    for _ in 0..50 {
        let low = score(card(Suit::Spades, Rank::King), card(Suit::Hearts, Rank::Four), &mut rng);
        assert!((0.2..0.3).contains(&low), "{low}");
    }
    assert_close(opponent::preflop_strength(&[], &mut rng), 0.0);
}

#[test]
fn made_hand_strengths_follow_the_category() {
    assert_close(opponent::category_strength(Category::HighCard), 0.1);
    assert_close(opponent::category_strength(Category::TwoPair), 0.5);
    assert_close(opponent::category_strength(Category::FullHouse), 0.85);
    assert_close(opponent::category_strength(Category::RoyalFlush), 1.0);

    let hole = [card(Suit::Hearts, Rank::Nine), card(Suit::Hearts, Rank::Two)];
    let board = [
        card(Suit::Hearts, Rank::King),
        card(Suit::Hearts, Rank::Five),
        card(Suit::Hearts, Rank::Jack),
    ];
    let strength = opponent::hand_strength(&hole, &board, Phase::Flop, &mut rng());
    assert_close(strength, 0.8);
}

#[test]
fn weak_hands_check_or_fold() {
    let hole = [card(Suit::Hearts, Rank::Seven), card(Suit::Clubs, Rank::Two)];
    let mut rng = rng();

    let facing = preflop_view(&hole, 1000);
    assert_eq!(facing.to_call(), 20);
    let decision = opponent::decide(&facing, &steady(), 10, RoundingMode::Down, &mut rng);
    assert_eq!(decision, Decision::Fold);

    let unopened = OpponentView {
        current_bet: 20,
        player_bet: 20,
        ..facing
    };
    assert_eq!(unopened.to_call(), 0);
    let decision = opponent::decide(&unopened, &steady(), 10, RoundingMode::Down, &mut rng);
    assert_eq!(decision, Decision::Check);
}

#[test]
fn middling_hands_call() {
    let hole = [card(Suit::Clubs, Rank::Nine), card(Suit::Hearts, Rank::Seven)];
    let view = preflop_view(&hole, 1000);
    let decision = opponent::decide(&view, &steady(), 10, RoundingMode::Down, &mut rng());
    assert_eq!(decision, Decision::Call);
}

#[test]
fn strong_hands_raise_by_min_raise_plus_a_pot_share() {
    let hole = [card(Suit::Hearts, Rank::Ace), card(Suit::Spades, Rank::Ace)];
    let view = preflop_view(&hole, 1000);
    // 20 + 0.977 * 30 * 0.5 = 34.65, floored to 30 on top of the current 20.
    let decision = opponent::decide(&view, &steady(), 10, RoundingMode::Down, &mut rng());
    assert_eq!(decision, Decision::Raise(50));
}

#[test]
fn raises_are_capped_at_the_stack() {
    let hole = [card(Suit::Hearts, Rank::Ace), card(Suit::Spades, Rank::Ace)];

    let short = preflop_view(&hole, 40);
    let decision = opponent::decide(&short, &steady(), 10, RoundingMode::Down, &mut rng());
    assert_eq!(decision, Decision::Raise(40));

    let shorter = preflop_view(&hole, 15);
    let decision = opponent::decide(&shorter, &steady(), 10, RoundingMode::Down, &mut rng());
    assert_eq!(decision, Decision::Call);
}

#[test]
fn bet_sizes_follow_the_rounding_mode() {
    let hole = [card(Suit::Hearts, Rank::Nine), card(Suit::Hearts, Rank::Two)];
    let board = [
        card(Suit::Hearts, Rank::King),
        card(Suit::Hearts, Rank::Five),
        card(Suit::Hearts, Rank::Jack),
    ];
    // Flush: 20 + 0.8 * 90 * 0.5 = 56.
    let view = OpponentView {
        hole_cards: &hole,
        board: &board,
        phase: Phase::Flop,
        pot: 90,
        current_bet: 0,
        player_bet: 0,
        chips: 1000,
        min_raise: 20,
    };

    let bet = |rounding| opponent::decide(&view, &steady(), 10, rounding, &mut rng());
    assert_eq!(bet(RoundingMode::Down), Decision::Raise(50));
    assert_eq!(bet(RoundingMode::Nearest), Decision::Raise(60));
    assert_eq!(bet(RoundingMode::Up), Decision::Raise(60));

    let coarse = opponent::decide(&view, &steady(), 100, RoundingMode::Down, &mut rng());
    assert_eq!(coarse, Decision::Raise(20));
}

#[test]
fn decisions_are_reproducible_for_a_seed() {
    let hole = [card(Suit::Spades, Rank::Jack), card(Suit::Hearts, Rank::Ten)];
    let view = preflop_view(&hole, 1000);
    let profile = OpponentProfile::default();

    let mut first = ChaCha8Rng::seed_from_u64(3);
    let mut second = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..20 {
        assert_eq!(
            opponent::decide(&view, &profile, 10, RoundingMode::Down, &mut first),
            opponent::decide(&view, &profile, 10, RoundingMode::Down, &mut second)
        );
    }
}
