//! Hand evaluator tests.

use core::cmp::Ordering;

use pkrs::card::{Card, Rank, Suit};
use pkrs::hand::{self, Category, HandResult, evaluate};
use pkrs::EvalError;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn eval(cards: &[Card]) -> HandResult {
    evaluate(cards).unwrap()
}

#[test]
fn royal_flush() {
    let result = eval(&[
        card(Suit::Spades, Rank::Ace),
        card(Suit::Spades, Rank::King),
        card(Suit::Spades, Rank::Queen),
        card(Suit::Spades, Rank::Jack),
        card(Suit::Spades, Rank::Ten),
    ]);
    assert_eq!(result.category(), Category::RoyalFlush);
    assert_eq!(result.category_rank(), 9);
}

#[test]
fn full_house_keys_are_trips_then_pair() {
    let result = eval(&[
        card(Suit::Hearts, Rank::Four),
        card(Suit::Diamonds, Rank::Four),
        card(Suit::Clubs, Rank::Four),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Hearts, Rank::Nine),
    ]);
    assert_eq!(result.category(), Category::FullHouse);
    assert_eq!(result.tie_break_keys(), &[4, 9]);
}

#[test]
fn ace_low_straight_is_five_high() {
    let result = eval(&[
        card(Suit::Clubs, Rank::Two),
        card(Suit::Diamonds, Rank::Three),
        card(Suit::Hearts, Rank::Four),
        card(Suit::Spades, Rank::Five),
        card(Suit::Diamonds, Rank::Ace),
    ]);
    assert_eq!(result.category(), Category::Straight);
    assert_eq!(result.tie_break_keys(), &[5]);

    let six_high = eval(&[
        card(Suit::Clubs, Rank::Two),
        card(Suit::Diamonds, Rank::Three),
        card(Suit::Hearts, Rank::Four),
        card(Suit::Spades, Rank::Five),
        card(Suit::Diamonds, Rank::Six),
    ]);
    assert!(six_high > result);
}

#[test]
fn high_card_keys_are_sorted_descending() {
    let result = eval(&[
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Hearts, Rank::King),
        card(Suit::Diamonds, Rank::Queen),
        card(Suit::Clubs, Rank::Jack),
        card(Suit::Spades, Rank::Nine),
    ]);
    assert_eq!(result.category(), Category::HighCard);
    assert_eq!(result.category_rank(), 0);
    assert_eq!(result.tie_break_keys(), &[14, 13, 12, 11, 9]);
}

#[test]
fn every_category_is_recognized() {
    let cases = [
        (
            [
                card(Suit::Hearts, Rank::Nine),
                card(Suit::Hearts, Rank::Eight),
                card(Suit::Hearts, Rank::Seven),
                card(Suit::Hearts, Rank::Six),
                card(Suit::Hearts, Rank::Five),
            ],
            Category::StraightFlush,
            vec![9],
        ),
        (
            [
                card(Suit::Hearts, Rank::Seven),
                card(Suit::Diamonds, Rank::Seven),
                card(Suit::Clubs, Rank::Seven),
                card(Suit::Spades, Rank::Seven),
                card(Suit::Hearts, Rank::King),
            ],
            Category::FourOfAKind,
            vec![7, 13],
        ),
        (
            [
                card(Suit::Clubs, Rank::Two),
                card(Suit::Clubs, Rank::Nine),
                card(Suit::Clubs, Rank::Jack),
                card(Suit::Clubs, Rank::Four),
                card(Suit::Clubs, Rank::King),
            ],
            Category::Flush,
            vec![13, 11, 9, 4, 2],
        ),
        (
            [
                card(Suit::Clubs, Rank::Queen),
                card(Suit::Hearts, Rank::Queen),
                card(Suit::Spades, Rank::Queen),
                card(Suit::Clubs, Rank::Four),
                card(Suit::Diamonds, Rank::Ace),
            ],
            Category::ThreeOfAKind,
            vec![12, 14],
        ),
        (
            [
                card(Suit::Clubs, Rank::Jack),
                card(Suit::Hearts, Rank::Jack),
                card(Suit::Spades, Rank::Three),
                card(Suit::Clubs, Rank::Three),
                card(Suit::Diamonds, Rank::Ace),
            ],
            Category::TwoPair,
            vec![11, 3, 14],
        ),
        (
            [
                card(Suit::Clubs, Rank::Eight),
                card(Suit::Hearts, Rank::Eight),
                card(Suit::Spades, Rank::King),
                card(Suit::Clubs, Rank::Three),
                card(Suit::Diamonds, Rank::Ten),
            ],
            Category::Pair,
            vec![8, 13, 10, 3],
        ),
    ];

    for (cards, category, keys) in cases {
        let result = eval(&cards);
        assert_eq!(result.category(), category, "{cards:?}");
        assert_eq!(result.tie_break_keys(), keys.as_slice(), "{cards:?}");
        assert_eq!(hand::evaluate_five(&cards), result);
    }
}

#[test]
fn seven_cards_pick_the_best_five() {
    let result = eval(&[
        card(Suit::Hearts, Rank::Two),
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Hearts, Rank::Jack),
        card(Suit::Hearts, Rank::Four),
        card(Suit::Clubs, Rank::Ace),
        card(Suit::Hearts, Rank::Six),
    ]);
    assert_eq!(result.category(), Category::Flush);
    assert_eq!(result.tie_break_keys(), &[11, 9, 6, 4, 2]);
}

#[test]
fn seven_card_result_ignores_input_order() {
    let mut cards = vec![
        card(Suit::Diamonds, Rank::King),
        card(Suit::Clubs, Rank::King),
        card(Suit::Hearts, Rank::Five),
        card(Suit::Spades, Rank::Five),
        card(Suit::Hearts, Rank::Queen),
        card(Suit::Clubs, Rank::Two),
        card(Suit::Spades, Rank::Queen),
    ];
    let expected = eval(&cards);
    assert_eq!(expected.category(), Category::TwoPair);
    assert_eq!(expected.tie_break_keys(), &[13, 12, 5]);

    for _ in 0..cards.len() {
        cards.rotate_left(1);
        assert_eq!(eval(&cards), expected);
    }
    cards.reverse();
    assert_eq!(eval(&cards), expected);
}

#[test]
fn six_cards_are_accepted() {
    let result = eval(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Jack),
        card(Suit::Spades, Rank::Queen),
        card(Suit::Diamonds, Rank::King),
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Clubs, Rank::Three),
    ]);
    assert_eq!(result.category(), Category::Straight);
    assert_eq!(result.tie_break_keys(), &[14]);
}

#[test]
fn wrong_card_counts_are_rejected() {
    let four = [
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Jack),
        card(Suit::Spades, Rank::Queen),
        card(Suit::Diamonds, Rank::King),
    ];
    assert_eq!(evaluate(&four), Err(EvalError::CardCount(4)));

    let eight = [card(Suit::Hearts, Rank::Two); 8];
    assert_eq!(evaluate(&eight), Err(EvalError::CardCount(8)));
    assert_eq!(evaluate(&[]), Err(EvalError::CardCount(0)));
}

#[test]
fn kickers_break_ties_and_equal_hands_split() {
    let aces_king = eval(&[
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Clubs, Rank::Ace),
        card(Suit::Spades, Rank::King),
        card(Suit::Clubs, Rank::Seven),
        card(Suit::Diamonds, Rank::Three),
    ]);
    let aces_queen = eval(&[
        card(Suit::Diamonds, Rank::Ace),
        card(Suit::Spades, Rank::Ace),
        card(Suit::Hearts, Rank::Queen),
        card(Suit::Hearts, Rank::Seven),
        card(Suit::Spades, Rank::Three),
    ]);
    let aces_king_again = eval(&[
        card(Suit::Diamonds, Rank::Ace),
        card(Suit::Spades, Rank::Ace),
        card(Suit::Hearts, Rank::King),
        card(Suit::Hearts, Rank::Seven),
        card(Suit::Spades, Rank::Three),
    ]);

    assert_eq!(hand::compare(&aces_king, &aces_queen), Ordering::Greater);
    assert_eq!(hand::compare(&aces_queen, &aces_king), Ordering::Less);
    assert_eq!(hand::compare(&aces_king, &aces_king_again), Ordering::Equal);
    assert_eq!(
        hand::winners(&[aces_queen, aces_king.clone(), aces_king_again]),
        vec![1, 2]
    );
    assert!(hand::winners(&[]).is_empty());
    assert_eq!(hand::winners(&[aces_king]), vec![0]);
}

#[test]
fn comparison_is_transitive() {
    let hands = [
        eval(&[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Diamonds, Rank::Jack),
            card(Suit::Hearts, Rank::King),
        ]),
        eval(&[
            card(Suit::Hearts, Rank::Three),
            card(Suit::Clubs, Rank::Three),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Diamonds, Rank::Jack),
            card(Suit::Hearts, Rank::King),
        ]),
        eval(&[
            card(Suit::Hearts, Rank::Three),
            card(Suit::Clubs, Rank::Three),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Hearts, Rank::King),
        ]),
        eval(&[
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Clubs, Rank::Two),
            card(Suit::Spades, Rank::Three),
            card(Suit::Diamonds, Rank::Four),
            card(Suit::Hearts, Rank::Five),
        ]),
        eval(&[
            card(Suit::Clubs, Rank::Two),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Clubs, Rank::Jack),
            card(Suit::Clubs, Rank::King),
        ]),
        eval(&[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::Two),
            card(Suit::Spades, Rank::Two),
            card(Suit::Diamonds, Rank::Two),
            card(Suit::Hearts, Rank::Three),
        ]),
    ];

    for a in &hands {
        for b in &hands {
            for c in &hands {
                if a >= b && b >= c {
                    assert!(a >= c, "{a:?} >= {b:?} >= {c:?}");
                }
            }
        }
    }

    let mut sorted = hands.to_vec();
    sorted.sort();
    assert_eq!(sorted, hands.to_vec());
}

#[test]
fn category_ranks_and_names() {
    assert_eq!(Category::HighCard.rank(), 0);
    assert_eq!(Category::Pair.rank(), 1);
    assert_eq!(Category::FullHouse.rank(), 6);
    assert_eq!(Category::RoyalFlush.rank(), 9);
    assert_eq!(Category::ThreeOfAKind.name(), "Three of a Kind");
    assert_eq!(Category::FullHouse.to_string(), "Full House");
}

#[test]
fn evaluator_error_message() {
    let error = evaluate(&[]).unwrap_err();
    assert_eq!(error.to_string(), "expected 5 to 7 cards, got 0");
}

#[test]
fn trips_ignore_the_second_kicker() {
    let queens_ace_four = eval(&[
        card(Suit::Clubs, Rank::Queen),
        card(Suit::Hearts, Rank::Queen),
        card(Suit::Spades, Rank::Queen),
        card(Suit::Diamonds, Rank::Ace),
        card(Suit::Clubs, Rank::Four),
    ]);
    let queens_ace_three = eval(&[
        card(Suit::Clubs, Rank::Queen),
        card(Suit::Hearts, Rank::Queen),
        card(Suit::Spades, Rank::Queen),
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Clubs, Rank::Three),
    ]);

    assert_eq!(queens_ace_three.tie_break_keys(), &[12, 14]);
    assert_eq!(
        hand::compare(&queens_ace_four, &queens_ace_three),
        Ordering::Equal
    );
    assert_eq!(hand::winners(&[queens_ace_four, queens_ace_three]), vec![0, 1]);
}

#[test]
fn duplicated_cards_do_not_panic() {
    let ace = card(Suit::Spades, Rank::Ace);
    let result = eval(&[
        ace,
        ace,
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Diamonds, Rank::Ace),
        card(Suit::Clubs, Rank::Ace),
    ]);
    assert_eq!(result.category(), Category::FourOfAKind);
    assert_eq!(result.tie_break_keys(), &[14]);
}
