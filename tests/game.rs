//! Game variant and registry integration tests.

use std::path::Path;

use deckr::registry::find;
use deckr::{BridgeGame, BridgeHonorsGame, Card, DealError, Game, Suit, variants};

fn deck_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/decks"))
}

fn card(suit_code: char, suit_name: &str, value: char, value_name: &str) -> Card {
    Card::new(
        Suit::new(suit_code, suit_name.to_string()),
        value,
        value_name.to_string(),
    )
}

#[test]
fn bridge_game_deals_and_scores_hands() {
    let mut game = BridgeGame::new(deck_dir(), 42).unwrap();

    assert_eq!(game.name(), "Bridge");
    assert_eq!(game.hand_size(), 10);
    assert_eq!(game.max_hands_per_deck(), 5);

    let hand: Vec<Card> = game
        .deal_hand()
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(hand.len(), 10);
    assert_eq!(game.deck().remaining(), 42);

    // Bridge scores a hand by its card count.
    assert_eq!(game.score(&hand), 10);
}

#[test]
fn game_construction_shuffles_the_deck() {
    let game = BridgeGame::new(deck_dir(), 42).unwrap();
    assert_ne!(game.deck().cards(), game.deck().original_cards());
}

#[test]
fn same_seed_deals_the_same_hands() {
    let mut first = BridgeGame::new(deck_dir(), 7).unwrap();
    let mut second = BridgeGame::new(deck_dir(), 7).unwrap();

    let hand_a: Vec<Card> = first
        .deal_hand()
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    let hand_b: Vec<Card> = second
        .deal_hand()
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(hand_a, hand_b);
}

#[test]
fn exhausting_the_deck_fails_mid_hand() {
    let mut game = BridgeGame::new(deck_dir(), 5).unwrap();

    for _ in 0..game.max_hands_per_deck() {
        let hand: Vec<Card> = game
            .deal_hand()
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(hand.len(), 10);
    }
    assert_eq!(game.deck().remaining(), 2);

    // The sixth hand yields the last two cards and then fails.
    let sixth: Vec<Result<Card, DealError>> = game.deal_hand().unwrap().collect();
    assert_eq!(sixth.len(), 3);
    assert!(sixth[0].is_ok());
    assert!(sixth[1].is_ok());
    assert_eq!(sixth[2], Err(DealError::EmptyDeck));
}

#[test]
fn honors_scoring_counts_high_card_points() {
    let game = BridgeHonorsGame::new(deck_dir(), 1).unwrap();

    assert_eq!(game.hand_size(), 13);
    assert_eq!(game.max_hands_per_deck(), 4);

    let hand = vec![
        card('S', "Spades", 'A', "Ace"),
        card('H', "Hearts", 'K', "King"),
        card('D', "Diamonds", 'Q', "Queen"),
        card('C', "Clubs", 'J', "Jack"),
        card('S', "Spades", '2', "Two"),
    ];
    assert_eq!(game.score(&hand), 10);
}

#[test]
fn score_is_pure() {
    let game = BridgeHonorsGame::new(deck_dir(), 1).unwrap();
    let hand = vec![
        card('S', "Spades", 'A', "Ace"),
        card('H', "Hearts", '7', "Seven"),
    ];

    let first = game.score(&hand);
    let second = game.score(&hand);
    assert_eq!(first, second);
}

#[test]
fn registry_order_is_stable() {
    let ids: Vec<&str> = variants().iter().map(|variant| variant.id).collect();
    let again: Vec<&str> = variants().iter().map(|variant| variant.id).collect();

    assert_eq!(ids, again);
    assert_eq!(ids, vec!["bridge", "bridge-honors"]);
}

#[test]
fn registry_finds_variants_by_id() {
    let bridge = find("bridge").unwrap();
    assert_eq!(bridge.name, "Bridge");
    assert_eq!(bridge.hand_size, 10);

    assert!(find("canasta").is_none());
}

#[test]
fn registry_builds_every_variant() {
    for variant in variants() {
        let mut game = (variant.build)(deck_dir(), 11).unwrap();
        assert_eq!(game.name(), variant.name);
        assert_eq!(game.hand_size(), variant.hand_size);

        let hand: Vec<Card> = game
            .deal_hand()
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(hand.len(), variant.hand_size);
        let first = game.score(&hand);
        let second = game.score(&hand);
        assert_eq!(first, second);
    }
}
