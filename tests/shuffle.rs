//! Shuffle source tests.

use std::collections::HashMap;

use cardstack::{Card, DECK_SIZE, Shuffler, base_deck, build_deck, default_sort, shuffle};

fn counts(cards: &[Card]) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(*card).or_insert(0) += 1;
    }
    counts
}

#[test]
fn shuffle_preserves_cards() {
    let shuffler = Shuffler::from_seed(10);
    let deck = base_deck();
    let shuffled = shuffler.shuffle(&deck);

    assert_eq!(shuffled.len(), DECK_SIZE);
    assert_eq!(counts(&shuffled), counts(&deck));
    assert_ne!(shuffled, deck);
    // Input untouched.
    assert_eq!(deck, base_deck());
}

#[test]
fn shuffle_preserves_duplicates() {
    let shuffler = Shuffler::from_seed(11);
    let mut deck = base_deck();
    deck.extend(base_deck());
    deck.push(Card::joker(0));

    let shuffled = shuffler.shuffle(&deck);
    assert_eq!(shuffled.len(), deck.len());
    assert_eq!(counts(&shuffled), counts(&deck));
}

#[test]
fn same_seed_same_permutation() {
    let a = Shuffler::from_seed(0);
    let b = Shuffler::from_seed(0);

    for len in [0, 1, 2, 52, 300] {
        assert_eq!(a.permutation(len), b.permutation(len));
    }

    let deck = base_deck();
    assert_eq!(a.shuffle(&deck), b.shuffle(&deck));
}

#[test]
fn permutation_covers_every_index() {
    let shuffler = Shuffler::from_seed(12);
    let mut perm = shuffler.permutation(100);
    perm.sort_unstable();
    assert_eq!(perm, (0..100).collect::<Vec<_>>());

    assert!(shuffler.permutation(0).is_empty());
    assert_eq!(shuffler.permutation(1), vec![0]);
}

#[test]
fn output_position_maps_through_permutation() {
    let a = Shuffler::from_seed(13);
    let b = Shuffler::from_seed(13);
    let deck = base_deck();

    let perm = a.permutation(deck.len());
    let shuffled = b.shuffle(&deck);
    for (i, &j) in perm.iter().enumerate() {
        assert_eq!(shuffled[i], deck[j]);
    }
}

#[test]
fn reseed_restarts_sequence() {
    let shuffler = Shuffler::from_seed(5);
    let first = shuffler.permutation(52);
    let second = shuffler.permutation(52);
    assert_ne!(first, second);

    shuffler.reseed(5);
    assert_eq!(shuffler.permutation(52), first);
}

#[test]
fn clock_seeded_shuffler_still_shuffles() {
    let shuffler = Shuffler::default();
    assert_eq!(format!("{shuffler:?}"), "Shuffler { seeded: false }");

    let shuffled = shuffler.shuffle(&base_deck());
    assert_eq!(counts(&shuffled), counts(&base_deck()));
    assert_eq!(format!("{shuffler:?}"), "Shuffler { seeded: true }");
    assert!(shuffler.into_rng().is_some());
    assert!(Shuffler::from_clock().into_rng().is_none());
}

#[test]
fn shared_source_round_trips_through_sort() {
    cardstack::shuffle::reseed(0);
    let cards = build_deck(&[&shuffle(), &default_sort()]).unwrap();
    assert_eq!(cards, base_deck());
}

#[test]
fn shuffler_is_shareable_across_threads() {
    let shuffler = Shuffler::from_seed(14);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let shuffled = shuffler.shuffle(&base_deck());
                assert_eq!(counts(&shuffled), counts(&base_deck()));
            });
        }
    });
}
