use std::collections::BTreeMap;

use escrutini::apportionment::{dhondt, total_assigned};

fn tally(pairs: &[(&str, i64)]) -> BTreeMap<String, i64> {
    pairs.iter().map(|(p, v)| (p.to_string(), *v)).collect()
}

#[test]
fn test_dhondt_worked_example() {
    // Classic 7-seat example: quotients in descending order give A three
    // seats, B three, C one, and nothing for D or E.
    let vots = tally(&[
        ("A", 340_000),
        ("B", 280_000),
        ("C", 160_000),
        ("D", 60_000),
        ("E", 15_000),
    ]);

    let escons = dhondt(&vots, 7);

    assert_eq!(escons["A"], 3);
    assert_eq!(escons["B"], 3);
    assert_eq!(escons["C"], 1);
    assert_eq!(escons["D"], 0);
    assert_eq!(escons["E"], 0);
    assert_eq!(total_assigned(&escons), 7);
}

#[test]
fn test_every_party_appears_in_output() {
    let vots = tally(&[("PSC", 1000), ("ERC", 0)]);
    let escons = dhondt(&vots, 3);

    assert_eq!(escons.len(), 2);
    assert_eq!(escons["PSC"], 3);
    assert_eq!(escons["ERC"], 0);
}

#[test]
fn test_quotient_tie_goes_to_larger_tally() {
    // Third quotient: A at 200/2 = 100 ties B at 100/1 = 100. A has the
    // larger total, so A takes the second seat and B the third.
    let vots = tally(&[("A", 200), ("B", 100)]);
    let escons = dhondt(&vots, 3);

    assert_eq!(escons["A"], 2);
    assert_eq!(escons["B"], 1);
}

#[test]
fn test_full_tie_goes_to_smaller_short_code() {
    let vots = tally(&[("ERC", 100), ("CUP", 100)]);
    let escons = dhondt(&vots, 1);

    assert_eq!(escons["CUP"], 1);
    assert_eq!(escons["ERC"], 0);
}

#[test]
fn test_deterministic() {
    let vots = tally(&[("A", 333), ("B", 333), ("C", 333)]);
    let first = dhondt(&vots, 5);
    for _ in 0..10 {
        assert_eq!(dhondt(&vots, 5), first);
    }
    assert_eq!(total_assigned(&first), 5);
}

#[test]
fn test_zero_seats() {
    let vots = tally(&[("A", 1000)]);
    let escons = dhondt(&vots, 0);
    assert_eq!(escons["A"], 0);
}

#[test]
fn test_no_votes_assigns_nothing() {
    let vots = tally(&[("A", 0), ("B", 0)]);
    let escons = dhondt(&vots, 10);
    assert_eq!(total_assigned(&escons), 0);
}

#[test]
fn test_empty_tally() {
    let escons = dhondt(&BTreeMap::new(), 10);
    assert!(escons.is_empty());
}

#[test]
fn test_large_counts_do_not_overflow() {
    let vots = tally(&[("A", i64::MAX / 2), ("B", i64::MAX / 3)]);
    let escons = dhondt(&vots, 11);
    assert_eq!(total_assigned(&escons), 11);
    assert!(escons["A"] > escons["B"]);
}
