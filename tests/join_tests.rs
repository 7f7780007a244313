//! Inner joins, group joins, and grouping through lookups.

use sequery::{AsSequence, FnEq, Sequence};

#[test]
fn join_emits_one_row_per_matching_pair() {
    let outers = Sequence::from_vec(vec![("alice", 1), ("bob", 2), ("carol", 9)]);
    let inners = Sequence::from_vec(vec![(1, "apple"), (2, "banana"), (1, "avocado")]);

    let joined = outers
        .join(
            &inners,
            |o| o.1,
            |i| i.0,
            |o, i| format!("{}:{}", o.0, i.1),
        )
        .expect("join");

    // carol has no match and produces no row; alice drains both matches
    assert_eq!(
        joined.to_vec().expect("drain"),
        vec!["alice:apple", "alice:avocado", "bob:banana"]
    );
}

#[test]
fn join_builds_the_lookup_at_construction() {
    let outers = Sequence::from_vec(vec![1, 2]);
    let inners = Sequence::from_vec(vec![1, 1, 3]);

    let joined = outers
        .join(&inners, |o| *o, |i| *i, |o, i| (*o, *i))
        .expect("join");

    assert_eq!(joined.to_vec().expect("drain"), vec![(1, 1), (1, 1)]);
    // draining again rewinds the outer cursor against the same lookup
    assert_eq!(joined.to_vec().expect("drain"), vec![(1, 1), (1, 1)]);
}

#[test]
fn group_join_keeps_every_outer_element() {
    let outers = Sequence::from_vec(vec![1, 2, 3]);
    let inners = Sequence::from_vec(vec![(1, "a"), (1, "b"), (3, "c")]);

    let grouped = outers
        .group_join(
            &inners,
            |o| *o,
            |i| i.0,
            |o, matches| (*o, matches.count().unwrap_or(0)),
        )
        .expect("group join");

    // left-outer-group: the unmatched outer gets an empty sequence
    assert_eq!(
        grouped.to_vec().expect("drain"),
        vec![(1, 2), (2, 0), (3, 1)]
    );
}

#[test]
fn join_with_degenerate_equality_matches_everything() {
    let outers = Sequence::from_vec(vec!["x"]);
    let inners = Sequence::from_vec(vec![10, 20]);

    let joined = outers
        .join_with(
            &inners,
            |_| 0i32,
            |_| 1i32,
            |o, i| format!("{}{}", o, i),
            FnEq::new(|_: &i32| 42),
        )
        .expect("join");

    // every key hashes alike, so the single outer drains both inners
    assert_eq!(joined.to_vec().expect("drain"), vec!["x10", "x20"]);
}

#[test]
fn group_by_returns_groupings_in_first_seen_order() {
    let words = Sequence::from_vec(vec!["apple", "avocado", "banana", "cherry"]);
    let by_initial = words.group_by(|w| w.as_bytes()[0]).expect("group");

    let groups = by_initial.sequence().to_vec().expect("drain");
    assert_eq!(groups.len(), 3);

    assert_eq!(*groups[0].key(), b'a');
    assert_eq!(groups[0].values(), ["apple", "avocado"]);
    assert_eq!(*groups[1].key(), b'b');
    assert_eq!(groups[2].values(), ["cherry"]);
}

#[test]
fn to_lookup_select_projects_the_stored_elements() {
    let words = Sequence::from_vec(vec!["one", "two", "three"]);
    let lengths = words
        .to_lookup_select(|w| w.len(), |w| w.to_uppercase())
        .expect("lookup");

    assert_eq!(
        lengths.get(&3).to_vec().expect("drain"),
        vec!["ONE".to_string(), "TWO".to_string()]
    );
}

#[test]
fn grouping_is_itself_a_sequence() {
    let numbers = Sequence::from_vec(vec![1, 2, 3, 4, 5, 6]);
    let by_parity = numbers.group_by(|n| n % 2).expect("group");

    let groups = by_parity.sequence().to_vec().expect("drain");
    let odds = groups[0].sequence();

    assert_eq!(odds.to_vec().expect("drain"), vec![1, 3, 5]);
    assert_eq!(odds.select(|n| n * 10).to_vec().expect("drain"), vec![10, 30, 50]);
}
