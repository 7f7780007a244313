//! Ordering, tie-breaking, and the mutable comparer cell.

use std::cmp::Ordering;

use sequery::{AsSequence, FnComparer, Sequence};

#[test]
fn order_by_sorts_ascending_under_the_key() {
    let source = Sequence::from_vec(vec![3, 1, 2]);
    assert_eq!(source.order_by(|e| *e).to_vec().expect("drain"), vec![1, 2, 3]);
}

#[test]
fn order_uses_natural_order() {
    let source = Sequence::from_vec(vec!["pear", "apple", "plum"]);
    assert_eq!(
        source.order().to_vec().expect("drain"),
        vec!["apple", "pear", "plum"]
    );
}

#[test]
fn order_descending_reverses_the_comparer() {
    let source = Sequence::from_vec(vec![2, 3, 1]);
    assert_eq!(source.order_descending().to_vec().expect("drain"), vec![3, 2, 1]);
}

#[test]
fn order_by_descending_by_key() {
    let source = Sequence::from_vec(vec!["xx", "z", "yyy"]);
    assert_eq!(
        source.order_by_descending(|e| e.len()).to_vec().expect("drain"),
        vec!["yyy", "xx", "z"]
    );
}

#[test]
fn then_by_breaks_primary_ties() {
    let people = Sequence::from_vec(vec![("smith", 30), ("jones", 30), ("smith", 25)]);
    let ordered = people.order_by(|p| p.1).then_by(|p| p.0);

    assert_eq!(
        ordered.to_vec().expect("drain"),
        vec![("smith", 25), ("jones", 30), ("smith", 30)]
    );
}

#[test]
fn then_by_leaves_decided_pairs_alone() {
    let pairs = Sequence::from_vec(vec![(2, 1), (1, 9), (1, 1)]);
    let ordered = pairs.order_by(|p| p.0).then_by(|p| p.1);

    assert_eq!(
        ordered.to_vec().expect("drain"),
        vec![(1, 1), (1, 9), (2, 1)]
    );
}

#[test]
fn equal_keys_come_out_in_materialization_order() {
    let items = Sequence::from_vec(vec![("b", 1), ("a", 1), ("c", 1)]);
    let ordered = items.order_by(|p| p.1);

    // observed behavior of the repeated-minimum scan: the first minimal
    // element wins a tie
    assert_eq!(
        ordered.to_vec().expect("drain"),
        vec![("b", 1), ("a", 1), ("c", 1)]
    );
}

#[test]
fn custom_comparer_drives_the_order() {
    let source = Sequence::from_vec(vec![1, -3, 2]);
    let by_magnitude = FnComparer::new(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
    let ordered = source.order_by_with(|e| *e, by_magnitude);

    assert_eq!(ordered.to_vec().expect("drain"), vec![1, 2, -3]);
}

#[test]
fn then_by_with_custom_secondary() {
    let pairs = Sequence::from_vec(vec![(1, 2), (1, 9), (0, 5)]);
    let descending_second = FnComparer::new(|a: &i32, b: &i32| b.cmp(a));
    let ordered = pairs.order_by(|p| p.0).then_by_with(|p| p.1, descending_second);

    assert_eq!(
        ordered.to_vec().expect("drain"),
        vec![(0, 5), (1, 9), (1, 2)]
    );
}

#[test]
fn ordered_sequences_expose_the_full_vocabulary() {
    let source = Sequence::from_vec(vec![4, 1, 3, 2]);
    let smallest_two = source.order_by(|e| *e).take(2);

    assert_eq!(smallest_two.to_vec().expect("drain"), vec![1, 2]);
}

#[test]
fn reordering_is_repeatable_after_reset() {
    let source = Sequence::from_vec(vec![2, 1, 3]);
    let ordered = source.order_by(|e| *e);

    assert_eq!(ordered.to_vec().expect("drain"), vec![1, 2, 3]);
    // each terminal drain re-materializes the working buffer
    assert_eq!(ordered.to_vec().expect("drain"), vec![1, 2, 3]);
}

#[test]
fn then_by_affects_an_already_built_sequence() {
    let pairs = Sequence::from_vec(vec![(1, 2), (1, 1)]);
    let ordered = pairs.order_by(|p| p.0);
    let as_sequence = ordered.sequence();

    // chaining the tie-break mutates the shared comparer cell, so the
    // handle taken earlier observes it too
    ordered.then_by(|p| p.1);
    assert_eq!(
        as_sequence.to_vec().expect("drain"),
        vec![(1, 1), (1, 2)]
    );
}

#[test]
fn comparer_equal_everywhere_preserves_order() {
    let source = Sequence::from_vec(vec![3, 1, 2]);
    let indifferent = FnComparer::new(|_: &i32, _: &i32| Ordering::Equal);
    let ordered = source.order_by_with(|e| *e, indifferent);

    assert_eq!(ordered.to_vec().expect("drain"), vec![3, 1, 2]);
}
