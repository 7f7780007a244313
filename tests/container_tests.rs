//! Lookup and Dictionary: insertion order, sentinels, and failure modes.

use sequery::{AsSequence, Dictionary, EngineConfig, Error, FnEq, HashEq, Lookup, Sequence};

#[test]
fn lookup_buckets_values_under_one_key() {
    let mut lookup: Lookup<&str, i32> = Lookup::new(HashEq);
    lookup.add("a", 1);
    lookup.add("a", 2);
    lookup.add("b", 3);

    assert_eq!(lookup.len(), 2);
    assert_eq!(lookup.get(&"a").to_vec().expect("drain"), vec![1, 2]);
    assert_eq!(lookup.get(&"b").to_vec().expect("drain"), vec![3]);
}

#[test]
fn lookup_get_on_absent_key_is_an_empty_sequence() {
    let lookup: Lookup<&str, i32> = Lookup::new(HashEq);

    // never an error, never a missing value: just zero elements
    assert_eq!(lookup.get(&"nope").count().expect("drain"), 0);
}

#[test]
fn lookup_keys_keep_first_seen_order() {
    let mut lookup: Lookup<&str, i32> = Lookup::new(HashEq);
    lookup.add("z", 1);
    lookup.add("a", 2);
    lookup.add("z", 3);

    assert_eq!(lookup.keys().to_vec().expect("drain"), vec!["z", "a"]);
}

#[test]
fn lookup_remove_drops_the_bucket() {
    let mut lookup: Lookup<&str, i32> = Lookup::new(HashEq);
    lookup.add("a", 1);

    assert!(lookup.remove(&"a"));
    assert!(!lookup.remove(&"a"));
    assert!(lookup.is_empty());
    assert_eq!(lookup.get(&"a").count().expect("drain"), 0);
}

#[test]
fn lookup_iterates_groupings_in_key_order() {
    let mut lookup: Lookup<&str, i32> = Lookup::new(HashEq);
    lookup.add("x", 1);
    lookup.add("y", 2);
    lookup.add("x", 3);

    let groups = lookup.sequence().to_vec().expect("drain");
    assert_eq!(groups.len(), 2);
    assert_eq!(*groups[0].key(), "x");
    assert_eq!(groups[0].values(), [1, 3]);
    assert_eq!(*groups[1].key(), "y");
}

#[test]
fn lookup_get_is_a_snapshot() {
    let mut lookup: Lookup<&str, i32> = Lookup::new(HashEq);
    lookup.add("a", 1);

    let before = lookup.get(&"a");
    lookup.add("a", 2);

    assert_eq!(before.to_vec().expect("drain"), vec![1]);
    assert_eq!(lookup.get(&"a").to_vec().expect("drain"), vec![1, 2]);
}

#[test]
fn colliding_keys_merge_into_one_bucket() {
    let mut lookup: Lookup<&str, i32> = Lookup::new(FnEq::new(|_: &&str| 1));
    lookup.add("first", 1);
    lookup.add("second", 2);

    // hash equality: both keys are the same key, first-seen wins
    assert_eq!(lookup.len(), 1);
    assert_eq!(lookup.keys().to_vec().expect("drain"), vec!["first"]);
    assert_eq!(lookup.get(&"anything").to_vec().expect("drain"), vec![1, 2]);
}

#[test]
fn dictionary_maps_one_value_per_key() {
    let mut dictionary: Dictionary<&str, i32> = Dictionary::new(HashEq);
    dictionary.add("a", 1).expect("fresh key");
    dictionary.add("b", 2).expect("fresh key");

    assert_eq!(dictionary.get(&"a"), Some(1));
    assert_eq!(dictionary.get(&"b"), Some(2));
    assert_eq!(dictionary.len(), 2);
}

#[test]
fn dictionary_add_fails_on_a_duplicate_key() {
    let mut dictionary: Dictionary<&str, i32> = Dictionary::new(HashEq);
    dictionary.add("a", 1).expect("fresh key");

    let err = dictionary.add("a", 2).expect_err("duplicate");
    assert!(matches!(err, Error::DuplicateKey(_)));

    // the original value is untouched
    assert_eq!(dictionary.get(&"a"), Some(1));
}

#[test]
fn dictionary_get_on_absent_key_is_none() {
    let dictionary: Dictionary<&str, i32> = Dictionary::new(HashEq);
    assert_eq!(dictionary.get(&"missing"), None);
}

#[test]
fn dictionary_iterates_pairs_in_insertion_order() {
    let mut dictionary: Dictionary<&str, i32> = Dictionary::new(HashEq);
    dictionary.add("z", 26).expect("fresh key");
    dictionary.add("a", 1).expect("fresh key");

    assert_eq!(
        dictionary.sequence().to_vec().expect("drain"),
        vec![("z", 26), ("a", 1)]
    );
}

#[test]
fn dictionary_remove_frees_the_key() {
    let mut dictionary: Dictionary<&str, i32> = Dictionary::new(HashEq);
    dictionary.add("a", 1).expect("fresh key");

    assert!(dictionary.remove(&"a"));
    assert!(!dictionary.remove(&"a"));
    assert_eq!(dictionary.get(&"a"), None);

    // the hash is free again
    dictionary.add("a", 2).expect("fresh key");
    assert_eq!(dictionary.get(&"a"), Some(2));
}

#[test]
fn containers_accept_an_explicit_config() {
    let config = EngineConfig {
        bucket_capacity: 4,
    };

    let mut lookup: Lookup<i32, i32> = Lookup::with_config(&config, HashEq);
    let mut dictionary: Dictionary<i32, i32> = Dictionary::with_config(&config, HashEq);

    lookup.add(1, 10);
    dictionary.add(1, 10).expect("fresh key");

    assert_eq!(lookup.len(), 1);
    assert_eq!(dictionary.len(), 1);
}

#[test]
fn containers_compose_with_sequence_operators() {
    let mut lookup: Lookup<&str, i32> = Lookup::new(HashEq);
    lookup.add("a", 1);
    lookup.add("b", 2);
    lookup.add("b", 3);

    let sizes = lookup
        .sequence()
        .select(|group| group.values().len())
        .to_vec()
        .expect("drain");
    assert_eq!(sizes, vec![1, 2]);

    let mut dictionary: Dictionary<&str, i32> = Dictionary::new(HashEq);
    dictionary.add("a", 1).expect("fresh key");
    dictionary.add("b", 2).expect("fresh key");

    let keys: Vec<&str> = dictionary
        .sequence()
        .filter(|(_, v)| *v > 1)
        .select(|(k, _)| *k)
        .to_vec()
        .expect("drain");
    assert_eq!(keys, vec!["b"]);
}

#[test]
fn engine_config_defaults_are_sane() {
    let config = EngineConfig::default();
    assert!(config.bucket_capacity > 0);

    let from_env = EngineConfig::from_env();
    assert!(from_env.bucket_capacity > 0);
}

#[test]
fn to_dictionary_surfaces_duplicate_keys() {
    let source = Sequence::from_vec(vec!["ab", "cd", "ef"]);
    let err = source.to_dictionary(|w| w.len()).expect_err("all keys collide");
    assert!(matches!(err, Error::DuplicateKey(_)));

    let ok = Sequence::from_vec(vec!["a", "bb", "ccc"])
        .to_dictionary(|w| w.len())
        .expect("distinct keys");
    assert_eq!(ok.get(&2), Some("bb"));
}
