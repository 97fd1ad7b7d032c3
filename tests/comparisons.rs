//! Equality, ordering, hashing, and text forwarding laws.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use nominal::{caps, Equality, Hashable, Nominal, Ordered, Textual};

struct ScoreTag;
type Score = Nominal<u32, ScoreTag, caps![Equality, Ordered, Hashable]>;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn equality_forwards_and_is_an_equivalence() {
    let a = Score::new(10);
    let b = Score::new(10);
    let c = Score::new(11);

    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_ne!(a, c);
}

#[test]
fn ordering_forwards() {
    let lo = Score::new(1);
    let hi = Score::new(2);

    assert!(lo < hi);
    assert!(lo <= hi);
    assert!(hi > lo);
    assert!(hi >= lo);
    assert_eq!(lo.max(hi), hi);
}

#[test]
fn partial_ordering_without_total_order() {
    struct RatioTag;
    type Ratio = Nominal<f64, RatioTag, caps![Equality, Ordered]>;

    // f64 is only partially ordered; the wrapper inherits exactly that.
    assert!(Ratio::new(1.0) < Ratio::new(2.0));
    assert_eq!(
        Ratio::new(f64::NAN).partial_cmp(&Ratio::new(0.0)),
        None
    );
}

#[test]
fn equal_values_hash_alike() {
    let a = Score::new(42);
    let b = Score::new(42);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn usable_as_a_map_key() {
    let mut standings: HashMap<Score, &str> = HashMap::new();
    standings.insert(Score::new(100), "first");
    standings.insert(Score::new(90), "second");

    assert_eq!(standings.get(&Score::new(100)), Some(&"first"));
    assert_eq!(standings.get(&Score::new(80)), None);
}

// =============================================================================
// Text in and out
// =============================================================================

struct PortTag;
type Port = Nominal<u16, PortTag, caps![Textual, Equality]>;

#[test]
fn display_forwards() {
    assert_eq!(format!("{}", Port::new(8080)), "8080");
}

#[test]
fn parsing_forwards_and_errors_pass_through() {
    let port: Port = "8080".parse().unwrap();
    assert_eq!(port, Port::new(8080));

    // The error is the representation's own.
    let bad = "eighty".parse::<Port>();
    assert_eq!(bad, Err("eighty".parse::<u16>().unwrap_err()));
}
