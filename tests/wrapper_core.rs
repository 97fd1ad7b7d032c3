//! Construction forms, the canonical accessor, and value semantics.

use core::mem::MaybeUninit;

use nominal::{caps, Bicrementable, Boolean, Equality, Nominal, PointerLike, Regular};

struct BudgetTag;
type Budget = Nominal<u64, BudgetTag, caps![Regular]>;

struct BytesTag;
type Bytes = Nominal<Vec<u8>, BytesTag, caps![Equality]>;

// =============================================================================
// Construction and accessor round-trip
// =============================================================================

#[test]
fn new_then_accessor_round_trips() {
    let b = Budget::new(250);
    assert_eq!(*b.value(), 250);
    assert_eq!(b.into_value(), 250);
}

#[test]
fn from_representation() {
    let b = Budget::from(99);
    assert_eq!(*b.value(), 99);
}

#[test]
fn collecting_forwards_to_the_representation() {
    let bytes: Bytes = [1u8, 2, 3].into_iter().collect();
    assert_eq!(bytes, Bytes::new(vec![1, 2, 3]));
}

#[test]
fn default_requires_the_capability_and_forwards() {
    // Regular = semiregular + equality, so both lines below compose.
    let b = Budget::default();
    assert_eq!(b, Budget::new(0));
}

#[test]
fn uninitialized_state_is_tracked_in_the_type() {
    let mut slot = Nominal::<MaybeUninit<u64>, BudgetTag>::uninit();
    slot.write(77);
    let b: Nominal<u64, BudgetTag> = unsafe { slot.assume_init() };
    assert_eq!(*b.value(), 77);
}

// =============================================================================
// Mutation through the accessor
// =============================================================================

#[test]
fn value_mut_updates_in_place() {
    let mut b = Budget::new(10);
    *b.value_mut() += 5;
    assert_eq!(*b.value(), 15);
}

#[test]
fn swap_and_replace_exchange_values() {
    let mut a = Budget::new(1);
    let mut b = Budget::new(2);
    a.swap(&mut b);
    assert_eq!((*a.value(), *b.value()), (2, 1));

    let old = a.replace(9);
    assert_eq!(old, 2);
    assert_eq!(*a.value(), 9);
}

#[test]
fn clone_and_debug_follow_the_representation() {
    let bytes = Bytes::new(vec![7]);
    let copy = bytes.clone();
    assert_eq!(bytes, copy);
    assert_eq!(format!("{bytes:?}"), "[7]");
}

// =============================================================================
// Stepping
// =============================================================================

struct CounterTag;
type Counter = Nominal<u32, CounterTag, caps![Bicrementable, Equality]>;

#[test]
fn postfix_returns_prior_prefix_returns_stepped() {
    let mut c = Counter::new(5);

    let prior = c.post_increment();
    assert_eq!(prior, Counter::new(5));
    assert_eq!(c, Counter::new(6));

    assert_eq!(*c.increment().value(), 7);
    assert_eq!(c, Counter::new(7));
}

#[test]
fn decrement_mirrors_increment() {
    let mut c = Counter::new(3);

    let prior = c.post_decrement();
    assert_eq!(prior, Counter::new(3));
    assert_eq!(c, Counter::new(2));

    c.decrement();
    assert_eq!(c, Counter::new(1));
}

// =============================================================================
// Boolean conversion and pointer probing
// =============================================================================

struct FlagTag;
type Flag = Nominal<i32, FlagTag, caps![Boolean]>;

struct HandleTag;
type Handle = Nominal<Option<u32>, HandleTag, caps![Boolean, PointerLike]>;

#[test]
fn as_bool_is_explicit_and_contextual() {
    assert!(Flag::new(-3).as_bool());
    assert!(!Flag::new(0).as_bool());
}

#[test]
fn null_probing_forwards_to_the_sentinel() {
    assert!(Handle::new(None).is_null());
    assert!(!Handle::new(Some(4)).is_null());
    assert!(Handle::new(Some(4)).as_bool());
}
