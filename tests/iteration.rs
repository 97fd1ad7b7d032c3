//! Range adaptation, tag-preserving iterators, and tier behavior.

use nominal::{caps, Composed, ForwardIterator, Nominal, RandomAccessIterator, Ranged};

struct WaypointsTag;
type Waypoints = Nominal<Vec<i32>, WaypointsTag, caps![Ranged]>;

fn same_tag<A, B>(_: &A, _: &B)
where
    A: Composed,
    B: Composed<Tag = A::Tag>,
{
}

// =============================================================================
// Range adaptation
// =============================================================================

#[test]
fn iter_walks_the_underlying_sequence() {
    let w = Waypoints::new(vec![1, 2, 3, 4]);
    let total: i32 = w.iter().copied().sum();
    assert_eq!(total, 10);
}

#[test]
fn borrowed_for_loops_work() {
    let w = Waypoints::new(vec![5, 6]);
    let mut seen = Vec::new();
    for x in &w {
        seen.push(*x);
    }
    assert_eq!(seen, vec![5, 6]);
}

#[test]
fn iter_mut_mutates_through_the_range() {
    let mut w = Waypoints::new(vec![1, 2, 3]);
    for x in w.iter_mut() {
        *x *= 10;
    }
    assert_eq!(*w.value(), vec![10, 20, 30]);
}

#[test]
fn range_iterators_carry_the_parent_tag() {
    let w = Waypoints::new(vec![1]);
    let it = w.iter();
    same_tag(&w, &it);
}

#[test]
fn range_iterators_expose_what_the_source_supports() {
    let w = Waypoints::new(vec![1, 2, 3]);

    // Slice iterators are double-ended and exactly sized, so the produced
    // wrapper is too.
    let backwards: Vec<i32> = w.iter().rev().copied().collect();
    assert_eq!(backwards, vec![3, 2, 1]);
    assert_eq!(w.iter().len(), 3);
}

// =============================================================================
// Declared iterator tiers
// =============================================================================

struct CharStreamTag;
type CharStream<'a> = Nominal<std::str::Chars<'a>, CharStreamTag, caps![ForwardIterator]>;

struct CursorTag;
type Cursor<'a> = Nominal<std::slice::Iter<'a, u8>, CursorTag, caps![RandomAccessIterator]>;

#[test]
fn forward_tier_iterates() {
    let mut stream = CharStream::new("ab".chars());
    assert_eq!(stream.next(), Some('a'));
    assert_eq!(stream.next(), Some('b'));
    assert_eq!(stream.next(), None);
}

#[test]
fn random_access_tier_grants_the_lower_tiers_too() {
    let bytes = [1u8, 2, 3];
    let mut cursor = Cursor::new(bytes.iter());

    assert_eq!(cursor.len(), 3);
    assert_eq!(cursor.next(), Some(&1));
    assert_eq!(cursor.next_back(), Some(&3));
    assert_eq!(cursor.len(), 1);
}

#[test]
fn iterator_adapters_compose() {
    let bytes = [10u8, 20, 30];
    let cursor = Cursor::new(bytes.iter());
    let doubled: Vec<u16> = cursor.map(|b| u16::from(*b) * 2).collect();
    assert_eq!(doubled, vec![20, 40, 60]);
}
