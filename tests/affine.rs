//! Affine points, declared differences, and the coinciding-difference family.

use nominal::{caps, Affine, Difference, Equality, Nominal};

struct TimestampTag;
struct TicksTag;

/// Displacement between timestamps; point and difference coincide here, so
/// the whole symmetric family applies.
type Ticks = Nominal<i64, TicksTag, caps![Difference]>;

/// A point in time. Subtracting two yields `Ticks`.
type Timestamp = Nominal<i64, TimestampTag, caps![Affine<Ticks>, Equality]>;

// =============================================================================
// Affine points
// =============================================================================

#[test]
fn point_minus_point_yields_the_declared_difference() {
    let t1 = Timestamp::new(1_000);
    let t2 = Timestamp::new(400);

    let delta: Ticks = t1 - t2;
    assert_eq!(delta, Ticks::new(600));
}

#[test]
fn point_plus_difference_moves_the_point() {
    let t = Timestamp::new(400);
    assert_eq!(t + Ticks::new(600), Timestamp::new(1_000));
}

#[test]
fn translating_back_recovers_the_point() {
    let t1 = Timestamp::new(9_000);
    let t2 = Timestamp::new(4_500);

    // p2 + (p1 - p2) == p1
    assert_eq!(t2 + (t1 - t2), t1);
}

#[test]
fn compound_translation_mutates_the_point() {
    let mut t = Timestamp::new(100);
    t += Ticks::new(50);
    assert_eq!(t, Timestamp::new(150));
    t -= Ticks::new(150);
    assert_eq!(t, Timestamp::new(0));
}

#[test]
fn plain_valued_differences_lower_too() {
    struct OffsetTag;
    // The difference type need not be a wrapper.
    type Offset = Nominal<i64, OffsetTag, caps![Affine<i64>]>;

    let a = Offset::new(10);
    let b = Offset::new(4);
    assert_eq!(a - b, 6);
    assert_eq!(*(b + 6i64).value(), 10);
}

// =============================================================================
// Coinciding point/difference family
// =============================================================================

#[test]
fn differences_add_and_subtract_symmetrically() {
    let a = Ticks::new(30);
    let b = Ticks::new(12);

    assert_eq!(a + b, Ticks::new(42));
    assert_eq!(a - b, Ticks::new(18));

    let mut c = a;
    c += b;
    c -= b;
    assert_eq!(c, a);
}

#[test]
fn differences_are_ordered() {
    assert!(Ticks::new(1) < Ticks::new(2));
    assert!(Ticks::new(5) >= Ticks::new(5));
}

#[test]
fn scaling_uses_the_bare_representation() {
    let t = Ticks::new(15);

    assert_eq!(t * 4i64, Ticks::new(60));
    assert_eq!(t / 3i64, Ticks::new(5));

    let mut u = t;
    u *= 2i64;
    u /= 5i64;
    assert_eq!(u, Ticks::new(6));
}

#[test]
fn same_type_division_yields_the_bare_quotient() {
    let a = Ticks::new(90);
    let b = Ticks::new(30);

    let ratio: i64 = a / b;
    assert_eq!(ratio, 3);
}
