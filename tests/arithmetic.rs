//! Whole-value arithmetic and bit arithmetic.

use nominal::{caps, Arithmetic, Bitwise, Equality, Nominal, Numeric, Ordered};

struct MetersTag;
type Meters = Nominal<i64, MetersTag, caps![Arithmetic, Equality, Ordered]>;

struct MaskTag;
type Mask = Nominal<u8, MaskTag, caps![Bitwise, Equality]>;

// =============================================================================
// Whole-value arithmetic
// =============================================================================

#[test]
fn binary_ops_take_same_typed_operands() {
    let a = Meters::new(30);
    let b = Meters::new(12);

    assert_eq!(a + b, Meters::new(42));
    assert_eq!(a - b, Meters::new(18));
    assert_eq!(a * b, Meters::new(360));
    assert_eq!(a / b, Meters::new(2));
    assert_eq!(-a, Meters::new(-30));
}

#[test]
fn binary_form_equals_copy_then_compound() {
    let a = Meters::new(7);
    let b = Meters::new(5);

    let mut copy = a;
    copy += b;
    assert_eq!(a + b, copy);
}

#[test]
fn compound_assignment_mutates_in_place() {
    let mut m = Meters::new(10);
    m += Meters::new(4);
    m -= Meters::new(2);
    m *= Meters::new(3);
    m /= Meters::new(6);
    assert_eq!(m, Meters::new(6));
}

#[test]
fn add_then_subtract_restores() {
    let original = Meters::new(123);
    let delta = Meters::new(77);

    let mut m = original;
    m += delta;
    m -= delta;
    assert_eq!(m, original);
}

#[test]
fn classified_as_numeric() {
    fn assert_numeric<T: Numeric>() {}
    assert_numeric::<Meters>();
    assert_numeric::<i64>();
}

// =============================================================================
// Bit arithmetic
// =============================================================================

#[test]
fn bitwise_ops_forward() {
    let a = Mask::new(0b1100);
    let b = Mask::new(0b1010);

    assert_eq!(a & b, Mask::new(0b1000));
    assert_eq!(a | b, Mask::new(0b1110));
    assert_eq!(a ^ b, Mask::new(0b0110));
    assert_eq!(!Mask::new(0b1111_0000), Mask::new(0b0000_1111));
}

#[test]
fn bitwise_compound_assignment() {
    let mut m = Mask::new(0b0001);
    m |= Mask::new(0b0100);
    m ^= Mask::new(0b0101);
    m &= Mask::new(0b1111);
    assert_eq!(m, Mask::new(0b0000));
}

#[test]
fn shift_amounts_stay_plain_integers() {
    let m = Mask::new(0b0000_0110);

    // usize and i32 both forward untouched.
    assert_eq!(m << 2usize, Mask::new(0b0001_1000));
    assert_eq!(m >> 1i32, Mask::new(0b0000_0011));

    let mut n = m;
    n <<= 4usize;
    assert_eq!(n, Mask::new(0b0110_0000));
}
