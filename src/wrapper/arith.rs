//! Arithmetic, bit-arithmetic, and the affine-point/difference families.
//!
//! Several capabilities claim the same operator (whole-value `Arithmetic`,
//! point-style `Affine<D>`, `Difference`), and coherence allows only one
//! blanket impl per operator trait. Each operator therefore has a single
//! blanket impl that dispatches through a *kind* trait keyed on the pair of
//! `Supports` evaluations for the two claimants: `(Yes, No)` and `(No, Yes)`
//! are disjoint selector types, so the kinds never overlap, and `(Yes, Yes)`
//! has no impl at all: requesting both families is rejected at composition
//! time at the operator's use site.
//!
//! Binary forms are defined as move-then-compound-assign, so
//! `a + b == { let mut c = a; c += b; c }` holds by construction.

use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use crate::caps::{AffineFamily, AffineScheme, Arithmetic, BitwiseGate, Difference, SumGate};
use crate::primitives::truth::{No, Yes};
use crate::repr::Lower;
use crate::set::Supports;

use super::Nominal;

// Selector shorthands: the evaluated claims of the competing families.
type AffineBit<Caps> = <Caps as Supports<AffineFamily>>::Out;
type SumBit<Caps> = <Caps as Supports<SumGate>>::Out;
type ArithBit<Caps> = <Caps as Supports<Arithmetic>>::Out;
type DiffBit<Caps> = <Caps as Supports<Difference>>::Out;

// =============================================================================
// Negation (whole-value arithmetic only)
// =============================================================================

impl<R, Tag, Caps> Neg for Nominal<R, Tag, Caps>
where
    R: Neg<Output = R>,
    Caps: Supports<Arithmetic, Out = Yes>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Nominal::new(-self.into_value())
    }
}

// =============================================================================
// Addition
// =============================================================================

/// Resolution of `+` for a wrapper, keyed on `(affine?, whole-sum?)`.
#[diagnostic::on_unimplemented(
    message = "no addition is composed for this wrapper type",
    note = "addition needs `Arithmetic` or `Difference` (whole-value, wrapper + wrapper) \
            or `Affine<D>` (point + difference) in the capability list, and the two \
            families must not both be present"
)]
pub trait AddKind<R, Tag, Caps, Rhs> {
    type Output;
    fn add(lhs: Nominal<R, Tag, Caps>, rhs: Rhs) -> Self::Output;
}

/// Resolution of `+=`, keyed like [`AddKind`].
pub trait AddAssignKind<R, Tag, Caps, Rhs> {
    fn add_assign(lhs: &mut Nominal<R, Tag, Caps>, rhs: Rhs);
}

impl<R, Tag, Caps, Rhs> Add<Rhs> for Nominal<R, Tag, Caps>
where
    Caps: Supports<AffineFamily> + Supports<SumGate>,
    (AffineBit<Caps>, SumBit<Caps>): AddKind<R, Tag, Caps, Rhs>,
{
    type Output = <(AffineBit<Caps>, SumBit<Caps>) as AddKind<R, Tag, Caps, Rhs>>::Output;

    #[inline]
    fn add(self, rhs: Rhs) -> Self::Output {
        <(AffineBit<Caps>, SumBit<Caps>) as AddKind<R, Tag, Caps, Rhs>>::add(self, rhs)
    }
}

impl<R, Tag, Caps, Rhs> AddAssign<Rhs> for Nominal<R, Tag, Caps>
where
    Caps: Supports<AffineFamily> + Supports<SumGate>,
    (AffineBit<Caps>, SumBit<Caps>): AddAssignKind<R, Tag, Caps, Rhs>,
{
    #[inline]
    fn add_assign(&mut self, rhs: Rhs) {
        <(AffineBit<Caps>, SumBit<Caps>) as AddAssignKind<R, Tag, Caps, Rhs>>::add_assign(
            self, rhs,
        );
    }
}

// Whole-value: wrapper + wrapper of the same type, never mixed with the bare
// representation.
impl<R, Tag, Caps> AddKind<R, Tag, Caps, Nominal<R, Tag, Caps>> for (No, Yes)
where
    R: AddAssign,
{
    type Output = Nominal<R, Tag, Caps>;

    #[inline]
    fn add(mut lhs: Nominal<R, Tag, Caps>, rhs: Nominal<R, Tag, Caps>) -> Self::Output {
        *lhs.value_mut() += rhs.into_value();
        lhs
    }
}

impl<R, Tag, Caps> AddAssignKind<R, Tag, Caps, Nominal<R, Tag, Caps>> for (No, Yes)
where
    R: AddAssign,
{
    #[inline]
    fn add_assign(lhs: &mut Nominal<R, Tag, Caps>, rhs: Nominal<R, Tag, Caps>) {
        *lhs.value_mut() += rhs.into_value();
    }
}

// Affine: point + difference moves the point. The difference operand is
// lowered first, so it may be a wrapper or a bare value.
impl<R, Tag, Caps, Rhs> AddKind<R, Tag, Caps, Rhs> for (Yes, No)
where
    Caps: AffineScheme<Diff = Rhs>,
    Rhs: Lower,
    R: AddAssign<Rhs::Raw>,
{
    type Output = Nominal<R, Tag, Caps>;

    #[inline]
    fn add(mut lhs: Nominal<R, Tag, Caps>, rhs: Rhs) -> Self::Output {
        *lhs.value_mut() += rhs.lower();
        lhs
    }
}

impl<R, Tag, Caps, Rhs> AddAssignKind<R, Tag, Caps, Rhs> for (Yes, No)
where
    Caps: AffineScheme<Diff = Rhs>,
    Rhs: Lower,
    R: AddAssign<Rhs::Raw>,
{
    #[inline]
    fn add_assign(lhs: &mut Nominal<R, Tag, Caps>, rhs: Rhs) {
        *lhs.value_mut() += rhs.lower();
    }
}

// =============================================================================
// Subtraction
// =============================================================================

/// Resolution of `-`, keyed on `(affine?, whole-sum?)`.
#[diagnostic::on_unimplemented(
    message = "no subtraction is composed for this wrapper type",
    note = "subtraction needs `Arithmetic` or `Difference` (wrapper - wrapper) or \
            `Affine<D>` (point - point yielding `D`) in the capability list, and the \
            two families must not both be present"
)]
pub trait SubKind<R, Tag, Caps, Rhs> {
    type Output;
    fn sub(lhs: Nominal<R, Tag, Caps>, rhs: Rhs) -> Self::Output;
}

/// Resolution of `-=`, keyed like [`SubKind`].
pub trait SubAssignKind<R, Tag, Caps, Rhs> {
    fn sub_assign(lhs: &mut Nominal<R, Tag, Caps>, rhs: Rhs);
}

impl<R, Tag, Caps, Rhs> Sub<Rhs> for Nominal<R, Tag, Caps>
where
    Caps: Supports<AffineFamily> + Supports<SumGate>,
    (AffineBit<Caps>, SumBit<Caps>): SubKind<R, Tag, Caps, Rhs>,
{
    type Output = <(AffineBit<Caps>, SumBit<Caps>) as SubKind<R, Tag, Caps, Rhs>>::Output;

    #[inline]
    fn sub(self, rhs: Rhs) -> Self::Output {
        <(AffineBit<Caps>, SumBit<Caps>) as SubKind<R, Tag, Caps, Rhs>>::sub(self, rhs)
    }
}

impl<R, Tag, Caps, Rhs> SubAssign<Rhs> for Nominal<R, Tag, Caps>
where
    Caps: Supports<AffineFamily> + Supports<SumGate>,
    (AffineBit<Caps>, SumBit<Caps>): SubAssignKind<R, Tag, Caps, Rhs>,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Rhs) {
        <(AffineBit<Caps>, SumBit<Caps>) as SubAssignKind<R, Tag, Caps, Rhs>>::sub_assign(
            self, rhs,
        );
    }
}

impl<R, Tag, Caps> SubKind<R, Tag, Caps, Nominal<R, Tag, Caps>> for (No, Yes)
where
    R: SubAssign,
{
    type Output = Nominal<R, Tag, Caps>;

    #[inline]
    fn sub(mut lhs: Nominal<R, Tag, Caps>, rhs: Nominal<R, Tag, Caps>) -> Self::Output {
        *lhs.value_mut() -= rhs.into_value();
        lhs
    }
}

impl<R, Tag, Caps> SubAssignKind<R, Tag, Caps, Nominal<R, Tag, Caps>> for (No, Yes)
where
    R: SubAssign,
{
    #[inline]
    fn sub_assign(lhs: &mut Nominal<R, Tag, Caps>, rhs: Nominal<R, Tag, Caps>) {
        *lhs.value_mut() -= rhs.into_value();
    }
}

// Affine: point - point yields the declared difference type, constructed
// from the representation-level subtraction result. Contributes nothing
// unless that construction exists.
impl<R, Tag, Caps> SubKind<R, Tag, Caps, Nominal<R, Tag, Caps>> for (Yes, No)
where
    Caps: AffineScheme,
    R: Sub<R>,
    Caps::Diff: From<<R as Sub<R>>::Output>,
{
    type Output = Caps::Diff;

    #[inline]
    fn sub(lhs: Nominal<R, Tag, Caps>, rhs: Nominal<R, Tag, Caps>) -> Self::Output {
        <<Caps as AffineScheme>::Diff as From<<R as Sub<R>>::Output>>::from(
            lhs.into_value() - rhs.into_value(),
        )
    }
}

// Affine: point -= difference. (The binary `point - difference` form is not
// an operator; see DESIGN.md.)
impl<R, Tag, Caps, Rhs> SubAssignKind<R, Tag, Caps, Rhs> for (Yes, No)
where
    Caps: AffineScheme<Diff = Rhs>,
    Rhs: Lower,
    R: SubAssign<Rhs::Raw>,
{
    #[inline]
    fn sub_assign(lhs: &mut Nominal<R, Tag, Caps>, rhs: Rhs) {
        *lhs.value_mut() -= rhs.lower();
    }
}

// =============================================================================
// Multiplication
// =============================================================================

/// Resolution of `*`, keyed on `(whole-arithmetic?, difference?)`.
#[diagnostic::on_unimplemented(
    message = "no multiplication is composed for this wrapper type",
    note = "multiplication needs `Arithmetic` (wrapper * wrapper) or `Difference` \
            (wrapper * bare representation) in the capability list"
)]
pub trait MulKind<R, Tag, Caps, Rhs> {
    type Output;
    fn mul(lhs: Nominal<R, Tag, Caps>, rhs: Rhs) -> Self::Output;
}

/// Resolution of `*=`, keyed like [`MulKind`].
pub trait MulAssignKind<R, Tag, Caps, Rhs> {
    fn mul_assign(lhs: &mut Nominal<R, Tag, Caps>, rhs: Rhs);
}

impl<R, Tag, Caps, Rhs> Mul<Rhs> for Nominal<R, Tag, Caps>
where
    Caps: Supports<Arithmetic> + Supports<Difference>,
    (ArithBit<Caps>, DiffBit<Caps>): MulKind<R, Tag, Caps, Rhs>,
{
    type Output = <(ArithBit<Caps>, DiffBit<Caps>) as MulKind<R, Tag, Caps, Rhs>>::Output;

    #[inline]
    fn mul(self, rhs: Rhs) -> Self::Output {
        <(ArithBit<Caps>, DiffBit<Caps>) as MulKind<R, Tag, Caps, Rhs>>::mul(self, rhs)
    }
}

impl<R, Tag, Caps, Rhs> MulAssign<Rhs> for Nominal<R, Tag, Caps>
where
    Caps: Supports<Arithmetic> + Supports<Difference>,
    (ArithBit<Caps>, DiffBit<Caps>): MulAssignKind<R, Tag, Caps, Rhs>,
{
    #[inline]
    fn mul_assign(&mut self, rhs: Rhs) {
        <(ArithBit<Caps>, DiffBit<Caps>) as MulAssignKind<R, Tag, Caps, Rhs>>::mul_assign(
            self, rhs,
        );
    }
}

impl<R, Tag, Caps> MulKind<R, Tag, Caps, Nominal<R, Tag, Caps>> for (Yes, No)
where
    R: MulAssign,
{
    type Output = Nominal<R, Tag, Caps>;

    #[inline]
    fn mul(mut lhs: Nominal<R, Tag, Caps>, rhs: Nominal<R, Tag, Caps>) -> Self::Output {
        *lhs.value_mut() *= rhs.into_value();
        lhs
    }
}

impl<R, Tag, Caps> MulAssignKind<R, Tag, Caps, Nominal<R, Tag, Caps>> for (Yes, No)
where
    R: MulAssign,
{
    #[inline]
    fn mul_assign(lhs: &mut Nominal<R, Tag, Caps>, rhs: Nominal<R, Tag, Caps>) {
        *lhs.value_mut() *= rhs.into_value();
    }
}

// Difference: scale by the bare representation.
impl<R, Tag, Caps> MulKind<R, Tag, Caps, R> for (No, Yes)
where
    R: MulAssign,
{
    type Output = Nominal<R, Tag, Caps>;

    #[inline]
    fn mul(mut lhs: Nominal<R, Tag, Caps>, rhs: R) -> Self::Output {
        *lhs.value_mut() *= rhs;
        lhs
    }
}

impl<R, Tag, Caps> MulAssignKind<R, Tag, Caps, R> for (No, Yes)
where
    R: MulAssign,
{
    #[inline]
    fn mul_assign(lhs: &mut Nominal<R, Tag, Caps>, rhs: R) {
        *lhs.value_mut() *= rhs;
    }
}

// =============================================================================
// Division
// =============================================================================

/// Resolution of `/`, keyed on `(whole-arithmetic?, difference?)`.
#[diagnostic::on_unimplemented(
    message = "no division is composed for this wrapper type",
    note = "division needs `Arithmetic` (wrapper / wrapper) or `Difference` \
            (wrapper / bare representation, or wrapper / wrapper yielding the \
            representation's quotient) in the capability list"
)]
pub trait DivKind<R, Tag, Caps, Rhs> {
    type Output;
    fn div(lhs: Nominal<R, Tag, Caps>, rhs: Rhs) -> Self::Output;
}

/// Resolution of `/=`, keyed like [`DivKind`].
pub trait DivAssignKind<R, Tag, Caps, Rhs> {
    fn div_assign(lhs: &mut Nominal<R, Tag, Caps>, rhs: Rhs);
}

impl<R, Tag, Caps, Rhs> Div<Rhs> for Nominal<R, Tag, Caps>
where
    Caps: Supports<Arithmetic> + Supports<Difference>,
    (ArithBit<Caps>, DiffBit<Caps>): DivKind<R, Tag, Caps, Rhs>,
{
    type Output = <(ArithBit<Caps>, DiffBit<Caps>) as DivKind<R, Tag, Caps, Rhs>>::Output;

    #[inline]
    fn div(self, rhs: Rhs) -> Self::Output {
        <(ArithBit<Caps>, DiffBit<Caps>) as DivKind<R, Tag, Caps, Rhs>>::div(self, rhs)
    }
}

impl<R, Tag, Caps, Rhs> DivAssign<Rhs> for Nominal<R, Tag, Caps>
where
    Caps: Supports<Arithmetic> + Supports<Difference>,
    (ArithBit<Caps>, DiffBit<Caps>): DivAssignKind<R, Tag, Caps, Rhs>,
{
    #[inline]
    fn div_assign(&mut self, rhs: Rhs) {
        <(ArithBit<Caps>, DiffBit<Caps>) as DivAssignKind<R, Tag, Caps, Rhs>>::div_assign(
            self, rhs,
        );
    }
}

impl<R, Tag, Caps> DivKind<R, Tag, Caps, Nominal<R, Tag, Caps>> for (Yes, No)
where
    R: DivAssign,
{
    type Output = Nominal<R, Tag, Caps>;

    #[inline]
    fn div(mut lhs: Nominal<R, Tag, Caps>, rhs: Nominal<R, Tag, Caps>) -> Self::Output {
        *lhs.value_mut() /= rhs.into_value();
        lhs
    }
}

impl<R, Tag, Caps> DivAssignKind<R, Tag, Caps, Nominal<R, Tag, Caps>> for (Yes, No)
where
    R: DivAssign,
{
    #[inline]
    fn div_assign(lhs: &mut Nominal<R, Tag, Caps>, rhs: Nominal<R, Tag, Caps>) {
        *lhs.value_mut() /= rhs.into_value();
    }
}

// Difference: divide by the bare representation.
impl<R, Tag, Caps> DivKind<R, Tag, Caps, R> for (No, Yes)
where
    R: DivAssign,
{
    type Output = Nominal<R, Tag, Caps>;

    #[inline]
    fn div(mut lhs: Nominal<R, Tag, Caps>, rhs: R) -> Self::Output {
        *lhs.value_mut() /= rhs;
        lhs
    }
}

impl<R, Tag, Caps> DivAssignKind<R, Tag, Caps, R> for (No, Yes)
where
    R: DivAssign,
{
    #[inline]
    fn div_assign(lhs: &mut Nominal<R, Tag, Caps>, rhs: R) {
        *lhs.value_mut() /= rhs;
    }
}

// Difference: same-type division yields the representation's own quotient.
impl<R, Tag, Caps> DivKind<R, Tag, Caps, Nominal<R, Tag, Caps>> for (No, Yes)
where
    R: Div<R>,
{
    type Output = <R as Div<R>>::Output;

    #[inline]
    fn div(lhs: Nominal<R, Tag, Caps>, rhs: Nominal<R, Tag, Caps>) -> Self::Output {
        lhs.into_value() / rhs.into_value()
    }
}

// =============================================================================
// Bit arithmetic
// =============================================================================

impl<R, Tag, Caps> Not for Nominal<R, Tag, Caps>
where
    R: Not<Output = R>,
    Caps: Supports<BitwiseGate, Out = Yes>,
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Nominal::new(!self.into_value())
    }
}

macro_rules! impl_bit_binary {
    ($($op:ident/$assign_op:ident: $method:ident/$assign_method:ident),* $(,)?) => {
        $(
            impl<R, Tag, Caps> $assign_op for Nominal<R, Tag, Caps>
            where
                R: $assign_op,
                Caps: Supports<BitwiseGate, Out = Yes>,
            {
                #[inline]
                fn $assign_method(&mut self, rhs: Self) {
                    self.value_mut().$assign_method(rhs.into_value());
                }
            }

            impl<R, Tag, Caps> $op for Nominal<R, Tag, Caps>
            where
                R: $assign_op,
                Caps: Supports<BitwiseGate, Out = Yes>,
            {
                type Output = Self;

                #[inline]
                fn $method(mut self, rhs: Self) -> Self {
                    self.value_mut().$assign_method(rhs.into_value());
                    self
                }
            }
        )*
    };
}

impl_bit_binary!(
    BitAnd/BitAndAssign: bitand/bitand_assign,
    BitOr/BitOrAssign: bitor/bitor_assign,
    BitXor/BitXorAssign: bitxor/bitxor_assign,
);

// Shift counts stay whatever type the representation's shift accepts;
// conventionally they are plain integers, not wrapper values.
macro_rules! impl_bit_shift {
    ($($op:ident/$assign_op:ident: $method:ident/$assign_method:ident),* $(,)?) => {
        $(
            impl<R, Tag, Caps, Amount> $assign_op<Amount> for Nominal<R, Tag, Caps>
            where
                R: $assign_op<Amount>,
                Caps: Supports<BitwiseGate, Out = Yes>,
            {
                #[inline]
                fn $assign_method(&mut self, amount: Amount) {
                    self.value_mut().$assign_method(amount);
                }
            }

            impl<R, Tag, Caps, Amount> $op<Amount> for Nominal<R, Tag, Caps>
            where
                R: $assign_op<Amount>,
                Caps: Supports<BitwiseGate, Out = Yes>,
            {
                type Output = Self;

                #[inline]
                fn $method(mut self, amount: Amount) -> Self {
                    self.value_mut().$assign_method(amount);
                    self
                }
            }
        )*
    };
}

impl_bit_shift!(
    Shl/ShlAssign: shl/shl_assign,
    Shr/ShrAssign: shr/shr_assign,
);
