//! Built-in capability markers, parametrized families, and operation gates.
//!
//! Markers carry hand-assigned three-crumb routes (user-derived capabilities
//! hash to 32 crumbs, so the two populations cannot collide in practice).
//! A *gate* is the query an operation family is guarded by; compound
//! capabilities (`Regular`, the iterator tiers, `Difference`) are expressed
//! as membership in the gates of every base capability they stack on.

use core::marker::PhantomData;

use crate::set::{Capability, Fetch};

macro_rules! declare_marker {
    ($(#[$meta:meta])* $name:ident, [$a:ident, $b:ident, $c:ident]) => {
        $(#[$meta])*
        pub struct $name;

        impl Capability for $name {
            type Route = crate::route!(
                crate::primitives::crumb::$a,
                crate::primitives::crumb::$b,
                crate::primitives::crumb::$c
            );
        }
    };
}

// =============================================================================
// Base capabilities
// =============================================================================

declare_marker! {
    /// `==`/`!=` between same-typed wrappers, forwarding to the
    /// representation's equality.
    Equality, [Q0, Q0, Q0]
}

declare_marker! {
    /// `<`, `<=`, `>`, `>=` forwarding to the representation's comparison.
    ///
    /// Rust folds equality into its comparison hierarchy
    /// (`PartialOrd: PartialEq`), so this also opens the equality gate.
    Ordered, [Q1, Q0, Q0]
}

declare_marker! {
    /// Zero-argument construction (`Default`), when the representation is
    /// itself default-constructible.
    DefaultInit, [Q2, Q0, Q0]
}

declare_marker! {
    /// Default construction plus value semantics. Clone/copy already follow
    /// the representation unconditionally, so in Rust this adds the default
    /// gate only.
    Semiregular, [Q3, Q0, Q0]
}

declare_marker! {
    /// [`Semiregular`] plus [`Equality`].
    Regular, [Q0, Q1, Q0]
}

declare_marker! {
    /// Explicit boolean conversion (`as_bool`), over the
    /// [`Truthy`](crate::repr::Truthy) seam.
    Boolean, [Q1, Q1, Q0]
}

declare_marker! {
    /// `increment`/`post_increment` over the
    /// [`Increment`](crate::repr::Increment) seam.
    Incrementable, [Q2, Q1, Q0]
}

declare_marker! {
    /// `decrement`/`post_decrement` over the
    /// [`Decrement`](crate::repr::Decrement) seam.
    Decrementable, [Q3, Q1, Q0]
}

declare_marker! {
    /// [`Incrementable`] and [`Decrementable`] in one marker.
    Bicrementable, [Q0, Q2, Q0]
}

declare_marker! {
    /// `Hash` forwarding, making the wrapper usable as an associative
    /// container key exactly like its representation.
    Hashable, [Q1, Q2, Q0]
}

declare_marker! {
    /// `Deref`/`DerefMut` forwarding plus `is_null` over the
    /// [`NullProbe`](crate::repr::NullProbe) seam.
    PointerLike, [Q2, Q2, Q0]
}

declare_marker! {
    /// `Display` forwarding.
    Printable, [Q3, Q2, Q0]
}

declare_marker! {
    /// `FromStr` forwarding; the representation's parse error passes through
    /// unchanged.
    Parseable, [Q0, Q3, Q0]
}

declare_marker! {
    /// [`Printable`] and [`Parseable`] in one marker.
    Textual, [Q1, Q3, Q0]
}

declare_marker! {
    /// Whole-quantity arithmetic: unary negation and `+ - * /` (with
    /// compound forms) where both operands are the same wrapper type.
    Arithmetic, [Q2, Q3, Q0]
}

declare_marker! {
    /// Bit arithmetic: `& | ^` (with compound forms), complement, and shifts
    /// whose count may be any type the representation's shift accepts.
    Bitwise, [Q3, Q3, Q0]
}

declare_marker! {
    /// Point-and-displacement coinciding in one type: ordering, symmetric
    /// `+ -`, scaling by the bare representation, and same-type division
    /// yielding the representation's quotient.
    Difference, [Q0, Q0, Q1]
}

declare_marker! {
    /// Forward iteration tier: `Iterator` (and `FusedIterator`) forwarding;
    /// opens the equality, increment and pointer gates.
    ///
    /// The declared tier caps the surface even when the representation could
    /// do more:
    ///
    /// ```compile_fail
    /// use nominal::{caps, ForwardIterator, Nominal};
    ///
    /// struct ScanTag;
    /// type Scan<'a> = Nominal<std::slice::Iter<'a, u8>, ScanTag, caps![ForwardIterator]>;
    ///
    /// let bytes = [1u8, 2, 3];
    /// let mut scan = Scan::new(bytes.iter());
    /// scan.next_back(); // reverse traversal needs the bidirectional tier
    /// ```
    ForwardIterator, [Q3, Q0, Q1]
}

declare_marker! {
    /// Bidirectional tier: everything forward, plus `DoubleEndedIterator`
    /// and the decrement gate.
    BidirectionalIterator, [Q0, Q1, Q1]
}

declare_marker! {
    /// Random-access tier: everything bidirectional, plus
    /// `ExactSizeIterator` and the ordering gate.
    RandomAccessIterator, [Q1, Q1, Q1]
}

declare_marker! {
    /// Range adaptation: `iter`/`iter_mut`/`IntoIterator` yielding
    /// wrapper-typed iterators that carry the same tag as the parent range.
    Ranged, [Q2, Q1, Q1]
}

// =============================================================================
// Parametrized families
// =============================================================================

declare_marker! {
    /// Family key for [`Affine`]; used to fetch the stored member regardless
    /// of its difference parameter.
    AffineFamily, [Q1, Q0, Q1]
}

/// Affine-point capability: subtracting two wrapper "points" yields `D`;
/// adding or subtracting a `D` moves a point. The family contributes nothing
/// unless `D` is constructible from the representation's subtraction result.
pub struct Affine<D>(PhantomData<D>);

impl<D: 'static> Capability for Affine<D> {
    // Routes through the family key: one affine declaration per set.
    type Route = <AffineFamily as Capability>::Route;
}

/// Projects the difference type out of a capability set containing
/// [`Affine<D>`].
pub trait AffineScheme {
    type Diff;
}

impl<Set, D> AffineScheme for Set
where
    D: 'static,
    Set: Fetch<AffineFamily, Item = Affine<D>>,
{
    type Diff = D;
}

declare_marker! {
    /// Family key for [`Indexed`].
    IndexedFamily, [Q2, Q0, Q1]
}

/// Accept any index type the representation itself accepts.
pub struct Untyped;

/// Accept exactly `I` as the index type; wrapper indices are unwrapped
/// through [`Lower`](crate::repr::Lower) before forwarding.
pub struct Keyed<I>(PhantomData<I>);

/// Indexing capability: `Index`/`IndexMut` plus the checked `get`/`get_mut`
/// pair, forwarding to the representation's own indexing.
pub struct Indexed<Spec = Untyped>(PhantomData<Spec>);

impl<Spec: 'static> Capability for Indexed<Spec> {
    type Route = <IndexedFamily as Capability>::Route;
}

/// Projects the index acceptance spec out of a capability set containing
/// [`Indexed`].
pub trait IndexScheme {
    type Spec;
}

impl<Set, Spec> IndexScheme for Set
where
    Spec: 'static,
    Set: Fetch<IndexedFamily, Item = Indexed<Spec>>,
{
    type Spec = Spec;
}

// =============================================================================
// Operation gates
// =============================================================================

/// Gate for `PartialEq`/`Eq`.
pub type EqualityGate = crate::any_of![
    Equality,
    Regular,
    Ordered,
    Difference,
    ForwardIterator,
    BidirectionalIterator,
    RandomAccessIterator,
];

/// Gate for `PartialOrd`/`Ord`.
pub type OrderingGate = crate::any_of![Ordered, Difference, RandomAccessIterator];

/// Gate for `Default`.
pub type DefaultGate = crate::any_of![DefaultInit, Semiregular, Regular];

/// Gate for `as_bool`.
pub type BooleanGate = Boolean;

/// Gate for `increment`/`post_increment`.
pub type IncrementGate = crate::any_of![
    Incrementable,
    Bicrementable,
    ForwardIterator,
    BidirectionalIterator,
    RandomAccessIterator,
];

/// Gate for `decrement`/`post_decrement`.
pub type DecrementGate =
    crate::any_of![Decrementable, Bicrementable, BidirectionalIterator, RandomAccessIterator];

/// Gate for `Hash`.
pub type HashGate = Hashable;

/// Gate for `Deref`/`DerefMut`/`is_null`.
pub type DerefGate = crate::any_of![
    PointerLike,
    ForwardIterator,
    BidirectionalIterator,
    RandomAccessIterator,
];

/// Gate for `Display`.
pub type DisplayGate = crate::any_of![Printable, Textual];

/// Gate for `FromStr`.
pub type ParseGate = crate::any_of![Parseable, Textual];

/// Gate for same-type `+`/`-` (and their compound forms).
pub type SumGate = crate::any_of![Arithmetic, Difference];

/// Gate for the bit-arithmetic family.
pub type BitwiseGate = Bitwise;

/// Gate for `Iterator`/`FusedIterator`.
pub type IteratorGate =
    crate::any_of![ForwardIterator, BidirectionalIterator, RandomAccessIterator];

/// Gate for `DoubleEndedIterator`.
pub type DoubleEndedGate = crate::any_of![BidirectionalIterator, RandomAccessIterator];

/// Gate for `ExactSizeIterator`.
pub type ExactSizeGate = RandomAccessIterator;

/// Gate for range adaptation.
pub type RangeGate = Ranged;

/// Capability set carried by iterators produced through [`Ranged`]: the full
/// iterator tier. Effective operations still degrade to what the underlying
/// iterator implements.
pub type RangedIterCaps = crate::caps![RandomAccessIterator];
