//! Capability queries: `Supports`, boolean combinators, enforcement.
//!
//! A query is either a capability marker itself or a combinator over other
//! queries (`And`, `Or`, `Not`, `AllOf`, `AnyOf`). Evaluation walks the trie
//! along the capability's route and compares routes at the leaf, so lookup
//! cost is the route prefix length, independent of set size.

use core::marker::PhantomData;

use crate::primitives::path::{Advance, PathEq, RouteDepth, S, Z};
use crate::primitives::truth::{No, Truth, TruthAnd, TruthNot, TruthOr, Yes};

use super::capability::{AtDepth, Capability};
use super::node::{Nil, Quad, Unit};

// =============================================================================
// Query combinators
// =============================================================================

/// Conjunction: L AND R.
pub struct And<L, R>(PhantomData<(L, R)>);

/// Disjunction: L OR R.
pub struct Or<L, R>(PhantomData<(L, R)>);

/// Negation: NOT Q.
pub struct Not<Q>(PhantomData<Q>);

/// End of a query list.
pub struct End;

/// Query list cell.
pub struct Link<H, T>(PhantomData<(H, T)>);

/// Every query in the list must hold.
pub struct AllOf<List>(PhantomData<List>);

/// At least one query in the list must hold.
pub struct AnyOf<List>(PhantomData<List>);

// =============================================================================
// Supports (main entry point)
// =============================================================================

/// Evaluate a query against a capability set.
///
/// Total for well-formed sets: the answer is `Yes` or `No`, never a
/// compile error. Operation impls gate on `Supports<Gate, Out = Yes>`.
pub trait Supports<Query> {
    type Out: Truth;
    /// The result as a constant.
    const HOLDS: bool = <Self::Out as Truth>::VALUE;
}

/// Const-context convenience for [`Supports`].
pub const fn holds<Set, Query>() -> bool
where
    Set: Supports<Query>,
{
    <Set as Supports<Query>>::HOLDS
}

// Direct capability query.
impl<Set, Cap> Supports<Cap> for Set
where
    Cap: Capability,
    Set: SeekAt<Cap, Z>,
{
    type Out = <Set as SeekAt<Cap, Z>>::Out;
}

impl<Set, L, R> Supports<And<L, R>> for Set
where
    Set: Supports<L> + Supports<R>,
    <Set as Supports<L>>::Out: TruthAnd<<Set as Supports<R>>::Out>,
{
    type Out = <<Set as Supports<L>>::Out as TruthAnd<<Set as Supports<R>>::Out>>::Out;
}

impl<Set, L, R> Supports<Or<L, R>> for Set
where
    Set: Supports<L> + Supports<R>,
    <Set as Supports<L>>::Out: TruthOr<<Set as Supports<R>>::Out>,
{
    type Out = <<Set as Supports<L>>::Out as TruthOr<<Set as Supports<R>>::Out>>::Out;
}

impl<Set, Q> Supports<Not<Q>> for Set
where
    Set: Supports<Q>,
    <Set as Supports<Q>>::Out: TruthNot,
{
    type Out = <<Set as Supports<Q>>::Out as TruthNot>::Out;
}

impl<Set> Supports<AllOf<End>> for Set {
    type Out = Yes;
}

impl<Set, H, T> Supports<AllOf<Link<H, T>>> for Set
where
    Set: Supports<H> + Supports<AllOf<T>>,
    <Set as Supports<H>>::Out: TruthAnd<<Set as Supports<AllOf<T>>>::Out>,
{
    type Out =
        <<Set as Supports<H>>::Out as TruthAnd<<Set as Supports<AllOf<T>>>::Out>>::Out;
}

impl<Set> Supports<AnyOf<End>> for Set {
    type Out = No;
}

impl<Set, H, T> Supports<AnyOf<Link<H, T>>> for Set
where
    Set: Supports<H> + Supports<AnyOf<T>>,
    <Set as Supports<H>>::Out: TruthOr<<Set as Supports<AnyOf<T>>>::Out>,
{
    type Out =
        <<Set as Supports<H>>::Out as TruthOr<<Set as Supports<AnyOf<T>>>::Out>>::Out;
}

// =============================================================================
// SeekAt: depth-aware trie walk
// =============================================================================

/// Look for a capability starting at the given route depth.
pub trait SeekAt<Cap, Depth> {
    type Out: Truth;
}

impl<Cap, Depth> SeekAt<Cap, Depth> for Nil {
    type Out = No;
}

// Leaf: full-route comparison decides. Routing only consumes a prefix, so a
// prefix match is not enough here.
impl<Cap, Stored, Depth> SeekAt<Cap, Depth> for Unit<Stored>
where
    Cap: Capability,
    Stored: Capability,
    Cap::Route: PathEq<Stored::Route, RouteDepth>,
{
    type Out = <Cap::Route as PathEq<Stored::Route, RouteDepth>>::Out;
}

impl<Cap, Depth, S0, S1, S2, S3> SeekAt<Cap, Depth> for Quad<S0, S1, S2, S3>
where
    Cap: Capability,
    Cap::Route: Advance<Depth>,
    Self: RouteSeek<Cap, Depth, AtDepth<Cap, Depth>>,
{
    type Out = <Self as RouteSeek<Cap, Depth, AtDepth<Cap, Depth>>>::Out;
}

/// Continue the walk in the branch slot selected by the route crumb.
pub trait RouteSeek<Cap, Depth, C> {
    type Out: Truth;
}

macro_rules! impl_route_seek {
    ($crumb:ident, $slot:ident) => {
        impl<Cap, Depth, S0, S1, S2, S3> RouteSeek<Cap, Depth, crate::primitives::crumb::$crumb>
            for Quad<S0, S1, S2, S3>
        where
            Cap: Capability,
            $slot: SeekAt<Cap, S<Depth>>,
        {
            type Out = <$slot as SeekAt<Cap, S<Depth>>>::Out;
        }
    };
}

impl_route_seek!(Q0, S0);
impl_route_seek!(Q1, S1);
impl_route_seek!(Q2, S2);
impl_route_seek!(Q3, S3);

// =============================================================================
// Enforcement
// =============================================================================

/// Lift a `Yes` evaluation into trait satisfaction; carries the set and query
/// into the diagnostic.
#[diagnostic::on_unimplemented(
    message = "capability requirement `{Query}` is not met",
    label = "this capability set does not satisfy `{Query}`",
    note = "set: `{Set}`\nadd the missing capability to the wrapper's `caps![...]` list, \
            or drop the conflicting one"
)]
pub trait Satisfied<Set, Query: ?Sized> {}

impl<Set, Query: ?Sized> Satisfied<Set, Query> for Yes {}

/// Bound-style enforcement of a query: implemented exactly when
/// `Supports<Q>` evaluates to `Yes`.
///
/// ```
/// use nominal::{caps, Arithmetic, Demand, Equality, Nominal};
///
/// struct AmountTag;
/// type Amount = Nominal<u64, AmountTag, caps![Arithmetic, Equality]>;
///
/// fn doubled<C: Demand<Arithmetic>>(a: Nominal<u64, AmountTag, C>) -> u64 {
///     a.into_value() * 2
/// }
///
/// assert_eq!(doubled(Amount::new(21)), 42);
/// ```
///
/// A set lacking the demanded capability is rejected at the call site:
///
/// ```compile_fail
/// use nominal::{caps, Arithmetic, Demand, Equality, Nominal};
///
/// struct AmountTag;
/// fn doubled<C: Demand<Arithmetic>>(a: Nominal<u64, AmountTag, C>) -> u64 {
///     a.into_value() * 2
/// }
///
/// doubled(Nominal::<u64, AmountTag, caps![Equality]>::new(21));
/// ```
pub trait Demand<Query> {}

impl<Set, Query> Demand<Query> for Set
where
    Set: Supports<Query>,
    <Set as Supports<Query>>::Out: Satisfied<Set, Query>,
{
}

// =============================================================================
// Query macros
// =============================================================================

/// Build a query list for `AllOf`/`AnyOf`.
#[macro_export]
#[doc(hidden)]
macro_rules! query_list {
    () => { $crate::set::End };
    ($head:ty $(, $tail:ty)*) => {
        $crate::set::Link<$head, $crate::query_list![$($tail),*]>
    };
}

/// Query: every listed capability/query holds.
#[macro_export]
macro_rules! all_of {
    ($($item:ty),* $(,)?) => {
        $crate::set::AllOf<$crate::query_list![$($item),*]>
    };
}

/// Query: at least one listed capability/query holds.
#[macro_export]
macro_rules! any_of {
    ($($item:ty),* $(,)?) => {
        $crate::set::AnyOf<$crate::query_list![$($item),*]>
    };
}
