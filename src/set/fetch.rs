//! Typed retrieval of a stored capability.
//!
//! Parametrized capability families (`Affine<D>`, `Indexed<Spec>`) route
//! through a fixed family key, so the set can hold at most one member of the
//! family. `Fetch<FamilyKey>` walks the key's route and yields the member
//! actually stored, parameter included. The affine and indexing impls are
//! built on that projection.
//!
//! Unlike [`Supports`](super::seek::Supports), `Fetch` is deliberately
//! partial: a set that does not contain the family has no impl, which makes
//! every operation bound on it degrade gracefully.

use crate::primitives::path::{Advance, PathEq, RouteDepth, S, Z};
use crate::primitives::truth::Yes;

use super::capability::{AtDepth, Capability};
use super::node::{Quad, Unit};

/// Retrieve the stored capability matching `Key`'s route.
pub trait Fetch<Key> {
    type Item;
}

impl<Set, Key> Fetch<Key> for Set
where
    Key: Capability,
    Set: FetchAt<Key, Z>,
{
    type Item = <Set as FetchAt<Key, Z>>::Item;
}

/// Depth-aware retrieval step. `Nil` has no impl: absence is partiality.
pub trait FetchAt<Key, Depth> {
    type Item;
}

impl<Key, Stored, Depth> FetchAt<Key, Depth> for Unit<Stored>
where
    Key: Capability,
    Stored: Capability,
    Key::Route: PathEq<Stored::Route, RouteDepth>,
    <Key::Route as PathEq<Stored::Route, RouteDepth>>::Out: FetchIf<Stored>,
{
    type Item = <<Key::Route as PathEq<Stored::Route, RouteDepth>>::Out as FetchIf<Stored>>::Item;
}

/// Leaf resolution: only a full route match yields the stored capability.
pub trait FetchIf<Stored> {
    type Item;
}

impl<Stored> FetchIf<Stored> for Yes {
    type Item = Stored;
}

impl<Key, Depth, S0, S1, S2, S3> FetchAt<Key, Depth> for Quad<S0, S1, S2, S3>
where
    Key: Capability,
    Key::Route: Advance<Depth>,
    Self: RouteFetch<Key, Depth, AtDepth<Key, Depth>>,
{
    type Item = <Self as RouteFetch<Key, Depth, AtDepth<Key, Depth>>>::Item;
}

/// Continue retrieval in the branch slot selected by the route crumb.
pub trait RouteFetch<Key, Depth, C> {
    type Item;
}

macro_rules! impl_route_fetch {
    ($crumb:ident, $slot:ident) => {
        impl<Key, Depth, S0, S1, S2, S3> RouteFetch<Key, Depth, crate::primitives::crumb::$crumb>
            for Quad<S0, S1, S2, S3>
        where
            Key: Capability,
            $slot: FetchAt<Key, S<Depth>>,
        {
            type Item = <$slot as FetchAt<Key, S<Depth>>>::Item;
        }
    };
}

impl_route_fetch!(Q0, S0);
impl_route_fetch!(Q1, S1);
impl_route_fetch!(Q2, S2);
impl_route_fetch!(Q3, S3);
