//! Capability admission: building a set one capability at a time.
//!
//! `caps![A, B, C]` folds [`Admit`] over `Nil`. Insertion walks the new
//! capability's route crumb by crumb; when it lands on an occupied `Unit`,
//! the two routes either diverge (split into a `Quad` holding both) or match
//! over the full `RouteDepth`, meaning the same capability was listed twice,
//! which is rejected at composition time.

use crate::primitives::path::{Advance, PathEq, RouteDepth, S, Z};
use crate::primitives::truth::No;

use super::capability::{AtDepth, Capability};
use super::node::{Nil, Quad, Unit};

/// Add a capability to a set.
#[diagnostic::on_unimplemented(
    message = "cannot add capability `{Cap}` to the set `{Self}`",
    note = "the set must be built from `Nil`/`Unit`/`Quad` and `{Cap}` must implement `Capability`"
)]
pub trait Admit<Cap>: Sized {
    type Out;
}

impl<Set, Cap> Admit<Cap> for Set
where
    Cap: Capability,
    Set: AdmitAt<Cap, Z>,
{
    type Out = <Set as AdmitAt<Cap, Z>>::Out;
}

/// Depth-aware insertion step.
pub trait AdmitAt<Cap, Depth> {
    type Out;
}

impl<Cap, Depth> AdmitAt<Cap, Depth> for Nil {
    type Out = Unit<Cap>;
}

impl<Cap, Depth, S0, S1, S2, S3> AdmitAt<Cap, Depth> for Quad<S0, S1, S2, S3>
where
    Cap: Capability,
    Cap::Route: Advance<Depth>,
    Self: QuadAdmit<Cap, Depth, AtDepth<Cap, Depth>>,
{
    type Out = <Self as QuadAdmit<Cap, Depth, AtDepth<Cap, Depth>>>::Out;
}

/// Insert into the branch slot selected by the route crumb at this depth.
pub trait QuadAdmit<Cap, Depth, C> {
    type Out;
}

macro_rules! impl_quad_admit {
    ($crumb:ident, $slot:ident, [$($before:ident),*], [$($after:ident),*]) => {
        impl<Cap, Depth, S0, S1, S2, S3> QuadAdmit<Cap, Depth, crate::primitives::crumb::$crumb>
            for Quad<S0, S1, S2, S3>
        where
            Cap: Capability,
            $slot: AdmitAt<Cap, S<Depth>>,
        {
            type Out = Quad<$($before,)* <$slot as AdmitAt<Cap, S<Depth>>>::Out, $($after),*>;
        }
    };
}

impl_quad_admit!(Q0, S0, [], [S1, S2, S3]);
impl_quad_admit!(Q1, S1, [S0], [S2, S3]);
impl_quad_admit!(Q2, S2, [S0, S1], [S3]);
impl_quad_admit!(Q3, S3, [S0, S1, S2], []);

// Unit: compare the full routes first, then dispatch on the outcome.
impl<New, Stored, Depth> AdmitAt<New, Depth> for Unit<Stored>
where
    New: Capability,
    Stored: Capability,
    New::Route: PathEq<Stored::Route, RouteDepth>,
    <New::Route as PathEq<Stored::Route, RouteDepth>>::Out: UnitAdmit<New, Stored, Depth>,
{
    type Out =
        <<New::Route as PathEq<Stored::Route, RouteDepth>>::Out as UnitAdmit<New, Stored, Depth>>::Out;
}

/// Resolution of an insertion that landed on an occupied `Unit`.
///
/// Only the distinct-routes case (`No`) is implemented: admitting the same
/// capability twice is a composition error, reported through the missing
/// `Yes` impl.
#[diagnostic::on_unimplemented(
    message = "capability `{New}` is listed more than once in this composition",
    label = "`{New}` and `{Stored}` share one route",
    note = "each capability may appear at most once in a `caps![...]` list; \
            parametrized families (`Affine<_>`, `Indexed<_>`) count as one capability"
)]
pub trait UnitAdmit<New, Stored, Depth> {
    type Out;
}

impl<New, Stored, Depth> UnitAdmit<New, Stored, Depth> for No
where
    New: Capability,
    Stored: Capability,
    New::Route: Advance<Depth>,
    Stored::Route: Advance<Depth>,
    (): SplitAt<New, Stored, Depth, AtDepth<New, Depth>, AtDepth<Stored, Depth>>,
{
    type Out =
        <() as SplitAt<New, Stored, Depth, AtDepth<New, Depth>, AtDepth<Stored, Depth>>>::Out;
}

/// Split an occupied `Unit` into a `Quad` keyed by the two route crumbs at
/// the current depth.
pub trait SplitAt<New, Stored, Depth, NewCrumb, StoredCrumb> {
    type Out;
}

// Shared crumb: both capabilities descend into the same slot and split at a
// deeper level (the routes differ somewhere within RouteDepth, so this
// terminates).
macro_rules! impl_split_shared {
    ($crumb:ident, [$($before:ident),*], [$($after:ident),*]) => {
        impl<New, Stored, Depth>
            SplitAt<New, Stored, Depth, crate::primitives::crumb::$crumb, crate::primitives::crumb::$crumb>
            for ()
        where
            New: Capability,
            Stored: Capability,
            Unit<Stored>: AdmitAt<New, S<Depth>>,
        {
            type Out = Quad<$($before,)* <Unit<Stored> as AdmitAt<New, S<Depth>>>::Out, $($after),*>;
        }
    };
}

impl_split_shared!(Q0, [], [Nil, Nil, Nil]);
impl_split_shared!(Q1, [Nil], [Nil, Nil]);
impl_split_shared!(Q2, [Nil, Nil], [Nil]);
impl_split_shared!(Q3, [Nil, Nil, Nil], []);

// Diverging crumbs: both capabilities become leaves of a fresh branch.
macro_rules! impl_split_diverge {
    ($nc:ident, $sc:ident, [$($slot:ty),*]) => {
        impl<New, Stored, Depth>
            SplitAt<New, Stored, Depth, crate::primitives::crumb::$nc, crate::primitives::crumb::$sc>
            for ()
        {
            type Out = Quad<$($slot),*>;
        }
    };
}

impl_split_diverge!(Q0, Q1, [Unit<New>, Unit<Stored>, Nil, Nil]);
impl_split_diverge!(Q0, Q2, [Unit<New>, Nil, Unit<Stored>, Nil]);
impl_split_diverge!(Q0, Q3, [Unit<New>, Nil, Nil, Unit<Stored>]);
impl_split_diverge!(Q1, Q0, [Unit<Stored>, Unit<New>, Nil, Nil]);
impl_split_diverge!(Q1, Q2, [Nil, Unit<New>, Unit<Stored>, Nil]);
impl_split_diverge!(Q1, Q3, [Nil, Unit<New>, Nil, Unit<Stored>]);
impl_split_diverge!(Q2, Q0, [Unit<Stored>, Nil, Unit<New>, Nil]);
impl_split_diverge!(Q2, Q1, [Nil, Unit<Stored>, Unit<New>, Nil]);
impl_split_diverge!(Q2, Q3, [Nil, Nil, Unit<New>, Unit<Stored>]);
impl_split_diverge!(Q3, Q0, [Unit<Stored>, Nil, Nil, Unit<New>]);
impl_split_diverge!(Q3, Q1, [Nil, Unit<Stored>, Nil, Unit<New>]);
impl_split_diverge!(Q3, Q2, [Nil, Nil, Unit<Stored>, Unit<New>]);

/// Build a capability set from a list of capabilities.
///
/// ```
/// use nominal::{caps, Equality, Ordered, Hashable};
///
/// type Caps = caps![Equality, Ordered, Hashable];
/// ```
///
/// Listing a capability twice is rejected when the set is used:
///
/// ```compile_fail
/// use nominal::{caps, Equality, Nominal};
///
/// struct IdTag;
/// type Id = Nominal<u32, IdTag, caps![Equality, Equality]>;
///
/// let id = Id::new(1); // duplicate `Equality` in the capability list
/// ```
#[macro_export]
macro_rules! caps {
    () => { $crate::set::Nil };
    ($cap:ty $(,)?) => {
        <$crate::set::Nil as $crate::set::Admit<$cap>>::Out
    };
    ($cap:ty, $($rest:ty),+ $(,)?) => {
        <$crate::caps![$($rest),+] as $crate::set::Admit<$cap>>::Out
    };
}
