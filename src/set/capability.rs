//! The capability contract.

use crate::primitives::path::Path;

/// A capability: an independently defined behavioral extension a wrapper can
/// opt into.
///
/// The only thing a capability must supply is its [`Route`](Capability::Route),
/// the crumb stream that locates it in a capability set. Two capabilities
/// are the same capability iff their routes agree over
/// [`RouteDepth`](crate::primitives::path::RouteDepth) crumbs.
///
/// Use `#[derive(Capability)]` (route = 64-bit hash of the type name) or the
/// [`capability!`](crate::capability) macro (explicit route) to declare one.
pub trait Capability: 'static {
    /// Trie route uniquely identifying this capability.
    type Route: Path;
}

/// Crumb of `Cap`'s route at depth `D`.
pub type AtDepth<Cap, D> =
    <<<Cap as Capability>::Route as crate::primitives::path::Advance<D>>::Out as Path>::Head;

/// Declare a capability with an explicit route.
///
/// ```
/// use nominal::{capability, Q1, Q2, Q3};
///
/// capability! {
///     /// Grants access to the frobnicator.
///     pub struct Frobnicate, route = [Q3, Q1, Q2, Q2];
/// }
/// ```
#[macro_export]
macro_rules! capability {
    ($(#[$meta:meta])* $vis:vis struct $name:ident, route = [$($q:ty),+ $(,)?];) => {
        $(#[$meta])*
        $vis struct $name;

        impl $crate::Capability for $name {
            type Route = $crate::route!($($q),+);
        }
    };
}

/// Build a `Path` type from a finite crumb list, padded with `Q0`.
#[macro_export]
#[doc(hidden)]
macro_rules! route {
    ($q:ty) => {
        $crate::Step<$q, $crate::Repeat<$crate::Q0>>
    };
    ($q:ty, $($rest:ty),+) => {
        $crate::Step<$q, $crate::route!($($rest),+)>
    };
}
