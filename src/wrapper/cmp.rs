//! Equality, ordering and hashing, gated and forwarded.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::caps::{EqualityGate, HashGate, OrderingGate};
use crate::primitives::truth::Yes;
use crate::set::Supports;

use super::Nominal;

impl<R, Tag, Caps> PartialEq for Nominal<R, Tag, Caps>
where
    R: PartialEq,
    Caps: Supports<EqualityGate, Out = Yes>,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl<R, Tag, Caps> Eq for Nominal<R, Tag, Caps>
where
    R: Eq,
    Caps: Supports<EqualityGate, Out = Yes>,
{
}

// The ordering gate names the equality gate too: PartialOrd's supertrait
// must be provable from this impl's own bounds.
impl<R, Tag, Caps> PartialOrd for Nominal<R, Tag, Caps>
where
    R: PartialOrd,
    Caps: Supports<OrderingGate, Out = Yes> + Supports<EqualityGate, Out = Yes>,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value().partial_cmp(other.value())
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.value() < other.value()
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        self.value() <= other.value()
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        self.value() > other.value()
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        self.value() >= other.value()
    }
}

impl<R, Tag, Caps> Ord for Nominal<R, Tag, Caps>
where
    R: Ord,
    Caps: Supports<OrderingGate, Out = Yes> + Supports<EqualityGate, Out = Yes>,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(other.value())
    }
}

// Opting in integrates with every generic hashing consumer, exactly like the
// representation would.
impl<R, Tag, Caps> Hash for Nominal<R, Tag, Caps>
where
    R: Hash,
    Caps: Supports<HashGate, Out = Yes>,
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}
