//! Boolean conversion, stepping, and pointer-like access.

use core::ops::{Deref, DerefMut};

use crate::caps::{BooleanGate, DecrementGate, DerefGate, IncrementGate};
use crate::primitives::truth::Yes;
use crate::repr::{Decrement, Increment, NullProbe, Truthy};
use crate::set::Supports;

use super::Nominal;

// =============================================================================
// Boolean conversion (explicit only)
// =============================================================================

impl<R, Tag, Caps> Nominal<R, Tag, Caps> {
    /// Explicit conversion to `bool`, forwarding to the representation's
    /// contextual-boolean semantics.
    #[inline]
    pub fn as_bool(&self) -> bool
    where
        R: Truthy,
        Caps: Supports<BooleanGate, Out = Yes>,
    {
        self.value().truthy()
    }
}

// =============================================================================
// Stepping
// =============================================================================

impl<R, Tag, Caps> Nominal<R, Tag, Caps> {
    /// Prefix step forward: mutate, then hand the stepped value back.
    #[inline]
    pub fn increment(&mut self) -> &mut Self
    where
        R: Increment,
        Caps: Supports<IncrementGate, Out = Yes>,
    {
        self.value_mut().increment();
        self
    }

    /// Postfix step forward: returns the value held *before* the step.
    /// Returning the prior value costs a copy, so the wrapper must be
    /// clonable.
    #[inline]
    pub fn post_increment(&mut self) -> Self
    where
        R: Increment,
        Self: Clone,
        Caps: Supports<IncrementGate, Out = Yes>,
    {
        let prior = self.clone();
        self.value_mut().increment();
        prior
    }

    /// Prefix step backward: mutate, then hand the stepped value back.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self
    where
        R: Decrement,
        Caps: Supports<DecrementGate, Out = Yes>,
    {
        self.value_mut().decrement();
        self
    }

    /// Postfix step backward: returns the value held *before* the step.
    #[inline]
    pub fn post_decrement(&mut self) -> Self
    where
        R: Decrement,
        Self: Clone,
        Caps: Supports<DecrementGate, Out = Yes>,
    {
        let prior = self.clone();
        self.value_mut().decrement();
        prior
    }
}

// =============================================================================
// Pointer-like access
// =============================================================================

impl<R, Tag, Caps> Deref for Nominal<R, Tag, Caps>
where
    R: Deref,
    Caps: Supports<DerefGate, Out = Yes>,
{
    type Target = R::Target;

    #[inline]
    fn deref(&self) -> &R::Target {
        self.value().deref()
    }
}

impl<R, Tag, Caps> DerefMut for Nominal<R, Tag, Caps>
where
    R: DerefMut,
    Caps: Supports<DerefGate, Out = Yes>,
{
    #[inline]
    fn deref_mut(&mut self) -> &mut R::Target {
        self.value_mut().deref_mut()
    }
}

impl<R, Tag, Caps> Nominal<R, Tag, Caps> {
    /// Comparison against the representation's null sentinel.
    #[inline]
    pub fn is_null(&self) -> bool
    where
        R: NullProbe,
        Caps: Supports<DerefGate, Out = Yes>,
    {
        self.value().probe_null()
    }
}
