//! Trie node types: `Nil`, `Unit`, `Quad`.
//!
//! A capability set is a radix-4 trie over capability routes. All nodes are
//! zero-sized; the set exists only at the type level.

use core::marker::PhantomData;

/// Empty set / empty slot.
pub struct Nil;

/// A single stored capability.
pub struct Unit<Cap>(PhantomData<Cap>);

/// Four-way branch; slot `Sn` holds everything whose next route crumb is `Qn`.
pub struct Quad<S0, S1, S2, S3>(PhantomData<(S0, S1, S2, S3)>);
