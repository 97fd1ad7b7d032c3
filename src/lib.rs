#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]

//! # nominal
//!
//! Zero-cost nominal wrapper types with composable capabilities.
//!
//! A [`Nominal<R, Tag, Caps>`](Nominal) wraps a representation `R` behind a
//! phantom `Tag`: wrappers with different tags are distinct, incompatible
//! types even when everything else coincides. `Caps` is a capability set
//! selecting exactly which operations the wrapper re-enables: each
//! capability forwards to the representation's own primitive and is
//! synthesized only when that primitive exists.
//!
//! ## Architecture
//!
//! ```text
//! +--------------------------------------------------------------------+
//! |  Layer 0: Primitives                                               |
//! |  - Truth (Yes/No), Crumb (Q0..Q3), Path/Route, Peano depths        |
//! +--------------------------------------------------------------------+
//!                                 |
//!                                 v
//! +--------------------------------------------------------------------+
//! |  Layer 1: Capability set (radix-4 trie)                            |
//! |  - Nil / Unit / Quad (storage), Admit (insert),                    |
//! |    Supports / Fetch / Demand (queries)                             |
//! +--------------------------------------------------------------------+
//!                                 |
//!                                 v
//! +--------------------------------------------------------------------+
//! |  Layer 2: Wrapper                                                  |
//! |  - Nominal<R, Tag, Caps>, canonical accessor, gated operator impls |
//! +--------------------------------------------------------------------+
//!                                 |
//!                                 v
//! +--------------------------------------------------------------------+
//! |  Layer 3: Detection                                                |
//! |  - detects! (autoref probing), Numeric classification             |
//! +--------------------------------------------------------------------+
//! ```
//!
//! Every query resolves at composition time; at run time each operation is
//! the representation's own, inlined, with no extra state or branching
//! (`#[repr(transparent)]`, phantom-only tag).
//!
//! ## Quick start
//!
//! ```
//! use nominal::{caps, Arithmetic, Equality, Hashable, Nominal, Ordered};
//!
//! struct MetersTag;
//! type Meters = Nominal<u64, MetersTag, caps![Arithmetic, Equality, Ordered, Hashable]>;
//!
//! let a = Meters::new(1500);
//! let b = Meters::new(2500);
//!
//! assert_eq!(a + b, Meters::new(4000));
//! assert!(a < b);
//! assert_eq!(*a.value(), 1500);
//! ```
//!
//! Capabilities of your own are one derive away:
//!
//! ```
//! use nominal::{caps, holds, Capability};
//!
//! #[derive(Capability)]
//! struct Audited;
//!
//! type Caps = caps![Audited];
//! assert!(holds::<Caps, Audited>());
//! ```

// Allow `::nominal` paths (emitted by the derive) to resolve inside the
// crate itself.
extern crate self as nominal;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Capability set
// =============================================================================
pub mod set;

// Built-in capability markers and gates
pub mod caps;

// Representation-side primitive seams
pub mod repr;

// =============================================================================
// Layer 2: Wrapper
// =============================================================================
pub mod wrapper;

// =============================================================================
// Layer 3: Detection
// =============================================================================
#[cfg(feature = "detect")]
pub mod detect;

// =============================================================================
// Re-exports at the crate root
// =============================================================================

pub use primitives::crumb::{Crumb, Q0, Q1, Q2, Q3};
pub use primitives::path::{Path, Repeat, RouteDepth, Step};
pub use primitives::truth::{No, Truth, Yes};

pub use set::{holds, Admit, AllOf, And, AnyOf, Capability, Demand, Fetch, Nil, Not, Or, Supports};

pub use caps::*;

pub use wrapper::{
    BidirectionalCategory, Composed, ForwardCategory, Nominal, RandomAccessCategory,
};

#[cfg(feature = "detect")]
pub use detect::{Numeric, Probe};

// The derive lives in the macro namespace, next to the `Capability` trait.
pub use macros::Capability;

/// Common items for declaring and consuming wrapper types.
pub mod prelude {
    pub use crate::caps::*;
    pub use crate::set::{holds, Capability, Demand, Supports};
    pub use crate::wrapper::{Composed, Nominal};
    pub use macros::Capability;
}
