//! # Layer 1: Capability sets
//!
//! The composition engine: a radix-4 type-level trie storing capability
//! markers, hash-routed by each capability's `Route`.
//!
//! - **Nodes**: `Nil` (empty), `Unit` (one capability), `Quad` (branch).
//! - **Operations**: `Admit` (insert, duplicates rejected), `Supports`
//!   (boolean query), `Fetch` (typed retrieval), `Demand` (enforcement).

pub mod admit;
pub mod capability;
pub mod fetch;
pub mod node;
pub mod seek;

pub use admit::{Admit, AdmitAt, QuadAdmit, SplitAt, UnitAdmit};
pub use capability::{AtDepth, Capability};
pub use fetch::{Fetch, FetchAt, FetchIf, RouteFetch};
pub use node::{Nil, Quad, Unit};
pub use seek::{
    holds, AllOf, And, AnyOf, Demand, End, Link, Not, Or, RouteSeek, Satisfied, SeekAt, Supports,
};
