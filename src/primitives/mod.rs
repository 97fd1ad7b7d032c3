//! # Layer 0: Primitives
//!
//! Building blocks for the capability engine:
//! - `truth.rs`: type-level boolean logic (`Yes`/`No`).
//! - `crumb.rs`: type-level 2-bit route digits (`Q0..Q3`).
//! - `path.rs`: capability routes, Peano depths, depth-limited equality.

pub mod crumb;
pub mod path;
pub mod truth;

pub use crumb::{Crumb, CrumbEq, Q0, Q1, Q2, Q3};
pub use path::{Advance, Path, PathEq, PathEqStep, Peano, Repeat, RouteDepth, Step, S, Z};
pub use truth::{No, Truth, TruthAnd, TruthNot, TruthOr, Yes};
