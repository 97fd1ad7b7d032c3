//! Type-level crumbs: 2-bit route digits.
//!
//! A capability's route through the quad trie is a stream of crumbs, the
//! radix-4 analogue of hash nibbles. Four digits keep the generated
//! trait-impl surface small (16 equality impls, 12 divergence impls) while a
//! 64-bit route still fits in 32 digits.

use super::truth::{No, Truth, Yes};

/// Type-level 2-bit value (0..4).
pub trait Crumb: 'static {}

macro_rules! define_crumbs {
    ($($q:ident),*) => {
        $(
            pub struct $q;
            impl Crumb for $q {}
        )*
    };
}

define_crumbs!(Q0, Q1, Q2, Q3);

/// Type-level crumb equality.
pub trait CrumbEq<Other: Crumb>: Crumb {
    type Out: Truth;
}

macro_rules! impl_crumb_eq {
    ($($a:ident == $a2:ident),*) => {
        $(
            impl CrumbEq<$a2> for $a { type Out = Yes; }
        )*
    };
    ($($a:ident != $b:ident),*) => {
        $(
            impl CrumbEq<$b> for $a { type Out = No; }
            impl CrumbEq<$a> for $b { type Out = No; }
        )*
    };
}

impl_crumb_eq!(Q0 == Q0, Q1 == Q1, Q2 == Q2, Q3 == Q3);
impl_crumb_eq!(Q0 != Q1, Q0 != Q2, Q0 != Q3, Q1 != Q2, Q1 != Q3, Q2 != Q3);
