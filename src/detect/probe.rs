//! Inherent-const-fallback trait detection.
//!
//! For each probed trait there are two sources for the same constant name on
//! [`Probe<T>`]:
//! 1. a fallback trait implemented for every `Probe<T>`, whose constant is
//!    `false`;
//! 2. an inherent constant, `true`, that only exists when `T` implements the
//!    trait.
//!
//! Inherent items win name resolution, so `Probe::<T>::IS_CLONE` reads `true`
//! exactly when `T: Clone`. This only works for concrete types known at the
//! use site, not for unbounded generic parameters.

use core::marker::PhantomData;

/// Detection carrier.
pub struct Probe<T: ?Sized>(PhantomData<T>);

macro_rules! impl_probe {
    ($($trait_path:path => $name:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc(hidden)]
                pub trait [<$name Fallback>] {
                    const [<IS_ $name:upper>]: bool = false;
                }

                impl<T: ?Sized> [<$name Fallback>] for Probe<T> {}

                impl<T: ?Sized + $trait_path> Probe<T> {
                    pub const [<IS_ $name:upper>]: bool = true;
                }
            )*
        }
    };
}

impl_probe!(
    Clone => Clone,
    Copy => Copy,
    core::fmt::Debug => Debug,
    Default => Default,
    Send => Send,
    Sync => Sync,
    Unpin => Unpin,
    PartialEq => PartialEq,
    Eq => Eq,
    PartialOrd => PartialOrd,
    Ord => Ord,
    core::hash::Hash => Hash,
    core::fmt::Display => Display,
);

/// Does a concrete type implement a trait?
///
/// Expands to a `bool`; usable in `const` position. Concrete types only:
/// in a generic context the answer would be decided against the parameter's
/// bounds, not the instantiation.
///
/// ```
/// use nominal::detects;
///
/// const INT_IS_COPY: bool = detects!(i32: Copy);
/// assert!(INT_IS_COPY);
/// assert!(!detects!(Vec<u8>: Copy));
/// ```
#[macro_export]
macro_rules! detects {
    ($ty:ty : $tr:path) => {{
        struct __Shim<T: ?Sized>(::core::marker::PhantomData<T>);

        trait __Fallback {
            const DETECTED: bool = false;
        }

        impl<T: ?Sized> __Fallback for __Shim<T> {}

        impl<T: ?Sized + $tr> __Shim<T> {
            const DETECTED: bool = true;
        }

        <__Shim<$ty>>::DETECTED
    }};
}
