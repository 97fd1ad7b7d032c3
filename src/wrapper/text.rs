//! Formatted text in and out.

use core::fmt;
use core::str::FromStr;

use crate::caps::{DisplayGate, ParseGate};
use crate::primitives::truth::Yes;
use crate::set::Supports;

use super::Nominal;

impl<R, Tag, Caps> fmt::Display for Nominal<R, Tag, Caps>
where
    R: fmt::Display,
    Caps: Supports<DisplayGate, Out = Yes>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value().fmt(f)
    }
}

// The representation's parse error passes through verbatim.
impl<R, Tag, Caps> FromStr for Nominal<R, Tag, Caps>
where
    R: FromStr,
    Caps: Supports<ParseGate, Out = Yes>,
{
    type Err = R::Err;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        R::from_str(s).map(Nominal::new)
    }
}
