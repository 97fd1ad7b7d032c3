//! Indexing: `[]` plus the checked `get`/`get_mut` pair.
//!
//! The capability's spec decides acceptance: `Untyped` forwards whatever the
//! representation's own indexing accepts (deliberately no stricter than `R`
//! itself), `Keyed<I>` accepts exactly `I` and lowers it first, so a wrapper
//! index is unwrapped before it reaches the representation.

use core::ops::{Index, IndexMut};

use crate::caps::{IndexScheme, Keyed, Untyped};
use crate::repr::{GetIndex, Lower};

use super::Nominal;

/// How an index spec accepts and lowers an index argument.
pub trait AcceptIndex<Idx> {
    type Raw;
    fn lower_index(index: Idx) -> Self::Raw;
}

impl<Idx> AcceptIndex<Idx> for Untyped {
    type Raw = Idx;

    #[inline]
    fn lower_index(index: Idx) -> Idx {
        index
    }
}

impl<I: Lower> AcceptIndex<I> for Keyed<I> {
    type Raw = I::Raw;

    #[inline]
    fn lower_index(index: I) -> I::Raw {
        index.lower()
    }
}

impl<R, Tag, Caps, Idx> Index<Idx> for Nominal<R, Tag, Caps>
where
    Caps: IndexScheme,
    Caps::Spec: AcceptIndex<Idx>,
    R: Index<<Caps::Spec as AcceptIndex<Idx>>::Raw>,
{
    type Output = R::Output;

    #[inline]
    fn index(&self, index: Idx) -> &Self::Output {
        self.value()
            .index(<Caps::Spec as AcceptIndex<Idx>>::lower_index(index))
    }
}

impl<R, Tag, Caps, Idx> IndexMut<Idx> for Nominal<R, Tag, Caps>
where
    Caps: IndexScheme,
    Caps::Spec: AcceptIndex<Idx>,
    R: IndexMut<<Caps::Spec as AcceptIndex<Idx>>::Raw>,
{
    #[inline]
    fn index_mut(&mut self, index: Idx) -> &mut Self::Output {
        self.value_mut()
            .index_mut(<Caps::Spec as AcceptIndex<Idx>>::lower_index(index))
    }
}

impl<R, Tag, Caps> Nominal<R, Tag, Caps> {
    /// Checked element access: `None` exactly when the representation's own
    /// checked accessor would refuse the index.
    #[inline]
    pub fn get<Idx>(
        &self,
        index: Idx,
    ) -> Option<&<R as GetIndex<<Caps::Spec as AcceptIndex<Idx>>::Raw>>::Output>
    where
        Caps: IndexScheme,
        Caps::Spec: AcceptIndex<Idx>,
        R: GetIndex<<Caps::Spec as AcceptIndex<Idx>>::Raw>,
    {
        self.value()
            .get_index(<Caps::Spec as AcceptIndex<Idx>>::lower_index(index))
    }

    /// Checked mutable element access.
    #[inline]
    pub fn get_mut<Idx>(
        &mut self,
        index: Idx,
    ) -> Option<&mut <R as GetIndex<<Caps::Spec as AcceptIndex<Idx>>::Raw>>::Output>
    where
        Caps: IndexScheme,
        Caps::Spec: AcceptIndex<Idx>,
        R: GetIndex<<Caps::Spec as AcceptIndex<Idx>>::Raw>,
    {
        self.value_mut()
            .get_index_mut(<Caps::Spec as AcceptIndex<Idx>>::lower_index(index))
    }
}
