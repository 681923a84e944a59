//! Index paths addressing items in a sectioned model.

use std::fmt;

/// A position within a [`SectionedModel`]: a section and an item offset
/// inside that section.
///
/// An index is valid against a given model iff `section` is below the
/// model's section count and `item` is below that section's item count.
/// Indices are plain values; mutations that shift positions (insertions,
/// removals) invalidate previously obtained indices, so they should be
/// used immediately rather than stored long-term.
///
/// The derived ordering compares `section` before `item`, so sorting a
/// batch of indices descending yields an order in which earlier removals
/// never shift later positions.
///
/// [`SectionedModel`]: crate::model::SectionedModel
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex {
    /// The section within the model.
    pub section: usize,
    /// The item within the section.
    pub item: usize,
}

impl SlotIndex {
    /// Creates a new index path.
    #[inline]
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

impl From<(usize, usize)> for SlotIndex {
    #[inline]
    fn from((section, item): (usize, usize)) -> Self {
        Self { section, item }
    }
}

impl fmt::Debug for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotIndex({}, {})", self.section, self.item)
    }
}
