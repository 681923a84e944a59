//! The two-dimensional model: an ordered sequence of sections.

use std::fmt;
use std::ops::{Index, IndexMut, RangeBounds};

use super::decorative::DecorativeSlot;
use super::index::SlotIndex;
use super::item::ItemSlot;
use super::section::Section;
use crate::view::{BindableView, ViewFamily};

/// An ordered sequence of [`Section`]s addressed by [`SlotIndex`] paths.
///
/// This is the container an application mutates and an adapter reads.
/// Section order is display order. The collection never grows or shrinks
/// on its own; every change goes through an explicit mutation call, so an
/// index path stays valid until a mutation shifts positions.
///
/// The append operations accept an optional target section. When none is
/// given and the collection is empty, one empty trailing section is
/// created first; when none is given and the collection is non-empty, the
/// last existing section is targeted. This makes incremental population
/// convenient:
///
/// ```ignore
/// let mut model = SectionedModel::<ListView>::new();
/// // Creates section 0 and places the item there.
/// let first = model.append_item(ItemSlot::new::<TitleCell>(title), None);
/// // Same section, next row.
/// let second = model.append_item(ItemSlot::new::<TitleCell>(other), None);
/// assert_eq!((first, second), (SlotIndex::new(0, 0), SlotIndex::new(0, 1)));
/// ```
///
/// Out-of-range section or item references are caller bugs and panic;
/// silently clamping them would desynchronize a host widget's cached
/// counts from the model. See the crate-level error handling notes.
pub struct SectionedModel<F: ViewFamily> {
    sections: Vec<Section<F>>,
}

impl<F: ViewFamily> SectionedModel<F> {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Returns the number of sections.
    #[inline]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if the model has no sections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns the section at `section`, or `None` if out of range.
    #[inline]
    pub fn get(&self, section: usize) -> Option<&Section<F>> {
        self.sections.get(section)
    }

    /// Returns the section at `section` mutably, or `None` if out of range.
    #[inline]
    pub fn get_mut(&mut self, section: usize) -> Option<&mut Section<F>> {
        self.sections.get_mut(section)
    }

    /// Returns the first section, if any.
    #[inline]
    pub fn first(&self) -> Option<&Section<F>> {
        self.sections.first()
    }

    /// Returns the last section, if any.
    #[inline]
    pub fn last(&self) -> Option<&Section<F>> {
        self.sections.last()
    }

    /// Returns the item at `index`, or `None` if out of range in either
    /// dimension.
    pub fn get_item(&self, index: SlotIndex) -> Option<&ItemSlot<F>> {
        self.sections
            .get(index.section)
            .and_then(|section| section.get(index.item))
    }

    /// Returns the item at `index` mutably, or `None` if out of range.
    pub fn get_item_mut(&mut self, index: SlotIndex) -> Option<&mut ItemSlot<F>> {
        self.sections
            .get_mut(index.section)
            .and_then(|section| section.get_mut(index.item))
    }

    /// Iterates over the sections in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Section<F>> {
        self.sections.iter()
    }

    /// Iterates mutably over the sections in display order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Section<F>> {
        self.sections.iter_mut()
    }

    /// Returns `true` if `index` addresses the last item of its section.
    ///
    /// An empty section has no last item, so every probe into one answers
    /// `false`.
    ///
    /// # Panics
    ///
    /// Panics if `index.section` is out of range.
    pub fn is_last_item(&self, index: SlotIndex) -> bool {
        index.item + 1 == self.sections[index.section].len()
    }

    /// Returns `true` if `section` is the last section.
    ///
    /// Answers `false` for every input when the model is empty.
    pub fn is_last_section(&self, section: usize) -> bool {
        section + 1 == self.sections.len()
    }

    // ---- Section mutation ----------------------------------------------

    /// Appends a section, returning its index.
    pub fn append_section(&mut self, section: Section<F>) -> usize {
        self.sections.push(section);
        self.sections.len() - 1
    }

    /// Inserts a section at `index`, shifting subsequent sections right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert_section(&mut self, index: usize, section: Section<F>) {
        self.sections.insert(index, section);
    }

    /// Removes and returns the section at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove_section(&mut self, index: usize) -> Section<F> {
        self.sections.remove(index)
    }

    /// Removes the sections at the given indices, returning them.
    ///
    /// Duplicate indices are removed once. Removal happens in descending
    /// index order so earlier removals never shift a not-yet-removed
    /// index; the returned sections are in that removal order.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn remove_sections(
        &mut self,
        indices: impl IntoIterator<Item = usize>,
    ) -> Vec<Section<F>> {
        let mut indices: Vec<usize> = indices.into_iter().collect();
        indices.sort_unstable_by(|a, b| b.cmp(a));
        indices.dedup();
        indices
            .into_iter()
            .map(|index| self.remove_section(index))
            .collect()
    }

    /// Replaces the sections in `range` with `replace_with`.
    ///
    /// The replacement need not match the range's length.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds or inverted.
    pub fn replace_range<R, I>(&mut self, range: R, replace_with: I)
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = Section<F>>,
    {
        self.sections.splice(range, replace_with);
    }

    /// Removes every section.
    pub fn clear(&mut self) {
        self.sections.clear();
    }

    // ---- Decorative mutation -------------------------------------------

    /// Sets a section's decorative of the given kind, returning the target
    /// section's index.
    ///
    /// With `section == None`: an empty model first gains one empty
    /// trailing section; a non-empty model targets its last section. An
    /// explicit `section` must be a valid index.
    ///
    /// An existing decorative of the same kind is overwritten.
    ///
    /// # Panics
    ///
    /// Panics if an explicitly given `section` is out of range.
    pub fn append_decorative(
        &mut self,
        slot: DecorativeSlot<F>,
        kind: F::DecorativeKind,
        section: Option<usize>,
    ) -> usize {
        if self.sections.is_empty() && section.is_none() {
            self.sections.push(Section::new());
        }
        let target = section.unwrap_or_else(|| self.sections.len() - 1);
        self.sections[target].set_decorative(kind, slot);
        target
    }

    /// Returns the decorative of the given kind in `section`, if set.
    ///
    /// # Panics
    ///
    /// Panics if `section` is out of range.
    pub fn decorative(
        &self,
        section: usize,
        kind: F::DecorativeKind,
    ) -> Option<&DecorativeSlot<F>> {
        self.sections[section].decorative(kind)
    }

    /// Returns the decorative of the given kind in `section` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `section` is out of range.
    pub fn decorative_mut(
        &mut self,
        section: usize,
        kind: F::DecorativeKind,
    ) -> Option<&mut DecorativeSlot<F>> {
        self.sections[section].decorative_mut(kind)
    }

    /// Sets the decorative of the given kind in `section`, returning the
    /// replaced slot.
    ///
    /// # Panics
    ///
    /// Panics if `section` is out of range.
    pub fn set_decorative(
        &mut self,
        section: usize,
        kind: F::DecorativeKind,
        slot: DecorativeSlot<F>,
    ) -> Option<DecorativeSlot<F>> {
        self.sections[section].set_decorative(kind, slot)
    }

    /// Removes and returns the decorative of the given kind in `section`.
    ///
    /// # Panics
    ///
    /// Panics if `section` is out of range.
    pub fn remove_decorative(
        &mut self,
        section: usize,
        kind: F::DecorativeKind,
    ) -> Option<DecorativeSlot<F>> {
        self.sections[section].remove_decorative(kind)
    }

    // ---- Item mutation -------------------------------------------------

    /// Appends an item, returning the position it landed at.
    ///
    /// With `section == None`: an empty model first gains one empty
    /// trailing section; a non-empty model targets its last section. An
    /// explicit `section` must be a valid index.
    ///
    /// # Panics
    ///
    /// Panics if an explicitly given `section` is out of range.
    pub fn append_item(&mut self, slot: ItemSlot<F>, section: Option<usize>) -> SlotIndex {
        if self.sections.is_empty() && section.is_none() {
            self.sections.push(Section::new());
        }
        let target = section.unwrap_or_else(|| self.sections.len() - 1);
        let contents = &mut self.sections[target];
        contents.append(slot);
        SlotIndex::new(target, contents.len() - 1)
    }

    /// Appends one item per model, all rendered through the view type `C`,
    /// returning the positions in input order.
    ///
    /// Every item lands in the same section: the explicit `section` if
    /// given, otherwise the section that was (or became) last when the
    /// call began. An empty `models` performs no mutation at all.
    ///
    /// # Panics
    ///
    /// Panics if an explicitly given `section` is out of range and
    /// `models` is non-empty.
    pub fn append_models<C>(
        &mut self,
        models: impl IntoIterator<Item = C::Model>,
        section: Option<usize>,
    ) -> Vec<SlotIndex>
    where
        C: BindableView<F>,
    {
        models
            .into_iter()
            .map(|model| self.append_item(ItemSlot::new::<C>(model), section))
            .collect()
    }

    /// Inserts an item at `index`, shifting subsequent items in that
    /// section right.
    ///
    /// `index.item` may equal the section's length, which appends.
    ///
    /// # Panics
    ///
    /// Panics if `index.section` is out of range or `index.item` is past
    /// the section's length.
    pub fn insert_item(&mut self, slot: ItemSlot<F>, index: SlotIndex) {
        self.sections[index.section].insert(index.item, slot);
    }

    // ---- Item removal --------------------------------------------------

    /// Removes and returns the item at `index`, shifting subsequent items
    /// in that section left.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range in either dimension.
    pub fn remove_item(&mut self, index: SlotIndex) -> ItemSlot<F> {
        self.sections[index.section].remove(index.item)
    }

    /// Removes the items at the given positions, returning them.
    ///
    /// Duplicate positions are removed once. Removal happens in descending
    /// `(section, item)` order so earlier removals never shift a
    /// not-yet-removed position; the returned slots are in that removal
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if any position is out of range.
    pub fn remove_items(
        &mut self,
        indices: impl IntoIterator<Item = SlotIndex>,
    ) -> Vec<ItemSlot<F>> {
        let mut indices: Vec<SlotIndex> = indices.into_iter().collect();
        indices.sort_unstable_by(|a, b| b.cmp(a));
        indices.dedup();
        indices
            .into_iter()
            .map(|index| self.remove_item(index))
            .collect()
    }

    /// Removes every item of one section. Decoratives are unaffected.
    ///
    /// `keep_capacity` is a storage-reuse hint, as in
    /// [`Section::remove_all`].
    ///
    /// # Panics
    ///
    /// Panics if `section` is out of range.
    pub fn remove_all_items(&mut self, section: usize, keep_capacity: bool) {
        self.sections[section].remove_all(keep_capacity);
    }

    /// Removes every item rendered through the view type `C`, returning
    /// the positions they occupied before removal, in ascending order.
    pub fn remove_all_matching<C>(&mut self) -> Vec<SlotIndex>
    where
        C: BindableView<F>,
    {
        let found = self.find::<C>();
        self.remove_items(found.iter().copied());
        found
    }

    // ---- Search --------------------------------------------------------

    /// Returns every position whose item renders through the view type
    /// `C`, in ascending order.
    pub fn find<C>(&self) -> Vec<SlotIndex>
    where
        C: BindableView<F>,
    {
        self.sections
            .iter()
            .enumerate()
            .flat_map(|(section, contents)| {
                contents
                    .find::<C>()
                    .into_iter()
                    .map(move |item| SlotIndex::new(section, item))
            })
            .collect()
    }
}

impl<F: ViewFamily> Default for SectionedModel<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ViewFamily> Clone for SectionedModel<F> {
    fn clone(&self) -> Self {
        Self {
            sections: self.sections.clone(),
        }
    }
}

impl<F: ViewFamily> fmt::Debug for SectionedModel<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionedModel")
            .field("sections", &self.sections)
            .finish()
    }
}

impl<F: ViewFamily> Index<usize> for SectionedModel<F> {
    type Output = Section<F>;

    /// Panics if `section` is out of range.
    fn index(&self, section: usize) -> &Self::Output {
        &self.sections[section]
    }
}

impl<F: ViewFamily> IndexMut<usize> for SectionedModel<F> {
    fn index_mut(&mut self, section: usize) -> &mut Self::Output {
        &mut self.sections[section]
    }
}

impl<F: ViewFamily> Index<SlotIndex> for SectionedModel<F> {
    type Output = ItemSlot<F>;

    /// Panics if `index` is out of range in either dimension.
    fn index(&self, index: SlotIndex) -> &Self::Output {
        &self.sections[index.section][index.item]
    }
}

impl<F: ViewFamily> IndexMut<SlotIndex> for SectionedModel<F> {
    fn index_mut(&mut self, index: SlotIndex) -> &mut Self::Output {
        &mut self.sections[index.section][index.item]
    }
}

impl<F: ViewFamily> IntoIterator for SectionedModel<F> {
    type Item = Section<F>;
    type IntoIter = std::vec::IntoIter<Section<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.into_iter()
    }
}

impl<'a, F: ViewFamily> IntoIterator for &'a SectionedModel<F> {
    type Item = &'a Section<F>;
    type IntoIter = std::slice::Iter<'a, Section<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, F: ViewFamily> IntoIterator for &'a mut SectionedModel<F> {
    type Item = &'a mut Section<F>;
    type IntoIter = std::slice::IterMut<'a, Section<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<F: ViewFamily> Extend<Section<F>> for SectionedModel<F> {
    fn extend<I: IntoIterator<Item = Section<F>>>(&mut self, iter: I) {
        self.sections.extend(iter);
    }
}

impl<F: ViewFamily> FromIterator<Section<F>> for SectionedModel<F> {
    fn from_iter<I: IntoIterator<Item = Section<F>>>(iter: I) -> Self {
        Self {
            sections: iter.into_iter().collect(),
        }
    }
}

static_assertions::assert_impl_all!(SectionedModel<crate::view::ListView>: Send, Sync);
static_assertions::assert_impl_all!(SectionedModel<crate::view::GridView>: Send, Sync);
