//! One row group: an ordered run of item slots plus keyed decoratives.

use std::collections::HashMap;
use std::fmt;
use std::ops::{Index, IndexMut, RangeBounds};

use super::decorative::DecorativeSlot;
use super::item::ItemSlot;
use crate::view::{BindableView, ViewFamily};

/// An ordered sequence of [`ItemSlot`]s plus at most one [`DecorativeSlot`]
/// per decorative kind.
///
/// Insertion order is row order. A section with no items and no
/// decoratives is a valid placeholder; [`SectionedModel`] creates such
/// sections when content is appended to an empty collection.
///
/// Positions shift on insertion and removal exactly as they do in a
/// `Vec`; callers holding positions across mutations must refresh them.
///
/// [`SectionedModel`]: crate::model::SectionedModel
pub struct Section<F: ViewFamily> {
    items: Vec<ItemSlot<F>>,
    decoratives: HashMap<F::DecorativeKind, DecorativeSlot<F>>,
}

impl<F: ViewFamily> Section<F> {
    /// Creates an empty section.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            decoratives: HashMap::new(),
        }
    }

    /// Adds items to the section, preserving their order.
    pub fn with_items(mut self, items: impl IntoIterator<Item = ItemSlot<F>>) -> Self {
        self.items.extend(items);
        self
    }

    /// Adds a decorative of the given kind, replacing any existing one.
    pub fn with_decorative(mut self, kind: F::DecorativeKind, slot: DecorativeSlot<F>) -> Self {
        self.decoratives.insert(kind, slot);
        self
    }

    /// Returns the number of items. Decoratives do not count.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the section holds no items.
    ///
    /// Decoratives are not considered; a section can be item-empty while
    /// still carrying a header.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item storage capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Returns the item at `position`, or `None` if out of range.
    #[inline]
    pub fn get(&self, position: usize) -> Option<&ItemSlot<F>> {
        self.items.get(position)
    }

    /// Returns the item at `position` mutably, or `None` if out of range.
    #[inline]
    pub fn get_mut(&mut self, position: usize) -> Option<&mut ItemSlot<F>> {
        self.items.get_mut(position)
    }

    /// Returns the first item, if any.
    #[inline]
    pub fn first(&self) -> Option<&ItemSlot<F>> {
        self.items.first()
    }

    /// Returns the last item, if any.
    #[inline]
    pub fn last(&self) -> Option<&ItemSlot<F>> {
        self.items.last()
    }

    /// Iterates over the items in row order.
    pub fn iter(&self) -> std::slice::Iter<'_, ItemSlot<F>> {
        self.items.iter()
    }

    /// Iterates mutably over the items in row order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, ItemSlot<F>> {
        self.items.iter_mut()
    }

    /// Appends an item at the end of the section.
    pub fn append(&mut self, item: ItemSlot<F>) {
        self.items.push(item);
    }

    /// Inserts an item at `position`, shifting subsequent items right.
    ///
    /// `position == len()` is equivalent to [`append`].
    ///
    /// # Panics
    ///
    /// Panics if `position > len()`.
    ///
    /// [`append`]: Section::append
    pub fn insert(&mut self, position: usize, item: ItemSlot<F>) {
        self.items.insert(position, item);
    }

    /// Removes and returns the item at `position`, shifting subsequent
    /// items left.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()`.
    pub fn remove(&mut self, position: usize) -> ItemSlot<F> {
        self.items.remove(position)
    }

    /// Replaces the items in `range` with `replace_with`.
    ///
    /// The replacement need not match the range's length: an empty range
    /// is a pure insertion, an empty replacement a pure removal.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds or inverted.
    pub fn replace_range<R, I>(&mut self, range: R, replace_with: I)
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = ItemSlot<F>>,
    {
        self.items.splice(range, replace_with);
    }

    /// Removes every item. Decoratives are unaffected.
    ///
    /// `keep_capacity` is a storage-reuse hint: when `false` the backing
    /// storage is also released.
    pub fn remove_all(&mut self, keep_capacity: bool) {
        self.items.clear();
        if !keep_capacity {
            self.items.shrink_to_fit();
        }
    }

    /// Returns every position whose item renders through the view type
    /// `C`, in ascending order.
    pub fn find<C>(&self) -> Vec<usize>
    where
        C: BindableView<F>,
    {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_view::<C>())
            .map(|(position, _)| position)
            .collect()
    }

    /// Returns the decorative of the given kind, if set.
    #[inline]
    pub fn decorative(&self, kind: F::DecorativeKind) -> Option<&DecorativeSlot<F>> {
        self.decoratives.get(&kind)
    }

    /// Returns the decorative of the given kind mutably, if set.
    #[inline]
    pub fn decorative_mut(&mut self, kind: F::DecorativeKind) -> Option<&mut DecorativeSlot<F>> {
        self.decoratives.get_mut(&kind)
    }

    /// Sets the decorative of the given kind, returning the replaced slot.
    pub fn set_decorative(
        &mut self,
        kind: F::DecorativeKind,
        slot: DecorativeSlot<F>,
    ) -> Option<DecorativeSlot<F>> {
        self.decoratives.insert(kind, slot)
    }

    /// Removes and returns the decorative of the given kind, if set.
    pub fn remove_decorative(&mut self, kind: F::DecorativeKind) -> Option<DecorativeSlot<F>> {
        self.decoratives.remove(&kind)
    }

    /// Iterates over the kinds that currently have a decorative set.
    ///
    /// The order is unspecified.
    pub fn decorative_kinds(&self) -> impl Iterator<Item = F::DecorativeKind> + '_ {
        self.decoratives.keys().copied()
    }
}

impl<F: ViewFamily> Default for Section<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ViewFamily> Clone for Section<F> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            decoratives: self.decoratives.clone(),
        }
    }
}

impl<F: ViewFamily> fmt::Debug for Section<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("items", &self.items)
            .field("decoratives", &self.decoratives)
            .finish()
    }
}

impl<F: ViewFamily> Index<usize> for Section<F> {
    type Output = ItemSlot<F>;

    fn index(&self, position: usize) -> &Self::Output {
        &self.items[position]
    }
}

impl<F: ViewFamily> IndexMut<usize> for Section<F> {
    fn index_mut(&mut self, position: usize) -> &mut Self::Output {
        &mut self.items[position]
    }
}

impl<F: ViewFamily> IntoIterator for Section<F> {
    type Item = ItemSlot<F>;
    type IntoIter = std::vec::IntoIter<ItemSlot<F>>;

    /// Consumes the section, iterating its items. Decoratives are dropped.
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, F: ViewFamily> IntoIterator for &'a Section<F> {
    type Item = &'a ItemSlot<F>;
    type IntoIter = std::slice::Iter<'a, ItemSlot<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, F: ViewFamily> IntoIterator for &'a mut Section<F> {
    type Item = &'a mut ItemSlot<F>;
    type IntoIter = std::slice::IterMut<'a, ItemSlot<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<F: ViewFamily> Extend<ItemSlot<F>> for Section<F> {
    fn extend<I: IntoIterator<Item = ItemSlot<F>>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<F: ViewFamily> FromIterator<ItemSlot<F>> for Section<F> {
    fn from_iter<I: IntoIterator<Item = ItemSlot<F>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            decoratives: HashMap::new(),
        }
    }
}
