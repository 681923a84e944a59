//! The adapter that feeds a sectioned model to a host widget.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use super::delegate::{DataSourceDelegate, EditOperation};
use crate::model::{SectionedModel, SlotIndex};
use crate::view::{GridView, ListView, ViewFamily, ViewHost};

/// Feeds a [`SectionedModel`] to a [`ViewHost`] one position at a time.
///
/// The source owns its model and dereferences to it, so the whole
/// mutation and query surface of [`SectionedModel`] is available
/// directly:
///
/// ```ignore
/// let mut source = ListViewDataSource::new();
/// source.append_models::<NameCell>(names, None);
/// let cell = source.materialize_cell(&mut host, SlotIndex::new(0, 0));
/// ```
///
/// Materialization dequeues a view from the host by the slot's reuse
/// key, applies the slot's model value, and lets the delegate touch the
/// view up. A dequeue that returns `None` is a wiring fault (the key was
/// never registered) and panics. A dequeued view of the wrong concrete
/// type cannot receive the model; the source logs a warning and hands
/// the view back unbound rather than feeding stale content to the host.
pub struct DataSource<F: ViewFamily> {
    model: SectionedModel<F>,
    delegate: Option<Arc<dyn DataSourceDelegate<F>>>,
}

/// A data source for single-column list widgets.
pub type ListViewDataSource = DataSource<ListView>;

/// A data source for two-dimensional grid widgets.
pub type GridViewDataSource = DataSource<GridView>;

impl<F: ViewFamily> DataSource<F> {
    /// Creates a source with an empty model and no delegate.
    pub fn new() -> Self {
        Self {
            model: SectionedModel::new(),
            delegate: None,
        }
    }

    /// Attaches a delegate, builder style.
    pub fn with_delegate(mut self, delegate: Arc<dyn DataSourceDelegate<F>>) -> Self {
        self.delegate = Some(delegate);
        self
    }

    /// Replaces or clears the delegate.
    pub fn set_delegate(&mut self, delegate: Option<Arc<dyn DataSourceDelegate<F>>>) {
        self.delegate = delegate;
    }

    /// Returns the attached delegate, if any.
    pub fn delegate(&self) -> Option<&Arc<dyn DataSourceDelegate<F>>> {
        self.delegate.as_ref()
    }

    /// Returns the model.
    #[inline]
    pub fn model(&self) -> &SectionedModel<F> {
        &self.model
    }

    /// Returns the model mutably.
    #[inline]
    pub fn model_mut(&mut self) -> &mut SectionedModel<F> {
        &mut self.model
    }

    // ---- Host-facing queries -------------------------------------------

    /// The number of sections the host should lay out.
    #[inline]
    pub fn section_count(&self) -> usize {
        self.model.len()
    }

    /// The number of items in `section`.
    ///
    /// # Panics
    ///
    /// Panics if `section` is out of range.
    #[inline]
    pub fn item_count(&self, section: usize) -> usize {
        self.model[section].len()
    }

    /// Dequeues, binds, and prepares the cell for the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range, or if no cell view was
    /// registered with the host for the slot's reuse key.
    pub fn materialize_cell<H>(&self, host: &mut H, index: SlotIndex) -> Box<F::Cell>
    where
        H: ViewHost<F>,
    {
        let slot = &self.model[index];
        let Some(mut cell) = host.dequeue_cell(slot.reuse_key()) else {
            panic!(
                "no cell view registered for reuse key `{}`",
                slot.reuse_key()
            );
        };
        if !slot.assign(&mut *cell) {
            tracing::warn!(
                target: "horizon_modelsource::source",
                "cell at {:?} rejected its model: dequeued view is not `{}`",
                index,
                slot.view_name()
            );
        }
        if let Some(delegate) = &self.delegate {
            delegate.prepare_cell(&mut *cell, index);
        }
        cell
    }

    /// Dequeues, binds, and prepares the decorative view of `kind` for
    /// `section`, or returns `None` if the section has no such slot.
    ///
    /// # Panics
    ///
    /// Panics if `section` is out of range, or if no decorative view was
    /// registered with the host for the slot's reuse key and kind.
    pub fn materialize_decorative<H>(
        &self,
        host: &mut H,
        section: usize,
        kind: F::DecorativeKind,
    ) -> Option<Box<F::Decorative>>
    where
        H: ViewHost<F>,
    {
        let slot = self.model.decorative(section, kind)?;
        let Some(mut view) = host.dequeue_decorative(kind, slot.reuse_key()) else {
            panic!(
                "no decorative view registered for reuse key `{}`",
                slot.reuse_key()
            );
        };
        if !slot.assign(&mut *view) {
            tracing::warn!(
                target: "horizon_modelsource::source",
                "decorative {:?} in section {} rejected its model: dequeued view is not `{}`",
                kind,
                section,
                slot.view_name()
            );
        }
        if let Some(delegate) = &self.delegate {
            delegate.prepare_decorative(&mut *view, section, kind);
        }
        Some(view)
    }

    /// The declared size of the item at `index`, if its view type
    /// declares one.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn item_size(&self, index: SlotIndex) -> Option<F::Dimension> {
        self.model[index].size()
    }

    /// The declared size of the decorative view of `kind` in `section`,
    /// if the slot exists and its view type declares one.
    ///
    /// # Panics
    ///
    /// Panics if `section` is out of range.
    pub fn decorative_size(&self, section: usize, kind: F::DecorativeKind) -> Option<F::Dimension> {
        self.model
            .decorative(section, kind)
            .and_then(|slot| slot.size())
    }

    // ---- Interaction passthroughs --------------------------------------

    /// Whether the host may pick up the item at `index` for reordering.
    ///
    /// Without a delegate the answer is `false`.
    pub fn can_move_item(&self, index: SlotIndex) -> bool {
        self.delegate
            .as_ref()
            .is_some_and(|delegate| delegate.can_move_item(index))
    }

    /// Forwards a host-reported item move to the delegate.
    ///
    /// The source does not reorder its model here; the delegate owns the
    /// decision of what the gesture means.
    pub fn move_item(&self, from: SlotIndex, to: SlotIndex) {
        if let Some(delegate) = &self.delegate {
            delegate.move_item(from, to);
        }
    }

    /// Whether the host may edit the item at `index`.
    ///
    /// Without a delegate the answer is `false`.
    pub fn can_edit_item(&self, index: SlotIndex) -> bool {
        self.delegate
            .as_ref()
            .is_some_and(|delegate| delegate.can_edit_item(index))
    }

    /// Forwards an edit commit to the delegate.
    ///
    /// The source does not mutate its model here; the delegate owns the
    /// decision of what the gesture means.
    pub fn commit_edit(&self, index: SlotIndex, operation: EditOperation) {
        if let Some(delegate) = &self.delegate {
            delegate.commit_edit(index, operation);
        }
    }
}

impl<F: ViewFamily> Default for DataSource<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ViewFamily> From<SectionedModel<F>> for DataSource<F> {
    fn from(model: SectionedModel<F>) -> Self {
        Self {
            model,
            delegate: None,
        }
    }
}

impl<F: ViewFamily> fmt::Debug for DataSource<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSource")
            .field("model", &self.model)
            .field("has_delegate", &self.delegate.is_some())
            .finish()
    }
}

impl<F: ViewFamily> Deref for DataSource<F> {
    type Target = SectionedModel<F>;

    fn deref(&self) -> &Self::Target {
        &self.model
    }
}

impl<F: ViewFamily> DerefMut for DataSource<F> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.model
    }
}

static_assertions::assert_impl_all!(ListViewDataSource: Send, Sync);
static_assertions::assert_impl_all!(GridViewDataSource: Send, Sync);
