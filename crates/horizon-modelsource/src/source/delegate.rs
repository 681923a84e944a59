//! Delegate hooks for per-position customization and editing.
//!
//! A [`DataSource`](super::DataSource) can materialize and size views
//! entirely from its model, but some decisions belong to the embedding
//! application: final cell touch-up, reordering policy, and what an edit
//! gesture commits. Those land here.
//!
//! # Architecture
//!
//! - **Model**: Owns the content, a [`SectionedModel`](crate::model::SectionedModel)
//! - **Source**: Feeds a host widget one position at a time
//! - **Delegate**: Application hooks consulted during feeding and editing
//!
//! Every hook has a default, so a delegate implements only what it cares
//! about:
//!
//! ```ignore
//! struct ContactDelegate;
//!
//! impl DataSourceDelegate<ListView> for ContactDelegate {
//!     fn prepare_cell(&self, cell: &mut dyn ReuseView, index: SlotIndex) {
//!         // Final adjustments after the model value is applied.
//!     }
//!
//!     fn can_edit_item(&self, _index: SlotIndex) -> bool {
//!         true
//!     }
//!
//!     fn commit_edit(&self, index: SlotIndex, operation: EditOperation) {
//!         // Mirror the edit into application state.
//!     }
//! }
//! ```

use crate::model::SlotIndex;
use crate::view::ViewFamily;

/// The edit a host widget asks to commit for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOperation {
    /// Insert a new item at the position.
    Insert,
    /// Delete the item at the position.
    Delete,
}

/// Application hooks a [`DataSource`](super::DataSource) consults while
/// feeding a host widget.
///
/// All methods have no-op or refusing defaults. Implementations are
/// shared behind an `Arc`, so hooks take `&self`; a delegate that
/// mutates application state does its own interior locking.
pub trait DataSourceDelegate<F: ViewFamily>: Send + Sync {
    /// Called after a cell has received its model value and before it is
    /// handed to the host.
    fn prepare_cell(&self, _cell: &mut F::Cell, _index: SlotIndex) {}

    /// Called after a decorative view has received its model value and
    /// before it is handed to the host.
    fn prepare_decorative(
        &self,
        _view: &mut F::Decorative,
        _section: usize,
        _kind: F::DecorativeKind,
    ) {
    }

    /// Whether the item at `index` may be picked up for reordering.
    ///
    /// Defaults to `false`.
    fn can_move_item(&self, _index: SlotIndex) -> bool {
        false
    }

    /// Called when the host widget has moved an item.
    ///
    /// The source's model still holds its original order; applying the
    /// move is left to the delegate.
    fn move_item(&self, _from: SlotIndex, _to: SlotIndex) {}

    /// Whether the item at `index` may be edited by host gestures.
    ///
    /// Defaults to `false`.
    fn can_edit_item(&self, _index: SlotIndex) -> bool {
        false
    }

    /// Called when the host widget commits an edit gesture.
    fn commit_edit(&self, _index: SlotIndex, _operation: EditOperation) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ListView;

    struct PassiveDelegate;

    impl DataSourceDelegate<ListView> for PassiveDelegate {}

    #[test]
    fn test_defaults_refuse_interaction() {
        let delegate = PassiveDelegate;
        assert!(!delegate.can_move_item(SlotIndex::new(0, 0)));
        assert!(!delegate.can_edit_item(SlotIndex::new(0, 0)));
    }

    #[test]
    fn test_defaults_are_no_ops() {
        let delegate = PassiveDelegate;
        delegate.move_item(SlotIndex::new(0, 0), SlotIndex::new(1, 0));
        delegate.commit_edit(SlotIndex::new(0, 0), EditOperation::Delete);
    }

    #[test]
    fn test_edit_operation_is_comparable() {
        assert_eq!(EditOperation::Insert, EditOperation::Insert);
        assert_ne!(EditOperation::Insert, EditOperation::Delete);
    }
}
