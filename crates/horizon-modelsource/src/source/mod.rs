//! Data sources: the binding layer between models and host widgets.
//!
//! A host widget never reads a [`SectionedModel`](crate::model::SectionedModel)
//! directly. It holds a [`DataSource`] and asks it position by position:
//! how many sections, how many items, give me the view for this slot.
//! The source answers by dequeuing a recycled view from the host,
//! applying the slot's model value, and consulting the optional
//! [`DataSourceDelegate`] for final preparation and interaction policy.
//!
//! # Core Types
//!
//! - `DataSource`: The adapter; owns a model, feeds a host
//! - `DataSourceDelegate`: Application hooks for preparation and editing
//! - `EditOperation`: What an edit gesture commits
//! - `ListViewDataSource` / `GridViewDataSource`: The two family aliases
//!
//! # Example
//!
//! ```ignore
//! let mut source = ListViewDataSource::new();
//! host.register_view::<NameCell>();
//! source.append_models::<NameCell>(names, None);
//!
//! // Driven by the host during layout:
//! for section in 0..source.section_count() {
//!     for item in 0..source.item_count(section) {
//!         let cell = source.materialize_cell(&mut host, SlotIndex::new(section, item));
//!         // hand `cell` to the host's layout
//!     }
//! }
//! ```

mod data_source;
mod delegate;

pub use data_source::{DataSource, GridViewDataSource, ListViewDataSource};
pub use delegate::{DataSourceDelegate, EditOperation};
