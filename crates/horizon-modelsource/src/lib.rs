//! Sectioned model/view data sources for list and grid widgets.
//!
//! This crate provides the data layer of a model/view split for
//! collection-style widgets:
//!
//! - **Slots**: Type-erased pairings of a model value with the view type
//!   that renders it (`ItemSlot`, `DecorativeSlot`)
//! - **Sectioned Model**: A two-dimensional container of slots with a
//!   full mutation and query algebra (`SectionedModel`, `Section`,
//!   `SlotIndex`)
//! - **View Contract**: What a renderable view declares and what a host
//!   widget provides (`BindableView`, `ViewHost`, `ReuseKey`)
//! - **Data Sources**: Adapters that feed a model to a host one position
//!   at a time, with delegate hooks for preparation and editing
//!   (`DataSource`, `DataSourceDelegate`)
//!
//! The same model types serve both single-column lists and
//! two-dimensional grids; the [`ViewFamily`] parameter selects the
//! widget family and with it the sizing type and the dequeued view type.
//!
//! # Building a Model
//!
//! ```
//! use horizon_modelsource::{BindableView, ListView, SectionedModel, SlotIndex, ViewOrigin};
//!
//! #[derive(Default)]
//! struct NameCell {
//!     name: Option<String>,
//! }
//!
//! impl BindableView<ListView> for NameCell {
//!     type Model = String;
//!
//!     fn origin() -> ViewOrigin {
//!         ViewOrigin::Code
//!     }
//!
//!     fn set_model(&mut self, model: String) {
//!         self.name = Some(model);
//!     }
//! }
//!
//! let mut model = SectionedModel::<ListView>::new();
//!
//! // Appending into an empty model creates section 0 on demand.
//! let positions = model.append_models::<NameCell>(
//!     ["Ada".to_string(), "Grace".to_string()],
//!     None,
//! );
//! assert_eq!(positions, [SlotIndex::new(0, 0), SlotIndex::new(0, 1)]);
//!
//! // Slots know which view type they bind to.
//! assert_eq!(model.find::<NameCell>().len(), 2);
//! assert_eq!(model[SlotIndex::new(0, 1)].model::<String>(), Some(&"Grace".to_string()));
//! ```
//!
//! # Feeding a Host
//!
//! A host widget registers view types up front, then drives a
//! [`DataSource`] during layout:
//!
//! ```ignore
//! host.register_view::<NameCell>();
//!
//! let mut source = ListViewDataSource::from(model);
//! for section in 0..source.section_count() {
//!     for item in 0..source.item_count(section) {
//!         let cell = source.materialize_cell(&mut host, SlotIndex::new(section, item));
//!         // hand `cell` to the host's layout
//!     }
//! }
//! ```
//!
//! Materialization failures follow a strict policy: addressing a
//! position that does not exist or dequeuing an unregistered reuse key
//! panics, while a host returning a view of the wrong concrete type is
//! logged through `tracing` and the view is returned unbound.

pub mod model;
pub mod prelude;
pub mod source;
pub mod view;

pub use model::{DecorativeSlot, ItemSlot, Section, SectionedModel, SlotIndex};
pub use source::{
    DataSource, DataSourceDelegate, EditOperation, GridViewDataSource, ListViewDataSource,
};
pub use view::{
    BindableView, DecorativeKind, GridView, ListView, ReuseKey, ReuseView, Size, ViewFamily,
    ViewHost, ViewOrigin,
};
