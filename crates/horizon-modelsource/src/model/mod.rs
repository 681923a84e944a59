//! The sectioned model: typed content behind list and grid widgets.
//!
//! This module provides the data half of the model/view split. An
//! application describes *what* to display as plain model values paired
//! with the view types that render them; the widget layer asks for that
//! content one position at a time. Keeping the two apart enables:
//!
//! - Content mutation without touching view code
//! - One model shared by several presentations
//! - Cheap snapshots of display state via `clone`
//! - View recycling driven by per-slot reuse keys
//!
//! # Core Types
//!
//! - `SlotIndex`: A two-dimensional position, section then item
//! - `ItemSlot`: One item's model value bound to its view type
//! - `DecorativeSlot`: A section-level accessory such as a header
//! - `Section`: An ordered run of items plus keyed decoratives
//! - `SectionedModel`: The ordered sequence of sections
//!
//! # Example
//!
//! ```no_run
//! use horizon_modelsource::model::{ItemSlot, SectionedModel, SlotIndex};
//! use horizon_modelsource::view::{BindableView, ListView, ViewOrigin};
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
//! // The first append creates section 0.
//! let index = model.append_item(ItemSlot::new::<NameCell>("Ada".into()), None);
//! assert_eq!(index, SlotIndex::new(0, 0));
//!
//! // Populate the rest of the section in one call.
//! model.append_models::<NameCell>(["Grace".into(), "Edsger".into()], None);
//! assert_eq!(model[0].len(), 3);
//!
//! // Positions survive until a mutation shifts them.
//! let removed = model.remove_item(SlotIndex::new(0, 1));
//! assert_eq!(removed.model::<String>(), Some(&"Grace".to_string()));
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! ┌───────────────────┐      ┌──────────────┐      ┌──────────────┐
//! │  SectionedModel   │─────>│   Section    │─────>│   ItemSlot   │
//! │  (display order)  │ 0..n │ items +      │ 0..n │ model value  │
//! └───────────────────┘      │ decoratives  │      │ + view type  │
//!           ▲                └──────────────┘      └──────────────┘
//!           │                        ▼
//!   ┌─────────────────┐      ┌────────────────┐
//!   │    SlotIndex    │      │ DecorativeSlot │
//!   │ (section, item) │      │ (one per kind) │
//!   └─────────────────┘      └────────────────┘
//! ```
//!
//! Mutations address positions with [`SlotIndex`]; bulk removals are
//! applied in descending order so the caller can pass positions captured
//! before the call without adjusting them.

mod decorative;
mod index;
mod item;
mod section;
mod sectioned_model;

pub use decorative::DecorativeSlot;
pub use index::SlotIndex;
pub use item::ItemSlot;
pub use section::Section;
pub use sectioned_model::SectionedModel;
