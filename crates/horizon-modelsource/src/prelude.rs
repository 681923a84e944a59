//! Prelude module for Horizon ModelSource.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use horizon_modelsource::prelude::*;
//! ```
//!
//! This provides access to:
//! - The sectioned model (`SectionedModel`, `Section`, `SlotIndex`)
//! - Content slots (`ItemSlot`, `DecorativeSlot`)
//! - The view contract (`BindableView`, `ViewHost`, `ReuseKey`, `ReuseView`)
//! - Widget families (`ListView`, `GridView`, `Size`, `DecorativeKind`)
//! - Data sources (`DataSource`, `DataSourceDelegate`, `EditOperation`)

// ============================================================================
// Sectioned Model
// ============================================================================

pub use crate::model::{DecorativeSlot, ItemSlot, Section, SectionedModel, SlotIndex};

// ============================================================================
// View Contract
// ============================================================================

pub use crate::view::{BindableView, ReuseKey, ReuseView, ViewHost, ViewOrigin};

// ============================================================================
// Widget Families
// ============================================================================

pub use crate::view::{DecorativeKind, GridView, ListView, Size, ViewFamily};

// ============================================================================
// Data Sources
// ============================================================================

pub use crate::source::{
    DataSource, DataSourceDelegate, EditOperation, GridViewDataSource, ListViewDataSource,
};
