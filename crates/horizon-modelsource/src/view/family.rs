//! Widget families and their sizing/decorative vocabularies.
//!
//! A [`ViewFamily`] describes one kind of host widget: the erased view
//! object types it recycles, the dimension type its layout understands, and
//! the decorative kinds it can place around a section. Two families cover
//! the common widgets:
//!
//! - [`ListView`] for row lists: cells size by a fixed row height (`f32`).
//! - [`GridView`] for grids: cells size by a two-dimensional [`Size`].
//!
//! The family is a compile-time parameter only; it carries no data. Every
//! container and adapter in this crate is generic over it, so a model built
//! for a list cannot be handed to a grid adapter by accident.

use std::fmt;
use std::hash::Hash;

use super::reuse::ReuseView;

/// Compile-time description of a host widget kind.
///
/// Implementations are empty marker types. The associated types tie the
/// whole stack together: slots capture assign closures against
/// `Self::Cell`, adapters dequeue `Box<Self::Cell>` from hosts, and sizing
/// queries answer in `Self::Dimension`.
pub trait ViewFamily: 'static {
    /// The erased cell view object type handed out by hosts.
    type Cell: ReuseView + ?Sized;

    /// The erased decorative view object type (headers, footers).
    type Decorative: ReuseView + ?Sized;

    /// The dimension a fixed-size declaration is expressed in.
    type Dimension: Copy + PartialEq + fmt::Debug + Send + Sync + 'static;

    /// The space of decorative positions around a section.
    type DecorativeKind: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static;
}

/// Family for row-list widgets. Cells size by row height.
pub enum ListView {}

impl ViewFamily for ListView {
    type Cell = dyn ReuseView;
    type Decorative = dyn ReuseView;
    type Dimension = f32;
    type DecorativeKind = DecorativeKind;
}

/// Family for grid widgets. Cells size in two dimensions.
pub enum GridView {}

impl ViewFamily for GridView {
    type Cell = dyn ReuseView;
    type Decorative = dyn ReuseView;
    type Dimension = Size;
    type DecorativeKind = DecorativeKind;
}

/// A width/height pair for grid cell sizing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// A size with zero width and height.
    pub const ZERO: Size = Size::new(0.0, 0.0);

    /// Creates a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Decorative positions a section supports.
///
/// Hosts address these through native string identifiers; [`native`] and
/// [`from_native`] convert between the two vocabularies. Identifiers
/// outside the known set map to `None`, which hosts must treat as "no
/// decorative here".
///
/// [`native`]: DecorativeKind::native
/// [`from_native`]: DecorativeKind::from_native
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecorativeKind {
    /// Shown above the section's items.
    Header,
    /// Shown below the section's items.
    Footer,
}

impl DecorativeKind {
    /// Every kind, in display order.
    pub const ALL: [DecorativeKind; 2] = [DecorativeKind::Header, DecorativeKind::Footer];

    /// Returns the host-native string identifier for this kind.
    #[inline]
    pub const fn native(self) -> &'static str {
        match self {
            DecorativeKind::Header => "section-header",
            DecorativeKind::Footer => "section-footer",
        }
    }

    /// Parses a host-native string identifier.
    ///
    /// Returns `None` for identifiers this crate does not know, so hosts
    /// with richer decorative vocabularies degrade gracefully.
    pub fn from_native(identifier: &str) -> Option<Self> {
        match identifier {
            "section-header" => Some(DecorativeKind::Header),
            "section-footer" => Some(DecorativeKind::Footer),
            _ => None,
        }
    }
}

impl fmt::Display for DecorativeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.native())
    }
}
