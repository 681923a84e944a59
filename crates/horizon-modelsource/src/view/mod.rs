//! View-side abstractions: families, reuse keys, bindable view types, and
//! the host capability surface.
//!
//! Nothing in this module renders. It defines the vocabulary the model
//! layer and a host widget agree on: which widget family is being served
//! ([`ViewFamily`]), how view instances are pooled ([`ReuseKey`],
//! [`ReuseView`]), what a concrete view type declares about itself
//! ([`BindableView`]), and what the host must be able to do ([`ViewHost`]).

mod bindable;
mod family;
mod host;
mod reuse;

pub use bindable::{BindableView, ViewOrigin};
pub use family::{DecorativeKind, GridView, ListView, Size, ViewFamily};
pub use host::ViewHost;
pub use reuse::{ReuseKey, ReuseView};

pub(crate) use reuse::short_type_name;
