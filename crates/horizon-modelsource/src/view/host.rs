//! The capability surface a host widget provides to the adapters.
//!
//! The model layer never constructs views itself. It asks the host for one
//! by reuse key, and the host answers out of whatever pooling or recycling
//! machinery it maintains. This trait is the entire contract; rendering,
//! layout, and scroll behavior stay on the host's side of the line.

use super::bindable::{BindableView, ViewOrigin};
use super::family::ViewFamily;
use super::reuse::ReuseKey;

/// Registration and dequeue operations implemented by a host widget.
///
/// Registration must be idempotent per reuse key: registering the same key
/// twice is a no-op, not an error. Dequeue returns `None` when nothing was
/// registered for the key; the adapters treat that as a wiring fault and
/// panic, so hosts should never map a registered key to `None`.
pub trait ViewHost<F: ViewFamily> {
    /// Registers a cell reuse key with its origin.
    fn register_cell(&mut self, key: &ReuseKey, origin: &ViewOrigin);

    /// Registers a decorative reuse key for a kind, with its origin.
    fn register_decorative(&mut self, kind: F::DecorativeKind, key: &ReuseKey, origin: &ViewOrigin);

    /// Obtains a cell view instance for a registered key.
    ///
    /// Whether the instance is fresh or recycled is the host's policy.
    fn dequeue_cell(&mut self, key: &ReuseKey) -> Option<Box<F::Cell>>;

    /// Obtains a decorative view instance for a registered kind and key.
    fn dequeue_decorative(
        &mut self,
        kind: F::DecorativeKind,
        key: &ReuseKey,
    ) -> Option<Box<F::Decorative>>;

    /// Registers a cell view type, deriving key and origin from its
    /// [`BindableView`] declaration.
    fn register_view<C>(&mut self)
    where
        C: BindableView<F>,
        Self: Sized,
    {
        self.register_cell(&C::reuse_key(), &C::origin());
    }

    /// Registers a decorative view type for a kind, deriving key and origin
    /// from its [`BindableView`] declaration.
    fn register_decorative_view<D>(&mut self, kind: F::DecorativeKind)
    where
        D: BindableView<F>,
        Self: Sized,
    {
        self.register_decorative(kind, &D::reuse_key(), &D::origin());
    }
}
