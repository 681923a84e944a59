//! Reuse keys and downcasting support for pooled views.
//!
//! Hosts recycle view instances rather than rebuilding them on every display
//! pass. A [`ReuseKey`] is the stable identifier a pool is keyed by: every
//! view type contributes one, derived from the type's name unless the type
//! overrides it. [`ReuseView`] is the minimal capability the model layer
//! needs from a recycled view object: access to it as `dyn Any` so a stored
//! model can be re-applied through a checked downcast.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;

/// A stable identifier used to pool and recycle view instances by type.
///
/// Keys derived from the same view type always compare equal, which makes
/// registration idempotent on the host side. The default derivation strips
/// the module path from the type name, so `my_app::cells::TitleCell` and a
/// hypothetical `other::TitleCell` would collide; override
/// `BindableView::reuse_key` for one of them when both live in one host.
///
/// # Example
///
/// ```ignore
/// let key = ReuseKey::of::<TitleCell>();
/// assert_eq!(key.as_str(), "TitleCell");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ReuseKey(Cow<'static, str>);

impl ReuseKey {
    /// Creates a key from a fixed string.
    #[inline]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a key from an owned string.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Derives the default key for a view type.
    ///
    /// The key is the type's name without its module path. Generic
    /// parameters are kept, so distinct instantiations stay distinct.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self(Cow::Borrowed(short_type_name::<T>()))
    }

    /// Returns the key as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ReuseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReuseKey").field(&self.0).finish()
    }
}

impl fmt::Display for ReuseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strips the module path from a type name, keeping generic parameters.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    // Only the path segments before the first `<` belong to the type itself.
    let head = match full.find('<') {
        Some(position) => &full[..position],
        None => full,
    };
    match head.rfind("::") {
        Some(position) => &full[position + 2..],
        None => full,
    }
}

/// Downcasting surface for recycled view objects.
///
/// View families erase concrete view types behind this trait so one
/// container can hold slots for heterogeneous views. The blanket
/// implementation covers every `'static` type; concrete view structs get it
/// for free.
pub trait ReuseView: Any {
    /// Returns the view as `dyn Any` for checked downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns the view as mutable `dyn Any` for checked downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> ReuseView for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Checked downcasts on an erased view, mirroring those of [`dyn Any`].
///
/// Use these instead of calling `as_any` on a smart pointer: a
/// `Box<dyn ReuseView>` is itself a `'static` type and carries the blanket
/// implementation, so `boxed.as_any()` erases the box rather than the view.
/// The helpers always address the view.
///
/// [`dyn Any`]: std::any::Any
impl dyn ReuseView {
    /// Returns `true` if the erased view is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Returns the view as concrete type `T`, if it is one.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// Returns the view mutably as concrete type `T`, if it is one.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }
}
