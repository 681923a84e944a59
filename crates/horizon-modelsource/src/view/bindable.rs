//! The contract a concrete view type implements to receive models.
//!
//! A cell or decorative view participates in the model layer by declaring
//! which model type it displays and how a host should obtain instances of
//! it. The declaration is entirely static: slots capture it at construction
//! time, and no trait object of [`BindableView`] ever exists at runtime.

use std::any::Any;
use std::borrow::Cow;

use super::family::ViewFamily;
use super::reuse::ReuseKey;

/// Where a host obtains instances of a view type.
///
/// Hosts use this tag at registration time. `Code` views are constructed
/// programmatically, `Resource` views are inflated from a named resource
/// file, and `Layout` views were declared inside the host's own layout
/// definition and need no registration beyond bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViewOrigin {
    /// The host constructs the view in code.
    Code,
    /// The host inflates the view from the named resource file.
    Resource(Cow<'static, str>),
    /// The view is pre-registered in the host's layout definition.
    Layout,
}

impl ViewOrigin {
    /// Creates a resource origin from a file name.
    #[inline]
    pub fn resource(name: impl Into<Cow<'static, str>>) -> Self {
        ViewOrigin::Resource(name.into())
    }
}

/// A view type that can display models of one concrete type.
///
/// Implemented by cell and decorative view structs. The family parameter
/// pins which widget kind the view serves; a type may implement the trait
/// for several families when it renders in all of them.
///
/// # Example
///
/// ```ignore
/// struct TitleCell {
///     title: String,
/// }
///
/// impl BindableView<ListView> for TitleCell {
///     type Model = String;
///
///     fn origin() -> ViewOrigin {
///         ViewOrigin::Code
///     }
///
///     fn static_size() -> Option<f32> {
///         Some(44.0)
///     }
///
///     fn set_model(&mut self, model: String) {
///         self.title = model;
///     }
/// }
/// ```
pub trait BindableView<F: ViewFamily>: Any {
    /// The model type this view displays.
    type Model: Clone + Send + Sync + 'static;

    /// Where hosts obtain instances of this view type.
    fn origin() -> ViewOrigin;

    /// The pooling key for this view type.
    ///
    /// Defaults to the type's own name without its module path. Override
    /// when two view types would otherwise collide in one host, or when an
    /// external layout definition fixes the identifier.
    fn reuse_key() -> ReuseKey {
        ReuseKey::of::<Self>()
    }

    /// A fixed display size, if the view declares one.
    ///
    /// `None` means the host measures the view dynamically.
    fn static_size() -> Option<F::Dimension> {
        None
    }

    /// Applies a model to this view instance.
    fn set_model(&mut self, model: Self::Model);
}
