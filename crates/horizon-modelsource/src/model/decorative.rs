//! The decorative slot: a section adornment's (model, view type) pairing.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use crate::view::{BindableView, ReuseKey, ReuseView, ViewFamily};

/// A section-level adornment (header, footer) paired with its model.
///
/// Shares the shape of [`ItemSlot`] but is addressed by `(section, kind)`
/// rather than by position, and its assign operation targets the family's
/// decorative view object type. A section holds at most one slot per kind.
///
/// [`ItemSlot`]: crate::model::ItemSlot
pub struct DecorativeSlot<F: ViewFamily> {
    model: Arc<dyn Any + Send + Sync>,
    view_type: TypeId,
    view_name: &'static str,
    reuse_key: ReuseKey,
    size: Option<F::Dimension>,
    assign: Arc<dyn Fn(&mut F::Decorative) -> bool + Send + Sync>,
}

impl<F: ViewFamily> DecorativeSlot<F> {
    /// Creates a slot pairing `model` with the decorative view type `D`.
    pub fn new<D>(model: D::Model) -> Self
    where
        D: BindableView<F>,
    {
        let model = Arc::new(model);
        let captured = Arc::clone(&model);
        let assign: Arc<dyn Fn(&mut F::Decorative) -> bool + Send + Sync> = Arc::new(move |view| {
            match view.as_any_mut().downcast_mut::<D>() {
                Some(view) => {
                    view.set_model((*captured).clone());
                    true
                }
                None => false,
            }
        });
        Self {
            model,
            view_type: TypeId::of::<D>(),
            view_name: crate::view::short_type_name::<D>(),
            reuse_key: D::reuse_key(),
            size: D::static_size(),
            assign,
        }
    }

    /// Returns the pooling key for this slot's view type.
    #[inline]
    pub fn reuse_key(&self) -> &ReuseKey {
        &self.reuse_key
    }

    /// Returns the fixed display size, or `None` for dynamic measurement.
    #[inline]
    pub fn size(&self) -> Option<F::Dimension> {
        self.size
    }

    /// Returns the identity of the concrete view type.
    #[inline]
    pub fn view_type(&self) -> TypeId {
        self.view_type
    }

    /// Returns the view type's name without its module path.
    #[inline]
    pub fn view_name(&self) -> &'static str {
        self.view_name
    }

    /// Returns `true` if this slot renders through the view type `D`.
    #[inline]
    pub fn is_view<D: BindableView<F>>(&self) -> bool {
        self.view_type == TypeId::of::<D>()
    }

    /// Returns the stored model, if it is of type `M`.
    pub fn model<M: Any>(&self) -> Option<&M> {
        self.model.downcast_ref::<M>()
    }

    /// Applies the stored model to a materialized view instance.
    ///
    /// Returns `false` when `view` is not concretely of this slot's view
    /// type, leaving the instance untouched.
    pub fn assign(&self, view: &mut F::Decorative) -> bool {
        (self.assign)(view)
    }
}

impl<F: ViewFamily> Clone for DecorativeSlot<F> {
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
            view_type: self.view_type,
            view_name: self.view_name,
            reuse_key: self.reuse_key.clone(),
            size: self.size,
            assign: Arc::clone(&self.assign),
        }
    }
}

impl<F: ViewFamily> fmt::Debug for DecorativeSlot<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecorativeSlot")
            .field("view", &self.view_name)
            .field("reuse_key", &self.reuse_key)
            .field("size", &self.size)
            .finish()
    }
}
