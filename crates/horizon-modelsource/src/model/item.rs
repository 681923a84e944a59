//! The item slot: one type-erased (model, view type) pairing.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use crate::view::{BindableView, ReuseKey, ReuseView, ViewFamily};

/// One cell's (model, view type) pairing inside a section.
///
/// A slot erases the concrete model and view types so heterogeneous rows
/// can live in one container, while keeping enough captured type
/// information to rebind the model onto a freshly materialized view later.
/// Slots are immutable after construction and cheap to clone; replacing a
/// row means writing a new slot over the old one.
///
/// # Example
///
/// ```ignore
/// let slot = ItemSlot::<ListView>::new::<TitleCell>("Overview".to_string());
/// assert_eq!(slot.reuse_key().as_str(), "TitleCell");
/// ```
pub struct ItemSlot<F: ViewFamily> {
    /// The erased model value.
    model: Arc<dyn Any + Send + Sync>,
    /// Identity of the concrete view type.
    view_type: TypeId,
    /// The view type's name, for diagnostics.
    view_name: &'static str,
    /// Pooling key the host materializes this slot's view by.
    reuse_key: ReuseKey,
    /// Fixed display size, when the view type declares one.
    size: Option<F::Dimension>,
    /// Captured downcast-and-assign operation.
    assign: Arc<dyn Fn(&mut F::Cell) -> bool + Send + Sync>,
}

impl<F: ViewFamily> ItemSlot<F> {
    /// Creates a slot pairing `model` with the view type `C`.
    ///
    /// The slot captures `C`'s reuse key and static size at this point;
    /// later changes to what the host has registered do not affect it.
    pub fn new<C>(model: C::Model) -> Self
    where
        C: BindableView<F>,
    {
        let model = Arc::new(model);
        let captured = Arc::clone(&model);
        let assign: Arc<dyn Fn(&mut F::Cell) -> bool + Send + Sync> = Arc::new(move |view| {
            match view.as_any_mut().downcast_mut::<C>() {
                Some(view) => {
                    view.set_model((*captured).clone());
                    true
                }
                None => false,
            }
        });
        Self {
            model,
            view_type: TypeId::of::<C>(),
            view_name: crate::view::short_type_name::<C>(),
            reuse_key: C::reuse_key(),
            size: C::static_size(),
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

    /// Returns `true` if this slot renders through the view type `C`.
    #[inline]
    pub fn is_view<C: BindableView<F>>(&self) -> bool {
        self.view_type == TypeId::of::<C>()
    }

    /// Returns the stored model, if it is of type `M`.
    pub fn model<M: Any>(&self) -> Option<&M> {
        self.model.downcast_ref::<M>()
    }

    /// Applies the stored model to a materialized view instance.
    ///
    /// Returns `false` when `view` is not concretely of this slot's view
    /// type, leaving the instance untouched. That outcome signals a wiring
    /// fault in the adapter or host registration, not a data error, and is
    /// deliberately non-fatal.
    pub fn assign(&self, view: &mut F::Cell) -> bool {
        (self.assign)(view)
    }
}

impl<F: ViewFamily> Clone for ItemSlot<F> {
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

impl<F: ViewFamily> fmt::Debug for ItemSlot<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemSlot")
            .field("view", &self.view_name)
            .field("reuse_key", &self.reuse_key)
            .field("size", &self.size)
            .finish()
    }
}
