use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Type-erased state payload held at a store path.
///
/// Wraps the concrete state struct in an `Arc<dyn Any>`, so reads hand out
/// Arc clones instead of copying the state itself. Callers recover the
/// concrete type with [`Value::downcast_ref`].
///
/// # Example
///
/// ```ignore
/// let v = Value::new(SearchState::default());
/// assert!(v.is::<SearchState>());
/// let state = v.downcast_ref::<SearchState>().unwrap();
/// ```
#[derive(Clone)]
pub struct Value {
    inner: Arc<dyn Any + Send + Sync>,
}

impl Value {
    /// Wrap a concrete state value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }

    /// Borrow the payload as `T`, or `None` if the type differs.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Whether the payload is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// `TypeId` of the wrapped payload.
    pub fn type_id(&self) -> TypeId {
        (*self.inner).type_id()
    }

    /// Number of live Arc references to this payload.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({:?})", self.type_id())
    }
}

/// Handle returned by `Store::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}
