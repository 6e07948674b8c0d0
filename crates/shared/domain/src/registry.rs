//! Type-erased registry entries for feature slices.
//!
//! Each enabled feature initializes once at startup and hands its state over
//! as an [`InitializedSlice`], letting the API state carry every slice in one
//! map without naming the concrete types.

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Marker trait for feature state that can be shared across threads.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}

/// A feature's state after initialization, erased to its slice type.
#[derive(Debug)]
pub struct InitializedSlice {
    id: TypeId,
    name: &'static str,
    state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    /// Wraps a concrete slice state for registration.
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            state: Box::new(state),
        }
    }

    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name of the slice, for diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Recovers the concrete slice type, if this entry holds a `T`.
    #[must_use]
    pub fn downcast_ref<T: FeatureSlice>(&self) -> Option<&T> {
        self.state.as_any().downcast_ref()
    }
}
