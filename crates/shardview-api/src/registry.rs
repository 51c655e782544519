//! The host's service registry.
//!
//! Plugins do not construct their collaborators; they look them up here at
//! enable time. Services are keyed by the trait-object type they are
//! registered under, so a lookup for `dyn BalanceService` finds whatever
//! implementation the economy plugin registered.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

/// Stored registry value: an `Arc<dyn Trait>` upcast to `Any` so the map can
/// hold arbitrary trait objects. Consumers downcast back in [`ServiceRegistry::get`].
type ServiceArc = Arc<dyn Any + Send + Sync>;

/// Type-keyed map of shared services, populated by the host.
///
/// Concurrent registration and lookup are both safe; the host typically
/// registers everything before enabling plugins, but nothing relies on that.
#[derive(Default)]
pub struct ServiceRegistry {
    services: RwLock<HashMap<TypeId, ServiceArc>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a service under its trait-object type.
    ///
    /// Registering a second service of the same type replaces the first.
    ///
    /// ```rust,ignore
    /// registry.register::<dyn BalanceService>(Arc::new(MyBank::new()));
    /// ```
    pub fn register<T>(&self, service: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.services
            .write()
            .insert(TypeId::of::<T>(), Arc::new(service));
        debug!(service = std::any::type_name::<T>(), "Registered service");
    }

    /// Looks up a service by its trait-object type.
    ///
    /// Returns `None` if nothing was registered under `T`.
    pub fn get<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + 'static,
    {
        self.services
            .read()
            .get(&TypeId::of::<T>())
            .and_then(|arc| arc.downcast_ref::<Arc<T>>().map(Arc::clone))
    }

    /// Returns the number of registered services.
    pub fn len(&self) -> usize {
        self.services.read().len()
    }

    /// Returns `true` if no services are registered.
    pub fn is_empty(&self) -> bool {
        self.services.read().is_empty()
    }
}

impl std::fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Greeter: Send + Sync {
        fn greet(&self) -> &'static str;
    }

    struct Hello;

    impl Greeter for Hello {
        fn greet(&self) -> &'static str {
            "hello"
        }
    }

    #[test]
    fn registered_service_is_found_by_trait_type() {
        let registry = ServiceRegistry::new();
        registry.register::<dyn Greeter>(Arc::new(Hello));

        let greeter = registry.get::<dyn Greeter>().unwrap();
        assert_eq!(greeter.greet(), "hello");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn missing_service_returns_none() {
        let registry = ServiceRegistry::new();
        assert!(registry.get::<dyn Greeter>().is_none());
        assert!(registry.is_empty());
    }
}
