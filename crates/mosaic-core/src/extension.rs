//! Extension registry: ordered behavior hooks for one extension point.

#[cfg(test)]
#[path = "extension_tests.rs"]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tracing::debug;

use mosaic_protocols::error::ExtensionError;
use mosaic_protocols::Extension;

use crate::config::DEFAULT_DEBOUNCE_MS;
use crate::notify::{Debouncer, Listeners, Subscription};

/// Ordered, uniquely-named collection of behavior hooks for one
/// extension point (e.g. `"MessageView"`, `"Composer"`).
///
/// Insertion order is preserved and defines hook invocation order.
/// Registrations notify listeners through a debounced trigger, so a
/// burst of activation-time registrations coalesces into one refresh;
/// removals notify immediately. The debounced path requires a Tokio
/// runtime context.
///
/// The type parameter is the stored hook type, usually a trait object.
/// A point whose hook trait is richer than [`Extension`] wraps its
/// objects in a newtype implementing [`Extension`].
pub struct ExtensionRegistry<T: ?Sized + Extension> {
    point: String,
    items: RwLock<Vec<Arc<T>>>,
    listeners: Listeners,
    debouncer: Debouncer,
}

impl<T: ?Sized + Extension> ExtensionRegistry<T> {
    /// Create a registry for the named extension point.
    pub fn new(point: impl Into<String>) -> Self {
        Self::with_debounce(point, Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }

    /// Create a registry with an explicit notification coalescing window.
    pub fn with_debounce(point: impl Into<String>, window: Duration) -> Self {
        let listeners = Listeners::new();
        Self {
            point: point.into(),
            items: RwLock::new(Vec::new()),
            debouncer: Debouncer::new(listeners.clone(), window),
            listeners,
        }
    }

    /// The extension point's name.
    pub fn point(&self) -> &str {
        &self.point
    }

    /// Register an extension, appending it to the invocation order.
    /// Chainable.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension's name is empty, or if an
    /// extension with the same name is already registered.
    pub fn register(&self, extension: Arc<T>) -> Result<&Self, ExtensionError> {
        let name = extension.name().to_string();
        if name.is_empty() {
            return Err(ExtensionError::MissingName);
        }

        {
            let mut items = self.items.write();
            if items.iter().any(|e| e.name() == name) {
                return Err(ExtensionError::AlreadyRegistered(name));
            }
            items.push(extension);
        }

        debug!("Extension registered: {} ({})", name, self.point);
        self.debouncer.schedule();
        Ok(self)
    }

    /// Remove a previously registered extension and notify listeners.
    ///
    /// Unlike the component registry, removal is strict: the argument
    /// must be the exact registered instance.
    ///
    /// # Errors
    ///
    /// Returns an error if no extension with that name is registered, or
    /// if the name is registered to a different object.
    pub fn unregister(&self, extension: &Arc<T>) -> Result<(), ExtensionError> {
        let name = extension.name().to_string();

        {
            let mut items = self.items.write();
            let position = items
                .iter()
                .position(|e| e.name() == name)
                .ok_or_else(|| ExtensionError::NotRegistered(name.clone()))?;
            if !Arc::ptr_eq(&items[position], extension) {
                return Err(ExtensionError::IdentityMismatch(name));
            }
            items.remove(position);
        }

        debug!("Extension unregistered: {} ({})", name, self.point);
        self.listeners.emit();
        Ok(())
    }

    /// The registered extensions in invocation order.
    pub fn extensions(&self) -> Vec<Arc<T>> {
        self.items.read().clone()
    }

    /// Check if an extension with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.items.read().iter().any(|e| e.name() == name)
    }

    /// Subscribe to registration changes.
    pub fn listen(&self, callback: impl Fn() + Send + Sync + 'static) -> Subscription {
        self.listeners.listen(callback)
    }

    /// Get the number of registered extensions.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Reset all registrations. For test harnesses and shell shutdown;
    /// does not notify.
    pub fn clear(&self) {
        self.items.write().clear();
    }
}
