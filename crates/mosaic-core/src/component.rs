//! Component registry: directory of view components by role and location.

#[cfg(test)]
#[path = "component_tests.rs"]
mod tests;

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use mosaic_protocols::error::ComponentError;
use mosaic_protocols::{Descriptor, ViewComponent};

use crate::notify::{Listeners, Subscription};

struct Entry {
    component: Arc<dyn ViewComponent>,
    descriptor: Descriptor,
}

/// Directory mapping placement descriptors to view components.
///
/// Packages register components during activation; the shell queries the
/// registry at render time and re-renders when notified. Registration
/// changes are infrequent, so every mutation notifies listeners
/// synchronously.
pub struct ComponentRegistry {
    entries: RwLock<Vec<Entry>>,
    listeners: Listeners,
}

impl ComponentRegistry {
    /// Create an empty component registry.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            listeners: Listeners::new(),
        }
    }

    /// Register a component under the given descriptor. Chainable.
    ///
    /// Re-registering the same component (pointer identity) replaces its
    /// descriptor and keeps its registration position.
    ///
    /// # Errors
    ///
    /// Returns an error if the component's display name is empty, or if a
    /// different component already owns that display name.
    pub fn register(
        &self,
        component: Arc<dyn ViewComponent>,
        descriptor: Descriptor,
    ) -> Result<&Self, ComponentError> {
        let name = component.display_name().to_string();
        if name.is_empty() {
            return Err(ComponentError::MissingDisplayName);
        }

        {
            let mut entries = self.entries.write();
            match entries
                .iter()
                .position(|e| e.component.display_name() == name)
            {
                Some(index) => {
                    if !Arc::ptr_eq(&entries[index].component, &component) {
                        return Err(ComponentError::AlreadyRegistered(name));
                    }
                    entries[index].descriptor = descriptor;
                }
                None => entries.push(Entry {
                    component,
                    descriptor,
                }),
            }
        }

        debug!("Component registered: {}", name);
        self.listeners.emit();
        Ok(self)
    }

    /// Remove a component's registration and notify listeners.
    ///
    /// Teardown paths call this unconditionally, so an absent component
    /// is a silent no-op rather than an error.
    pub fn unregister(&self, component: &Arc<dyn ViewComponent>) {
        let name = component.display_name();
        let removed = {
            let mut entries = self.entries.write();
            let before = entries.len();
            entries.retain(|e| e.component.display_name() != name);
            entries.len() != before
        };

        if removed {
            debug!("Component unregistered: {}", name);
            self.listeners.emit();
        }
    }

    /// Look up a component by display name.
    pub fn find_component_by_name(&self, name: &str) -> Option<Arc<dyn ViewComponent>> {
        self.entries
            .read()
            .iter()
            .find(|e| e.component.display_name() == name)
            .map(|e| e.component.clone())
    }

    /// Find all components whose descriptor matches the query, in
    /// registration order, each at most once.
    ///
    /// # Errors
    ///
    /// Returns an error if the query names neither a role nor a location.
    pub fn find_components_matching(
        &self,
        query: &Descriptor,
    ) -> Result<Vec<Arc<dyn ViewComponent>>, ComponentError> {
        if query.is_empty_query() {
            return Err(ComponentError::EmptyQuery);
        }

        Ok(self
            .entries
            .read()
            .iter()
            .filter(|e| e.descriptor.matches(query))
            .map(|e| e.component.clone())
            .collect())
    }

    /// Subscribe to registration changes.
    pub fn listen(&self, callback: impl Fn() + Send + Sync + 'static) -> Subscription {
        self.listeners.listen(callback)
    }

    /// Get the number of registered components.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Reset all registrations. For test harnesses and shell shutdown;
    /// does not notify.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
