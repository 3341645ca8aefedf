//! Placement descriptors and location tokens.
//!
//! A descriptor declares where a view component is eligible to appear:
//! by role (a semantic category such as `"ThreadAction"`), by location
//! (a specific slot in the window layout), and optionally restricted to
//! certain workspace modes. Singular builder methods normalize into the
//! plural vectors, so matching only ever deals with one shape.

use serde::{Deserialize, Serialize};

/// Opaque identity token for a slot in the window layout.
///
/// Locations are compared by id only; the shell defines one token per
/// column or sheet region and hands it to packages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    id: String,
}

impl Location {
    /// Create a location token with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The location's id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The toolbar slot derived from this location.
    ///
    /// Every column location carries a companion `<id>:Toolbar` slot that
    /// toolbar items register into.
    pub fn toolbar(&self) -> Location {
        Location {
            id: format!("{}:Toolbar", self.id),
        }
    }
}

/// Placement constraints for a component registration or query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub modes: Vec<String>,
}

impl Descriptor {
    /// Create an empty descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single role.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    /// Add multiple roles.
    pub fn roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles.extend(roles.into_iter().map(Into::into));
        self
    }

    /// Add a single location.
    pub fn location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    /// Add multiple locations.
    pub fn locations<I>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = Location>,
    {
        self.locations.extend(locations);
        self
    }

    /// Restrict to a single workspace mode.
    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.modes.push(mode.into());
        self
    }

    /// Restrict to multiple workspace modes.
    pub fn modes<I, S>(mut self, modes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modes.extend(modes.into_iter().map(Into::into));
        self
    }

    /// Whether this descriptor constrains neither roles nor locations.
    ///
    /// Such a descriptor is not a usable query.
    pub fn is_empty_query(&self) -> bool {
        self.roles.is_empty() && self.locations.is_empty()
    }

    /// Whether a registration with this descriptor matches the given query.
    ///
    /// Role-based and location-based matching are mutually exclusive per
    /// query, selected by which field the query provides. Entries with a
    /// `modes` restriction must intersect the query's modes; entries with
    /// no restriction match in every mode.
    pub fn matches(&self, query: &Descriptor) -> bool {
        let placed = if !query.roles.is_empty() {
            self.roles.iter().any(|r| query.roles.contains(r))
        } else if !query.locations.is_empty() {
            self.locations.iter().any(|l| query.locations.contains(l))
        } else {
            false
        };

        if !placed {
            return false;
        }

        if query.modes.is_empty() || self.modes.is_empty() {
            return true;
        }
        self.modes.iter().any(|m| query.modes.contains(m))
    }
}
