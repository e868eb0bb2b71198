// SPDX-FileCopyrightText: 2026 Kalends maintainers <dev@kalends.org>
//
// SPDX-License-Identifier: Apache-2.0

//! Property and component object model.
//!
//! A [`Component`] is an ordered bag of properties plus nested components; a
//! [`Property`] is one content line: name, parameter store, raw value text.
//! The model deliberately does not police cross-property rules (an event may
//! hold both `DTEND` and `DURATION` at the same time); wire-format
//! exclusivity is enforced once, by the serializer layer.

use crate::params::Parameters;

/// One property: a named value with its parameter store.
#[derive(Debug, Clone)]
pub struct Property {
    name: String,
    params: Parameters,
    value: String,
}

impl Property {
    /// Create a property from its parts.
    pub fn new(name: impl Into<String>, params: Parameters, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params,
            value: value.into(),
        }
    }

    /// Create a property with no parameters.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, Parameters::new(), value)
    }

    /// Property name (case preserved).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parameter store.
    #[must_use]
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Mutable access to the parameter store.
    pub fn params_mut(&mut self) -> &mut Parameters {
        &mut self.params
    }

    /// Raw value text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the raw value text.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

/// A structured calendar entity: ordered properties plus nested components.
#[derive(Debug, Clone)]
pub struct Component {
    name: String,
    properties: Vec<Property>,
    components: Vec<Component>,
}

impl Component {
    /// Create an empty component.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            components: Vec::new(),
        }
    }

    /// Component name (e.g. `VEVENT`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All properties in order.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Nested components in order.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// First property named `name` (case-insensitive).
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// All properties named `name` (case-insensitive), in order.
    pub fn properties_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Property> {
        self.properties
            .iter()
            .filter(move |p| p.name.eq_ignore_ascii_case(name))
    }

    /// Whether a property named `name` is present.
    #[must_use]
    pub fn contains_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }

    /// Replace the first property named `name`, or append a new one.
    ///
    /// Replacement keeps the property's position and its parameter store.
    pub fn set_property(&mut self, name: &str, value: impl Into<String>) {
        match self
            .properties
            .iter_mut()
            .find(|p| p.name.eq_ignore_ascii_case(name))
        {
            Some(existing) => existing.set_value(value),
            None => self.properties.push(Property::text(name, value)),
        }
    }

    /// Remove every property named `name` (case-insensitive).
    pub fn remove_property(&mut self, name: &str) {
        self.properties
            .retain(|p| !p.name.eq_ignore_ascii_case(name));
    }

    /// Append a property as-is.
    pub fn push_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Append a nested component.
    pub fn push_component(&mut self, component: Component) {
        self.components.push(component);
    }
}
