//! Flat style descriptors and the patch rule that composes them.
//!
//! Every element style is a base descriptor followed by an explicit, ordered
//! chain of patches. A patch either overlays another descriptor (its keys
//! overwrite the base) or rewrites the descriptor in place. Later patches win.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::property::Property;
use super::value::StyleValue;

/// Build a [`StyleDescriptor`] from `Property: value` pairs.
macro_rules! style {
    ($($property:ident: $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut style = $crate::style::StyleDescriptor::new();
        $(style.set($crate::style::Property::$property, $value);)*
        style
    }};
}

pub(crate) use style;

/// A flat mapping from property to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleDescriptor {
    entries: BTreeMap<Property, StyleValue>,
}

/// One step in a style composition chain.
pub trait Patch {
    fn apply(self, style: &mut StyleDescriptor);
}

impl Patch for StyleDescriptor {
    fn apply(self, style: &mut StyleDescriptor) {
        style.merge(self);
    }
}

impl<F> Patch for F
where
    F: FnOnce(&mut StyleDescriptor),
{
    fn apply(self, style: &mut StyleDescriptor) {
        self(style)
    }
}

impl StyleDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value.
    pub fn set(&mut self, property: Property, value: impl Into<StyleValue>) -> &mut Self {
        self.entries.insert(property, value.into());
        self
    }

    pub fn get(&self, property: Property) -> Option<&StyleValue> {
        self.entries.get(&property)
    }

    pub fn contains(&self, property: Property) -> bool {
        self.entries.contains_key(&property)
    }

    pub fn remove(&mut self, property: Property) -> Option<StyleValue> {
        self.entries.remove(&property)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Property, &StyleValue)> {
        self.entries.iter().map(|(property, value)| (*property, value))
    }

    /// Overlay `other`; its values win on every shared key.
    pub fn merge(&mut self, other: StyleDescriptor) {
        self.entries.extend(other.entries);
    }

    /// Exchange the values of two properties. A missing value moves too.
    pub fn swap(&mut self, a: Property, b: Property) {
        let first = self.entries.remove(&a);
        let second = self.entries.remove(&b);
        if let Some(value) = second {
            self.entries.insert(a, value);
        }
        if let Some(value) = first {
            self.entries.insert(b, value);
        }
    }

    /// Apply a patch.
    pub fn with(mut self, patch: impl Patch) -> Self {
        patch.apply(&mut self);
        self
    }

    /// Apply a patch only when `condition` holds.
    pub fn with_if(self, condition: bool, patch: impl Patch) -> Self {
        if condition {
            self.with(patch)
        } else {
            self
        }
    }

    /// Render as inline CSS declarations, e.g. `padding-top: 10px; color: #fff`.
    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(property, value)| format!("{}: {}", property.css_name(), value.to_css(property)))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for StyleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromIterator<(Property, StyleValue)> for StyleDescriptor {
    fn from_iter<I: IntoIterator<Item = (Property, StyleValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
