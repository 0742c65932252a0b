//! Variants and their payload fields

use crate::value::{EncodedValue, PayloadValue};

/// Named payload fields of a variant, kept in declaration order
///
/// Fields are bound by name rather than by position, so a variant that
/// declares fewer fields than a sibling cannot end up with a value assigned
/// to the wrong field.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Payload {
    fields: Vec<(String, PayloadValue)>,
}

impl Payload {
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Adds (or replaces) the field `name`, returning the updated payload.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PayloadValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets the field `name` to `value`, replacing any prior value in place so that
    /// declaration order is preserved.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PayloadValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PayloadValue> {
        self.fields
            .iter()
            .find_map(|(k, v)| (k == name).then_some(v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PayloadValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<PayloadValue>> FromIterator<(K, V)> for Payload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = Payload::new();
        for (k, v) in iter {
            payload.insert(k, v);
        }
        payload
    }
}

/// One case of an enumeration
///
/// `Variant` values are only ever created by [`Registry`](crate::Registry)
/// construction, which assigns the ordinal and the encoded value; the registry
/// then hands out references to its single canonical instance of each variant.
#[derive(Clone, PartialEq, Debug)]
pub struct Variant {
    pub(crate) ordinal: usize,
    pub(crate) name: String,
    pub(crate) encoded: EncodedValue,
    pub(crate) payload: Payload,
}

impl Variant {
    /// Zero-based declaration position of this variant
    #[must_use]
    #[inline]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The scalar this variant is transmitted as
    #[must_use]
    #[inline]
    pub fn encoded(&self) -> &EncodedValue {
        &self.encoded
    }

    #[must_use]
    #[inline]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Shorthand for `self.payload().get(name)`
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&PayloadValue> {
        self.payload.get(name)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
