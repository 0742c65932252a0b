//! Immutable variant registries
//!
//! A [`Registry`] is the runtime image of one schema-declared enumeration: its name,
//! the convention by which its variants are keyed on the wire ([`Keying`]), and the
//! ordered set of its [`Variant`]s. It is built exactly once, through
//! [`RegistryBuilder`], and never mutated afterwards, so it may be shared freely
//! between threads.
//!
//! # Construction
//!
//! The builder takes variant descriptors in declaration order. On [`build`], each
//! descriptor is assigned its ordinal by position and its encoded value according
//! to the keying:
//!
//!   * [`Keying::Ordinal`]: the ordinal itself. Explicit values are rejected.
//!   * [`Keying::Name`]: the variant name. Explicit values are rejected.
//!   * [`Keying::Value`]`(kind)`: the explicit value, which must be of `kind`. A string-keyed
//!     variant without an explicit value takes its own name; an integer-keyed one
//!     is rejected.
//!   * [`Keying::Field`]`(field)`: the value of payload field `field`, which must be
//!     an integer or a string.
//!
//! Duplicate names and duplicate encoded values are rejected with a [`RegistryError`].
//!
//! # Decoding
//!
//! By default, [`Registry::decode`] scans the variants in declaration order. With the
//! `indexed_decode` feature, a hash index from encoded value to ordinal is built
//! alongside the variants and consulted instead; since encoded values are unique,
//! both strategies return the same variant for every input.
//!
//! [`build`]: RegistryBuilder::build

use std::collections::HashSet;
#[cfg(feature = "indexed_decode")]
use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{NoMatchError, RegistryError};
use crate::value::{EncodedValue, ValueKind};
use crate::variant::{Payload, Variant};

/// Convention by which the variants of an enumeration derive their encoded values
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Keying {
    /// Encoded as the zero-based declaration position
    Ordinal,
    /// Encoded as the variant name
    Name,
    /// Encoded as an explicit schema-supplied scalar of the given kind
    Value(ValueKind),
    /// Encoded as the value of the named payload field
    Field(String),
}

impl std::fmt::Display for Keying {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Keying::Ordinal => f.write_str("ordinal"),
            Keying::Name => f.write_str("name"),
            Keying::Value(kind) => write!(f, "{kind}"),
            Keying::Field(field) => write!(f, "field({field})"),
        }
    }
}

#[derive(Clone, Debug)]
struct VariantSpec {
    name: String,
    value: Option<EncodedValue>,
    payload: Payload,
}

/// Builder for [`Registry`], accepting variant descriptors in declaration order
#[derive(Clone, Debug)]
pub struct RegistryBuilder {
    name: String,
    keying: Keying,
    specs: Vec<VariantSpec>,
}

impl RegistryBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>, keying: Keying) -> Self {
        Self {
            name: name.into(),
            keying,
            specs: Vec::new(),
        }
    }

    /// Appends a variant with no explicit value and no payload
    #[must_use]
    pub fn variant(self, name: impl Into<String>) -> Self {
        self.variant_with(name, None, Payload::new())
    }

    /// Appends a variant with an explicit encoded value and no payload
    #[must_use]
    pub fn valued(self, name: impl Into<String>, value: impl Into<EncodedValue>) -> Self {
        self.variant_with(name, Some(value.into()), Payload::new())
    }

    /// Appends a fully specified variant descriptor
    #[must_use]
    pub fn variant_with(
        mut self,
        name: impl Into<String>,
        value: Option<EncodedValue>,
        payload: Payload,
    ) -> Self {
        self.push(name, value, payload);
        self
    }

    /// In-place counterpart of [`variant_with`](Self::variant_with)
    pub fn push(&mut self, name: impl Into<String>, value: Option<EncodedValue>, payload: Payload) {
        self.specs.push(VariantSpec {
            name: name.into(),
            value,
            payload,
        });
    }

    /// Number of variants declared so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Assigns ordinals and encoded values, and validates the uniqueness invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`RegistryError`] encountered, in declaration order.
    pub fn build(self) -> Result<Registry, RegistryError> {
        let RegistryBuilder {
            name,
            keying,
            specs,
        } = self;
        match assemble(&name, &keying, specs) {
            Ok(variants) => {
                debug!(
                    enumeration = %name,
                    keying = %keying,
                    variants = variants.len(),
                    "built enumeration registry"
                );
                Ok(Registry::from_parts(name, keying, variants))
            }
            Err(err) => {
                warn!(enumeration = %name, error = %err, "rejected enumeration registry");
                Err(err)
            }
        }
    }
}

fn resolve_value(
    enumeration: &str,
    keying: &Keying,
    ordinal: usize,
    spec: &VariantSpec,
) -> Result<EncodedValue, RegistryError> {
    match (keying, &spec.value) {
        (Keying::Ordinal | Keying::Name | Keying::Field(_), Some(value)) => {
            Err(RegistryError::UnexpectedValue {
                enumeration: enumeration.to_owned(),
                variant: spec.name.clone(),
                value: value.clone(),
            })
        }
        (Keying::Ordinal, None) => Ok(EncodedValue::from(ordinal)),
        (Keying::Name, None) => Ok(EncodedValue::from(spec.name.as_str())),
        (Keying::Value(kind), Some(value)) => {
            if value.kind() == *kind {
                Ok(value.clone())
            } else {
                Err(RegistryError::KindMismatch {
                    enumeration: enumeration.to_owned(),
                    variant: spec.name.clone(),
                    expected: *kind,
                    found: value.clone(),
                })
            }
        }
        (Keying::Value(ValueKind::String), None) => Ok(EncodedValue::from(spec.name.as_str())),
        (Keying::Value(ValueKind::Integer), None) => Err(RegistryError::MissingValue {
            enumeration: enumeration.to_owned(),
            variant: spec.name.clone(),
        }),
        (Keying::Field(field), None) => match spec.payload.get(field) {
            Some(value) => value
                .to_encoded()
                .ok_or_else(|| RegistryError::NonScalarField {
                    enumeration: enumeration.to_owned(),
                    variant: spec.name.clone(),
                    field: field.clone(),
                }),
            None => Err(RegistryError::MissingField {
                enumeration: enumeration.to_owned(),
                variant: spec.name.clone(),
                field: field.clone(),
            }),
        },
    }
}

fn assemble(
    enumeration: &str,
    keying: &Keying,
    specs: Vec<VariantSpec>,
) -> Result<Vec<Variant>, RegistryError> {
    let mut names: HashSet<&str> = HashSet::with_capacity(specs.len());
    let mut encoded: Vec<EncodedValue> = Vec::with_capacity(specs.len());

    for (ordinal, spec) in specs.iter().enumerate() {
        if !names.insert(spec.name.as_str()) {
            return Err(RegistryError::DuplicateName {
                enumeration: enumeration.to_owned(),
                name: spec.name.clone(),
            });
        }

        let value = resolve_value(enumeration, keying, ordinal, spec)?;
        if let Some(first) = encoded.iter().position(|prior| *prior == value) {
            return Err(RegistryError::DuplicateValue {
                enumeration: enumeration.to_owned(),
                value,
                first: specs[first].name.clone(),
                second: spec.name.clone(),
            });
        }
        encoded.push(value);
    }

    Ok(specs
        .into_iter()
        .zip(encoded)
        .enumerate()
        .map(|(ordinal, (spec, encoded))| Variant {
            ordinal,
            name: spec.name,
            encoded,
            payload: spec.payload,
        })
        .collect())
}

/// Immutable, ordered set of the variants of one enumeration
#[derive(Debug)]
pub struct Registry {
    name: String,
    keying: Keying,
    variants: Vec<Variant>,
    #[cfg(feature = "indexed_decode")]
    index: HashMap<EncodedValue, usize>,
}

impl Registry {
    fn from_parts(name: String, keying: Keying, variants: Vec<Variant>) -> Self {
        #[cfg(feature = "indexed_decode")]
        let index = variants
            .iter()
            .map(|v| (v.encoded.clone(), v.ordinal))
            .collect();
        Self {
            name,
            keying,
            variants,
            #[cfg(feature = "indexed_decode")]
            index,
        }
    }

    /// Name of the enumeration
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn keying(&self) -> &Keying {
        &self.keying
    }

    /// All variants, in declaration order
    #[must_use]
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Variant> {
        self.variants.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.name == name)
    }

    #[must_use]
    pub fn by_ordinal(&self, ordinal: usize) -> Option<&Variant> {
        self.variants.get(ordinal)
    }

    /// Returns the wire-level value of `variant`, exactly as stored.
    ///
    /// `variant` is expected to be a member of this registry.
    #[must_use]
    #[inline]
    pub fn encode<'a>(&self, variant: &'a Variant) -> &'a EncodedValue {
        debug_assert!(
            self.by_ordinal(variant.ordinal)
                .is_some_and(|own| own.name == variant.name),
            "variant `{}` does not belong to enumeration `{}`",
            variant.name,
            self.name
        );
        &variant.encoded
    }

    /// Returns the canonical variant whose encoded value is exactly `data`.
    ///
    /// # Errors
    ///
    /// Returns a [`NoMatchError`] carrying `data` and the enumeration name when no
    /// variant is encoded as `data`.
    pub fn decode(&self, data: &EncodedValue) -> Result<&Variant, NoMatchError> {
        match self.position(data) {
            Some(ordinal) => Ok(&self.variants[ordinal]),
            None => {
                debug!(enumeration = %self.name, value = %data, "no matching variant");
                Err(NoMatchError::new(self.name.as_str(), data.clone()))
            }
        }
    }

    cfg_if::cfg_if! {
        if #[cfg(feature = "indexed_decode")] {
            #[inline]
            fn position(&self, data: &EncodedValue) -> Option<usize> {
                self.index.get(data).copied()
            }
        } else {
            #[inline]
            fn position(&self, data: &EncodedValue) -> Option<usize> {
                self.variants.iter().position(|v| v.encoded == *data)
            }
        }
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Variant;
    type IntoIter = std::slice::Iter<'a, Variant>;

    fn into_iter(self) -> Self::IntoIter {
        self.variants.iter()
    }
}
