//! Error types
//!
//! Two families of failure are modelled:
//!
//!   * [`RegistryError`] covers violations of the construction-time invariants of a
//!     [`Registry`](crate::Registry). These indicate a defect in the generator or the
//!     schema it was run over, and are fatal within generated code.
//!   * [`NoMatchError`] is the one recoverable runtime error, returned when a wire-level
//!     value does not correspond to any variant of the enumeration it was decoded as.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::value::{EncodedValue, ValueKind};

/// Error returned when `decode` is given a value that no variant is encoded as
///
/// This typically indicates version skew between the sender's and receiver's
/// definitions of the enumeration, or malformed input. Retrying with the same value
/// cannot succeed.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NoMatchError {
    enumeration: String,
    data: EncodedValue,
}

impl NoMatchError {
    #[must_use]
    pub fn new(enumeration: impl Into<String>, data: EncodedValue) -> Self {
        Self {
            enumeration: enumeration.into(),
            data,
        }
    }

    /// Name of the enumeration the value was decoded as
    #[must_use]
    pub fn enumeration(&self) -> &str {
        &self.enumeration
    }

    /// The rejected wire-level value
    #[must_use]
    pub fn data(&self) -> &EncodedValue {
        &self.data
    }

    #[must_use]
    pub fn into_data(self) -> EncodedValue {
        self.data
    }
}

impl Display for NoMatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "no variant of enumeration `{}` is encoded as {}",
            self.enumeration, self.data
        )
    }
}

impl Error for NoMatchError {}

/// Enumerated error type for invariant violations detected while building a registry
#[derive(Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub enum RegistryError {
    /// Two variants were declared with the same name
    DuplicateName { enumeration: String, name: String },
    /// Two variants resolved to the same encoded value
    DuplicateValue {
        enumeration: String,
        value: EncodedValue,
        first: String,
        second: String,
    },
    /// Explicit value does not belong to the scalar family the enumeration is keyed by
    KindMismatch {
        enumeration: String,
        variant: String,
        expected: ValueKind,
        found: EncodedValue,
    },
    /// Explicit value given in an enumeration whose values are derived
    /// (from ordinals or names)
    UnexpectedValue {
        enumeration: String,
        variant: String,
        value: EncodedValue,
    },
    /// Integer-keyed variant without an explicit value
    MissingValue { enumeration: String, variant: String },
    /// Variant lacks the payload field the enumeration is keyed by
    MissingField {
        enumeration: String,
        variant: String,
        field: String,
    },
    /// Keying payload field holds something other than an integer or string
    NonScalarField {
        enumeration: String,
        variant: String,
        field: String,
    },
}

impl RegistryError {
    /// Name of the enumeration whose construction failed
    #[must_use]
    pub fn enumeration(&self) -> &str {
        match self {
            RegistryError::DuplicateName { enumeration, .. }
            | RegistryError::DuplicateValue { enumeration, .. }
            | RegistryError::KindMismatch { enumeration, .. }
            | RegistryError::UnexpectedValue { enumeration, .. }
            | RegistryError::MissingValue { enumeration, .. }
            | RegistryError::MissingField { enumeration, .. }
            | RegistryError::NonScalarField { enumeration, .. } => enumeration,
        }
    }
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::DuplicateName { enumeration, name } => {
                write!(f, "{enumeration}: variant `{name}` is already defined")
            }
            RegistryError::DuplicateValue {
                enumeration,
                value,
                first,
                second,
            } => write!(
                f,
                "{enumeration}: variant `{second}` is encoded as {value}, which is already used by `{first}`"
            ),
            RegistryError::KindMismatch {
                enumeration,
                variant,
                expected: ValueKind::String,
                found,
            } => write!(
                f,
                "{enumeration}::{variant}: expected `string`, did you mean \"{}\"?",
                found.as_int().map_or_else(|| found.to_string(), ToString::to_string)
            ),
            RegistryError::KindMismatch {
                enumeration,
                variant,
                expected,
                found,
            } => write!(f, "{enumeration}::{variant}: expected `{expected}`, found {found}"),
            RegistryError::UnexpectedValue {
                enumeration,
                variant,
                value,
            } => write!(
                f,
                "{enumeration}::{variant}: explicit value {value} is not allowed, values are derived"
            ),
            RegistryError::MissingValue {
                enumeration,
                variant,
            } => write!(f, "{enumeration}::{variant}: missing explicit integer value"),
            RegistryError::MissingField {
                enumeration,
                variant,
                field,
            } => write!(f, "{enumeration}::{variant}: no field named `{field}`"),
            RegistryError::NonScalarField {
                enumeration,
                variant,
                field,
            } => write!(
                f,
                "{enumeration}::{variant}: field `{field}` must be an integer or a string to serve as the encoded value"
            ),
        }
    }
}

impl Error for RegistryError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy<T: Send + Sync + Error + 'static>() {}

    #[test]
    fn errors_threadsafe() {
        dummy::<NoMatchError>();
        dummy::<RegistryError>();
    }

    #[test]
    fn no_match_reports_input_and_name() {
        let err = NoMatchError::new("Entry", EncodedValue::from("baz"));
        assert_eq!(err.enumeration(), "Entry");
        assert_eq!(err.data(), &EncodedValue::from("baz"));
        assert_eq!(
            err.to_string(),
            "no variant of enumeration `Entry` is encoded as \"baz\""
        );
    }

    #[test]
    fn kind_mismatch_suggests_string() {
        let err = RegistryError::KindMismatch {
            enumeration: "Entry".into(),
            variant: "A".into(),
            expected: ValueKind::String,
            found: EncodedValue::from(42),
        };
        assert_eq!(
            err.to_string(),
            "Entry::A: expected `string`, did you mean \"42\"?"
        );
        assert_eq!(err.enumeration(), "Entry");
    }
}
