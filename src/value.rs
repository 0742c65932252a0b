//! Scalar values carried by enumeration variants
//!
//! Two distinct value types are defined here:
//!
//!   * [`EncodedValue`] is the wire-level scalar that a variant is transmitted as. It is
//!     either an arbitrary-precision integer or a string, and is the only thing that
//!     `encode` produces and `decode` consumes.
//!   * [`PayloadValue`] is the value of an auxiliary payload field attached to a
//!     variant by the schema author. Payload fields are opaque to the codec, unless
//!     the enumeration is keyed by one of them, in which case the field must hold an
//!     integer or string scalar (see [`PayloadValue::to_encoded`]).
//!
//! Integers are held as [`BigInt`] so that no schema-declared value, however wide,
//! loses precision on its way through the codec.

use num_bigint::BigInt;
use std::fmt::{Display, Formatter};

/// Discriminant-only view of the scalar family of an [`EncodedValue`]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ValueKind {
    Integer,
    String,
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Integer => f.write_str("integer"),
            ValueKind::String => f.write_str("string"),
        }
    }
}

/// Scalar value that a variant is represented as on the wire
///
/// Equality is exact: integers compare numerically, strings compare byte-for-byte
/// (case-sensitive, with no trimming or normalization), and an integer is never equal
/// to a string, even when the string is the decimal rendering of that integer.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum EncodedValue {
    Integer(BigInt),
    String(String),
}

impl EncodedValue {
    /// Returns the scalar family this value belongs to
    #[must_use]
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            EncodedValue::Integer(_) => ValueKind::Integer,
            EncodedValue::String(_) => ValueKind::String,
        }
    }

    /// Returns a reference to the integer payload, if this is an integer value
    #[must_use]
    pub fn as_int(&self) -> Option<&BigInt> {
        match self {
            EncodedValue::Integer(n) => Some(n),
            EncodedValue::String(_) => None,
        }
    }

    /// Returns the string payload, if this is a string value
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            EncodedValue::Integer(_) => None,
            EncodedValue::String(s) => Some(s.as_str()),
        }
    }

    /// Returns the integer payload narrowed to `i64`, if it is an integer
    /// within range
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_int().and_then(|n| i64::try_from(n).ok())
    }
}

impl Display for EncodedValue {
    /// Strings are quoted so that `0` and `"0"` remain distinguishable in diagnostics.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodedValue::Integer(n) => write!(f, "{n}"),
            EncodedValue::String(s) => write!(f, "{s:?}"),
        }
    }
}

macro_rules! int_conversions {
    ( $target:ident; $( $t:ty ),+ $(,)? ) => {
        $(
            impl From<$t> for $target {
                #[inline]
                fn from(n: $t) -> Self {
                    $target::Integer(BigInt::from(n))
                }
            }
        )+
    };
}

int_conversions!(EncodedValue; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for EncodedValue {
    #[inline]
    fn from(n: BigInt) -> Self {
        EncodedValue::Integer(n)
    }
}

impl From<&str> for EncodedValue {
    #[inline]
    fn from(s: &str) -> Self {
        EncodedValue::String(s.to_owned())
    }
}

impl From<String> for EncodedValue {
    #[inline]
    fn from(s: String) -> Self {
        EncodedValue::String(s)
    }
}

impl From<&EncodedValue> for EncodedValue {
    #[inline]
    fn from(v: &EncodedValue) -> Self {
        v.clone()
    }
}

/// Value of a named payload field attached to a variant
#[derive(Clone, PartialEq, Debug)]
pub enum PayloadValue {
    Bool(bool),
    Integer(BigInt),
    Float(f64),
    String(String),
}

impl PayloadValue {
    /// Converts this value into an [`EncodedValue`], for enumerations that are
    /// keyed by a payload field.
    ///
    /// Returns `None` for booleans and floats, which are not valid wire scalars
    /// for an enumeration.
    #[must_use]
    pub fn to_encoded(&self) -> Option<EncodedValue> {
        match self {
            PayloadValue::Integer(n) => Some(EncodedValue::Integer(n.clone())),
            PayloadValue::String(s) => Some(EncodedValue::String(s.clone())),
            PayloadValue::Bool(_) | PayloadValue::Float(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PayloadValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl Display for PayloadValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadValue::Bool(b) => write!(f, "{b}"),
            PayloadValue::Integer(n) => write!(f, "{n}"),
            PayloadValue::Float(x) => write!(f, "{x}"),
            PayloadValue::String(s) => write!(f, "{s:?}"),
        }
    }
}

int_conversions!(PayloadValue; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for PayloadValue {
    fn from(n: BigInt) -> Self {
        PayloadValue::Integer(n)
    }
}

impl From<bool> for PayloadValue {
    fn from(b: bool) -> Self {
        PayloadValue::Bool(b)
    }
}

impl From<f32> for PayloadValue {
    fn from(x: f32) -> Self {
        PayloadValue::Float(f64::from(x))
    }
}

impl From<f64> for PayloadValue {
    fn from(x: f64) -> Self {
        PayloadValue::Float(x)
    }
}

impl From<&str> for PayloadValue {
    fn from(s: &str) -> Self {
        PayloadValue::String(s.to_owned())
    }
}

impl From<String> for PayloadValue {
    fn from(s: String) -> Self {
        PayloadValue::String(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_never_equals_string() {
        assert_ne!(EncodedValue::from(0), EncodedValue::from("0"));
        assert_eq!(EncodedValue::from(0u8), EncodedValue::from(0i64));
    }

    #[test]
    fn strings_are_exact() {
        assert_ne!(EncodedValue::from("Foo"), EncodedValue::from("foo"));
        assert_ne!(EncodedValue::from("foo "), EncodedValue::from("foo"));
    }

    #[test]
    fn wide_integers_keep_precision() {
        let wide = BigInt::from(u128::MAX) * BigInt::from(3);
        let v = EncodedValue::from(wide.clone());
        assert_eq!(v.as_int(), Some(&wide));
        assert_eq!(v.as_i64(), None);
        assert_eq!(EncodedValue::from(-7).as_i64(), Some(-7));
    }

    #[test]
    fn display_quotes_strings() {
        assert_eq!(EncodedValue::from(42).to_string(), "42");
        assert_eq!(EncodedValue::from("42").to_string(), "\"42\"");
        assert_eq!(ValueKind::String.to_string(), "string");
    }

    #[test]
    fn payload_scalars() {
        assert_eq!(
            PayloadValue::from("foo").to_encoded(),
            Some(EncodedValue::from("foo"))
        );
        assert_eq!(PayloadValue::from(3).to_encoded(), Some(EncodedValue::from(3)));
        assert_eq!(PayloadValue::from(true).to_encoded(), None);
        assert_eq!(PayloadValue::from(1.5).to_encoded(), None);
    }
}
