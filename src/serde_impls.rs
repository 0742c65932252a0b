//! `serde` integration (feature `serde_impls`)
//!
//! [`EncodedValue`] serializes as a bare integer or string. Integers outside the
//! range of `i64` and `u64` are rejected when written, since self-describing formats
//! such as JSON cannot hand them back as integers. Generated enumerations
//! do not implement `Serialize`/`Deserialize` themselves; instead, fields of an
//! enumeration type can opt into their wire-level representation with
//! `#[serde(with = "enumerant::serde_impls")]`:
//!
//! ```
//! use enumerant::{enumeration, EnumCodec};
//! use serde::{Deserialize, Serialize};
//!
//! enumeration! {
//!     pub enum Entry as string { A = "foo", B = "bar" }
//! }
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Message {
//!     #[serde(with = "enumerant::serde_impls")]
//!     entry: Entry,
//! }
//!
//! let json = serde_json::to_string(&Message { entry: Entry::B }).unwrap();
//! assert_eq!(json, r#"{"entry":"bar"}"#);
//! assert_eq!(serde_json::from_str::<Message>(&json).unwrap().entry, Entry::B);
//! ```

use std::fmt::Formatter;

use num_bigint::BigInt;
use serde::de::{Error as _, Visitor};
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::EnumCodec;
use crate::value::EncodedValue;

impl Serialize for EncodedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EncodedValue::String(s) => serializer.serialize_str(s),
            EncodedValue::Integer(n) => {
                if let Ok(i) = i64::try_from(n) {
                    serializer.serialize_i64(i)
                } else if let Ok(u) = u64::try_from(n) {
                    serializer.serialize_u64(u)
                } else {
                    Err(S::Error::custom(format!(
                        "integer value {n} does not fit in 64 bits"
                    )))
                }
            }
        }
    }
}

struct EncodedValueVisitor;

impl<'de> Visitor<'de> for EncodedValueVisitor {
    type Value = EncodedValue;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("an integer or a string")
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(EncodedValue::Integer(BigInt::from(v)))
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(EncodedValue::Integer(BigInt::from(v)))
    }

    fn visit_i128<E: serde::de::Error>(self, v: i128) -> Result<Self::Value, E> {
        Ok(EncodedValue::Integer(BigInt::from(v)))
    }

    fn visit_u128<E: serde::de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(EncodedValue::Integer(BigInt::from(v)))
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(EncodedValue::from(v))
    }

    fn visit_string<E: serde::de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(EncodedValue::String(v))
    }
}

impl<'de> Deserialize<'de> for EncodedValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EncodedValueVisitor)
    }
}

/// Serializes an enumeration value as its encoded value
pub fn serialize<T: EnumCodec, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    value.encode().serialize(serializer)
}

/// Deserializes an encoded value and decodes it as `T`, failing on values that no
/// variant of `T` is encoded as
pub fn deserialize<'de, T: EnumCodec, D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
    let data = EncodedValue::deserialize(deserializer)?;
    T::decode_ref(&data).map_err(D::Error::custom)
}
