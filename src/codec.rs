//! The enumeration codec contract
//!
//! Every schema-declared enumeration is emitted as a closed, fieldless Rust `enum`
//! whose discriminants are the variant ordinals, bound to a process-wide [`Registry`]
//! that holds its wire-level representation. [`EnumCodec`] is the trait through which
//! that binding is expressed. Implementors supply only the variant table, the registry
//! accessor and the ordinal projection; `encode`, `decode` and the lookup methods are
//! derived from those.
//!
//! Implementations are normally generated by the [`enumeration!`](crate::enumeration)
//! macro rather than written by hand.

use crate::error::NoMatchError;
use crate::registry::Registry;
use crate::value::{EncodedValue, PayloadValue};
use crate::variant::{Payload, Variant};

/// Trait for closed enumeration types backed by a [`Registry`]
///
/// # Invariants
///
/// Implementations must guarantee that `Self::VARIANTS[i].ordinal() == i` for every
/// `i`, and that `Self::registry()` contains exactly one variant per element of
/// `VARIANTS`, in the same order. Under those conditions, every method of this trait
/// is total except [`decode`](EnumCodec::decode), which fails only on values that no
/// variant is encoded as.
///
/// # Example
///
/// ```
/// use enumerant::{enumeration, EnumCodec, EncodedValue};
///
/// enumeration! {
///     pub enum Entry as string {
///         A = "foo",
///         B = "bar",
///     }
/// }
///
/// assert_eq!(Entry::A.encode(), &EncodedValue::from("foo"));
/// assert_eq!(Entry::decode("bar"), Ok(Entry::B));
/// assert!(Entry::decode("baz").is_err());
/// ```
pub trait EnumCodec: Copy + Eq + std::hash::Hash + std::fmt::Debug + Sized + 'static {
    /// Every variant of `Self`, in declaration order
    const VARIANTS: &'static [Self];

    /// The registry holding the wire-level representation of `Self`
    fn registry() -> &'static Registry;

    /// Zero-based declaration position of `self`
    fn ordinal(self) -> usize;

    /// The canonical registry entry for `self`
    #[must_use]
    fn variant(self) -> &'static Variant {
        &Self::registry().variants()[self.ordinal()]
    }

    #[must_use]
    fn name(self) -> &'static str {
        self.variant().name()
    }

    #[must_use]
    fn payload(self) -> &'static Payload {
        self.variant().payload()
    }

    #[must_use]
    fn field(self, name: &str) -> Option<&'static PayloadValue> {
        self.variant().field(name)
    }

    /// Returns the wire-level value of `self`. Never fails.
    #[must_use]
    fn encode(self) -> &'static EncodedValue {
        Self::registry().encode(self.variant())
    }

    /// Returns the variant encoded as `data`.
    ///
    /// # Errors
    ///
    /// Returns a [`NoMatchError`] if no variant of `Self` is encoded as `data`.
    fn decode<V: Into<EncodedValue>>(data: V) -> Result<Self, NoMatchError> {
        Self::decode_ref(&data.into())
    }

    /// Borrowing counterpart of [`decode`](EnumCodec::decode)
    ///
    /// # Errors
    ///
    /// Returns a [`NoMatchError`] if no variant of `Self` is encoded as `data`.
    fn decode_ref(data: &EncodedValue) -> Result<Self, NoMatchError> {
        let variant = Self::registry().decode(data)?;
        Ok(Self::VARIANTS[variant.ordinal()])
    }

    #[must_use]
    fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::VARIANTS.get(ordinal).copied()
    }

    #[must_use]
    fn from_name(name: &str) -> Option<Self> {
        Self::registry()
            .by_name(name)
            .and_then(|v| Self::from_ordinal(v.ordinal()))
    }

    /// Iterates over every variant of `Self` in declaration order
    fn variants() -> std::iter::Copied<std::slice::Iter<'static, Self>> {
        Self::VARIANTS.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Keying, RegistryBuilder};
    use crate::value::ValueKind;

    // Hand-written implementor, as a generator targeting the trait directly would emit.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Level {
        Low,
        High,
    }

    impl EnumCodec for Level {
        const VARIANTS: &'static [Self] = &[Level::Low, Level::High];

        fn registry() -> &'static Registry {
            lazy_static::lazy_static! {
                static ref LEVEL: Registry = RegistryBuilder::new("Level", Keying::Value(ValueKind::Integer))
                    .valued("Low", 10)
                    .valued("High", 20)
                    .build()
                    .unwrap();
            }
            &LEVEL
        }

        fn ordinal(self) -> usize {
            self as usize
        }
    }

    #[test]
    fn hand_written_impl() {
        assert_eq!(Level::High.encode(), &EncodedValue::from(20));
        assert_eq!(Level::decode(10), Ok(Level::Low));
        assert_eq!(Level::from_name("High"), Some(Level::High));
        assert_eq!(Level::from_ordinal(2), None);
        assert_eq!(Level::variants().collect::<Vec<_>>(), [Level::Low, Level::High]);

        let err = Level::decode(30).unwrap_err();
        assert_eq!(err.enumeration(), "Level");
        assert_eq!(err.data(), &EncodedValue::from(30));
    }

    #[test]
    fn round_trip() {
        for level in Level::variants() {
            assert_eq!(Level::decode_ref(level.encode()), Ok(level));
            assert!(std::ptr::eq(level.variant(), Level::decode_ref(level.encode()).unwrap().variant()));
        }
    }
}
