//! Runtime model for schema-generated enumerations
//!
//! # Overview
//!
//! A schema compiler translating protocol definitions into Rust emits one type per
//! schema-declared enumeration. Each such type must be able to convert any of its
//! variants into the scalar that is transmitted on the wire, and to recover the
//! variant from such a scalar, failing loudly when the scalar does not belong to
//! the enumeration. Rather than have the generator write that logic out for every
//! enumeration, `enumerant` offers it once, as a shared runtime:
//!
//!   * [`Registry`] is the immutable, ordered description of one enumeration: each
//!     [`Variant`] has an ordinal, a name, an [`EncodedValue`] and optional payload fields.
//!   * [`EnumCodec`] is the contract a generated closed `enum` satisfies, providing
//!     `encode` and `decode` on top of its registry.
//!   * [`enumeration!`] expands a compact declaration into the `enum`, its registry
//!     and its `EnumCodec` implementation, and is what generated modules consist of.
//!
//! # Keying conventions
//!
//! The wire-level value of a variant is derived according to the [`Keying`] of its
//! enumeration: its ordinal, its name, an explicit string or integer chosen by the
//! schema author, or the value of one of its payload fields.
//!
//! Encoded values are unique within an enumeration, so `decode` is unambiguous;
//! registries violating this, or the uniqueness of names, are rejected at construction
//! with a [`RegistryError`]. A value that no variant is encoded as is reported as a
//! [`NoMatchError`], never mapped onto a default variant.
//!
//! # Features
//!
//!   * `serde_impls`: `serde` support for [`EncodedValue`], and adapters for
//!     generated enumerations in [`serde_impls`].
//!   * `indexed_decode`: decode through a hash index rather than a linear scan.

extern crate lazy_static;

pub mod adt;
pub mod codec;
pub mod error;
pub mod prelude;
pub mod registry;
#[cfg(feature = "serde_impls")]
pub mod serde_impls;
pub mod value;
pub mod variant;

pub use crate::codec::EnumCodec;
pub use crate::error::{NoMatchError, RegistryError};
pub use crate::registry::{Keying, Registry, RegistryBuilder};
pub use crate::value::{EncodedValue, PayloadValue, ValueKind};
pub use crate::variant::{Payload, Variant};

pub use ::lazy_static::lazy_static;
pub use ::num_bigint::BigInt;
