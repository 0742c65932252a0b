//! Assorted imports for generated modules
//!
//! A generated module is expected to begin with `use enumerant::prelude::*;`, after
//! which every `enumeration!` it contains expands and its types can be encoded and
//! decoded without further imports.

pub use crate::codec::EnumCodec;
pub use crate::enumeration;
pub use crate::error::NoMatchError;
pub use crate::value::{EncodedValue, PayloadValue};
