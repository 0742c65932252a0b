//! Macro support for generated enumerations
//!
//! The [`enumeration!`](crate::enumeration) macro is the output target of the schema
//! compiler: a single invocation per schema-declared enumeration expands into
//!
//!   * a closed, fieldless `enum` whose discriminants are the variant ordinals,
//!   * a lazily initialized, process-wide [`Registry`](crate::Registry) describing it, and
//!   * an implementation of [`EnumCodec`](crate::EnumCodec) binding the two, plus `Display`.
//!
//! The keyword after `as` selects the [`Keying`](crate::Keying):
//!
//! | keyword        | encoded value                                    |
//! |----------------|--------------------------------------------------|
//! | `ordinal`      | declaration position                             |
//! | `name`         | variant name                                     |
//! | `string`       | explicit string literal, or the name if omitted  |
//! | `integer`      | explicit integer literal                         |
//! | `field(f)`     | value of the payload field `f`                   |
//!
//! Payload fields are written in braces after the variant and are bound by name.
//!
//! ```
//! use enumerant::{enumeration, EnumCodec, EncodedValue, PayloadValue};
//!
//! enumeration! {
//!     /// Sample enumeration with a payload field
//!     pub enum Entry as ordinal {
//!         A { field: "foo" },
//!         B { field: "bar" },
//!     }
//! }
//!
//! assert_eq!(Entry::A.encode(), &EncodedValue::from(0));
//! assert_eq!(Entry::decode(1), Ok(Entry::B));
//! assert_eq!(Entry::B.field("field"), Some(&PayloadValue::from("bar")));
//! assert_eq!(Entry::B.to_string(), "B");
//! ```
//!
//! A registry that violates its construction invariants (for instance two variants
//! sharing a value) is a defect in the generated code. The construction result is
//! kept, so every access to such an enumeration panics with the corresponding
//! [`RegistryError`](crate::RegistryError), not only the first.

#[macro_export]
macro_rules! enumeration {
    (@keying ordinal) => { $crate::Keying::Ordinal };
    (@keying name) => { $crate::Keying::Name };
    (@keying string) => { $crate::Keying::Value($crate::ValueKind::String) };
    (@keying integer) => { $crate::Keying::Value($crate::ValueKind::Integer) };
    (@keying field $f:ident) => { $crate::Keying::Field(::std::string::String::from(stringify!($f))) };

    (@value) => { ::std::option::Option::None };
    (@value $v:literal) => { ::std::option::Option::Some($crate::EncodedValue::from($v)) };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $keying:ident $(($field:ident))? {
            $(
                $(#[$vmeta:meta])*
                $vname:ident $(= $value:literal)? $({ $( $fname:ident : $fvalue:expr ),* $(,)? })?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        $vis enum $name {
            $( $(#[$vmeta])* $vname ),*
        }

        impl $crate::EnumCodec for $name {
            const VARIANTS: &'static [Self] = &[ $( $name::$vname ),* ];

            fn registry() -> &'static $crate::Registry {
                $crate::lazy_static! {
                    static ref REGISTRY: ::std::result::Result<$crate::Registry, $crate::RegistryError> = {
                        let builder = $crate::RegistryBuilder::new(
                            stringify!($name),
                            $crate::enumeration!(@keying $keying $($field)?),
                        );
                        $(
                            let builder = builder.variant_with(
                                stringify!($vname),
                                $crate::enumeration!(@value $($value)?),
                                $crate::Payload::new() $($( .with(stringify!($fname), $fvalue) )*)?,
                            );
                        )*
                        builder.build()
                    };
                }
                match &*REGISTRY {
                    ::std::result::Result::Ok(registry) => registry,
                    ::std::result::Result::Err(err) => {
                        panic!("invalid enumeration `{}`: {}", stringify!($name), err)
                    }
                }
            }

            fn ordinal(self) -> usize {
                match self {
                    $( $name::$vname => $name::$vname as usize ),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::EnumCodec::name(*self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{EncodedValue, EnumCodec, Keying, PayloadValue, ValueKind};

    enumeration! {
        enum Entry as ordinal {
            A { field: "foo" },
            B { field: "bar" },
        }
    }

    enumeration! {
        enum Keyed as string {
            A = "foo",
            B = "bar",
        }
    }

    enumeration! {
        enum Entry2 as string { A, B, C }
    }

    enumeration! {
        enum Color as name { Red, Green, Blue }
    }

    enumeration! {
        enum Status as integer {
            Ok = 200,
            NotFound = 404,
            Teapot = -418,
        }
    }

    enumeration! {
        enum Wide as integer {
            Small = 1,
            Huge = 340282366920938463463374607431768211455u128,
        }
    }

    enumeration! {
        enum Mode as field(code) {
            Read { code: "r", exclusive: false },
            Write { exclusive: true, code: "w" },
        }
    }

    enumeration! {
        enum Broken as string {
            A = "same",
            B = "same",
        }
    }

    #[test]
    fn ordinal_keyed() {
        assert_eq!(Entry::A.encode(), &EncodedValue::from(0));
        assert_eq!(Entry::decode(0), Ok(Entry::A));
        assert_eq!(Entry::decode(1), Ok(Entry::B));
        let err = Entry::decode(2).unwrap_err();
        assert_eq!(err.enumeration(), "Entry");
        assert_eq!(err.data(), &EncodedValue::from(2));
        assert_eq!(Entry::registry().keying(), &Keying::Ordinal);
    }

    #[test]
    fn value_keyed() {
        assert_eq!(Keyed::A.encode(), &EncodedValue::from("foo"));
        assert_eq!(Keyed::decode("bar"), Ok(Keyed::B));
        assert!(Keyed::decode("baz").is_err());
        assert_eq!(Keyed::registry().keying(), &Keying::Value(ValueKind::String));
    }

    #[test]
    fn names_as_values() {
        assert_eq!(Entry2::decode("C"), Ok(Entry2::C));
        assert_eq!(Entry2::C.encode(), &EncodedValue::from("C"));
        assert_eq!(Color::decode("Blue"), Ok(Color::Blue));
        assert!(Color::decode("blue").is_err());
    }

    #[test]
    fn explicit_integers() {
        assert_eq!(Status::decode(404), Ok(Status::NotFound));
        assert_eq!(Status::Teapot.encode().as_i64(), Some(-418));
        assert!(Status::decode("404").is_err());
        assert_eq!(Status::NotFound.ordinal(), 1);
    }

    #[test]
    fn wide_integers_round_trip() {
        assert_eq!(Wide::decode(Wide::Huge.encode()), Ok(Wide::Huge));
        assert_eq!(Wide::decode(u128::MAX), Ok(Wide::Huge));
        assert_eq!(Wide::Huge.encode(), &EncodedValue::from(u128::MAX));
        assert!(Wide::decode(u128::MAX - 1).is_err());
    }

    #[test]
    fn field_keyed_binds_by_name() {
        assert_eq!(Mode::decode("w"), Ok(Mode::Write));
        assert_eq!(Mode::Write.field("exclusive"), Some(&PayloadValue::from(true)));
        assert_eq!(Mode::Read.field("code"), Some(&PayloadValue::from("r")));
    }

    #[test]
    fn canonical_and_ordered() {
        let first = Keyed::decode("foo").unwrap();
        let second = Keyed::decode("foo").unwrap();
        assert_eq!(first, second);
        assert!(std::ptr::eq(first.variant(), second.variant()));

        for (i, entry) in Entry2::variants().enumerate() {
            assert_eq!(entry.ordinal(), i);
            assert_eq!(entry.variant().ordinal(), i);
        }
        assert_eq!(Entry2::from_name("B"), Some(Entry2::B));
        assert_eq!(Entry::A.to_string(), "A");
    }

    #[test]
    #[should_panic(expected = "invalid enumeration `Broken`")]
    fn duplicate_values_are_fatal() {
        let _ = Broken::A.encode();
    }

    #[test]
    fn duplicate_values_stay_fatal_with_diagnostic() {
        for _ in 0..2 {
            let payload = std::panic::catch_unwind(|| Broken::B.encode()).unwrap_err();
            let message = payload
                .downcast_ref::<String>()
                .map(String::as_str)
                .unwrap_or_default();
            assert!(message.starts_with("invalid enumeration `Broken`"), "{message}");
            assert!(message.contains("already used by `A`"), "{message}");
        }
    }

    #[test]
    fn concurrent_first_access() {
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for color in Color::variants() {
                        assert_eq!(Color::decode_ref(color.encode()), Ok(color));
                    }
                });
            }
        });
    }
}
