use enumerant::prelude::*;

enumeration! {
    enum Entry as ordinal {
        A { field: "foo" },
        B { field: "bar" },
    }
}

enumeration! {
    enum Entry2 as string { A, B, C }
}

fn check<T: EnumCodec>() {
    for v in T::variants() {
        assert_eq!(T::decode_ref(v.encode()), Ok(v));
    }
    let miss = EncodedValue::from("no such value");
    assert_eq!(
        T::decode_ref(&miss).unwrap_err(),
        NoMatchError::new(T::registry().name(), miss)
    );
}

fn main() {
    check::<Entry>();
    check::<Entry2>();
    assert_eq!(Entry::A.encode(), &EncodedValue::from(0));
    assert_eq!(Entry::B.field("field"), Some(&PayloadValue::from("bar")));
    assert_eq!(Entry2::decode("C"), Ok(Entry2::C));
}
