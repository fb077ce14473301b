use crate::TagId;


#[allow(clippy::float_cmp)]
mod value;

mod input;
mod ser;

macro_rules! check_tags {
    {$($tag:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(TagId::$tag), $val);
            assert_eq!(TagId::try_from($val), Ok(TagId::$tag));
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
        LongArray = 12,
    }

    for value in 13..=u8::MAX {
        assert!(TagId::try_from(value).is_err())
    }
}

#[test]
fn tag_names() {
    assert_eq!(TagId::Compound.to_string(), "TAG_Compound");
    assert_eq!(TagId::LongArray.name(), "TAG_Long_Array");
}
