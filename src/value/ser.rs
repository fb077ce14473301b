use core::result;

use serde::{ser::SerializeMap, Serialize};

use crate::{ByteArray, Compound, Document, IntArray, List, LongArray, NbtString, Tag};

// These impls let a decoded tree be handed to any serde format, eg JSON for
// inspection tools. Type information that the target format has no room for,
// such as Byte versus Int, is lost.

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Tag::End => serializer.serialize_unit(),
            Tag::Byte(v) => serializer.serialize_i8(*v),
            Tag::Short(v) => serializer.serialize_i16(*v),
            Tag::Int(v) => serializer.serialize_i32(*v),
            Tag::Long(v) => serializer.serialize_i64(*v),
            Tag::Float(v) => serializer.serialize_f32(*v),
            Tag::Double(v) => serializer.serialize_f64(*v),
            Tag::String(v) => v.serialize(serializer),
            Tag::ByteArray(v) => v.serialize(serializer),
            Tag::IntArray(v) => v.serialize(serializer),
            Tag::LongArray(v) => v.serialize(serializer),
            Tag::List(v) => v.serialize(serializer),
            Tag::Compound(v) => v.serialize(serializer),
        }
    }
}

impl Serialize for NbtString {
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string_lossy())
    }
}

macro_rules! serialize_seq {
    ($($type:ty),+) => {
        $(
            impl Serialize for $type {
                fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.collect_seq(self.iter())
                }
            }
        )+
    };
}
serialize_seq!(ByteArray, IntArray, LongArray, List);

impl Serialize for Compound {
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.root_name(), self.root())?;
        map.end()
    }
}
