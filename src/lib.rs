//! nbt-tree decodes NBT data from *Minecraft: Java Edition* into an owned
//! tree of typed tags. NBT is used by the game to store world data, player
//! inventories and most other persistent state.
//!
//! * For decoding a byte buffer see [`from_bytes`] and [`de`].
//! * For the tag tree see [`Tag`], [`Compound`] and [`List`].
//! * For NBT array types see [`ByteArray`], [`IntArray`], and [`LongArray`].
//!
//! The decoder works on a buffer that is already fully in memory. Files on
//! disk are usually compressed with GZip (`level.dat`, player data) or zlib
//! (region chunks), and need decompressing first, for example with `flate2`.
//!
//! # Quick example
//!
//! ```
//! use nbt_tree::{from_bytes, Tag};
//!
//! // A root compound named "" holding one byte named "a".
//! let data = [10, 0, 0, 1, 0, 1, b'a', 5, 0];
//! let doc = from_bytes(&data).unwrap();
//!
//! assert_eq!(doc.root_name(), "");
//! assert_eq!(doc.root()["a"], Tag::Byte(5));
//! ```
//!
//! # Failure
//!
//! Decoding either produces a complete [`Document`] or an [`error::Error`].
//! There is never a partially decoded tree: the format has no way to
//! resynchronise after a corrupted byte. The error distinguishes running out
//! of input from input that breaks the grammar, see [`error::ErrorKind`].
//!
//! # Nesting
//!
//! Lists and compounds can nest arbitrarily deep. The decoder is recursive, so
//! it refuses to go deeper than [`DeOpts::max_depth`] rather than overflowing
//! the stack on hostile input.

pub mod de;
pub mod error;

mod arrays;
mod input;
mod string;
mod value;

pub use arrays::*;
pub use de::{from_bytes, from_bytes_with_opts, DeOpts, Decoder, DEFAULT_MAX_DEPTH};
pub use string::NbtString;
pub use value::*;

#[cfg(test)]
mod test;

use std::fmt;

/// An NBT tag type identifier. This does not carry the value or the name of
/// the data, just the single byte that precedes it on the wire.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(u8)]
pub enum TagId {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a string, nominally Java's modified UTF-8.
    String = 8,
    /// Represents a list of other tags, all of the same type.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

// Crates exist to generate this code for us, but the tags will very rarely
// change so writing it out isn't a massive burden.
impl TryFrom<u8> for TagId {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use TagId::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<TagId> for u8 {
    fn from(id: TagId) -> Self {
        match id {
            TagId::End => 0,
            TagId::Byte => 1,
            TagId::Short => 2,
            TagId::Int => 3,
            TagId::Long => 4,
            TagId::Float => 5,
            TagId::Double => 6,
            TagId::ByteArray => 7,
            TagId::String => 8,
            TagId::List => 9,
            TagId::Compound => 10,
            TagId::IntArray => 11,
            TagId::LongArray => 12,
        }
    }
}

impl TagId {
    /// The conventional name of the tag type, eg `TAG_Compound`.
    pub fn name(self) -> &'static str {
        match self {
            TagId::End => "TAG_End",
            TagId::Byte => "TAG_Byte",
            TagId::Short => "TAG_Short",
            TagId::Int => "TAG_Int",
            TagId::Long => "TAG_Long",
            TagId::Float => "TAG_Float",
            TagId::Double => "TAG_Double",
            TagId::ByteArray => "TAG_Byte_Array",
            TagId::String => "TAG_String",
            TagId::List => "TAG_List",
            TagId::Compound => "TAG_Compound",
            TagId::IntArray => "TAG_Int_Array",
            TagId::LongArray => "TAG_Long_Array",
        }
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
