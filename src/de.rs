//! This module contains the decoder that turns NBT bytes into a [`Document`].
//!
//! NBT is self-describing. Every value is preceded by a one byte tag type, and
//! the tag type decides how the following bytes are read:
//!
//! | Id | Tag | Payload |
//! |----|-----|---------|
//! | 0  | End | none |
//! | 1  | Byte | 1 byte, signed |
//! | 2  | Short | 2 bytes, signed |
//! | 3  | Int | 4 bytes, signed |
//! | 4  | Long | 8 bytes, signed |
//! | 5  | Float | 4 bytes, IEEE-754 |
//! | 6  | Double | 8 bytes, IEEE-754 |
//! | 7  | ByteArray | i32 count, then count bytes |
//! | 8  | String | u16 length, then length bytes |
//! | 9  | List | element tag type, i32 count, then count payloads |
//! | 10 | Compound | repeated (tag type, name string, payload), then End |
//! | 11 | IntArray | i32 count, then count 4 byte ints |
//! | 12 | LongArray | i32 count, then count 8 byte longs |
//!
//! All multi-byte numbers are big-endian. A document is a Compound tag type,
//! a name, and a compound payload.
//!
//! # Example
//!
//! ```
//! use nbt_tree::{from_bytes_with_opts, DeOpts, Tag, TagId};
//!
//! let data = [
//!     10, 0, 4, b'r', b'o', b'o', b't', // root compound named "root"
//!     9, 0, 1, b'l', 3, 0, 0, 0, 2, // list "l" of 2 ints
//!     0, 0, 0, 1, //
//!     0, 0, 0, 2, //
//!     0, // end of root
//! ];
//!
//! let doc = from_bytes_with_opts(&data, DeOpts::new().max_depth(8)).unwrap();
//! let list = doc["l"].as_list().unwrap();
//!
//! assert_eq!(doc.root_name(), "root");
//! assert_eq!(list.element_id(), TagId::Int);
//! assert_eq!(list.as_slice(), &[Tag::Int(1), Tag::Int(2)]);
//! ```
//!
//! # Errors
//!
//! Decoding stops at the first problem and the whole document is rejected.
//! See [`ErrorKind`][crate::error::ErrorKind] for what can go wrong. Bytes
//! after the root compound are ignored unless
//! [`DeOpts::allow_trailing_data`] says otherwise.

use log::{debug, trace};

use crate::{
    error::{Error, Result},
    input::Input,
    ByteArray, Compound, Document, IntArray, List, LongArray, NbtString, Tag, TagId,
};

/// Nesting limit used by [`DeOpts::new`].
///
/// The decoder recurses once per level of nesting. An unoptimised build uses a
/// few kilobytes of stack per level, so 128 levels fit comfortably in the 2 MiB
/// stack that spawned threads get by default. Game data rarely nests deeper
/// than a few dozen levels.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options for customizing decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeOpts {
    pub(crate) max_depth: usize,
    pub(crate) max_seq_len: usize,
    pub(crate) allow_trailing_data: bool,
}

impl DeOpts {
    /// Create new options. This object follows a builder pattern.
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_seq_len: i32::MAX as usize,
            allow_trailing_data: true,
        }
    }

    /// Maximum nesting of compounds and lists. The root compound is at depth
    /// 1, and every compound or list inside adds one. Defaults to
    /// [`DEFAULT_MAX_DEPTH`].
    ///
    /// Minecraft itself accepts up to 512. Raising the limit that far needs a
    /// thread with a larger stack than the default, see
    /// [`std::thread::Builder::stack_size`].
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }

    /// Maximum number of elements a list or array may declare. Useful to
    /// limit memory use on untrusted input. Defaults to `i32::MAX`, ie no
    /// limit beyond what the format allows.
    pub fn max_seq_len(mut self, value: usize) -> Self {
        self.max_seq_len = value;
        self
    }

    /// Whether bytes after the root compound are ignored (the default) or
    /// rejected with [`ErrorKind::TrailingData`][crate::error::ErrorKind].
    pub fn allow_trailing_data(mut self, value: bool) -> Self {
        self.allow_trailing_data = value;
        self
    }
}

impl Default for DeOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode an NBT document from a byte buffer with default options.
///
/// The buffer must already be decompressed.
pub fn from_bytes(input: &[u8]) -> Result<Document> {
    from_bytes_with_opts(input, DeOpts::new())
}

/// Decode an NBT document from a byte buffer with the given options.
pub fn from_bytes_with_opts(input: &[u8], opts: DeOpts) -> Result<Document> {
    Decoder::new(input, opts).decode_document()
}

/// Recursive decoder for NBT. Owns the cursor for one buffer, so a decoder
/// cannot be shared between decodes.
pub struct Decoder<'de> {
    input: Input<'de>,
    opts: DeOpts,
    depth: usize,
}

impl<'de> Decoder<'de> {
    /// Create a decoder positioned at the start of `input`.
    pub fn new(input: &'de [u8], opts: DeOpts) -> Self {
        Self {
            input: Input::new(input),
            opts,
            depth: 0,
        }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.input.position()
    }

    /// Decode a document: a Compound tag type, the root name and the root
    /// compound.
    ///
    /// Decoding starts wherever the previous call stopped. With trailing data
    /// allowed, calling this again reads the next document of a buffer holding
    /// several back to back. After an error the position is unspecified.
    pub fn decode_document(&mut self) -> Result<Document> {
        debug!(
            "decoding nbt document of {} bytes",
            self.input.remaining() + self.position()
        );

        match self.input.peek(2) {
            [0x1f, 0x8b] => return Err(Error::compressed_input(0x1f, "gzip")),
            [0x78, 0x01 | 0x5e | 0x9c | 0xda] => {
                return Err(Error::compressed_input(0x78, "zlib"))
            }
            _ => {}
        }

        let first = self.input.consume_byte()?;
        if first != u8::from(TagId::Compound) {
            return Err(Error::no_root_compound(first));
        }

        let name = self.decode_string()?;
        let root = self.decode_compound()?;

        let remaining = self.input.remaining();
        if remaining > 0 {
            if !self.opts.allow_trailing_data {
                return Err(Error::trailing_data(self.position(), remaining));
            }
            debug!("ignoring {} bytes after root compound", remaining);
        }

        debug!(
            "decoded root compound {:?}: {} entries, {} bytes",
            name,
            root.len(),
            self.position()
        );

        Ok(Document::new(name, root))
    }

    /// Decode the payload of a tag of type `id`.
    ///
    /// This frame is on the stack once per level of nesting, so anything
    /// bigger than a scalar is decoded in its own function.
    fn decode_value(&mut self, id: TagId) -> Result<Tag> {
        Ok(match id {
            TagId::Byte => Tag::Byte(self.input.consume_i8()?),
            TagId::Short => Tag::Short(self.input.consume_i16()?),
            TagId::Int => Tag::Int(self.input.consume_i32()?),
            TagId::Long => Tag::Long(self.input.consume_i64()?),
            TagId::Float => Tag::Float(self.input.consume_f32()?),
            TagId::Double => Tag::Double(self.input.consume_f64()?),
            TagId::String => Tag::String(self.decode_string()?),
            TagId::ByteArray | TagId::IntArray | TagId::LongArray => self.decode_array(id)?,
            TagId::List => self.decode_list_tag()?,
            TagId::Compound => self.decode_compound_tag()?,
            // End has no payload, so it cannot be a value. Lists of End are
            // caught before getting here, and compounds stop when they see it.
            TagId::End => return Err(Error::unexpected_end(self.position())),
        })
    }

    #[inline(never)]
    fn decode_array(&mut self, id: TagId) -> Result<Tag> {
        let len = self.consume_seq_len()?;
        Ok(match id {
            TagId::ByteArray => Tag::ByteArray(ByteArray::new(self.input.consume_bytes(len)?)),
            TagId::IntArray => Tag::IntArray(IntArray::new(self.input.consume_ints(len)?)),
            _ => Tag::LongArray(LongArray::new(self.input.consume_longs(len)?)),
        })
    }

    #[inline(never)]
    fn decode_list_tag(&mut self) -> Result<Tag> {
        self.decode_list().map(Tag::List)
    }

    #[inline(never)]
    fn decode_compound_tag(&mut self) -> Result<Tag> {
        self.decode_compound().map(Tag::Compound)
    }

    fn decode_string(&mut self) -> Result<NbtString> {
        Ok(NbtString::from_raw(self.input.consume_str()?.to_vec()))
    }

    fn decode_list(&mut self) -> Result<List> {
        self.enter()?;
        let list = self.decode_list_body();
        self.depth -= 1;
        list
    }

    #[inline(never)]
    fn decode_list_body(&mut self) -> Result<List> {
        let id_offset = self.position();
        let element_id = self.input.consume_tag()?;
        let len = self.consume_seq_len()?;

        // Old chunks store empty lists as 'list of end', so a size of zero is
        // fine. Anything else would be a list of values with no payload.
        if element_id == TagId::End {
            if len != 0 {
                return Err(Error::unexpected_end(id_offset));
            }
            return Ok(List::empty());
        }

        trace!("list of {} {}", len, element_id);

        // Every non-End payload is at least one byte, so this bounds the
        // allocation by the input size rather than the declared length.
        let mut items = Vec::with_capacity(len.min(self.input.remaining()));
        for _ in 0..len {
            items.push(self.decode_value(element_id)?);
        }

        Ok(List::from_decoded(element_id, items))
    }

    fn decode_compound(&mut self) -> Result<Compound> {
        self.enter()?;
        let compound = self.decode_compound_body();
        self.depth -= 1;
        compound
    }

    #[inline(never)]
    fn decode_compound_body(&mut self) -> Result<Compound> {
        let mut compound = Compound::new();

        loop {
            let id = self.input.consume_tag()?;
            if id == TagId::End {
                return Ok(compound);
            }

            let name = self.decode_string()?;
            trace!("compound entry {:?} of {}", name, id);

            let value = self.decode_value(id)?;
            compound.insert(name, value);
        }
    }

    fn consume_seq_len(&mut self) -> Result<usize> {
        let offset = self.position();
        let len = self.input.consume_len()?;
        if len > self.opts.max_seq_len {
            return Err(Error::length_too_large(offset, len, self.opts.max_seq_len));
        }
        Ok(len)
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.opts.max_depth {
            return Err(Error::too_deep(self.position(), self.opts.max_depth));
        }
        self.depth += 1;
        Ok(())
    }
}
