use byteorder::{BigEndian, ByteOrder};

use crate::{
    error::{Error, Result},
    TagId,
};

/// Cursor over an immutable NBT buffer. Every read checks that enough bytes
/// remain before it consumes any of them, so a failed read leaves the cursor
/// where it was.
pub(crate) struct Input<'de> {
    data: &'de [u8],
    pos: usize,
}

impl<'de> Input<'de> {
    pub(crate) fn new(data: &'de [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub(crate) fn peek(&self, n: usize) -> &'de [u8] {
        let end = self.data.len().min(self.pos + n);
        &self.data[self.pos..end]
    }

    /// Byte size of `len` elements of `width` bytes. Overflow means more bytes
    /// than could ever remain.
    fn try_size(&self, len: usize, width: usize) -> Result<usize> {
        len.checked_mul(width)
            .ok_or_else(|| Error::unexpected_eof(self.pos, usize::MAX, self.remaining()))
    }

    fn consume(&mut self, n: usize) -> Result<&'de [u8]> {
        if n <= self.remaining() {
            let ret = &self.data[self.pos..self.pos + n];
            self.pos += n;
            Ok(ret)
        } else {
            Err(Error::unexpected_eof(self.pos, n, self.remaining()))
        }
    }

    pub(crate) fn consume_byte(&mut self) -> Result<u8> {
        Ok(self.consume(1)?[0])
    }

    pub(crate) fn consume_i8(&mut self) -> Result<i8> {
        Ok(self.consume_byte()? as i8)
    }

    pub(crate) fn consume_i16(&mut self) -> Result<i16> {
        Ok(BigEndian::read_i16(self.consume(2)?))
    }

    pub(crate) fn consume_u16(&mut self) -> Result<u16> {
        Ok(BigEndian::read_u16(self.consume(2)?))
    }

    pub(crate) fn consume_i32(&mut self) -> Result<i32> {
        Ok(BigEndian::read_i32(self.consume(4)?))
    }

    pub(crate) fn consume_i64(&mut self) -> Result<i64> {
        Ok(BigEndian::read_i64(self.consume(8)?))
    }

    pub(crate) fn consume_f32(&mut self) -> Result<f32> {
        Ok(BigEndian::read_f32(self.consume(4)?))
    }

    pub(crate) fn consume_f64(&mut self) -> Result<f64> {
        Ok(BigEndian::read_f64(self.consume(8)?))
    }

    /// Read a tag type byte, failing if it is not one of the 13 known tags.
    pub(crate) fn consume_tag(&mut self) -> Result<TagId> {
        let offset = self.pos;
        let tag = self.consume_byte()?;
        TagId::try_from(tag).map_err(|_| Error::invalid_tag(offset, tag))
    }

    /// Read a string. The length prefix is an unsigned 16 bit count, so
    /// strings can be up to 65535 bytes long. The bytes are returned as-is.
    pub(crate) fn consume_str(&mut self) -> Result<&'de [u8]> {
        let offset = self.pos;
        let len = self.consume_u16()? as usize;
        self.consume(len).map_err(|e| {
            // Rewind over the length so the cursor is unchanged on failure.
            self.pos = offset;
            e
        })
    }

    /// Read the i32 element count that precedes arrays and lists. Negative
    /// counts are invalid rather than being reinterpreted as unsigned.
    pub(crate) fn consume_len(&mut self) -> Result<usize> {
        let offset = self.pos;
        let len = self.consume_i32()?;
        usize::try_from(len).map_err(|_| {
            self.pos = offset;
            Error::negative_length(offset, len)
        })
    }

    pub(crate) fn consume_bytes(&mut self, len: usize) -> Result<Vec<i8>> {
        Ok(self.consume(len)?.iter().map(|b| *b as i8).collect())
    }

    pub(crate) fn consume_ints(&mut self, len: usize) -> Result<Vec<i32>> {
        let size = self.try_size(len, std::mem::size_of::<i32>())?;
        let bs = self.consume(size)?;
        let mut out = vec![0; len];
        BigEndian::read_i32_into(bs, &mut out);
        Ok(out)
    }

    pub(crate) fn consume_longs(&mut self, len: usize) -> Result<Vec<i64>> {
        let size = self.try_size(len, std::mem::size_of::<i64>())?;
        let bs = self.consume(size)?;
        let mut out = vec![0; len];
        BigEndian::read_i64_into(bs, &mut out);
        Ok(out)
    }
}
