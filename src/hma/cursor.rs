//! Forward-only primitive reader for HMA byte streams

use byteorder::{BigEndian, ReadBytesExt};
use std::io::Cursor;

use crate::error::{Error, Result};

/// Cursor over an in-memory HMA file.
///
/// Every read checks the remaining length first so that a short file surfaces
/// as [`Error::TruncatedInput`] with the offending offset, never as a bare EOF.
pub struct HmaCursor<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> HmaCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(data),
        }
    }

    /// Current byte offset from the start of the file
    pub fn position(&self) -> u64 {
        self.cursor.position()
    }

    /// Bytes left before end of stream
    pub fn remaining(&self) -> usize {
        let len = self.cursor.get_ref().len() as u64;
        len.saturating_sub(self.cursor.position()) as usize
    }

    fn ensure(&self, needed: usize) -> Result<()> {
        let available = self.remaining();
        if available < needed {
            return Err(Error::TruncatedInput {
                offset: self.position(),
                needed,
                available,
            });
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        Ok(self.cursor.read_u8()?)
    }

    /// Two unsigned bytes recombined as `lo + (hi << 8)`.
    pub fn read_u16(&mut self) -> Result<u16> {
        self.ensure(2)?;
        let lo = self.read_u8()? as u16;
        let hi = self.read_u8()? as u16;
        Ok(lo + (hi << 8))
    }

    /// A 32-bit word read big-endian, byte-reversed, then reinterpreted as IEEE-754.
    pub fn read_f32(&mut self) -> Result<f32> {
        self.ensure(4)?;
        let word = self.cursor.read_u32::<BigEndian>()?;
        Ok(f32::from_bits(word.swap_bytes()))
    }

    /// Borrow the next `len` bytes without copying.
    pub fn read_blob(&mut self, len: usize) -> Result<&'a [u8]> {
        self.ensure(len)?;
        let data: &'a [u8] = *self.cursor.get_ref();
        let start = self.cursor.position() as usize;
        self.cursor.set_position((start + len) as u64);
        Ok(&data[start..start + len])
    }

    /// A u16 length followed by that many bytes.
    pub fn read_prefixed_blob(&mut self) -> Result<&'a [u8]> {
        let len = self.read_u16()? as usize;
        self.read_blob(len)
    }

    /// A u16 length followed by that many bytes of text (invalid UTF-8 is replaced)
    pub fn read_prefixed_text(&mut self) -> Result<String> {
        let bytes = self.read_prefixed_blob()?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.ensure(len)?;
        let pos = self.cursor.position();
        self.cursor.set_position(pos + len as u64);
        Ok(())
    }
}
