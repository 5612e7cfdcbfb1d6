//! A fixed size buffer holding a single received DNS message.

use crate::errors::{Error, Result};
use byteorder::{ByteOrder, BE};
use std::convert::TryFrom;
use std::fmt;

/// The classic maximum size of a DNS message sent over UDP. [rfc1035]
///
/// [rfc1035]: https://datatracker.ietf.org/doc/html/rfc1035#section-2.3.4
pub const MAX_MESSAGE_SIZE: usize = 512;

/// A bounds checked view over the bytes of one DNS message, with a read cursor.
///
/// The buffer always has a capacity of `C` bytes (512 by default). Messages
/// shorter than that are zero padded, and every access is checked against the
/// capacity, so nothing ever reads outside the buffer no matter what offsets
/// the (untrusted) message contains.
///
/// # Examples
///
/// ```rust
/// use dnsname::MessageBuffer;
///
/// let mut buf = MessageBuffer::<16>::from_slice(b"\x12\x34\x03www\x00")?;
/// assert_eq!(buf.read_u16()?, 0x1234);
///
/// let name = buf.read_name()?;
/// assert_eq!(name.to_string(), "www");
/// assert_eq!(buf.position(), 7);
/// # Ok::<(), dnsname::Error>(())
/// ```
#[derive(Clone)]
pub struct MessageBuffer<const C: usize = MAX_MESSAGE_SIZE> {
    data: [u8; C],

    /// Number of bytes loaded into `data`.
    len: usize,

    /// The read cursor. Signed, as `step` may move it before the start.
    pos: isize,
}

impl<const C: usize> MessageBuffer<C> {
    /// The capacity of this buffer type.
    pub const CAPACITY: usize = C;

    /// Returns an empty (all zero) buffer.
    pub fn new() -> Self {
        MessageBuffer {
            data: [0; C],
            len: 0,
            pos: 0,
        }
    }

    /// Copies `buf` into a new buffer, with the cursor at the start.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MessageTooLarge`] if `buf` is longer than the capacity.
    pub fn from_slice(buf: &[u8]) -> Result<Self> {
        if buf.len() > C {
            return Err(Error::MessageTooLarge {
                len: buf.len(),
                capacity: C,
            });
        }

        let mut b = Self::new();
        b.data[..buf.len()].copy_from_slice(buf);
        b.len = buf.len();
        Ok(b)
    }

    pub const fn capacity(&self) -> usize {
        C
    }

    /// The number of message bytes that were loaded.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The loaded message bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// The current cursor position. May be negative, or past the capacity,
    /// after a [`step`](Self::step) or [`seek`](Self::seek).
    pub fn position(&self) -> isize {
        self.pos
    }

    /// Returns the number of loaded bytes left between the cursor and the end
    /// of the message.
    pub fn remaining(&self) -> usize {
        match usize::try_from(self.pos) {
            Ok(pos) => self.len.saturating_sub(pos),
            Err(_) => self.len,
        }
    }

    /// Moves the cursor by `delta`, which may be negative.
    ///
    /// The result is not validated. A cursor outside `0..C` is only rejected
    /// by the next read.
    pub fn step(&mut self, delta: isize) {
        self.pos = self.pos.saturating_add(delta);
    }

    /// Moves the cursor to `pos`. Like `step`, this is not validated.
    pub fn seek(&mut self, pos: usize) {
        self.pos = isize::try_from(pos).unwrap_or(isize::MAX);
    }

    /// Returns the byte at `pos`.
    pub fn byte_at(&self, pos: usize) -> Result<u8> {
        match self.data.get(pos) {
            Some(b) => Ok(*b),
            None => Err(out_of_bounds(pos, 1, C)),
        }
    }

    /// Returns the `n` bytes starting at `pos`.
    pub fn range_at(&self, pos: usize, n: usize) -> Result<&[u8]> {
        let end = Self::end_of(pos, n)?;
        Ok(&self.data[pos..end])
    }

    /// Returns the big-endian u16 at `pos`.
    pub fn u16_at(&self, pos: usize) -> Result<u16> {
        Ok(BE::read_u16(self.range_at(pos, 2)?))
    }

    /// Reads the byte at the cursor, and advances the cursor past it.
    pub fn read_byte(&mut self) -> Result<u8> {
        let pos = self.cursor(1)?;
        let b = self.byte_at(pos)?;
        self.pos += 1;
        Ok(b)
    }

    /// Reads `n` bytes at the cursor, and advances the cursor past them.
    pub fn read_range(&mut self, n: usize) -> Result<&[u8]> {
        let pos = self.cursor(n)?;
        let end = Self::end_of(pos, n)?;

        // end <= C, so this can't overflow.
        self.pos += n as isize;
        Ok(&self.data[pos..end])
    }

    /// Reads a big-endian u16 at the cursor, and advances the cursor past it.
    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(BE::read_u16(self.read_range(2)?))
    }

    /// Returns the cursor as an index, failing if it was stepped below zero.
    pub(crate) fn cursor(&self, n: usize) -> Result<usize> {
        usize::try_from(self.pos).map_err(|_| Error::OutOfBounds {
            pos: self.pos,
            len: n,
            capacity: C,
        })
    }

    /// Returns `pos + n`, if that range lies within the buffer.
    fn end_of(pos: usize, n: usize) -> Result<usize> {
        match pos.checked_add(n) {
            Some(end) if end <= C => Ok(end),
            _ => Err(out_of_bounds(pos, n, C)),
        }
    }
}

fn out_of_bounds(pos: usize, len: usize, capacity: usize) -> Error {
    Error::OutOfBounds {
        pos: isize::try_from(pos).unwrap_or(isize::MAX),
        len,
        capacity,
    }
}

impl<const C: usize> Default for MessageBuffer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const C: usize> TryFrom<&[u8]> for MessageBuffer<C> {
    type Error = Error;

    fn try_from(buf: &[u8]) -> Result<Self> {
        Self::from_slice(buf)
    }
}

impl<const C: usize> fmt::Debug for MessageBuffer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageBuffer")
            .field("capacity", &C)
            .field("len", &self.len)
            .field("pos", &self.pos)
            .finish()
    }
}
