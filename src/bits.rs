//! Sequential bit-level reading and writing.
//!
//! Values are written most significant bit first, and bits fill each byte starting from its most
//! significant bit. The stream is one continuous run of bits; only the final byte is padded, with
//! zeros.

use crate::error::{Error, Result};

/// Widest value that can be appended or read in one call.
pub const MAX_WIDTH: usize = 64;

fn low_mask(width: usize) -> u64 {
    if width >= MAX_WIDTH {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Append-only bit stream.
#[derive(Clone, Debug, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with room for `bits` bits before it needs to grow.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity((bits + 7) / 8),
            bit_len: 0,
        }
    }

    /// Number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Append the low `width` bits of `value`. Fails instead of truncating if `value` needs more
    /// than `width` bits.
    pub fn append(&mut self, value: u64, width: usize) -> Result<()> {
        if width > MAX_WIDTH || value & !low_mask(width) != 0 {
            return Err(Error::ValueOverflow { value, width });
        }
        let mut remaining = width;
        while remaining > 0 {
            let used = self.bit_len % 8;
            if used == 0 {
                self.bytes.push(0);
            }
            let free = 8 - used;
            let take = free.min(remaining);
            let chunk = ((value >> (remaining - take)) & low_mask(take)) as u8;
            if let Some(last) = self.bytes.last_mut() {
                *last |= chunk << (free - take);
            }
            remaining -= take;
            self.bit_len += take;
        }
        Ok(())
    }

    /// Finish writing. The result is `ceil(bit_len / 8)` bytes long, with unused trailing bits
    /// left at zero.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Sequential reader over a byte slice, starting at bit 0.
#[derive(Clone, Debug)]
pub struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bit offset of the next read.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bits left before the end of the data, including any trailing pad bits.
    pub fn remaining(&self) -> usize {
        self.data.len() * 8 - self.pos
    }

    /// Read the next `width` bits as an unsigned integer and advance past them.
    pub fn read(&mut self, width: usize) -> Result<u64> {
        if width > MAX_WIDTH {
            return Err(Error::ValueOverflow {
                value: 0,
                width,
            });
        }
        let remaining = self.remaining();
        if width > remaining {
            return Err(Error::BufferUnderflow {
                requested: width,
                remaining,
            });
        }
        let mut value = 0u64;
        let mut left = width;
        while left > 0 {
            let byte = self.data[self.pos / 8];
            let avail = 8 - (self.pos % 8);
            let take = avail.min(left);
            let chunk = (byte >> (avail - take)) as u64 & low_mask(take);
            value = (value << take) | chunk;
            left -= take;
            self.pos += take;
        }
        Ok(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn packs_msb_first() {
        let mut w = BitWriter::new();
        w.append(0b0001, 4).unwrap();
        w.append(0b1000, 4).unwrap();
        w.append(0b101, 3).unwrap();
        assert_eq!(w.bit_len(), 11);
        assert_eq!(w.into_bytes(), vec![0x18, 0b1010_0000]);
    }

    #[test]
    fn spans_byte_boundaries() {
        let mut w = BitWriter::new();
        w.append(0b11, 2).unwrap();
        w.append(0xABCD, 16).unwrap();
        w.append(0, 6).unwrap();
        let bytes = w.into_bytes();
        assert_eq!(bytes, vec![0b1110_1010, 0b1111_0011, 0b0100_0000]);

        let mut r = BitReader::new(&bytes);
        assert_eq!(r.read(2).unwrap(), 0b11);
        assert_eq!(r.read(16).unwrap(), 0xABCD);
        assert_eq!(r.read(6).unwrap(), 0);
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn full_width_values() {
        let mut w = BitWriter::with_capacity(68);
        w.append(0b1, 4).unwrap();
        w.append(u64::MAX, 64).unwrap();
        let bytes = w.into_bytes();
        assert_eq!(bytes.len(), 9);
        let mut r = BitReader::new(&bytes);
        assert_eq!(r.read(4).unwrap(), 1);
        assert_eq!(r.read(64).unwrap(), u64::MAX);
    }

    #[test]
    fn zero_width_is_a_no_op() {
        let mut w = BitWriter::new();
        w.append(0, 0).unwrap();
        assert_eq!(w.bit_len(), 0);
        assert!(w.into_bytes().is_empty());
        let mut r = BitReader::new(&[]);
        assert_eq!(r.read(0).unwrap(), 0);
    }

    #[test]
    fn rejects_values_wider_than_field() {
        let mut w = BitWriter::new();
        assert_eq!(
            w.append(16, 4),
            Err(Error::ValueOverflow { value: 16, width: 4 })
        );
        assert_eq!(
            w.append(1, 0),
            Err(Error::ValueOverflow { value: 1, width: 0 })
        );
        assert_eq!(w.bit_len(), 0, "failed appends shouldn't write anything");
    }

    #[test]
    fn underflow() {
        let data = [0xFF];
        let mut r = BitReader::new(&data);
        r.read(6).unwrap();
        assert_eq!(
            r.read(4),
            Err(Error::BufferUnderflow {
                requested: 4,
                remaining: 2
            })
        );
        assert_eq!(r.position(), 6, "failed reads shouldn't advance");
    }
}
