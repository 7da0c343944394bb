//! MSB-first bit packing over in-memory buffers.
//!
//! The payload packs bits most-significant-bit first: the first bit written
//! lands in the top bit of the first byte. Both halves track positions so
//! format errors can report where the stream went wrong.

use crate::error::{HuffpackError, Result};
use crate::code::Code;

/// MSB-first bit writer accumulating into a `Vec<u8>`.
#[derive(Debug, Default)]
pub struct MsbBitWriter {
    /// Output buffer.
    output: Vec<u8>,
    /// Bit buffer (MSB-first).
    buffer: u64,
    /// Number of valid bits in the buffer.
    bits_in_buffer: u8,
}

impl MsbBitWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with room for `bytes` output bytes.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            output: Vec::with_capacity(bytes),
            buffer: 0,
            bits_in_buffer: 0,
        }
    }

    /// Write the low `count` bits of `value`, MSB-first (0-32 bits).
    pub fn write_bits(&mut self, value: u32, count: u8) {
        debug_assert!(count <= 32, "cannot write more than 32 bits at once");
        if count == 0 {
            return;
        }

        let mask = (1u64 << count) - 1;
        self.buffer = (self.buffer << count) | (value as u64 & mask);
        self.bits_in_buffer += count;

        // Drain complete bytes from the MSB side.
        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            self.output.push(byte);
            self.bits_in_buffer -= 8;
        }
    }

    /// Write a single bit.
    pub fn write_bit(&mut self, bit: bool) {
        self.write_bits(bit as u32, 1);
    }

    /// Write a whole code, first branch first.
    pub fn write_code(&mut self, code: Code) {
        self.write_bits(code.bits(), code.len());
    }

    /// Total bits written so far.
    pub fn bit_len(&self) -> u64 {
        self.output.len() as u64 * 8 + self.bits_in_buffer as u64
    }

    /// Finish, asserting the stream ended on a byte boundary.
    ///
    /// The packer always pads explicitly before finishing, so a partial
    /// trailing byte here is a bug, not an input condition.
    pub fn into_vec(self) -> Vec<u8> {
        debug_assert_eq!(
            self.bits_in_buffer, 0,
            "packer must pad to a byte boundary before finishing"
        );
        self.output
    }
}

/// MSB-first bit reader over a borrowed byte slice.
#[derive(Debug)]
pub struct MsbBitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Current byte position.
    byte_pos: usize,
    /// Bit buffer (MSB-first).
    buffer: u64,
    /// Number of valid bits in the buffer.
    bits_in_buffer: u8,
    /// Total bits read, for error reporting.
    total_bits_read: u64,
}

impl<'a> MsbBitReader<'a> {
    /// Create a reader over `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    #[inline]
    fn fill_buffer(&mut self, count: u8) -> Result<()> {
        while self.bits_in_buffer < count && self.byte_pos < self.data.len() {
            let byte = self.data[self.byte_pos];
            self.byte_pos += 1;
            self.buffer = (self.buffer << 8) | byte as u64;
            self.bits_in_buffer += 8;
        }

        if self.bits_in_buffer < count {
            return Err(HuffpackError::UnexpectedEof {
                position: self.total_bits_read,
            });
        }
        Ok(())
    }

    /// Read `count` bits (1-32), MSB-first.
    pub fn read_bits(&mut self, count: u8) -> Result<u32> {
        debug_assert!((1..=32).contains(&count), "count must be 1-32");

        self.fill_buffer(count)?;

        let shift = self.bits_in_buffer - count;
        let mask = (1u64 << count) - 1;
        let value = (self.buffer >> shift) & mask;

        self.bits_in_buffer -= count;
        self.total_bits_read += count as u64;

        Ok(value as u32)
    }

    /// Read a single bit.
    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_bits(1)? != 0)
    }

    /// Total bits read so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msb_roundtrip() {
        let mut writer = MsbBitWriter::new();
        writer.write_bits(0b101, 3);
        writer.write_bits(0b1100, 4);
        writer.write_bits(0b11111111, 8);
        writer.write_bits(0, 1);

        let data = writer.into_vec();

        let mut reader = MsbBitReader::new(&data);
        assert_eq!(reader.read_bits(3).unwrap(), 0b101);
        assert_eq!(reader.read_bits(4).unwrap(), 0b1100);
        assert_eq!(reader.read_bits(8).unwrap(), 0b11111111);
        assert_eq!(reader.read_bits(1).unwrap(), 0);
    }

    #[test]
    fn test_first_bit_lands_in_top_position() {
        let mut writer = MsbBitWriter::new();
        writer.write_bit(true);
        writer.write_bits(0, 7);
        assert_eq!(writer.into_vec(), vec![0b1000_0000]);
    }

    #[test]
    fn test_byte_boundary() {
        let mut writer = MsbBitWriter::new();
        writer.write_bits(0xAB, 8);
        let data = writer.into_vec();
        assert_eq!(data, vec![0xAB]);

        let mut reader = MsbBitReader::new(&data);
        assert_eq!(reader.read_bits(8).unwrap(), 0xAB);
    }

    #[test]
    fn test_bit_len_tracks_writes() {
        let mut writer = MsbBitWriter::new();
        assert_eq!(writer.bit_len(), 0);
        writer.write_bits(0b11, 2);
        assert_eq!(writer.bit_len(), 2);
        writer.write_bits(0, 14);
        assert_eq!(writer.bit_len(), 16);
    }

    #[test]
    fn test_reader_eof() {
        let data = vec![0xFF];
        let mut reader = MsbBitReader::new(&data);
        reader.read_bits(8).unwrap();
        let err = reader.read_bit().unwrap_err();
        assert!(matches!(err, HuffpackError::UnexpectedEof { position: 8 }));
    }

    #[test]
    fn test_write_code() {
        let code = crate::code::Code::default()
            .push(true)
            .unwrap()
            .push(false)
            .unwrap()
            .push(true)
            .unwrap();
        let mut writer = MsbBitWriter::new();
        writer.write_code(code);
        writer.write_bits(0, 5);
        assert_eq!(writer.into_vec(), vec![0b1010_0000]);
    }
}
