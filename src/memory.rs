use crate::constants;
use byteorder::ByteOrder;
use util::Endian;

/// The flat 64 KiB byte-addressable RAM of the machine.
///
/// Addresses wrap at the 16-bit boundary, so a 16-bit access at `0xFFFF`
/// touches `0xFFFF` and `0x0000`. The memory-mapped ports are *not* handled
/// here; this type is plain storage and the processor dispatches port
/// accesses before they reach it.
///
/// # Examples
/// ```
/// use scpu::Memory;
///
/// let mut memory = Memory::new();
/// memory.write_u16(0x0200, 0xBEEF);
/// assert_eq!(memory.read_u16(0x0200), 0xBEEF);
/// assert_eq!(memory.read_byte(0x0200), 0xEF);
/// assert_eq!(memory.read_byte(0x0201), 0xBE);
/// ```
pub struct Memory {
    data: Vec<u8>,
}

impl Memory {
    /// Constructs a zeroed memory.
    pub fn new() -> Memory {
        Memory {
            data: vec![0; constants::MEMORY_SIZE],
        }
    }

    /// Returns the whole address space as a slice.
    pub fn data(&self) -> &[u8] {
        &self.data[..]
    }

    pub fn read_byte(&self, address: u16) -> u8 {
        self.data[address as usize]
    }

    pub fn write_byte(&mut self, address: u16, value: u8) {
        self.data[address as usize] = value;
    }

    /// Reads a little-endian 16-bit value; the high byte wraps around the
    /// end of the address space.
    pub fn read_u16(&self, address: u16) -> u16 {
        let bytes = [
            self.read_byte(address),
            self.read_byte(address.wrapping_add(1)),
        ];
        Endian::read_u16(&bytes)
    }

    /// Writes a little-endian 16-bit value; the high byte wraps around the
    /// end of the address space.
    pub fn write_u16(&mut self, address: u16, value: u16) {
        let mut bytes = [0u8; 2];
        Endian::write_u16(&mut bytes, value);
        self.write_byte(address, bytes[0]);
        self.write_byte(address.wrapping_add(1), bytes[1]);
    }

    /// Copies `bytes` into memory starting at `address`.
    ///
    /// # Panics
    /// Panics if the range does not fit; callers bound-check against
    /// [`MAX_IMAGE_SIZE`](../constants/constant.MAX_IMAGE_SIZE.html) first.
    pub fn load(&mut self, address: u16, bytes: &[u8]) {
        let start = address as usize;
        let end = start + bytes.len();
        assert!(end <= self.data.len());
        self.data[start..end].copy_from_slice(bytes);
    }
}

impl Default for Memory {
    fn default() -> Memory {
        Memory::new()
    }
}
