pub mod fb;
pub mod keypad;
pub mod rom;
pub mod timer;

pub use fb::FrameBuffer;
pub use keypad::Keypad;
pub use timer::Chip8Timers;

use log::trace;

use crate::consts::memmap;
use crate::err::Chip8Error;

/// Font sprite table: 16 glyphs (hex digits 0-F), 5 bytes per glyph. Copied
/// to `FONT_ADDR` when the memory map is built and never touched again.
pub const FONT_SET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

///
/// Flat 4 KiB CHIP-8 address space:
///
///   0x000-0x04F  reserved (interpreter area on the original machine)
///   0x050-0x09F  font sprite table
///   0x200-0xFFF  program ROM and working memory
///
/// Every indexed access is bounds-checked and reports `OutOfBounds` instead
/// of wrapping or truncating the address.
///
pub struct Chip8MemoryMap {
    bytes: [u8; memmap::MEM_SIZE],
}

impl Chip8MemoryMap {
    pub fn new() -> Chip8MemoryMap {
        let mut mm = Chip8MemoryMap {
            bytes: [0; memmap::MEM_SIZE],
        };
        mm.bytes[memmap::FONT_ADDR..memmap::FONT_ADDR + FONT_SET.len()]
            .copy_from_slice(&FONT_SET);
        mm
    }

    ///
    /// Copy a fully materialized ROM into memory at `PROGRAM_ADDR`. The load
    /// is all-or-nothing: an oversized ROM fails with `RomTooLarge` before a
    /// single byte is written.
    ///
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), Chip8Error> {
        if rom.len() > memmap::MAX_ROM_BYTES {
            return Err(Chip8Error::RomTooLarge {
                len: rom.len(),
                max: memmap::MAX_ROM_BYTES,
            });
        }
        trace!("Loading {} byte ROM at {:#05x}", rom.len(), memmap::PROGRAM_ADDR);
        self.bytes[memmap::PROGRAM_ADDR..memmap::PROGRAM_ADDR + rom.len()]
            .copy_from_slice(rom);
        Ok(())
    }

    pub fn read_byte(&self, addr: usize) -> Result<u8, Chip8Error> {
        match self.bytes.get(addr) {
            Some(b) => Ok(*b),
            None => Err(Chip8Error::OutOfBounds { addr }),
        }
    }

    pub fn write_byte(&mut self, addr: usize, val: u8) -> Result<(), Chip8Error> {
        match self.bytes.get_mut(addr) {
            Some(b) => {
                *b = val;
                Ok(())
            }
            None => Err(Chip8Error::OutOfBounds { addr }),
        }
    }

    ///
    /// Fetch a big-endian 16-bit word: high byte at `addr`, low byte at
    /// `addr + 1`. Fails with `OutOfBounds` when either byte falls outside
    /// memory, which is reachable since jumps may place the PC anywhere in
    /// the 12-bit address space.
    ///
    pub fn read_word(&self, addr: usize) -> Result<u16, Chip8Error> {
        let high = self.read_byte(addr)?;
        let low = self.read_byte(addr + 1)?;
        Ok((high as u16) << 8 | low as u16)
    }
}

#[cfg(test)]
mod memmap_tests {
    use super::*;
    use crate::consts::memmap::{FONT_ADDR, MAX_ROM_BYTES, MEM_SIZE, PROGRAM_ADDR};

    #[test]
    fn test_memory_zeroed_outside_font() {
        let mm = Chip8MemoryMap::new();
        assert_eq!(mm.bytes[..FONT_ADDR], [0; FONT_ADDR]);
        assert_eq!(mm.bytes[PROGRAM_ADDR..], [0; MEM_SIZE - PROGRAM_ADDR]);
    }

    #[test]
    fn test_font_copied_at_reserved_addr() {
        let mm = Chip8MemoryMap::new();
        assert_eq!(mm.bytes[FONT_ADDR..FONT_ADDR + 80], FONT_SET);
        // Glyph 0 starts with 0xF0, glyph 1 with 0x20.
        assert_eq!(mm.read_byte(FONT_ADDR).unwrap(), 0xF0);
        assert_eq!(mm.read_byte(FONT_ADDR + 5).unwrap(), 0x20);
    }

    #[test]
    fn test_load_rom_at_program_addr() {
        let mut mm = Chip8MemoryMap::new();
        mm.load_rom(&[0x00, 0xE0, 0x12, 0x00]).unwrap();
        assert_eq!(mm.read_word(PROGRAM_ADDR).unwrap(), 0x00E0);
        assert_eq!(mm.read_word(PROGRAM_ADDR + 2).unwrap(), 0x1200);
    }

    #[test]
    fn test_load_rom_boundary_sizes() {
        let mut mm = Chip8MemoryMap::new();

        // Exactly the available space succeeds.
        let full = vec![0xAA; MAX_ROM_BYTES];
        mm.load_rom(&full).unwrap();
        assert_eq!(mm.read_byte(MEM_SIZE - 1).unwrap(), 0xAA);

        // One byte more is rejected, and memory is untouched by the attempt.
        let oversize = vec![0x55; MAX_ROM_BYTES + 1];
        assert_eq!(
            mm.load_rom(&oversize).unwrap_err(),
            Chip8Error::RomTooLarge {
                len: MAX_ROM_BYTES + 1,
                max: MAX_ROM_BYTES
            }
        );
        assert_eq!(mm.read_byte(PROGRAM_ADDR).unwrap(), 0xAA);
    }

    #[test]
    fn test_read_word_big_endian() {
        let mut mm = Chip8MemoryMap::new();
        mm.write_byte(0x300, 0x12).unwrap();
        mm.write_byte(0x301, 0x34).unwrap();
        assert_eq!(mm.read_word(0x300).unwrap(), 0x1234);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut mm = Chip8MemoryMap::new();
        assert_eq!(
            mm.read_byte(MEM_SIZE).unwrap_err(),
            Chip8Error::OutOfBounds { addr: MEM_SIZE }
        );
        assert_eq!(
            mm.write_byte(MEM_SIZE, 0).unwrap_err(),
            Chip8Error::OutOfBounds { addr: MEM_SIZE }
        );
        // A word fetch at the last byte straddles the end of memory.
        assert_eq!(
            mm.read_word(MEM_SIZE - 1).unwrap_err(),
            Chip8Error::OutOfBounds { addr: MEM_SIZE }
        );
    }
}
