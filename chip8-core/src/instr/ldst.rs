use super::Chip8Inst;
use crate::consts::memmap::{FONT_ADDR, FONT_GLYPH_BYTES};
use crate::cpu::Chip8Cpu;
use crate::err::Chip8Error;

use log::trace;

///
/// Index-register and memory-block instructions. Everything here goes
/// through the bounds-checked memory accessors, so an index register
/// pointing past the end of memory surfaces as `OutOfBounds` instead of
/// silently wrapping.
///
pub trait Chip8LoadStore {
    fn ld_index(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn add_index(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn ld_font(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn bcd(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn save_regs(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn load_regs(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
}

impl Chip8LoadStore for Chip8Cpu {
    /// Annn: I = nnn.
    fn ld_index(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        self.i = inst.nnn();
        Ok(())
    }

    ///
    /// Fx1E: I += Vx, full 16-bit. VF is NOT set when the sum passes
    /// 0xFFF; interpreters disagree on that quirk and this machine leaves
    /// it out.
    ///
    fn add_index(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        self.i = self.i.wrapping_add(self.v[inst.x()] as u16);
        Ok(())
    }

    ///
    /// Fx29: point I at the font glyph for the hex digit in Vx. Only the
    /// low nibble selects a glyph; there are exactly 16 of them.
    ///
    fn ld_font(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        let digit = (self.v[inst.x()] & 0xF) as usize;
        self.i = (FONT_ADDR + digit * FONT_GLYPH_BYTES) as u16;
        Ok(())
    }

    /// Fx33: decimal digits of Vx into memory[I..I+3], hundreds first.
    fn bcd(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        let vx = self.v[inst.x()];
        let base = self.i as usize;
        trace!("BCD of {} at {:03x}", vx, base);
        self.mem.write_byte(base, vx / 100)?;
        self.mem.write_byte(base + 1, (vx / 10) % 10)?;
        self.mem.write_byte(base + 2, vx % 10)?;
        Ok(())
    }

    /// Fx55: copy V0..=Vx into memory starting at I.
    fn save_regs(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        let base = self.i as usize;
        for idx in 0..=inst.x() {
            self.mem.write_byte(base + idx, self.v[idx])?;
        }
        Ok(())
    }

    /// Fx65: load V0..=Vx from memory starting at I.
    fn load_regs(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        let base = self.i as usize;
        for idx in 0..=inst.x() {
            self.v[idx] = self.mem.read_byte(base + idx)?;
        }
        Ok(())
    }
}
