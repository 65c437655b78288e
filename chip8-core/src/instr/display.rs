use super::Chip8Inst;
use crate::consts::cpu::REG_VF;
use crate::consts::display::{HEIGHT, WIDTH};
use crate::cpu::Chip8Cpu;
use crate::err::Chip8Error;

use log::trace;

///
/// The two framebuffer instructions: clear and sprite draw.
///
pub trait Chip8Display {
    fn cls(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn drw(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
}

impl Chip8Display for Chip8Cpu {
    /// 00E0: all pixels off.
    fn cls(&mut self, _inst: &Chip8Inst) -> Result<(), Chip8Error> {
        self.fb.clear();
        Ok(())
    }

    ///
    /// Dxyn: XOR-composite an n-row sprite from memory[I..I+n) at
    /// (Vx mod 64, Vy mod 32). The origin wraps, and so does each pixel
    /// individually, on both axes. VF becomes 1 exactly when some
    /// previously lit pixel was turned off, else 0. Drawing the same sprite
    /// twice at the same spot is therefore a screen-level no-op that leaves
    /// VF = 1 after the second draw.
    ///
    fn drw(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        let origin_x = self.v[inst.x()] as usize % WIDTH;
        let origin_y = self.v[inst.y()] as usize % HEIGHT;
        let height = inst.n() as usize;
        trace!("DRW {}x8 sprite at ({}, {})", height, origin_x, origin_y);

        self.v[REG_VF] = 0;
        for row in 0..height {
            let bits = self.mem.read_byte(self.i as usize + row)?;
            for col in 0..8 {
                if (bits >> (7 - col)) & 1 == 0 {
                    continue;
                }
                let x = (origin_x + col) % WIDTH;
                let y = (origin_y + row) % HEIGHT;
                if self.fb.flip(x, y) {
                    self.v[REG_VF] = 1;
                }
            }
        }
        Ok(())
    }
}
