use super::Chip8Inst;
use crate::cpu::Chip8Cpu;
use crate::err::Chip8Error;

use log::trace;

///
/// Control flow: jumps, subroutine call/return and the conditional skips.
/// By the time any of these run the PC already points past the current
/// instruction, so `call` pushes a correct return address and the skips
/// simply add another instruction width.
///
pub trait Chip8ControlFlow {
    fn jp(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn jp_v0(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn call(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn ret(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn se_imm(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn sne_imm(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn se_reg(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn sne_reg(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
}

impl Chip8ControlFlow for Chip8Cpu {
    /// 1nnn: PC = nnn.
    fn jp(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        self.pc = inst.nnn();
        Ok(())
    }

    /// Bnnn: PC = nnn + V0.
    fn jp_v0(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        self.pc = inst.nnn().wrapping_add(self.v[0] as u16);
        Ok(())
    }

    ///
    /// 2nnn: push the (already advanced) PC onto the call stack and jump.
    /// A 17th nested call exceeds the architectural 16 levels and is a
    /// fatal `StackOverflow`.
    ///
    fn call(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        let ret_addr = self.pc;
        self.stack
            .push(ret_addr)
            .map_err(|_| Chip8Error::StackOverflow)?;
        trace!("CALL {:03x} (return {:03x})", inst.nnn(), ret_addr);
        self.pc = inst.nnn();
        Ok(())
    }

    /// 00EE: pop the call stack into PC. Empty stack is `StackUnderflow`.
    fn ret(&mut self, _inst: &Chip8Inst) -> Result<(), Chip8Error> {
        self.pc = self.stack.pop().ok_or(Chip8Error::StackUnderflow)?;
        Ok(())
    }

    /// 3xkk: skip next if Vx == kk.
    fn se_imm(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        if self.v[inst.x()] == inst.nn() {
            self.skip_next();
        }
        Ok(())
    }

    /// 4xkk: skip next if Vx != kk.
    fn sne_imm(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        if self.v[inst.x()] != inst.nn() {
            self.skip_next();
        }
        Ok(())
    }

    /// 5xy0: skip next if Vx == Vy.
    fn se_reg(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        if self.v[inst.x()] == self.v[inst.y()] {
            self.skip_next();
        }
        Ok(())
    }

    /// 9xy0: skip next if Vx != Vy.
    fn sne_reg(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        if self.v[inst.x()] != self.v[inst.y()] {
            self.skip_next();
        }
        Ok(())
    }
}
