use super::Chip8Inst;
use crate::consts::cpu::REG_VF;
use crate::cpu::Chip8Cpu;
use crate::err::Chip8Error;

use log::trace;

///
/// Register arithmetic and logic: the `6xkk`/`7xkk` immediates, the `8xy*`
/// ALU family and the random-byte instruction.
///
/// All arithmetic wraps modulo 256; overflow is never undefined, it is a
/// defined wraparound plus a defined VF side effect. Where an instruction
/// both writes Vx and sets VF, the flag is computed from the operands
/// before Vx is overwritten, so forms like `8xy5` with x == 0xF stay
/// well-defined (the flag write wins, matching the tabulated semantics).
///
pub trait Chip8Arith {
    fn ld_imm(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn add_imm(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn mov(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn or(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn and(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn xor(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn add(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn sub(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn subn(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn shr(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn shl(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn rnd(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
}

impl Chip8Arith for Chip8Cpu {
    /// 6xkk: Vx = kk.
    fn ld_imm(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        self.v[inst.x()] = inst.nn();
        Ok(())
    }

    /// 7xkk: Vx += kk, wrapping. VF is NOT touched, unlike 8xy4.
    fn add_imm(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        let x = inst.x();
        self.v[x] = self.v[x].wrapping_add(inst.nn());
        Ok(())
    }

    /// 8xy0: Vx = Vy.
    fn mov(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        self.v[inst.x()] = self.v[inst.y()];
        Ok(())
    }

    /// 8xy1: Vx |= Vy.
    fn or(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        self.v[inst.x()] |= self.v[inst.y()];
        Ok(())
    }

    /// 8xy2: Vx &= Vy.
    fn and(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        self.v[inst.x()] &= self.v[inst.y()];
        Ok(())
    }

    /// 8xy3: Vx ^= Vy.
    fn xor(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        self.v[inst.x()] ^= self.v[inst.y()];
        Ok(())
    }

    /// 8xy4: Vx += Vy; VF = carry out of bit 7.
    fn add(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        let (res, carry) = self.v[inst.x()].overflowing_add(self.v[inst.y()]);
        self.v[inst.x()] = res;
        self.v[REG_VF] = carry as u8;
        Ok(())
    }

    /// 8xy5: Vx -= Vy; VF = 1 when there was NO borrow (Vx >= Vy).
    fn sub(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        let (vx, vy) = (self.v[inst.x()], self.v[inst.y()]);
        self.v[inst.x()] = vx.wrapping_sub(vy);
        self.v[REG_VF] = (vx >= vy) as u8;
        Ok(())
    }

    /// 8xy7: Vx = Vy - Vx; VF = 1 when there was NO borrow (Vy >= Vx).
    fn subn(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        let (vx, vy) = (self.v[inst.x()], self.v[inst.y()]);
        self.v[inst.x()] = vy.wrapping_sub(vx);
        self.v[REG_VF] = (vy >= vx) as u8;
        Ok(())
    }

    /// 8xy6: VF = bit 0 of Vx, then Vx >>= 1.
    fn shr(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        let vx = self.v[inst.x()];
        self.v[inst.x()] = vx >> 1;
        self.v[REG_VF] = vx & 0x1;
        Ok(())
    }

    /// 8xyE: VF = bit 7 of Vx, then Vx <<= 1 (wrapping).
    fn shl(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        let vx = self.v[inst.x()];
        self.v[inst.x()] = vx << 1;
        self.v[REG_VF] = vx >> 7;
        Ok(())
    }

    /// Cxkk: Vx = random byte AND kk, drawn from the injected RNG.
    fn rnd(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        let byte = (self.rng.next_u32() & 0xFF) as u8;
        trace!("RND: {:02x} & {:02x}", byte, inst.nn());
        self.v[inst.x()] = byte & inst.nn();
        Ok(())
    }
}
