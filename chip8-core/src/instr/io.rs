use super::Chip8Inst;
use crate::cpu::Chip8Cpu;
use crate::err::Chip8Error;

use log::trace;

///
/// Keypad and timer instructions. The keypad is sampled, never waited on:
/// `Fx0A` implements its "block until keypress" semantics by rewinding the
/// PC over itself, so each host tick re-executes the same instruction until
/// a key is down. The calling thread never blocks and the host keeps full
/// control of timeout and cancellation.
///
pub trait Chip8Io {
    fn skp(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn sknp(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn wait_key(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn rd_delay(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn wr_delay(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
    fn wr_sound(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error>;
}

impl Chip8Io for Chip8Cpu {
    /// Ex9E: skip next if the key named by Vx is down.
    fn skp(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        if self.keypad.is_pressed(self.v[inst.x()]) {
            self.skip_next();
        }
        Ok(())
    }

    /// ExA1: skip next if the key named by Vx is up.
    fn sknp(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        if !self.keypad.is_pressed(self.v[inst.x()]) {
            self.skip_next();
        }
        Ok(())
    }

    /// Fx0A: Vx = index of a pressed key; re-arms itself until one is down.
    fn wait_key(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        match self.keypad.first_pressed() {
            Some(key) => {
                trace!("WKEY satisfied by key {:x}", key);
                self.v[inst.x()] = key;
            }
            None => {
                // Rewind over this instruction; the next step fetches it
                // again. PC was advanced before dispatch, so this lands
                // back on the Fx0A word exactly.
                self.pc = self.pc.wrapping_sub(2);
            }
        }
        Ok(())
    }

    /// Fx07: Vx = delay timer.
    fn rd_delay(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        self.v[inst.x()] = self.timers.delay;
        Ok(())
    }

    /// Fx15: delay timer = Vx.
    fn wr_delay(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        self.timers.delay = self.v[inst.x()];
        Ok(())
    }

    /// Fx18: sound timer = Vx.
    fn wr_sound(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        self.timers.sound = self.v[inst.x()];
        Ok(())
    }
}
