use log::{debug, error, trace};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::consts::cpu::{NUM_REGS, STACK_DEPTH};
use crate::consts::memmap;
use crate::decode::decode;
use crate::err::Chip8Error;
use crate::instr::{Chip8Arith, Chip8ControlFlow, Chip8Display, Chip8Io, Chip8LoadStore};
use crate::instr::{Chip8Inst, Chip8Mnem};
use crate::mem::{Chip8MemoryMap, Chip8Timers, FrameBuffer, Keypad};

///
/// The CHIP-8 machine: all VM state plus the fetch/decode/dispatch engine.
/// One instance per VM; state is exclusively owned and mutated here, never
/// shared. A multi-threaded host must serialize calls into a given instance
/// externally.
///
/// `step` executes exactly one instruction per call and never blocks: the
/// wait-for-key instruction rewinds the PC instead, so the host's own loop
/// re-polls it once per tick. Timers are driven separately through
/// `tick_timers` at a nominal 60 Hz.
///
pub struct Chip8Cpu {
    pub mem: Chip8MemoryMap,
    pub fb: FrameBuffer,
    pub keypad: Keypad,
    pub timers: Chip8Timers,

    /// General registers V0-VF. VF is the flag register: arithmetic, shift
    /// and draw instructions overwrite it as a side effect.
    pub v: [u8; NUM_REGS],
    /// Index register; 12 bits significant.
    pub i: u16,
    pub pc: u16,
    /// Call stack. `len()` is the stack pointer under the next-free-slot
    /// convention; capacity is the architectural 16-level limit.
    pub stack: heapless::Vec<u16, STACK_DEPTH>,

    pub(crate) rng: Box<dyn RngCore>,
}

impl Chip8Cpu {
    pub fn new() -> Chip8Cpu {
        Chip8Cpu::with_rng(Box::new(StdRng::from_entropy()))
    }

    ///
    /// Build a machine around a caller-supplied random source. The RNG is
    /// only consumed by the `Cxkk` instruction; injecting a deterministic
    /// sequence makes that instruction testable.
    ///
    pub fn with_rng(rng: Box<dyn RngCore>) -> Chip8Cpu {
        Chip8Cpu {
            mem: Chip8MemoryMap::new(),
            fb: FrameBuffer::new(),
            keypad: Keypad::new(),
            timers: Chip8Timers::new(),
            v: [0; NUM_REGS],
            i: 0,
            pc: memmap::PROGRAM_ADDR as u16,
            stack: heapless::Vec::new(),
            rng,
        }
    }

    ///
    /// Return register file, index, PC, stack, timers, keypad and screen to
    /// their power-on state. Memory is left alone so a loaded ROM survives
    /// the reset and runs again from `0x200`.
    ///
    pub fn reset(&mut self) {
        self.v = [0; NUM_REGS];
        self.i = 0;
        self.pc = memmap::PROGRAM_ADDR as u16;
        self.stack.clear();
        self.fb.clear();
        self.keypad = Keypad::new();
        self.timers = Chip8Timers::new();
    }

    /// Stage a fully materialized ROM at `0x200`. All-or-nothing.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), Chip8Error> {
        self.mem.load_rom(rom)
    }

    ///
    /// One fetch-decode-execute quantum. The PC is moved past the fetched
    /// word before dispatch so that jump, call and skip handlers can assign
    /// it without being overwritten afterwards. On any error the step is
    /// abandoned; the only state change guaranteed to have happened by then
    /// is that PC advance.
    ///
    pub fn step(&mut self) -> Result<(), Chip8Error> {
        let opcode = self.mem.read_word(self.pc as usize)?;
        self.pc = self.pc.wrapping_add(2);

        let inst = match decode(opcode) {
            Ok(inst) => inst,
            Err(e) => {
                error!("Decode fault at {:#05x}: {}", self.pc.wrapping_sub(2), e);
                return Err(e);
            }
        };

        trace!(
            "{:03x}: {:04x} {:?}",
            self.pc.wrapping_sub(2),
            opcode,
            inst.mnem
        );
        self.execute(&inst)
    }

    /// Single dispatch over the closed instruction set.
    pub fn execute(&mut self, inst: &Chip8Inst) -> Result<(), Chip8Error> {
        match inst.mnem {
            Chip8Mnem::CLS => self.cls(inst),
            Chip8Mnem::RET => self.ret(inst),
            Chip8Mnem::JP => self.jp(inst),
            Chip8Mnem::CALL => self.call(inst),
            Chip8Mnem::SEI => self.se_imm(inst),
            Chip8Mnem::SNEI => self.sne_imm(inst),
            Chip8Mnem::SER => self.se_reg(inst),
            Chip8Mnem::LDI => self.ld_imm(inst),
            Chip8Mnem::ADDI => self.add_imm(inst),
            Chip8Mnem::MOV => self.mov(inst),
            Chip8Mnem::OR => self.or(inst),
            Chip8Mnem::AND => self.and(inst),
            Chip8Mnem::XOR => self.xor(inst),
            Chip8Mnem::ADD => self.add(inst),
            Chip8Mnem::SUB => self.sub(inst),
            Chip8Mnem::SHR => self.shr(inst),
            Chip8Mnem::SUBN => self.subn(inst),
            Chip8Mnem::SHL => self.shl(inst),
            Chip8Mnem::SNER => self.sne_reg(inst),
            Chip8Mnem::LDA => self.ld_index(inst),
            Chip8Mnem::JPV0 => self.jp_v0(inst),
            Chip8Mnem::RND => self.rnd(inst),
            Chip8Mnem::DRW => self.drw(inst),
            Chip8Mnem::SKP => self.skp(inst),
            Chip8Mnem::SKNP => self.sknp(inst),
            Chip8Mnem::RDDT => self.rd_delay(inst),
            Chip8Mnem::WKEY => self.wait_key(inst),
            Chip8Mnem::WRDT => self.wr_delay(inst),
            Chip8Mnem::WRST => self.wr_sound(inst),
            Chip8Mnem::ADDA => self.add_index(inst),
            Chip8Mnem::FONT => self.ld_font(inst),
            Chip8Mnem::BCD => self.bcd(inst),
            Chip8Mnem::SAVE => self.save_regs(inst),
            Chip8Mnem::LOAD => self.load_regs(inst),
        }
    }

    ///
    /// One 60 Hz clock tick from the host's timer driver. Deliberately not
    /// coupled to `step`: instruction rate and timer rate are independent.
    ///
    pub fn tick_timers(&mut self) {
        self.timers.tick();
    }

    /// Tone gate for an audio consumer.
    pub fn sound_active(&self) -> bool {
        self.timers.sound_active()
    }

    /// Read-only framebuffer view for the host's renderer.
    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Skip the next instruction. Used by the conditional-skip handlers.
    pub(crate) fn skip_next(&mut self) {
        self.pc = self.pc.wrapping_add(2);
    }

    pub fn print_state(&self) {
        debug!(
            "V: {:02x?} I: {:03x} PC: {:03x} SP: {}",
            self.v,
            self.i,
            self.pc,
            self.stack.len()
        );
        debug!(
            "DT: {:02x} ST: {:02x} stack: {:03x?}",
            self.timers.delay,
            self.timers.sound,
            self.stack.as_slice()
        );
    }
}
