use rand::rngs::mock::StepRng;

use crate::cpu::Chip8Cpu;

///
/// Build a machine with a deterministic RNG so every instruction,
/// including Cxkk, behaves reproducibly under test.
///
#[allow(dead_code)]
pub fn init_chip8() -> Chip8Cpu {
    init_chip8_with_rng(0, 1)
}

#[allow(dead_code)]
pub fn init_chip8_with_rng(initial: u64, increment: u64) -> Chip8Cpu {
    Chip8Cpu::with_rng(Box::new(StepRng::new(initial, increment)))
}

///
/// Assemble a test ROM from instruction words (big-endian on the wire, as
/// fetched) and stage it at 0x200.
///
#[allow(dead_code)]
pub fn load_program(cpu: &mut Chip8Cpu, words: &[u16]) {
    let mut rom = Vec::with_capacity(words.len() * 2);
    for word in words {
        rom.extend_from_slice(&word.to_be_bytes());
    }
    cpu.load_rom(&rom).unwrap();
}

mod io;
mod ldst;
