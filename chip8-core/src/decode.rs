use crate::err::Chip8Error;
use crate::instr::{Chip8Inst, Chip8Mnem};

///
/// Resolve a fetched 16-bit word to an instruction. The family nibble
/// selects the handler outright for most of the instruction set; families
/// `0x0`, `0x5`, `0x8`, `0x9`, `0xE` and `0xF` carry a sub-selector in the
/// low nibble or byte that is matched further. Any combination that does
/// not map to one of the documented forms is an `UnknownOpcode` fault; the
/// engine performs no silent skip.
///
pub fn decode(opcode: u16) -> Result<Chip8Inst, Chip8Error> {
    let mut i = Chip8Inst {
        opcode,
        mnem: Chip8Mnem::JP,
    };

    i.mnem = match i.family() {
        0x0 => match opcode {
            0x00E0 => Chip8Mnem::CLS,
            0x00EE => Chip8Mnem::RET,
            // 0nnn "call machine routine" is not part of the interpreted
            // set and no ROM targeting an interpreter uses it.
            _ => return Err(Chip8Error::UnknownOpcode { opcode }),
        },
        0x1 => Chip8Mnem::JP,
        0x2 => Chip8Mnem::CALL,
        0x3 => Chip8Mnem::SEI,
        0x4 => Chip8Mnem::SNEI,
        0x5 => match i.n() {
            0x0 => Chip8Mnem::SER,
            _ => return Err(Chip8Error::UnknownOpcode { opcode }),
        },
        0x6 => Chip8Mnem::LDI,
        0x7 => Chip8Mnem::ADDI,
        0x8 => match i.n() {
            0x0 => Chip8Mnem::MOV,
            0x1 => Chip8Mnem::OR,
            0x2 => Chip8Mnem::AND,
            0x3 => Chip8Mnem::XOR,
            0x4 => Chip8Mnem::ADD,
            0x5 => Chip8Mnem::SUB,
            0x6 => Chip8Mnem::SHR,
            0x7 => Chip8Mnem::SUBN,
            0xE => Chip8Mnem::SHL,
            _ => return Err(Chip8Error::UnknownOpcode { opcode }),
        },
        0x9 => match i.n() {
            0x0 => Chip8Mnem::SNER,
            _ => return Err(Chip8Error::UnknownOpcode { opcode }),
        },
        0xA => Chip8Mnem::LDA,
        0xB => Chip8Mnem::JPV0,
        0xC => Chip8Mnem::RND,
        0xD => Chip8Mnem::DRW,
        0xE => match i.nn() {
            0x9E => Chip8Mnem::SKP,
            0xA1 => Chip8Mnem::SKNP,
            _ => return Err(Chip8Error::UnknownOpcode { opcode }),
        },
        0xF => match i.nn() {
            0x07 => Chip8Mnem::RDDT,
            0x0A => Chip8Mnem::WKEY,
            0x15 => Chip8Mnem::WRDT,
            0x18 => Chip8Mnem::WRST,
            0x1E => Chip8Mnem::ADDA,
            0x29 => Chip8Mnem::FONT,
            0x33 => Chip8Mnem::BCD,
            0x55 => Chip8Mnem::SAVE,
            0x65 => Chip8Mnem::LOAD,
            _ => return Err(Chip8Error::UnknownOpcode { opcode }),
        },
        _ => unreachable!("family() masks to a nibble"),
    };

    Ok(i)
}
