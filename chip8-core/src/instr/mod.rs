pub mod arith;
pub mod cf;
pub mod display;
pub mod io;
pub mod ldst;

pub use arith::Chip8Arith;
pub use cf::Chip8ControlFlow;
pub use display::Chip8Display;
pub use io::Chip8Io;
pub use ldst::Chip8LoadStore;

#[cfg(test)]
pub mod tests;

const FAMILY_OFFSET: u16 = 12;
const FAMILY_MASK: u16 = 0xF;
const X_OFFSET: u16 = 8;
const Y_OFFSET: u16 = 4;
const NIBBLE_MASK: u16 = 0xF;
const BYTE_MASK: u16 = 0xFF;
const ADDR_MASK: u16 = 0xFFF;

///
/// Closed set of instruction forms. Decoding resolves every fetched word to
/// exactly one of these or fails with `UnknownOpcode`; the CPU then performs
/// a single dispatch over the variant.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chip8Mnem {
    CLS,  // 00E0
    RET,  // 00EE
    JP,   // 1nnn
    CALL, // 2nnn
    SEI,  // 3xkk
    SNEI, // 4xkk
    SER,  // 5xy0
    LDI,  // 6xkk
    ADDI, // 7xkk
    MOV,  // 8xy0
    OR,   // 8xy1
    AND,  // 8xy2
    XOR,  // 8xy3
    ADD,  // 8xy4
    SUB,  // 8xy5
    SHR,  // 8xy6
    SUBN, // 8xy7
    SHL,  // 8xyE
    SNER, // 9xy0
    LDA,  // Annn
    JPV0, // Bnnn
    RND,  // Cxkk
    DRW,  // Dxyn
    SKP,  // Ex9E
    SKNP, // ExA1
    RDDT, // Fx07
    WKEY, // Fx0A
    WRDT, // Fx15
    WRST, // Fx18
    ADDA, // Fx1E
    FONT, // Fx29
    BCD,  // Fx33
    SAVE, // Fx55
    LOAD, // Fx65
}

///
/// A decoded instruction: the raw 16-bit word plus its resolved mnemonic.
/// The bit-field accessors below are the opcode decoder of the design; they
/// are pure and total, since the word is always fetched whole.
///
#[derive(Debug, Clone, Copy)]
pub struct Chip8Inst {
    pub opcode: u16,
    pub mnem: Chip8Mnem,
}

impl Chip8Inst {
    /// Instruction family selector, bits 15-12.
    pub fn family(&self) -> u8 {
        ((self.opcode >> FAMILY_OFFSET) & FAMILY_MASK) as u8
    }

    /// First register index, bits 11-8.
    pub fn x(&self) -> usize {
        ((self.opcode >> X_OFFSET) & NIBBLE_MASK) as usize
    }

    /// Second register index, bits 7-4.
    pub fn y(&self) -> usize {
        ((self.opcode >> Y_OFFSET) & NIBBLE_MASK) as usize
    }

    /// 4-bit immediate, bits 3-0. Sprite height for `DRW`.
    pub fn n(&self) -> u8 {
        (self.opcode & NIBBLE_MASK) as u8
    }

    /// 8-bit immediate, bits 7-0.
    pub fn nn(&self) -> u8 {
        (self.opcode & BYTE_MASK) as u8
    }

    /// 12-bit address immediate, bits 11-0.
    pub fn nnn(&self) -> u16 {
        self.opcode & ADDR_MASK
    }
}
