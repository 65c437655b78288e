pub mod memmap {
    /* Total addressable memory of a CHIP-8 machine */
    pub const MEM_SIZE: usize = 4096;

    /* Address the font sprite table is copied to at initialization */
    pub const FONT_ADDR: usize = 0x050;

    /* Bytes per font glyph; 16 glyphs (hex digits 0-F) of 5 rows each */
    pub const FONT_GLYPH_BYTES: usize = 5;

    /* Address a program ROM is loaded to and the initial PC value */
    pub const PROGRAM_ADDR: usize = 0x200;

    /* Largest ROM that fits between PROGRAM_ADDR and the end of memory */
    pub const MAX_ROM_BYTES: usize = MEM_SIZE - PROGRAM_ADDR;
}

pub mod cpu {
    /* Number of general purpose registers V0-VF */
    pub const NUM_REGS: usize = 16;

    /* VF doubles as the carry/borrow/bit/collision flag register */
    pub const REG_VF: usize = 0xF;

    /* Nesting depth of the call stack */
    pub const STACK_DEPTH: usize = 16;
}

pub mod display {
    pub const WIDTH: usize = 64;
    pub const HEIGHT: usize = 32;
}

pub mod keypad {
    /* Hex keypad, keys 0x0 through 0xF */
    pub const NUM_KEYS: usize = 16;
}
