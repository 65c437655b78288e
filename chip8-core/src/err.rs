use thiserror::Error;

///
/// Error taxonomy for the interpreter. Load-time errors (`RomTooLarge`,
/// `TruncatedSource`) abort the load before any memory is touched; the
/// remaining variants are fatal to the `step` call that raised them. The
/// engine never recovers internally: masking a fault (for example skipping
/// an unknown opcode) would corrupt subsequent execution invisibly, so the
/// host decides whether to halt or reset.
///
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Chip8Error {
    #[error("ROM of {len} bytes does not fit in program memory ({max} bytes)")]
    RomTooLarge { len: usize, max: usize },

    #[error("ROM source ended after {got} of {expected} bytes")]
    TruncatedSource { got: usize, expected: usize },

    #[error("unknown opcode {opcode:#06x}")]
    UnknownOpcode { opcode: u16 },

    #[error("call stack overflow (16 levels exceeded)")]
    StackOverflow,

    #[error("return with empty call stack")]
    StackUnderflow,

    #[error("memory access out of bounds at {addr:#05x}")]
    OutOfBounds { addr: usize },
}
