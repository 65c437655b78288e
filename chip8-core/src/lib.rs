pub mod consts;
pub mod cpu;
pub mod decode;
pub mod err;
pub mod instr;
pub mod mem;
