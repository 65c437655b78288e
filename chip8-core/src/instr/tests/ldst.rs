#[cfg(test)]
mod ldst_tests {
    use crate::consts::memmap::{FONT_ADDR, FONT_GLYPH_BYTES};
    use crate::err::Chip8Error;
    use crate::instr::tests::{init_chip8, load_program};

    #[test]
    fn test_ld_index() {
        let mut cpu = init_chip8();
        load_program(&mut cpu, &[0xA123]);
        cpu.step().unwrap();
        assert_eq!(cpu.i, 0x123);
    }

    #[test]
    fn test_add_index_no_flag_on_overflow() {
        // Fx1E past 0xFFF: I keeps the 16-bit sum, VF stays untouched.
        let mut cpu = init_chip8();
        load_program(&mut cpu, &[0xF11E]);
        cpu.i = 0xFFE;
        cpu.v[1] = 0x04;
        cpu.v[0xF] = 0xAA;
        cpu.step().unwrap();
        assert_eq!(cpu.i, 0x1002);
        assert_eq!(cpu.v[0xF], 0xAA);
    }

    #[test]
    fn test_font_glyph_addresses() {
        let mut cpu = init_chip8();
        load_program(&mut cpu, &[0xF129, 0xF129]);

        cpu.v[1] = 0x0;
        cpu.step().unwrap();
        assert_eq!(cpu.i as usize, FONT_ADDR);

        // High nibble is ignored: only 16 glyphs exist.
        cpu.v[1] = 0xAF;
        cpu.step().unwrap();
        assert_eq!(cpu.i as usize, FONT_ADDR + 0xF * FONT_GLYPH_BYTES);
    }

    #[test]
    fn test_bcd_digits() {
        // Fx33 on 156 -> memory[I..I+3] = 1, 5, 6.
        let mut cpu = init_chip8();
        load_program(&mut cpu, &[0xA300, 0xF133]);
        cpu.v[1] = 156;
        cpu.step().unwrap();
        cpu.step().unwrap();
        assert_eq!(cpu.mem.read_byte(0x300).unwrap(), 1);
        assert_eq!(cpu.mem.read_byte(0x301).unwrap(), 5);
        assert_eq!(cpu.mem.read_byte(0x302).unwrap(), 6);
    }

    #[test]
    fn test_bcd_single_digit() {
        let mut cpu = init_chip8();
        load_program(&mut cpu, &[0xA300, 0xF133]);
        cpu.v[1] = 7;
        cpu.step().unwrap();
        cpu.step().unwrap();
        assert_eq!(cpu.mem.read_byte(0x300).unwrap(), 0);
        assert_eq!(cpu.mem.read_byte(0x301).unwrap(), 0);
        assert_eq!(cpu.mem.read_byte(0x302).unwrap(), 7);
    }

    #[test]
    fn test_save_load_register_block() {
        // Fx55 then Fx65 through a scratch region reproduces V0..=Vx.
        let mut cpu = init_chip8();
        load_program(&mut cpu, &[0xA300, 0xF355, 0x6000, 0x6100, 0x6200, 0x6300, 0xF365]);
        cpu.v[0] = 0xDE;
        cpu.v[1] = 0xAD;
        cpu.v[2] = 0xBE;
        cpu.v[3] = 0xEF;
        cpu.v[4] = 0x99;

        cpu.step().unwrap(); // I = 0x300
        cpu.step().unwrap(); // save V0..=V3
        assert_eq!(cpu.mem.read_byte(0x300).unwrap(), 0xDE);
        assert_eq!(cpu.mem.read_byte(0x303).unwrap(), 0xEF);
        // V4 is past x and must not have been stored.
        assert_eq!(cpu.mem.read_byte(0x304).unwrap(), 0x00);

        for _ in 0..4 {
            cpu.step().unwrap(); // zero V0..=V3
        }
        cpu.step().unwrap(); // load them back
        assert_eq!(cpu.v[0], 0xDE);
        assert_eq!(cpu.v[1], 0xAD);
        assert_eq!(cpu.v[2], 0xBE);
        assert_eq!(cpu.v[3], 0xEF);
        assert_eq!(cpu.v[4], 0x99);
    }

    #[test]
    fn test_block_ops_bounds_checked() {
        // A register block running off the end of memory is a fault, not a
        // wraparound.
        let mut cpu = init_chip8();
        load_program(&mut cpu, &[0xF355]);
        cpu.i = 0xFFE;
        assert_eq!(
            cpu.step().unwrap_err(),
            Chip8Error::OutOfBounds { addr: 0x1000 }
        );
    }
}
