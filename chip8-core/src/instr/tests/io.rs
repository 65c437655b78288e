#[cfg(test)]
mod io_tests {
    use crate::instr::tests::{init_chip8, load_program};

    #[test]
    fn test_skip_if_key_pressed() {
        let mut cpu = init_chip8();
        load_program(&mut cpu, &[0xE19E, 0xE19E]);
        cpu.v[1] = 0xA;

        // Key up: fall through.
        cpu.step().unwrap();
        assert_eq!(cpu.pc, 0x202);

        // Key down: skip.
        cpu.keypad.set_key(0xA, true);
        cpu.step().unwrap();
        assert_eq!(cpu.pc, 0x206);
    }

    #[test]
    fn test_skip_if_key_not_pressed() {
        let mut cpu = init_chip8();
        load_program(&mut cpu, &[0xE1A1]);
        cpu.v[1] = 0x3;
        cpu.step().unwrap();
        assert_eq!(cpu.pc, 0x204);

        let mut cpu = init_chip8();
        load_program(&mut cpu, &[0xE1A1]);
        cpu.v[1] = 0x3;
        cpu.keypad.set_key(0x3, true);
        cpu.step().unwrap();
        assert_eq!(cpu.pc, 0x202);
    }

    #[test]
    fn test_wait_key_rearms_until_pressed() {
        // Fx0A keeps the PC parked on itself: the host loop can call step
        // as many times as it likes without blocking, and the instruction
        // completes on the first step that observes a key down.
        let mut cpu = init_chip8();
        load_program(&mut cpu, &[0xF50A]);

        for _ in 0..10 {
            cpu.step().unwrap();
            assert_eq!(cpu.pc, 0x200);
        }

        cpu.keypad.set_key(0xC, true);
        cpu.step().unwrap();
        assert_eq!(cpu.pc, 0x202);
        assert_eq!(cpu.v[5], 0xC);
    }

    #[test]
    fn test_delay_timer_round_trip() {
        // Fx15 sets, external ticks decrement, Fx07 reads back.
        let mut cpu = init_chip8();
        load_program(&mut cpu, &[0x6105, 0xF115, 0xF207]);
        cpu.step().unwrap();
        cpu.step().unwrap();
        assert_eq!(cpu.timers.delay, 5);

        cpu.tick_timers();
        cpu.tick_timers();
        cpu.step().unwrap();
        assert_eq!(cpu.v[2], 3);
    }

    #[test]
    fn test_sound_timer_gates_tone() {
        let mut cpu = init_chip8();
        load_program(&mut cpu, &[0x6102, 0xF118]);
        cpu.step().unwrap();
        cpu.step().unwrap();
        assert!(cpu.sound_active());

        cpu.tick_timers();
        assert!(cpu.sound_active());
        cpu.tick_timers();
        assert!(!cpu.sound_active());
    }

    #[test]
    fn test_step_does_not_tick_timers() {
        // Timers belong to the 60 Hz driver, not to instruction flow.
        let mut cpu = init_chip8();
        load_program(&mut cpu, &[0x6105, 0xF115, 0x6000, 0x6000, 0x6000]);
        for _ in 0..5 {
            cpu.step().unwrap();
        }
        assert_eq!(cpu.timers.delay, 5);
    }
}
