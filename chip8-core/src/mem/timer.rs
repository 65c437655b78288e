use log::trace;

///
/// Delay and sound timers. Both are 8-bit down-counters decremented by an
/// external 60 Hz cadence through `tick`, never by instruction execution;
/// the step rate and the timer rate are independent by design. The sound
/// timer's nonzero state is the tone gate an audio consumer would read.
///
#[derive(Clone)]
pub struct Chip8Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Chip8Timers {
    pub fn new() -> Chip8Timers {
        Chip8Timers { delay: 0, sound: 0 }
    }

    /// One 60 Hz tick: decrement each timer if it is nonzero.
    pub fn tick(&mut self) {
        if self.delay > 0 {
            self.delay -= 1;
        }
        if self.sound > 0 {
            self.sound -= 1;
            trace!("Sound timer: {}", self.sound);
        }
    }

    pub fn sound_active(&self) -> bool {
        self.sound > 0
    }
}

#[cfg(test)]
mod timer_tests {
    use super::*;

    #[test]
    fn test_tick_decrements_to_zero_and_stops() {
        let mut t = Chip8Timers::new();
        t.delay = 2;
        t.sound = 1;

        t.tick();
        assert_eq!(t.delay, 1);
        assert_eq!(t.sound, 0);
        assert!(!t.sound_active());

        // Zero timers stay at zero, no wraparound.
        t.tick();
        t.tick();
        assert_eq!(t.delay, 0);
        assert_eq!(t.sound, 0);
    }

    #[test]
    fn test_sound_gate() {
        let mut t = Chip8Timers::new();
        assert!(!t.sound_active());
        t.sound = 3;
        assert!(t.sound_active());
    }
}
