use crate::consts::keypad::NUM_KEYS;

///
/// The 16-key hex keypad. The host writes key states in between steps;
/// the engine only ever reads them. No debouncing and no event queue: a
/// key is simply down or up at the moment a step samples it.
///
#[derive(Clone)]
pub struct Keypad {
    keys: [bool; NUM_KEYS],
}

impl Keypad {
    pub fn new() -> Keypad {
        Keypad {
            keys: [false; NUM_KEYS],
        }
    }

    /// Host-side producer interface. `key` is masked to the 16-key range.
    pub fn set_key(&mut self, key: u8, pressed: bool) {
        self.keys[(key & 0xF) as usize] = pressed;
    }

    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys[(key & 0xF) as usize]
    }

    ///
    /// Level-triggered scan for the wait-for-key instruction: the lowest
    /// key index currently held down, if any.
    ///
    pub fn first_pressed(&self) -> Option<u8> {
        self.keys.iter().position(|k| *k).map(|idx| idx as u8)
    }
}
