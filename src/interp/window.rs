const LEN: usize = 4;

/// Raw characters that raise the tempo when seen in a row
pub const TRIGGER: [char; LEN] = ['B', 'P', 'M', '+'];

/// The last four raw input characters, oldest first
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Window {
    chars: [char; LEN],
}

impl Window {
    pub fn new() -> Window {
        Window { chars: [' '; LEN] }
    }

    pub fn push(&mut self, character: char) {
        self.chars.rotate_left(1);
        self.chars[LEN - 1] = character;
    }

    pub fn is_trigger(&self) -> bool {
        self.chars == TRIGGER
    }
}

impl Default for Window {
    fn default() -> Window {
        Window::new()
    }
}
