/// Re-types a block of text one character at a time.
#[derive(Clone, Debug, Default)]
pub struct Typewriter {
    chars: Vec<char>,
    typed: usize,
    started: bool,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            typed: 0,
            started: false,
        }
    }

    /// Returns false if typing already began.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        true
    }

    pub fn is_done(&self) -> bool {
        self.typed >= self.chars.len()
    }

    /// Next character and its 1-based position, if any remain.
    pub fn advance(&mut self) -> Option<(char, usize)> {
        let ch = *self.chars.get(self.typed)?;
        self.typed += 1;
        Some((ch, self.typed))
    }
}
