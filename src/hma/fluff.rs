//! Narrative text assembly

/// Section headers, in file order
pub const FLUFF_HEADERS: [&str; 6] = [
    "Overview:\n\r",
    "\n\rCapability:\n\r",
    "\n\rBattle History:\n\r",
    "\n\rVariants:\n\r",
    "\n\rFamous Vehicles and Pilots:\n\r",
    "\n\rDeployment:\n\r",
];

/// Bodies totalling this many characters or fewer are treated as no fluff.
pub const FLUFF_THRESHOLD: usize = 60;

/// Collects the six sections and decides whether the result is worth keeping
#[derive(Debug, Default)]
pub struct FluffAssembler {
    text: String,
    body_chars: usize,
    sections: usize,
}

impl FluffAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next section body under its header
    pub fn push(&mut self, body: &str) {
        if let Some(header) = FLUFF_HEADERS.get(self.sections) {
            self.text.push_str(header);
        }
        self.text.push_str(body);
        self.body_chars += body.chars().count();
        self.sections += 1;
    }

    pub fn body_chars(&self) -> usize {
        self.body_chars
    }

    pub fn finish(self) -> Option<String> {
        if self.body_chars > FLUFF_THRESHOLD {
            Some(self.text)
        } else {
            None
        }
    }
}
