//! Troop and cargo bay totals

/// Sums bay sizes as they are read
#[derive(Debug, Default, Clone, Copy)]
pub struct BayAggregator {
    total: f32,
    count: usize,
}

impl BayAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, size: f32) {
        self.total += size;
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Whole units of capacity. Zero means no transport bay.
    pub fn capacity(&self) -> u32 {
        // `as` saturates and maps NaN to 0
        self.total.floor() as u32
    }
}
