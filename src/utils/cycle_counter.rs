/// A wrap-around selector in `[0, modulus)`, used for menu cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleCounter {
    value: usize,
    modulus: usize,
}

impl CycleCounter {
    /// Creates a counter at 0. A zero modulus is treated as 1.
    pub fn new(modulus: usize) -> Self {
        Self::with_value(modulus, 0)
    }

    pub fn with_value(modulus: usize, start: usize) -> Self {
        let modulus = if modulus == 0 {
            tracing::warn!("CycleCounter built with a zero modulus, using 1");
            1
        } else {
            modulus
        };
        Self {
            value: start % modulus,
            modulus,
        }
    }

    pub fn increment(&mut self) {
        self.value = (self.value + 1) % self.modulus;
    }

    pub fn decrement(&mut self) {
        self.value = (self.value + self.modulus - 1) % self.modulus;
    }

    pub fn value(&self) -> usize {
        self.value
    }

    pub fn modulus(&self) -> usize {
        self.modulus
    }
}
