use serde::{Deserialize, Serialize};

/// Plain integer score accumulator. No floor; the value may go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    value: i32,
}

impl Score {
    pub fn new(initial: i32) -> Self {
        Score { value: initial }
    }

    pub fn add_points(&mut self, points: i32) {
        self.value += points;
    }

    pub fn deduct_points(&mut self, points: i32) {
        self.value -= points;
    }

    pub fn reset(&mut self, initial: i32) {
        self.value = initial;
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}
