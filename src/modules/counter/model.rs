use crate::modules::display::{NEGATIVE_COUNTER_COLOR, NON_NEGATIVE_COUNTER_COLOR};

/// Unbounded page counter, starting at zero
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    value: i64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    // Wrapping keeps the extremes of the range from panicking in debug builds
    pub fn increment(&mut self) -> i64 {
        self.value = self.value.wrapping_add(1);
        self.value
    }

    pub fn decrement(&mut self) -> i64 {
        self.value = self.value.wrapping_sub(1);
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }

    pub fn style(&self) -> CounterStyle {
        CounterStyle::for_value(self.value)
    }
}

/// How the counter is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterStyle {
    Negative,
    NonNegative,
}

impl CounterStyle {
    /// Zero counts as non-negative
    pub fn for_value(value: i64) -> Self {
        if value < 0 {
            CounterStyle::Negative
        } else {
            CounterStyle::NonNegative
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            CounterStyle::Negative => NEGATIVE_COUNTER_COLOR,
            CounterStyle::NonNegative => NON_NEGATIVE_COUNTER_COLOR,
        }
    }
}
