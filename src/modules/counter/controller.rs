use log::info;

use super::model::Counter;
use crate::modules::display::{DisplaySurface, ElementId};

/// Owns the page counter and keeps its element in sync
#[derive(Debug, Default)]
pub struct CounterController {
    counter: Counter,
}

impl CounterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> i64 {
        self.counter.value()
    }

    pub fn increment<D: DisplaySurface + ?Sized>(&mut self, surface: &mut D) {
        let value = self.counter.increment();
        self.refresh(surface);
        info!("Counter incremented. Current value: {}", value);
    }

    pub fn decrement<D: DisplaySurface + ?Sized>(&mut self, surface: &mut D) {
        let value = self.counter.decrement();
        self.refresh(surface);
        info!("Counter decremented. Current value: {}", value);
    }

    pub fn reset<D: DisplaySurface + ?Sized>(&mut self, surface: &mut D) {
        self.counter.reset();
        self.refresh(surface);
        info!("Counter reset.");
    }

    /// Render the value and pick the color for its sign
    pub fn refresh<D: DisplaySurface + ?Sized>(&self, surface: &mut D) {
        surface.set_text(ElementId::CounterValue, &self.counter.value().to_string());
        surface.set_style(ElementId::CounterValue, "color", self.counter.style().color());
    }
}
