use std::cell::RefCell;
use std::rc::Weak;
use std::time::Duration;

use gloo_timers::callback::Timeout;

use super::WebPage;
use crate::modules::page::PageEvent;
use crate::modules::timer::{TimerFacility, TimerTask};

/// Browser timers that feed expired tasks back into the page.
///
/// Holds the page weakly; a timer that outlives the page does nothing.
pub struct WebTimers {
    page: Weak<RefCell<WebPage>>,
}

impl WebTimers {
    pub fn new(page: Weak<RefCell<WebPage>>) -> Self {
        Self { page }
    }
}

impl TimerFacility for WebTimers {
    fn schedule(&mut self, delay: Duration, task: TimerTask) {
        let page = self.page.clone();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || {
            if let Some(page) = page.upgrade() {
                page.borrow_mut().dispatch(PageEvent::TimerFired(task));
            }
        })
        .forget();
    }
}
