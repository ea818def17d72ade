pub mod host;
pub mod notifier;

use std::time::Duration;

use log::debug;

use crate::modules::auth::messages::reset_message_style;
use crate::modules::auth::AuthFormController;
use crate::modules::counter::CounterController;
use crate::modules::display::{DisplaySurface, ElementId};
use crate::modules::storage::KeyValueStore;
use crate::modules::timer::{TimerFacility, TimerQueue, TimerTask};

pub use host::Host;
pub use notifier::{LoadNotifier, ReadyState};

/// Clickable buttons of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Increment,
    Decrement,
    Reset,
    ClearForm,
    LoadSaved,
    ClearStorage,
}

impl Button {
    pub const ALL: [Button; 6] = [
        Button::Increment,
        Button::Decrement,
        Button::Reset,
        Button::ClearForm,
        Button::LoadSaved,
        Button::ClearStorage,
    ];

    pub fn element(self) -> ElementId {
        match self {
            Button::Increment => ElementId::IncrementButton,
            Button::Decrement => ElementId::DecrementButton,
            Button::Reset => ElementId::ResetButton,
            Button::ClearForm => ElementId::ClearFormButton,
            Button::LoadSaved => ElementId::LoadSavedButton,
            Button::ClearStorage => ElementId::ClearStorageButton,
        }
    }
}

/// Everything that can trigger page logic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    StructureReady,
    ResourcesLoaded,
    Click(Button),
    /// Form submission, default navigation already suppressed by the host
    Submit,
    TimerFired(TimerTask),
}

/// The demo page: counter, login form and load notification over one host.
///
/// Events are handled one at a time, each to completion.
#[derive(Debug)]
pub struct Page<D, S, T> {
    host: Host<D, S, T>,
    counter: CounterController,
    auth: AuthFormController,
    notifier: LoadNotifier,
}

impl<D, S, T> Page<D, S, T>
where
    D: DisplaySurface,
    S: KeyValueStore,
    T: TimerFacility,
{
    /// Page with fresh state and nothing run yet
    pub fn new(host: Host<D, S, T>) -> Self {
        Self {
            host,
            counter: CounterController::new(),
            auth: AuthFormController::new(),
            notifier: LoadNotifier::new(),
        }
    }

    /// Page start-up as the script does it: attach the load notifier, then
    /// log whether saved data exists
    pub fn open(host: Host<D, S, T>, ready_state: ReadyState) -> Self {
        let mut page = Self::new(host);
        page.start(ready_state);
        page
    }

    /// Start-up for a page that is already built
    pub fn start(&mut self, ready_state: ReadyState) {
        self.notifier.attach(&mut self.host, &self.auth, ready_state);
        self.auth.report_storage_status(&self.host);
    }

    pub fn dispatch(&mut self, event: PageEvent) {
        debug!("Dispatching {:?}", event);
        match event {
            PageEvent::StructureReady => {
                self.notifier.on_structure_ready(&mut self.host, &self.auth);
            }
            PageEvent::ResourcesLoaded => self.notifier.on_resources_loaded(),
            PageEvent::Click(button) => self.click(button),
            PageEvent::Submit => self.auth.submit(&mut self.host),
            PageEvent::TimerFired(task) => self.run_timer(task),
        }
    }

    fn click(&mut self, button: Button) {
        match button {
            Button::Increment => self.counter.increment(&mut self.host.surface),
            Button::Decrement => self.counter.decrement(&mut self.host.surface),
            Button::Reset => self.counter.reset(&mut self.host.surface),
            Button::ClearForm => self.auth.clear_form(&mut self.host),
            Button::LoadSaved => self.auth.load_saved(&mut self.host),
            Button::ClearStorage => self.auth.clear_storage(&mut self.host),
        }
    }

    fn run_timer(&mut self, task: TimerTask) {
        match task {
            TimerTask::ResetMessageStyle => reset_message_style(&mut self.host.surface),
        }
    }

    pub fn counter_value(&self) -> i64 {
        self.counter.value()
    }

    pub fn has_loaded(&self) -> bool {
        self.notifier.has_fired()
    }

    pub fn host(&self) -> &Host<D, S, T> {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut Host<D, S, T> {
        &mut self.host
    }

    pub fn into_host(self) -> Host<D, S, T> {
        self.host
    }
}

impl<D, S> Page<D, S, TimerQueue>
where
    D: DisplaySurface,
    S: KeyValueStore,
{
    /// Move the page clock forward and run the timers that came due.
    /// Returns how many ran.
    pub fn advance_time(&mut self, by: Duration) -> usize {
        let due = self.host.timers.advance(by);
        let count = due.len();
        for task in due {
            self.dispatch(PageEvent::TimerFired(task));
        }
        count
    }
}
