use log::{debug, info};

use crate::modules::auth::AuthFormController;
use crate::modules::display::{DisplaySurface, ElementId, READY_STATUS_COLOR, READY_STATUS_TEXT};
use crate::modules::page::Host;
use crate::modules::storage::KeyValueStore;
use crate::modules::timer::TimerFacility;

/// Document parsing state at the time the page logic is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    /// Markup still being parsed; wait for structure-ready
    Loading,
    Interactive,
    Complete,
}

/// Runs the page-ready handler exactly once
#[derive(Debug, Default)]
pub struct LoadNotifier {
    fired: bool,
}

impl LoadNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Run the handler now if the structure is already parsed, otherwise
    /// leave it for [`LoadNotifier::on_structure_ready`]. Returns whether it ran.
    pub fn attach<D, S, T>(
        &mut self,
        host: &mut Host<D, S, T>,
        auth: &AuthFormController,
        ready_state: ReadyState,
    ) -> bool
    where
        D: DisplaySurface,
        S: KeyValueStore,
        T: TimerFacility,
    {
        match ready_state {
            ReadyState::Loading => {
                debug!("Document still loading, waiting for structure-ready");
                false
            }
            ReadyState::Interactive | ReadyState::Complete => {
                self.on_structure_ready(host, auth)
            }
        }
    }

    pub fn on_structure_ready<D, S, T>(
        &mut self,
        host: &mut Host<D, S, T>,
        auth: &AuthFormController,
    ) -> bool
    where
        D: DisplaySurface,
        S: KeyValueStore,
        T: TimerFacility,
    {
        if self.fired {
            debug!("Page-ready handler already ran, ignoring structure-ready");
            return false;
        }
        self.fired = true;

        host.surface.set_text(ElementId::LoadStatus, READY_STATUS_TEXT);
        host.surface
            .set_style(ElementId::LoadStatus, "color", READY_STATUS_COLOR);
        host.surface
            .set_style(ElementId::LoadStatus, "font-weight", "bold");
        info!("Page fully loaded! The document is ready.");

        auth.load_saved(host);
        true
    }

    /// Diagnostic only
    pub fn on_resources_loaded(&self) {
        info!("All page resources loaded (images, styles, etc.)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::display::MemorySurface;
    use crate::modules::storage::MemoryStore;
    use crate::modules::timer::TimerQueue;
    use crate::{LOGIN_KEY, PASSWORD_KEY};

    fn host() -> Host<MemorySurface, MemoryStore, TimerQueue> {
        Host::new(MemorySurface::new(), MemoryStore::new(), TimerQueue::new())
    }

    #[test]
    fn test_loading_state_defers() {
        let mut host = host();
        let mut notifier = LoadNotifier::new();
        let auth = AuthFormController::new();

        assert!(!notifier.attach(&mut host, &auth, ReadyState::Loading));
        assert_eq!(host.surface.text(ElementId::LoadStatus), "");

        assert!(notifier.on_structure_ready(&mut host, &auth));
        assert_eq!(host.surface.text(ElementId::LoadStatus), READY_STATUS_TEXT);
        assert_eq!(
            host.surface.style(ElementId::LoadStatus, "color"),
            Some(READY_STATUS_COLOR)
        );
        assert_eq!(
            host.surface.style(ElementId::LoadStatus, "font-weight"),
            Some("bold")
        );
    }

    #[test]
    fn test_parsed_states_run_immediately_and_once() {
        for state in [ReadyState::Interactive, ReadyState::Complete] {
            let mut host = host();
            let mut notifier = LoadNotifier::new();
            let auth = AuthFormController::new();

            assert!(notifier.attach(&mut host, &auth, state));
            assert!(notifier.has_fired());

            // A late structure-ready signal changes nothing
            host.surface.set_text(ElementId::LoadStatus, "changed");
            assert!(!notifier.on_structure_ready(&mut host, &auth));
            assert_eq!(host.surface.text(ElementId::LoadStatus), "changed");
        }
    }

    #[test]
    fn test_ready_handler_loads_saved_credentials() {
        let mut host = host();
        host.store.set(LOGIN_KEY, "admin").unwrap();
        host.store.set(PASSWORD_KEY, "admin").unwrap();
        let mut notifier = LoadNotifier::new();

        notifier.attach(&mut host, &AuthFormController::new(), ReadyState::Complete);

        assert_eq!(host.surface.input_value(ElementId::LoginInput), "admin");
        assert_eq!(host.surface.input_value(ElementId::PasswordInput), "admin");
    }
}
