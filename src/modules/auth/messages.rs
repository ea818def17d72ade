use std::time::Duration;

use crate::modules::display::{DisplaySurface, ElementId, MESSAGE_CLASS};
use crate::modules::page::Host;
use crate::modules::storage::KeyValueStore;
use crate::modules::timer::{TimerFacility, TimerTask};
use crate::MESSAGE_CLEAR_DELAY_MS;

pub const AUTH_SUCCESS: &str = "Authentication successful! Welcome, administrator.";
pub const AUTH_FAILED: &str = "Authentication failed. Invalid login or password.";
pub const SAVE_SUCCESS: &str = "Data saved for future sessions.";
pub const SAVE_FAILED: &str = "Failed to save data.";
pub const LOAD_SUCCESS: &str = "Saved data loaded into the form.";
pub const FORM_CLEARED: &str = "Form cleared.";
pub const STORAGE_CLEARED: &str = "Saved data removed from storage.";

/// Style of a transient message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// Full class attribute for a message of this kind
    pub fn class_name(self) -> String {
        let tag = match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        };
        format!("{} {}", MESSAGE_CLASS, tag)
    }
}

/// Show `text` in the auth message element and schedule its style reset.
///
/// Every call schedules its own reset timer; an earlier timer may therefore
/// neutralize a newer message slightly early. The reset only touches the
/// class, the text stays until replaced.
pub fn show_message<D, S, T>(host: &mut Host<D, S, T>, text: &str, kind: MessageKind)
where
    D: DisplaySurface,
    S: KeyValueStore,
    T: TimerFacility,
{
    host.surface.set_text(ElementId::AuthMessage, text);
    host.surface
        .set_class_name(ElementId::AuthMessage, &kind.class_name());
    host.timers.schedule(
        Duration::from_millis(MESSAGE_CLEAR_DELAY_MS),
        TimerTask::ResetMessageStyle,
    );
}

/// Timer callback of [`show_message`]
pub fn reset_message_style<D: DisplaySurface + ?Sized>(surface: &mut D) {
    surface.set_class_name(ElementId::AuthMessage, MESSAGE_CLASS);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::display::MemorySurface;
    use crate::modules::storage::MemoryStore;
    use crate::modules::timer::TimerQueue;

    fn host() -> Host<MemorySurface, MemoryStore, TimerQueue> {
        Host::new(MemorySurface::new(), MemoryStore::new(), TimerQueue::new())
    }

    #[test]
    fn test_class_names() {
        assert_eq!(MessageKind::Success.class_name(), "message success");
        assert_eq!(MessageKind::Error.class_name(), "message error");
    }

    #[test]
    fn test_show_message_schedules_reset() {
        let mut host = host();
        show_message(&mut host, "hello", MessageKind::Error);

        assert_eq!(host.surface.text(ElementId::AuthMessage), "hello");
        assert_eq!(host.surface.class_name(ElementId::AuthMessage), "message error");
        assert_eq!(host.timers.pending(), 1);

        let due = host.timers.advance(Duration::from_millis(MESSAGE_CLEAR_DELAY_MS));
        assert_eq!(due, vec![TimerTask::ResetMessageStyle]);

        reset_message_style(&mut host.surface);
        assert_eq!(host.surface.class_name(ElementId::AuthMessage), MESSAGE_CLASS);
        assert_eq!(host.surface.text(ElementId::AuthMessage), "hello");
    }

    #[test]
    fn test_each_message_gets_its_own_timer() {
        let mut host = host();
        show_message(&mut host, "one", MessageKind::Success);
        show_message(&mut host, "two", MessageKind::Success);
        assert_eq!(host.timers.pending(), 2);
    }
}
