use log::{error, info};

use super::messages::{
    show_message, MessageKind, AUTH_FAILED, AUTH_SUCCESS, FORM_CLEARED, LOAD_SUCCESS, SAVE_FAILED,
    SAVE_SUCCESS, STORAGE_CLEARED,
};
use super::validation::credentials_match;
use crate::modules::display::{DisplaySurface, ElementId, MESSAGE_CLASS};
use crate::modules::page::Host;
use crate::modules::storage::{
    clear_credentials, load_credentials, save_credentials, KeyValueStore, SavedCredentials,
};
use crate::modules::timer::TimerFacility;
use crate::modules::utils::logging::{format_login_attempt, log_auth_event, log_storage_operation};
use crate::{LOGIN_KEY, PASSWORD_KEY};

/// Login form behavior: validation, persistence of the accepted pair and
/// the load/clear buttons.
///
/// Holds no state of its own; everything lives in the display and the store.
#[derive(Debug, Default, Clone, Copy)]
pub struct AuthFormController;

impl AuthFormController {
    pub fn new() -> Self {
        Self
    }

    /// Check the pair and tell the user the outcome
    pub fn validate<D, S, T>(&self, host: &mut Host<D, S, T>, login: &str, password: &str) -> bool
    where
        D: DisplaySurface,
        S: KeyValueStore,
        T: TimerFacility,
    {
        let accepted = credentials_match(login, password);
        log_auth_event("validate", login, accepted, None);

        if accepted {
            show_message(host, AUTH_SUCCESS, MessageKind::Success);
        } else {
            show_message(host, AUTH_FAILED, MessageKind::Error);
        }
        accepted
    }

    /// Handle a form submission.
    ///
    /// The host has already suppressed the default navigation.
    pub fn submit<D, S, T>(&self, host: &mut Host<D, S, T>)
    where
        D: DisplaySurface,
        S: KeyValueStore,
        T: TimerFacility,
    {
        let login = host.surface.input_value(ElementId::LoginInput).trim().to_string();
        let password = host.surface.input_value(ElementId::PasswordInput).trim().to_string();

        info!("{}", format_login_attempt(&login));

        if self.validate(host, &login, &password) {
            self.persist(host, &login, &password);
        }
    }

    /// Save the pair to the store; failures are reported, never returned
    pub fn persist<D, S, T>(&self, host: &mut Host<D, S, T>, login: &str, password: &str)
    where
        D: DisplaySurface,
        S: KeyValueStore,
        T: TimerFacility,
    {
        let credentials = SavedCredentials::new(login, password);
        match save_credentials(&mut host.store, &credentials) {
            Ok(()) => {
                log_storage_operation("save", LOGIN_KEY, true, None);
                info!("Credentials saved to storage");
                show_message(host, SAVE_SUCCESS, MessageKind::Success);
            }
            Err(e) => {
                let details = e.to_string();
                log_storage_operation("save", LOGIN_KEY, false, Some(&details));
                error!("Failed to save credentials to storage: {}", e);
                show_message(host, SAVE_FAILED, MessageKind::Error);
            }
        }
    }

    /// Fill the form from the store when a complete record exists
    pub fn load_saved<D, S, T>(&self, host: &mut Host<D, S, T>)
    where
        D: DisplaySurface,
        S: KeyValueStore,
        T: TimerFacility,
    {
        match load_credentials(&host.store) {
            Some(saved) => {
                host.surface.set_input_value(ElementId::LoginInput, &saved.login);
                host.surface.set_input_value(ElementId::PasswordInput, &saved.password);
                info!("Saved credentials loaded from storage");
                show_message(host, LOAD_SUCCESS, MessageKind::Success);
            }
            None => {
                info!("No saved credentials in storage");
            }
        }
    }

    pub fn clear_form<D, S, T>(&self, host: &mut Host<D, S, T>)
    where
        D: DisplaySurface,
        S: KeyValueStore,
        T: TimerFacility,
    {
        host.surface.reset_form(ElementId::AuthForm);
        host.surface.set_class_name(ElementId::AuthMessage, MESSAGE_CLASS);
        info!("Form cleared");
        show_message(host, FORM_CLEARED, MessageKind::Success);
    }

    pub fn clear_storage<D, S, T>(&self, host: &mut Host<D, S, T>)
    where
        D: DisplaySurface,
        S: KeyValueStore,
        T: TimerFacility,
    {
        clear_credentials(&mut host.store);
        log_storage_operation("clear", LOGIN_KEY, true, Some(PASSWORD_KEY));
        info!("Saved credentials removed from storage");
        show_message(host, STORAGE_CLEARED, MessageKind::Success);
    }

    /// Startup diagnostic: looks at the login key only
    pub fn report_storage_status<D, S, T>(&self, host: &Host<D, S, T>) -> bool
    where
        S: KeyValueStore,
    {
        let present = host.store.contains(LOGIN_KEY);
        info!(
            "Saved data in storage: {}",
            if present { "present" } else { "absent" }
        );
        present
    }
}
