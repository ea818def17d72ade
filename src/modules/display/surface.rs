use std::fmt;

/// Every element of the page the controllers touch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    LoadStatus,
    CounterValue,
    IncrementButton,
    DecrementButton,
    ResetButton,
    AuthForm,
    LoginInput,
    PasswordInput,
    AuthMessage,
    ClearFormButton,
    LoadSavedButton,
    ClearStorageButton,
}

impl ElementId {
    pub const ALL: [ElementId; 12] = [
        ElementId::LoadStatus,
        ElementId::CounterValue,
        ElementId::IncrementButton,
        ElementId::DecrementButton,
        ElementId::ResetButton,
        ElementId::AuthForm,
        ElementId::LoginInput,
        ElementId::PasswordInput,
        ElementId::AuthMessage,
        ElementId::ClearFormButton,
        ElementId::LoadSavedButton,
        ElementId::ClearStorageButton,
    ];

    /// The `id` attribute of the element in the page markup
    pub fn dom_id(self) -> &'static str {
        match self {
            ElementId::LoadStatus => "loadStatus",
            ElementId::CounterValue => "counterValue",
            ElementId::IncrementButton => "incrementBtn",
            ElementId::DecrementButton => "decrementBtn",
            ElementId::ResetButton => "resetBtn",
            ElementId::AuthForm => "authForm",
            ElementId::LoginInput => "login",
            ElementId::PasswordInput => "password",
            ElementId::AuthMessage => "authMessage",
            ElementId::ClearFormButton => "clearFormBtn",
            ElementId::LoadSavedButton => "loadSavedBtn",
            ElementId::ClearStorageButton => "clearStorageBtn",
        }
    }

    /// Controls reset together with this element when it is a form
    pub fn form_controls(self) -> &'static [ElementId] {
        match self {
            ElementId::AuthForm => &[ElementId::LoginInput, ElementId::PasswordInput],
            _ => &[],
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

/// Addressable display elements.
///
/// Reads and writes are synchronous and treated as always succeeding: a host
/// that cannot find an element logs it and carries on.
pub trait DisplaySurface {
    fn text(&self, id: ElementId) -> String;
    fn set_text(&mut self, id: ElementId, text: &str);

    /// Set one inline style property, e.g. `color`
    fn set_style(&mut self, id: ElementId, property: &str, value: &str);

    fn class_name(&self, id: ElementId) -> String;
    fn set_class_name(&mut self, id: ElementId, class: &str);

    /// Current value of an input control
    fn input_value(&self, id: ElementId) -> String;
    fn set_input_value(&mut self, id: ElementId, value: &str);

    /// Restore every control of a form to its default (empty) value
    fn reset_form(&mut self, form: ElementId);
}
