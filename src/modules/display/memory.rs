use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;

use super::surface::{DisplaySurface, ElementId};

/// Snapshot of one element held by [`MemorySurface`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementState {
    pub text: String,
    pub class_name: String,
    pub styles: BTreeMap<String, String>,
    pub value: String,
}

/// Display surface kept entirely in memory.
///
/// Used by the terminal host, which renders it as text, and by tests.
#[derive(Debug, Default)]
pub struct MemorySurface {
    elements: HashMap<ElementId, ElementState>,
}

impl MemorySurface {
    /// Create a surface with every page element present and blank
    pub fn new() -> Self {
        let mut surface = Self::default();
        for id in ElementId::ALL {
            surface.elements.insert(id, ElementState::default());
        }
        surface
    }

    pub fn element(&self, id: ElementId) -> Option<&ElementState> {
        self.elements.get(&id)
    }

    /// Inline style property last set on an element
    pub fn style(&self, id: ElementId, property: &str) -> Option<&str> {
        self.elements
            .get(&id)
            .and_then(|element| element.styles.get(property))
            .map(String::as_str)
    }

    /// Elements in page order, for rendering
    pub fn elements(&self) -> Vec<(ElementId, &ElementState)> {
        self.elements
            .iter()
            .sorted_by_key(|(id, _)| **id)
            .map(|(id, state)| (*id, state))
            .collect()
    }

    fn entry(&mut self, id: ElementId) -> &mut ElementState {
        self.elements.entry(id).or_default()
    }
}

impl DisplaySurface for MemorySurface {
    fn text(&self, id: ElementId) -> String {
        self.elements
            .get(&id)
            .map(|element| element.text.clone())
            .unwrap_or_default()
    }

    fn set_text(&mut self, id: ElementId, text: &str) {
        self.entry(id).text = text.to_string();
    }

    fn set_style(&mut self, id: ElementId, property: &str, value: &str) {
        self.entry(id)
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn class_name(&self, id: ElementId) -> String {
        self.elements
            .get(&id)
            .map(|element| element.class_name.clone())
            .unwrap_or_default()
    }

    fn set_class_name(&mut self, id: ElementId, class: &str) {
        self.entry(id).class_name = class.to_string();
    }

    fn input_value(&self, id: ElementId) -> String {
        self.elements
            .get(&id)
            .map(|element| element.value.clone())
            .unwrap_or_default()
    }

    fn set_input_value(&mut self, id: ElementId, value: &str) {
        self.entry(id).value = value.to_string();
    }

    fn reset_form(&mut self, form: ElementId) {
        for control in form.form_controls() {
            self.entry(*control).value.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_surface_has_every_element() {
        let surface = MemorySurface::new();
        for id in ElementId::ALL {
            assert_eq!(surface.element(id), Some(&ElementState::default()));
        }
        let order: Vec<ElementId> = surface.elements().into_iter().map(|(id, _)| id).collect();
        assert_eq!(order, ElementId::ALL.to_vec());
    }

    #[test]
    fn test_text_style_and_class() {
        let mut surface = MemorySurface::new();
        surface.set_text(ElementId::LoadStatus, "ready");
        surface.set_style(ElementId::LoadStatus, "color", "#fff");
        surface.set_class_name(ElementId::AuthMessage, "message error");

        assert_eq!(surface.text(ElementId::LoadStatus), "ready");
        assert_eq!(surface.style(ElementId::LoadStatus, "color"), Some("#fff"));
        assert_eq!(surface.style(ElementId::LoadStatus, "font-weight"), None);
        assert_eq!(surface.class_name(ElementId::AuthMessage), "message error");
    }

    #[test]
    fn test_reset_form_only_touches_its_controls() {
        let mut surface = MemorySurface::new();
        surface.set_input_value(ElementId::LoginInput, "admin");
        surface.set_input_value(ElementId::PasswordInput, "secret");
        surface.set_text(ElementId::AuthMessage, "kept");

        surface.reset_form(ElementId::AuthForm);

        assert_eq!(surface.input_value(ElementId::LoginInput), "");
        assert_eq!(surface.input_value(ElementId::PasswordInput), "");
        assert_eq!(surface.text(ElementId::AuthMessage), "kept");
    }
}
