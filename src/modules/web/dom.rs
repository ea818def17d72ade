use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::modules::display::{DisplaySurface, ElementId};

/// Display surface over the live document
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, id: ElementId) -> Option<Element> {
        let element = self.document.get_element_by_id(id.dom_id());
        if element.is_none() {
            warn!("Element #{} not found", id);
        }
        element
    }

    fn cast<T: JsCast>(&self, id: ElementId) -> Option<T> {
        let element = self.element(id)?;
        match element.dyn_into::<T>() {
            Ok(cast) => Some(cast),
            Err(_) => {
                warn!("Element #{} has an unexpected type", id);
                None
            }
        }
    }
}

impl DisplaySurface for DomSurface {
    fn text(&self, id: ElementId) -> String {
        self.element(id)
            .and_then(|element| element.text_content())
            .unwrap_or_default()
    }

    fn set_text(&mut self, id: ElementId, text: &str) {
        if let Some(element) = self.element(id) {
            element.set_text_content(Some(text));
        }
    }

    fn set_style(&mut self, id: ElementId, property: &str, value: &str) {
        if let Some(element) = self.cast::<HtmlElement>(id) {
            if let Err(e) = element.style().set_property(property, value) {
                warn!("Failed to set {} on #{}: {:?}", property, id, e);
            }
        }
    }

    fn class_name(&self, id: ElementId) -> String {
        self.element(id)
            .map(|element| element.class_name())
            .unwrap_or_default()
    }

    fn set_class_name(&mut self, id: ElementId, class: &str) {
        if let Some(element) = self.element(id) {
            element.set_class_name(class);
        }
    }

    fn input_value(&self, id: ElementId) -> String {
        self.cast::<HtmlInputElement>(id)
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn set_input_value(&mut self, id: ElementId, value: &str) {
        if let Some(input) = self.cast::<HtmlInputElement>(id) {
            input.set_value(value);
        }
    }

    fn reset_form(&mut self, form: ElementId) {
        if let Some(form) = self.cast::<HtmlFormElement>(form) {
            form.reset();
        }
    }
}
