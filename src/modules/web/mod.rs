//! Browser host: binds the page to the live DOM, `localStorage` and browser
//! timers. Only built for `wasm32`.

pub mod dom;
pub mod storage;
pub mod timers;

use std::cell::RefCell;
use std::rc::Rc;

use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, DocumentReadyState, Event, EventTarget};

use crate::modules::display::ElementId;
use crate::modules::page::{Button, Host, Page, PageEvent, ReadyState};

pub use dom::DomSurface;
pub use storage::BrowserStorage;
pub use timers::WebTimers;

/// The page as the browser host runs it
pub type WebPage = Page<DomSurface, BrowserStorage, WebTimers>;

type SharedPage = Rc<RefCell<WebPage>>;

/// Entry point of the wasm module
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is unavailable"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("document is unavailable"))?;

    let storage = BrowserStorage::from_window(&window);
    let surface = DomSurface::new(document.clone());
    let page: SharedPage = Rc::new_cyclic(|weak| {
        RefCell::new(Page::new(Host::new(
            surface,
            storage,
            WebTimers::new(weak.clone()),
        )))
    });

    let ready_state = match document.ready_state() {
        DocumentReadyState::Loading => ReadyState::Loading,
        DocumentReadyState::Interactive => ReadyState::Interactive,
        _ => ReadyState::Complete,
    };

    if ready_state == ReadyState::Loading {
        // Controls do not exist yet; bind them once the markup is parsed
        let bind_page = Rc::clone(&page);
        let bind_document = document.clone();
        let on_ready = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            if let Err(e) = bind_controls(&bind_document, &bind_page) {
                error!("Failed to bind page controls: {:?}", e);
            }
            bind_page.borrow_mut().dispatch(PageEvent::StructureReady);
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
    } else {
        bind_controls(&document, &page)?;
    }

    listen(&window, "load", &page, |_| PageEvent::ResourcesLoaded)?;

    page.borrow_mut().start(ready_state);
    info!("Page script attached ({:?})", ready_state);
    Ok(())
}

/// Wire every button and the form submission to the page
fn bind_controls(document: &Document, page: &SharedPage) -> Result<(), JsValue> {
    for button in Button::ALL {
        match document.get_element_by_id(button.element().dom_id()) {
            Some(element) => listen(&element, "click", page, move |_| PageEvent::Click(button))?,
            None => warn!("Button #{} not found", button.element()),
        }
    }

    match document.get_element_by_id(ElementId::AuthForm.dom_id()) {
        Some(form) => listen(&form, "submit", page, |event| {
            // Keep the browser from navigating away
            event.prevent_default();
            PageEvent::Submit
        })?,
        None => warn!("Form #{} not found", ElementId::AuthForm),
    }
    Ok(())
}

fn listen<F>(target: &EventTarget, event_type: &str, page: &SharedPage, to_event: F) -> Result<(), JsValue>
where
    F: Fn(&Event) -> PageEvent + 'static,
{
    let page = Rc::clone(page);
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let page_event = to_event(&event);
        page.borrow_mut().dispatch(page_event);
    });
    target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    callback.forget();
    Ok(())
}
