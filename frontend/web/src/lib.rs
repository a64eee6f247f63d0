//! Browser entry point for the prediction page.
//!
//! Loaded as a wasm module by the page. On start it looks up the prediction
//! form, its submit button and the result container; if any of them is
//! missing the page is left untouched.

use std::{cell::RefCell, rc::Rc};

use js_sys::{Array, Function};
use submit::{Config, Controller, FormInput, HttpClient};
use tracing::{debug, error, info, warn};
use wasm_bindgen::{JsCast, prelude::*};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, FormData, HtmlFormElement};

pub mod view;

use view::DomView;

pub type PageController = Controller<HttpClient, DomView>;

thread_local! {
    static HANDLE: RefCell<Option<Handle>> = const { RefCell::new(None) };
}

/// A bound form. Dropping it detaches the submit listener.
pub struct Handle {
    _on_submit: Closure<dyn FnMut(Event)>,
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    if document.ready_state() != "loading" {
        install(&document);
        return;
    }

    let on_ready = Closure::once_into_js(move || {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            install(&document);
        }
    });

    if let Err(e) = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref::<Function>())
    {
        error!("Failed to wait for DOMContentLoaded: {e:?}");
    }
}

fn install(document: &Document) {
    let config = match page_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e}");
            return;
        }
    };

    match bind(document, config) {
        Some(handle) => {
            info!("Prediction form bound");
            HANDLE.with(|slot| *slot.borrow_mut() = Some(handle));
        }
        None => debug!("Prediction form not present, nothing bound"),
    }
}

/// Defaults plus the page's own origin as the service base.
fn page_config() -> Result<Config, submit::ConfigError> {
    let config = Config::load()?;

    let origin = web_sys::window().and_then(|window| window.location().origin().ok());
    Ok(match origin {
        Some(origin) => config.with_base_url(origin),
        None => config,
    })
}

/// Wires the controller to the page. Returns `None` when the form, the
/// submit control or the result region is missing.
pub fn bind(document: &Document, config: Config) -> Option<Handle> {
    let window = web_sys::window()?;
    let (form, submit, result) = config
        .elements
        .resolve(|id| document.get_element_by_id(id))?;
    let form = form.dyn_into::<HtmlFormElement>().ok()?;

    let client = match HttpClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create prediction client: {e}");
            return None;
        }
    };

    let controller = Rc::new(Controller::new(
        client,
        DomView::new(window, submit, result),
        &config,
    ));

    let on_submit = {
        let form = form.clone();

        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();

            let input = match read_form(&form) {
                Ok(input) => input,
                Err(e) => {
                    error!("Failed to read form: {e:?}");
                    return;
                }
            };

            let controller = controller.clone();
            spawn_local(async move {
                controller.handle_submit(input).await;
            });
        })
    };

    if let Err(e) =
        form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
    {
        warn!("Failed to listen for submit: {e:?}");
        return None;
    }

    Some(Handle {
        _on_submit: on_submit,
    })
}

fn read_form(form: &HtmlFormElement) -> Result<FormInput, JsValue> {
    let data = FormData::new_with_form(form)?;

    let Some(entries) = js_sys::try_iter(&data)? else {
        return Ok(FormInput::new());
    };

    let mut pairs = Vec::new();
    for entry in entries {
        let entry: Array = entry?.unchecked_into();

        if let Some(key) = entry.get(0).as_string() {
            pairs.push((key, entry.get(1).as_string()));
        }
    }

    Ok(FormInput::from_entries(pairs))
}
