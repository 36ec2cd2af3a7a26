use crate::app::{with_app, SharedApp, WeakApp};
use folio_core::input::{is_close_key, step_for_key};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Arrow keys step the carousel. Lives for the whole page.
pub fn wire_global_keydown(window: &web::Window, app: SharedApp) {
    EventListener::new_with_options(
        window,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event: &web::Event| {
            let Some(ev) = event.dyn_ref::<web::KeyboardEvent>() else {
                return;
            };
            let key = ev.key();
            if step_for_key(&key).is_none() {
                return;
            }
            let Ok(mut app) = app.try_borrow_mut() else {
                return;
            };
            if app.on_key(&key) {
                ev.prevent_default();
                log::debug!("[keys] step {}", key);
            }
        },
    )
    .forget();
}

/// Escape closes the detail view. The returned handle is owned by the
/// overlay and unregisters when the overlay is torn down.
pub fn escape_listener(target: &web::EventTarget, app: WeakApp) -> EventListener {
    EventListener::new(target, "keydown", move |event: &web::Event| {
        let Some(ev) = event.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if !is_close_key(&ev.key()) {
            return;
        }
        with_app(&app, |app| {
            if app.request_close() {
                log::info!("[keys] escape closes detail");
            }
        });
    })
}
