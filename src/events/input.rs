use super::drag::{wheel_delta_px, DragTracker};
use crate::app::SharedApp;
use crate::dom;
use folio_core::input::{DeltaEvent, DeltaSource};
use gloo::events::{EventListener, EventListenerOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wheel, touch and mouse-drag input all feed the same vertical delta
/// stream. The gallery decides whether the carousel or the open detail view
/// consumes it.
pub fn wire_delta_sources(window: &web::Window, app: SharedApp) {
    wire_wheel(window, app.clone());
    wire_touch(window, app.clone());
    wire_pointer(window, app);
}

pub fn wire_resize(window: &web::Window, app: SharedApp) {
    EventListener::new(window, "resize", move |_event: &web::Event| {
        if let Ok(mut app) = app.try_borrow_mut() {
            app.set_viewport(dom::viewport());
        }
    })
    .forget();
}

fn dispatch(app: &SharedApp, event: DeltaEvent) {
    // A listener can fire while the frame loop holds the app; drop the sample.
    if let Ok(mut app) = app.try_borrow_mut() {
        app.on_delta(event);
    }
}

fn wire_wheel(window: &web::Window, app: SharedApp) {
    EventListener::new_with_options(
        window,
        "wheel",
        EventListenerOptions::enable_prevent_default(),
        move |event: &web::Event| {
            let Some(ev) = event.dyn_ref::<web::WheelEvent>() else {
                return;
            };
            ev.prevent_default();
            let dy = wheel_delta_px(ev.delta_y(), ev.delta_mode(), dom::viewport().height);
            dispatch(&app, DeltaEvent::wheel(dy));
        },
    )
    .forget();
}

fn wire_touch(window: &web::Window, app: SharedApp) {
    let tracker = Rc::new(RefCell::new(DragTracker::default()));

    let t = tracker.clone();
    EventListener::new(window, "touchstart", move |event: &web::Event| {
        let Some(ev) = event.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        if let Some(touch) = ev.touches().get(0) {
            t.borrow_mut().begin(touch.client_y() as f32);
        }
    })
    .forget();

    let t = tracker.clone();
    EventListener::new_with_options(
        window,
        "touchmove",
        EventListenerOptions::enable_prevent_default(),
        move |event: &web::Event| {
            let Some(ev) = event.dyn_ref::<web::TouchEvent>() else {
                return;
            };
            let Some(touch) = ev.touches().get(0) else {
                return;
            };
            ev.prevent_default();
            let moved = t.borrow_mut().move_to(touch.client_y() as f32);
            if let Some(dy) = moved {
                dispatch(&app, DeltaEvent::drag(DeltaSource::Touch, dy));
            }
        },
    )
    .forget();

    for name in ["touchend", "touchcancel"] {
        let t = tracker.clone();
        EventListener::new(window, name, move |event: &web::Event| {
            let remaining = event
                .dyn_ref::<web::TouchEvent>()
                .map(|ev| ev.touches().length())
                .unwrap_or(0);
            if remaining == 0 {
                t.borrow_mut().end();
            }
        })
        .forget();
    }
}

/// Mouse drags only; touch pointers are already covered by touch events.
fn wire_pointer(window: &web::Window, app: SharedApp) {
    let tracker = Rc::new(RefCell::new(DragTracker::default()));

    let t = tracker.clone();
    EventListener::new(window, "pointerdown", move |event: &web::Event| {
        let Some(ev) = event.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if ev.pointer_type() == "mouse" && ev.button() == 0 {
            t.borrow_mut().begin(ev.client_y() as f32);
        }
    })
    .forget();

    let t = tracker.clone();
    EventListener::new(window, "pointermove", move |event: &web::Event| {
        let Some(ev) = event.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if ev.pointer_type() != "mouse" {
            return;
        }
        let moved = t.borrow_mut().move_to(ev.client_y() as f32);
        if let Some(dy) = moved {
            dispatch(&app, DeltaEvent::drag(DeltaSource::Pointer, dy));
        }
    })
    .forget();

    for name in ["pointerup", "pointercancel"] {
        let t = tracker.clone();
        EventListener::new(window, name, move |_event: &web::Event| {
            t.borrow_mut().end();
        })
        .forget();
    }
}
