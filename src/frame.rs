use crate::app::SharedApp;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Longest step fed to the engine; a background tab resuming after seconds
/// of silence should not jump every animation to its end.
const MAX_FRAME_DT: Duration = Duration::from_millis(100);

pub struct FrameContext {
    pub app: SharedApp,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(app: SharedApp) -> Self {
        Self {
            app,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(MAX_FRAME_DT);
        self.last_instant = now;

        if let Ok(mut app) = self.app.try_borrow_mut() {
            app.frame(dt);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
