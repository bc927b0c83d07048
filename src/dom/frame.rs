// frame.rs - requestAnimationFrame loop with a stop handle
//
// The step returns false to end the loop on its own. The closure only holds
// a weak reference back to the loop state, so dropping the handle frees it.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

type FrameCallback = RefCell<Option<Closure<dyn FnMut(f64)>>>;

struct LoopState {
    raf_id: Cell<Option<i32>>,
    stopped: Cell<bool>,
    callback: FrameCallback,
}

impl LoopState {
    fn request(&self) {
        let Some(window) = web_sys::window() else { return };
        let cb = self.callback.borrow();
        let Some(cb) = cb.as_ref() else { return };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.raf_id.set(Some(id)),
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {e:?}");
                self.stopped.set(true);
            }
        }
    }
}

pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn start(mut step: impl FnMut(f64) -> bool + 'static) -> Self {
        let state = Rc::new(LoopState {
            raf_id: Cell::new(None),
            stopped: Cell::new(false),
            callback: RefCell::new(None),
        });

        let weak: Weak<LoopState> = Rc::downgrade(&state);
        let cb = Closure::wrap(Box::new(move |ts: f64| {
            let Some(state) = weak.upgrade() else { return };
            state.raf_id.set(None);
            if state.stopped.get() {
                return;
            }
            if step(ts) {
                state.request();
            } else {
                state.stopped.set(true);
            }
        }) as Box<dyn FnMut(f64)>);

        *state.callback.borrow_mut() = Some(cb);
        state.request();
        Self { state }
    }

    pub fn stop(&self) {
        self.state.stopped.set(true);
        if let (Some(id), Some(window)) = (self.state.raf_id.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
    }

    pub fn is_running(&self) -> bool {
        !self.state.stopped.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
