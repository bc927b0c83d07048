// timer.rs - Self-rescheduling setTimeout chain
//
// The step returns the delay until its next run, or None to finish.
// Stopping clears the pending timeout.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

struct TickState {
    timeout_id: Cell<Option<i32>>,
    stopped: Cell<bool>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl TickState {
    fn schedule(&self, delay_ms: u32) {
        let Some(window) = web_sys::window() else { return };
        let cb = self.callback.borrow();
        let Some(cb) = cb.as_ref() else { return };
        let res = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        );
        match res {
            Ok(id) => self.timeout_id.set(Some(id)),
            Err(e) => {
                log::warn!("setTimeout failed: {e:?}");
                self.stopped.set(true);
            }
        }
    }
}

pub struct Ticker {
    state: Rc<TickState>,
}

impl Ticker {
    pub fn start(first_delay_ms: u32, mut step: impl FnMut() -> Option<u32> + 'static) -> Self {
        let state = Rc::new(TickState {
            timeout_id: Cell::new(None),
            stopped: Cell::new(false),
            callback: RefCell::new(None),
        });

        let weak: Weak<TickState> = Rc::downgrade(&state);
        let cb = Closure::wrap(Box::new(move || {
            let Some(state) = weak.upgrade() else { return };
            state.timeout_id.set(None);
            if state.stopped.get() {
                return;
            }
            match step() {
                Some(delay) => state.schedule(delay),
                None => state.stopped.set(true),
            }
        }) as Box<dyn FnMut()>);

        *state.callback.borrow_mut() = Some(cb);
        state.schedule(first_delay_ms);
        Self { state }
    }

    pub fn stop(&self) {
        self.state.stopped.set(true);
        if let (Some(id), Some(window)) = (self.state.timeout_id.take(), web_sys::window()) {
            window.clear_timeout_with_handle(id);
        }
    }

    pub fn is_running(&self) -> bool {
        !self.state.stopped.get()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
