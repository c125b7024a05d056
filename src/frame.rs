use crate::core::{CancelToken, FrameDriver};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop that runs until [`FrameLoop::stop`].
pub struct FrameLoop {
    token: CancelToken,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(mut frame: impl FnMut() + 'static) -> Self {
        let token = CancelToken::new();
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let mut driver = FrameDriver::new(token.clone());

        let tick: TickSlot = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let pending_tick = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            if driver.step(&mut frame) {
                pending_tick.set(request(&tick_clone));
            }
        }) as Box<dyn FnMut()>));
        pending.set(request(&tick));
        log::info!("[mesh] frame loop started");
        Self { token, pending }
    }

    /// Cancel the pending frame; the loop never runs again.
    pub fn stop(&self) {
        if !self.is_running() {
            return;
        }
        self.token.cancel();
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        log::info!("[mesh] frame loop stopped");
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }
}

fn request(tick: &TickSlot) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}
