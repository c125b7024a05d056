use super::Page;
use crate::constants::RESIZE_DEBOUNCE_MS;
use crate::core::{DebouncePoll, DebounceTicket, Debouncer};
use crate::dom;
use crate::gsap;
use crate::render::MeshCanvas;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

struct Settle {
    debouncer: RefCell<Debouncer>,
    timer: Cell<Option<i32>>,
}

/// Resize the mesh canvas immediately; refresh scroll triggers once the
/// resizing settles.
pub fn wire_resize(page: &Page, mesh: Option<Rc<RefCell<MeshCanvas>>>) {
    let window = page.window.clone();
    let settle = Rc::new(Settle {
        debouncer: RefCell::new(Debouncer::new(RESIZE_DEBOUNCE_MS)),
        timer: Cell::new(None),
    });

    dom::on_passive(&page.window, "resize", move |_: web::Event| {
        let viewport = dom::viewport(&window);
        if let Some(mesh) = &mesh {
            mesh.borrow_mut().resize(viewport);
        }

        if let Some(handle) = settle.timer.take() {
            window.clear_timeout_with_handle(handle);
        }
        let ticket = settle.debouncer.borrow_mut().trigger(instant::now());
        let delay = settle.debouncer.borrow().delay_ms();
        arm(&window, settle.clone(), ticket, delay);
    });
}

fn arm(window: &web::Window, settle: Rc<Settle>, ticket: DebounceTicket, delay_ms: f64) {
    let w = window.clone();
    let s = settle.clone();
    let handle = dom::set_timeout(window, delay_ms.ceil() as i32, move || {
        s.timer.set(None);
        let poll = s.debouncer.borrow_mut().poll(ticket, instant::now());
        match poll {
            DebouncePoll::Fire => {
                log::debug!("[resize] refreshing scroll triggers");
                gsap::refresh_scroll_triggers();
            }
            DebouncePoll::Wait(ms) => arm(&w, s, ticket, ms),
            DebouncePoll::Stale => {}
        }
    });
    settle.timer.set(handle);
}
