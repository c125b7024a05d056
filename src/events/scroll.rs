use super::Page;
use crate::core::reveal::HeaderTracker;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Header tint follows the scroll position, recomputed once per frame.
pub fn wire_header_scroll(page: &Page) {
    let tracker = Rc::new(RefCell::new(HeaderTracker::new()));
    let page = page.clone();
    let window = page.window.clone();
    let target = window.clone();
    dom::on_passive(&target, "scroll", move |_: web::Event| {
        if !tracker.borrow_mut().on_scroll() {
            return;
        }
        let (t, p) = (tracker.clone(), page.clone());
        if dom::request_frame_once(&window, move || update_header(&t, &p)).is_none() {
            log::warn!("[scroll] no animation frame; updating header now");
            update_header(&tracker, &page);
        }
    });
}

fn update_header(tracker: &RefCell<HeaderTracker>, page: &Page) {
    let mut sink = page.sink.clone();
    let y = dom::scroll_y(&page.window);
    let before = tracker.borrow().tint();
    let tint = tracker.borrow_mut().on_frame(y, &page.targets, &mut sink);
    if before != Some(tint) {
        let updates = tracker.borrow().updates();
        log::debug!("[scroll] header tint {:?} at y={} (update {})", tint, y, updates);
    }
}
