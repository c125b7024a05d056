use super::Page;
use crate::constants::KEYBOARD_NAV_CLASS;
use crate::dom;
use web_sys as web;

/// Tab switches the body into keyboard-focus styling.
pub fn wire_keyboard_focus(page: &Page) {
    let document = page.document.clone();
    let focus = page.focus.clone();
    dom::on(&page.document, "keydown", move |ev: web::KeyboardEvent| {
        if let Some(on) = focus.borrow_mut().on_key_down(&ev.key()) {
            log::debug!("[focus] keyboard navigation on");
            dom::set_body_class(&document, KEYBOARD_NAV_CLASS, on);
        }
    });
}
