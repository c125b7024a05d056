use super::Page;
use crate::constants::KEYBOARD_NAV_CLASS;
use crate::core::motion;
use crate::core::{Rect, Role};
use crate::dom;
use glam::DVec2;
use web_sys as web;

#[inline]
fn client_pos(ev: &web::PointerEvent) -> DVec2 {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Cursor follower, desktop parallax, and pointer-down ending keyboard mode.
pub fn wire_pointer(page: &Page) {
    let parallax = page.initial_viewport.is_desktop();

    {
        let page = page.clone();
        let mut sink = page.sink.clone();
        let target = page.document.clone();
        dom::on(&target, "pointermove", move |ev: web::PointerEvent| {
            let pos = client_pos(&ev);
            motion::follow_pointer(pos, &page.targets, &mut sink);
            if parallax {
                let viewport = dom::viewport(&page.window);
                motion::apply_parallax(&page.targets, pos, viewport, &mut sink);
            }
        });
    }

    let document = page.document.clone();
    let focus = page.focus.clone();
    dom::on(&page.document, "pointerdown", move |_: web::PointerEvent| {
        if let Some(on) = focus.borrow_mut().on_pointer_down() {
            dom::set_body_class(&document, KEYBOARD_NAV_CLASS, on);
        }
    });
}

/// Cursor outline grows over links, buttons and cards.
pub fn wire_hover_targets(page: &Page) {
    for id in page.targets.get(Role::Interactive) {
        let Some(el) = page.registry.get(*id) else {
            continue;
        };
        let targets = page.targets.clone();
        let mut sink = page.sink.clone();
        dom::on(el, "pointerenter", move |_: web::PointerEvent| {
            motion::hover_enter(&targets, &mut sink);
        });
        let targets = page.targets.clone();
        let mut sink = page.sink.clone();
        dom::on(el, "pointerleave", move |_: web::PointerEvent| {
            motion::hover_leave(&targets, &mut sink);
        });
    }
}

/// 3D tilt of `[data-tilt]` cards under the pointer. Desktop only.
pub fn wire_card_tilt(page: &Page) {
    if !page.initial_viewport.is_desktop() {
        return;
    }
    for id in page.targets.get(Role::TiltCard).iter().copied() {
        let Some(el) = page.registry.get(id) else {
            continue;
        };
        let card = el.clone();
        let mut sink = page.sink.clone();
        dom::on(el, "pointermove", move |ev: web::PointerEvent| {
            let r = card.get_bounding_client_rect();
            let rect = Rect::new(r.left(), r.top(), r.width(), r.height());
            motion::tilt_card(id, client_pos(&ev), rect, &mut sink);
        });
        let mut sink = page.sink.clone();
        dom::on(el, "pointerleave", move |_: web::PointerEvent| {
            motion::reset_tilt(id, &mut sink);
        });
    }
    log::debug!(
        "[tilt] wired {} cards",
        page.targets.get(Role::TiltCard).len()
    );
}
