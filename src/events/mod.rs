pub mod click;
pub mod keyboard;
pub mod pointer;
pub mod resize;
pub mod scroll;

use crate::core::interaction::FocusMode;
use crate::core::{Role, TargetTable, Viewport};
use crate::dom::ElementRegistry;
use crate::gsap::GsapSink;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub use click::{wire_anchor_links, wire_join_buttons};
pub use keyboard::wire_keyboard_focus;
pub use pointer::{wire_card_tilt, wire_hover_targets, wire_pointer};
pub use resize::wire_resize;
pub use scroll::wire_header_scroll;

/// Shared handles captured by every listener.
#[derive(Clone)]
pub struct Page {
    pub window: web::Window,
    pub document: web::Document,
    pub registry: Rc<ElementRegistry>,
    pub targets: Rc<TargetTable>,
    pub sink: GsapSink,
    pub focus: Rc<RefCell<FocusMode>>,
    /// Viewport at startup; gates the desktop-only effects.
    pub initial_viewport: Viewport,
}

impl Page {
    /// Live elements resolved for `role`.
    pub fn elements(&self, role: Role) -> impl Iterator<Item = &web::Element> + '_ {
        self.targets
            .get(role)
            .iter()
            .filter_map(|id| self.registry.get(*id))
    }
}
