use super::Page;
use crate::core::interaction;
use crate::core::Role;
use crate::dom;
use web_sys as web;

/// In-page anchors scroll smoothly to their target, clear of the header.
pub fn wire_anchor_links(page: &Page) {
    for id in page.targets.get(Role::Anchor) {
        let Some(el) = page.registry.get(*id) else {
            continue;
        };
        let anchor = el.clone();
        let document = page.document.clone();
        let mut sink = page.sink.clone();
        dom::on(el, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let href = anchor.get_attribute("href").unwrap_or_default();
            let Some(selector) = interaction::anchor_selector(&href) else {
                return;
            };
            match document.query_selector(selector) {
                Ok(Some(target)) => {
                    if let Some(top) = dom::offset_top(&target) {
                        interaction::smooth_scroll_to(top, &mut sink);
                    }
                }
                Ok(None) => log::debug!("[nav] no target for {}", selector),
                Err(_) => log::debug!("[nav] unusable anchor {}", selector),
            }
        });
    }
}

/// Primary buttons inside cards pulse, then open their link in a new tab.
pub fn wire_join_buttons(page: &Page) {
    for id in page.targets.get(Role::PrimaryButton).iter().copied() {
        let Some(el) = page.registry.get(id) else {
            continue;
        };
        let button = el.clone();
        let window = page.window.clone();
        let mut sink = page.sink.clone();
        dom::on(el, "click", move |ev: web::MouseEvent| {
            let in_card = matches!(button.closest(".card"), Ok(Some(_)));
            if !in_card {
                return;
            }
            ev.prevent_default();
            interaction::press_feedback(id, &mut sink);
            let href = button.get_attribute("href");
            let Some(plan) = interaction::join_plan(in_card, href.as_deref()) else {
                log::warn!("[nav] card button without href");
                return;
            };
            let opener = window.clone();
            let scheduled = dom::set_timeout(&window, plan.delay_ms, move || {
                match opener.open_with_url_and_target_and_features(
                    &plan.url,
                    plan.target,
                    plan.features,
                ) {
                    Ok(_) => log::info!("[nav] opened {}", plan.url),
                    Err(e) => log::warn!("[nav] open failed: {:?}", e),
                }
            });
            if scheduled.is_none() {
                log::warn!("[nav] could not schedule navigation");
            }
        });
    }
}
